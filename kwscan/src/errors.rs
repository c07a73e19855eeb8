use std::path::PathBuf;
use thiserror::Error;

/// Result type for search operations
pub type SearchResult<T> = Result<T, SearchError>;

/// Errors that can occur while setting up or running a search
#[derive(Error, Debug)]
pub enum SearchError {
    #[error("root path does not exist or is not a directory: {0}")]
    InvalidRoot(PathBuf),
    #[error("invalid file pattern: {0}")]
    InvalidPattern(#[from] glob::PatternError),
    #[error("unknown execution mode: {0:?} (expected \"isolated\" or \"shared\")")]
    InvalidMode(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl SearchError {
    pub fn invalid_root(path: impl Into<PathBuf>) -> Self {
        Self::InvalidRoot(path.into())
    }

    pub fn invalid_mode(mode: impl Into<String>) -> Self {
        Self::InvalidMode(mode.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_error_creation() {
        let err = SearchError::invalid_root(Path::new("no/such/dir"));
        assert!(matches!(err, SearchError::InvalidRoot(_)));

        let err = SearchError::invalid_mode("threads");
        assert!(matches!(err, SearchError::InvalidMode(_)));
    }

    #[test]
    fn test_error_messages() {
        let err = SearchError::invalid_root("data");
        assert_eq!(
            err.to_string(),
            "root path does not exist or is not a directory: data"
        );

        let err = SearchError::invalid_mode("procs");
        assert_eq!(
            err.to_string(),
            "unknown execution mode: \"procs\" (expected \"isolated\" or \"shared\")"
        );
    }
}
