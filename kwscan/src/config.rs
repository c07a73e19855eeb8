use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::str::FromStr;

use crate::errors::SearchError;
use crate::walk;

/// Configuration for a search invocation.
///
/// A worker count of 0 means "one worker per detected CPU core"; any positive
/// value is used as-is. The file pattern is a glob relative to the root
/// directory and defaults to every `.txt` file at any depth.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// The root directory to start searching from
    pub root_path: PathBuf,

    /// Glob pattern selecting the files to scan, relative to the root
    #[serde(default = "default_file_pattern")]
    pub file_pattern: String,

    /// Keywords to search for (case-insensitive substring match)
    pub keywords: Vec<String>,

    /// Number of workers; 0 substitutes the detected parallelism level
    #[serde(default)]
    pub workers: usize,

    /// Which concurrency model drives the scan
    #[serde(default)]
    pub mode: ExecutionMode,
}

fn default_file_pattern() -> String {
    walk::DEFAULT_FILE_PATTERN.to_string()
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            root_path: PathBuf::from("."),
            file_pattern: default_file_pattern(),
            keywords: vec![],
            workers: 0,
            mode: ExecutionMode::default(),
        }
    }
}

impl SearchConfig {
    /// Creates a new configuration with the given root path and keywords
    pub fn new(root_path: impl Into<PathBuf>, keywords: Vec<String>) -> Self {
        SearchConfig {
            root_path: root_path.into(),
            keywords,
            ..Default::default()
        }
    }

    /// Builder method to set the file-selection glob pattern
    pub fn with_file_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.file_pattern = pattern.into();
        self
    }

    /// Builder method to set the worker count (0 = auto)
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    /// Builder method to set the execution mode
    pub fn with_mode(mut self, mode: ExecutionMode) -> Self {
        self.mode = mode;
        self
    }

    /// The effective worker count: the configured value clamped to at least 1,
    /// with 0 standing in for the number of CPU cores.
    pub fn worker_count(&self) -> NonZeroUsize {
        NonZeroUsize::new(self.workers)
            .or_else(|| NonZeroUsize::new(num_cpus::get()))
            .unwrap_or(NonZeroUsize::MIN)
    }
}

/// The two interchangeable concurrency models for the scan phase.
///
/// Both spawn one OS thread per chunk; they differ only in how partial
/// results reach the aggregate: a handoff channel with no shared memory, or
/// a single lock-guarded result map.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionMode {
    /// Workers own their memory and hand results over a channel
    #[default]
    Isolated,
    /// Workers merge into one shared result map under a mutex
    Shared,
}

impl fmt::Display for ExecutionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ExecutionMode::Isolated => "isolated",
            ExecutionMode::Shared => "shared",
        })
    }
}

impl FromStr for ExecutionMode {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "isolated" => Ok(ExecutionMode::Isolated),
            "shared" => Ok(ExecutionMode::Shared),
            _ => Err(SearchError::invalid_mode(s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = SearchConfig::default();
        assert_eq!(config.file_pattern, "**/*.txt");
        assert_eq!(config.workers, 0);
        assert_eq!(config.mode, ExecutionMode::Isolated);
    }

    #[test]
    fn test_builder_methods() {
        let config = SearchConfig::new("data", vec!["rose".to_string()])
            .with_file_pattern("**/*.log")
            .with_workers(3)
            .with_mode(ExecutionMode::Shared);

        assert_eq!(config.root_path, PathBuf::from("data"));
        assert_eq!(config.keywords, vec!["rose"]);
        assert_eq!(config.file_pattern, "**/*.log");
        assert_eq!(config.workers, 3);
        assert_eq!(config.mode, ExecutionMode::Shared);
    }

    #[test]
    fn test_worker_count_substitutes_default() {
        let config = SearchConfig::default();
        assert!(config.worker_count().get() >= 1);

        let config = SearchConfig::default().with_workers(7);
        assert_eq!(config.worker_count().get(), 7);
    }

    #[test]
    fn test_mode_parsing() {
        assert_eq!(
            "isolated".parse::<ExecutionMode>().unwrap(),
            ExecutionMode::Isolated
        );
        assert_eq!(
            "SHARED".parse::<ExecutionMode>().unwrap(),
            ExecutionMode::Shared
        );
        assert!("procs".parse::<ExecutionMode>().is_err());
    }

    #[test]
    fn test_mode_round_trip() {
        for mode in [ExecutionMode::Isolated, ExecutionMode::Shared] {
            assert_eq!(mode.to_string().parse::<ExecutionMode>().unwrap(), mode);
        }
    }
}
