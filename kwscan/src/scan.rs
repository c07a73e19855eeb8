use std::fs;
use std::path::PathBuf;
use tracing::debug;

use crate::results::PartialResult;

/// A requested keyword paired with the lower-cased form used for matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordTerm {
    original: String,
    folded: String,
}

impl KeywordTerm {
    /// The keyword as supplied by the caller; used as the result key
    pub fn original(&self) -> &str {
        &self.original
    }

    /// The lower-cased form compared against lower-cased file content
    pub fn folded(&self) -> &str {
        &self.folded
    }
}

/// The deduplicated keyword list with folds computed once up front.
///
/// Exact duplicates are dropped (first occurrence wins); keywords differing
/// only in case stay distinct, since the caller asked for them as separate
/// result keys even though they match identically.
#[derive(Debug, Clone, Default)]
pub struct KeywordSet {
    terms: Vec<KeywordTerm>,
}

impl KeywordSet {
    pub fn new(keywords: &[String]) -> Self {
        let mut terms: Vec<KeywordTerm> = Vec::with_capacity(keywords.len());
        for keyword in keywords {
            if terms.iter().any(|term| term.original == *keyword) {
                continue;
            }
            terms.push(KeywordTerm {
                original: keyword.clone(),
                folded: keyword.to_lowercase(),
            });
        }
        KeywordSet { terms }
    }

    pub fn terms(&self) -> &[KeywordTerm] {
        &self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

/// Scans one chunk of files for the keyword set.
///
/// Each file is read whole with permissive decoding (undecodable bytes are
/// replaced, never fatal) and lower-cased once; every keyword is then tested
/// for substring containment. Matching paths are appended in chunk order.
/// A file that cannot be read is skipped and the rest of the chunk still
/// scans; the caller sees no error for it.
pub fn scan_chunk(files: &[PathBuf], keywords: &KeywordSet) -> PartialResult {
    let mut out = PartialResult::for_keywords(keywords);

    for path in files {
        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(err) => {
                debug!("skipping unreadable file {}: {}", path.display(), err);
                continue;
            }
        };
        let haystack = String::from_utf8_lossy(&bytes).to_lowercase();

        for term in keywords.terms() {
            if haystack.contains(term.folded()) {
                out.record(term.original(), path);
            }
        }
    }

    out
}
