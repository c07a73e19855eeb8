use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::path::Path;
use std::time::Duration;

use crate::scan::KeywordSet;

/// Keyword (original casing) to the paths of the files containing it.
pub type KeywordMatches = BTreeMap<String, Vec<String>>;

/// One worker's keyword→paths mapping, scoped to a single chunk.
///
/// Pre-populated with an empty list per keyword so every requested keyword
/// survives into the aggregate even when nothing matched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartialResult {
    matches: KeywordMatches,
}

impl PartialResult {
    /// Creates an empty result carrying one entry per requested keyword
    pub fn for_keywords(keywords: &KeywordSet) -> Self {
        let matches = keywords
            .terms()
            .iter()
            .map(|term| (term.original().to_string(), Vec::new()))
            .collect();
        PartialResult { matches }
    }

    /// Appends a matching file path under the given keyword
    pub fn record(&mut self, keyword: &str, path: &Path) {
        self.matches
            .entry(keyword.to_string())
            .or_default()
            .push(path.to_string_lossy().into_owned());
    }

    /// Merges another partial result into this one, extending each keyword's
    /// path list
    pub fn absorb(&mut self, other: PartialResult) {
        for (keyword, paths) in other.matches {
            self.matches.entry(keyword).or_default().extend(paths);
        }
    }

    pub fn matches(&self) -> &KeywordMatches {
        &self.matches
    }

    pub fn into_matches(self) -> KeywordMatches {
        self.matches
    }
}

/// The merged, final result of one search invocation.
///
/// Serializes to the output document shape:
/// `{"results": {...}, "elapsed_seconds": <f64>}`.
#[derive(Debug, Clone, Serialize)]
pub struct AggregateResult {
    /// Every requested keyword mapped to the paths of the files containing it
    #[serde(rename = "results")]
    pub matches: KeywordMatches,

    /// Wall-clock duration of the concurrent scan phase only
    #[serde(rename = "elapsed_seconds", serialize_with = "serialize_secs")]
    pub elapsed: Duration,
}

fn serialize_secs<S: Serializer>(elapsed: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(elapsed.as_secs_f64())
}

impl AggregateResult {
    pub fn new(matches: KeywordMatches, elapsed: Duration) -> Self {
        AggregateResult { matches, elapsed }
    }

    /// Elapsed scan time in seconds
    pub fn elapsed_seconds(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}
