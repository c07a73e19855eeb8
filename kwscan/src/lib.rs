//! Concurrent bulk keyword search across directory trees of text files.

pub mod config;
pub mod engine;
pub mod errors;
pub mod fixture;
pub mod partition;
pub mod results;
pub mod scan;
pub mod walk;

pub use config::{ExecutionMode, SearchConfig};
pub use errors::{SearchError, SearchResult};
pub use results::{AggregateResult, KeywordMatches, PartialResult};
pub use scan::KeywordSet;
