//! The concurrency driver: worker lifecycle for the parallel scan phase.
//!
//! Two interchangeable implementations drive the same scanner over the same
//! chunks and must produce result sets identical up to ordering within each
//! keyword's path list:
//!
//! - [`isolated`]: every worker owns its memory and hands its
//!   [`PartialResult`](crate::results::PartialResult) to the driver over a
//!   channel. No locks, because nothing is shared.
//! - [`shared`]: workers merge into one result map guarded by a single
//!   mutex. The critical section is the merge alone; scanning always runs
//!   lock-free.
//!
//! Both spawn one scoped OS thread per chunk and block until every worker
//! has finished, so the returned aggregate is complete and safe to read
//! without further synchronization. Chunk assignment is deterministic;
//! worker *completion* order is not, so the order of paths within a
//! keyword's list may vary between runs. A panicking worker is not
//! swallowed: the scope re-raises it in the driver once its siblings have
//! been joined, failing the run instead of silently undercounting.
//!
//! Elapsed time covers worker start through worker completion only;
//! enumeration and output formatting are excluded.

pub mod isolated;
pub mod shared;

use std::time::Instant;
use tracing::{debug, info};

use crate::config::{ExecutionMode, SearchConfig};
use crate::errors::SearchResult;
use crate::partition;
use crate::results::{AggregateResult, KeywordMatches};
use crate::scan::KeywordSet;
use crate::walk;

/// Performs a concurrent keyword search as described by the configuration.
///
/// Enumerates and partitions the file list, runs the configured driver
/// variant, and returns the merged result together with the scan-phase
/// duration.
pub fn search(config: &SearchConfig) -> SearchResult<AggregateResult> {
    info!("starting search for keywords: {:?}", config.keywords);

    let keywords = KeywordSet::new(&config.keywords);
    if keywords.is_empty() {
        debug!("no keywords requested, returning empty result");
        return Ok(AggregateResult::new(
            KeywordMatches::new(),
            std::time::Duration::ZERO,
        ));
    }

    let files = walk::files(&config.root_path, &config.file_pattern)?;
    let workers = config.worker_count();
    let chunks = partition::chunks(&files, workers);
    debug!(
        "scanning {} files in {} chunks ({} mode)",
        files.len(),
        chunks.len(),
        config.mode
    );

    let started = Instant::now();
    let merged = match config.mode {
        ExecutionMode::Isolated => isolated::run(&chunks, &keywords),
        ExecutionMode::Shared => shared::run(&chunks, &keywords),
    };
    let elapsed = started.elapsed();

    info!(
        "scan complete in {:.3}s across {} workers",
        elapsed.as_secs_f64(),
        chunks.len()
    );
    Ok(AggregateResult::new(merged.into_matches(), elapsed))
}
