use std::path::PathBuf;
use std::sync::{Mutex, PoisonError};
use std::thread;

use crate::results::PartialResult;
use crate::scan::{scan_chunk, KeywordSet};

/// Shared-memory driver: one result map, one lock, merge-only critical
/// sections.
///
/// The shared map starts pre-populated with an empty list per keyword. Each
/// worker scans its chunk into a private [`PartialResult`] first, then takes
/// the mutex just long enough to extend the shared lists — file I/O never
/// happens under the lock. The scope joins every worker before the map is
/// read, so no synchronization is needed afterwards. A poisoned lock only
/// means a sibling worker panicked; its partial merge is still coherent and
/// the scope is about to re-raise that panic, so the guard is recovered
/// rather than unwrapped.
pub fn run(chunks: &[&[PathBuf]], keywords: &KeywordSet) -> PartialResult {
    let shared = Mutex::new(PartialResult::for_keywords(keywords));

    thread::scope(|scope| {
        for &chunk in chunks {
            let shared = &shared;
            scope.spawn(move || {
                let part = scan_chunk(chunk, keywords);
                let mut merged = shared.lock().unwrap_or_else(PoisonError::into_inner);
                merged.absorb(part);
            });
        }
    });

    shared.into_inner().unwrap_or_else(PoisonError::into_inner)
}
