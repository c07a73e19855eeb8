use std::path::PathBuf;
use std::thread;

use crate::results::PartialResult;
use crate::scan::{scan_chunk, KeywordSet};

/// Isolated-worker driver: message-passing merge, no shared memory.
///
/// Each worker scans its chunk into a private [`PartialResult`] and sends it
/// over the handoff channel, the only synchronization primitive involved.
/// The driver drops its own sender after spawning, then performs one
/// blocking receive per delivered result; the loop ends when the last
/// worker's sender is dropped, so even a crashed worker cannot leave the
/// driver waiting forever. The scope joins every worker before returning
/// and re-raises any worker panic.
pub fn run(chunks: &[&[PathBuf]], keywords: &KeywordSet) -> PartialResult {
    let mut merged = PartialResult::for_keywords(keywords);
    let (tx, rx) = crossbeam_channel::unbounded::<PartialResult>();

    thread::scope(|scope| {
        for &chunk in chunks {
            let tx = tx.clone();
            scope.spawn(move || {
                let part = scan_chunk(chunk, keywords);
                // The receiver lives until every worker is done; a failed
                // send means the driver itself is unwinding.
                let _ = tx.send(part);
            });
        }
        drop(tx);

        for part in rx {
            merged.absorb(part);
        }
    });

    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn keyword_set(keywords: &[&str]) -> KeywordSet {
        KeywordSet::new(&keywords.iter().map(|s| s.to_string()).collect::<Vec<_>>())
    }

    #[test]
    fn test_merges_all_chunks() {
        let dir = tempdir().unwrap();
        let a = dir.path().join("a.txt");
        let b = dir.path().join("b.txt");
        let c = dir.path().join("c.txt");
        fs::write(&a, "hello Rose garden").unwrap();
        fs::write(&b, "no match here").unwrap();
        fs::write(&c, "ROSE is a flower").unwrap();

        let first = vec![a.clone(), b];
        let second = vec![c.clone()];
        let merged = run(&[&first, &second], &keyword_set(&["rose"]));

        let mut found = merged.matches()["rose"].clone();
        found.sort();
        let mut expected = vec![
            a.to_string_lossy().into_owned(),
            c.to_string_lossy().into_owned(),
        ];
        expected.sort();
        assert_eq!(found, expected);
    }

    #[test]
    fn test_zero_chunks_still_reports_every_keyword() {
        let merged = run(&[], &keyword_set(&["rose", "lily"]));
        assert_eq!(merged.matches().len(), 2);
        assert!(merged.matches()["rose"].is_empty());
        assert!(merged.matches()["lily"].is_empty());
    }

    #[test]
    fn test_bad_file_in_one_chunk_leaves_other_chunks_intact() {
        let dir = tempdir().unwrap();
        let good = dir.path().join("good.txt");
        fs::write(&good, "a quiet rose").unwrap();
        let stale = dir.path().join("gone.txt");

        let broken = vec![stale];
        let healthy = vec![good.clone()];
        let merged = run(&[&broken, &healthy], &keyword_set(&["rose"]));

        assert_eq!(
            merged.matches()["rose"],
            vec![good.to_string_lossy().into_owned()]
        );
    }
}
