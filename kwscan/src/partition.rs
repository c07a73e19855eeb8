use std::num::NonZeroUsize;
use std::path::PathBuf;

/// Splits the sorted file list into at most `workers` contiguous chunks.
///
/// Chunk size is `ceil(len / workers)`, so sizes differ by at most one and
/// the final chunk may be shorter. An empty file list yields no chunks.
/// The chunks borrow from the input; together they cover every file exactly
/// once.
pub fn chunks(files: &[PathBuf], workers: NonZeroUsize) -> Vec<&[PathBuf]> {
    if files.is_empty() {
        return Vec::new();
    }
    let size = files.len().div_ceil(workers.get());
    files.chunks(size).collect()
}
