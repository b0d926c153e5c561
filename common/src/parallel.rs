//! Parallel reductions over large index ranges.
//!
//! Splits a `u32` range into chunks and folds each chunk on the rayon pool,
//! then merges the per-chunk results. Used for sweeps where every element of
//! a range (e.g. every bit pattern of an `f32` interval) must be visited.

use std::ops::Range;

use rayon::prelude::*;

/// Multiplier for number of chunks relative to CPU threads.
/// Using 3x threads provides good load balancing when some chunks finish faster.
const CHUNKS_PER_THREAD: usize = 3;

/// Compute optimal chunk size for a range of `len` elements.
#[inline]
pub fn auto_chunk_size(len: u64) -> u64 {
    let num_chunks = (rayon::current_num_threads() * CHUNKS_PER_THREAD) as u64;
    (len / num_chunks).max(1)
}

/// Splits `range` into consecutive sub-ranges of at most `chunk_len` elements.
///
/// # Panics
///
/// Panics if `chunk_len` is 0.
pub fn split_range(range: Range<u32>, chunk_len: u64) -> Vec<Range<u32>> {
    assert!(chunk_len > 0, "chunk_len must be > 0");

    let mut chunks = Vec::new();
    let mut start = range.start as u64;
    let end = range.end as u64;
    while start < end {
        let chunk_end = (start + chunk_len).min(end);
        chunks.push(start as u32..chunk_end as u32);
        start = chunk_end;
    }
    chunks
}

/// Maps every chunk of `range` in parallel with `map` and merges the results with `reduce`.
///
/// `identity` is returned for an empty range. `reduce` must be associative; chunk
/// results are merged in no particular order.
pub fn par_fold_range<R, M, F>(range: Range<u32>, identity: R, map: M, reduce: F) -> R
where
    R: Send + Sync + Clone,
    M: Fn(Range<u32>) -> R + Sync,
    F: Fn(R, R) -> R + Sync,
{
    let len = range.end.saturating_sub(range.start) as u64;
    let chunks = split_range(range, auto_chunk_size(len));

    chunks
        .into_par_iter()
        .map(&map)
        .reduce(|| identity.clone(), &reduce)
}
