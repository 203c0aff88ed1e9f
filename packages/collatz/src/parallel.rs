//! Longest-chain search split across a rayon thread pool.
//!
//! The range `[1, limit)` is cut into contiguous chunks. Every worker scans
//! its chunks against a private [`Memo`], so nothing mutable is shared between
//! threads. Chunk results are folded back in ascending chunk order, which makes
//! tie-breaking identical to the sequential scan.

use std::ops::Range;

use rayon::prelude::*;
use tracing::{debug, info, trace};

use crate::scan::validate_limit;
use crate::{scan_range, CollatzError, Longest, Memo};

/// Number of starting values handed to a worker at a time.
pub const DEFAULT_CHUNK_SIZE: u64 = 16_384;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParallelConfig {
    /// Worker count; None uses rayon's default of one per logical CPU.
    pub threads: Option<usize>,
    pub chunk_size: u64,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        ParallelConfig {
            threads: None,
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

/// Build a dedicated pool with a fixed number of workers.
pub fn build_thread_pool(threads: Option<usize>) -> Result<rayon::ThreadPool, CollatzError> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads.unwrap_or(0))
        .thread_name(|i| format!("collatz-worker-{}", i))
        .build()?;
    Ok(pool)
}

/// Parallel counterpart of [`find_longest`](crate::find_longest); returns the same answer.
///
/// Any error from a worker aborts the whole search.
///
/// # Example
///
/// ```
/// use collatz::{find_longest_parallel, ParallelConfig};
///
/// let config = ParallelConfig { threads: Some(2), chunk_size: 3 };
/// let best = find_longest_parallel(10, &config).unwrap();
/// assert_eq!((best.number, best.length), (9, 19));
/// ```
#[tracing::instrument(level = "debug")]
pub fn find_longest_parallel(limit: u64, config: &ParallelConfig) -> Result<Longest, CollatzError> {
    validate_limit(limit)?;
    let chunk_size = config.chunk_size;
    if chunk_size == 0 {
        return Err(CollatzError::InvalidChunkSize);
    }

    let pool = build_thread_pool(config.threads)?;
    let best = scan_chunks(1..limit, chunk_size, &pool)?;
    debug!(number = best.number, length = best.length, "parallel scan finished");
    Ok(best)
}

fn scan_chunks(
    range: Range<u64>,
    chunk_size: u64,
    pool: &rayon::ThreadPool,
) -> Result<Longest, CollatzError> {
    let Range { start: first, end } = range;
    let chunk_count = end.saturating_sub(first).div_ceil(chunk_size);
    info!(
        first,
        end,
        chunk_count,
        threads = pool.current_num_threads(),
        "starting parallel scan"
    );

    let partials = pool.install(|| {
        (0..chunk_count)
            .into_par_iter()
            .map_init(Memo::new, |memo, index| -> Result<Longest, CollatzError> {
                let start = first + index * chunk_size;
                let stop = start.saturating_add(chunk_size).min(end);
                let best = scan_range(start..stop, memo)?;
                trace!(start, stop, number = best.number, length = best.length, "chunk done");
                Ok(best)
            })
            .collect::<Result<Vec<Longest>, CollatzError>>()
    })?;

    Ok(partials.into_iter().fold(Longest::default(), Longest::merge))
}
