pub mod error;
pub mod evaluator;
pub mod memo;
pub mod parallel;
pub mod scan;
pub mod sequence;

pub use error::CollatzError;
pub use evaluator::collatz_length;
pub use memo::Memo;
pub use parallel::{build_thread_pool, find_longest_parallel, ParallelConfig, DEFAULT_CHUNK_SIZE};
pub use scan::{find_longest, find_longest_with_memo, scan_range, Longest};
pub use sequence::{collatz_sequence, naive_length, step, CollatzSequence};
