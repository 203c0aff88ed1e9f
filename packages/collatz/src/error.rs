use thiserror::Error;

#[derive(Error, Debug)]
pub enum CollatzError {
    #[error("limit must be greater than 1, got {limit}")]
    InvalidLimit { limit: u64 },
    #[error("Collatz chains start at 1 or above, got 0")]
    InvalidStart,
    #[error("chunk size must be at least 1")]
    InvalidChunkSize,
    /// `3n + 1` no longer fits in a `u64`.
    #[error("chain starting at {start} overflows u64 after reaching {value}")]
    Overflow { start: u64, value: u64 },
    #[error("failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}
