use std::ops::Range;

use tracing::debug;

use crate::{collatz_length, CollatzError, Memo};

/// Upper bound on memo entries allocated up front by [`find_longest`].
const MAX_PRESIZE: usize = 1 << 24;

/// The starting value with the longest chain seen so far.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Longest {
    pub number: u64,
    pub length: u32,
}

impl Longest {
    /// Record a candidate, keeping the current best unless `length` is strictly greater.
    ///
    /// Returns true if the candidate replaced the best.
    pub fn observe(&mut self, number: u64, length: u32) -> bool {
        if length > self.length {
            self.number = number;
            self.length = length;
            true
        } else {
            false
        }
    }

    /// Combine with the result of a later range; ties keep `self`.
    pub fn merge(self, later: Longest) -> Longest {
        if later.length > self.length {
            later
        } else {
            self
        }
    }
}

/// Scan an ascending range of starting values against `memo`.
pub fn scan_range(range: Range<u64>, memo: &mut Memo) -> Result<Longest, CollatzError> {
    let mut best = Longest::default();
    for n in range {
        let length = collatz_length(n, memo)?;
        best.observe(n, length);
    }
    Ok(best)
}

/// Find the number below `limit` with the longest chain.
///
/// # Example
///
/// ```
/// use collatz::find_longest;
///
/// let best = find_longest(10).unwrap();
/// assert_eq!((best.number, best.length), (9, 19));
/// ```
pub fn find_longest(limit: u64) -> Result<Longest, CollatzError> {
    validate_limit(limit)?;
    let capacity = usize::try_from(limit).map_or(MAX_PRESIZE, |l| l.min(MAX_PRESIZE));
    let mut memo = Memo::with_capacity(capacity);
    find_longest_with_memo(limit, &mut memo)
}

/// Like [`find_longest`], but reuses a caller-owned memo across calls.
#[tracing::instrument(skip(memo), level = "debug")]
pub fn find_longest_with_memo(limit: u64, memo: &mut Memo) -> Result<Longest, CollatzError> {
    validate_limit(limit)?;
    let best = scan_range(1..limit, memo)?;
    debug!(
        number = best.number,
        length = best.length,
        memo_size = memo.len(),
        "sequential scan finished"
    );
    Ok(best)
}

pub(crate) fn validate_limit(limit: u64) -> Result<(), CollatzError> {
    if limit <= 1 {
        return Err(CollatzError::InvalidLimit { limit });
    }
    Ok(())
}
