//! The raw Collatz transition and an iterator over whole chains.

use crate::CollatzError;

/// Applies one Collatz transition: `n / 2` for even `n`, `3n + 1` for odd `n`.
///
/// Returns None if `3n + 1` overflows u64.
///
/// # Example
///
/// ```
/// use collatz::step;
///
/// assert_eq!(step(6), Some(3));
/// assert_eq!(step(3), Some(10));
/// assert_eq!(step(u64::MAX), None);
/// ```
pub fn step(n: u64) -> Option<u64> {
    if n % 2 == 0 {
        Some(n / 2)
    } else {
        n.checked_mul(3)?.checked_add(1)
    }
}

/// Iterator over the chain starting at some value, ending with 1.
///
/// Stops early (without yielding 1) if a value would overflow u64.
///
/// # Example
///
/// ```
/// use collatz::CollatzSequence;
///
/// let chain: Vec<u64> = CollatzSequence::new(6).collect();
/// assert_eq!(chain, vec![6, 3, 10, 5, 16, 8, 4, 2, 1]);
/// ```
pub struct CollatzSequence {
    current: Option<u64>,
}

impl CollatzSequence {
    /// A start of 0 yields nothing.
    pub fn new(start: u64) -> Self {
        CollatzSequence {
            current: (start > 0).then_some(start),
        }
    }
}

impl Iterator for CollatzSequence {
    type Item = u64;

    fn next(&mut self) -> Option<Self::Item> {
        let curr = self.current?;
        self.current = if curr == 1 { None } else { step(curr) };
        Some(curr)
    }
}

/// Returns the chain starting at `start`: start, ..., 4, 2, 1.
pub fn collatz_sequence(start: u64) -> CollatzSequence {
    CollatzSequence::new(start)
}

/// Chain length without any memoization, used as a reference.
///
/// Counts transitions down to 1, except that 1 itself has length 1.
///
/// # Example
///
/// ```
/// use collatz::naive_length;
///
/// assert_eq!(naive_length(1).unwrap(), 1);
/// assert_eq!(naive_length(2).unwrap(), 1);
/// assert_eq!(naive_length(9).unwrap(), 19);
/// ```
pub fn naive_length(start: u64) -> Result<u32, CollatzError> {
    match start {
        0 => Err(CollatzError::InvalidStart),
        1 => Ok(1),
        _ => {
            let mut n = start;
            let mut steps = 0;
            while n != 1 {
                n = step(n).ok_or(CollatzError::Overflow { start, value: n })?;
                steps += 1;
            }
            Ok(steps)
        }
    }
}
