use crate::sequence::step;
use crate::{CollatzError, Memo};

/// Chain length of `start`, reusing and extending `memo`.
///
/// Walks the chain until it reaches 1 or a value whose length is already
/// known, then records the result for `start` only. The length of `start ≥ 2`
/// is the number of transitions down to 1; the length of 1 is its base case, 1.
///
/// # Example
///
/// ```
/// use collatz::{collatz_length, Memo};
///
/// let mut memo = Memo::new();
/// assert_eq!(collatz_length(9, &mut memo).unwrap(), 19);
/// assert_eq!(memo.get(9), Some(19));
/// ```
pub fn collatz_length(start: u64, memo: &mut Memo) -> Result<u32, CollatzError> {
    if start == 0 {
        return Err(CollatzError::InvalidStart);
    }
    if let Some(len) = memo.get(start) {
        return Ok(len);
    }

    let mut n = start;
    let mut steps = 0;
    while n != 1 {
        if let Some(len) = memo.get(n) {
            steps += len;
            break;
        }
        n = step(n).ok_or(CollatzError::Overflow { start, value: n })?;
        steps += 1;
    }

    memo.insert(start, steps);
    Ok(steps)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::naive_length;

    #[test]
    fn test_base_case() {
        let mut memo = Memo::new();
        assert_eq!(collatz_length(1, &mut memo).unwrap(), 1);
        assert_eq!(memo.len(), 1);
    }

    #[test]
    fn test_small_values() {
        let mut memo = Memo::new();
        assert_eq!(collatz_length(2, &mut memo).unwrap(), 1);
        assert_eq!(collatz_length(4, &mut memo).unwrap(), 2);
        assert_eq!(collatz_length(3, &mut memo).unwrap(), 7);
        assert_eq!(collatz_length(9, &mut memo).unwrap(), 19);
    }

    #[test]
    fn test_only_start_is_memoized() {
        let mut memo = Memo::new();
        collatz_length(6, &mut memo).unwrap();
        // 6 → 3 → 10 → ..., only 6 itself gets an entry
        assert_eq!(memo.len(), 2);
        assert_eq!(memo.get(6), Some(8));
        assert!(!memo.contains(3));
    }

    #[test]
    fn test_matches_naive_length() {
        let mut memo = Memo::new();
        for n in 1..20_000u64 {
            assert_eq!(
                collatz_length(n, &mut memo).unwrap(),
                naive_length(n).unwrap(),
                "n={}",
                n
            );
        }
    }

    #[test]
    fn test_matches_naive_length_out_of_order() {
        // Descending order exercises lookups of values larger than the start
        let mut memo = Memo::new();
        for n in (1..5_000u64).rev() {
            assert_eq!(collatz_length(n, &mut memo).unwrap(), naive_length(n).unwrap());
        }
    }

    #[test]
    fn test_idempotent() {
        let mut memo = Memo::new();
        let first = collatz_length(27, &mut memo).unwrap();
        let size = memo.len();
        let second = collatz_length(27, &mut memo).unwrap();
        assert_eq!(first, 111);
        assert_eq!(first, second);
        assert_eq!(memo.len(), size);
    }

    #[test]
    fn test_zero_is_rejected() {
        let mut memo = Memo::new();
        assert!(matches!(collatz_length(0, &mut memo), Err(CollatzError::InvalidStart)));
    }

    #[test]
    fn test_overflow_is_reported() {
        let mut memo = Memo::new();
        let start = u64::MAX / 3 + 2; // odd, so 3n + 1 overflows immediately
        assert!(matches!(
            collatz_length(start, &mut memo),
            Err(CollatzError::Overflow { start: s, value: v }) if s == start && v == start
        ));
        assert!(!memo.contains(start));
    }
}
