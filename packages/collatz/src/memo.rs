use std::collections::HashMap;

/// Known chain lengths, keyed by starting value.
///
/// Always contains the base case `1 → 1`. Entries are only ever added.
///
/// # Example
///
/// ```
/// use collatz::Memo;
///
/// let memo = Memo::new();
/// assert_eq!(memo.get(1), Some(1));
/// assert_eq!(memo.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Memo {
    lengths: HashMap<u64, u32>,
}

impl Memo {
    pub fn new() -> Self {
        Self::with_capacity(1)
    }

    /// Pre-size the table, typically to the number of values about to be scanned.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut lengths = HashMap::with_capacity(capacity.max(1));
        lengths.insert(1, 1);
        Memo { lengths }
    }

    pub fn get(&self, n: u64) -> Option<u32> {
        self.lengths.get(&n).copied()
    }

    pub fn contains(&self, n: u64) -> bool {
        self.lengths.contains_key(&n)
    }

    pub fn len(&self) -> usize {
        self.lengths.len()
    }

    /// Never true: the base case is always present.
    pub fn is_empty(&self) -> bool {
        self.lengths.is_empty()
    }

    pub(crate) fn insert(&mut self, n: u64, length: u32) {
        self.lengths.insert(n, length);
    }
}

impl Default for Memo {
    fn default() -> Self {
        Self::new()
    }
}
