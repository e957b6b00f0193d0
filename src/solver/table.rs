use std::hash::BuildHasherDefault;

use hashbrown::HashMap;

use crate::index::TABLE_SIZE;

/// Sentinel for "not yet computed"; real values are never negative.
const UNSET: i16 = -1;

/// Best-remaining-score memo, keyed by the dense state key. Entries are
/// write-once: a key is computed exactly once, and recomputation would yield
/// the same value.
///
/// Keys must lie in `[0, TABLE_SIZE)`; implementations may index storage
/// with them directly. The solver enforces the bound via its key check
/// before touching the table, and other callers must do the same.
pub trait ScoreTable {
    fn get(&self, key: u64) -> Option<i16>;
    fn put(&mut self, key: u64, value: i16);
    /// Number of computed entries.
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Flat array with one slot per possible key, sentinel-initialized. This is
/// the full-deal configuration: ~10 GiB of i16 slots, allocated once before
/// the search. Requires a 64-bit target.
pub struct DenseTable {
    slots: Vec<i16>,
    count: usize,
}

impl DenseTable {
    pub fn new() -> Self {
        Self {
            slots: vec![UNSET; TABLE_SIZE as usize],
            count: 0,
        }
    }
}

impl Default for DenseTable {
    fn default() -> Self {
        Self::new()
    }
}

impl ScoreTable for DenseTable {
    #[inline]
    fn get(&self, key: u64) -> Option<i16> {
        let value = self.slots[key as usize];
        (value != UNSET).then_some(value)
    }

    #[inline]
    fn put(&mut self, key: u64, value: i16) {
        debug_assert!(value >= 0);
        let slot = &mut self.slots[key as usize];
        debug_assert!(*slot == UNSET || *slot == value, "memo entries are write-once");
        if *slot == UNSET {
            self.count += 1;
        }
        *slot = value;
    }

    #[inline]
    fn len(&self) -> usize {
        self.count
    }
}

type FastHasher = BuildHasherDefault<ahash::AHasher>;

/// Hash-map memo storing only visited keys. Far smaller than [`DenseTable`]
/// and the right choice for bounded searches from late-game states, where
/// the reachable key set is tiny compared to the full key space.
#[derive(Debug, Default)]
pub struct SparseTable {
    map: HashMap<u64, i16, FastHasher>,
}

impl SparseTable {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn with_capacity(cap: usize) -> Self {
        Self {
            map: HashMap::with_capacity_and_hasher(cap, FastHasher::default()),
        }
    }
}

impl ScoreTable for SparseTable {
    #[inline]
    fn get(&self, key: u64) -> Option<i16> {
        self.map.get(&key).copied()
    }

    #[inline]
    fn put(&mut self, key: u64, value: i16) {
        debug_assert!(value >= 0);
        let old = self.map.insert(key, value);
        debug_assert!(
            old.is_none() || old == Some(value),
            "memo entries are write-once"
        );
    }

    #[inline]
    fn len(&self) -> usize {
        self.map.len()
    }
}
