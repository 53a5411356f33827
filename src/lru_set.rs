//! A single fixed-capacity LRU set.
//!
//! Entries are kept in a slot vector ordered from most-recently-used
//! (index 0) to least-recently-used (last index). The vector is allocated
//! once with exactly `way` slots and never grows.
//!
//! Promotion rotates the prefix `[0..=pos]` right by one, which moves the
//! touched key to the front and shifts everything that was more recent down
//! by one slot. Every touch places exactly one key at the front, so the
//! recency order is always total.

use crate::flow_key::FlowKey;
use smallvec::SmallVec;

/// Keys displaced by an insert.
///
/// LRU evicts at most one key per insert. The sequence type leaves room for
/// policies that evict more.
pub type Evicted = SmallVec<[FlowKey; 1]>;

/// One way-limited LRU partition of a set-associative cache.
#[derive(Debug, Clone)]
pub struct AssociativeSet {
    entries: Vec<FlowKey>,
    way: usize,
}

impl AssociativeSet {
    /// Create an empty set holding at most `way` keys.
    pub fn new(way: usize) -> Self {
        Self {
            entries: Vec::with_capacity(way),
            way,
        }
    }

    #[inline]
    fn position(&self, key: &FlowKey) -> Option<usize> {
        self.entries.iter().position(|k| k == key)
    }

    #[inline]
    fn promote(&mut self, pos: usize) {
        self.entries[..=pos].rotate_right(1);
    }

    /// Check whether `key` is resident.
    ///
    /// With `promote` set, a hit moves the key to the MRU position. A miss
    /// never inserts.
    pub fn lookup(&mut self, key: &FlowKey, promote: bool) -> bool {
        match self.position(key) {
            Some(pos) => {
                if promote {
                    self.promote(pos);
                }
                true
            }
            None => false,
        }
    }

    /// Check residency without touching recency order.
    #[inline]
    pub fn contains(&self, key: &FlowKey) -> bool {
        self.position(key).is_some()
    }

    /// Insert `key` as most-recently-used.
    ///
    /// A resident key is only promoted. A novel key inserted into a full set
    /// displaces the least-recently-used key, which is returned.
    pub fn insert(&mut self, key: FlowKey) -> Evicted {
        let mut evicted = Evicted::new();

        if let Some(pos) = self.position(&key) {
            self.promote(pos);
            return evicted;
        }

        // a zero-way set holds nothing
        if self.way == 0 {
            evicted.push(key);
            return evicted;
        }

        if self.entries.len() == self.way {
            if let Some(victim) = self.entries.pop() {
                evicted.push(victim);
            }
        }

        self.entries.insert(0, key);
        debug_assert!(self.entries.len() <= self.way);

        evicted
    }

    /// Remove `key` if resident. Absent keys are ignored.
    pub fn invalidate(&mut self, key: &FlowKey) {
        if let Some(pos) = self.position(key) {
            self.entries.remove(pos);
        }
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of resident keys.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no keys are resident.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns `true` if the next novel insert will evict.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.entries.len() == self.way
    }

    /// Maximum number of resident keys.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.way
    }

    /// Recency rank of `key` (0 = most-recently-used), without promoting.
    pub fn rank(&self, key: &FlowKey) -> Option<usize> {
        self.position(key)
    }

    /// Resident keys from most- to least-recently-used.
    pub fn iter(&self) -> impl Iterator<Item = &FlowKey> {
        self.entries.iter()
    }
}
