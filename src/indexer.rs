//! Hash-based routing of flow keys to sets.
//!
//! The set index is `crc32_ieee(key.to_bytes()) % sets`. CRC-32 is weak as
//! a hash but it is what commodity NICs compute, so collision behavior in
//! simulation tracks the hardware being modelled.

use crate::flow_key::FlowKey;

/// CRC-32 (IEEE 802.3) over the canonical encoding of `key`.
#[inline]
pub fn flow_checksum(key: &FlowKey) -> u32 {
    crc32fast::hash(&key.to_bytes())
}

/// Maps flow keys onto a fixed number of sets.
///
/// The mapping depends only on the key bytes and the set count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetIndexer {
    sets: usize,
}

impl SetIndexer {
    /// Create an indexer over `sets` sets.
    ///
    /// Returns `None` if `sets` is zero.
    pub fn new(sets: usize) -> Option<Self> {
        if sets == 0 {
            None
        } else {
            Some(Self { sets })
        }
    }

    /// Number of sets this indexer routes across.
    #[inline]
    pub fn sets(&self) -> usize {
        self.sets
    }

    /// Index of the set that owns `key`. Always `< self.sets()`.
    #[inline]
    pub fn index_for(&self, key: &FlowKey) -> usize {
        (flow_checksum(key) as u64 % self.sets as u64) as usize
    }
}
