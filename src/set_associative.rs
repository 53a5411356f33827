//! N-way set-associative LRU flow cache.
//!
//! # Architecture
//!
//! ```text
//! FlowKey --crc32--> SetIndexer --(crc % sets)--> sets[idx]
//!
//! +-----------------------------------------------------+
//! | SetAssociativeCache (size = sets * way)             |
//! |                                                     |
//! |  sets[0]  [ MRU ... LRU ]   way slots               |
//! |  sets[1]  [ MRU ... LRU ]   way slots               |
//! |  ...                                                |
//! |  sets[n]  [ MRU ... LRU ]   way slots               |
//! +-----------------------------------------------------+
//! ```
//!
//! Every operation touches exactly one set. Entries never migrate between
//! sets, so an insert can only ever evict from the set the key routes to.

use crate::cache_trait::{Description, FlowCache};
use crate::config::CacheConfig;
use crate::error::{CacheError, CacheResult};
use crate::flow_key::FlowKey;
use crate::indexer::SetIndexer;
use crate::lru_set::{AssociativeSet, Evicted};
use tracing::{debug, trace, warn};

/// Variant name reported by [`FlowCache::describe`].
pub const KIND: &str = "NWaySetAssociativeLRUCache";

/// Fixed-shape set-associative cache with LRU replacement inside each set.
#[derive(Debug, Clone)]
pub struct SetAssociativeCache {
    sets: Box<[AssociativeSet]>,
    indexer: SetIndexer,
    way: usize,
    size: usize,
}

impl SetAssociativeCache {
    /// Create a new builder for SetAssociativeCache.
    pub fn builder() -> SetAssociativeCacheBuilder {
        SetAssociativeCacheBuilder::new()
    }

    /// Create a cache holding `size` keys in sets of `way` keys each.
    ///
    /// Returns `Err(CacheError::InvalidConfig)` if either parameter is zero
    /// or `size` is not a multiple of `way`.
    pub fn new(size: usize, way: usize) -> CacheResult<Self> {
        Self::from_config(&CacheConfig::new(size, way))
    }

    /// Create a cache from a loaded configuration.
    pub fn from_config(config: &CacheConfig) -> CacheResult<Self> {
        if let Err(e) = config.validate() {
            warn!(size = config.size, way = config.way, "rejecting cache shape");
            return Err(e);
        }

        let set_count = config.sets();
        let indexer = SetIndexer::new(set_count).ok_or(CacheError::InvalidConfig {
            size: config.size,
            way: config.way,
        })?;

        let sets: Box<[AssociativeSet]> = (0..set_count)
            .map(|_| AssociativeSet::new(config.way))
            .collect();

        debug!(
            sets = set_count,
            way = config.way,
            size = config.size,
            "created set-associative flow cache"
        );

        Ok(Self {
            sets,
            indexer,
            way: config.way,
            size: config.size,
        })
    }

    /// Entries per set.
    #[inline]
    pub fn way(&self) -> usize {
        self.way
    }

    /// Total capacity across all sets.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of sets (`size / way`).
    #[inline]
    pub fn set_count(&self) -> usize {
        self.sets.len()
    }

    /// Index of the set `key` routes to.
    #[inline]
    pub fn set_index(&self, key: &FlowKey) -> usize {
        self.indexer.index_for(key)
    }

    /// Borrow a set by index.
    pub fn set(&self, idx: usize) -> Option<&AssociativeSet> {
        self.sets.get(idx)
    }

    /// Resident keys across all sets.
    pub fn len(&self) -> usize {
        self.sets.iter().map(AssociativeSet::len).sum()
    }

    /// Returns `true` if no set holds any key.
    pub fn is_empty(&self) -> bool {
        self.sets.iter().all(AssociativeSet::is_empty)
    }

    /// Resident count of every set, in set order.
    pub fn occupancy(&self) -> Vec<usize> {
        self.sets.iter().map(AssociativeSet::len).collect()
    }

    #[inline]
    fn target(&mut self, key: &FlowKey) -> (usize, &mut AssociativeSet) {
        let idx = self.indexer.index_for(key);
        (idx, &mut self.sets[idx])
    }
}

impl FlowCache for SetAssociativeCache {
    fn is_cached(&mut self, key: &FlowKey, update: bool) -> bool {
        let (_, set) = self.target(key);
        set.lookup(key, update)
    }

    fn cache(&mut self, key: FlowKey) -> Evicted {
        let (idx, set) = self.target(&key);
        let evicted = set.insert(key);
        for victim in &evicted {
            trace!(set = idx, evicted = %victim, inserted = %key, "evicted flow");
        }
        evicted
    }

    fn invalidate(&mut self, key: &FlowKey) {
        let (_, set) = self.target(key);
        set.invalidate(key);
    }

    fn clear(&mut self) {
        for set in self.sets.iter_mut() {
            set.clear();
        }
        debug!(sets = self.sets.len(), "cleared flow cache");
    }

    fn describe(&self) -> Description {
        Description::new(KIND, self.way, self.size)
    }
}

/// Builder for [`SetAssociativeCache`].
#[derive(Debug, Clone)]
pub struct SetAssociativeCacheBuilder {
    config: CacheConfig,
}

impl Default for SetAssociativeCacheBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SetAssociativeCacheBuilder {
    /// Create a new builder with default settings (1024 entries, 4-way).
    pub fn new() -> Self {
        Self {
            config: CacheConfig::default(),
        }
    }

    /// Set the total capacity.
    pub fn size(mut self, size: usize) -> Self {
        self.config.size = size;
        self
    }

    /// Set the associativity (entries per set).
    pub fn way(mut self, way: usize) -> Self {
        self.config.way = way;
        self
    }

    /// Build the cache.
    pub fn build(self) -> CacheResult<SetAssociativeCache> {
        SetAssociativeCache::from_config(&self.config)
    }
}
