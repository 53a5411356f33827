//! Capability interface shared by flow cache variants.
//!
//! A trace-replay driver talks to the cache only through [`FlowCache`], so
//! a different replacement policy can be dropped in without touching the
//! driver.
//!
//! # Concurrency
//!
//! Every mutating operation takes `&mut self`. Callers that need to share a
//! cache across threads must wrap it in their own lock.

use crate::flow_key::{FlowKey, Packet};
use crate::lru_set::Evicted;
use serde::Serialize;
use std::fmt;

/// Configuration snapshot reported by [`FlowCache::describe`].
///
/// `Display` renders the JSON parameter string used in simulation reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Description {
    #[serde(rename = "Type")]
    kind: &'static str,
    #[serde(rename = "Way")]
    way: usize,
    #[serde(rename = "Size")]
    size: usize,
}

impl Description {
    /// Create a description for a cache of the given kind and shape.
    pub fn new(kind: &'static str, way: usize, size: usize) -> Self {
        Self { kind, way, size }
    }

    /// Name of the cache variant.
    pub fn kind(&self) -> &'static str {
        self.kind
    }

    /// Entries per set.
    pub fn way(&self) -> usize {
        self.way
    }

    /// Total capacity.
    pub fn size(&self) -> usize {
        self.size
    }
}

impl fmt::Display for Description {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}

/// Trait for flow cache implementations.
pub trait FlowCache {
    /// Check whether `key` is resident.
    ///
    /// With `update` set, a hit refreshes the key's recency. A miss never
    /// inserts.
    fn is_cached(&mut self, key: &FlowKey, update: bool) -> bool;

    /// Same as [`is_cached`](Self::is_cached) for anything that yields a
    /// flow key.
    fn is_cached_packet<P: Packet + ?Sized>(&mut self, packet: &P, update: bool) -> bool
    where
        Self: Sized,
    {
        self.is_cached(&packet.flow_key(), update)
    }

    /// Insert `key`, returning any keys displaced to make room.
    fn cache(&mut self, key: FlowKey) -> Evicted;

    /// Remove `key` if resident.
    fn invalidate(&mut self, key: &FlowKey);

    /// Remove every entry.
    fn clear(&mut self);

    /// Report the cache's shape.
    fn describe(&self) -> Description;
}

/// One trace-replay step: look up the packet's flow, refreshing it on a hit.
///
/// Returns `true` on a hit. Inserting on a miss is left to the driver.
pub fn access<C: FlowCache, P: Packet + ?Sized>(cache: &mut C, packet: &P) -> bool {
    cache.is_cached_packet(packet, true)
}
