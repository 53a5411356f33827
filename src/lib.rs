//! Set-associative LRU flow cache for trace-driven simulation.
//!
//! This crate models the flow table found in flow-classification hardware
//! (NIC receive-side steering, connection tracking): a fixed number of
//! entries split into sets of `way` entries, with each flow routed to one
//! set by a CRC-32 of its five-tuple and LRU replacement inside the set.
//!
//! # Example
//!
//! ```
//! use flowcache::{FlowCache, FlowKey, SetAssociativeCache};
//!
//! let mut cache = SetAssociativeCache::builder()
//!     .size(8)
//!     .way(2)
//!     .build()?;
//!
//! let flow = FlowKey::new(0x0a00_0001, 0x0a00_0002, 5555, 80, 6);
//!
//! if !cache.is_cached(&flow, true) {
//!     let evicted = cache.cache(flow);
//!     assert!(evicted.is_empty());
//! }
//! assert!(cache.is_cached(&flow, false));
//! # Ok::<(), flowcache::CacheError>(())
//! ```
//!
//! The cache is single-threaded; see [`FlowCache`] for the access model.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod cache_trait;
mod config;
mod error;
mod flow_key;
mod indexer;
mod lru_set;
mod set_associative;

pub use cache_trait::{Description, FlowCache, access};
pub use config::CacheConfig;
pub use error::{CacheError, CacheResult};
pub use flow_key::{FLOW_KEY_LEN, FlowKey, Packet};
pub use indexer::{SetIndexer, flow_checksum};
pub use lru_set::{AssociativeSet, Evicted};
pub use set_associative::{KIND, SetAssociativeCache, SetAssociativeCacheBuilder};
