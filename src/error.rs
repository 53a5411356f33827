//! Error types for flow cache construction and configuration.
//!
//! Once a cache has been built, none of its operations can fail; every
//! variant here is raised before the first lookup.

use thiserror::Error;

/// Errors that can occur while configuring a flow cache.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CacheError {
    /// `size` and `way` must both be non-zero and `size` must be an exact
    /// multiple of `way`.
    #[error("invalid cache shape: size ({size}) must be a non-zero multiple of way ({way})")]
    InvalidConfig {
        /// Requested total capacity.
        size: usize,
        /// Requested entries per set.
        way: usize,
    },

    /// The configuration file could not be read.
    #[error("failed to read config: {0}")]
    ConfigRead(String),

    /// The configuration file is not valid TOML or has unknown fields.
    #[error("failed to parse config: {0}")]
    ConfigParse(String),
}

/// Result type for cache configuration.
pub type CacheResult<T> = Result<T, CacheError>;
