//! Cache shape configuration.
//!
//! The only persisted parameters are the total capacity and the
//! associativity. They can be loaded from TOML:
//!
//! ```toml
//! size = 1024
//! way = 4
//! ```

use crate::error::{CacheError, CacheResult};
use serde::Deserialize;
use std::path::Path;

fn default_size() -> usize {
    1024
}

fn default_way() -> usize {
    4
}

/// Shape of a set-associative flow cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CacheConfig {
    /// Total number of entries across all sets.
    #[serde(default = "default_size")]
    pub size: usize,

    /// Entries per set.
    #[serde(default = "default_way")]
    pub way: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            size: default_size(),
            way: default_way(),
        }
    }
}

impl CacheConfig {
    /// Create a configuration with the given shape.
    pub fn new(size: usize, way: usize) -> Self {
        Self { size, way }
    }

    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> CacheResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| CacheError::ConfigRead(e.to_string()))?;
        Self::from_toml(&content)
    }

    /// Parse and validate configuration from a TOML string.
    pub fn from_toml(content: &str) -> CacheResult<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| CacheError::ConfigParse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check that `size` is a non-zero multiple of a non-zero `way`.
    pub fn validate(&self) -> CacheResult<()> {
        if self.way == 0 || self.size == 0 || self.size % self.way != 0 {
            return Err(CacheError::InvalidConfig {
                size: self.size,
                way: self.way,
            });
        }
        Ok(())
    }

    /// Number of sets this shape produces. Only meaningful once validated.
    pub fn sets(&self) -> usize {
        self.size.checked_div(self.way).unwrap_or(0)
    }
}
