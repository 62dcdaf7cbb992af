use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use linedelta_diff::ReportStyle;

use crate::error::{SdkError, SdkResult};
use crate::source::io_error;

/// Top-level configuration, usually loaded from a TOML file.
///
/// Every section and field is optional in the file; missing values take
/// their defaults.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinedeltaConfig {
    /// How reports and summaries are worded.
    pub report: ReportStyle,
    /// Comparison cache.
    pub cache: CacheConfig,
    /// Multi-file comparison.
    pub batch: BatchConfig,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Maximum number of cached reports. `0` disables the cache.
    pub capacity: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self { capacity: 64 }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
    /// Compare file pairs on the rayon thread pool.
    pub parallel: bool,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self { parallel: true }
    }
}

impl LinedeltaConfig {
    /// Parse a TOML document.
    pub fn from_toml_str(text: &str) -> SdkResult<Self> {
        toml::from_str(text).map_err(|e| SdkError::Config(e.to_string()))
    }

    /// Load a TOML file.
    pub fn load(path: &Path) -> SdkResult<Self> {
        let text = fs::read_to_string(path).map_err(|e| io_error(path, e))?;
        Self::from_toml_str(&text)
    }

    /// Serialize as a TOML document.
    pub fn to_toml_string(&self) -> SdkResult<String> {
        toml::to_string_pretty(self).map_err(|e| SdkError::Config(e.to_string()))
    }
}
