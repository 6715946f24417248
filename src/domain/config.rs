use serde::Deserialize;

use crate::domain::change::Limits;
use crate::domain::error::ConfigError;

/// Default length of primitive previews in summaries.
pub const DEFAULT_PREVIEW_LEN: usize = 80;

/// Options controlling report assembly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffOptions {
    pub limits: Limits,
    pub preview_len: usize,
    /// Top-level fields left out of the report entirely.
    pub ignore_fields: Vec<String>,
}

impl DiffOptions {
    pub fn is_ignored(&self, key: &str) -> bool {
        self.ignore_fields.iter().any(|field| field == key)
    }
}

impl Default for DiffOptions {
    fn default() -> Self {
        Self {
            limits: Limits::default(),
            preview_len: DEFAULT_PREVIEW_LEN,
            ignore_fields: Vec::new(),
        }
    }
}

/// TOML configuration file layout.
///
/// ```toml
/// ignore_fields = ["updated_at"]
///
/// [limits]
/// max_entries = 200
/// max_depth = 7
///
/// [summary]
/// preview_len = 80
/// ```
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    pub ignore_fields: Vec<String>,
    pub limits: Limits,
    pub summary: SummaryConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct SummaryConfig {
    pub preview_len: usize,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            preview_len: DEFAULT_PREVIEW_LEN,
        }
    }
}

impl ConfigFile {
    pub fn from_toml_str(path: &str, text: &str) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_string(),
            source,
        })
    }
}

impl From<ConfigFile> for DiffOptions {
    fn from(value: ConfigFile) -> Self {
        Self {
            limits: value.limits,
            preview_len: value.summary.preview_len,
            ignore_fields: value.ignore_fields,
        }
    }
}
