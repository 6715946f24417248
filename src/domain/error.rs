use thiserror::Error;

use crate::io::IoError;

/// Errors produced while loading a TOML configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read.
    #[error("failed to read config file `{path}`: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for the expected layout.
    #[error("invalid config file `{path}`: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

/// Errors produced by the `diff`, `copy` and `entry` command boundaries.
#[derive(Debug, Error)]
pub enum DiffError {
    /// Input format could not be resolved from the input path.
    #[error("failed to resolve {side} input format: {source}")]
    ResolveInput {
        side: &'static str,
        #[source]
        source: IoError,
    },

    /// Input file could not be opened.
    #[error("failed to open {side} input file `{path}`: {source}")]
    OpenInput {
        side: &'static str,
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Input could not be parsed in the resolved format.
    #[error("failed to read {side} input: {source}")]
    ReadInput {
        side: &'static str,
        #[source]
        source: IoError,
    },

    /// Snapshot input was not exactly one JSON object.
    #[error("{side} input must be a single object, found {found}")]
    NotARecord {
        side: &'static str,
        found: &'static str,
    },

    /// Audit entry did not match the entry layout.
    #[error("invalid audit entry at index {index}: {source}")]
    InvalidEntry {
        index: usize,
        #[source]
        source: serde_json::Error,
    },
}

impl DiffError {
    pub fn side(&self) -> Option<&'static str> {
        match self {
            Self::ResolveInput { side, .. }
            | Self::OpenInput { side, .. }
            | Self::ReadInput { side, .. }
            | Self::NotARecord { side, .. } => Some(*side),
            Self::InvalidEntry { .. } => None,
        }
    }
}
