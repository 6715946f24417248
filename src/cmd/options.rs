use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::config::{ConfigFile, DiffOptions};
use crate::domain::error::ConfigError;

/// Option sources for one command run: an optional config file plus flags.
///
/// Flags override values from the file; ignored fields from both are merged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionSources {
    pub config: Option<PathBuf>,
    pub max_entries: Option<usize>,
    pub max_depth: Option<usize>,
    pub preview_len: Option<usize>,
    pub ignore_fields: Vec<String>,
}

pub fn resolve(sources: &OptionSources) -> Result<DiffOptions, ConfigError> {
    let mut options = match &sources.config {
        Some(path) => DiffOptions::from(load_config(path)?),
        None => DiffOptions::default(),
    };
    if let Some(max_entries) = sources.max_entries {
        options.limits.max_entries = max_entries;
    }
    if let Some(max_depth) = sources.max_depth {
        options.limits.max_depth = max_depth;
    }
    if let Some(preview_len) = sources.preview_len {
        options.preview_len = preview_len;
    }
    for field in &sources.ignore_fields {
        if !options.is_ignored(field) {
            options.ignore_fields.push(field.clone());
        }
    }
    Ok(options)
}

fn load_config(path: &Path) -> Result<ConfigFile, ConfigError> {
    let display = path.display().to_string();
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: display.clone(),
        source,
    })?;
    ConfigFile::from_toml_str(&display, &text)
}
