use crate::domain::path::ParsedPath;
use crate::engine::path::parse_path;

/// Parses one change path into its human-readable parts.
pub fn execute(path: &str) -> ParsedPath {
    parse_path(path)
}
