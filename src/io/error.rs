use thiserror::Error;

#[derive(Debug, Error)]
pub enum IoError {
    #[error("could not resolve {kind} format; use a known file extension")]
    UnresolvedFormat { kind: &'static str },

    #[error("unsupported {kind} file extension: {path}")]
    UnsupportedPathExtension { kind: &'static str, path: String },

    #[error("json parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("yaml parse error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("expected a single document, found {count} values")]
    NotSingleDocument { count: usize },
}
