use thiserror::Error;

/// Failures while turning a vendor feed into canonical documents.
///
/// Missing *optional* detail never surfaces here; it degrades to absent
/// fields. These variants abort normalization of the whole match.
#[derive(Error, Debug)]
pub enum NormalizeError {
    #[error("event #{index} ({event_id}) is missing required field `{field}`")]
    MissingField {
        index: usize,
        event_id: String,
        field: &'static str,
    },

    #[error("lineup must contain exactly two teams, found {found}")]
    InvalidLineup { found: usize },

    #[error("malformed vendor document: {0}")]
    Json(#[from] serde_json::Error),
}

impl NormalizeError {
    pub(crate) fn missing(index: usize, event_id: Option<&str>, field: &'static str) -> Self {
        NormalizeError::MissingField {
            index,
            event_id: event_id.unwrap_or("<no id>").to_string(),
            field,
        }
    }
}

#[derive(Error, Debug)]
pub enum GraphError {
    #[error("JSON-LD serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T, E = NormalizeError> = std::result::Result<T, E>;
