use thiserror::Error;

#[derive(Debug, Error)]
pub enum FitboxError {
    /// A numeric field outside its accepted range.
    #[error("Invalid {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },

    /// A categorical value that is not one of the known keys.
    #[error("Unknown {kind} '{value}' (accepted: {accepted})")]
    UnknownKey {
        kind: &'static str,
        value: String,
        accepted: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl FitboxError {
    pub(crate) fn unknown_key(kind: &'static str, value: &str, accepted: &[&str]) -> Self {
        FitboxError::UnknownKey {
            kind,
            value: value.to_string(),
            accepted: accepted.join(", "),
        }
    }
}

pub type Result<T> = std::result::Result<T, FitboxError>;
