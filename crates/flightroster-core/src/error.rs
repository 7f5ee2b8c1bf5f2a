use thiserror::Error;

/// Maximum length of offending input echoed back in error messages
const MAX_ERROR_SNIPPET_LENGTH: usize = 120;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("Invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, RosterError>;

impl RosterError {
    /// Build an `InvalidInput` error that quotes (a bounded slice of) the offending value
    pub fn unexpected_shape(expected: &str, found: &serde_json::Value) -> Self {
        let rendered = found.to_string();
        let snippet = if rendered.chars().count() <= MAX_ERROR_SNIPPET_LENGTH {
            rendered
        } else {
            let head: String = rendered.chars().take(MAX_ERROR_SNIPPET_LENGTH).collect();
            format!("{}... (truncated, {} total bytes)", head, rendered.len())
        };
        RosterError::InvalidInput(format!("expected {}, found {}", expected, snippet))
    }
}
