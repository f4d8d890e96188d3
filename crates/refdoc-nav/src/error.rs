//! Navigation error types.

/// Error returned when building or loading navigation.
#[derive(Debug, thiserror::Error)]
pub enum NavError {
    /// Tree or route invariant violated. The navigation must not be exported.
    #[error("Malformed navigation tree: {0}")]
    MalformedTree(String),
    /// I/O error reading a navigation document.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error. Also covers a route path repeated in `[routes]`,
    /// which TOML rejects as a duplicate key before validation runs.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    /// JSON parsing or serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl NavError {
    pub(crate) fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedTree(message.into())
    }
}
