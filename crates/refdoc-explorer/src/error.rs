//! Explorer error types.

/// Error returned by the explorer bootstrap.
#[derive(Debug, thiserror::Error)]
pub enum ExplorerError {
    /// The widget factory is not available at load time.
    #[error("Explorer dependency missing: {0} is not loaded")]
    DependencyMissing(String),
    /// The execution context origin could not be parsed.
    #[error("Invalid origin: {0}")]
    InvalidOrigin(String),
    /// The description source cannot produce a usable URL.
    #[error("Invalid description source: {0}")]
    InvalidSource(String),
}
