//! CLI error types.

use refdoc_config::ConfigError;
use refdoc_explorer::ExplorerError;
use refdoc_nav::NavError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Navigation(#[from] NavError),

    #[error("{0}")]
    Explorer(#[from] ExplorerError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
