//! `refdoc explorer` command implementation.

use std::path::PathBuf;

use clap::Args;
use refdoc_config::{CliSettings, Config};
use refdoc_explorer::{ExplorerConfig, Origin};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the explorer command.
#[derive(Args)]
pub(crate) struct ExplorerArgs {
    /// Path to configuration file (default: auto-discover refdoc.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Origin the explorer page is served from (e.g., `http://localhost:8383`).
    #[arg(long)]
    origin: String,

    /// Static description document URL (overrides config).
    #[arg(long)]
    description_url: Option<String>,

    /// Pretty-print the JSON output.
    #[arg(long)]
    pretty: bool,
}

impl ExplorerArgs {
    /// Execute the explorer command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or the origin is invalid.
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let cli_settings = CliSettings {
            description_url: self.description_url,
            ..Default::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        let explorer = resolve_explorer(&config, &self.origin)?;
        output.data(&explorer.to_json(self.pretty)?)?;

        Ok(())
    }
}

/// Resolve the configured description source for a page served from `origin`.
pub(crate) fn resolve_explorer(config: &Config, origin: &str) -> Result<ExplorerConfig, CliError> {
    let origin = Origin::parse(origin)?;
    let explorer = ExplorerConfig::resolve(&config.explorer, &origin)?;
    tracing::info!(origin = %origin, url = %explorer.description_url, "Resolved explorer configuration");
    Ok(explorer)
}
