//! `refdoc nav` command implementation.

use std::path::PathBuf;

use clap::Args;
use refdoc_config::{CliSettings, Config};
use refdoc_nav::{NavDocument, Navigation};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the nav command.
#[derive(Args)]
pub(crate) struct NavArgs {
    /// Path to configuration file (default: auto-discover refdoc.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Navigation document (overrides config).
    #[arg(short, long)]
    navigation: Option<PathBuf>,

    /// Pretty-print the JSON output.
    #[arg(long)]
    pretty: bool,
}

impl NavArgs {
    /// Execute the nav command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or the navigation is malformed.
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let cli_settings = CliSettings {
            navigation_file: self.navigation,
            ..Default::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        let navigation = load_navigation(&config)?;
        output.data(&navigation.to_json(self.pretty)?)?;

        Ok(())
    }
}

/// Load and validate the navigation document named by the config.
pub(crate) fn load_navigation(config: &Config) -> Result<Navigation, CliError> {
    let path = &config.navigation_resolved.file;
    tracing::info!(path = %path.display(), "Loading navigation");
    let navigation = NavDocument::load(path)?.resolve()?;
    Ok(navigation)
}
