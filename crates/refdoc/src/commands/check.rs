//! `refdoc check` command implementation.

use std::path::PathBuf;

use clap::Args;
use refdoc_config::{CliSettings, Config};
use refdoc_explorer::DescriptionSource;

use crate::commands::explorer::resolve_explorer;
use crate::commands::nav::load_navigation;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    /// Path to configuration file (default: auto-discover refdoc.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Navigation document (overrides config).
    #[arg(short, long)]
    navigation: Option<PathBuf>,

    /// Also resolve the description URL for this origin.
    #[arg(long)]
    origin: Option<String>,
}

impl CheckArgs {
    /// Execute the check command.
    ///
    /// # Errors
    ///
    /// Returns the first configuration, navigation or explorer error found.
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let cli_settings = CliSettings {
            navigation_file: self.navigation,
            ..Default::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        match &config.config_path {
            Some(path) => output.info(&format!("Config: {}", path.display())),
            None => output.info("Config: defaults (no refdoc.toml found)"),
        }

        let navigation = load_navigation(&config)?;
        output.info(&format!(
            "Navigation: {} routes, {} header links, {} home page blocks",
            navigation.routes().len(),
            navigation.header_links().len(),
            navigation.home_page_blocks().len()
        ));
        for route in navigation.routes() {
            output.highlight(&format!(
                "  {} - {} ({} nodes, depth {})",
                route.path,
                route.title,
                route.tree.node_count(),
                route.tree.depth()
            ));
        }
        if navigation.routes().is_empty() {
            output.warning("Navigation defines no routes");
        }

        match &config.explorer {
            DescriptionSource::Static { url } => {
                output.info(&format!("Explorer: static description URL {url}"));
            }
            DescriptionSource::HostRelative { path } => {
                output.info(&format!("Explorer: host-relative description path {path}"));
            }
        }

        if let Some(origin) = &self.origin {
            let explorer = resolve_explorer(&config, origin)?;
            output.info(&format!(
                "Description URL for {origin}: {}",
                explorer.description_url
            ));
        }

        output.success("Configuration is valid");
        Ok(())
    }
}
