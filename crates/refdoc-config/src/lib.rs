//! Configuration management for refdoc.
//!
//! Parses `refdoc.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ```toml
//! [navigation]
//! file = "navigation.toml"
//!
//! [explorer]
//! source = "host_relative"
//! path = "/explorer/swagger.json"
//! ```

use refdoc_explorer::DescriptionSource;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override navigation document path.
    pub navigation_file: Option<PathBuf>,
    /// Use a static description URL instead of the configured source.
    pub description_url: Option<String>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "refdoc.toml";

/// Default navigation document, relative to the config directory.
const DEFAULT_NAVIGATION_FILE: &str = "navigation.toml";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Navigation configuration (paths are relative strings from TOML).
    navigation: NavigationConfigRaw,
    /// API explorer description source (`[explorer]` table).
    pub explorer: DescriptionSource,

    /// Resolved navigation configuration (set after loading).
    #[serde(skip)]
    pub navigation_resolved: NavigationConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Raw navigation configuration as parsed from TOML (paths as strings).
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct NavigationConfigRaw {
    file: Option<String>,
}

/// Resolved navigation configuration with absolute paths.
#[derive(Debug, Default)]
pub struct NavigationConfig {
    /// Navigation document (TOML, or JSON when the extension is `.json`).
    pub file: PathBuf,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `refdoc.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or the final configuration is invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
            // Overrides can switch the explorer source
            config.validate()?;
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(file) = &settings.navigation_file {
            self.navigation_resolved.file.clone_from(file);
        }
        if let Some(url) = &settings.description_url {
            self.explorer = DescriptionSource::Static { url: url.clone() };
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            navigation: NavigationConfigRaw::default(),
            explorer: DescriptionSource::default(),
            navigation_resolved: NavigationConfig {
                file: base.join(DEFAULT_NAVIGATION_FILE),
            },
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        // Validate configuration after loading and resolution
        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called automatically after loading from file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.navigation_resolved.file.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "navigation.file cannot be empty".to_owned(),
            ));
        }
        self.explorer
            .validate()
            .map_err(|err| ConfigError::Validation(format!("explorer: {err}")))
    }

    /// Resolve relative paths to absolute paths based on config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        let file = self
            .navigation
            .file
            .as_deref()
            .unwrap_or(DEFAULT_NAVIGATION_FILE);
        self.navigation_resolved = NavigationConfig {
            file: config_dir.join(file),
        };
    }
}
