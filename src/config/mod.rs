// src/config/mod.rs
mod schema;

use std::path::{Path, PathBuf};
use config::{Config as ConfigLoader, FileFormat};
use tracing::{info, warn, debug};

pub use schema::{Config, ToolConfig, OutputConfig};

use crate::error::{SubhuntResult, SubhuntError};

/// Prefix for environment overrides, e.g. `SUBHUNT_TOOL__TIMEOUT_SECONDS=30`
pub const ENV_PREFIX: &str = "SUBHUNT";

/// Centralized configuration handling
impl Config {
    /// Load configuration from a file or fall back to the built-in defaults
    pub fn load(config_path: Option<&Path>) -> SubhuntResult<Self> {
        Self::load_from(config_path, None)
    }

    /// Load configuration, reading environment overrides from `env` instead of
    /// the process environment when it is provided.
    pub fn load_from(
        config_path: Option<&Path>,
        env: Option<config::Map<String, String>>,
    ) -> SubhuntResult<Self> {
        info!("Loading configuration");

        let mut config_builder = ConfigLoader::builder();

        // Default configuration
        config_builder = config_builder.add_source(
            config::File::from_str(
                include_str!("../../config/default.toml"),
                FileFormat::Toml
            )
        );

        // User-provided configuration
        if let Some(path) = config_path {
            if path.exists() {
                config_builder = config_builder.add_source(config::File::from(path));
                info!("Loading user configuration from: {}", path.display());
            } else {
                warn!("Specified configuration file not found: {}", path.display());
            }
        } else {
            let default_path = Self::get_default_config_path();
            if default_path.exists() {
                config_builder = config_builder.add_source(config::File::from(default_path.as_path()));
                info!("Loading default configuration from: {}", default_path.display());
            } else {
                debug!("No existing configuration found, using built-in defaults");
            }
        }

        // Environment variables
        config_builder = config_builder.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true)
                .source(env)
        );

        let config: Config = match config_builder.build() {
            Ok(c) => match c.try_deserialize() {
                Ok(config) => config,
                Err(e) => return Err(SubhuntError::ConfigError(format!("Failed to parse configuration: {}", e))),
            },
            Err(e) => return Err(SubhuntError::ConfigError(format!("Failed to build configuration: {}", e))),
        };

        debug!("Effective configuration: {:?}", config);
        Ok(config)
    }

    /// Get the default configuration path
    pub fn get_default_config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".subhunt/config.toml")
    }

    /// Write the default configuration to `path`, or to the default location
    pub fn init(path: Option<&Path>, force: bool) -> SubhuntResult<PathBuf> {
        let config_path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::get_default_config_path);

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| SubhuntError::FileError {
                    path: parent.to_path_buf(),
                    message: format!("Failed to create directory: {}", e),
                })?;
        }

        if config_path.exists() && !force {
            return Err(SubhuntError::ConfigError(
                format!("Configuration already exists at {}. Use --force to overwrite.", config_path.display())
            ));
        }

        Config::default().save(&config_path)?;

        Ok(config_path)
    }

    /// Render the configuration as TOML
    pub fn to_toml(&self) -> SubhuntResult<String> {
        toml::to_string_pretty(self)
            .map_err(|e| SubhuntError::SerializationError(format!("Failed to serialize configuration: {}", e)))
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> SubhuntResult<()> {
        let config_str = self.to_toml()?;

        std::fs::write(path, config_str)
            .map_err(|e| SubhuntError::FileError {
                path: path.to_path_buf(),
                message: format!("Failed to write configuration: {}", e),
            })?;

        info!("Configuration saved to {}", path.display());

        Ok(())
    }
}
