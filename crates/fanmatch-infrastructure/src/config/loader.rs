//! Configuration loader
//!
//! Merges default values, an optional TOML file and `FANMATCH__`-prefixed
//! environment variables into an [`AppConfig`], then validates it.

use std::env;
use std::path::{Path, PathBuf};

use fanmatch_domain::error::{Error, Result};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};

use crate::config::{
    AppConfig, CatalogConfig, EmbeddingConfig, ExtractionConfig, LoggingConfig, StorageConfig,
};
use crate::constants::{CONFIG_ENV_PREFIX, DEFAULT_CONFIG_DIR, DEFAULT_CONFIG_FILENAME};
use crate::error_ext::ErrorContext;
use crate::logging::{log_config_loaded, parse_log_level};

/// Configuration loader service
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,

    /// Environment prefix
    env_prefix: String,
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: CONFIG_ENV_PREFIX.to_string(),
        }
    }

    /// Set the configuration file path
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the environment variable prefix
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Load configuration from all sources
    ///
    /// Later sources override earlier ones:
    /// 1. `AppConfig::default()`
    /// 2. The TOML file (explicit path, or the first discovered default)
    /// 3. Environment variables such as `FANMATCH__STORAGE__DATABASE_URL`
    pub fn load(&self) -> Result<AppConfig> {
        let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));

        if let Some(config_path) = &self.config_path {
            if config_path.exists() {
                figment = figment.merge(Toml::file(config_path));
                log_config_loaded(config_path, true);
            } else {
                log_config_loaded(config_path, false);
            }
        } else if let Some(default_path) = Self::find_default_config_path() {
            figment = figment.merge(Toml::file(&default_path));
            log_config_loaded(&default_path, true);
        }

        // Double underscore separates nesting so single underscores stay in keys
        figment = figment.merge(Env::prefixed(&format!("{}__", self.env_prefix)).split("__"));

        let app_config: AppConfig = figment
            .extract()
            .config_context("Failed to extract configuration")?;

        validate_app_config(&app_config)?;

        Ok(app_config)
    }

    /// Render configuration as TOML
    pub fn to_toml_string(config: &AppConfig) -> Result<String> {
        toml::to_string_pretty(config).config_context("Failed to serialize config to TOML")
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, config: &AppConfig, path: P) -> Result<()> {
        let toml_string = Self::to_toml_string(config)?;

        std::fs::write(path.as_ref(), toml_string).io_context(format!(
            "Failed to write config file {}",
            path.as_ref().display()
        ))?;

        Ok(())
    }

    /// Get the configured file path
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// First existing default configuration file
    fn find_default_config_path() -> Option<PathBuf> {
        let current_dir = env::current_dir().ok()?;

        let candidates = [
            Some(current_dir.join(DEFAULT_CONFIG_FILENAME)),
            Some(
                current_dir
                    .join(DEFAULT_CONFIG_DIR)
                    .join(DEFAULT_CONFIG_FILENAME),
            ),
            dirs::config_dir().map(|d| d.join(DEFAULT_CONFIG_DIR).join(DEFAULT_CONFIG_FILENAME)),
            dirs::home_dir().map(|d| {
                d.join(format!(".{DEFAULT_CONFIG_DIR}"))
                    .join(DEFAULT_CONFIG_FILENAME)
            }),
        ];

        candidates.into_iter().flatten().find(|path| path.exists())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Validate application configuration
pub fn validate_app_config(config: &AppConfig) -> Result<()> {
    validate_embedding_config(&config.embedding)?;
    validate_catalog_config(&config.catalog)?;
    validate_storage_config(&config.storage)?;
    validate_extraction_config(&config.extraction)?;
    validate_logging_config(&config.logging)?;
    Ok(())
}

fn validate_embedding_config(config: &EmbeddingConfig) -> Result<()> {
    if config.provider.trim().is_empty() {
        return Err(Error::Configuration {
            message: "Embedding provider cannot be empty".to_string(),
            source: None,
        });
    }
    if config.model.trim().is_empty() {
        return Err(Error::Configuration {
            message: "Embedding model cannot be empty".to_string(),
            source: None,
        });
    }
    Ok(())
}

fn validate_catalog_config(config: &CatalogConfig) -> Result<()> {
    if config.path.as_os_str().is_empty() {
        return Err(Error::Configuration {
            message: "Catalog path cannot be empty".to_string(),
            source: None,
        });
    }
    Ok(())
}

// database_url is checked by the store factory, only commands that persist need it
fn validate_storage_config(config: &StorageConfig) -> Result<()> {
    if config.provider.trim().is_empty() {
        return Err(Error::Configuration {
            message: "Storage provider cannot be empty".to_string(),
            source: None,
        });
    }
    if config.timeout_secs == 0 {
        return Err(Error::Configuration {
            message: "Storage timeout cannot be 0".to_string(),
            source: None,
        });
    }
    Ok(())
}

fn validate_extraction_config(config: &ExtractionConfig) -> Result<()> {
    let needs_program = config.provider.trim().eq_ignore_ascii_case("command");
    let has_program = config
        .program
        .as_deref()
        .is_some_and(|program| !program.trim().is_empty());
    if needs_program && !has_program {
        return Err(Error::Configuration {
            message: "Extraction program is required when the command extractor is selected"
                .to_string(),
            source: None,
        });
    }
    Ok(())
}

fn validate_logging_config(config: &LoggingConfig) -> Result<()> {
    parse_log_level(&config.level).map(|_| ())
}
