//! Configuration file support for depsize.
//!
//! Provides YAML-based configuration through `depsize.config.yml` files,
//! including data structures, file loading, validation, and merging with
//! command-line overrides.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;
use tracing::warn;

use crate::adapters::outbound::network::{DEFAULT_INDEX_URL, DEFAULT_TIMEOUT_SECS};
use crate::application::dto::OutputFormat;
use crate::shared::security::{validate_regular_file, MAX_CONFIG_FILE_SIZE};
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "depsize.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub index_url: Option<String>,
    pub format: Option<String>,
    pub timeout_secs: Option<u64>,
    pub normalize_names: Option<bool>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    validate_regular_file(path, "config file", MAX_CONFIG_FILE_SIZE).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    // An empty file deserializes as YAML null
    let config: ConfigFile = if content.trim().is_empty() {
        ConfigFile::default()
    } else {
        serde_yaml_ng::from_str(&content).with_context(|| {
            format!(
                "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
                path.display()
            )
        })?
    };

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref index_url) = config.index_url {
        validate_index_url(index_url)?;
    }

    if config.timeout_secs == Some(0) {
        bail!(
            "Invalid config: timeout_secs must be greater than 0.\n\n\
             💡 Hint: Use a value such as 30."
        );
    }

    if let Some(ref format) = config.format {
        if let Err(e) = OutputFormat::from_str(format) {
            bail!("Invalid config: {}", e);
        }
    }

    Ok(())
}

fn validate_index_url(index_url: &str) -> Result<()> {
    if !(index_url.starts_with("https://") || index_url.starts_with("http://")) {
        bail!(
            "Invalid index URL: {}\n\n💡 Hint: The index URL must start with http:// or https:// (e.g., \"{}\").",
            index_url,
            DEFAULT_INDEX_URL
        );
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        warn!("Unknown config field '{}' will be ignored", key);
    }
}

/// Values given on the command line; each one wins over the config file.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub index_url: Option<String>,
    pub format: Option<OutputFormat>,
    pub timeout_secs: Option<u64>,
    pub normalize_names: bool,
}

/// Effective settings after merging CLI flags, config file and defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub index_url: String,
    pub format: OutputFormat,
    pub timeout: Duration,
    pub normalize_names: bool,
}

impl Settings {
    /// Merges in precedence order: command line, config file, defaults.
    pub fn resolve(cli: CliOverrides, config: Option<ConfigFile>) -> Result<Self> {
        let config = config.unwrap_or_default();

        let index_url = cli
            .index_url
            .or(config.index_url)
            .unwrap_or_else(|| DEFAULT_INDEX_URL.to_string());
        validate_index_url(&index_url)?;

        let format = match (cli.format, config.format) {
            (Some(format), _) => format,
            (None, Some(format)) => OutputFormat::from_str(&format).map_err(anyhow::Error::msg)?,
            (None, None) => OutputFormat::default(),
        };

        let timeout_secs = cli
            .timeout_secs
            .or(config.timeout_secs)
            .unwrap_or(DEFAULT_TIMEOUT_SECS);
        if timeout_secs == 0 {
            bail!("Invalid timeout: must be greater than 0 seconds");
        }

        Ok(Self {
            index_url,
            format,
            timeout: Duration::from_secs(timeout_secs),
            normalize_names: cli.normalize_names || config.normalize_names.unwrap_or(false),
        })
    }
}
