//! Configuration file support for sbom-uploader.
//!
//! Provides YAML-based configuration through `sbom-uploader.config.yml`
//! files, including data structures, file loading, and validation.
//! Secrets are never read from the file; they come from the environment.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "sbom-uploader.config.yml";

/// Keys people put secrets under; they get a pointed warning instead of the generic one.
const SECRET_FIELDS: [&str; 4] = ["token", "secret", "client_secret", "password"];

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub tpa_base_url: Option<String>,
    pub workers: Option<usize>,
    pub retries: Option<usize>,
    pub timeout_secs: Option<u64>,
    pub report: Option<bool>,
    pub token_url: Option<String>,
    pub account: Option<String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

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
    if config.workers == Some(0) {
        bail!(
            "Invalid config: workers must be at least 1.\n\n\
             💡 Hint: Use 1 to upload files one at a time."
        );
    }
    if config.retries == Some(0) {
        bail!(
            "Invalid config: retries must be at least 1.\n\n\
             💡 Hint: retries counts the first attempt, so 1 disables retrying."
        );
    }
    if config.timeout_secs == Some(0) {
        bail!("Invalid config: timeout_secs must be at least 1.");
    }
    for (field, value) in [
        ("tpa_base_url", &config.tpa_base_url),
        ("token_url", &config.token_url),
        ("account", &config.account),
    ] {
        let Some(value) = value.as_deref() else {
            continue;
        };
        if value.trim().is_empty() {
            bail!("Invalid config: {} must not be empty.", field);
        }
        let is_url_field = field != "account";
        if is_url_field && !(value.starts_with("http://") || value.starts_with("https://")) {
            bail!(
                "Invalid config: {} must be an http(s) URL, got '{}'.",
                field,
                value
            );
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        if SECRET_FIELDS.contains(&key.as_str()) {
            eprintln!(
                "⚠️  Warning: Config field '{}' is ignored; set the secret through TPA_SSO_TOKEN instead.",
                key
            );
        } else {
            eprintln!(
                "⚠️  Warning: Unknown config field '{}' will be ignored.",
                key
            );
        }
    }
}
