//! Configuration file support for flutter-dep-analyzer.
//!
//! Provides YAML-based configuration through `flutter-dep-analyzer.config.yml`
//! files, including data structures, file loading, validation, and merging
//! with command-line overrides.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::adapters::outbound::network::DEFAULT_REGISTRY_URL;
use crate::application::dto::{OutputFormat, PackageManager};
use crate::dependency_analysis::domain::scan_options::{DEFAULT_EXCLUDED_DIR, DEFAULT_MAX_FILES};
use crate::dependency_analysis::domain::{MatchStrategy, ScanOptions, UsageMode};
use crate::dependency_analysis::services::{DEFAULT_BATCH_DELAY_MS, DEFAULT_BATCH_SIZE};
use crate::shared::security::safe_read_to_string;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "flutter-dep-analyzer.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub format: Option<String>,
    pub package_manager: Option<String>,
    pub usage_mode: Option<String>,
    pub batch_size: Option<usize>,
    pub batch_delay_ms: Option<u64>,
    pub max_files: Option<usize>,
    pub exclude_dirs: Option<Vec<String>>,
    pub registry_url: Option<String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = safe_read_to_string(path, "config file").with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

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

    log::debug!("Loaded config from {}", path.display());
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
    if let Some(format) = &config.format {
        format
            .parse::<OutputFormat>()
            .map_err(|e| anyhow::anyhow!("Invalid config: format: {}", e))?;
    }
    if let Some(package_manager) = &config.package_manager {
        package_manager
            .parse::<PackageManager>()
            .map_err(|e| anyhow::anyhow!("Invalid config: package_manager: {}", e))?;
    }
    if let Some(usage_mode) = &config.usage_mode {
        usage_mode
            .parse::<UsageMode>()
            .map_err(|e| anyhow::anyhow!("Invalid config: usage_mode: {}", e))?;
    }
    if config.batch_size == Some(0) {
        bail!(
            "Invalid config: batch_size must be at least 1.\n\n\
             💡 Hint: The default is {} packages per batch.",
            DEFAULT_BATCH_SIZE
        );
    }
    if config.max_files == Some(0) {
        bail!(
            "Invalid config: max_files must be at least 1.\n\n\
             💡 Hint: The default is {} files.",
            DEFAULT_MAX_FILES
        );
    }
    if let Some(exclude_dirs) = &config.exclude_dirs {
        if let Some(i) = exclude_dirs.iter().position(|dir| dir.trim().is_empty()) {
            bail!("Invalid config: exclude_dirs[{}] must not be empty.", i);
        }
    }
    if let Some(url) = &config.registry_url {
        if !(url.starts_with("https://") || url.starts_with("http://")) {
            bail!(
                "Invalid config: registry_url '{}' must start with http:// or https://.",
                url
            );
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        log::warn!("Unknown config field '{}' will be ignored.", key);
    }
}

/// Values given on the command line; `None` and empty lists defer to the
/// config file.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub format: Option<OutputFormat>,
    pub package_manager: Option<PackageManager>,
    pub usage_mode: Option<UsageMode>,
    pub batch_size: Option<usize>,
    pub batch_delay_ms: Option<u64>,
    pub max_files: Option<usize>,
    pub exclude_dirs: Vec<String>,
}

/// Effective settings after merging command line, config file and defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub format: OutputFormat,
    pub package_manager: PackageManager,
    /// `None` means ask (or fall back to both when not interactive)
    pub usage_mode: Option<UsageMode>,
    pub batch_size: usize,
    pub batch_delay_ms: u64,
    pub max_files: usize,
    pub exclude_dirs: Vec<String>,
    pub registry_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            package_manager: PackageManager::default(),
            usage_mode: None,
            batch_size: DEFAULT_BATCH_SIZE,
            batch_delay_ms: DEFAULT_BATCH_DELAY_MS,
            max_files: DEFAULT_MAX_FILES,
            exclude_dirs: vec![DEFAULT_EXCLUDED_DIR.to_string()],
            registry_url: DEFAULT_REGISTRY_URL.to_string(),
        }
    }
}

impl Settings {
    /// Command line over config file over defaults.
    ///
    /// # Errors
    /// Fails if an override is out of range or a config value does not parse
    pub fn resolve(overrides: Overrides, config: Option<&ConfigFile>) -> Result<Self> {
        let mut settings = Settings::default();

        if let Some(config) = config {
            settings.apply_config(config)?;
        }

        if let Some(format) = overrides.format {
            settings.format = format;
        }
        if let Some(package_manager) = overrides.package_manager {
            settings.package_manager = package_manager;
        }
        if let Some(usage_mode) = overrides.usage_mode {
            settings.usage_mode = Some(usage_mode);
        }
        if let Some(batch_size) = overrides.batch_size {
            settings.batch_size = batch_size;
        }
        if let Some(batch_delay_ms) = overrides.batch_delay_ms {
            settings.batch_delay_ms = batch_delay_ms;
        }
        if let Some(max_files) = overrides.max_files {
            settings.max_files = max_files;
        }
        if !overrides.exclude_dirs.is_empty() {
            settings.exclude_dirs = overrides.exclude_dirs;
        }

        if settings.batch_size == 0 {
            bail!("--batch-size must be at least 1");
        }
        if settings.max_files == 0 {
            bail!("--max-files must be at least 1");
        }
        Ok(settings)
    }

    fn apply_config(&mut self, config: &ConfigFile) -> Result<()> {
        if let Some(format) = &config.format {
            self.format = format.parse().map_err(anyhow::Error::msg)?;
        }
        if let Some(package_manager) = &config.package_manager {
            self.package_manager = package_manager.parse().map_err(anyhow::Error::msg)?;
        }
        if let Some(usage_mode) = &config.usage_mode {
            self.usage_mode = Some(usage_mode.parse().map_err(anyhow::Error::msg)?);
        }
        if let Some(batch_size) = config.batch_size {
            self.batch_size = batch_size;
        }
        if let Some(batch_delay_ms) = config.batch_delay_ms {
            self.batch_delay_ms = batch_delay_ms;
        }
        if let Some(max_files) = config.max_files {
            self.max_files = max_files;
        }
        if let Some(exclude_dirs) = &config.exclude_dirs {
            self.exclude_dirs = exclude_dirs.clone();
        }
        if let Some(registry_url) = &config.registry_url {
            self.registry_url = registry_url.clone();
        }
        Ok(())
    }

    /// Scan options for a usage scan with the given import matching
    pub fn scan_options(&self, strict: bool) -> ScanOptions {
        ScanOptions {
            exclude_dirs: self.exclude_dirs.clone(),
            max_files: self.max_files,
            strategy: if strict {
                MatchStrategy::PackageUri
            } else {
                MatchStrategy::Loose
            },
            ..ScanOptions::default()
        }
    }
}
