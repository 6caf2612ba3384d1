use crate::config::types::{CrawlConfig, FileConfig, FilterSet};
use crate::config::validation::validate;
use crate::{ConfigError, MatrixError};
use sha2::{Digest, Sha256};
use std::path::Path;

/// Loads and parses a configuration file from the given path
///
/// # Arguments
///
/// * `path` - Path to the TOML configuration file
///
/// # Returns
///
/// * `Ok(FileConfig)` - Successfully loaded and validated configuration
/// * `Err(ConfigError)` - Failed to load, parse, or validate the configuration
pub fn load_config(path: &Path) -> Result<FileConfig, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let config: FileConfig = toml::from_str(&content)?;
    validate(&config)?;
    Ok(config)
}

/// Computes a SHA-256 hash of the configuration file content
///
/// Logged at startup so a job list can be traced back to the settings that
/// produced it.
pub fn compute_config_hash(path: &Path) -> Result<String, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    let result = hasher.finalize();
    Ok(hex::encode(result))
}

/// Loads a configuration and returns both the config and its hash
pub fn load_config_with_hash(path: &Path) -> Result<(FileConfig, String), ConfigError> {
    let config = load_config(path)?;
    let hash = compute_config_hash(path)?;
    Ok((config, hash))
}

/// Splits a comma-separated filter list
///
/// Entries are trimmed of surrounding whitespace and empty entries are
/// discarded, so `" x86, ,ath79 "` yields `["x86", "ath79"]`.
pub fn parse_filter_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

impl CrawlConfig {
    /// Builds the run configuration from the positional inputs
    ///
    /// # Arguments
    ///
    /// * `release` - Release identifier; required
    /// * `targets` - Optional comma-separated target filter list
    /// * `subtargets` - Optional comma-separated subtarget filter list
    /// * `file` - Settings from the TOML file (or defaults)
    ///
    /// # Returns
    ///
    /// * `Ok(CrawlConfig)` - Ready to hand to the coordinator
    /// * `Err(MatrixError::MissingArgument)` - No release identifier given
    /// * `Err(MatrixError::Config)` - File settings failed validation
    pub fn from_args(
        release: Option<&str>,
        targets: Option<&str>,
        subtargets: Option<&str>,
        file: FileConfig,
    ) -> Result<Self, MatrixError> {
        let release = release
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .ok_or_else(|| MatrixError::MissingArgument("Version argument is required".to_string()))?;

        validate(&file)?;

        let filters = FilterSet::new(
            targets.map(parse_filter_list).unwrap_or_default(),
            subtargets.map(parse_filter_list).unwrap_or_default(),
        );

        Ok(Self {
            release: release.to_string(),
            filters,
            source: file.source,
            http: file.http,
            user_agent: file.user_agent,
        })
    }
}
