//! OpenWRT job matrix: discovers build targets for a release
//!
//! This crate crawls the OpenWRT downloads directory listing for a release,
//! optionally narrows the (target, subtarget) matrix with caller filters, and
//! enriches every selected pair with the kernel vermagic and package
//! architecture found in its package index. The result is a job list for a
//! downstream build pipeline.

pub mod config;
pub mod crawler;
pub mod output;
pub mod url;

use thiserror::Error;

/// Main error type for job matrix operations
#[derive(Debug, Error)]
pub enum MatrixError {
    #[error("Missing required argument: {0}")]
    MissingArgument(String),

    #[error("Failed to fetch {url}: {reason}")]
    Fetch { url: String, reason: String },

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Output error: {0}")]
    Report(#[from] output::ReportError),

    #[error("Failed to serialize job config: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Result type alias for job matrix operations
pub type Result<T> = std::result::Result<T, MatrixError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::{CrawlConfig, FilterSet};
pub use crawler::{run_crawl, Coordinator, CrawlOutcome};
pub use output::JobRecord;
