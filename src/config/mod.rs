//! Configuration module for the job matrix
//!
//! Configuration comes from two places: the positional command-line inputs
//! (release identifier and the two filter lists) and an optional TOML file
//! describing the remote source, HTTP timeouts and user agent.
//!
//! # Example
//!
//! ```no_run
//! use openwrt_job_matrix::config::{load_config, CrawlConfig};
//! use std::path::Path;
//!
//! let file = load_config(Path::new("matrix.toml")).unwrap();
//! let config = CrawlConfig::from_args(Some("23.05.0"), Some("x86"), Some("64"), file).unwrap();
//! assert!(config.filters.is_manual());
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    CrawlConfig, FileConfig, FilterSet, HttpConfig, SourceConfig, UserAgentConfig,
    DEFAULT_BASE_URL,
};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash, parse_filter_list};
pub use validation::validate;
