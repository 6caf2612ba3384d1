use serde::Deserialize;

/// Root of the OpenWRT release download tree
pub const DEFAULT_BASE_URL: &str = "https://downloads.openwrt.org/releases/";

/// Settings loaded from the optional TOML configuration file
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub source: SourceConfig,
    pub http: HttpConfig,
    #[serde(rename = "user-agent")]
    pub user_agent: UserAgentConfig,
}

/// Remote directory-listing service
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Base URL; the release identifier is appended directly to it
    #[serde(rename = "base-url")]
    pub base_url: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

/// HTTP transport settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Whole-request timeout in seconds
    #[serde(rename = "timeout-secs")]
    pub timeout_secs: u64,

    /// Connection establishment timeout in seconds
    #[serde(rename = "connect-timeout-secs")]
    pub connect_timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            connect_timeout_secs: 10,
        }
    }
}

/// User agent identification
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UserAgentConfig {
    pub name: String,
    pub version: String,
}

impl Default for UserAgentConfig {
    fn default() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

impl UserAgentConfig {
    /// Formats the header value as `name/version`
    pub fn header_value(&self) -> String {
        format!("{}/{}", self.name, self.version)
    }
}

/// Caller-supplied target and subtarget filters
///
/// Names are compared case-sensitively by exact equality. Supplying exactly
/// one of the two lists selects nothing; callers must pass both or neither.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSet {
    pub targets: Vec<String>,
    pub subtargets: Vec<String>,
}

impl FilterSet {
    pub fn new(targets: Vec<String>, subtargets: Vec<String>) -> Self {
        Self {
            targets,
            subtargets,
        }
    }

    /// Both filter lists empty: everything discovered is selected
    pub fn is_automatic(&self) -> bool {
        self.targets.is_empty() && self.subtargets.is_empty()
    }

    /// Both filter lists populated: only explicit matches are selected
    pub fn is_manual(&self) -> bool {
        !self.targets.is_empty() && !self.subtargets.is_empty()
    }

    /// Exactly one filter list populated
    pub fn is_mixed(&self) -> bool {
        !self.is_automatic() && !self.is_manual()
    }

    pub fn contains_target(&self, target: &str) -> bool {
        self.targets.iter().any(|t| t == target)
    }

    pub fn contains_subtarget(&self, subtarget: &str) -> bool {
        self.subtargets.iter().any(|s| s == subtarget)
    }
}

/// Everything a crawl run needs, built once at the entry point
#[derive(Debug, Clone)]
pub struct CrawlConfig {
    /// OpenWRT release identifier, e.g. `23.05.0`
    pub release: String,
    pub filters: FilterSet,
    pub source: SourceConfig,
    pub http: HttpConfig,
    pub user_agent: UserAgentConfig,
}
