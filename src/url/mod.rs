//! URL construction for the release download tree
//!
//! Listing pages are addressed as
//! `<base>/<release>/targets/[<target>/[<subtarget>/packages/]]`. The path
//! segments are discovered names taken verbatim from the listings, so they are
//! joined by plain concatenation rather than re-encoded.

use crate::config::CrawlConfig;

/// Addresses the listing pages of one release
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseTree {
    targets_root: String,
}

impl ReleaseTree {
    /// Creates the tree for a release under the given base URL
    ///
    /// A missing trailing slash on `base_url` is added so that
    /// `https://host/releases` and `https://host/releases/` address the same
    /// tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use openwrt_job_matrix::url::ReleaseTree;
    ///
    /// let tree = ReleaseTree::new("https://downloads.openwrt.org/releases/", "23.05.0");
    /// assert_eq!(
    ///     tree.packages_url("x86", "64"),
    ///     "https://downloads.openwrt.org/releases/23.05.0/targets/x86/64/packages/"
    /// );
    /// ```
    pub fn new(base_url: &str, release: &str) -> Self {
        let separator = if base_url.ends_with('/') { "" } else { "/" };
        Self {
            targets_root: format!("{}{}{}/targets/", base_url, separator, release),
        }
    }

    /// Creates the tree described by a crawl configuration
    pub fn from_config(config: &CrawlConfig) -> Self {
        Self::new(&config.source.base_url, &config.release)
    }

    /// Listing of every target in the release
    pub fn targets_url(&self) -> String {
        self.targets_root.clone()
    }

    /// Listing of the subtargets of one target
    pub fn target_url(&self, target: &str) -> String {
        format!("{}{}/", self.targets_root, target)
    }

    /// Package index of one subtarget
    pub fn packages_url(&self, target: &str, subtarget: &str) -> String {
        format!("{}{}/{}/packages/", self.targets_root, target, subtarget)
    }
}
