//! Crawl statistics
//!
//! Counters collected by the coordinator while it walks the release tree,
//! logged as a summary once the job list is assembled.

/// Crawl statistics summary
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CrawlStatistics {
    /// Targets listed under the release
    pub targets_discovered: u64,

    /// Targets skipped by the target filter without fetching their listing
    pub targets_pruned: u64,

    /// Subtargets listed under visited targets
    pub subtargets_discovered: u64,

    /// Subtargets rejected by the selection policy
    pub subtargets_skipped: u64,

    /// Job records produced
    pub jobs_emitted: u64,

    /// Jobs whose package index had no recognisable kernel package
    pub jobs_without_metadata: u64,

    /// Listing pages requested
    pub pages_fetched: u64,
}

/// Logs statistics at info level
///
/// # Arguments
///
/// * `stats` - The statistics to display
pub fn log_statistics(stats: &CrawlStatistics) {
    tracing::info!(
        "Targets: {} discovered, {} pruned by filter",
        stats.targets_discovered,
        stats.targets_pruned
    );
    tracing::info!(
        "Subtargets: {} discovered, {} not selected",
        stats.subtargets_discovered,
        stats.subtargets_skipped
    );
    tracing::info!(
        "Jobs: {} emitted ({} without kernel metadata) from {} pages",
        stats.jobs_emitted,
        stats.jobs_without_metadata,
        stats.pages_fetched
    );

    if stats.jobs_without_metadata > 0 {
        tracing::warn!(
            "{} jobs have empty vermagic/pkgarch",
            stats.jobs_without_metadata
        );
    }
}
