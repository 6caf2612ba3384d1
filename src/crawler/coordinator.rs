//! Crawler coordinator - main crawl orchestration logic
//!
//! The coordinator walks the release tree one request at a time:
//! - fetch the targets listing of the release
//! - for every target passing the target gate, fetch its subtargets listing
//! - for every selected subtarget, fetch its package index and extract the
//!   kernel metadata
//! - append a job record per selected pair, in discovery order
//!
//! Any fetch failure aborts the whole crawl; no partial job list is returned.

use crate::config::CrawlConfig;
use crate::crawler::fetcher::{HttpFetcher, PageFetcher};
use crate::crawler::metadata::{extract_kernel_metadata, KernelMetadata};
use crate::crawler::parser::{extract_child_dirs, Document};
use crate::crawler::selection::{passes_target_gate, should_include};
use crate::output::{CrawlStatistics, JobRecord};
use crate::url::ReleaseTree;
use crate::MatrixError;

/// Job list and counters of a completed crawl
#[derive(Debug, Clone, Default)]
pub struct CrawlOutcome {
    pub jobs: Vec<JobRecord>,
    pub stats: CrawlStatistics,
}

/// Main crawler coordinator structure
pub struct Coordinator<F: PageFetcher> {
    config: CrawlConfig,
    tree: ReleaseTree,
    fetcher: F,
    stats: CrawlStatistics,
}

impl<F: PageFetcher> Coordinator<F> {
    /// Creates a new coordinator instance
    ///
    /// # Arguments
    ///
    /// * `config` - The crawl configuration
    /// * `fetcher` - Page fetcher used for every request
    pub fn new(config: CrawlConfig, fetcher: F) -> Self {
        let tree = ReleaseTree::from_config(&config);
        Self {
            config,
            tree,
            fetcher,
            stats: CrawlStatistics::default(),
        }
    }

    /// Runs the crawl to completion
    ///
    /// # Returns
    ///
    /// * `Ok(CrawlOutcome)` - Jobs for every selected pair, in discovery order
    /// * `Err(MatrixError::Fetch)` - A listing or package index could not be fetched
    pub async fn run(mut self) -> Result<CrawlOutcome, MatrixError> {
        tracing::info!("Discovering targets for release {}", self.config.release);

        if self.config.filters.is_mixed() {
            tracing::warn!(
                "Only one of target/subtarget filters was given; no jobs will be selected"
            );
        }

        let targets = self.discover_targets().await?;
        let mut jobs = Vec::new();

        for target in &targets {
            if !passes_target_gate(target, &self.config.filters) {
                tracing::debug!("Skipping target {} (not in filter)", target);
                self.stats.targets_pruned += 1;
                continue;
            }

            let subtargets = self.discover_subtargets(target).await?;

            for subtarget in &subtargets {
                if !should_include(target, subtarget, &self.config.filters) {
                    tracing::debug!("Skipping {}/{} (not selected)", target, subtarget);
                    self.stats.subtargets_skipped += 1;
                    continue;
                }

                let metadata = self.fetch_metadata(target, subtarget).await?;
                if metadata.is_empty() {
                    self.stats.jobs_without_metadata += 1;
                }

                jobs.push(JobRecord::new(
                    &self.config.release,
                    target,
                    subtarget,
                    metadata,
                ));
                self.stats.jobs_emitted += 1;
            }
        }

        tracing::info!("Crawl complete: {} jobs", jobs.len());

        Ok(CrawlOutcome {
            jobs,
            stats: self.stats,
        })
    }

    /// Lists the targets of the release
    async fn discover_targets(&mut self) -> Result<Vec<String>, MatrixError> {
        let url = self.tree.targets_url();
        let doc = self.fetch_page(&url).await?;
        let targets = extract_child_dirs(&doc);

        tracing::info!("Found {} targets", targets.len());
        self.stats.targets_discovered += targets.len() as u64;
        Ok(targets)
    }

    /// Lists the subtargets of one target
    async fn discover_subtargets(&mut self, target: &str) -> Result<Vec<String>, MatrixError> {
        let url = self.tree.target_url(target);
        let doc = self.fetch_page(&url).await?;
        let subtargets = extract_child_dirs(&doc);

        tracing::debug!("Target {} has {} subtargets", target, subtargets.len());
        self.stats.subtargets_discovered += subtargets.len() as u64;
        Ok(subtargets)
    }

    /// Extracts the kernel metadata of one subtarget from its package index
    async fn fetch_metadata(
        &mut self,
        target: &str,
        subtarget: &str,
    ) -> Result<KernelMetadata, MatrixError> {
        let url = self.tree.packages_url(target, subtarget);
        let doc = self.fetch_page(&url).await?;
        let metadata = extract_kernel_metadata(&doc);

        if metadata.is_empty() {
            tracing::warn!("No kernel package found for {}/{}", target, subtarget);
        } else {
            tracing::debug!(
                "{}/{}: vermagic={} pkgarch={}",
                target,
                subtarget,
                metadata.vermagic,
                metadata.pkgarch
            );
        }

        Ok(metadata)
    }

    async fn fetch_page(&mut self, url: &str) -> Result<Document, MatrixError> {
        self.stats.pages_fetched += 1;
        self.fetcher.fetch(url).await
    }
}

/// Runs the main crawl operation over HTTP
///
/// # Example
///
/// ```no_run
/// use openwrt_job_matrix::config::{CrawlConfig, FileConfig};
/// use openwrt_job_matrix::crawler::run_crawl;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = CrawlConfig::from_args(Some("23.05.0"), None, None, FileConfig::default())?;
/// let outcome = run_crawl(config).await?;
/// println!("{} jobs", outcome.jobs.len());
/// # Ok(())
/// # }
/// ```
pub async fn run_crawl(config: CrawlConfig) -> Result<CrawlOutcome, MatrixError> {
    let fetcher = HttpFetcher::from_config(&config.http, &config.user_agent)?;
    Coordinator::new(config, fetcher).run().await
}
