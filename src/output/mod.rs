//! Output module for delivering the job list to the CI host
//!
//! This module handles:
//! - The job record emitted for every selected (target, subtarget) pair
//! - Serializing the job list as the `job-config` output
//! - Reporting outputs and failures through a [`Reporter`]
//! - Crawl statistics for the run summary

mod console;
mod github;
pub mod stats;
mod traits;

pub use console::ConsoleReporter;
pub use github::GithubActionsReporter;
pub use stats::{log_statistics, CrawlStatistics};
pub use traits::{ReportError, ReportResult, Reporter};

use crate::crawler::KernelMetadata;
use crate::MatrixError;
use serde::Serialize;

/// Name of the host output carrying the job list
pub const JOB_CONFIG_OUTPUT: &str = "job-config";

/// One build job for the downstream pipeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobRecord {
    /// Release identifier
    pub tag: String,
    pub target: String,
    pub subtarget: String,
    /// Kernel ABI hash, empty when no kernel package was found
    pub vermagic: String,
    /// Package architecture, empty when no kernel package was found
    pub pkgarch: String,
}

impl JobRecord {
    pub fn new(release: &str, target: &str, subtarget: &str, metadata: KernelMetadata) -> Self {
        Self {
            tag: release.to_string(),
            target: target.to_string(),
            subtarget: subtarget.to_string(),
            vermagic: metadata.vermagic,
            pkgarch: metadata.pkgarch,
        }
    }

    pub fn has_kernel_metadata(&self) -> bool {
        !self.vermagic.is_empty() || !self.pkgarch.is_empty()
    }
}

/// Serializes the job list as a compact JSON array, order preserved
pub fn job_config_json(jobs: &[JobRecord]) -> Result<String, MatrixError> {
    Ok(serde_json::to_string(jobs)?)
}

/// Delivers the job list to the host as the `job-config` output
pub fn emit_job_config(reporter: &mut dyn Reporter, jobs: &[JobRecord]) -> Result<(), MatrixError> {
    let json = job_config_json(jobs)?;
    tracing::debug!("Emitting {} jobs as {}", jobs.len(), JOB_CONFIG_OUTPUT);
    reporter.set_output(JOB_CONFIG_OUTPUT, &json)?;
    Ok(())
}
