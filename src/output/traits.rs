//! Reporter trait and error types
//!
//! A reporter is the CI host's output channel: named outputs on success, a
//! single failure message otherwise.

use thiserror::Error;

/// Errors that can occur while reporting to the host
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Failed to write output: {0}")]
    Write(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for reporting operations
pub type ReportResult<T> = Result<T, ReportError>;

/// Host output-reporting collaborator
pub trait Reporter {
    /// Publishes a named output value
    fn set_output(&mut self, name: &str, value: &str) -> ReportResult<()>;

    /// Reports that the run failed
    fn set_failed(&mut self, message: &str) -> ReportResult<()>;
}
