//! Crawler module for walking the release download tree
//!
//! This module contains the core crawling logic, including:
//! - HTTP fetching of listing pages
//! - Directory listing parsing
//! - Kernel package metadata extraction
//! - The target/subtarget selection policy
//! - Overall crawl coordination

mod coordinator;
mod fetcher;
mod metadata;
mod parser;
mod selection;

pub use coordinator::{run_crawl, Coordinator, CrawlOutcome};
pub use fetcher::{build_http_client, HttpFetcher, PageFetcher};
pub use metadata::{extract_kernel_metadata, parse_kernel_filename, KernelMetadata};
pub use parser::{extract_child_dirs, Document};
pub use selection::{passes_subtarget_gate, passes_target_gate, should_include};
