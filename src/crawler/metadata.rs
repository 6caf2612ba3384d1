//! Kernel package metadata extraction
//!
//! Every subtarget's package index ships a kernel package whose filename
//! embeds the kernel ABI hash (vermagic) and the package architecture, e.g.
//! `kernel_5.15.137-1-e1f8c2a5b0a1c3d4e5f60718293a4b5c_x86_64.ipk`.

use crate::crawler::parser::Document;
use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

/// Prefix shared by every kernel package filename
const KERNEL_PREFIX: &str = "kernel_";

lazy_static! {
    // version, optional build number, separator, vermagic, optional -rN revision,
    // `_`, package architecture, `.ipk`
    static ref KERNEL_PACKAGE_REGEX: Regex = Regex::new(
        r"^kernel_\d+\.\d+\.\d+(?:-\d+)?[-~_](?P<abi>[a-f0-9]+)(?:-r\d+)?_(?P<arch>[a-zA-Z0-9_-]+)\.ipk$"
    ).unwrap();
}

/// Kernel ABI metadata of one subtarget
///
/// Both fields are empty when the package index has no recognisable kernel
/// package.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct KernelMetadata {
    /// Kernel ABI hash
    pub vermagic: String,
    /// Package architecture
    pub pkgarch: String,
}

impl KernelMetadata {
    pub fn is_empty(&self) -> bool {
        self.vermagic.is_empty() && self.pkgarch.is_empty()
    }
}

/// Parses a kernel package filename
///
/// Returns `None` when the filename does not follow the kernel package naming
/// scheme.
///
/// # Example
///
/// ```
/// use openwrt_job_matrix::crawler::parse_kernel_filename;
///
/// let meta = parse_kernel_filename("kernel_5.10.0-2_a1b2c3d4_mips_24kc.ipk").unwrap();
/// assert_eq!(meta.vermagic, "a1b2c3d4");
/// assert_eq!(meta.pkgarch, "mips_24kc");
/// ```
pub fn parse_kernel_filename(filename: &str) -> Option<KernelMetadata> {
    let captures = KERNEL_PACKAGE_REGEX.captures(filename)?;

    Some(KernelMetadata {
        vermagic: captures.name("abi")?.as_str().to_string(),
        pkgarch: captures.name("arch")?.as_str().to_string(),
    })
}

/// Finds the kernel package in a package index and extracts its metadata
///
/// Anchors are scanned in document order and the first one that parses wins.
/// A `kernel_` anchor that does not parse is skipped.
pub fn extract_kernel_metadata(doc: &Document) -> KernelMetadata {
    for href in doc.anchors() {
        if !href.starts_with(KERNEL_PREFIX) {
            continue;
        }

        match parse_kernel_filename(href) {
            Some(metadata) => return metadata,
            None => tracing::debug!("Unrecognised kernel package name: {}", href),
        }
    }

    KernelMetadata::default()
}
