//! HTML parser for directory-listing pages
//!
//! A listing page is parsed once into an owned [`Document`] holding the link
//! targets of its anchors, in document order:
//! - every `<a href>` on the page (used to find kernel packages)
//! - the anchors inside listing-row name cells (`table tr td.n a`), which are
//!   the directory entries of the listing

use scraper::{Html, Selector};

/// Selector for directory entries in a listing table
const LISTING_ANCHOR_SELECTOR: &str = "table tr td.n a";

/// Selector for every anchor with a link target
const ANY_ANCHOR_SELECTOR: &str = "a[href]";

/// A parsed directory-listing page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    anchors: Vec<String>,
    listing_anchors: Vec<String>,
}

impl Document {
    /// Parses raw HTML into a queryable document
    ///
    /// # Example
    ///
    /// ```
    /// use openwrt_job_matrix::crawler::Document;
    ///
    /// let html = r#"<table><tr><td class="n"><a href="x86/">x86/</a></td></tr></table>"#;
    /// let doc = Document::parse(html);
    /// assert_eq!(doc.listing_anchors(), ["x86/"]);
    /// ```
    pub fn parse(html: &str) -> Self {
        let html = Html::parse_document(html);

        Self {
            anchors: select_hrefs(&html, ANY_ANCHOR_SELECTOR),
            listing_anchors: select_hrefs(&html, LISTING_ANCHOR_SELECTOR),
        }
    }

    /// Link targets of every anchor on the page
    pub fn anchors(&self) -> &[String] {
        &self.anchors
    }

    /// Link targets of the anchors in listing-row name cells
    pub fn listing_anchors(&self) -> &[String] {
        &self.listing_anchors
    }
}

/// Collects the `href` values of the elements matching `selector`
fn select_hrefs(html: &Html, selector: &str) -> Vec<String> {
    let Ok(selector) = Selector::parse(selector) else {
        return Vec::new();
    };

    html.select(&selector)
        .filter_map(|element| element.value().attr("href"))
        .map(str::to_string)
        .collect()
}

/// Yields the child-directory names of a listing
///
/// Only listing entries whose link target ends in `/` are directories; the
/// trailing separators are stripped and entries that are nothing but
/// separators are dropped. Document order is preserved. A listing with no
/// directory entries yields an empty list.
pub fn extract_child_dirs(doc: &Document) -> Vec<String> {
    doc.listing_anchors()
        .iter()
        .filter(|href| href.ends_with('/'))
        .map(|href| href.trim_end_matches('/'))
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}
