//! Shortcode extraction from generated page files.
//!
//! WordPress shortcodes are bracketed tokens embedded in page content.
//! This tool only cares about the plugin's own `vlp_`-prefixed family,
//! e.g. `[vlp_video_library]` or `[vlp_gallery id="3"]`.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::report::{ScanWarning, ShortcodeScan};

/// Regex for VLP shortcode tokens: opening bracket, literal `vlp_` prefix,
/// one or more non-`]` characters, closing bracket.
static SHORTCODE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[vlp_[^\]]+\]").expect("shortcode regex must compile")
});

/// Extract all non-overlapping shortcode tokens from `content`, in order.
#[must_use]
pub fn extract_shortcodes(content: &str) -> Vec<String> {
    SHORTCODE_RE
        .find_iter(content)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Scan the given page files under `root` for shortcode tokens.
///
/// Only files that exist are read; missing entries are silently skipped
/// (the existence check reports them separately). A file that exists but
/// cannot be read as text contributes zero matches and one warning.
#[must_use]
pub fn scan_pages(root: &Path, pages: &[String]) -> ShortcodeScan {
    let mut scan = ShortcodeScan::default();

    for page in pages {
        let path = root.join(page);
        if !path.exists() {
            continue;
        }
        match std::fs::read_to_string(&path) {
            Ok(content) => scan.matches.extend(extract_shortcodes(&content)),
            Err(e) => scan.warnings.push(ScanWarning {
                path: page.clone(),
                message: e.to_string(),
            }),
        }
    }

    scan
}
