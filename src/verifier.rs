//! Single-pass installation verification.
//!
//! Stats every manifest entry under an inspected root, scans the page
//! files for shortcodes, and computes the category aggregates. The pass
//! never fails: a missing file lowers an aggregate, it does not raise.

use std::path::Path;

use crate::fs_util::stat_size;
use crate::manifest::{FileCategory, Manifest};
use crate::report::{CategoryReport, FileCheckResult, InstallationReport};
use crate::shortcodes::scan_pages;

/// Check every manifest entry under `root` and produce the full report.
///
/// Category aggregates are asymmetric on purpose: pages and documentation
/// require *all* files, install tools require *any* (one working installer
/// is enough).
#[must_use]
pub fn verify_installation(root: &Path, manifest: &Manifest) -> InstallationReport {
    let plugin = check_category(root, FileCategory::PluginFiles, manifest);
    let pages = check_category(root, FileCategory::PageFiles, manifest);
    let tools = check_category(root, FileCategory::InstallTools, manifest);
    let docs = check_category(root, FileCategory::Documentation, manifest);

    let shortcodes = scan_pages(root, manifest.files(FileCategory::PageFiles));

    let all_pages_exist = pages.all_exist();
    let install_tools_present = tools.any_exists();
    let all_docs_exist = docs.all_exist();

    InstallationReport {
        categories: vec![plugin, pages, tools, docs],
        shortcodes,
        all_pages_exist,
        install_tools_present,
        all_docs_exist,
    }
}

/// Stat each path of one category, in manifest order.
fn check_category(root: &Path, category: FileCategory, manifest: &Manifest) -> CategoryReport {
    let files = manifest
        .files(category)
        .iter()
        .map(|path| {
            let size_bytes = stat_size(&root.join(path));
            FileCheckResult {
                path: path.clone(),
                exists: size_bytes.is_some(),
                size_bytes,
            }
        })
        .collect();
    CategoryReport { category, files }
}
