//! Report model and text rendering for installation checks.
//!
//! The report keeps the raw per-file results; presentation decisions
//! (which categories show sizes, the distinct-shortcode display cap)
//! live in [`format_text`]. User-facing strings are French, matching the
//! plugin the tool inspects.

use std::collections::HashSet;

use serde::Serialize;

use crate::manifest::FileCategory;

/// Maximum number of distinct shortcodes listed in the text report.
const DISTINCT_DISPLAY_LIMIT: usize = 5;

/// Result of checking a single expected path.
#[derive(Debug, Clone, Serialize)]
pub struct FileCheckResult {
    /// Relative path as listed in the manifest.
    pub path: String,
    /// Whether the path exists under the inspected root.
    pub exists: bool,
    /// Size in bytes. Present if and only if the path exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_bytes: Option<u64>,
}

/// Per-category file check results, in manifest order.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryReport {
    pub category: FileCategory,
    pub files: Vec<FileCheckResult>,
}

impl CategoryReport {
    /// Returns `true` if every checked path in this category exists.
    #[must_use]
    pub fn all_exist(&self) -> bool {
        self.files.iter().all(|f| f.exists)
    }

    /// Returns `true` if at least one checked path in this category exists.
    #[must_use]
    pub fn any_exists(&self) -> bool {
        self.files.iter().any(|f| f.exists)
    }
}

/// A page file that exists but could not be read during the shortcode scan.
#[derive(Debug, Clone, Serialize)]
pub struct ScanWarning {
    /// Relative path of the unreadable page file.
    pub path: String,
    /// Why the read failed.
    pub message: String,
}

/// Outcome of scanning the page files for shortcode tokens.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ShortcodeScan {
    /// All matched tokens in scan order, duplicates retained.
    pub matches: Vec<String>,
    /// Page files skipped because they could not be read as text.
    pub warnings: Vec<ScanWarning>,
}

impl ShortcodeScan {
    /// Total number of matches, duplicates included.
    #[must_use]
    pub fn count(&self) -> usize {
        self.matches.len()
    }

    /// Distinct tokens in first-seen order.
    #[must_use]
    pub fn distinct(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut out = Vec::new();
        for m in &self.matches {
            if seen.insert(m.as_str()) {
                out.push(m.as_str());
            }
        }
        out
    }
}

/// Aggregate result of one verification pass.
#[derive(Debug, Clone, Serialize)]
pub struct InstallationReport {
    /// One entry per category: plugin files, pages, install tools, docs.
    pub categories: Vec<CategoryReport>,
    /// Shortcode scan over the page files.
    pub shortcodes: ShortcodeScan,
    /// Every page file exists.
    pub all_pages_exist: bool,
    /// At least one installer tool exists.
    pub install_tools_present: bool,
    /// Every documentation file exists.
    pub all_docs_exist: bool,
}

impl InstallationReport {
    /// Overall success: pages complete and at least one shortcode found.
    ///
    /// Install tools and documentation are reported but deliberately do
    /// not influence this flag.
    #[must_use]
    pub fn succeeded(&self) -> bool {
        self.all_pages_exist && !self.shortcodes.matches.is_empty()
    }

    /// All three category aggregates hold. Gates the "ready" message.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.all_pages_exist && self.install_tools_present && self.all_docs_exist
    }
}

/// French section header for a category.
fn section_header(category: FileCategory) -> &'static str {
    match category {
        FileCategory::PluginFiles => "📁 Fichiers du plugin Video Library Protect :",
        FileCategory::PageFiles => "📄 Pages WordPress générées :",
        FileCategory::InstallTools => "🔧 Outils d'installation :",
        FileCategory::Documentation => "📚 Documentation :",
    }
}

/// Render a report as the human-readable checklist.
#[must_use]
pub fn format_text(report: &InstallationReport) -> String {
    let mut out = String::new();

    out.push_str("🔍 Vérification de l'Installation Video Library Protect\n");
    out.push_str(&"=".repeat(60));
    out.push('\n');

    for cat in &report.categories {
        out.push_str(section_header(cat.category));
        out.push('\n');
        // Plugin files get a presence marker only; the other groups show sizes.
        let show_size = cat.category != FileCategory::PluginFiles;
        for file in &cat.files {
            match file.size_bytes {
                Some(size) if show_size => {
                    out.push_str(&format!("  ✅ {} ({} bytes)\n", file.path, group_digits(size)));
                }
                Some(_) => {
                    out.push_str(&format!("  ✅ {}\n", file.path));
                }
                None => {
                    out.push_str(&format!("  ❌ {} - MANQUANT\n", file.path));
                }
            }
        }
        out.push('\n');
    }

    out.push_str(&format!(
        "🎯 Shortcodes VLP détectés : {}\n",
        report.shortcodes.count()
    ));
    let distinct = report.shortcodes.distinct();
    for token in distinct.iter().take(DISTINCT_DISPLAY_LIMIT) {
        out.push_str(&format!("  📝 {token}\n"));
    }
    if distinct.len() > DISTINCT_DISPLAY_LIMIT {
        out.push_str(&format!(
            "  📝 ... et {} autres\n",
            distinct.len() - DISTINCT_DISPLAY_LIMIT
        ));
    }
    out.push('\n');

    out.push_str("🎉 RÉSUMÉ DE L'INSTALLATION :\n");
    out.push_str(&format!(
        "  📄 Pages WordPress : {}\n",
        if report.all_pages_exist {
            "✅ Toutes créées"
        } else {
            "❌ Incomplètes"
        }
    ));
    out.push_str(&format!(
        "  🔧 Outils d'installation : {}\n",
        if report.install_tools_present {
            "✅ Disponibles"
        } else {
            "❌ Manquants"
        }
    ));
    out.push_str(&format!(
        "  📚 Documentation : {}\n",
        if report.all_docs_exist {
            "✅ Complète"
        } else {
            "❌ Incomplète"
        }
    ));
    let count = report.shortcodes.count();
    out.push_str(&format!(
        "  🎯 Shortcodes VLP : {}\n",
        if count > 0 {
            format!("✅ {count} détectés")
        } else {
            "❌ Aucun".to_string()
        }
    ));

    if report.is_complete() {
        out.push_str("\n🚀 INSTALLATION PRÊTE ! Vous pouvez maintenant :\n");
        out.push_str("  1. Utiliser install-vlp-pages.php pour installation automatique\n");
        out.push_str("  2. Ou suivre INSTALLATION-SIMPLE.md pour installation manuelle\n");
        out.push_str("  3. Consulter GUIDE-INTEGRATION.md pour la configuration avancée\n");
    } else {
        out.push_str("\n⚠️  Installation incomplète. Vérifiez les fichiers manquants.\n");
    }

    out
}

/// Format a byte count with thousands separators (`1,234,567`).
fn group_digits(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
