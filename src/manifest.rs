//! Expected file lists for a Video Library Protect installation.
//!
//! The compiled-in defaults describe the plugin's fixed layout. A YAML
//! override file can replace any category's list; omitted categories keep
//! their defaults, so a partial override stays a valid manifest.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::Result;

/// Grouping of checked files within an installation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FileCategory {
    /// Core plugin PHP files.
    PluginFiles,
    /// Generated WordPress page files.
    PageFiles,
    /// Installer scripts.
    InstallTools,
    /// Documentation files.
    Documentation,
}

impl FileCategory {
    /// All categories in report order.
    pub const ALL: [FileCategory; 4] = [
        FileCategory::PluginFiles,
        FileCategory::PageFiles,
        FileCategory::InstallTools,
        FileCategory::Documentation,
    ];
}

/// Ordered lists of expected relative paths, one list per category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct Manifest {
    #[serde(default = "default_plugin_files")]
    pub plugin_files: Vec<String>,
    #[serde(default = "default_page_files")]
    pub page_files: Vec<String>,
    #[serde(default = "default_install_tools")]
    pub install_tools: Vec<String>,
    #[serde(default = "default_documentation")]
    pub documentation: Vec<String>,
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            plugin_files: default_plugin_files(),
            page_files: default_page_files(),
            install_tools: default_install_tools(),
            documentation: default_documentation(),
        }
    }
}

impl Manifest {
    /// Load a manifest override from a YAML file.
    ///
    /// Categories omitted in the file keep their compiled-in defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid YAML
    /// for a manifest (including unknown keys).
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_yaml_ng::from_str(&content)?)
    }

    /// Relative paths for one category, in manifest order.
    #[must_use]
    pub fn files(&self, category: FileCategory) -> &[String] {
        match category {
            FileCategory::PluginFiles => &self.plugin_files,
            FileCategory::PageFiles => &self.page_files,
            FileCategory::InstallTools => &self.install_tools,
            FileCategory::Documentation => &self.documentation,
        }
    }
}

fn default_plugin_files() -> Vec<String> {
    to_owned(&[
        "video-library-protect.php",
        "includes/class-vlp-protection-manager.php",
        "includes/class-vlp-video-manager.php",
        "public/class-vlp-shortcodes.php",
        "admin/class-vlp-admin.php",
    ])
}

fn default_page_files() -> Vec<String> {
    to_owned(&[
        "pages/page-video-library.php",
        "pages/page-categories-videos.php",
        "pages/page-contenu-protege-exemple.php",
        "pages/page-aide-support-video.php",
    ])
}

fn default_install_tools() -> Vec<String> {
    to_owned(&[
        "install-vlp-pages.php",
        "install-pages-wordpress.php",
        "create_pages.py",
    ])
}

fn default_documentation() -> Vec<String> {
    to_owned(&[
        "README-PAGES-CREEES.md",
        "GUIDE-INTEGRATION.md",
        "INSTALLATION-SIMPLE.md",
    ])
}

fn to_owned(paths: &[&str]) -> Vec<String> {
    paths.iter().map(|p| (*p).to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn default_lists_have_expected_sizes() {
        let m = Manifest::default();
        assert_eq!(m.plugin_files.len(), 5);
        assert_eq!(m.page_files.len(), 4);
        assert_eq!(m.install_tools.len(), 3);
        assert_eq!(m.documentation.len(), 3);
    }

    #[test]
    fn default_plugin_files_start_with_main_file() {
        let m = Manifest::default();
        assert_eq!(m.plugin_files[0], "video-library-protect.php");
    }

    #[test]
    fn files_accessor_matches_fields() {
        let m = Manifest::default();
        assert_eq!(m.files(FileCategory::PluginFiles), &m.plugin_files[..]);
        assert_eq!(m.files(FileCategory::PageFiles), &m.page_files[..]);
        assert_eq!(m.files(FileCategory::InstallTools), &m.install_tools[..]);
        assert_eq!(m.files(FileCategory::Documentation), &m.documentation[..]);
    }

    #[test]
    fn all_categories_in_report_order() {
        assert_eq!(FileCategory::ALL[0], FileCategory::PluginFiles);
        assert_eq!(FileCategory::ALL[3], FileCategory::Documentation);
    }

    #[test]
    fn empty_mapping_yields_defaults() {
        let m: Manifest = serde_yaml_ng::from_str("{}").unwrap();
        assert_eq!(m, Manifest::default());
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let yaml = "page-files:\n  - custom/landing.php\n";
        let m: Manifest = serde_yaml_ng::from_str(yaml).unwrap();
        assert_eq!(m.page_files, vec!["custom/landing.php".to_string()]);
        assert_eq!(m.plugin_files, Manifest::default().plugin_files);
        assert_eq!(m.documentation, Manifest::default().documentation);
    }

    #[test]
    fn unknown_key_is_rejected() {
        let yaml = "pages:\n  - typo.php\n";
        assert!(serde_yaml_ng::from_str::<Manifest>(yaml).is_err());
    }

    #[test]
    fn from_file_reads_override() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("manifest.yml");
        fs::write(&path, "install-tools:\n  - setup.php\n").unwrap();
        let m = Manifest::from_file(&path).unwrap();
        assert_eq!(m.install_tools, vec!["setup.php".to_string()]);
    }

    #[test]
    fn from_file_missing_file_is_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("absent.yml");
        assert!(Manifest::from_file(&path).is_err());
    }

    #[test]
    fn from_file_invalid_yaml_is_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("manifest.yml");
        fs::write(&path, "page-files: [unclosed\n").unwrap();
        assert!(Manifest::from_file(&path).is_err());
    }

    #[test]
    fn category_serializes_kebab_case() {
        let json = serde_json::to_value(FileCategory::PluginFiles).unwrap();
        assert_eq!(json, "plugin-files");
        let json = serde_json::to_value(FileCategory::InstallTools).unwrap();
        assert_eq!(json, "install-tools");
    }
}
