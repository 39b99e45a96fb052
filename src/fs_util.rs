//! Filesystem helpers for the installation check.

use std::path::Path;

/// Stat a path, returning its size in bytes when it exists.
///
/// Follows symlinks, so a link to an installed file counts as present.
/// Any stat failure (missing path, unreadable parent) reads as "missing"
/// rather than an error.
#[must_use]
pub(crate) fn stat_size(path: &Path) -> Option<u64> {
    std::fs::metadata(path).map(|m| m.len()).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn stat_size_returns_length_for_file() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("test.txt");
        fs::write(&file, "hello").unwrap();
        assert_eq!(stat_size(&file), Some(5));
    }

    #[test]
    fn stat_size_none_for_nonexistent() {
        let path = Path::new("/nonexistent/path/file.txt");
        assert_eq!(stat_size(path), None);
    }

    #[test]
    fn stat_size_some_for_directory() {
        // A directory at a checked path still counts as present.
        let dir = tempdir().unwrap();
        assert!(stat_size(dir.path()).is_some());
    }

    #[cfg(unix)]
    #[test]
    fn stat_size_follows_symlinks() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("target.txt");
        fs::write(&target, "hello").unwrap();
        let link = dir.path().join("link.txt");
        std::os::unix::fs::symlink(&target, &link).unwrap();
        assert_eq!(stat_size(&link), Some(5));
    }
}
