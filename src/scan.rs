//! Screenshot discovery.
//!
//! Enumerates `screenshot-*.png` files in the images directory. Discovery
//! is non-recursive and results are sorted by filename so every run
//! processes files in the same order.
//!
//! A missing images directory and an images directory with no matching
//! files are both fatal: there is nothing to do, and silently producing an
//! empty output directory would look like success.

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("images directory not found: {}", .0.display())]
    MissingDirectory(PathBuf),
    #[error("no screenshot-*.png files found in {}", .0.display())]
    NoScreenshots(PathBuf),
}

/// Filename prefix that marks a file as a screenshot to process.
const SCREENSHOT_PREFIX: &str = "screenshot-";

/// Find all `screenshot-*.png` files in `images_dir`, sorted by filename.
pub fn find_screenshots(images_dir: &Path) -> Result<Vec<PathBuf>, ScanError> {
    if !images_dir.is_dir() {
        return Err(ScanError::MissingDirectory(images_dir.to_path_buf()));
    }

    let mut files: Vec<PathBuf> = fs::read_dir(images_dir)?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.is_file() && is_screenshot(p))
        .collect();

    if files.is_empty() {
        return Err(ScanError::NoScreenshots(images_dir.to_path_buf()));
    }

    files.sort();
    Ok(files)
}

/// `screenshot-*.png` — prefix match on the name, case-insensitive extension.
fn is_screenshot(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    name.starts_with(SCREENSHOT_PREFIX)
        && path
            .extension()
            .is_some_and(|e| e.eq_ignore_ascii_case("png"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), "").unwrap();
    }

    #[test]
    fn finds_matching_files_sorted() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "screenshot-2.png");
        touch(tmp.path(), "screenshot-1.png");
        touch(tmp.path(), "screenshot-10.png");

        let files = find_screenshots(tmp.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap())
            .collect();

        // Lexicographic, not numeric: 1 < 10 < 2
        assert_eq!(
            names,
            vec!["screenshot-1.png", "screenshot-10.png", "screenshot-2.png"]
        );
    }

    #[test]
    fn ignores_non_matching_names() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "screenshot-1.png");
        touch(tmp.path(), "icon.png");
        touch(tmp.path(), "screenshot-notes.txt");
        touch(tmp.path(), "banner-screenshot-1.png");

        let files = find_screenshots(tmp.path()).unwrap();
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("screenshot-1.png"));
    }

    #[test]
    fn ignores_directories_with_matching_names() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "screenshot-1.png");
        fs::create_dir(tmp.path().join("screenshot-2.png")).unwrap();

        let files = find_screenshots(tmp.path()).unwrap();
        assert_eq!(files.len(), 1);
    }

    #[test]
    fn accepts_uppercase_extension() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "screenshot-1.PNG");

        let files = find_screenshots(tmp.path()).unwrap();
        assert_eq!(files.len(), 1);
    }

    #[test]
    fn missing_directory_errors() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("nope");

        let result = find_screenshots(&missing);
        assert!(matches!(result, Err(ScanError::MissingDirectory(_))));
    }

    #[test]
    fn empty_directory_errors() {
        let tmp = TempDir::new().unwrap();

        let result = find_screenshots(tmp.path());
        assert!(matches!(result, Err(ScanError::NoScreenshots(_))));
    }

    #[test]
    fn directory_without_matches_errors() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "photo.png");

        let result = find_screenshots(tmp.path());
        assert!(matches!(result, Err(ScanError::NoScreenshots(_))));
    }
}
