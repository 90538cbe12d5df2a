//! Static asset copying.
//!
//! Images, badges and site stylesheets live in the static directory and are
//! copied verbatim into the output, keeping relative paths.

use std::{
    fs,
    path::{Path, PathBuf},
};

use thiserror::Error;
use tracing::{debug, info};
use walkdir::WalkDir;

/// Asset processing errors.
#[derive(Debug, Error)]
pub enum AssetError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Directory walk error.
    #[error("walk error: {0}")]
    Walk(#[from] walkdir::Error),

    /// Invalid asset path.
    #[error("invalid asset path: {0}")]
    InvalidPath(PathBuf),
}

/// Result type for asset operations.
pub type Result<T> = std::result::Result<T, AssetError>;

/// Copies static files into the output directory.
#[derive(Debug, Default)]
pub struct AssetProcessor;

impl AssetProcessor {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Copy every non-hidden file from `source_dir` to `dest_dir`.
    ///
    /// Returns the number of files copied. A missing source directory copies
    /// nothing.
    pub fn process(&self, source_dir: &Path, dest_dir: &Path) -> Result<usize> {
        info!(
            source = %source_dir.display(),
            dest = %dest_dir.display(),
            "processing assets"
        );

        if !source_dir.exists() {
            debug!("source directory does not exist, skipping");
            return Ok(0);
        }

        let mut count = 0;
        for entry in WalkDir::new(source_dir)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| {
                e.depth() == 0 || !e.file_name().to_string_lossy().starts_with('.')
            })
        {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }

            let relative = entry
                .path()
                .strip_prefix(source_dir)
                .map_err(|_| AssetError::InvalidPath(entry.path().to_path_buf()))?;
            let dest_path = dest_dir.join(relative);

            if let Some(parent) = dest_path.parent() {
                fs::create_dir_all(parent)?;
            }

            fs::copy(entry.path(), &dest_path)?;
            debug!(from = %relative.display(), "copied asset");
            count += 1;
        }

        info!(count, "assets processed");
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_process_copies_tree() {
        let source = TempDir::new().unwrap();
        let dest = TempDir::new().unwrap();

        fs::create_dir_all(source.path().join("img/dark")).unwrap();
        fs::write(source.path().join("styles.css"), "body {}").unwrap();
        fs::write(source.path().join("img/dark/hero.png"), [0u8, 1, 2]).unwrap();
        fs::write(source.path().join(".DS_Store"), "").unwrap();
        fs::create_dir_all(source.path().join(".git")).unwrap();
        fs::write(source.path().join(".git/HEAD"), "ref").unwrap();

        let count = AssetProcessor::new()
            .process(source.path(), dest.path())
            .unwrap();

        assert_eq!(count, 2);
        assert_eq!(
            fs::read_to_string(dest.path().join("styles.css")).unwrap(),
            "body {}"
        );
        assert!(dest.path().join("img/dark/hero.png").exists());
        assert!(!dest.path().join(".DS_Store").exists());
        assert!(!dest.path().join(".git").exists());
    }

    #[test]
    fn test_missing_source_is_noop() {
        let dest = TempDir::new().unwrap();
        let count = AssetProcessor::new()
            .process(&dest.path().join("static"), dest.path())
            .unwrap();
        assert_eq!(count, 0);
    }
}
