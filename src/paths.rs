//! Project directory layout.

use crate::error::{PipelineError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Root, raw-data and processed-data directories of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectPaths {
    pub root: PathBuf,
    pub raw_dir: PathBuf,
    pub processed_dir: PathBuf,
}

impl ProjectPaths {
    /// Resolve from the process working directory.
    pub fn from_current_dir() -> Result<Self> {
        let cwd = std::env::current_dir().map_err(|e| PipelineError::filesystem(".", e))?;
        Self::resolve(&cwd)
    }

    /// Resolve the layout relative to `cwd` and create the data directories.
    ///
    /// Running from inside `src/` puts the root one level up.
    pub fn resolve(cwd: &Path) -> Result<Self> {
        let root = match (cwd.file_name(), cwd.parent()) {
            (Some(name), Some(parent)) if name == "src" => parent.to_path_buf(),
            _ => cwd.to_path_buf(),
        };
        Self::create(root)
    }

    fn create(root: PathBuf) -> Result<Self> {
        let raw_dir = root.join("data").join("raw");
        let processed_dir = root.join("data").join("processed");

        for dir in [&raw_dir, &processed_dir] {
            fs::create_dir_all(dir).map_err(|e| PipelineError::filesystem(dir, e))?;
        }
        tracing::debug!("Data directories ready under {}", root.display());

        Ok(Self {
            root,
            raw_dir,
            processed_dir,
        })
    }

    pub fn raw_file(&self, file_name: &str) -> PathBuf {
        self.raw_dir.join(file_name)
    }

    pub fn train_file(&self) -> PathBuf {
        self.processed_dir.join("train.csv")
    }

    pub fn test_file(&self) -> PathBuf {
        self.processed_dir.join("test.csv")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_creates_data_dirs() {
        let dir = tempdir().unwrap();
        let paths = ProjectPaths::resolve(dir.path()).unwrap();

        assert_eq!(paths.root, dir.path());
        assert!(paths.raw_dir.is_dir());
        assert!(paths.processed_dir.is_dir());
        assert_eq!(paths.train_file(), dir.path().join("data/processed/train.csv"));
    }

    #[test]
    fn test_src_dir_resolves_to_parent() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("src");
        fs::create_dir(&src).unwrap();

        let paths = ProjectPaths::resolve(&src).unwrap();
        assert_eq!(paths.root, dir.path());
        assert!(dir.path().join("data/raw").is_dir());
    }

    #[test]
    fn test_existing_dirs_are_fine() {
        let dir = tempdir().unwrap();
        ProjectPaths::resolve(dir.path()).unwrap();
        assert!(ProjectPaths::resolve(dir.path()).is_ok());
    }

    #[test]
    fn test_unwritable_root_is_filesystem_error() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("data");
        fs::write(&blocker, "not a directory").unwrap();

        let err = ProjectPaths::resolve(dir.path()).unwrap_err();
        assert!(matches!(err, PipelineError::Filesystem { .. }));
    }
}
