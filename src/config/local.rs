use crate::core::Storage;
use crate::utils::error::{CopierError, Result};
use std::path::{Path, PathBuf};

/// Filesystem storage. Relative paths resolve against `base_path`.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    /// Storage rooted at the process working directory.
    pub fn working_dir() -> Self {
        Self::new(".")
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_path.join(path)
        }
    }
}

impl Storage for LocalStorage {
    async fn exists(&self, path: &Path) -> Result<bool> {
        let full_path = self.resolve(path);
        tokio::fs::try_exists(&full_path)
            .await
            .map_err(|source| CopierError::Read {
                path: path.to_path_buf(),
                source,
            })
    }

    async fn read_file(&self, path: &Path) -> Result<Vec<u8>> {
        let full_path = self.resolve(path);
        tokio::fs::read(&full_path)
            .await
            .map_err(|source| CopierError::Read {
                path: path.to_path_buf(),
                source,
            })
    }

    async fn write_file(&self, path: &Path, data: &[u8]) -> Result<()> {
        let full_path = self.resolve(path);
        tracing::debug!("Writing {}", full_path.display());

        tokio::fs::write(&full_path, data)
            .await
            .map_err(|source| CopierError::Write {
                path: path.to_path_buf(),
                source,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_relative_paths_resolve_against_base() {
        let dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(dir.path());

        storage
            .write_file(Path::new("out.txt"), b"hello\n")
            .await
            .unwrap();

        assert!(storage.exists(Path::new("out.txt")).await.unwrap());
        assert_eq!(
            std::fs::read(dir.path().join("out.txt")).unwrap(),
            b"hello\n"
        );
        assert_eq!(
            storage.read_file(Path::new("out.txt")).await.unwrap(),
            b"hello\n"
        );
    }

    #[tokio::test]
    async fn test_absolute_paths_ignore_base() {
        let dir = TempDir::new().unwrap();
        let absolute = dir.path().join("abs.txt");
        std::fs::write(&absolute, "x").unwrap();

        let storage = LocalStorage::new("/definitely/not/here");
        assert!(storage.exists(&absolute).await.unwrap());
    }

    #[tokio::test]
    async fn test_write_does_not_create_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(dir.path());

        let err = storage
            .write_file(Path::new("missing/dir/out.txt"), b"x")
            .await
            .unwrap_err();

        assert!(matches!(err, CopierError::Write { .. }));
        assert!(!dir.path().join("missing").exists());
    }
}
