use crate::core::Storage;
use crate::utils::error::Result;
use std::path::PathBuf;

/// Writes outputs under a base directory on the local filesystem.
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

    fn resolve(&self, path: &str) -> PathBuf {
        self.base_path.join(path)
    }
}

impl Storage for LocalStorage {
    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = self.resolve(path);

        if let Some(parent) = full_path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        tokio::fs::write(full_path, data).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_write_creates_directories() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path().join("nested"));

        storage.write_file("index.html", b"<html></html>").await.unwrap();

        assert!(temp_dir.path().join("nested/index.html").exists());
        let written = std::fs::read(temp_dir.path().join("nested/index.html")).unwrap();
        assert_eq!(written, b"<html></html>");
    }

    #[tokio::test]
    async fn test_write_overwrites_previous_output() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path());

        storage.write_file("layers.json", b"{\"old\":true}").await.unwrap();
        storage.write_file("layers.json", b"{}").await.unwrap();

        assert_eq!(std::fs::read(temp_dir.path().join("layers.json")).unwrap(), b"{}");
    }
}
