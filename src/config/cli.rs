use crate::core::Storage;
use crate::utils::error::Result;
use std::path::Path;

/// 以本地檔案系統為後端的 Storage。
///
/// 讀取走使用者給的原始路徑（來源檔案）；寫入一律落在 base_path
/// 底下（報表輸出目錄）。
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }
}

impl Storage for LocalStorage {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let data = tokio::fs::read(path).await?;
        Ok(data)
    }

    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = Path::new(&self.base_path).join(path);

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
    async fn test_write_lands_under_base_path() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path().to_str().unwrap().to_string());

        storage.write_file("out.zip", b"hello").await.unwrap();

        let on_disk = temp_dir.path().join("out.zip");
        assert_eq!(std::fs::read(on_disk).unwrap(), b"hello");
    }

    #[tokio::test]
    async fn test_write_creates_missing_directories() {
        let temp_dir = TempDir::new().unwrap();
        let base = temp_dir.path().join("deep/output");
        let storage = LocalStorage::new(base.to_str().unwrap().to_string());

        storage.write_file("out.zip", b"x").await.unwrap();

        assert!(base.join("out.zip").exists());
    }

    #[tokio::test]
    async fn test_read_uses_source_path_as_given() {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join("corpus.txt");
        tokio::fs::write(&source, b"some words").await.unwrap();

        let storage = LocalStorage::new("unrelated-base".to_string());
        let data = storage.read_file(source.to_str().unwrap()).await.unwrap();

        assert_eq!(data, b"some words");
    }

    #[tokio::test]
    async fn test_read_missing_file_fails() {
        let storage = LocalStorage::new(".".to_string());
        assert!(storage.read_file("definitely-missing.txt").await.is_err());
    }
}
