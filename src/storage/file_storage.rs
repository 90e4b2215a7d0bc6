use crate::{
    config::BoardConfig,
    error::Result,
    storage::{validate_key, Storage},
};
use async_trait::async_trait;
use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};
use tokio::fs;

/// File-based storage: one JSON file per key
pub struct FileStorage {
    root_path: PathBuf,
}

impl FileStorage {
    const DATA_DIR: &'static str = ".office-kanban";
    const EXTENSION: &'static str = "json";

    /// Creates a new FileStorage rooted in `<data_dir>/.office-kanban`
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            root_path: data_dir.as_ref().join(Self::DATA_DIR),
        }
    }

    /// Creates a FileStorage under the configured `data_dir`
    pub fn from_config(config: &BoardConfig) -> Self {
        Self::new(&config.data_dir)
    }

    pub fn root_path(&self) -> &Path {
        &self.root_path
    }

    fn item_file(&self, key: &str) -> Result<PathBuf> {
        validate_key(key)?;
        Ok(self
            .root_path
            .join(format!("{}.{}", key, Self::EXTENSION)))
    }

    async fn ensure_directory_exists(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).await?;
        }
        Ok(())
    }
}

#[async_trait]
impl Storage for FileStorage {
    async fn get_item(&self, key: &str) -> Result<Option<String>> {
        let file_path = self.item_file(key)?;

        match fs::read_to_string(&file_path).await {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let file_path = self.item_file(key)?;
        self.ensure_directory_exists(&self.root_path).await?;

        // Write then rename, so a crash mid-write leaves the old value intact.
        let tmp_path = file_path.with_extension("json.tmp");
        fs::write(&tmp_path, value).await?;
        fs::rename(&tmp_path, &file_path).await?;

        tracing::trace!(key, bytes = value.len(), "stored item");
        Ok(())
    }

    async fn remove_item(&self, key: &str) -> Result<()> {
        let file_path = self.item_file(key)?;

        match fs::remove_file(&file_path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
