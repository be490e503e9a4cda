use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::{debug, error, info};

use super::SlotBackend;
use crate::errors::{QuicklinkError, Result};

/// Stores each slot as `<data_dir>/<key>.json`.
pub struct FileBackend {
    data_dir: PathBuf,
}

impl FileBackend {
    pub fn new<P: Into<PathBuf>>(data_dir: P) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn slot_path(&self, key: &str) -> PathBuf {
        self.data_dir.join(format!("{}.json", key))
    }

    fn ensure_data_dir(&self) -> Result<()> {
        if !self.data_dir.exists() {
            fs::create_dir_all(&self.data_dir).map_err(|e| {
                QuicklinkError::file_operation(format!(
                    "Failed to create data directory {}: {}",
                    self.data_dir.display(),
                    e
                ))
            })?;
            info!("Created data directory: {}", self.data_dir.display());
        }
        Ok(())
    }
}

#[async_trait]
impl SlotBackend for FileBackend {
    async fn load(&self, key: &str) -> Result<Option<String>> {
        let path = self.slot_path(key);
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("Slot file not found: {}", path.display());
                Ok(None)
            }
            Err(e) => {
                error!("Failed to read slot file {}: {}", path.display(), e);
                Err(QuicklinkError::file_operation(format!(
                    "Failed to read {}: {}",
                    path.display(),
                    e
                )))
            }
        }
    }

    async fn save(&self, key: &str, value: &str) -> Result<()> {
        self.ensure_data_dir()?;

        // 先写临时文件再重命名，避免留下写了一半的文件
        let path = self.slot_path(key);
        let tmp_path = self.data_dir.join(format!("{}.json.tmp", key));
        fs::write(&tmp_path, value).map_err(|e| {
            error!("Failed to write slot file {}: {}", tmp_path.display(), e);
            QuicklinkError::file_operation(format!("Failed to write {}: {}", tmp_path.display(), e))
        })?;
        fs::rename(&tmp_path, &path).map_err(|e| {
            error!("Failed to replace slot file {}: {}", path.display(), e);
            QuicklinkError::file_operation(format!("Failed to replace {}: {}", path.display(), e))
        })?;

        debug!("Saved slot {} ({} bytes)", key, value.len());
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "file"
    }
}
