use std::sync::Arc;

use tracing::info;

use crate::config::StorageConfig;
use crate::errors::{QuicklinkError, Result};

pub mod backend;
pub mod link_store;
pub mod models;

pub use backend::{FileBackend, MemoryBackend, SlotBackend};
pub use link_store::{LINKS_SLOT_KEY, LinkStore};
pub use models::LinkRecord;

pub struct StorageFactory;

impl StorageFactory {
    /// Build the slot backend named by `storage.backend`.
    pub fn create(config: &StorageConfig) -> Result<Arc<dyn SlotBackend>> {
        let backend: Arc<dyn SlotBackend> = match config.backend.as_str() {
            "file" => Arc::new(FileBackend::new(&config.data_dir)),
            "memory" => Arc::new(MemoryBackend::new()),
            other => {
                return Err(QuicklinkError::storage_backend_not_found(format!(
                    "Unknown storage backend '{}'. Supported: file, memory",
                    other
                )));
            }
        };

        info!("Using storage backend: {}", backend.backend_name());
        Ok(backend)
    }
}
