//! Slot backends
//!
//! A slot backend stores opaque string values under string keys. The link
//! store keeps its whole record list in one slot, so a backend only needs
//! whole-value `load` and `save`.

mod file;
mod memory;

use async_trait::async_trait;

use crate::errors::Result;

pub use file::FileBackend;
pub use memory::MemoryBackend;

#[async_trait]
pub trait SlotBackend: Send + Sync {
    /// Raw value stored under `key`, or `None` when the slot was never written.
    async fn load(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value stored under `key`.
    async fn save(&self, key: &str, value: &str) -> Result<()>;

    fn backend_name(&self) -> &'static str;
}
