//! Link store
//!
//! Owns the ordered list of [`LinkRecord`]s kept in the `url-stats` slot.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, warn};

use super::backend::SlotBackend;
use super::models::LinkRecord;
use crate::errors::Result;

/// Key of the slot holding every link record.
pub const LINKS_SLOT_KEY: &str = "url-stats";

pub struct LinkStore {
    backend: Arc<dyn SlotBackend>,
    // read-modify-write in append_all must not interleave
    write_lock: Mutex<()>,
}

impl LinkStore {
    pub fn new(backend: Arc<dyn SlotBackend>) -> Self {
        Self {
            backend,
            write_lock: Mutex::new(()),
        }
    }

    pub fn backend_name(&self) -> &'static str {
        self.backend.backend_name()
    }

    /// Every stored record in insertion order.
    ///
    /// A missing, unreadable or malformed slot reads as an empty list.
    pub async fn load_all(&self) -> Vec<LinkRecord> {
        let raw = match self.backend.load(LINKS_SLOT_KEY).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!("Failed to read link slot, treating as empty: {}", e);
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<LinkRecord>>(&raw) {
            Ok(records) => {
                debug!("Loaded {} link records", records.len());
                records
            }
            Err(e) => {
                warn!("Link slot is corrupt, treating as empty: {}", e);
                Vec::new()
            }
        }
    }

    /// Append `records` after the existing ones and write the full list back.
    pub async fn append_all(&self, records: &[LinkRecord]) -> Result<()> {
        if records.is_empty() {
            return Ok(());
        }

        let _guard = self.write_lock.lock().await;

        let mut all = self.load_all().await;
        all.extend_from_slice(records);

        let json = serde_json::to_string(&all)?;
        self.backend.save(LINKS_SLOT_KEY, &json).await?;

        debug!(
            "Appended {} link records ({} total)",
            records.len(),
            all.len()
        );
        Ok(())
    }

    /// First stored record whose short URL ends in `/<code>`.
    pub async fn find_by_shortcode(&self, code: &str) -> Option<LinkRecord> {
        self.load_all()
            .await
            .into_iter()
            .find(|record| record.matches_code(code))
    }
}
