use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::storage::{LinkRecord, LinkStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkStatus {
    Active,
    Expired,
}

impl std::fmt::Display for LinkStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Active => write!(f, "active"),
            Self::Expired => write!(f, "expired"),
        }
    }
}

/// A stored record as shown in the statistics listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatsEntry {
    #[serde(flatten)]
    pub record: LinkRecord,
    pub status: LinkStatus,
}

/// Read-only listing of every stored link, expired ones included.
pub struct StatsService {
    store: Arc<LinkStore>,
}

impl StatsService {
    pub fn new(store: Arc<LinkStore>) -> Self {
        Self { store }
    }

    pub async fn entries(&self) -> Vec<StatsEntry> {
        self.entries_at(Utc::now()).await
    }

    pub async fn entries_at(&self, now: DateTime<Utc>) -> Vec<StatsEntry> {
        self.store
            .load_all()
            .await
            .into_iter()
            .map(|record| {
                let status = if record.is_expired_at(now) {
                    LinkStatus::Expired
                } else {
                    LinkStatus::Active
                };
                StatsEntry { record, status }
            })
            .collect()
    }
}
