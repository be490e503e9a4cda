//! Short code resolution
//!
//! The resolver only decides; callers perform the redirect.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::storage::{LinkRecord, LinkStore};

/// Outcome of looking up a short code at a given instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Matching record still within its validity window
    Active(LinkRecord),
    /// Matching record whose expiry has passed
    Expired(LinkRecord),
    NotFound,
}

impl Resolution {
    /// Redirect target, only for active links.
    pub fn target(&self) -> Option<&str> {
        match self {
            Resolution::Active(record) => Some(&record.long_url),
            _ => None,
        }
    }

    /// User-facing explanation for a failed lookup.
    pub fn failure_message(&self) -> Option<&'static str> {
        match self {
            Resolution::Active(_) => None,
            Resolution::Expired(_) => Some("This short link has expired."),
            Resolution::NotFound => Some("Invalid shortcode or link not found."),
        }
    }
}

pub struct Resolver {
    store: Arc<LinkStore>,
}

impl Resolver {
    pub fn new(store: Arc<LinkStore>) -> Self {
        Self { store }
    }

    pub async fn resolve(&self, code: &str) -> Resolution {
        self.resolve_at(code, Utc::now()).await
    }

    /// Look `code` up and judge it against `now`. Reads the store every call.
    pub async fn resolve_at(&self, code: &str, now: DateTime<Utc>) -> Resolution {
        let resolution = match self.store.find_by_shortcode(code).await {
            None => Resolution::NotFound,
            Some(record) if record.is_expired_at(now) => Resolution::Expired(record),
            Some(record) => Resolution::Active(record),
        };

        match &resolution {
            Resolution::Active(record) => debug!("Resolved {} -> {}", code, record.long_url),
            Resolution::Expired(record) => {
                debug!("Shortcode {} expired at {}", code, record.expiry)
            }
            Resolution::NotFound => debug!("Shortcode not found: {}", code),
        }
        resolution
    }
}
