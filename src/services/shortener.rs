//! Shortener service
//!
//! Turns a batch of submission requests into stored [`LinkRecord`]s. A batch
//! is validated as a whole first; any violation aborts it before anything is
//! written.

use std::sync::Arc;

use chrono::{DateTime, Duration, NaiveDate, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::ShortenerConfig;
use crate::errors::{QuicklinkError, ValidationError, Violation};
use crate::storage::{LinkRecord, LinkStore};
use crate::utils::{generate_random_code, is_alphanumeric, is_valid_url};

// ============ Request DTOs ============

/// One link submission, as entered in the form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenRequest {
    /// Target URL (required)
    pub long_url: String,
    /// Validity window in minutes, as typed
    #[serde(
        default,
        deserialize_with = "text_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub validity: Option<String>,
    /// Custom short code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shortcode: Option<String>,
}

impl ShortenRequest {
    pub fn new<T: Into<String>>(long_url: T) -> Self {
        Self {
            long_url: long_url.into(),
            ..Self::default()
        }
    }

    pub fn with_validity<T: Into<String>>(mut self, validity: T) -> Self {
        self.validity = Some(validity.into());
        self
    }

    pub fn with_shortcode<T: Into<String>>(mut self, shortcode: T) -> Self {
        self.shortcode = Some(shortcode.into());
        self
    }
}

/// Accept `"30"` as well as `30` from JSON clients.
fn text_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Integer(i64),
        Float(f64),
    }

    Ok(Option::<Raw>::deserialize(deserializer)?.map(|raw| match raw {
        Raw::Text(text) => text,
        Raw::Integer(n) => n.to_string(),
        // keeps the fraction (`30.0`) so floats never pass as whole minutes
        Raw::Float(f) => format!("{:?}", f),
    }))
}

/// Blank validity fields count as "not supplied".
fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// A custom shortcode is used verbatim; only an empty one counts as absent.
fn supplied_shortcode(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

fn parse_validity(raw: &str) -> Option<u32> {
    raw.parse::<u32>().ok().filter(|minutes| *minutes > 0)
}

/// Latest expiry the slot can hold: past year 9999 RFC 3339 needs a signed
/// year that cannot be read back.
fn latest_expiry() -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(9999, 12, 31)
        .and_then(|day| day.and_hms_milli_opt(23, 59, 59, 999))
        .map(|t| t.and_utc())
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}

/// Expiry for `minutes` after `created_at`, if it stays within the storable range.
fn expiry_after(created_at: DateTime<Utc>, minutes: u32) -> Option<DateTime<Utc>> {
    created_at
        .checked_add_signed(Duration::minutes(i64::from(minutes)))
        .filter(|expiry| *expiry <= latest_expiry())
}

// ============ Code generation ============

/// Source of short codes for requests that do not bring their own.
pub trait CodeGenerator: Send + Sync {
    fn generate(&self) -> String;
}

/// Random base-36 codes of a fixed length.
pub struct RandomCodeGenerator {
    length: usize,
}

impl RandomCodeGenerator {
    pub fn new(length: usize) -> Self {
        Self { length }
    }
}

impl Default for RandomCodeGenerator {
    fn default() -> Self {
        Self::new(6)
    }
}

impl CodeGenerator for RandomCodeGenerator {
    fn generate(&self) -> String {
        generate_random_code(self.length)
    }
}

// ============ ShortenerService ============

#[derive(Debug, Clone)]
pub struct ShortenerSettings {
    pub base_url: String,
    pub default_validity_minutes: u32,
    pub max_batch_size: usize,
}

impl ShortenerSettings {
    pub fn from_config(config: &ShortenerConfig) -> Self {
        Self {
            base_url: config.base_url.clone(),
            default_validity_minutes: config.default_validity_minutes,
            max_batch_size: config.max_batch_size,
        }
    }
}

impl Default for ShortenerSettings {
    fn default() -> Self {
        Self::from_config(&ShortenerConfig::default())
    }
}

pub struct ShortenerService {
    store: Arc<LinkStore>,
    generator: Arc<dyn CodeGenerator>,
    settings: ShortenerSettings,
}

impl ShortenerService {
    pub fn new(
        store: Arc<LinkStore>,
        generator: Arc<dyn CodeGenerator>,
        settings: ShortenerSettings,
    ) -> Self {
        Self {
            store,
            generator,
            settings,
        }
    }

    pub fn settings(&self) -> &ShortenerSettings {
        &self.settings
    }

    /// Check every request of the batch and report all violations together.
    pub fn validate(&self, requests: &[ShortenRequest]) -> Result<(), ValidationError> {
        self.validate_at(requests, Utc::now().trunc_subsecs(3))
    }

    /// Same as [`validate`](Self::validate) for a batch created at `created_at`.
    ///
    /// A validity whose expiry would fall after 9999-12-31 is a violation.
    pub fn validate_at(
        &self,
        requests: &[ShortenRequest],
        created_at: DateTime<Utc>,
    ) -> Result<(), ValidationError> {
        let mut violations = Vec::new();

        if requests.is_empty() || requests.len() > self.settings.max_batch_size {
            violations.push(Violation::BatchSize {
                len: requests.len(),
                max: self.settings.max_batch_size,
            });
        }

        for (i, request) in requests.iter().enumerate() {
            let index = i + 1;

            if !is_valid_url(request.long_url.trim()) {
                violations.push(Violation::InvalidUrl { index });
            }
            if let Some(code) = supplied_shortcode(&request.shortcode) {
                if !is_alphanumeric(code) {
                    violations.push(Violation::InvalidShortcode { index });
                }
            }
            if let Some(validity) = present(&request.validity) {
                let storable = parse_validity(validity)
                    .and_then(|minutes| expiry_after(created_at, minutes))
                    .is_some();
                if !storable {
                    violations.push(Violation::InvalidValidity { index });
                }
            }
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::new(violations))
        }
    }

    /// Shorten a batch, stamping records with the current time.
    pub async fn shorten(
        &self,
        requests: &[ShortenRequest],
    ) -> Result<Vec<LinkRecord>, QuicklinkError> {
        self.shorten_at(requests, Utc::now()).await
    }

    /// Shorten a batch created at `now`.
    ///
    /// Returns the new records in request order.
    pub async fn shorten_at(
        &self,
        requests: &[ShortenRequest],
        now: DateTime<Utc>,
    ) -> Result<Vec<LinkRecord>, QuicklinkError> {
        // the slot keeps millisecond precision
        let created_at = now.trunc_subsecs(3);
        self.validate_at(requests, created_at)?;
        let base = self.settings.base_url.trim_end_matches('/');

        let mut records = Vec::with_capacity(requests.len());
        for request in requests {
            let shortcode = supplied_shortcode(&request.shortcode)
                .map(str::to_string)
                .unwrap_or_else(|| self.generator.generate());
            let minutes = present(&request.validity)
                .and_then(parse_validity)
                .unwrap_or(self.settings.default_validity_minutes);
            let expiry = expiry_after(created_at, minutes).ok_or_else(|| {
                QuicklinkError::config(format!(
                    "shortener.default_validity_minutes ({}) puts the expiry past 9999-12-31",
                    minutes
                ))
            })?;

            debug!("Assigned shortcode {} ({} min)", shortcode, minutes);
            records.push(LinkRecord::new(
                request.long_url.trim().to_string(),
                format!("{}/{}", base, shortcode),
                expiry,
            ));
        }

        self.store.append_all(&records).await?;

        info!(
            count = records.len(),
            codes = ?records.iter().map(LinkRecord::shortcode).collect::<Vec<_>>(),
            "Shortening requested"
        );
        Ok(records)
    }
}
