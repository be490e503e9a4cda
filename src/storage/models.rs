use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A persisted short link.
///
/// Serialised with camelCase keys so the slot keeps the
/// `{longUrl, shortUrl, expiry}` layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkRecord {
    pub long_url: String,
    pub short_url: String,
    #[serde(with = "iso8601_millis")]
    pub expiry: DateTime<Utc>,
}

impl LinkRecord {
    pub fn new(long_url: String, short_url: String, expiry: DateTime<Utc>) -> Self {
        Self {
            long_url,
            short_url,
            expiry,
        }
    }

    /// Whether this record's short URL ends in `/<code>`.
    pub fn matches_code(&self, code: &str) -> bool {
        self.short_url
            .strip_suffix(code)
            .is_some_and(|rest| rest.ends_with('/'))
    }

    /// The trailing path segment of the short URL.
    pub fn shortcode(&self) -> &str {
        self.short_url
            .rsplit_once('/')
            .map_or(self.short_url.as_str(), |(_, code)| code)
    }

    /// 到期判定：`now` 严格晚于 `expiry` 才算过期
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now > self.expiry
    }
}

/// Writes `2025-01-01T12:00:00.000Z`, reads any RFC 3339 instant.
mod iso8601_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}
