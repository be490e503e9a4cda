//! Input predicates for submitted links
//!
//! Structural checks only: nothing here touches the network.

use url::Url;

/// Whether `candidate` is an absolute URL with a scheme and an authority.
///
/// `mailto:` style URLs parse but carry no host, so they are rejected.
pub fn is_valid_url(candidate: &str) -> bool {
    match Url::parse(candidate) {
        Ok(url) => url.host_str().is_some_and(|host| !host.is_empty()),
        Err(_) => false,
    }
}

/// Whether `candidate` is a non-empty run of ASCII letters and digits.
pub fn is_alphanumeric(candidate: &str) -> bool {
    !candidate.is_empty() && candidate.chars().all(|c| c.is_ascii_alphanumeric())
}
