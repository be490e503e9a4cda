//! Shorten command

use std::fs;

use colored::Colorize;

use crate::interfaces::cli::CliError;
use crate::services::{ShortenRequest, ShortenerService};

/// Read a JSON request array from `path`.
pub fn load_batch_file(path: &str) -> Result<Vec<ShortenRequest>, CliError> {
    let content = fs::read_to_string(path)
        .map_err(|e| CliError::CommandError(format!("Failed to read {}: {}", path, e)))?;
    serde_json::from_str(&content)
        .map_err(|e| CliError::ParseError(format!("Invalid batch file {}: {}", path, e)))
}

/// Pair each URL with the shared validity and its positional shortcode.
pub fn build_requests(
    urls: Vec<String>,
    validity: Option<String>,
    shortcodes: Vec<String>,
) -> Result<Vec<ShortenRequest>, CliError> {
    if shortcodes.len() > urls.len() {
        return Err(CliError::ParseError(format!(
            "{} shortcodes given for {} URLs",
            shortcodes.len(),
            urls.len()
        )));
    }

    let mut shortcodes = shortcodes.into_iter();
    Ok(urls
        .into_iter()
        .map(|long_url| ShortenRequest {
            long_url,
            validity: validity.clone(),
            shortcode: shortcodes.next(),
        })
        .collect())
}

pub async fn shorten_links(
    shortener: &ShortenerService,
    requests: Vec<ShortenRequest>,
) -> Result<(), CliError> {
    let records = shortener.shorten(&requests).await?;

    for record in &records {
        println!(
            "{} {} -> {} (expires: {})",
            "✓".bold().green(),
            record.short_url.cyan(),
            record.long_url.blue().underline(),
            record
                .expiry
                .format("%Y-%m-%d %H:%M:%S UTC")
                .to_string()
                .yellow()
        );
    }
    Ok(())
}
