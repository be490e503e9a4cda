//! Resolve command

use colored::Colorize;

use crate::interfaces::cli::CliError;
use crate::services::Resolver;

pub async fn resolve_link(resolver: &Resolver, shortcode: &str) -> Result<(), CliError> {
    let resolution = resolver.resolve(shortcode).await;

    match resolution.target() {
        Some(target) => {
            println!(
                "{} {} -> {}",
                "→".bold().green(),
                shortcode.cyan(),
                target.blue().underline()
            );
            Ok(())
        }
        None => Err(CliError::NotResolved(
            resolution
                .failure_message()
                .unwrap_or("Invalid shortcode or link not found.")
                .to_string(),
        )),
    }
}
