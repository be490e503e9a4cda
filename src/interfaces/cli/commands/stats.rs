//! Stats command

use colored::Colorize;

use crate::interfaces::cli::CliError;
use crate::services::{LinkStatus, StatsService};

pub async fn show_stats(stats: &StatsService) -> Result<(), CliError> {
    let entries = stats.entries().await;

    if entries.is_empty() {
        println!("{} No short links found", "ℹ".bold().blue());
        return Ok(());
    }

    println!("{}", "Statistics:".bold().green());
    println!();
    for entry in &entries {
        let status = match entry.status {
            LinkStatus::Active => entry.status.to_string().green(),
            LinkStatus::Expired => entry.status.to_string().red(),
        };
        println!(
            "  {} -> {} {} [{}]",
            entry.record.short_url.cyan(),
            entry.record.long_url.blue().underline(),
            format!(
                "(expires: {})",
                entry.record.expiry.format("%Y-%m-%d %H:%M:%S UTC")
            )
            .dimmed()
            .yellow(),
            status
        );
    }
    Ok(())
}
