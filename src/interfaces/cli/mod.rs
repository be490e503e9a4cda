//! CLI interface module
//!
//! This module provides command-line interface functionality for quicklink.

pub mod commands;

use std::fmt;

use crate::cli::{Commands, ConfigCommands};
use crate::config::StaticConfig;
use crate::errors::QuicklinkError;
use crate::runtime::lifetime::prepare_startup;
use commands::{
    build_requests, config_generate, load_batch_file, resolve_link, show_stats, shorten_links,
};

#[derive(Debug)]
pub enum CliError {
    StorageError(String),
    ParseError(String),
    CommandError(String),
    ValidationError(Vec<String>),
    NotResolved(String),
}

impl CliError {
    /// Format as simple output
    pub fn format_simple(&self) -> String {
        match self {
            CliError::StorageError(msg) => format!("Storage error: {}", msg),
            CliError::ParseError(msg) => format!("Parse error: {}", msg),
            CliError::CommandError(msg) => format!("Command error: {}", msg),
            CliError::ValidationError(lines) => {
                format!("Validation failed:\n  {}", lines.join("\n  "))
            }
            CliError::NotResolved(msg) => msg.clone(),
        }
    }

    /// Format as colored output
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        match self {
            CliError::StorageError(msg) => {
                format!("{} {}", "Storage error:".red().bold(), msg.white())
            }
            CliError::ParseError(msg) => {
                format!("{} {}", "Parse error:".yellow().bold(), msg.white())
            }
            CliError::CommandError(msg) => {
                format!("{} {}", "Command error:".red().bold(), msg.white())
            }
            CliError::ValidationError(lines) => {
                let mut out = format!("{}", "Validation failed:".red().bold());
                for line in lines {
                    out.push_str(&format!("\n  {} {}", "✗".red(), line.white()));
                }
                out
            }
            CliError::NotResolved(msg) => format!("{} {}", "✗".red().bold(), msg.white()),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for CliError {}

impl From<QuicklinkError> for CliError {
    fn from(err: QuicklinkError) -> Self {
        match err {
            QuicklinkError::Validation(v) => CliError::ValidationError(v.messages()),
            QuicklinkError::Config(msg) | QuicklinkError::StorageBackendNotFound(msg) => {
                CliError::CommandError(msg)
            }
            other => CliError::StorageError(other.to_string()),
        }
    }
}

/// Run a CLI command from clap-parsed input
pub async fn run_cli_command(cmd: Commands, config: &StaticConfig) -> Result<(), CliError> {
    // config generate needs no storage
    if let Commands::Config { action } = cmd {
        let ConfigCommands::Generate { output_path, force } = action;
        return config_generate(output_path, force);
    }

    let context = prepare_startup(config)?;

    match cmd {
        Commands::Shorten {
            urls,
            validity,
            shortcodes,
            from_file,
        } => {
            let requests = match from_file {
                Some(path) => load_batch_file(&path)?,
                None => build_requests(urls, validity, shortcodes)?,
            };
            shorten_links(&context.shortener, requests).await
        }
        Commands::Stats => show_stats(&context.stats).await,
        Commands::Resolve { shortcode } => resolve_link(&context.resolver, &shortcode).await,
        Commands::Serve | Commands::Config { .. } => Err(CliError::CommandError(
            "this command is not available in CLI mode".to_string(),
        )),
    }
}
