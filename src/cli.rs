//! Command-line interface definitions using clap
//!
//! This module defines the CLI structure for quicklink using clap's derive macros.

use clap::{Parser, Subcommand};

/// quicklink - batch URL shortener with expiring links
#[derive(Parser, Debug)]
#[command(name = "quicklink")]
#[command(version)]
#[command(about = "Batch URL shortener with expiring links", long_about = None)]
pub struct Cli {
    /// Configuration file (default: config.toml)
    #[arg(long, short = 'c', global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP server (default when no command is given)
    Serve,

    /// Shorten one or more URLs in a single batch
    ///
    /// Each URL is taken verbatim, commas included. `--validity` applies to
    /// every URL; the n-th `--shortcode` goes to the n-th URL (pass "" to
    /// skip one), e.g. `shorten https://a.com https://b.com -s "" -s promo`.
    Shorten {
        /// URLs to shorten
        #[arg(required_unless_present = "from_file", num_args = 1..)]
        urls: Vec<String>,

        /// Validity window in minutes for every URL of the batch
        #[arg(long, short = 'v', conflicts_with = "from_file")]
        validity: Option<String>,

        /// Custom short code, repeatable, matched to the URLs in order
        #[arg(long = "shortcode", short = 's', conflicts_with = "from_file")]
        shortcodes: Vec<String>,

        /// Read the batch from a JSON file instead
        /// ([{"longUrl": ..., "validity": ..., "shortcode": ...}])
        #[arg(long, conflicts_with = "urls")]
        from_file: Option<String>,
    },

    /// List every stored link with its status
    Stats,

    /// Resolve a short code to its target URL
    Resolve {
        /// Short code to look up
        shortcode: String,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

/// Configuration management commands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Generate example configuration file
    Generate {
        /// Output path (default: stdout)
        output_path: Option<String>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
