//! CLI command implementations
//!
//! This module re-exports all CLI command functions.

mod config_gen;
mod resolve;
mod shorten;
mod stats;

pub use config_gen::config_generate;
pub use resolve::resolve_link;
pub use shorten::{build_requests, load_batch_file, shorten_links};
pub use stats::show_stats;
