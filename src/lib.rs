//! quicklink - a small batch URL shortener
//!
//! Long URLs are submitted in batches of up to five, each given a short code
//! (custom or generated) and a validity window. Mappings live in a single
//! key-value slot; resolving a code redirects only while the link is valid.
//!
//! # Features
//! - **server**: HTTP server mode (default)
//! - **cli**: Command-line interface
//!
//! # Architecture
//! - `utils`: URL and short code validators, code generation
//! - `storage`: Slot backends and the link store
//! - `services`: Shortener, resolver and statistics
//! - `api`: HTTP routes
//! - `interfaces`: CLI commands
//! - `config`: Configuration loading
//! - `runtime`: Startup wiring and execution modes
//! - `system`: Logging

#[cfg(feature = "server")]
pub mod api;
pub mod cli;
pub mod config;
pub mod errors;
pub mod interfaces;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod system;
pub mod utils;
