//! Service layer for business logic
//!
//! Shared by the HTTP routes and the CLI commands.

mod resolver;
mod shortener;
mod stats;

pub use resolver::{Resolution, Resolver};
pub use shortener::{
    CodeGenerator, RandomCodeGenerator, ShortenRequest, ShortenerService, ShortenerSettings,
};
pub use stats::{LinkStatus, StatsEntry, StatsService};
