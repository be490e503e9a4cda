pub mod helpers;
pub mod redirect;
pub mod shorten;
pub mod stats;

pub use redirect::{RedirectService, redirect_routes};
pub use shorten::{ShortenService, shorten_routes};
pub use stats::{StatsRouteService, stats_routes};
