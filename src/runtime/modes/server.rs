//! Server mode
//!
//! This module contains the HTTP server startup logic.
//! It configures and starts the HTTP server with all necessary routes.

use actix_web::{
    App, HttpServer,
    middleware::{Compress, DefaultHeaders},
    web,
};
use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::api::services::{redirect_routes, shorten_routes, stats_routes};
use crate::config::StaticConfig;
use crate::runtime::lifetime::StartupContext;

/// 请求体上限，五条链接的批次远小于此
const JSON_LIMIT: usize = 64 * 1024;

/// Register shared services and every route on an app
///
/// `/{code}` is registered last so the fixed routes win.
pub fn build_app(
    context: &StartupContext,
) -> impl Fn(&mut web::ServiceConfig) + Clone + Send + use<> {
    let context = context.clone();
    move |cfg: &mut web::ServiceConfig| {
        cfg.app_data(web::Data::new(context.shortener.clone()))
            .app_data(web::Data::new(context.resolver.clone()))
            .app_data(web::Data::new(context.stats.clone()))
            .app_data(web::JsonConfig::default().limit(JSON_LIMIT))
            .service(stats_routes())
            .service(shorten_routes())
            .service(redirect_routes());
    }
}

/// Run the HTTP server
///
/// **Note**: Logging system must be initialized before calling this function
pub async fn run_server(config: &StaticConfig, context: StartupContext) -> Result<()> {
    let workers = config.server.workers.clamp(1, 32);
    let bind_address = format!("{}:{}", config.server.host, config.server.port);

    info!(
        "Links are stored in the '{}' backend, short URLs use {}",
        context.store.backend_name(),
        config.shortener.base_url
    );
    if !config
        .shortener
        .base_url
        .ends_with(&format!(":{}", config.server.port))
    {
        warn!(
            "shortener.base_url ({}) does not point at port {}; short URLs only resolve through a proxy",
            config.shortener.base_url, config.server.port
        );
    }

    let configure = build_app(&context);
    let server = HttpServer::new(move || {
        App::new()
            .wrap(Compress::default())
            .wrap(
                DefaultHeaders::new()
                    .add(("Cache-Control", "no-cache, no-store, must-revalidate")),
            )
            .configure(configure.clone())
    })
    .keep_alive(std::time::Duration::from_secs(30))
    .workers(workers)
    .bind(&bind_address)
    .with_context(|| format!("Failed to bind {}", bind_address))?;

    info!("Starting server at http://{} ({} workers)", bind_address, workers);
    server.run().await.context("HTTP server error")?;

    info!("Server stopped");
    Ok(())
}
