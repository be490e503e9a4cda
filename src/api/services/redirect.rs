use actix_web::http::StatusCode;
use actix_web::{HttpResponse, Responder, web};
use std::sync::Arc;
use tracing::trace;

use crate::services::{Resolution, Resolver};
use crate::utils::is_alphanumeric;

pub struct RedirectService {}

impl RedirectService {
    pub async fn handle_redirect(
        path: web::Path<String>,
        resolver: web::Data<Arc<Resolver>>,
    ) -> impl Responder {
        let code = path.into_inner();

        if !is_alphanumeric(&code) {
            // 非法短码，直接 404（不读存储）
            trace!("Invalid short code rejected: {}", &code);
            return Self::failure_response(&Resolution::NotFound);
        }

        let resolution = resolver.resolve(&code).await;
        match resolution.target() {
            Some(target) => HttpResponse::build(StatusCode::TEMPORARY_REDIRECT)
                .insert_header(("Location", target))
                .finish(),
            None => Self::failure_response(&resolution),
        }
    }

    #[inline]
    fn failure_response(resolution: &Resolution) -> HttpResponse {
        let status = match resolution {
            Resolution::Expired(_) => StatusCode::GONE,
            _ => StatusCode::NOT_FOUND,
        };

        HttpResponse::build(status)
            .insert_header(("Content-Type", "text/plain; charset=utf-8"))
            .insert_header(("Cache-Control", "no-store"))
            .body(resolution.failure_message().unwrap_or("Not Found"))
    }
}

/// Must be registered after every fixed route; `/{code}` matches any single segment.
pub fn redirect_routes() -> actix_web::Resource {
    web::resource("/{code}")
        .route(web::get().to(RedirectService::handle_redirect))
        .route(web::head().to(RedirectService::handle_redirect))
}
