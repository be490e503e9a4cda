use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, Responder, web};
use tracing::{error, info};

use super::helpers::error_response;
use crate::errors::QuicklinkError;
use crate::services::{ShortenRequest, ShortenerService};

pub struct ShortenService {}

impl ShortenService {
    /// `POST /` with a JSON array of requests
    pub async fn handle_shorten(
        body: web::Json<Vec<ShortenRequest>>,
        shortener: web::Data<Arc<ShortenerService>>,
    ) -> impl Responder {
        let requests = body.into_inner();

        match shortener.shorten(&requests).await {
            Ok(records) => HttpResponse::build(StatusCode::CREATED).json(records),
            Err(e) => {
                match &e {
                    QuicklinkError::Validation(v) => {
                        info!("Rejected batch of {}: {}", requests.len(), v.messages().join("; "))
                    }
                    other => error!("Failed to store shortened links: {}", other),
                }
                error_response(&e)
            }
        }
    }
}

pub fn shorten_routes() -> actix_web::Resource {
    web::resource("/").route(web::post().to(ShortenService::handle_shorten))
}
