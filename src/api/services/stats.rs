use std::sync::Arc;

use actix_web::{HttpResponse, Responder, web};

use crate::services::StatsService;

pub struct StatsRouteService {}

impl StatsRouteService {
    pub async fn handle_stats(stats: web::Data<Arc<StatsService>>) -> impl Responder {
        HttpResponse::Ok().json(stats.entries().await)
    }
}

pub fn stats_routes() -> actix_web::Resource {
    web::resource("/stats").route(web::get().to(StatsRouteService::handle_stats))
}
