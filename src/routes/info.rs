use actix_web::{web, HttpResponse, Responder};
use crate::models::{HealthResponse, ServiceInfoResponse};
use crate::routes::intent::AppState;

pub const SERVICE_NAME: &str = "ArchIntent AI Microservice";

/// Service info endpoint
///
/// GET /
async fn service_info() -> impl Responder {
    HttpResponse::Ok().json(ServiceInfoResponse {
        service: SERVICE_NAME.to_string(),
        status: "running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Health check endpoint
///
/// GET /api/v1/health
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
        catalog_size: state.catalog.len(),
    })
}

pub fn configure_root(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(service_info));
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check));
}
