//! Root and health check endpoints.

use actix_web::{web, HttpResponse};
use serde::Serialize;

use crate::config::AppConfig;

#[derive(Serialize)]
pub struct RootResponse {
    pub message: String,
    pub version: &'static str,
    pub environment: String,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub environment: String,
    pub timestamp: String,
}

/// GET / - informative root endpoint.
pub async fn root(config: web::Data<AppConfig>) -> HttpResponse {
    HttpResponse::Ok().json(RootResponse {
        message: "Welcome to the Blog API".to_string(),
        version: env!("CARGO_PKG_VERSION"),
        environment: config.environment.clone(),
    })
}

/// GET /health - returns server status, usable by monitoring.
pub async fn health_check(config: web::Data<AppConfig>) -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy",
        environment: config.environment.clone(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}
