//! Health check endpoint.

use actix_web::{HttpResponse, web};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub database: &'static str,
    pub timestamp: String,
}

/// Health check endpoint - reports whether the store answers.
///
/// GET /api/health
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    let (status, database, mut builder) = match state.store.ping().await {
        Ok(()) => ("ok", "up", HttpResponse::Ok()),
        Err(e) => {
            tracing::warn!("Database ping failed: {}", e);
            ("degraded", "down", HttpResponse::ServiceUnavailable())
        }
    };

    builder.json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        database,
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}
