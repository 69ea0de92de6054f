//! Motor de tarifas VTC
//!
//! Cotización de trayectos para un servicio de chófer suizo: tarifas por tier,
//! suplementos, IVA y tarifas fijas por zona, expuestas por una API HTTP.

pub mod config;
pub mod controllers;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;

use axum::{response::Json, routing::get, Router};
use serde_json::json;
use tower_http::trace::TraceLayer;

use middleware::cors::cors_for;
use state::AppState;

/// Router completo de la API
pub fn create_app(state: AppState) -> Router {
    let cors = cors_for(&state.config.cors_origins);

    Router::new()
        .route("/health", get(health_check))
        .nest("/api/tariffs", routes::quote_routes::create_tariff_router())
        .nest("/api/quotes", routes::quote_routes::create_quote_router())
        .nest("/api/zones", routes::zone_routes::create_zone_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Health check simple
async fn health_check() -> Json<serde_json::Value> {
    Json(json!({
        "service": "vtc-fare-engine",
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
