//! Middleware de CORS
//!
//! Este módulo maneja la configuración de CORS para que las pantallas de
//! reserva y el panel de administración puedan llamar a la API.

use axum::http::{HeaderName, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Crear middleware de CORS configurado para desarrollo
/// NOTA: Permite cualquier origen - solo para desarrollo
pub fn cors_middleware() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Crear middleware de CORS con orígenes específicos
pub fn cors_middleware_with_origins(origins: &[String]) -> CorsLayer {
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| HeaderValue::from_str(origin).ok())
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            HeaderName::from_static("content-type"),
            HeaderName::from_static("accept"),
            HeaderName::from_static("origin"),
            HeaderName::from_static("x-admin-key"),
        ])
        .max_age(std::time::Duration::from_secs(3600))
}

/// Orígenes explícitos si hay, permisivo si no
pub fn cors_for(origins: &[String]) -> CorsLayer {
    if origins.is_empty() {
        cors_middleware()
    } else {
        cors_middleware_with_origins(origins)
    }
}
