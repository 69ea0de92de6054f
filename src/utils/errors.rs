//! Sistema de manejo de errores
//!
//! Este módulo define los errores del dominio de tarificación y los errores
//! de la aplicación, con su conversión a respuestas HTTP apropiadas.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Errores del cálculo de tarifas
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PricingError {
    /// Entrada rechazada: distancia/duración negativa, tier desconocido o IVA fuera de rango
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Zona sin precio para el tier solicitado; el estimador lo trata como "sin zona"
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl PricingError {
    pub fn invalid(message: impl Into<String>) -> Self {
        PricingError::InvalidInput(message.into())
    }
}

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Pricing error: {0}")]
    Pricing(#[from] PricingError),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Respuesta de error para la API
#[derive(Debug, serde::Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_response) = match self {
            AppError::Pricing(PricingError::InvalidInput(msg)) => {
                tracing::warn!("Invalid pricing input: {}", msg);
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse {
                        error: "Invalid Input".to_string(),
                        message: msg,
                        details: None,
                        code: Some("INVALID_INPUT".to_string()),
                    },
                )
            }

            // El estimador resuelve las zonas sin precio por su cuenta; este
            // caso solo llega aquí si otra capa propaga el error tal cual.
            AppError::Pricing(PricingError::Configuration(msg)) => {
                tracing::error!("Pricing configuration error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        error: "Configuration Error".to_string(),
                        message: "Price unavailable".to_string(),
                        details: Some(json!({ "configuration_error": msg })),
                        code: Some("CONFIGURATION_ERROR".to_string()),
                    },
                )
            }

            AppError::Validation(e) => {
                tracing::warn!("Validation error: {}", e);
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse {
                        error: "Validation Error".to_string(),
                        message: "The provided data is invalid".to_string(),
                        details: Some(json!(e)),
                        code: Some("VALIDATION_ERROR".to_string()),
                    },
                )
            }

            AppError::Unauthorized(msg) => {
                tracing::warn!("Unauthorized access: {}", msg);
                (
                    StatusCode::UNAUTHORIZED,
                    ErrorResponse {
                        error: "Unauthorized".to_string(),
                        message: msg,
                        details: None,
                        code: Some("UNAUTHORIZED".to_string()),
                    },
                )
            }

            AppError::NotFound(msg) => {
                tracing::warn!("Resource not found: {}", msg);
                (
                    StatusCode::NOT_FOUND,
                    ErrorResponse {
                        error: "Not Found".to_string(),
                        message: msg,
                        details: None,
                        code: Some("NOT_FOUND".to_string()),
                    },
                )
            }

            AppError::BadRequest(msg) => {
                tracing::warn!("Bad request: {}", msg);
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse {
                        error: "Bad Request".to_string(),
                        message: msg,
                        details: None,
                        code: Some("BAD_REQUEST".to_string()),
                    },
                )
            }
        };

        (status, Json(error_response)).into_response()
    }
}

/// Función helper para crear errores de recurso no encontrado
pub fn not_found_error(resource: &str, id: &str) -> AppError {
    AppError::NotFound(format!("{} with id '{}' not found", resource, id))
}
