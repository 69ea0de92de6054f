use uuid::Uuid;
use validator::Validate;

use crate::dto::response_dto::ApiResponse;
use crate::dto::zone_dto::ZoneRequest;
use crate::models::zone::ZoneFare;
use crate::services::zone_registry::ZoneRegistry;
use crate::state::AppState;
use crate::utils::errors::{not_found_error, AppError};

pub struct ZoneController {
    registry: ZoneRegistry,
    admin_api_key: Option<String>,
}

impl ZoneController {
    pub fn new(state: &AppState) -> Self {
        Self {
            registry: state.zones.clone(),
            admin_api_key: state.config.admin_api_key.clone(),
        }
    }

    /// Sin clave configurada no se exige nada
    pub fn authorize(&self, provided: Option<&str>) -> Result<(), AppError> {
        match (&self.admin_api_key, provided) {
            (None, _) => Ok(()),
            (Some(expected), Some(given)) if expected == given => Ok(()),
            (Some(_), Some(_)) => Err(AppError::Unauthorized("Invalid admin key".to_string())),
            (Some(_), None) => Err(AppError::Unauthorized("Admin key required".to_string())),
        }
    }

    pub async fn list(&self) -> Vec<ZoneFare> {
        self.registry.snapshot().await
    }

    pub async fn get(&self, id: Uuid) -> Result<ZoneFare, AppError> {
        self.registry
            .get(id)
            .await
            .ok_or_else(|| not_found_error("Zone", &id.to_string()))
    }

    pub async fn create(&self, request: ZoneRequest) -> Result<ApiResponse<ZoneFare>, AppError> {
        request.validate()?;
        let zone = self.registry.insert(request.into_zone()).await;
        Ok(ApiResponse::success_with_message(
            zone,
            "Zone created".to_string(),
        ))
    }

    pub async fn update(&self, id: Uuid, request: ZoneRequest) -> Result<ApiResponse<ZoneFare>, AppError> {
        request.validate()?;
        let zone = self
            .registry
            .replace(id, request.into_zone())
            .await
            .ok_or_else(|| not_found_error("Zone", &id.to_string()))?;
        Ok(ApiResponse::success_with_message(
            zone,
            "Zone updated".to_string(),
        ))
    }

    pub async fn delete(&self, id: Uuid) -> Result<ZoneFare, AppError> {
        self.registry
            .remove(id)
            .await
            .ok_or_else(|| not_found_error("Zone", &id.to_string()))
    }
}
