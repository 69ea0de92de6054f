use axum::{
    extract::{Path, State},
    http::HeaderMap,
    routing::get,
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::zone_controller::ZoneController;
use crate::dto::response_dto::ApiResponse;
use crate::dto::zone_dto::ZoneRequest;
use crate::models::zone::ZoneFare;
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Cabecera con la clave de administración
pub const ADMIN_KEY_HEADER: &str = "x-admin-key";

pub fn create_zone_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_zones).post(create_zone))
        .route("/:id", get(get_zone).put(update_zone).delete(delete_zone))
}

fn admin_key(headers: &HeaderMap) -> Option<&str> {
    headers.get(ADMIN_KEY_HEADER).and_then(|v| v.to_str().ok())
}

async fn list_zones(State(state): State<AppState>) -> Json<ApiResponse<Vec<ZoneFare>>> {
    let controller = ZoneController::new(&state);
    Json(ApiResponse::success(controller.list().await))
}

async fn get_zone(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<ZoneFare>>, AppError> {
    let controller = ZoneController::new(&state);
    let zone = controller.get(id).await?;
    Ok(Json(ApiResponse::success(zone)))
}

async fn create_zone(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<ZoneRequest>,
) -> Result<Json<ApiResponse<ZoneFare>>, AppError> {
    let controller = ZoneController::new(&state);
    controller.authorize(admin_key(&headers))?;
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn update_zone(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
    Json(request): Json<ZoneRequest>,
) -> Result<Json<ApiResponse<ZoneFare>>, AppError> {
    let controller = ZoneController::new(&state);
    controller.authorize(admin_key(&headers))?;
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn delete_zone(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = ZoneController::new(&state);
    controller.authorize(admin_key(&headers))?;
    let zone = controller.delete(id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": format!("Zone '{}' deleted", zone.name)
    })))
}
