use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};

use crate::controllers::quote_controller::QuoteController;
use crate::dto::quote_dto::{QuoteRequest, QuoteResponse, QuotesResponse, TripRequest};
use crate::dto::response_dto::ApiResponse;
use crate::dto::tariff_dto::TariffsResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_quote_router() -> Router<AppState> {
    Router::new()
        .route("/", post(quote))
        .route("/all", post(quote_all))
}

pub fn create_tariff_router() -> Router<AppState> {
    Router::new().route("/", get(list_tariffs))
}

async fn quote(
    State(state): State<AppState>,
    Json(request): Json<QuoteRequest>,
) -> Result<Json<ApiResponse<QuoteResponse>>, AppError> {
    let controller = QuoteController::new(&state);
    let response = controller.quote(request).await?;
    Ok(Json(ApiResponse::success(response)))
}

async fn quote_all(
    State(state): State<AppState>,
    Json(request): Json<TripRequest>,
) -> Result<Json<ApiResponse<QuotesResponse>>, AppError> {
    let controller = QuoteController::new(&state);
    let response = controller.quote_all(request).await?;
    Ok(Json(ApiResponse::success(response)))
}

async fn list_tariffs(State(state): State<AppState>) -> Json<ApiResponse<TariffsResponse>> {
    let controller = QuoteController::new(&state);
    Json(ApiResponse::success(controller.tariffs()))
}
