use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Extension, Json, Router,
};

use crate::controllers::reservation_controller::ReservationController;
use crate::dto::reservation_dto::{
    ApiResponse, CreateReservationRequest, ReservationListItem, ReservationResponse,
    UpdateReservationRequest,
};
use crate::middleware::auth::AuthenticatedUser;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_reservation_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_reservation))
        .route("/user", get(list_user_reservations))
        .route("/:id", put(update_reservation))
        .route("/:id", delete(cancel_reservation))
}

async fn create_reservation(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Json(request): Json<CreateReservationRequest>,
) -> Result<(StatusCode, Json<ApiResponse<ReservationResponse>>), AppError> {
    let controller = ReservationController::new(state.pool.clone());
    let response = controller.create(user.user_id, request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn list_user_reservations(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> Result<Json<Vec<ReservationListItem>>, AppError> {
    let controller = ReservationController::new(state.pool.clone());
    let response = controller.list_for_user(user.user_id).await?;
    Ok(Json(response))
}

async fn update_reservation(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<i32>,
    Json(request): Json<UpdateReservationRequest>,
) -> Result<Json<ApiResponse<ReservationResponse>>, AppError> {
    let controller = ReservationController::new(state.pool.clone());
    let response = controller.update(id, user.user_id, request).await?;
    Ok(Json(response))
}

async fn cancel_reservation(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<i32>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = ReservationController::new(state.pool.clone());
    controller.cancel(id, user.user_id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Reserva cancelada exitosamente"
    })))
}
