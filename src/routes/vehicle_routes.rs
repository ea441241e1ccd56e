use axum::{
    extract::{Path, State},
    routing::{get, patch, post},
    Json, Router,
};

use crate::controllers::vehicle_controller::VehicleController;
use crate::dto::reservation_dto::ApiResponse;
use crate::dto::vehicle_dto::{AvailabilityRequest, UpdateVehicleStatusRequest, VehicleResponse};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_vehicle_router() -> Router<AppState> {
    Router::new()
        .route("/available", post(find_available_vehicles))
        .route("/:id", get(get_vehicle))
        .route("/:id/status", patch(update_vehicle_status))
}

/// Camino de lectura del motor de reservas: sin efectos secundarios
async fn find_available_vehicles(
    State(state): State<AppState>,
    Json(request): Json<AvailabilityRequest>,
) -> Result<Json<Vec<VehicleResponse>>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    let response = controller.find_available(request).await?;
    Ok(Json(response))
}

async fn get_vehicle(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<VehicleResponse>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn update_vehicle_status(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<UpdateVehicleStatusRequest>,
) -> Result<Json<ApiResponse<VehicleResponse>>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    let response = controller.update_status(id, request).await?;
    Ok(Json(response))
}
