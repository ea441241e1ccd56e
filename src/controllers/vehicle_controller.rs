use sqlx::PgPool;
use validator::Validate;

use crate::dto::reservation_dto::ApiResponse;
use crate::dto::vehicle_dto::{AvailabilityRequest, UpdateVehicleStatusRequest, VehicleResponse};
use crate::models::vehicle::VehicleStatus;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::AppError;
use crate::utils::validation::validate_time_range;

pub struct VehicleController {
    repository: VehicleRepository,
}

impl VehicleController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: VehicleRepository::new(pool),
        }
    }

    pub async fn find_available(
        &self,
        request: AvailabilityRequest,
    ) -> Result<Vec<VehicleResponse>, AppError> {
        validate_time_range(&request.start_time, &request.end_time)?;

        let vehicles = self
            .repository
            .find_available(request.start_time, request.end_time)
            .await?;

        Ok(vehicles.into_iter().map(Into::into).collect())
    }

    pub async fn get_by_id(&self, id: i32) -> Result<VehicleResponse, AppError> {
        let vehicle = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehículo no encontrado".to_string()))?;

        Ok(vehicle.into())
    }

    pub async fn update_status(
        &self,
        id: i32,
        request: UpdateVehicleStatusRequest,
    ) -> Result<ApiResponse<VehicleResponse>, AppError> {
        request.validate()?;

        // In-Use es una transición reservada al motor de reservas
        if request.status == Some(VehicleStatus::InUse) {
            return Err(AppError::Validation(
                "El estado In-Use lo gestionan las reservas, no la flota".to_string(),
            ));
        }

        let vehicle = self.repository.update_status(id, request).await?;

        Ok(ApiResponse::success_with_message(
            vehicle.into(),
            "Vehículo actualizado exitosamente".to_string(),
        ))
    }
}
