use sqlx::PgPool;

use crate::dto::reservation_dto::{
    ApiResponse, CreateReservationRequest, ReservationListItem, ReservationResponse,
    UpdateReservationRequest,
};
use crate::repositories::reservation_repository::ReservationRepository;
use crate::utils::errors::AppError;
use crate::utils::validation::validate_time_range;

pub struct ReservationController {
    repository: ReservationRepository,
}

impl ReservationController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: ReservationRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        user_id: i32,
        request: CreateReservationRequest,
    ) -> Result<ApiResponse<ReservationResponse>, AppError> {
        // La frontera ya validó el rango; se re-valida defensivamente
        validate_time_range(&request.start_time, &request.end_time)?;

        let reservation = self
            .repository
            .create(
                user_id,
                request.vehicle_id,
                request.start_time,
                request.end_time,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            reservation.into(),
            "Reserva creada exitosamente".to_string(),
        ))
    }

    pub async fn list_for_user(
        &self,
        user_id: i32,
    ) -> Result<Vec<ReservationListItem>, AppError> {
        let reservations = self.repository.find_by_user(user_id).await?;
        Ok(reservations.into_iter().map(Into::into).collect())
    }

    pub async fn update(
        &self,
        id: i32,
        user_id: i32,
        request: UpdateReservationRequest,
    ) -> Result<ApiResponse<ReservationResponse>, AppError> {
        // El merge parcial y la re-validación del rango ocurren dentro
        // de la transacción, junto al re-check de solapamiento
        let reservation = self.repository.update(id, user_id, request).await?;

        Ok(ApiResponse::success_with_message(
            reservation.into(),
            "Reserva actualizada exitosamente".to_string(),
        ))
    }

    pub async fn cancel(&self, id: i32, user_id: i32) -> Result<(), AppError> {
        self.repository.cancel(id, user_id).await
    }
}
