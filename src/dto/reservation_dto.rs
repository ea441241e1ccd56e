use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::reservation::{Reservation, ReservationStatus, ReservationWithVehicle};

// Request para crear una reserva
#[derive(Debug, Deserialize)]
pub struct CreateReservationRequest {
    pub vehicle_id: i32,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

// Request para modificar una reserva (update parcial)
// Los campos omitidos conservan su valor actual
#[derive(Debug, Default, Deserialize)]
pub struct UpdateReservationRequest {
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
}

// Response de reserva
#[derive(Debug, Serialize)]
pub struct ReservationResponse {
    pub id: i32,
    pub user_id: i32,
    pub vehicle_id: i32,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub status: ReservationStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// Item del listado de reservas de un usuario, con resumen del vehículo
#[derive(Debug, Serialize)]
pub struct ReservationListItem {
    pub id: i32,
    pub user_id: i32,
    pub vehicle_id: i32,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub status: ReservationStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub vehicle: ReservationVehicleSummary,
}

#[derive(Debug, Serialize)]
pub struct ReservationVehicleSummary {
    pub model: String,
    #[serde(rename = "type")]
    pub vehicle_type: String,
    pub location: String,
}

// Response genérica
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
        }
    }

    pub fn success_with_message(data: T, message: String) -> Self {
        Self {
            success: true,
            message: Some(message),
            data: Some(data),
        }
    }
}

impl From<Reservation> for ReservationResponse {
    fn from(r: Reservation) -> Self {
        Self {
            id: r.id,
            user_id: r.user_id,
            vehicle_id: r.vehicle_id,
            start_time: r.start_time,
            end_time: r.end_time,
            status: r.status,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

impl From<ReservationWithVehicle> for ReservationListItem {
    fn from(r: ReservationWithVehicle) -> Self {
        Self {
            id: r.id,
            user_id: r.user_id,
            vehicle_id: r.vehicle_id,
            start_time: r.start_time,
            end_time: r.end_time,
            status: r.status,
            created_at: r.created_at,
            updated_at: r.updated_at,
            vehicle: ReservationVehicleSummary {
                model: r.vehicle_model,
                vehicle_type: r.vehicle_type,
                location: r.vehicle_location,
            },
        }
    }
}
