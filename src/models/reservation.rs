//! Modelo de Reservation
//!
//! Una reserva referencia a un vehículo (N a 1) y pertenece a un usuario.
//! Solo las reservas Active cuentan para la detección de solapamientos;
//! Cancelled y Completed son históricas y terminales.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};

/// Estado de la reserva - mapea al ENUM reservation_status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq, Eq)]
#[sqlx(type_name = "reservation_status")]
pub enum ReservationStatus {
    #[sqlx(rename = "Active")]
    Active,
    #[sqlx(rename = "Completed")]
    Completed,
    #[sqlx(rename = "Cancelled")]
    Cancelled,
}

impl std::fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ReservationStatus::Active => "Active",
            ReservationStatus::Completed => "Completed",
            ReservationStatus::Cancelled => "Cancelled",
        };
        write!(f, "{}", s)
    }
}

/// Reservation principal - mapea exactamente a la tabla reservations
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Reservation {
    pub id: i32,
    pub user_id: i32,
    pub vehicle_id: i32,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub status: ReservationStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Reserva con el resumen del vehículo asociado (JOIN con vehicles)
///
/// Se usa en el listado por usuario; evita un segundo round-trip por reserva.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ReservationWithVehicle {
    pub id: i32,
    pub user_id: i32,
    pub vehicle_id: i32,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub status: ReservationStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub vehicle_model: String,
    pub vehicle_type: String,
    pub vehicle_location: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reservation_status_roundtrip_json() {
        for (status, label) in [
            (ReservationStatus::Active, "\"Active\""),
            (ReservationStatus::Completed, "\"Completed\""),
            (ReservationStatus::Cancelled, "\"Cancelled\""),
        ] {
            assert_eq!(serde_json::to_string(&status).unwrap(), label);
            let parsed: ReservationStatus = serde_json::from_str(label).unwrap();
            assert_eq!(parsed, status);
        }
    }
}
