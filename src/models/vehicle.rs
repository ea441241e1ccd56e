//! Modelo de Vehicle
//!
//! Este módulo contiene el struct Vehicle y su enum de estado.
//! Mapea exactamente al schema PostgreSQL con primary key 'id'.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};

/// Estado del vehículo - mapea al ENUM vehicle_status
///
/// Solo el motor de reservas transiciona entre Available e In-Use;
/// Maintenance lo gestiona la flota (ver `UpdateVehicleStatusRequest`).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq, Eq)]
#[sqlx(type_name = "vehicle_status")]
pub enum VehicleStatus {
    #[sqlx(rename = "Available")]
    Available,
    #[sqlx(rename = "In-Use")]
    #[serde(rename = "In-Use")]
    InUse,
    #[sqlx(rename = "Maintenance")]
    Maintenance,
}

impl std::fmt::Display for VehicleStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            VehicleStatus::Available => "Available",
            VehicleStatus::InUse => "In-Use",
            VehicleStatus::Maintenance => "Maintenance",
        };
        write!(f, "{}", s)
    }
}

/// Vehicle principal - mapea exactamente a la tabla vehicles
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Vehicle {
    pub id: i32,
    pub model: String,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub vehicle_type: String,
    pub status: VehicleStatus,
    pub location: String,
    pub charge_level: i32,
    pub cleanliness: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vehicle_status_serializa_con_guion() {
        // El formato de datos usa 'In-Use' con guion
        let json = serde_json::to_string(&VehicleStatus::InUse).unwrap();
        assert_eq!(json, "\"In-Use\"");

        let parsed: VehicleStatus = serde_json::from_str("\"In-Use\"").unwrap();
        assert_eq!(parsed, VehicleStatus::InUse);
    }

    #[test]
    fn test_vehicle_status_display() {
        assert_eq!(VehicleStatus::Available.to_string(), "Available");
        assert_eq!(VehicleStatus::InUse.to_string(), "In-Use");
        assert_eq!(VehicleStatus::Maintenance.to_string(), "Maintenance");
    }
}
