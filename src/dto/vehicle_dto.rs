use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::vehicle::{Vehicle, VehicleStatus};

// Request de disponibilidad para una franja horaria
#[derive(Debug, Deserialize)]
pub struct AvailabilityRequest {
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

// Request para actualizar el estado operativo de un vehículo (lado flota)
// Los campos omitidos conservan su valor actual
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateVehicleStatusRequest {
    pub status: Option<VehicleStatus>,

    #[validate(range(min = 0, max = 100))]
    pub charge_level: Option<i32>,

    #[validate(length(min = 1, max = 50))]
    pub cleanliness: Option<String>,

    #[validate(length(min = 1, max = 200))]
    pub location: Option<String>,
}

// Response de vehículo
#[derive(Debug, Serialize)]
pub struct VehicleResponse {
    pub id: i32,
    pub model: String,
    #[serde(rename = "type")]
    pub vehicle_type: String,
    pub status: VehicleStatus,
    pub location: String,
    pub charge_level: i32,
    pub cleanliness: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Vehicle> for VehicleResponse {
    fn from(v: Vehicle) -> Self {
        Self {
            id: v.id,
            model: v.model,
            vehicle_type: v.vehicle_type,
            status: v.status,
            location: v.location,
            charge_level: v.charge_level,
            cleanliness: v.cleanliness,
            created_at: v.created_at,
            updated_at: v.updated_at,
        }
    }
}
