//! Repositorio de vehículos
//!
//! Camino de lectura del motor de reservas (resolver de disponibilidad)
//! más las operaciones de flota sobre el estado operativo del vehículo.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::dto::vehicle_dto::UpdateVehicleStatusRequest;
use crate::models::vehicle::Vehicle;
use crate::utils::errors::AppError;

pub struct VehicleRepository {
    pool: PgPool,
}

impl VehicleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Vehículos libres para la franja `[start_time, end_time]`.
    ///
    /// Un vehículo está disponible si su estado es Available y ninguna
    /// reserva Active suya intersecta la franja. El test de intersección
    /// es el simétrico `a1 <= b2 AND b1 <= a2`, con extremos inclusivos:
    /// dos franjas que se tocan cuentan como solapadas.
    ///
    /// Solo lectura; el orden por id es estable para los tests.
    pub async fn find_available(
        &self,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
    ) -> Result<Vec<Vehicle>, AppError> {
        let vehicles = sqlx::query_as::<_, Vehicle>(
            r#"
            SELECT v.*
            FROM vehicles v
            WHERE v.status = 'Available'
            AND NOT EXISTS (
                SELECT 1 FROM reservations r
                WHERE r.vehicle_id = v.id
                  AND r.status = 'Active'
                  AND r.start_time <= $2
                  AND $1 <= r.end_time
            )
            ORDER BY v.id
            "#,
        )
        .bind(start_time)
        .bind(end_time)
        .fetch_all(&self.pool)
        .await?;

        Ok(vehicles)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Vehicle>, AppError> {
        let vehicle = sqlx::query_as::<_, Vehicle>("SELECT * FROM vehicles WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(vehicle)
    }

    /// Update parcial del estado operativo (lado flota).
    ///
    /// Los campos omitidos conservan su valor. Esta ruta nunca pone un
    /// vehículo In-Use: esa transición pertenece a las transacciones de
    /// reserva (el controller lo rechaza antes de llegar aquí).
    pub async fn update_status(
        &self,
        id: i32,
        updates: UpdateVehicleStatusRequest,
    ) -> Result<Vehicle, AppError> {
        let current = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehículo no encontrado".to_string()))?;

        let vehicle = sqlx::query_as::<_, Vehicle>(
            r#"
            UPDATE vehicles
            SET status = $2, charge_level = $3, cleanliness = $4, location = $5,
                updated_at = now()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(updates.status.unwrap_or(current.status))
        .bind(updates.charge_level.unwrap_or(current.charge_level))
        .bind(updates.cleanliness.unwrap_or(current.cleanliness))
        .bind(updates.location.unwrap_or(current.location))
        .fetch_one(&self.pool)
        .await?;

        Ok(vehicle)
    }
}
