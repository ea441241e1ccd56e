//! Repositorio de reservas
//!
//! Camino de escritura del motor de reservas. Cada operación
//! (crear, modificar, cancelar) corre dentro de una única transacción
//! que bloquea la fila del vehículo con `SELECT ... FOR UPDATE` antes de
//! re-verificar el no-solapamiento: dos escrituras concurrentes sobre el
//! mismo vehículo se serializan y exactamente una de dos franjas en
//! conflicto llega a commit.
//!
//! El estado del vehículo es una proyección de sus reservas Active y solo
//! se muta dentro de la misma transacción que la reserva que lo justifica.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::dto::reservation_dto::UpdateReservationRequest;
use crate::models::reservation::{Reservation, ReservationStatus, ReservationWithVehicle};
use crate::models::vehicle::{Vehicle, VehicleStatus};
use crate::utils::errors::AppError;
use crate::utils::validation::validate_time_range;

pub struct ReservationRepository {
    pool: PgPool,
}

/// Errores del store que en realidad son conflictos de reserva:
/// fallo de serialización (40001), violación de unicidad (23505) o de
/// exclusión (23P01) al hacer commit contra un escritor concurrente.
fn conflict_or_database(err: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(ref db_err) = err {
        if matches!(
            db_err.code().as_deref(),
            Some("40001") | Some("23505") | Some("23P01")
        ) {
            return AppError::Conflict(
                "La franja solicitada acaba de ser reservada por otra petición".to_string(),
            );
        }
    }
    AppError::Database(err)
}

impl ReservationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Crear una reserva Active y marcar el vehículo In-Use, atómicamente.
    ///
    /// El no-solapamiento se re-verifica dentro de la transacción del
    /// INSERT: cierra la ventana de carrera entre consultar disponibilidad
    /// y reservar.
    pub async fn create(
        &self,
        user_id: i32,
        vehicle_id: i32,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
    ) -> Result<Reservation, AppError> {
        let mut tx = self.pool.begin().await?;

        // Bloquea la fila del vehículo: serializa todas las escrituras
        // sobre el conjunto de reservas de este vehículo
        let vehicle = sqlx::query_as::<_, Vehicle>("SELECT * FROM vehicles WHERE id = $1 FOR UPDATE")
            .bind(vehicle_id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| {
                AppError::Validation(format!("El vehículo {} no existe", vehicle_id))
            })?;

        if vehicle.status == VehicleStatus::Maintenance {
            return Err(AppError::Conflict(
                "El vehículo está en mantenimiento".to_string(),
            ));
        }

        if self
            .overlapping_active_exists(&mut tx, vehicle_id, start_time, end_time, None)
            .await?
        {
            return Err(AppError::Conflict(
                "El vehículo ya tiene una reserva activa que solapa la franja solicitada"
                    .to_string(),
            ));
        }

        let reservation = sqlx::query_as::<_, Reservation>(
            r#"
            INSERT INTO reservations (user_id, vehicle_id, start_time, end_time, status)
            VALUES ($1, $2, $3, $4, 'Active')
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(vehicle_id)
        .bind(start_time)
        .bind(end_time)
        .fetch_one(&mut *tx)
        .await
        .map_err(conflict_or_database)?;

        sqlx::query("UPDATE vehicles SET status = 'In-Use', updated_at = now() WHERE id = $1")
            .bind(vehicle_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await.map_err(conflict_or_database)?;

        log::info!(
            "📅 Reserva {} creada para el vehículo {}",
            reservation.id,
            vehicle_id
        );

        Ok(reservation)
    }

    /// Reservas del usuario (cualquier estado) con el resumen del vehículo,
    /// ordenadas por inicio descendente
    pub async fn find_by_user(
        &self,
        user_id: i32,
    ) -> Result<Vec<ReservationWithVehicle>, AppError> {
        let reservations = sqlx::query_as::<_, ReservationWithVehicle>(
            r#"
            SELECT r.id, r.user_id, r.vehicle_id, r.start_time, r.end_time, r.status,
                   r.created_at, r.updated_at,
                   v.model AS vehicle_model, v.type AS vehicle_type, v.location AS vehicle_location
            FROM reservations r
            JOIN vehicles v ON r.vehicle_id = v.id
            WHERE r.user_id = $1
            ORDER BY r.start_time DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(reservations)
    }

    /// Modificar la franja de una reserva Active del usuario.
    ///
    /// Update parcial: los campos omitidos conservan su valor. El rango
    /// resultante se re-valida y se re-verifica contra las demás reservas
    /// Active del vehículo (excluyéndose a sí misma) antes del commit.
    pub async fn update(
        &self,
        id: i32,
        user_id: i32,
        updates: UpdateReservationRequest,
    ) -> Result<Reservation, AppError> {
        let mut tx = self.pool.begin().await?;

        let current = self.fetch_owned_active(&mut tx, id, user_id).await?;

        // Mismo orden de bloqueo que create: fila de reserva, luego vehículo
        sqlx::query("SELECT id FROM vehicles WHERE id = $1 FOR UPDATE")
            .bind(current.vehicle_id)
            .execute(&mut *tx)
            .await?;

        let new_start = updates.start_time.unwrap_or(current.start_time);
        let new_end = updates.end_time.unwrap_or(current.end_time);
        validate_time_range(&new_start, &new_end)?;

        if self
            .overlapping_active_exists(&mut tx, current.vehicle_id, new_start, new_end, Some(id))
            .await?
        {
            return Err(AppError::Conflict(
                "La nueva franja solapa otra reserva activa del vehículo".to_string(),
            ));
        }

        let reservation = sqlx::query_as::<_, Reservation>(
            r#"
            UPDATE reservations
            SET start_time = $2, end_time = $3, updated_at = now()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(new_start)
        .bind(new_end)
        .fetch_one(&mut *tx)
        .await
        .map_err(conflict_or_database)?;

        tx.commit().await.map_err(conflict_or_database)?;

        Ok(reservation)
    }

    /// Cancelar una reserva Active del usuario.
    ///
    /// El vehículo vuelve a Available solo si no le queda ninguna otra
    /// reserva Active vigente ahora o en el futuro; si las hay, sigue
    /// In-Use. Ambas escrituras van en la misma transacción.
    pub async fn cancel(&self, id: i32, user_id: i32) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;

        let current = self.fetch_owned_active(&mut tx, id, user_id).await?;

        sqlx::query("SELECT id FROM vehicles WHERE id = $1 FOR UPDATE")
            .bind(current.vehicle_id)
            .execute(&mut *tx)
            .await?;

        sqlx::query(
            "UPDATE reservations SET status = 'Cancelled', updated_at = now() WHERE id = $1",
        )
        .bind(id)
        .execute(&mut *tx)
        .await?;

        // ¿Queda alguna otra reserva Active sin expirar sobre el vehículo?
        let remaining: Option<i32> = sqlx::query_scalar(
            r#"
            SELECT id FROM reservations
            WHERE vehicle_id = $1 AND status = 'Active' AND id <> $2
              AND end_time >= now()
            LIMIT 1
            "#,
        )
        .bind(current.vehicle_id)
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?;

        if remaining.is_none() {
            // El guard de status evita resucitar un vehículo en mantenimiento
            sqlx::query(
                "UPDATE vehicles SET status = 'Available', updated_at = now() \
                 WHERE id = $1 AND status = 'In-Use'",
            )
            .bind(current.vehicle_id)
            .execute(&mut *tx)
            .await?;
            log::info!("🔓 Vehículo {} vuelve a Available", current.vehicle_id);
        }

        tx.commit().await?;

        Ok(())
    }

    /// Cargar y bloquear una reserva Active del usuario dentro de `tx`.
    ///
    /// Una reserva inexistente y una reserva de otro usuario devuelven el
    /// mismo NotFound: no se revela la existencia de reservas ajenas.
    async fn fetch_owned_active(
        &self,
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        id: i32,
        user_id: i32,
    ) -> Result<Reservation, AppError> {
        let reservation =
            sqlx::query_as::<_, Reservation>("SELECT * FROM reservations WHERE id = $1 FOR UPDATE")
                .bind(id)
                .fetch_optional(&mut **tx)
                .await?;

        let reservation = match reservation {
            Some(r) if r.user_id == user_id => r,
            _ => {
                return Err(AppError::NotFound(
                    "Reserva no encontrada".to_string(),
                ))
            }
        };

        if reservation.status != ReservationStatus::Active {
            return Err(AppError::InvalidState(format!(
                "La reserva no está activa (estado actual: {})",
                reservation.status
            )));
        }

        Ok(reservation)
    }

    /// Test de solapamiento contra las reservas Active del vehículo.
    ///
    /// Predicado simétrico inclusivo `a1 <= b2 AND b1 <= a2`: franjas que
    /// se tocan cuentan como solapadas. `exclude_id` deja fuera a la propia
    /// reserva en el camino de modificación.
    async fn overlapping_active_exists(
        &self,
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        vehicle_id: i32,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
        exclude_id: Option<i32>,
    ) -> Result<bool, AppError> {
        let overlap: Option<i32> = sqlx::query_scalar(
            r#"
            SELECT id FROM reservations
            WHERE vehicle_id = $1 AND status = 'Active'
              AND start_time <= $3 AND $2 <= end_time
              AND ($4::int IS NULL OR id <> $4)
            LIMIT 1
            "#,
        )
        .bind(vehicle_id)
        .bind(start_time)
        .bind(end_time)
        .bind(exclude_id)
        .fetch_optional(&mut **tx)
        .await?;

        Ok(overlap.is_some())
    }
}
