//! Utilidades de validación
//!
//! Este módulo contiene funciones helper para validación de rangos
//! horarios y la política de solapamiento de intervalos.

use chrono::{DateTime, Utc};

use crate::utils::errors::AppError;

/// Validar que una franja horaria sea lógicamente válida: `end > start` estricto
pub fn validate_time_range(
    start_time: &DateTime<Utc>,
    end_time: &DateTime<Utc>,
) -> Result<(), AppError> {
    if end_time <= start_time {
        return Err(AppError::Validation(
            "La hora de fin debe ser posterior a la hora de inicio".to_string(),
        ));
    }
    Ok(())
}

/// Test simétrico de intersección de intervalos: `a1 <= b2 AND b1 <= a2`.
///
/// Política: los intervalos que se tocan (end1 == start2) cuentan como
/// solapados - no se permiten reservas espalda con espalda. Es el mismo
/// predicado que aplican las queries SQL del motor de reservas.
pub fn intervals_overlap(
    a_start: DateTime<Utc>,
    a_end: DateTime<Utc>,
    b_start: DateTime<Utc>,
    b_end: DateTime<Utc>,
) -> bool {
    a_start <= b_end && b_start <= a_end
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn hora(h: u32, m: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 15, h, m, 0).unwrap()
    }

    #[test]
    fn test_rango_valido() {
        assert!(validate_time_range(&hora(9, 0), &hora(10, 0)).is_ok());
    }

    #[test]
    fn test_rango_invertido_rechazado() {
        let err = validate_time_range(&hora(10, 0), &hora(9, 0)).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_rango_vacio_rechazado() {
        // end == start no es una franja reservable
        assert!(validate_time_range(&hora(9, 0), &hora(9, 0)).is_err());
    }

    #[test]
    fn test_solapamiento_parcial() {
        assert!(intervals_overlap(hora(9, 0), hora(10, 0), hora(9, 30), hora(10, 30)));
    }

    #[test]
    fn test_intervalo_contenido() {
        assert!(intervals_overlap(hora(9, 0), hora(12, 0), hora(10, 0), hora(11, 0)));
    }

    #[test]
    fn test_intervalos_que_se_tocan_solapan() {
        // [09:00,10:00] y [10:00,11:00]: la política prohíbe reservas
        // espalda con espalda, así que esto ES un solapamiento
        assert!(intervals_overlap(hora(9, 0), hora(10, 0), hora(10, 0), hora(11, 0)));
        // Y en el orden inverso también (el test es simétrico)
        assert!(intervals_overlap(hora(10, 0), hora(11, 0), hora(9, 0), hora(10, 0)));
    }

    #[test]
    fn test_intervalos_disjuntos_no_solapan() {
        assert!(!intervals_overlap(hora(9, 0), hora(10, 0), hora(10, 1), hora(11, 0)));
        assert!(!intervals_overlap(hora(12, 0), hora(13, 0), hora(9, 0), hora(10, 0)));
    }
}
