//! Repositorios de acceso a datos
//!
//! Toda la verdad vive en PostgreSQL: no hay caché de disponibilidad en
//! memoria y cada operación re-consulta el estado actual.

pub mod reservation_repository;
pub mod vehicle_repository;
