//! Controllers del sistema
//!
//! Validan la entrada, delegan en los repositorios y mapean a DTOs.

pub mod reservation_controller;
pub mod vehicle_controller;
