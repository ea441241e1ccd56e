//! DTOs de la API
//!
//! Requests y responses que cruzan la frontera HTTP. Los modelos de
//! persistencia viven en `models`; aquí solo viven las formas de la API.

pub mod reservation_dto;
pub mod vehicle_dto;
