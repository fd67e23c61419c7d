pub mod auth_dto;
pub mod solicitud_dto;
