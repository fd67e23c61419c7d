//! Validadores por endpoint
//!
//! Las reglas de login viven en `dto::auth_dto` con `validator`.

pub mod solicitud_validator;
