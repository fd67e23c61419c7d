pub mod auth_controller;
pub mod solicitud_controller;
