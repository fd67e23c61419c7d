//! API de solicitudes
//!
//! Administración de solicitudes (Permiso, Compra, Soporte) protegida con
//! JWT, con filtros por categoría/estatus y exportación CSV.

pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;
pub mod validators;

pub use routes::create_app_router;
pub use state::AppState;
