//! Servicios
//!
//! Lógica sin estado: construcción de filtros, proyección CSV y autenticación.

pub mod auth_service;
pub mod csv_projector;
pub mod filter_builder;
