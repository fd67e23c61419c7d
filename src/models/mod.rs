//! Modelos del sistema
//!
//! Catálogo de valores válidos y los registros que mapean al schema PostgreSQL.

pub mod catalog;
pub mod solicitud;
pub mod usuario;
