//! Shared application state
//!
//! Este módulo define el estado compartido que se pasa a través del router
//! de Axum. Los stores se inyectan aquí; ningún handler abre conexiones propias.

use std::sync::Arc;

use crate::repositories::{SolicitudStore, UsuarioStore};
use crate::utils::jwt::JwtConfig;

#[derive(Clone)]
pub struct AppState {
    pub jwt: JwtConfig,
    pub solicitudes: Arc<dyn SolicitudStore>,
    pub usuarios: Arc<dyn UsuarioStore>,
}

impl AppState {
    pub fn new(
        jwt: JwtConfig,
        solicitudes: Arc<dyn SolicitudStore>,
        usuarios: Arc<dyn UsuarioStore>,
    ) -> Self {
        Self {
            jwt,
            solicitudes,
            usuarios,
        }
    }
}
