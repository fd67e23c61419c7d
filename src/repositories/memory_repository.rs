//! Store en memoria
//!
//! Implementación de `SolicitudStore` y `UsuarioStore` sobre mapas
//! protegidos por un `RwLock`. Ids secuenciales desde 1, igual que SERIAL.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use super::{SolicitudStore, UsuarioStore};
use crate::models::solicitud::{CambiosSolicitud, NuevaSolicitud, Solicitud};
use crate::models::usuario::Usuario;
use crate::services::filter_builder::SolicitudFilter;
use crate::utils::errors::{AppError, AppResult};

#[derive(Default)]
struct Tablas {
    solicitudes: BTreeMap<i32, Solicitud>,
    ultimo_id_solicitud: i32,
    usuarios: BTreeMap<String, Usuario>,
    ultimo_id_usuario: i32,
}

#[derive(Default)]
pub struct MemoryStore {
    tablas: RwLock<Tablas>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SolicitudStore for MemoryStore {
    async fn create(&self, nueva: NuevaSolicitud) -> AppResult<Solicitud> {
        let mut tablas = self.tablas.write().await;
        tablas.ultimo_id_solicitud += 1;

        let solicitud = Solicitud {
            id: tablas.ultimo_id_solicitud,
            titulo: nueva.titulo,
            descripcion: nueva.descripcion,
            categoria: nueva.categoria,
            estatus: nueva.estatus,
            usuario_solicitante: nueva.usuario_solicitante,
            fecha_creacion: Utc::now(),
        };
        tablas.solicitudes.insert(solicitud.id, solicitud.clone());
        Ok(solicitud)
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Solicitud>> {
        Ok(self.tablas.read().await.solicitudes.get(&id).cloned())
    }

    async fn find_many(&self, filter: &SolicitudFilter) -> AppResult<Vec<Solicitud>> {
        let tablas = self.tablas.read().await;
        Ok(tablas
            .solicitudes
            .values()
            .filter(|s| filter.matches(s))
            .cloned()
            .collect())
    }

    async fn update(&self, id: i32, cambios: CambiosSolicitud) -> AppResult<Option<Solicitud>> {
        let mut tablas = self.tablas.write().await;
        let Some(actual) = tablas.solicitudes.get_mut(&id) else {
            return Ok(None);
        };

        actual.titulo = cambios.titulo;
        actual.descripcion = cambios.descripcion;
        actual.categoria = cambios.categoria;
        actual.estatus = cambios.estatus;
        if let Some(usuario) = cambios.usuario_solicitante {
            actual.usuario_solicitante = usuario;
        }
        Ok(Some(actual.clone()))
    }

    async fn delete(&self, id: i32) -> AppResult<bool> {
        Ok(self.tablas.write().await.solicitudes.remove(&id).is_some())
    }
}

#[async_trait]
impl UsuarioStore for MemoryStore {
    async fn find_by_username(&self, username: &str) -> AppResult<Option<Usuario>> {
        Ok(self.tablas.read().await.usuarios.get(username).cloned())
    }

    async fn create(&self, username: &str, password_hash: &str) -> AppResult<Usuario> {
        let mut tablas = self.tablas.write().await;
        if tablas.usuarios.contains_key(username) {
            return Err(AppError::Conflict("Conflicto de datos".to_string()));
        }
        tablas.ultimo_id_usuario += 1;

        let usuario = Usuario {
            id: tablas.ultimo_id_usuario,
            username: username.to_string(),
            password: password_hash.to_string(),
            fecha_creacion: Utc::now(),
        };
        tablas.usuarios.insert(usuario.username.clone(), usuario.clone());
        Ok(usuario)
    }
}
