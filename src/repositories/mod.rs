//! Repositorios
//!
//! Los traits `SolicitudStore` y `UsuarioStore` son la capacidad de
//! persistencia que reciben los controladores. Hay una implementación sobre
//! PostgreSQL y otra en memoria.

pub mod memory_repository;
pub mod solicitud_repository;
pub mod usuario_repository;

use async_trait::async_trait;

use crate::models::solicitud::{CambiosSolicitud, NuevaSolicitud, Solicitud};
use crate::models::usuario::Usuario;
use crate::services::filter_builder::SolicitudFilter;
use crate::utils::errors::AppResult;

pub use memory_repository::MemoryStore;
pub use solicitud_repository::PgSolicitudRepository;
pub use usuario_repository::PgUsuarioRepository;

#[async_trait]
pub trait SolicitudStore: Send + Sync {
    /// Inserta la solicitud; el store asigna `id` y `fecha_creacion`
    async fn create(&self, nueva: NuevaSolicitud) -> AppResult<Solicitud>;

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Solicitud>>;

    /// Solicitudes que cumplen el filtro de igualdad, ordenadas por id
    async fn find_many(&self, filter: &SolicitudFilter) -> AppResult<Vec<Solicitud>>;

    /// `None` si no existe la solicitud
    async fn update(&self, id: i32, cambios: CambiosSolicitud) -> AppResult<Option<Solicitud>>;

    /// `false` si no existía la solicitud
    async fn delete(&self, id: i32) -> AppResult<bool>;
}

#[async_trait]
pub trait UsuarioStore: Send + Sync {
    async fn find_by_username(&self, username: &str) -> AppResult<Option<Usuario>>;

    /// Falla con `Conflict` si el username ya existe
    async fn create(&self, username: &str, password_hash: &str) -> AppResult<Usuario>;
}
