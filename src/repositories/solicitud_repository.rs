use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};

use super::SolicitudStore;
use crate::models::solicitud::{CambiosSolicitud, NuevaSolicitud, Solicitud};
use crate::services::filter_builder::SolicitudFilter;
use crate::utils::errors::AppResult;

const COLUMNAS: &str =
    "id, titulo, descripcion, categoria, estatus, usuario_solicitante, fecha_creacion";

pub struct PgSolicitudRepository {
    pool: PgPool,
}

impl PgSolicitudRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SolicitudStore for PgSolicitudRepository {
    async fn create(&self, nueva: NuevaSolicitud) -> AppResult<Solicitud> {
        let solicitud = sqlx::query_as::<_, Solicitud>(&format!(
            r#"
            INSERT INTO solicitudes (titulo, descripcion, categoria, estatus, usuario_solicitante)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {COLUMNAS}
            "#
        ))
        .bind(nueva.titulo)
        .bind(nueva.descripcion)
        .bind(nueva.categoria)
        .bind(nueva.estatus)
        .bind(nueva.usuario_solicitante)
        .fetch_one(&self.pool)
        .await?;

        Ok(solicitud)
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Solicitud>> {
        let solicitud = sqlx::query_as::<_, Solicitud>(&format!(
            "SELECT {COLUMNAS} FROM solicitudes WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(solicitud)
    }

    async fn find_many(&self, filter: &SolicitudFilter) -> AppResult<Vec<Solicitud>> {
        let mut query = QueryBuilder::<Postgres>::new(format!("SELECT {COLUMNAS} FROM solicitudes"));
        let mut conector = " WHERE ";

        if let Some(categoria) = filter.categoria {
            query.push(conector).push("categoria = ").push_bind(categoria);
            conector = " AND ";
        }
        if let Some(estatus) = filter.estatus {
            query.push(conector).push("estatus = ").push_bind(estatus);
        }
        query.push(" ORDER BY id");

        let solicitudes = query
            .build_query_as::<Solicitud>()
            .fetch_all(&self.pool)
            .await?;

        Ok(solicitudes)
    }

    async fn update(&self, id: i32, cambios: CambiosSolicitud) -> AppResult<Option<Solicitud>> {
        let solicitud = sqlx::query_as::<_, Solicitud>(&format!(
            r#"
            UPDATE solicitudes
            SET titulo = $2, descripcion = $3, categoria = $4, estatus = $5,
                usuario_solicitante = COALESCE($6, usuario_solicitante)
            WHERE id = $1
            RETURNING {COLUMNAS}
            "#
        ))
        .bind(id)
        .bind(cambios.titulo)
        .bind(cambios.descripcion)
        .bind(cambios.categoria)
        .bind(cambios.estatus)
        .bind(cambios.usuario_solicitante)
        .fetch_optional(&self.pool)
        .await?;

        Ok(solicitud)
    }

    async fn delete(&self, id: i32) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM solicitudes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
