use async_trait::async_trait;
use sqlx::PgPool;

use super::UsuarioStore;
use crate::models::usuario::Usuario;
use crate::utils::errors::AppResult;

pub struct PgUsuarioRepository {
    pool: PgPool,
}

impl PgUsuarioRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UsuarioStore for PgUsuarioRepository {
    async fn find_by_username(&self, username: &str) -> AppResult<Option<Usuario>> {
        let usuario = sqlx::query_as::<_, Usuario>(
            "SELECT id, username, password, fecha_creacion FROM usuarios WHERE username = $1",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(usuario)
    }

    async fn create(&self, username: &str, password_hash: &str) -> AppResult<Usuario> {
        // La restricción UNIQUE sobre username se traduce a Conflict en AppError
        let usuario = sqlx::query_as::<_, Usuario>(
            r#"
            INSERT INTO usuarios (username, password)
            VALUES ($1, $2)
            RETURNING id, username, password, fecha_creacion
            "#,
        )
        .bind(username)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await?;

        Ok(usuario)
    }
}
