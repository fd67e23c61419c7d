//! Modelo de Usuario
//!
//! Titular de credenciales. Sólo se crea mediante el binario `seed`.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// Usuario - mapea exactamente a la tabla usuarios
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Usuario {
    pub id: i32,
    pub username: String,
    /// Hash bcrypt, nunca la contraseña en claro
    #[serde(skip_serializing)]
    pub password: String,
    pub fecha_creacion: DateTime<Utc>,
}
