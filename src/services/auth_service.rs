//! Servicio de autenticación
//!
//! Verificación de credenciales con bcrypt, emisión de tokens y alta del
//! usuario administrador inicial.

use bcrypt::{hash, verify};
use tracing::{info, warn};

use crate::models::usuario::Usuario;
use crate::repositories::UsuarioStore;
use crate::utils::errors::{AppError, AppResult};
use crate::utils::jwt::{generate_token, JwtConfig};

const CREDENCIALES_INCORRECTAS: &str = "Credenciales incorrectas";

/// Verifica usuario y contraseña; devuelve un JWT si coinciden
pub async fn login(
    usuarios: &dyn UsuarioStore,
    jwt: &JwtConfig,
    username: &str,
    password: &str,
) -> AppResult<String> {
    let Some(usuario) = usuarios.find_by_username(username).await? else {
        warn!("Intento de login con usuario inexistente: {}", username);
        return Err(AppError::Unauthorized(CREDENCIALES_INCORRECTAS.to_string()));
    };

    let coincide = verify(password, &usuario.password)
        .map_err(|e| AppError::Internal(format!("Error verificando contraseña: {}", e)))?;

    if !coincide {
        warn!("Contraseña incorrecta para usuario: {}", username);
        return Err(AppError::Unauthorized(CREDENCIALES_INCORRECTAS.to_string()));
    }

    info!("✅ Login exitoso: {}", username);
    generate_token(&usuario.username, jwt)
}

/// Crea el usuario con la contraseña hasheada si aún no existe.
///
/// Devuelve `None` si el usuario ya existía.
pub async fn crear_usuario_si_no_existe(
    usuarios: &dyn UsuarioStore,
    username: &str,
    password: &str,
    cost: u32,
) -> AppResult<Option<Usuario>> {
    if usuarios.find_by_username(username).await?.is_some() {
        info!("El usuario {} ya existe.", username);
        return Ok(None);
    }

    let password_hash = hash(password, cost)
        .map_err(|e| AppError::Internal(format!("Error hashing password: {}", e)))?;

    let usuario = usuarios.create(username, &password_hash).await?;
    info!("Usuario {} creado con éxito.", username);
    Ok(Some(usuario))
}
