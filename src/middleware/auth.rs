//! Middleware de autenticación JWT
//!
//! Protege las rutas de solicitudes: sin token → 401, token inválido o
//! expirado → 403. El usuario autenticado queda en las extensions.

use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};

use crate::{
    state::AppState,
    utils::errors::AppError,
    utils::jwt::{extract_token_from_header, verify_token},
};

/// Usuario autenticado que se inyecta en las requests
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub username: String,
}

/// Middleware de autenticación JWT
pub async fn require_jwt(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| AppError::Unauthorized("Token no proporcionado".to_string()))?;

    let token = extract_token_from_header(auth_header)?;
    let claims = verify_token(token, &state.jwt)?;

    request.extensions_mut().insert(AuthenticatedUser {
        username: claims.sub,
    });

    Ok(next.run(request).await)
}
