use std::sync::Arc;

use validator::Validate;

use crate::dto::auth_dto::{LoginRequest, LoginResponse};
use crate::repositories::UsuarioStore;
use crate::services::auth_service;
use crate::utils::errors::AppError;
use crate::utils::jwt::JwtConfig;

pub struct AuthController {
    usuarios: Arc<dyn UsuarioStore>,
    jwt: JwtConfig,
}

impl AuthController {
    pub fn new(usuarios: Arc<dyn UsuarioStore>, jwt: JwtConfig) -> Self {
        Self { usuarios, jwt }
    }

    pub async fn login(&self, request: LoginRequest) -> Result<LoginResponse, AppError> {
        request.validate()?;

        let token =
            auth_service::login(self.usuarios.as_ref(), &self.jwt, &request.username, &request.password)
                .await?;

        Ok(LoginResponse { token })
    }
}
