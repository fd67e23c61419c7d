use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Credenciales de `POST /auth/login`
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "El usuario es obligatorio"))]
    pub username: String,

    #[serde(default)]
    #[validate(custom = "validar_password")]
    pub password: String,
}

// Login response
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
}

fn validar_password(password: &str) -> Result<(), ValidationError> {
    let message = if password.is_empty() {
        "La contraseña es obligatoria"
    } else if password.chars().count() < 6 {
        "La contraseña debe tener al menos 6 caracteres"
    } else {
        return Ok(());
    };

    let mut error = ValidationError::new("password");
    error.message = Some(message.into());
    Err(error)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(username: &str, password: &str) -> LoginRequest {
        LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_login_request_validation() {
        assert!(request("admin", "admin123").validate().is_ok());

        let errors = request("", "admin123").validate().unwrap_err();
        assert!(errors.field_errors().contains_key("username"));

        let errors = request("admin", "123").validate().unwrap_err();
        let password = &errors.field_errors()["password"][0];
        assert_eq!(
            password.message.as_deref(),
            Some("La contraseña debe tener al menos 6 caracteres")
        );
    }
}
