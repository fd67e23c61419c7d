//! Sistema de manejo de errores
//!
//! Este módulo define la taxonomía de errores de la API de solicitudes
//! y su conversión a respuestas HTTP. Ninguna respuesta expone detalles
//! internos: la causa real sólo se registra en los logs.

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::{error, warn};

/// SQLSTATE de Postgres para violación de restricción única
const PG_UNIQUE_VIOLATION: &str = "23505";

/// Error individual de validación, asociado a un campo
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {} field(s) failed", .0.len())]
    Validation(Vec<FieldError>),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Export error: {0}")]
    Export(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Respuesta de error para la API
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: &'static str,
    message: String,
    code: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    errors: Option<Vec<FieldError>>,
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Export(_) => StatusCode::NOT_IMPLEMENTED,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let body = match self {
            AppError::Validation(errors) => {
                warn!("Errores de validación: {:?}", errors);
                ErrorResponse {
                    error: "Validation Error",
                    message: "Errores de validación".to_string(),
                    code: "VALIDATION_ERROR",
                    errors: Some(errors),
                }
            }

            AppError::NotFound(msg) => {
                warn!("Recurso no encontrado: {}", msg);
                ErrorResponse {
                    error: "Not Found",
                    message: msg,
                    code: "NOT_FOUND",
                    errors: None,
                }
            }

            AppError::Conflict(msg) => {
                warn!("Conflicto: {}", msg);
                ErrorResponse {
                    error: "Conflict",
                    message: msg,
                    code: "CONFLICT",
                    errors: None,
                }
            }

            AppError::Export(msg) => {
                error!("Error de exportación: {}", msg);
                ErrorResponse {
                    error: "Export Error",
                    message: msg,
                    code: "EXPORT_ERROR",
                    errors: None,
                }
            }

            AppError::Unauthorized(msg) => {
                warn!("Acceso no autorizado: {}", msg);
                ErrorResponse {
                    error: "Unauthorized",
                    message: msg,
                    code: "UNAUTHORIZED",
                    errors: None,
                }
            }

            AppError::Forbidden(msg) => {
                warn!("Acceso prohibido: {}", msg);
                ErrorResponse {
                    error: "Forbidden",
                    message: msg,
                    code: "FORBIDDEN",
                    errors: None,
                }
            }

            AppError::Internal(msg) => {
                error!("Error interno: {}", msg);
                ErrorResponse {
                    error: "Internal Server Error",
                    message: "Error interno del servidor".to_string(),
                    code: "INTERNAL_ERROR",
                    errors: None,
                }
            }
        };

        (status, Json(body)).into_response()
    }
}

/// Traducción de errores del store a la taxonomía de la API
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => AppError::NotFound("Registro no encontrado".to_string()),
            sqlx::Error::Database(db_err) if db_err.code().as_deref() == Some(PG_UNIQUE_VIOLATION) => {
                warn!("Violación de unicidad en base de datos: {}", db_err);
                AppError::Conflict("Conflicto de datos".to_string())
            }
            _ => AppError::Internal(format!("Database error: {}", err)),
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut items: Vec<FieldError> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| {
                    let message = e
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("Valor inválido ({})", e.code));
                    FieldError::new(field, message)
                })
            })
            .collect();
        // field_errors() viene de un HashMap
        items.sort_by(|a, b| a.field.cmp(&b.field));
        AppError::Validation(items)
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(vec![FieldError::new("body", rejection.body_text())])
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::Validation(vec![FieldError::new("query", rejection.body_text())])
    }
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;

/// Función helper para crear un error de validación de un solo campo
pub fn validation_error(field: &str, message: impl Into<String>) -> AppError {
    AppError::Validation(vec![FieldError::new(field, message)])
}

/// Función helper para crear errores de recurso no encontrado
pub fn not_found_error(message: &str) -> AppError {
    AppError::NotFound(message.to_string())
}
