//! Sistema de manejo de errores
//!
//! Este módulo define los errores de la aplicación y su conversión a
//! respuestas HTTP. Todas las rutas responden errores con el mismo contrato:
//! 400 con `mensaje`, 404 con `resultado` y 500 con `error`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

pub const INVALID_ID_MESSAGE: &str = "El parámetro idEquipo es inválido";
pub const MISSING_FIELDS_MESSAGE: &str = "Faltan campos obligatorios en la solicitud";
pub const NO_FIELDS_MESSAGE: &str = "Se requiere al menos un campo para actualizar";
pub const TEAM_NOT_FOUND_MESSAGE: &str = "El equipo no fue encontrado";
pub const SERVER_ERROR_MESSAGE: &str = "Error en el servidor";

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::Database(e) => {
                tracing::error!("❌ Error de base de datos: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": SERVER_ERROR_MESSAGE }),
                )
            }

            AppError::Validation(e) => {
                tracing::debug!("Validación fallida: {}", e);
                (
                    StatusCode::BAD_REQUEST,
                    json!({ "mensaje": MISSING_FIELDS_MESSAGE }),
                )
            }

            AppError::BadRequest(msg) => {
                tracing::debug!("Solicitud inválida: {}", msg);
                (StatusCode::BAD_REQUEST, json!({ "mensaje": msg }))
            }

            AppError::NotFound(msg) => {
                tracing::debug!("Recurso no encontrado: {}", msg);
                (StatusCode::NOT_FOUND, json!({ "resultado": msg }))
            }
        };

        (status, Json(body)).into_response()
    }
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;

/// Error 404 para un equipo inexistente
pub fn team_not_found() -> AppError {
    AppError::NotFound(TEAM_NOT_FOUND_MESSAGE.to_string())
}

/// Error 400 para un idEquipo que no es numérico
pub fn invalid_id() -> AppError {
    AppError::BadRequest(INVALID_ID_MESSAGE.to_string())
}
