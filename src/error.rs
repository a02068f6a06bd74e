use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Fallos del servicio de palabras. La capa de handlers es la única que los
/// traduce a códigos de transporte, vía el `IntoResponse` de abajo.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Datos inválidos")]
    DatosInvalidos { detalles: Vec<String> },
    #[error("Palabra no encontrada")]
    NoEncontrada,
    #[error("Error interno del servidor")]
    Almacenamiento(#[from] sqlx::Error),
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        match self {
            ServiceError::DatosInvalidos { detalles } => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "Datos inválidos", "detalles": detalles })),
            )
                .into_response(),
            ServiceError::NoEncontrada => (
                StatusCode::NOT_FOUND,
                Json(json!({ "error": "Palabra no encontrada" })),
            )
                .into_response(),
            ServiceError::Almacenamiento(e) => {
                tracing::error!("Fallo de almacenamiento: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Error interno del servidor" })),
                )
                    .into_response()
            }
        }
    }
}
