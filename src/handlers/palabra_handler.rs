use crate::error::ServiceError;
use crate::models::palabra::{FiltrosPalabra, PalabraPayload};
use crate::AppState;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use std::sync::Arc;

/// Query string del listado. `soloFavoritas` llega como literal y solo
/// "true" activa el filtro.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListarParams {
    texto: Option<String>,
    categoria: Option<String>,
    dificultad: Option<String>,
    idioma: Option<String>,
    solo_favoritas: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoritaBody {
    es_favorita: Option<bool>,
}

/// 1. GET /words
pub async fn listar(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListarParams>,
) -> Result<impl IntoResponse, ServiceError> {
    let filtros = FiltrosPalabra {
        texto: params.texto,
        categoria: params.categoria,
        dificultad: params.dificultad,
        idioma: params.idioma,
        solo_favoritas: params.solo_favoritas.as_deref() == Some("true"),
    };
    let palabras = state.service.listar(&filtros).await?;
    Ok(Json(palabras))
}

/// 2. GET /words/{id}
pub async fn obtener_por_id(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ServiceError> {
    let palabra = state.service.obtener(id).await?;
    Ok(Json(palabra))
}

/// 3. POST /words
pub async fn crear(
    State(state): State<Arc<AppState>>,
    Json(datos): Json<PalabraPayload>,
) -> Result<impl IntoResponse, ServiceError> {
    let palabra = state.service.crear(&datos).await?;
    Ok((StatusCode::CREATED, Json(palabra)))
}

/// 4. PUT /words/{id}
pub async fn actualizar(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(datos): Json<PalabraPayload>,
) -> Result<impl IntoResponse, ServiceError> {
    let palabra = state.service.actualizar(id, &datos).await?;
    Ok(Json(palabra))
}

/// 5. DELETE /words/{id} (borrado lógico, respuesta vacía)
pub async fn eliminar(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ServiceError> {
    state.service.eliminar(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// 6. POST /words/{id}/favorite
pub async fn marcar_favorita(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(cuerpo): Json<FavoritaBody>,
) -> Result<impl IntoResponse, ServiceError> {
    let palabra = state
        .service
        .marcar_favorita(id, cuerpo.es_favorita.unwrap_or(false))
        .await?;
    Ok(Json(palabra))
}

/// 7. POST /words/{id}/use
pub async fn registrar_uso(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ServiceError> {
    let palabra = state.service.registrar_uso(id).await?;
    Ok(Json(palabra))
}

/// 8. GET /words/stats
pub async fn obtener_stats(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ServiceError> {
    let stats = state.service.stats().await?;
    Ok(Json(stats))
}
