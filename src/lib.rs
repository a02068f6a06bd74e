use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;
pub mod validation;

use db::SqliteStore;
use services::palabra_service::PalabraService;

/// Estado compartido con los handlers.
pub struct AppState {
    pub service: PalabraService<SqliteStore>,
}

/// Arma el router completo. Separado de `main` para poder levantarlo en los
/// tests de integración sin abrir un socket.
pub fn app(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .route(
            "/words",
            get(handlers::palabra_handler::listar).post(handlers::palabra_handler::crear),
        )
        .route("/words/stats", get(handlers::palabra_handler::obtener_stats))
        .route(
            "/words/:id",
            get(handlers::palabra_handler::obtener_por_id)
                .put(handlers::palabra_handler::actualizar)
                .delete(handlers::palabra_handler::eliminar),
        )
        .route(
            "/words/:id/favorite",
            post(handlers::palabra_handler::marcar_favorita),
        )
        .route("/words/:id/use", post(handlers::palabra_handler::registrar_uso))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}
