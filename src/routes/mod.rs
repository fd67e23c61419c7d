//! Rutas HTTP
//!
//! `/auth` es público; todo `/solicitudes` pasa por `require_jwt`.

pub mod auth_routes;
pub mod solicitud_routes;

use axum::{middleware::from_fn_with_state, routing::get, Json, Router};
use serde_json::{json, Value};
use tower_http::trace::TraceLayer;

use crate::middleware::{cors::cors_layer, require_jwt};
use crate::state::AppState;

/// Router completo de la aplicación
pub fn create_app_router(state: AppState, cors_origins: &[String]) -> Router {
    let solicitudes = solicitud_routes::create_solicitud_router()
        .route_layer(from_fn_with_state(state.clone(), require_jwt));

    Router::new()
        .route("/", get(health))
        .nest("/auth", auth_routes::create_auth_router())
        .nest("/solicitudes", solicitudes)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(cors_origins))
        .with_state(state)
}

/// Endpoint de prueba simple
async fn health() -> Json<Value> {
    Json(json!({
        "message": "API de solicitudes funcionando correctamente",
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
