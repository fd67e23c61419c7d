use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Extension, Json, Router,
};
use http::header;
use serde_json::Value;
use tracing::debug;

use crate::controllers::solicitud_controller::SolicitudController;
use crate::dto::solicitud_dto::{ExportarQuery, ListarQuery, MensajeResponse};
use crate::middleware::auth::AuthenticatedUser;
use crate::models::solicitud::Solicitud;
use crate::services::filter_builder::build_filter;
use crate::state::AppState;
use crate::utils::errors::AppResult;
use crate::validators::solicitud_validator::{
    validar_actualizar, validar_crear, validar_eliminar, validar_exportar, validar_listar,
    validar_obtener,
};

pub fn create_solicitud_router() -> Router<AppState> {
    Router::new()
        .route("/", get(listar_solicitudes).post(crear_solicitud))
        .route("/export/csv", get(exportar_csv))
        .route(
            "/:id",
            get(obtener_solicitud)
                .put(actualizar_solicitud)
                .delete(eliminar_solicitud),
        )
}

fn controller(state: &AppState) -> SolicitudController {
    SolicitudController::new(state.solicitudes.clone())
}

async fn crear_solicitud(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    body: Result<Json<Value>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Solicitud>)> {
    let Json(body) = body?;
    let nueva = validar_crear(&body)?;
    debug!("{} crea solicitud '{}'", user.username, nueva.titulo);

    let solicitud = controller(&state).crear(nueva).await?;
    Ok((StatusCode::CREATED, Json(solicitud)))
}

async fn actualizar_solicitud(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> AppResult<Json<Solicitud>> {
    let Json(body) = body?;
    let (id, cambios) = validar_actualizar(&id, &body)?;

    let solicitud = controller(&state).actualizar(id, cambios).await?;
    Ok(Json(solicitud))
}

async fn listar_solicitudes(
    State(state): State<AppState>,
    query: Result<Query<ListarQuery>, QueryRejection>,
) -> AppResult<Json<Vec<Solicitud>>> {
    let Query(query) = query?;
    validar_listar(&query)?;
    let filter = build_filter(query.categoria.as_deref(), query.estatus.as_deref())?;

    let solicitudes = controller(&state).listar(&filter).await?;
    Ok(Json(solicitudes))
}

async fn obtener_solicitud(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Solicitud>> {
    let id = validar_obtener(&id)?;
    let solicitud = controller(&state).obtener(id).await?;
    Ok(Json(solicitud))
}

async fn eliminar_solicitud(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<MensajeResponse>> {
    let id = validar_eliminar(&id)?;
    controller(&state).eliminar(id).await?;
    Ok(Json(MensajeResponse::new("Solicitud eliminada")))
}

async fn exportar_csv(
    State(state): State<AppState>,
    query: Result<Query<ExportarQuery>, QueryRejection>,
) -> AppResult<Response> {
    let Query(query) = query?;
    let campos = validar_exportar(&query)?;
    let filter = build_filter(query.categoria.as_deref(), query.estatus.as_deref())?;

    let csv = controller(&state).exportar_csv(&filter, &campos).await?;

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv"),
            (header::CONTENT_DISPOSITION, "attachment; filename=solicitudes.csv"),
        ],
        csv,
    )
        .into_response())
}
