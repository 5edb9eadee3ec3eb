use axum::extract::{Path, State};
use axum::Json;

use common::types::Envelope;
use models::service_item::{self, ServiceDraft};

use crate::errors::ApiError;
use crate::routes::ordering::{MoveRequest, MoveResult, ReorderRequest};
use crate::state::AppState;

#[utoipa::path(get, path = "/admin/services", tag = "services", responses((status = 200, description = "Services in display order")))]
pub async fn list(State(state): State<AppState>) -> Result<Json<Envelope<Vec<service_item::Model>>>, ApiError> {
    let rows = state.services.list().await.map_err(|e| ApiError::from_service("fetch services", e))?;
    Ok(Json(Envelope::ok(rows)))
}

#[utoipa::path(post, path = "/admin/services", tag = "services", request_body = crate::openapi::ServiceDraftDoc,
    responses((status = 200, description = "Created"), (status = 400, description = "Validation failed")))]
pub async fn create(
    State(state): State<AppState>,
    Json(draft): Json<ServiceDraft>,
) -> Result<Json<Envelope<service_item::Model>>, ApiError> {
    let created = state.services.add(draft).await.map_err(|e| ApiError::from_service("add service", e))?;
    Ok(Json(Envelope::ok(created)))
}

#[utoipa::path(put, path = "/admin/services/{id}", tag = "services", params(("id" = i32, Path, description = "Service id")),
    request_body = crate::openapi::ServiceDraftDoc,
    responses((status = 200, description = "Updated"), (status = 400, description = "Validation failed"), (status = 404, description = "Not found")))]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(draft): Json<ServiceDraft>,
) -> Result<Json<Envelope<service_item::Model>>, ApiError> {
    let updated = state.services.update(id, draft).await.map_err(|e| ApiError::from_service("update service", e))?;
    Ok(Json(Envelope::ok(updated)))
}

#[utoipa::path(delete, path = "/admin/services/{id}", tag = "services", params(("id" = i32, Path, description = "Service id")),
    responses((status = 200, description = "Deleted"), (status = 404, description = "Not found")))]
pub async fn delete(State(state): State<AppState>, Path(id): Path<i32>) -> Result<Json<Envelope<service_item::Model>>, ApiError> {
    let removed = state.services.delete(id).await.map_err(|e| ApiError::from_service("delete service", e))?;
    Ok(Json(Envelope::ok(removed)))
}

#[utoipa::path(put, path = "/admin/services/reorder", tag = "services", request_body = ReorderRequest,
    responses((status = 200, description = "Reordered"), (status = 400, description = "Duplicate ids")))]
pub async fn reorder(
    State(state): State<AppState>,
    Json(body): Json<ReorderRequest>,
) -> Result<Json<Envelope<()>>, ApiError> {
    state.services.reorder(&body.ids).await.map_err(|e| ApiError::from_service("reorder services", e))?;
    Ok(Json(Envelope::done()))
}

#[utoipa::path(post, path = "/admin/services/{id}/move", tag = "services", params(("id" = i32, Path, description = "Service id")),
    request_body = MoveRequest, responses((status = 200, description = "Move result", body = MoveResult), (status = 404, description = "Not found")))]
pub async fn move_item(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(body): Json<MoveRequest>,
) -> Result<Json<Envelope<MoveResult>>, ApiError> {
    let moved = state
        .services
        .move_item(id, body.direction)
        .await
        .map_err(|e| ApiError::from_service("move service", e))?;
    Ok(Json(Envelope::ok(MoveResult { moved })))
}
