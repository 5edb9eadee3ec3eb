use axum::extract::{Path, State};
use axum::Json;

use common::types::Envelope;
use models::branch::{self, BranchDraft};

use crate::errors::ApiError;
use crate::routes::ordering::{MoveRequest, MoveResult, ReorderRequest};
use crate::state::AppState;

#[utoipa::path(get, path = "/admin/branches", tag = "branches", responses((status = 200, description = "Branches in display order")))]
pub async fn list(State(state): State<AppState>) -> Result<Json<Envelope<Vec<branch::Model>>>, ApiError> {
    let rows = state.branches.list().await.map_err(|e| ApiError::from_service("fetch branches", e))?;
    Ok(Json(Envelope::ok(rows)))
}

#[utoipa::path(post, path = "/admin/branches", tag = "branches", request_body = crate::openapi::BranchDraftDoc,
    responses((status = 200, description = "Created"), (status = 400, description = "Validation failed")))]
pub async fn create(
    State(state): State<AppState>,
    Json(draft): Json<BranchDraft>,
) -> Result<Json<Envelope<branch::Model>>, ApiError> {
    let created = state.branches.add(draft).await.map_err(|e| ApiError::from_service("add branch", e))?;
    Ok(Json(Envelope::ok(created)))
}

#[utoipa::path(put, path = "/admin/branches/{id}", tag = "branches", params(("id" = i32, Path, description = "Branch id")),
    request_body = crate::openapi::BranchDraftDoc,
    responses((status = 200, description = "Updated"), (status = 400, description = "Validation failed"), (status = 404, description = "Not found")))]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(draft): Json<BranchDraft>,
) -> Result<Json<Envelope<branch::Model>>, ApiError> {
    let updated = state.branches.update(id, draft).await.map_err(|e| ApiError::from_service("update branch", e))?;
    Ok(Json(Envelope::ok(updated)))
}

#[utoipa::path(delete, path = "/admin/branches/{id}", tag = "branches", params(("id" = i32, Path, description = "Branch id")),
    responses((status = 200, description = "Deleted"), (status = 404, description = "Not found")))]
pub async fn delete(State(state): State<AppState>, Path(id): Path<i32>) -> Result<Json<Envelope<branch::Model>>, ApiError> {
    let removed = state.branches.delete(id).await.map_err(|e| ApiError::from_service("delete branch", e))?;
    Ok(Json(Envelope::ok(removed)))
}

#[utoipa::path(put, path = "/admin/branches/reorder", tag = "branches", request_body = ReorderRequest,
    responses((status = 200, description = "Reordered"), (status = 400, description = "Duplicate ids")))]
pub async fn reorder(
    State(state): State<AppState>,
    Json(body): Json<ReorderRequest>,
) -> Result<Json<Envelope<()>>, ApiError> {
    state.branches.reorder(&body.ids).await.map_err(|e| ApiError::from_service("reorder branches", e))?;
    Ok(Json(Envelope::done()))
}

#[utoipa::path(post, path = "/admin/branches/{id}/move", tag = "branches", params(("id" = i32, Path, description = "Branch id")),
    request_body = MoveRequest, responses((status = 200, description = "Move result", body = MoveResult), (status = 404, description = "Not found")))]
pub async fn move_item(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(body): Json<MoveRequest>,
) -> Result<Json<Envelope<MoveResult>>, ApiError> {
    let moved = state
        .branches
        .move_item(id, body.direction)
        .await
        .map_err(|e| ApiError::from_service("move branch", e))?;
    Ok(Json(Envelope::ok(MoveResult { moved })))
}
