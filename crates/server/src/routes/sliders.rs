use axum::extract::{Path, State};
use axum::Json;

use common::types::Envelope;
use models::slider;

use crate::errors::ApiError;
use crate::routes::ordering::{MoveRequest, MoveResult, OrderRequest, ReorderRequest};
use crate::state::AppState;

#[utoipa::path(put, path = "/admin/sliders/reorder", tag = "sliders", request_body = ReorderRequest,
    responses((status = 200, description = "Reordered"), (status = 400, description = "Duplicate ids")))]
pub async fn reorder(
    State(state): State<AppState>,
    Json(body): Json<ReorderRequest>,
) -> Result<Json<Envelope<()>>, ApiError> {
    state.sliders.reorder(&body.ids).await.map_err(|e| ApiError::from_service("reorder sliders", e))?;
    Ok(Json(Envelope::done()))
}

#[utoipa::path(delete, path = "/admin/sliders/{id}", tag = "sliders", params(("id" = i32, Path, description = "Slider id")),
    responses((status = 200, description = "Deleted"), (status = 404, description = "Not found")))]
pub async fn delete(State(state): State<AppState>, Path(id): Path<i32>) -> Result<Json<Envelope<slider::Model>>, ApiError> {
    let removed = state.sliders.delete(id, None).await.map_err(|e| ApiError::from_service("delete slider", e))?;
    Ok(Json(Envelope::ok(removed)))
}

#[utoipa::path(post, path = "/admin/sliders/{id}/move", tag = "sliders", params(("id" = i32, Path, description = "Slider id")),
    request_body = MoveRequest, responses((status = 200, description = "Move result", body = MoveResult), (status = 404, description = "Not found")))]
pub async fn move_item(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(body): Json<MoveRequest>,
) -> Result<Json<Envelope<MoveResult>>, ApiError> {
    let moved = state
        .sliders
        .move_item(id, body.direction)
        .await
        .map_err(|e| ApiError::from_service("move slider", e))?;
    Ok(Json(Envelope::ok(MoveResult { moved })))
}

#[utoipa::path(put, path = "/admin/sliders/{id}/order", tag = "sliders", params(("id" = i32, Path, description = "Slider id")),
    request_body = OrderRequest, responses((status = 200, description = "Order index written"), (status = 404, description = "Not found")))]
pub async fn set_order(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(body): Json<OrderRequest>,
) -> Result<Json<Envelope<()>>, ApiError> {
    state
        .sliders
        .set_order_index(id, body.order_index)
        .await
        .map_err(|e| ApiError::from_service("update slider order", e))?;
    Ok(Json(Envelope::done()))
}

