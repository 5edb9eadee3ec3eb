use axum::extract::{Multipart, Path, State};
use axum::Json;
use chrono::NaiveDate;

use common::types::Envelope;
use models::news::{self, NewsDraft};
use service::news::ImageChange;

use crate::errors::ApiError;
use crate::routes::form::{read_form, FormParts};
use crate::routes::ordering::{MoveRequest, MoveResult, ReorderRequest};
use crate::state::AppState;

const REMOVE_IMAGE_FIELD: &str = "remove_image";

fn draft_from_form(form: &FormParts) -> Result<NewsDraft, ApiError> {
    let raw_date = form.text("date").map(str::trim).unwrap_or_default();
    let date = NaiveDate::parse_from_str(raw_date, "%Y-%m-%d")
        .map_err(|_| ApiError::bad_request("date must be YYYY-MM-DD"))?;
    Ok(NewsDraft {
        title: form.text_or_default("title"),
        title_si: form.text_or_default("title_si"),
        description: form.text_or_default("description"),
        description_si: form.text_or_default("description_si"),
        date,
        image_url: None,
    })
}

#[utoipa::path(get, path = "/admin/news", tag = "news", responses((status = 200, description = "News in display order")))]
pub async fn list(State(state): State<AppState>) -> Result<Json<Envelope<Vec<news::Model>>>, ApiError> {
    let rows = state.news.list().await.map_err(|e| ApiError::from_service("fetch news", e))?;
    Ok(Json(Envelope::ok(rows)))
}

#[utoipa::path(post, path = "/admin/news", tag = "news",
    request_body(content = crate::openapi::NewsFormDoc, content_type = "multipart/form-data"),
    responses((status = 200, description = "Created"), (status = 400, description = "Validation failed")))]
pub async fn create(State(state): State<AppState>, multipart: Multipart) -> Result<Json<Envelope<news::Model>>, ApiError> {
    let form = read_form(multipart).await?;
    let draft = draft_from_form(&form)?;
    let created = state.news.add(draft, form.file).await.map_err(|e| ApiError::from_service("add news", e))?;
    Ok(Json(Envelope::ok(created)))
}

#[utoipa::path(put, path = "/admin/news/{id}", tag = "news", params(("id" = i32, Path, description = "News id")),
    request_body(content = crate::openapi::NewsFormDoc, content_type = "multipart/form-data"),
    responses((status = 200, description = "Updated"), (status = 400, description = "Validation failed"), (status = 404, description = "Not found")))]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    multipart: Multipart,
) -> Result<Json<Envelope<news::Model>>, ApiError> {
    let mut form = read_form(multipart).await?;
    let draft = draft_from_form(&form)?;
    let image = match form.file.take() {
        Some(upload) => ImageChange::Replace(upload),
        None if form.flag(REMOVE_IMAGE_FIELD) => ImageChange::Remove,
        None => ImageChange::Keep,
    };
    let updated = state.news.update(id, draft, image).await.map_err(|e| ApiError::from_service("update news", e))?;
    Ok(Json(Envelope::ok(updated)))
}

#[utoipa::path(delete, path = "/admin/news/{id}", tag = "news", params(("id" = i32, Path, description = "News id")),
    responses((status = 200, description = "Deleted"), (status = 404, description = "Not found")))]
pub async fn delete(State(state): State<AppState>, Path(id): Path<i32>) -> Result<Json<Envelope<news::Model>>, ApiError> {
    let removed = state.news.delete(id).await.map_err(|e| ApiError::from_service("delete news", e))?;
    Ok(Json(Envelope::ok(removed)))
}

#[utoipa::path(put, path = "/admin/news/reorder", tag = "news", request_body = ReorderRequest,
    responses((status = 200, description = "Reordered"), (status = 400, description = "Duplicate ids")))]
pub async fn reorder(
    State(state): State<AppState>,
    Json(body): Json<ReorderRequest>,
) -> Result<Json<Envelope<()>>, ApiError> {
    state.news.reorder(&body.ids).await.map_err(|e| ApiError::from_service("reorder news", e))?;
    Ok(Json(Envelope::done()))
}

#[utoipa::path(post, path = "/admin/news/{id}/move", tag = "news", params(("id" = i32, Path, description = "News id")),
    request_body = MoveRequest,
    responses((status = 200, description = "Move result", body = MoveResult), (status = 400, description = "Order management not available"), (status = 404, description = "Not found")))]
pub async fn move_item(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(body): Json<MoveRequest>,
) -> Result<Json<Envelope<MoveResult>>, ApiError> {
    let moved = state
        .news
        .move_item(id, body.direction)
        .await
        .map_err(|e| ApiError::from_service("move news", e))?;
    Ok(Json(Envelope::ok(MoveResult { moved })))
}
