//! Routes used by the public site. Slider upload and delete are reachable
//! here without the admin gate, as the site has always exposed them.

use axum::extract::{Multipart, Query, State};
use axum::Json;
use serde::Deserialize;
use tracing::info;
use utoipa::IntoParams;

use common::types::Envelope;
use models::branch::BranchView;
use models::news::NewsView;
use models::service_item::ServiceView;
use models::{slider, Language};
use service::catalog;

use crate::errors::ApiError;
use crate::routes::form::read_form;
use crate::state::AppState;

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LangQuery {
    /// `en` (default) or `si`
    pub lang: Option<String>,
}

impl LangQuery {
    pub fn language(&self) -> Language {
        Language::parse(self.lang.as_deref())
    }
}

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct DeleteSliderQuery {
    pub id: Option<String>,
    pub image_url: Option<String>,
}

#[utoipa::path(get, path = "/api/sliders", tag = "public", responses((status = 200, description = "Sliders in display order")))]
pub async fn list_sliders(State(state): State<AppState>) -> Result<Json<Envelope<Vec<slider::Model>>>, ApiError> {
    let rows = state.sliders.list().await.map_err(|e| ApiError::from_service("fetch sliders", e))?;
    Ok(Json(Envelope::ok(rows)))
}

#[utoipa::path(post, path = "/api/sliders", tag = "public",
    request_body(content = crate::openapi::FileUploadDoc, content_type = "multipart/form-data"),
    responses((status = 200, description = "Slider created"), (status = 400, description = "No file provided")))]
pub async fn upload_slider(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<Envelope<slider::Model>>, ApiError> {
    let form = read_form(multipart).await?;
    let Some(file) = form.file else {
        return Err(ApiError::bad_request("No file provided"));
    };
    let created = state.sliders.add(file).await.map_err(|e| ApiError::from_service("upload slider", e))?;
    info!(id = created.id, "slider uploaded");
    Ok(Json(Envelope::ok(created)))
}

#[utoipa::path(delete, path = "/api/sliders", tag = "public", params(DeleteSliderQuery),
    responses((status = 200, description = "Slider deleted"), (status = 400, description = "Missing required parameters"), (status = 404, description = "Not found")))]
pub async fn delete_slider(
    State(state): State<AppState>,
    Query(q): Query<DeleteSliderQuery>,
) -> Result<Json<Envelope<()>>, ApiError> {
    let (Some(id), Some(image_url)) = (q.id.as_deref().and_then(|s| s.trim().parse::<i32>().ok()), q.image_url.as_deref())
    else {
        return Err(ApiError::bad_request("Missing required parameters"));
    };
    if image_url.trim().is_empty() {
        return Err(ApiError::bad_request("Missing required parameters"));
    }
    state
        .sliders
        .delete(id, Some(image_url))
        .await
        .map_err(|e| ApiError::from_service("delete slider", e))?;
    Ok(Json(Envelope::done()))
}

#[utoipa::path(get, path = "/api/branches", tag = "public", params(LangQuery), responses((status = 200, description = "Localized branches")))]
pub async fn list_branches(
    State(state): State<AppState>,
    Query(q): Query<LangQuery>,
) -> Result<Json<Envelope<Vec<BranchView>>>, ApiError> {
    let rows = catalog::localized_branches(&state.branches, q.language())
        .await
        .map_err(|e| ApiError::from_service("fetch branches", e))?;
    Ok(Json(Envelope::ok(rows)))
}

#[utoipa::path(get, path = "/api/services", tag = "public", params(LangQuery), responses((status = 200, description = "Localized services")))]
pub async fn list_services(
    State(state): State<AppState>,
    Query(q): Query<LangQuery>,
) -> Result<Json<Envelope<Vec<ServiceView>>>, ApiError> {
    let rows = catalog::localized_services(&state.services, q.language())
        .await
        .map_err(|e| ApiError::from_service("fetch services", e))?;
    Ok(Json(Envelope::ok(rows)))
}

#[utoipa::path(get, path = "/api/news", tag = "public", params(LangQuery), responses((status = 200, description = "Localized news")))]
pub async fn list_news(
    State(state): State<AppState>,
    Query(q): Query<LangQuery>,
) -> Result<Json<Envelope<Vec<NewsView>>>, ApiError> {
    let rows = state.news.localized(q.language()).await.map_err(|e| ApiError::from_service("fetch news", e))?;
    Ok(Json(Envelope::ok(rows)))
}
