use axum::Json;
use utoipa::OpenApi;
use utoipa::ToSchema;

use crate::routes::admin_auth::{LoginRequest, SessionStatus};
use crate::routes::ordering::{MoveRequest, MoveResult, OrderRequest, ReorderRequest};

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

/// Multipart body with a single image part named `file`.
#[derive(ToSchema)]
pub struct FileUploadDoc {
    #[schema(value_type = String, format = Binary)]
    pub file: Vec<u8>,
}

#[derive(ToSchema)]
pub struct BranchDraftDoc {
    pub title: String,
    pub description: Option<String>,
    pub title_si: Option<String>,
    pub description_si: Option<String>,
    pub address: Option<String>,
    pub address_si: Option<String>,
    pub contact_number: Option<String>,
    pub map_url: Option<String>,
    pub is_coming_soon: Option<bool>,
}

#[derive(ToSchema)]
pub struct ServiceDraftDoc {
    pub title: String,
    pub description: Option<String>,
    pub title_si: Option<String>,
    pub description_si: Option<String>,
}

/// Multipart news form. `file` replaces the image, `remove_image=true` drops it.
/// Images must be `image/*` and at most 5 MiB by default.
#[derive(ToSchema)]
pub struct NewsFormDoc {
    pub title: String,
    pub title_si: String,
    pub description: String,
    pub description_si: String,
    #[schema(example = "2024-05-01")]
    pub date: String,
    #[schema(value_type = Option<String>, format = Binary)]
    pub file: Option<Vec<u8>>,
    pub remove_image: Option<bool>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::public::list_sliders,
        crate::routes::public::upload_slider,
        crate::routes::public::delete_slider,
        crate::routes::public::list_branches,
        crate::routes::public::list_services,
        crate::routes::public::list_news,
        crate::routes::admin_auth::login,
        crate::routes::admin_auth::logout,
        crate::routes::admin_auth::session,
        crate::routes::sliders::reorder,
        crate::routes::sliders::delete,
        crate::routes::sliders::move_item,
        crate::routes::sliders::set_order,
        crate::routes::branches::list,
        crate::routes::branches::create,
        crate::routes::branches::update,
        crate::routes::branches::delete,
        crate::routes::branches::reorder,
        crate::routes::branches::move_item,
        crate::routes::services::list,
        crate::routes::services::create,
        crate::routes::services::update,
        crate::routes::services::delete,
        crate::routes::services::reorder,
        crate::routes::services::move_item,
        crate::routes::news::list,
        crate::routes::news::create,
        crate::routes::news::update,
        crate::routes::news::delete,
        crate::routes::news::reorder,
        crate::routes::news::move_item,
    ),
    components(
        schemas(
            HealthResponse,
            FileUploadDoc,
            BranchDraftDoc,
            ServiceDraftDoc,
            NewsFormDoc,
            LoginRequest,
            SessionStatus,
            ReorderRequest,
            MoveRequest,
            OrderRequest,
            MoveResult,
        )
    ),
    tags(
        (name = "health"),
        (name = "public"),
        (name = "admin"),
        (name = "sliders"),
        (name = "branches"),
        (name = "services"),
        (name = "news")
    )
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
