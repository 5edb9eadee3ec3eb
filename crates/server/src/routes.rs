pub mod admin_auth;
pub mod branches;
pub mod form;
pub mod gate;
pub mod news;
pub mod ordering;
pub mod public;
pub mod services;
pub mod sliders;

use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post, put},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use common::types::Health;
use configs::ServerConfig;

use crate::openapi;
use crate::state::AppState;

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router: public API, gated admin API, OpenAPI
/// document and the static site as fallback.
pub fn build_router(state: AppState, cors: CorsLayer, server: &ServerConfig) -> Router {
    let static_dir = ServeDir::new(&server.static_dir)
        .fallback(ServeFile::new(format!("{}/index.html", server.static_dir)));

    let public = Router::new()
        .route("/health", get(health))
        .route("/api-docs/openapi.json", get(openapi::openapi_json))
        .route(
            "/api/sliders",
            get(public::list_sliders).post(public::upload_slider).delete(public::delete_slider),
        )
        .route("/api/branches", get(public::list_branches))
        .route("/api/services", get(public::list_services))
        .route("/api/news", get(public::list_news));

    let session = Router::new()
        .route("/admin/login", post(admin_auth::login))
        .route("/admin/logout", post(admin_auth::logout))
        .route("/admin/session", get(admin_auth::session));

    let admin = Router::new()
        .route("/admin/sliders", get(public::list_sliders).post(public::upload_slider))
        .route("/admin/sliders/reorder", put(sliders::reorder))
        .route("/admin/sliders/:id", axum::routing::delete(sliders::delete))
        .route("/admin/sliders/:id/move", post(sliders::move_item))
        .route("/admin/sliders/:id/order", put(sliders::set_order))
        .route("/admin/branches", get(branches::list).post(branches::create))
        .route("/admin/branches/reorder", put(branches::reorder))
        .route("/admin/branches/:id", put(branches::update).delete(branches::delete))
        .route("/admin/branches/:id/move", post(branches::move_item))
        .route("/admin/services", get(services::list).post(services::create))
        .route("/admin/services/reorder", put(services::reorder))
        .route("/admin/services/:id", put(services::update).delete(services::delete))
        .route("/admin/services/:id/move", post(services::move_item))
        .route("/admin/news", get(news::list).post(news::create))
        .route("/admin/news/reorder", put(news::reorder))
        .route("/admin/news/:id", put(news::update).delete(news::delete))
        .route("/admin/news/:id/move", post(news::move_item))
        .route_layer(middleware::from_fn_with_state(state.clone(), gate::require_admin));

    public
        .merge(session)
        .merge(admin)
        .fallback_service(static_dir)
        .with_state(state)
        .layer(DefaultBodyLimit::max(server.max_upload_bytes))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
