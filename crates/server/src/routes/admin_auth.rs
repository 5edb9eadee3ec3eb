use axum::{extract::State, http::StatusCode, Json};
use axum_extra::extract::cookie::CookieJar;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use common::types::Envelope;
use service::admin_gate::{GateDecision, GateError, AUTH_FLAG_KEY, LOGIN_TIME_KEY};

use crate::errors::ApiError;
use crate::routes::gate::{clear_session, store_session};
use crate::state::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SessionStatus {
    pub authenticated: bool,
}

#[utoipa::path(post, path = "/admin/login", tag = "admin", request_body = LoginRequest,
    responses((status = 200, description = "Session cookies set"), (status = 401, description = "Invalid credentials")))]
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(input): Json<LoginRequest>,
) -> Result<(CookieJar, Json<Envelope<SessionStatus>>), ApiError> {
    match state.gate.login(&input.username, &input.password, Utc::now()) {
        Ok(session) => Ok((store_session(jar, &session), Json(Envelope::ok(SessionStatus { authenticated: true })))),
        Err(GateError::InvalidCredentials) => Err(ApiError::new(StatusCode::UNAUTHORIZED, "Invalid username or password")),
    }
}

#[utoipa::path(post, path = "/admin/logout", tag = "admin", responses((status = 200, description = "Session cookies cleared")))]
pub async fn logout(jar: CookieJar) -> (CookieJar, Json<Envelope<()>>) {
    (clear_session(jar), Json(Envelope::done()))
}

#[utoipa::path(get, path = "/admin/session", tag = "admin", responses((status = 200, description = "Current session state", body = SessionStatus)))]
pub async fn session(State(state): State<AppState>, jar: CookieJar) -> Json<Envelope<SessionStatus>> {
    let decision = state.gate.check(
        jar.get(AUTH_FLAG_KEY).map(|c| c.value()),
        jar.get(LOGIN_TIME_KEY).map(|c| c.value()),
        Utc::now(),
    );
    Json(Envelope::ok(SessionStatus { authenticated: decision == GateDecision::Authenticated }))
}
