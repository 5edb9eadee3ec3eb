use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use chrono::Utc;
use tracing::{debug, info};

use service::admin_gate::{AdminSession, GateDecision, AUTH_FLAG_KEY, LOGIN_ROUTE, LOGIN_TIME_KEY};

use crate::state::AppState;

/// Admin middleware: let authenticated sessions through, send everyone else to
/// the login page. Expired sessions also lose their cookies.
pub async fn require_admin(State(state): State<AppState>, jar: CookieJar, req: Request, next: Next) -> Response {
    let decision = state.gate.check(
        jar.get(AUTH_FLAG_KEY).map(|c| c.value()),
        jar.get(LOGIN_TIME_KEY).map(|c| c.value()),
        Utc::now(),
    );
    match decision {
        GateDecision::Authenticated => next.run(req).await,
        GateDecision::Expired => {
            info!(path = %req.uri().path(), "admin session expired");
            (clear_session(jar), Redirect::to(LOGIN_ROUTE)).into_response()
        }
        GateDecision::Unauthenticated => {
            debug!(path = %req.uri().path(), "admin session missing");
            Redirect::to(LOGIN_ROUTE).into_response()
        }
    }
}

fn session_cookie(name: &'static str, value: String) -> Cookie<'static> {
    let mut cookie = Cookie::new(name, value);
    cookie.set_path("/");
    cookie.set_http_only(true);
    cookie.set_secure(false);
    cookie.set_same_site(SameSite::Lax);
    cookie
}

pub fn store_session(jar: CookieJar, session: &AdminSession) -> CookieJar {
    jar.add(session_cookie(AUTH_FLAG_KEY, session.flag.to_string()))
        .add(session_cookie(LOGIN_TIME_KEY, session.login_time_ms.to_string()))
}

pub fn clear_session(jar: CookieJar) -> CookieJar {
    let mut flag = Cookie::from(AUTH_FLAG_KEY);
    flag.set_path("/");
    let mut login_time = Cookie::from(LOGIN_TIME_KEY);
    login_time.set_path("/");
    jar.remove(flag).remove(login_time)
}
