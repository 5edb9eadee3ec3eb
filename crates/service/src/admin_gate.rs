//! Client-held admin session check.
//!
//! The session is two values the client keeps (a flag and the login time in
//! epoch milliseconds). Anyone can forge them; this gate only keeps casual
//! visitors out of the admin screens.

use chrono::{DateTime, Duration, Utc};
use thiserror::Error;
use tracing::{info, warn};

use configs::MAX_SESSION_TTL_HOURS;

pub const AUTH_FLAG_KEY: &str = "adminAuthenticated";
pub const LOGIN_TIME_KEY: &str = "adminLoginTime";
pub const LOGIN_ROUTE: &str = "/admin/login";

const FLAG_SET: &str = "true";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GateError {
    #[error("invalid username or password")]
    InvalidCredentials,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateDecision {
    Authenticated,
    /// Flag set but the login time is too old or unreadable; clear both values.
    Expired,
    Unauthenticated,
}

/// Values to hand back to the client after a successful login.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdminSession {
    pub flag: &'static str,
    pub login_time_ms: i64,
}

#[derive(Clone, Debug)]
pub struct AdminGate {
    username: String,
    password: String,
    ttl: Duration,
}

impl AdminGate {
    /// `ttl_hours` is clamped to `1..=MAX_SESSION_TTL_HOURS`.
    pub fn new(username: impl Into<String>, password: impl Into<String>, ttl_hours: i64) -> Self {
        let ttl = Duration::hours(ttl_hours.clamp(1, MAX_SESSION_TTL_HOURS));
        Self { username: username.into(), password: password.into(), ttl }
    }

    pub fn from_config(cfg: &configs::AdminConfig) -> Self {
        Self::new(cfg.username.clone(), cfg.password.clone(), cfg.session_ttl_hours)
    }

    pub fn login(&self, username: &str, password: &str, now: DateTime<Utc>) -> Result<AdminSession, GateError> {
        if username != self.username || password != self.password {
            warn!(username, "admin login rejected");
            return Err(GateError::InvalidCredentials);
        }
        info!(username, "admin logged in");
        Ok(AdminSession { flag: FLAG_SET, login_time_ms: now.timestamp_millis() })
    }

    pub fn check(&self, flag: Option<&str>, login_time: Option<&str>, now: DateTime<Utc>) -> GateDecision {
        let login_time = match (flag, login_time) {
            (Some(FLAG_SET), Some(t)) if !t.is_empty() => t,
            _ => return GateDecision::Unauthenticated,
        };
        let Ok(ms) = login_time.trim().parse::<i64>() else {
            return GateDecision::Expired;
        };
        let elapsed_ms = now.timestamp_millis().saturating_sub(ms);
        if elapsed_ms < self.ttl.num_milliseconds() {
            GateDecision::Authenticated
        } else {
            GateDecision::Expired
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gate() -> AdminGate {
        AdminGate::new("admin", "admin123", 24)
    }

    fn at(ms: i64) -> DateTime<Utc> {
        DateTime::from_timestamp_millis(ms).unwrap()
    }

    #[test]
    fn login_checks_both_fields() {
        let now = at(1_700_000_000_000);
        let session = gate().login("admin", "admin123", now).unwrap();
        assert_eq!(session, AdminSession { flag: "true", login_time_ms: 1_700_000_000_000 });
        assert_eq!(gate().login("admin", "wrong", now), Err(GateError::InvalidCredentials));
        assert_eq!(gate().login("root", "admin123", now), Err(GateError::InvalidCredentials));
    }

    #[test]
    fn fresh_session_is_authenticated() {
        let login = 1_700_000_000_000;
        let now = at(login + 23 * 3_600_000);
        assert_eq!(gate().check(Some("true"), Some(&login.to_string()), now), GateDecision::Authenticated);
    }

    #[test]
    fn old_or_garbled_session_expires() {
        let login = 1_700_000_000_000;
        let now = at(login + 24 * 3_600_000);
        assert_eq!(gate().check(Some("true"), Some(&login.to_string()), now), GateDecision::Expired);
        assert_eq!(gate().check(Some("true"), Some("yesterday"), now), GateDecision::Expired);
    }

    #[test]
    fn missing_values_are_unauthenticated() {
        let now = at(1_700_000_000_000);
        assert_eq!(gate().check(None, None, now), GateDecision::Unauthenticated);
        assert_eq!(gate().check(Some("true"), None, now), GateDecision::Unauthenticated);
        assert_eq!(gate().check(Some("true"), Some(""), now), GateDecision::Unauthenticated);
        assert_eq!(gate().check(Some("false"), Some("1700000000000"), now), GateDecision::Unauthenticated);
    }

    #[test]
    fn shorter_ttl_is_honoured() {
        let g = AdminGate::new("admin", "admin123", 1);
        let login = 1_700_000_000_000;
        assert_eq!(g.check(Some("true"), Some(&login.to_string()), at(login + 3_599_999)), GateDecision::Authenticated);
        assert_eq!(g.check(Some("true"), Some(&login.to_string()), at(login + 3_600_000)), GateDecision::Expired);
    }

    #[test]
    fn out_of_range_ttl_is_clamped() {
        let login = 1_700_000_000_000;
        let g = AdminGate::new("admin", "admin123", i64::MAX);
        let after_two_years = at(login + 2 * 365 * 24 * 3_600_000);
        assert_eq!(g.check(Some("true"), Some(&login.to_string()), after_two_years), GateDecision::Expired);
        let g = AdminGate::new("admin", "admin123", -5);
        assert_eq!(g.check(Some("true"), Some(&login.to_string()), at(login + 3_600_000)), GateDecision::Expired);
    }
}
