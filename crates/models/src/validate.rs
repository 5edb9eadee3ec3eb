//! Draft validation shared by every content entity.

use crate::errors::ModelError;

/// Checks a write input before it reaches the store.
pub trait Validate {
    fn validate(&self) -> Result<(), ModelError>;
}

pub(crate) fn require_text(field: &str, value: &str) -> Result<(), ModelError> {
    if value.trim().is_empty() {
        return Err(ModelError::Validation(format!("{field} is required")));
    }
    Ok(())
}

pub(crate) fn optional_http_url(field: &str, value: Option<&str>) -> Result<(), ModelError> {
    match value.map(str::trim) {
        None | Some("") => Ok(()),
        Some(u) if u.starts_with("http://") || u.starts_with("https://") => Ok(()),
        Some(_) => Err(ModelError::Validation(format!("{field} must start with http(s)"))),
    }
}

/// Blank optional text collapses to `None` so forms can clear a field.
pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value.and_then(|v| {
        let t = v.trim();
        if t.is_empty() { None } else { Some(t.to_string()) }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_text_is_rejected() {
        assert!(require_text("title", "  ").is_err());
        assert!(require_text("title", "Gold loans").is_ok());
    }

    #[test]
    fn optional_urls_accept_empty_and_http() {
        assert!(optional_http_url("map_url", None).is_ok());
        assert!(optional_http_url("map_url", Some("")).is_ok());
        assert!(optional_http_url("map_url", Some("https://maps.example/x")).is_ok());
        assert!(optional_http_url("map_url", Some("maps.example/x")).is_err());
    }

    #[test]
    fn non_blank_trims_and_drops_empty() {
        assert_eq!(non_blank(Some("  ".into())), None);
        assert_eq!(non_blank(Some(" 027 ".into())), Some("027".into()));
        assert_eq!(non_blank(None), None);
    }
}
