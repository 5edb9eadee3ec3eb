use serde::{Deserialize, Serialize};

/// Display language of the marketing site.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Si,
}

impl Language {
    /// Unknown or missing codes fall back to English.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(|s| s.trim().to_ascii_lowercase()).as_deref() {
            Some("si") => Language::Si,
            _ => Language::En,
        }
    }

    /// Choose the variant for this language; an empty Sinhala text falls back to English.
    pub fn pick<'a>(self, en: &'a str, si: &'a str) -> &'a str {
        match self {
            Language::Si if !si.trim().is_empty() => si,
            _ => en,
        }
    }

    pub fn pick_opt(self, en: Option<&str>, si: Option<&str>) -> Option<String> {
        match (self, si) {
            (Language::Si, Some(s)) if !s.trim().is_empty() => Some(s.to_string()),
            _ => en.map(str::to_string),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Language;

    #[test]
    fn parse_defaults_to_english() {
        assert_eq!(Language::parse(None), Language::En);
        assert_eq!(Language::parse(Some("fr")), Language::En);
        assert_eq!(Language::parse(Some(" SI ")), Language::Si);
    }

    #[test]
    fn sinhala_falls_back_when_blank() {
        assert_eq!(Language::Si.pick("Gold loan", "රන් ණය"), "රන් ණය");
        assert_eq!(Language::Si.pick("Gold loan", ""), "Gold loan");
        assert_eq!(Language::En.pick("Gold loan", "රන් ණය"), "Gold loan");
        assert_eq!(Language::Si.pick_opt(Some("Main St"), None), Some("Main St".into()));
    }
}
