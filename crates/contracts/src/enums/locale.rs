use serde::{Deserialize, Serialize};

/// Display languages supported by the platform.
///
/// The code is sent as the `lang` query parameter so that the backend
/// returns locale-specific titles and categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Ar,
    En,
    Fr,
    Es,
    Ru,
}

impl Locale {
    /// Language tag as used on the wire and in local storage
    pub fn code(&self) -> &'static str {
        match self {
            Locale::Ar => "ar",
            Locale::En => "en",
            Locale::Fr => "fr",
            Locale::Es => "es",
            Locale::Ru => "ru",
        }
    }

    /// Parse a language tag. Region suffixes (`en-US`, `fr_CA`) are ignored.
    pub fn from_code(code: &str) -> Option<Self> {
        let primary = code
            .split(['-', '_'])
            .next()
            .unwrap_or("")
            .trim()
            .to_ascii_lowercase();
        match primary.as_str() {
            "ar" => Some(Locale::Ar),
            "en" => Some(Locale::En),
            "fr" => Some(Locale::Fr),
            "es" => Some(Locale::Es),
            "ru" => Some(Locale::Ru),
            _ => None,
        }
    }

    /// Tag passed to `Intl` formatters
    pub fn intl_tag(&self) -> &'static str {
        match self {
            Locale::Ar => "ar-SA",
            Locale::En => "en-US",
            Locale::Fr => "fr-FR",
            Locale::Es => "es-ES",
            Locale::Ru => "ru-RU",
        }
    }

    pub fn is_rtl(&self) -> bool {
        matches!(self, Locale::Ar)
    }

    /// Name of the language in that language, for the selector
    pub fn display_name(&self) -> &'static str {
        match self {
            Locale::Ar => "العربية",
            Locale::En => "English",
            Locale::Fr => "Français",
            Locale::Es => "Español",
            Locale::Ru => "Русский",
        }
    }

    pub fn all() -> [Locale; 5] {
        [Locale::Ar, Locale::En, Locale::Fr, Locale::Es, Locale::Ru]
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code_strips_region() {
        assert_eq!(Locale::from_code("en-US"), Some(Locale::En));
        assert_eq!(Locale::from_code("fr_CA"), Some(Locale::Fr));
        assert_eq!(Locale::from_code("RU"), Some(Locale::Ru));
        assert_eq!(Locale::from_code("de"), None);
        assert_eq!(Locale::from_code(""), None);
    }

    #[test]
    fn test_code_round_trips_for_all() {
        for locale in Locale::all() {
            assert_eq!(Locale::from_code(locale.code()), Some(locale));
        }
    }

    #[test]
    fn test_only_arabic_is_rtl() {
        assert!(Locale::Ar.is_rtl());
        assert!(Locale::all().iter().filter(|l| l.is_rtl()).count() == 1);
    }

    #[test]
    fn test_serde_uses_lowercase_code() {
        assert_eq!(serde_json::to_string(&Locale::Es).unwrap(), "\"es\"");
        let parsed: Locale = serde_json::from_str("\"ar\"").unwrap();
        assert_eq!(parsed, Locale::Ar);
    }
}
