//! Supported site languages.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ContentError;

/// Language tags the site ships translations for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English.
    En,
    /// Chinese (Simplified).
    Zh,
}

/// Language used when no preference is stored and for field fallbacks.
pub const DEFAULT_LANGUAGE: Language = Language::En;

impl Language {
    /// All supported languages in switcher order.
    #[must_use]
    pub const fn all() -> [Self; 2] {
        [Self::En, Self::Zh]
    }

    /// Two-letter tag used in storage, JSON keys and `<html lang>`.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Zh => "zh",
        }
    }

    /// Caption shown on the language switch button.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::En => "EN",
            Self::Zh => "中文",
        }
    }

    /// Exact two-letter code (`en`, `zh`); anything else is rejected.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::all()
            .into_iter()
            .find(|language| language.code() == code)
    }

    /// Map an arbitrary language tag (`zh-CN`, `EN`) to a supported language.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        let lowered = tag.trim().to_ascii_lowercase();
        let base = lowered.split(['-', '_']).next().unwrap_or_default();
        Self::all()
            .iter()
            .copied()
            .find(|language| language.code() == base)
    }
}

impl Default for Language {
    fn default() -> Self {
        DEFAULT_LANGUAGE
    }
}

impl Display for Language {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = ContentError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::from_tag(value).ok_or_else(|| ContentError::UnknownLanguage {
            value: value.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_map_on_base_subtag() {
        assert_eq!(Language::from_tag("zh-CN"), Some(Language::Zh));
        assert_eq!(Language::from_tag("EN"), Some(Language::En));
        assert_eq!(Language::from_tag("en_GB"), Some(Language::En));
        assert_eq!(Language::from_tag("fr"), None);
        assert_eq!(Language::from_tag(""), None);
    }

    #[test]
    fn codes_match_exactly() {
        assert_eq!(Language::from_code("zh"), Some(Language::Zh));
        assert_eq!(Language::from_code("en"), Some(Language::En));
        for tag in ["zh-CN", "EN", "en_GB", " en", ""] {
            assert_eq!(Language::from_code(tag), None, "{tag}");
        }
    }

    #[test]
    fn parse_rejects_unsupported_tags() {
        assert_eq!("zh".parse::<Language>().ok(), Some(Language::Zh));
        let err = "fr".parse::<Language>().err();
        assert!(matches!(
            err,
            Some(ContentError::UnknownLanguage { ref value }) if value == "fr"
        ));
    }

    #[test]
    fn display_uses_code() {
        assert_eq!(Language::Zh.to_string(), "zh");
        assert_eq!(Language::default(), Language::En);
    }
}
