//! Page configuration: asset locations, storage key and slot identifiers.
//!
//! # Design
//! - Every field has a default so an empty JSON object is a valid config.
//! - Paths are relative to `asset_base`, mirroring the static site layout.

use serde::Deserialize;

/// Reserved DOM identifiers for hydrated sections.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SlotIds {
    /// Navigation bar container.
    pub navbar: String,
    /// Hero/profile container.
    pub hero: String,
    /// Projects list container.
    pub projects: String,
    /// Publications list container.
    pub publications: String,
}

impl Default for SlotIds {
    fn default() -> Self {
        Self {
            navbar: "navbar-container".to_string(),
            hero: "hero-container".to_string(),
            projects: "projects-container".to_string(),
            publications: "publications-container".to_string(),
        }
    }
}

/// Controller configuration.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Prefix joined to every asset path (`""` for same-directory pages).
    pub asset_base: String,
    /// Translation table location.
    pub translations_path: String,
    /// Projects file location.
    pub projects_path: String,
    /// Publications file location.
    pub publications_path: String,
    /// Local storage key holding the language preference.
    pub storage_key: String,
    /// Attribute naming the translation key on arbitrary elements.
    pub translate_attribute: String,
    /// Slot identifiers.
    pub slots: SlotIds,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            asset_base: String::new(),
            translations_path: "assets/utils/translations.json".to_string(),
            projects_path: "assets/data/projects.json".to_string(),
            publications_path: "assets/data/publications.json".to_string(),
            storage_key: "language".to_string(),
            translate_attribute: "data-i18n".to_string(),
            slots: SlotIds::default(),
        }
    }
}

impl PageConfig {
    /// Parse a JSON config document, filling missing fields with defaults.
    ///
    /// # Errors
    /// Returns the serde error when the document is not valid JSON or a field has the wrong type.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Join `path` onto the configured asset base.
    #[must_use]
    pub fn asset_url(&self, path: &str) -> String {
        join_path(&self.asset_base, path)
    }

    /// Slot identifier for a section.
    #[must_use]
    pub fn slot(&self, section: Section) -> &str {
        match section {
            Section::Navbar => self.slots.navbar.as_str(),
            Section::Hero => self.slots.hero.as_str(),
            Section::Projects => self.slots.projects.as_str(),
            Section::Publications => self.slots.publications.as_str(),
        }
    }

    /// Data file backing a content section, if any.
    #[must_use]
    pub fn data_path(&self, section: Section) -> Option<&str> {
        match section {
            Section::Navbar | Section::Hero => None,
            Section::Projects => Some(self.projects_path.as_str()),
            Section::Publications => Some(self.publications_path.as_str()),
        }
    }
}

/// Hydrated page sections, each rendered into its own slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    /// Navigation bar with language buttons.
    Navbar,
    /// Profile card and bio.
    Hero,
    /// Projects list (backed by `projects.json`).
    Projects,
    /// Publications list (backed by `publications.json`).
    Publications,
}

impl Section {
    /// All sections in render order.
    #[must_use]
    pub const fn all() -> [Self; 4] {
        [Self::Navbar, Self::Hero, Self::Projects, Self::Publications]
    }

    /// Sections backed by a structured content file.
    #[must_use]
    pub const fn content() -> [Self; 2] {
        [Self::Projects, Self::Publications]
    }

    /// Stable name used in logs.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Navbar => "navbar",
            Self::Hero => "hero",
            Self::Projects => "projects",
            Self::Publications => "publications",
        }
    }
}

fn join_path(base: &str, path: &str) -> String {
    if base.is_empty() || path.contains("://") || path.starts_with('/') {
        return path.to_string();
    }
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches("./")
    )
}
