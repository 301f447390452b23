//! Pure renderers turning the translation table and content files into slot markup.
//!
//! # Design
//! - Every renderer is a function of one [`RenderContext`]; the same context
//!   always produces the same markup, which keeps language switches reversible.
//! - Markup is built with `maud`, which escapes every interpolated value.

pub mod hero;
pub mod html;
pub mod navbar;
pub mod projects;
pub mod publications;

use folio_content::{Language, TranslationTable};

pub use hero::render_hero;
pub use navbar::render_navbar;
pub use projects::render_projects;
pub use publications::render_publications;

/// Translation keys the navbar and hero read; checked at load time.
pub const REQUIRED_KEYS: &[&str] = &[
    "navbar.brand",
    "navbar.home",
    "navbar.about",
    "navbar.projects",
    "navbar.publications",
    "navbar.contact",
    "profile.nationality",
    "profile.nationalityValue",
    "profile.age",
    "profile.ageValue",
    "profile.email",
    "profile.emailValue",
    "profile.phone",
    "profile.phoneValue",
    "profile.location",
    "profile.locationValue",
    "hero.name",
    "hero.title",
    "hero.bio",
];

/// Key whose translation becomes the document title.
pub const TITLE_KEY: &str = "navbar.brand";

/// Language and table a render pass reads from.
#[derive(Clone, Copy, Debug)]
pub struct RenderContext<'a> {
    /// Language of this pass.
    pub language: Language,
    /// Loaded translation table.
    pub table: &'a TranslationTable,
}

impl<'a> RenderContext<'a> {
    /// Context for one render pass.
    #[must_use]
    pub const fn new(language: Language, table: &'a TranslationTable) -> Self {
        Self { language, table }
    }

    /// Translation for `key`, or the key itself when absent.
    #[must_use]
    pub fn t(&self, key: &'a str) -> &'a str {
        self.table.translate(self.language, key)
    }
}
