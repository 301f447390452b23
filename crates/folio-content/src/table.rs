//! JSON translation tables flattened into typed per-language catalogs.
//!
//! # Design
//! - Each language sub-tree is flattened once at load into `dotted.path -> text`.
//! - Shape problems become [`TableWarning`]s in a [`TableReport`] instead of errors,
//!   so a partially translated table still hydrates the page.
//! - Lookups never fail; a missing key resolves to the key path itself.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt::{self, Display, Formatter};

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::{ContentError, ContentResult};
use crate::language::Language;

/// Top-level section holding language-independent profile data.
pub const SITE_SECTION: &str = "site";

/// Flattened strings for a single language.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: BTreeMap<String, String>,
}

impl Catalog {
    /// Text stored under a dotted path.
    #[must_use]
    pub fn get(&self, path: &str) -> Option<&str> {
        self.entries.get(path).map(String::as_str)
    }

    /// Number of translated paths.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog holds no strings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Dotted paths in lexical order.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

/// Social profile link shown in the hero section.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SocialLink {
    /// Visible caption (`GitHub`).
    pub label: String,
    /// Target URL.
    pub url: String,
    /// Optional icon class list (`fab fa-github`).
    #[serde(default)]
    pub icon: Option<String>,
}

/// Language-independent profile data stored next to the catalogs.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteProfile {
    /// Profile photo path.
    #[serde(default)]
    pub photo: Option<String>,
    /// Social links in display order.
    #[serde(default)]
    pub social: Vec<SocialLink>,
    /// Author name emphasised in publication author lists.
    #[serde(default)]
    pub highlight_author: Option<String>,
}

/// Non-fatal problem found while loading a table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TableWarning {
    /// Top-level key that is neither a supported language nor `site`.
    UnknownSection {
        /// Offending key.
        key: String,
    },
    /// Leaf that is null or an array; it is skipped.
    NonText {
        /// Catalog the leaf belongs to.
        language: Language,
        /// Dotted path of the leaf.
        path: String,
        /// JSON type found at the leaf.
        found: &'static str,
    },
    /// Empty string; treated as missing.
    Empty {
        /// Catalog the leaf belongs to.
        language: Language,
        /// Dotted path of the leaf.
        path: String,
    },
    /// Key containing a `.`; it cannot be addressed by a dotted path and is skipped.
    DottedKey {
        /// Catalog the key belongs to.
        language: Language,
        /// Dotted path of the parent plus the raw key.
        path: String,
    },
    /// The `site` section could not be decoded; defaults are used.
    InvalidSite {
        /// Decoder message.
        reason: String,
    },
    /// Path translated elsewhere (or required by the page) but absent here.
    MissingKey {
        /// Catalog lacking the path.
        language: Language,
        /// Dotted path that is absent.
        path: String,
    },
}

impl Display for TableWarning {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownSection { key } => {
                write!(formatter, "unknown top-level section `{key}`")
            }
            Self::NonText {
                language,
                path,
                found,
            } => write!(formatter, "[{language}] `{path}` is {found}, expected text"),
            Self::Empty { language, path } => write!(formatter, "[{language}] `{path}` is empty"),
            Self::DottedKey { language, path } => {
                write!(formatter, "[{language}] key `{path}` contains a dot")
            }
            Self::InvalidSite { reason } => {
                write!(formatter, "invalid `{SITE_SECTION}` section, using defaults: {reason}")
            }
            Self::MissingKey { language, path } => {
                write!(formatter, "[{language}] `{path}` is missing")
            }
        }
    }
}

/// Warnings collected while loading a table.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TableReport {
    warnings: Vec<TableWarning>,
}

impl TableReport {
    /// Warnings in discovery order.
    #[must_use]
    pub fn warnings(&self) -> &[TableWarning] {
        &self.warnings
    }

    /// Whether the table loaded without any warning.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}

/// Translation table keyed by language, immutable after load.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TranslationTable {
    catalogs: BTreeMap<Language, Catalog>,
    site: SiteProfile,
    report: TableReport,
}

impl TranslationTable {
    /// Parse a table from raw JSON text.
    ///
    /// # Errors
    /// Returns [`ContentError::Json`] for malformed JSON, otherwise see [`Self::from_value`].
    pub fn from_json(raw: &str) -> ContentResult<Self> {
        let value: Value =
            serde_json::from_str(raw).map_err(|source| ContentError::Json { source })?;
        Self::from_value(&value)
    }

    /// Build a table from a decoded JSON document.
    ///
    /// # Errors
    /// Returns [`ContentError::TableShape`] when the root is not an object and
    /// [`ContentError::NoCatalogs`] when no supported language is present.
    pub fn from_value(value: &Value) -> ContentResult<Self> {
        let root = value.as_object().ok_or(ContentError::TableShape {
            found: json_kind(value),
        })?;

        let mut warnings = Vec::new();
        let mut catalogs = BTreeMap::new();
        let mut site = SiteProfile::default();

        for (key, section) in root {
            if key == SITE_SECTION {
                match SiteProfile::deserialize(section) {
                    Ok(profile) => site = profile,
                    Err(err) => warnings.push(TableWarning::InvalidSite {
                        reason: err.to_string(),
                    }),
                }
                continue;
            }
            let Some(language) = Language::from_code(key) else {
                warnings.push(TableWarning::UnknownSection { key: key.clone() });
                continue;
            };
            let mut catalog = Catalog::default();
            match section {
                Value::Object(tree) => {
                    flatten(language, tree, "", &mut catalog.entries, &mut warnings);
                }
                other => warnings.push(TableWarning::NonText {
                    language,
                    path: String::new(),
                    found: json_kind(other),
                }),
            }
            catalogs.insert(language, catalog);
        }

        if catalogs.is_empty() {
            return Err(ContentError::NoCatalogs);
        }

        let all_paths: BTreeSet<&String> = catalogs
            .values()
            .flat_map(|catalog| catalog.entries.keys())
            .collect();
        for (language, catalog) in &catalogs {
            for path in &all_paths {
                if !catalog.entries.contains_key(*path) {
                    warnings.push(TableWarning::MissingKey {
                        language: *language,
                        path: (*path).clone(),
                    });
                }
            }
        }

        Ok(Self {
            catalogs,
            site,
            report: TableReport { warnings },
        })
    }

    /// Whether the table carries a catalog for `language`.
    #[must_use]
    pub fn contains(&self, language: Language) -> bool {
        self.catalogs.contains_key(&language)
    }

    /// Languages with a catalog, in switcher order.
    pub fn languages(&self) -> impl Iterator<Item = Language> + '_ {
        self.catalogs.keys().copied()
    }

    /// Catalog for a language, if loaded.
    #[must_use]
    pub fn catalog(&self, language: Language) -> Option<&Catalog> {
        self.catalogs.get(&language)
    }

    /// Text stored under `path` for `language`.
    #[must_use]
    pub fn lookup(&self, language: Language, path: &str) -> Option<&str> {
        self.catalogs.get(&language)?.get(path)
    }

    /// Text stored under `path`, or `path` itself when the key is absent.
    #[must_use]
    pub fn translate<'a>(&'a self, language: Language, path: &'a str) -> &'a str {
        self.lookup(language, path).unwrap_or(path)
    }

    /// Language-independent profile data.
    #[must_use]
    pub const fn site(&self) -> &SiteProfile {
        &self.site
    }

    /// Warnings gathered at load.
    #[must_use]
    pub const fn report(&self) -> &TableReport {
        &self.report
    }

    /// Required paths absent from any loaded catalog.
    #[must_use]
    pub fn missing_required(&self, required: &[&str]) -> Vec<TableWarning> {
        let mut missing = Vec::new();
        for (language, catalog) in &self.catalogs {
            for path in required {
                if catalog.get(path).is_none() {
                    missing.push(TableWarning::MissingKey {
                        language: *language,
                        path: (*path).to_string(),
                    });
                }
            }
        }
        missing
    }
}

fn flatten(
    language: Language,
    tree: &Map<String, Value>,
    prefix: &str,
    entries: &mut BTreeMap<String, String>,
    warnings: &mut Vec<TableWarning>,
) {
    for (key, value) in tree {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };
        if key.contains('.') {
            warnings.push(TableWarning::DottedKey { language, path });
            continue;
        }
        match value {
            Value::String(text) if text.is_empty() => {
                warnings.push(TableWarning::Empty { language, path });
            }
            Value::String(text) => {
                entries.insert(path, text.clone());
            }
            Value::Number(number) => {
                entries.insert(path, number.to_string());
            }
            Value::Bool(flag) => {
                entries.insert(path, flag.to_string());
            }
            Value::Object(child) => flatten(language, child, &path, entries, warnings),
            other => warnings.push(TableWarning::NonText {
                language,
                path,
                found: json_kind(other),
            }),
        }
    }
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
