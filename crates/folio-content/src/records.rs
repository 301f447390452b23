//! Structured content records (projects, publications) and their UI labels.

use std::collections::BTreeMap;
use std::fmt::{self, Display, Formatter};

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{ContentError, ContentResult};
use crate::language::{DEFAULT_LANGUAGE, Language};

/// Text that is either shared by every language or given per language tag.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum LocalizedText {
    /// Same text in every language.
    Plain(String),
    /// Variants keyed by language tag (`en`, `zh`).
    PerLanguage(BTreeMap<String, String>),
}

impl Default for LocalizedText {
    fn default() -> Self {
        Self::PerLanguage(BTreeMap::new())
    }
}

impl LocalizedText {
    /// Variant for `language`, then English, then the empty string.
    #[must_use]
    pub fn resolve(&self, language: Language) -> &str {
        match self {
            Self::Plain(text) => text.as_str(),
            Self::PerLanguage(variants) => variant(variants, language)
                .or_else(|| variant(variants, DEFAULT_LANGUAGE))
                .unwrap_or_default(),
        }
    }

    /// Whether no language has any text.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Plain(text) => text.trim().is_empty(),
            Self::PerLanguage(variants) => variants.values().all(|text| text.trim().is_empty()),
        }
    }
}

fn variant(variants: &BTreeMap<String, String>, language: Language) -> Option<&str> {
    variants
        .get(language.code())
        .map(String::as_str)
        .filter(|text| !text.is_empty())
}

/// UI strings shipped with a content file, keyed by language then label key.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct LabelSet(BTreeMap<String, BTreeMap<String, String>>);

impl LabelSet {
    /// Label for `key` in `language`, then English, then the key itself.
    #[must_use]
    pub fn get<'a>(&'a self, language: Language, key: &'a str) -> &'a str {
        self.lookup(language, key)
            .or_else(|| self.lookup(DEFAULT_LANGUAGE, key))
            .unwrap_or(key)
    }

    fn lookup(&self, language: Language, key: &str) -> Option<&str> {
        self.0
            .get(language.code())?
            .get(key)
            .map(String::as_str)
            .filter(|text| !text.is_empty())
    }
}

/// Lifecycle of a project.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum ProjectStatus {
    /// Still being worked on.
    Ongoing,
    /// Finished.
    Completed,
    /// Any status the renderer has no dedicated styling for.
    Other(String),
}

impl From<String> for ProjectStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "ongoing" => Self::Ongoing,
            "completed" => Self::Completed,
            _ => Self::Other(value),
        }
    }
}

impl ProjectStatus {
    /// Label key and badge value.
    #[must_use]
    pub fn key(&self) -> &str {
        match self {
            Self::Ongoing => "ongoing",
            Self::Completed => "completed",
            Self::Other(value) => value.as_str(),
        }
    }
}

/// External links attached to a project.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ProjectLinks {
    /// Source repository.
    #[serde(default)]
    pub github: Option<String>,
    /// Live demo.
    #[serde(default)]
    pub demo: Option<String>,
    /// Related paper.
    #[serde(default)]
    pub paper: Option<String>,
}

/// Portfolio project entry.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Stable identifier used for DOM ids.
    pub id: String,
    /// Project name.
    pub title: LocalizedText,
    /// Short summary.
    #[serde(default)]
    pub description: LocalizedText,
    /// Role held on the project.
    #[serde(default)]
    pub role: LocalizedText,
    /// Start month (`YYYY-MM`).
    #[serde(default)]
    pub start_date: Option<String>,
    /// End month (`YYYY-MM`); absent while ongoing.
    #[serde(default)]
    pub end_date: Option<String>,
    /// Lifecycle badge.
    #[serde(default)]
    pub status: Option<ProjectStatus>,
    /// Whether the project gets the featured badge.
    #[serde(default)]
    pub featured: bool,
    /// Technology tags.
    #[serde(default)]
    pub tags: Vec<String>,
    /// External links.
    #[serde(default)]
    pub links: ProjectLinks,
    /// Card image path.
    #[serde(default)]
    pub image: Option<String>,
}

/// Review state of a publication.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum PublicationStatus {
    /// Appeared in print or online.
    Published,
    /// Accepted, not yet out.
    Accepted,
    /// Under peer review.
    UnderReview,
    /// Any status the renderer has no dedicated styling for.
    Other(String),
}

impl From<String> for PublicationStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "published" => Self::Published,
            "accepted" => Self::Accepted,
            "under-review" | "under_review" => Self::UnderReview,
            _ => Self::Other(value),
        }
    }
}

impl PublicationStatus {
    /// Label key and badge value.
    #[must_use]
    pub fn key(&self) -> &str {
        match self {
            Self::Published => "published",
            Self::Accepted => "accepted",
            Self::UnderReview => "under-review",
            Self::Other(value) => value.as_str(),
        }
    }
}

/// External links attached to a publication.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct PublicationLinks {
    /// DOI URL.
    #[serde(default)]
    pub doi: Option<String>,
    /// PDF download.
    #[serde(default)]
    pub pdf: Option<String>,
    /// Publisher landing page.
    #[serde(default)]
    pub url: Option<String>,
}

/// Publication entry.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Publication {
    /// Stable identifier used for the detail toggle.
    pub id: String,
    /// Paper title.
    pub title: LocalizedText,
    /// Author names in citation order.
    #[serde(default)]
    pub authors: Vec<String>,
    /// Journal or conference name.
    #[serde(default)]
    pub venue: LocalizedText,
    /// Publication month (`YYYY-MM`).
    #[serde(default)]
    pub date: Option<String>,
    /// Venue kind (`journal`, `conference`, ...), used for badges.
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    /// Review state.
    #[serde(default)]
    pub status: Option<PublicationStatus>,
    /// Abstract shown in the detail panel.
    #[serde(default, rename = "abstract")]
    pub summary: LocalizedText,
    /// Keywords shown in the detail panel.
    #[serde(default)]
    pub keywords: Vec<String>,
    /// External links.
    #[serde(default)]
    pub links: PublicationLinks,
}

/// Record dropped while decoding a content file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkippedRecord {
    /// Position in the record array.
    pub index: usize,
    /// The record's `id`, when it had a string one.
    pub id: Option<String>,
    /// Decoder message.
    pub reason: String,
}

impl Display for SkippedRecord {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match &self.id {
            Some(id) => write!(formatter, "record #{} (`{id}`): {}", self.index, self.reason),
            None => write!(formatter, "record #{}: {}", self.index, self.reason),
        }
    }
}

/// A content file: record array plus its UI labels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContentFile<R> {
    /// UI strings keyed by language.
    pub labels: LabelSet,
    /// Records in display order.
    pub items: Vec<R>,
    /// Records that did not match the record shape; they are not rendered.
    pub skipped: Vec<SkippedRecord>,
}

#[derive(Deserialize)]
struct RawContentFile {
    #[serde(default)]
    labels: LabelSet,
    #[serde(alias = "projects", alias = "publications")]
    items: Vec<Value>,
}

impl<R: DeserializeOwned> ContentFile<R> {
    /// Decode a content file from a JSON document.
    ///
    /// Each record decodes on its own; malformed ones land in
    /// [`ContentFile::skipped`] and the rest are kept.
    ///
    /// # Errors
    /// Returns [`ContentError::Records`] when the document has no record array
    /// or its labels are malformed.
    pub fn from_value(value: Value) -> ContentResult<Self> {
        let raw: RawContentFile =
            serde_json::from_value(value).map_err(|source| ContentError::Records { source })?;
        let mut items = Vec::with_capacity(raw.items.len());
        let mut skipped = Vec::new();
        for (index, record) in raw.items.into_iter().enumerate() {
            let id = record.get("id").and_then(Value::as_str).map(str::to_string);
            match serde_json::from_value(record) {
                Ok(item) => items.push(item),
                Err(err) => skipped.push(SkippedRecord {
                    index,
                    id,
                    reason: err.to_string(),
                }),
            }
        }
        Ok(Self {
            labels: raw.labels,
            items,
            skipped,
        })
    }
}

/// Projects file (`projects.json`).
pub type ProjectsFile = ContentFile<Project>;

/// Publications file (`publications.json`).
pub type PublicationsFile = ContentFile<Publication>;
