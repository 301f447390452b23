#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]
//! Typed content model for the Folio portfolio site.
//!
//! Layout: `language.rs` (supported tags), `table.rs` (translation catalogs),
//! `records.rs` (projects, publications, labels), `dates.rs` (month formatting).

pub mod dates;
pub mod error;
pub mod language;
pub mod records;
pub mod table;

pub use dates::{YearMonth, format_month};
pub use error::{ContentError, ContentResult};
pub use language::{DEFAULT_LANGUAGE, Language};
pub use records::{
    ContentFile, LabelSet, LocalizedText, Project, ProjectLinks, ProjectStatus, ProjectsFile,
    Publication, PublicationLinks, PublicationStatus, PublicationsFile, SkippedRecord,
};
pub use table::{
    Catalog, SITE_SECTION, SiteProfile, SocialLink, TableReport, TableWarning, TranslationTable,
};
