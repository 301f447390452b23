//! Offline preview: hydrate a site checkout from disk without a browser.

use std::path::{Path, PathBuf};
use std::rc::Rc;

use async_trait::async_trait;
use folio_content::Language;
use serde_json::Value;
use tokio::fs;

use crate::core::config::{PageConfig, Section};
use crate::core::controller::{Hydration, PageController};
use crate::core::error::SourceError;
use crate::core::memory::{MemoryDocument, MemoryStore};
use crate::core::ports::ContentSource;

/// Content source reading JSON files below a site root.
#[derive(Clone, Debug)]
pub struct FsSource {
    root: PathBuf,
}

impl FsSource {
    /// Source rooted at `root`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Site root.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }
}

#[async_trait(?Send)]
impl ContentSource for FsSource {
    async fn fetch_json(&self, path: &str) -> Result<Value, SourceError> {
        let file = self.root.join(path.trim_start_matches('/'));
        let raw = fs::read_to_string(&file)
            .await
            .map_err(|source| SourceError::Io {
                path: path.to_string(),
                source,
            })?;
        serde_json::from_str(&raw).map_err(|source| SourceError::Decode {
            path: path.to_string(),
            source,
        })
    }
}

/// Inputs for one preview run.
#[derive(Clone, Debug, Default)]
pub struct PreviewOptions {
    /// Directory the asset paths are resolved against.
    pub root: PathBuf,
    /// Language preference to start from (`en`, `zh`).
    pub language: Option<String>,
    /// Page configuration.
    pub config: PageConfig,
}

/// What the page looks like after hydration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreviewOutput {
    /// Language the page was rendered in.
    pub language: Language,
    /// Whether the translations loaded.
    pub hydration: Hydration,
    /// Document title.
    pub title: String,
    /// `(slot id, markup)` in render order.
    pub slots: Vec<(String, String)>,
}

/// Run the controller against files under `options.root` with an in-memory
/// page holding every slot.
#[allow(clippy::future_not_send)]
pub async fn render_preview(options: PreviewOptions) -> PreviewOutput {
    let PreviewOptions {
        root,
        language,
        config,
    } = options;

    let slot_ids: Vec<String> = Section::all()
        .into_iter()
        .map(|section| config.slot(section).to_string())
        .collect();
    let document = Rc::new(MemoryDocument::with_slots(
        slot_ids.iter().map(String::as_str),
    ));
    let prefs = Rc::new(
        language
            .as_deref()
            .map_or_else(MemoryStore::default, |tag| {
                MemoryStore::with(&config.storage_key, tag)
            }),
    );

    let controller = PageController::new(
        config,
        Rc::new(FsSource::new(root)),
        prefs,
        Rc::clone(&document),
    );
    controller.load().await;

    let snapshot = document.snapshot();
    let slots = slot_ids
        .into_iter()
        .map(|id| {
            let html = snapshot.slots.get(&id).cloned().unwrap_or_default();
            (id, html)
        })
        .collect();
    PreviewOutput {
        language: controller.language(),
        hydration: controller.hydration(),
        title: snapshot.title,
        slots,
    }
}
