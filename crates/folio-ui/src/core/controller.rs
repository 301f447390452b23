//! Page controller: language state, lazy content loading and slot rendering.
//!
//! # Design
//! - One cheap `Clone` handle over shared `Rc<RefCell<_>>` state; borrows are
//!   always released before an `.await`.
//! - Every render reads a single `(language, table)` pair, so a pass never
//!   mixes languages.
//! - Content files are fetched at most once: `Idle -> Pending -> Ready | Failed`.
//!   Language switches only re-render what is already cached.

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::Rc;

use folio_content::{
    ContentFile, DEFAULT_LANGUAGE, Language, ProjectsFile, PublicationsFile, TranslationTable,
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, error, info, warn};

use crate::core::actions::PageAction;
use crate::core::config::{PageConfig, Section};
use crate::core::error::ControllerError;
use crate::core::ports::{ContentSource, Document, PreferenceStore};
use crate::render::{
    REQUIRED_KEYS, RenderContext, TITLE_KEY, render_hero, render_navbar, render_projects,
    render_publications,
};

/// Whether the page shows rendered content or the static fallback.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Hydration {
    /// Translations not loaded; the static HTML is untouched.
    Unhydrated,
    /// Content rendered for this language.
    Hydrated(Language),
}

#[derive(Debug)]
enum SourceSlot<T> {
    Idle,
    Pending,
    Ready(Rc<T>),
    Failed,
}

impl<T> SourceSlot<T> {
    fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value.as_ref()),
            Self::Idle | Self::Pending | Self::Failed => None,
        }
    }
}

#[derive(Debug)]
struct ControllerState {
    language: Language,
    hydration: Hydration,
    table: Option<Rc<TranslationTable>>,
    projects: SourceSlot<ProjectsFile>,
    publications: SourceSlot<PublicationsFile>,
    expanded: BTreeSet<String>,
}

const fn projects_slot(state: &mut ControllerState) -> &mut SourceSlot<ProjectsFile> {
    &mut state.projects
}

const fn publications_slot(state: &mut ControllerState) -> &mut SourceSlot<PublicationsFile> {
    &mut state.publications
}

/// Drives translation, rendering and language switching for one page.
pub struct PageController<S, P, D> {
    config: Rc<PageConfig>,
    source: Rc<S>,
    prefs: Rc<P>,
    document: Rc<D>,
    state: Rc<RefCell<ControllerState>>,
}

impl<S, P, D> Clone for PageController<S, P, D> {
    fn clone(&self) -> Self {
        Self {
            config: Rc::clone(&self.config),
            source: Rc::clone(&self.source),
            prefs: Rc::clone(&self.prefs),
            document: Rc::clone(&self.document),
            state: Rc::clone(&self.state),
        }
    }
}

// Futures hold `Rc` handles and only ever run on the page's event loop.
#[allow(clippy::future_not_send)]
impl<S, P, D> PageController<S, P, D>
where
    S: ContentSource,
    P: PreferenceStore,
    D: Document,
{
    /// Build a controller; the language comes from the stored preference.
    pub fn new(config: PageConfig, source: Rc<S>, prefs: Rc<P>, document: Rc<D>) -> Self {
        let language = stored_language(prefs.as_ref(), &config.storage_key);
        Self {
            config: Rc::new(config),
            source,
            prefs,
            document,
            state: Rc::new(RefCell::new(ControllerState {
                language,
                hydration: Hydration::Unhydrated,
                table: None,
                projects: SourceSlot::Idle,
                publications: SourceSlot::Idle,
                expanded: BTreeSet::new(),
            })),
        }
    }

    /// Configuration the controller was built with.
    #[must_use]
    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    /// Language read from the preference store, `en` when absent or unsupported.
    #[must_use]
    pub fn resolve_language(&self) -> Language {
        stored_language(self.prefs.as_ref(), &self.config.storage_key)
    }

    /// Language every render currently uses.
    #[must_use]
    pub fn language(&self) -> Language {
        self.state.borrow().language
    }

    /// Current hydration state.
    #[must_use]
    pub fn hydration(&self) -> Hydration {
        self.state.borrow().hydration
    }

    /// Fetch the translation table, render the page and lazily load content sections.
    ///
    /// Failures are logged and leave the page unhydrated; nothing is retried.
    pub async fn load(&self) {
        let path = self.config.asset_url(&self.config.translations_path);
        let table = match self.load_table(&path).await {
            Ok(table) => table,
            Err(err) => {
                error!(error = %err, "failed to load translations; keeping static page");
                return;
            }
        };

        for warning in table.report().warnings() {
            warn!(%warning, "translation table warning");
        }
        for warning in table.missing_required(REQUIRED_KEYS) {
            warn!(%warning, "required translation missing");
        }

        let language = {
            let mut state = self.state.borrow_mut();
            let language = usable_language(&table, state.language);
            state.language = language;
            state.hydration = Hydration::Hydrated(language);
            state.table = Some(Rc::new(table));
            language
        };
        info!(%language, "page hydrated");

        self.render_all();
        for section in Section::content() {
            if self.document.has_slot(self.config.slot(section)) {
                self.render_section(section).await;
            }
        }
    }

    /// Translation for a dotted key path, or the path itself when absent.
    #[must_use]
    pub fn translate(&self, key: &str) -> String {
        let state = self.state.borrow();
        state.table.as_ref().map_or_else(
            || key.to_string(),
            |table| table.translate(state.language, key).to_string(),
        )
    }

    /// Switch language, persist it and re-render every slot from cache.
    ///
    /// Only exact codes (`en`, `zh`) are accepted. Returns `false` (and
    /// changes nothing) for any other tag or one the loaded table lacks.
    #[must_use]
    pub fn set_language(&self, tag: &str) -> bool {
        let Some(language) = Language::from_code(tag) else {
            debug!(tag, "ignoring unknown language");
            return false;
        };
        {
            let mut state = self.state.borrow_mut();
            let supported = state
                .table
                .as_ref()
                .is_some_and(|table| table.contains(language));
            if !supported {
                debug!(tag, "ignoring language without translations");
                return false;
            }
            state.language = language;
            state.hydration = Hydration::Hydrated(language);
        }
        self.prefs.store(&self.config.storage_key, language.code());
        info!(%language, "language switched");
        self.render_all();
        true
    }

    /// Render one section into its slot, fetching its content file on first use.
    pub async fn render_section(&self, section: Section) {
        if !self.document.has_slot(self.config.slot(section)) {
            debug!(section = section.name(), "slot absent; nothing to render");
            return;
        }
        if self.state.borrow().table.is_none() {
            warn!(
                section = section.name(),
                "section skipped; translations not loaded"
            );
            return;
        }
        let ready = match section {
            Section::Navbar | Section::Hero => true,
            Section::Projects => self.ensure_content(section, projects_slot).await,
            Section::Publications => self.ensure_content(section, publications_slot).await,
        };
        if ready {
            self.write_slot(section);
        }
    }

    /// Synchronously re-render every slot, the title, `<html lang>` and
    /// translated attributes. Never fetches.
    pub fn render_all(&self) {
        let Some((table, language)) = self.current() else {
            debug!("render skipped; translations not loaded");
            return;
        };
        for section in Section::all() {
            self.write_slot(section);
        }
        self.document.set_title(table.translate(language, TITLE_KEY));
        self.document.set_lang(language.code());
        self.hydrate_attributes();
    }

    /// Replace the text (or placeholder) of every element carrying the
    /// translate attribute.
    pub fn hydrate_attributes(&self) {
        let Some((table, language)) = self.current() else {
            return;
        };
        self.document
            .translate_elements(&self.config.translate_attribute, &|key| {
                table.translate(language, key).to_string()
            });
    }

    /// Flip one publication's detail panel; returns whether it is now expanded.
    #[must_use]
    pub fn toggle_publication(&self, id: &str) -> bool {
        let expanded = {
            let mut state = self.state.borrow_mut();
            if state.expanded.remove(id) {
                false
            } else {
                state.expanded.insert(id.to_string());
                true
            }
        };
        debug!(publication = id, expanded, "publication details toggled");
        self.write_slot(Section::Publications);
        expanded
    }

    /// Run a user action; returns whether the page changed.
    #[must_use]
    pub fn dispatch(&self, action: &PageAction) -> bool {
        match action {
            PageAction::SetLanguage(tag) => self.set_language(tag),
            PageAction::TogglePublication(id) => {
                let _ = self.toggle_publication(id);
                true
            }
        }
    }

    async fn load_table(&self, path: &str) -> Result<TranslationTable, ControllerError> {
        let value = self.fetch(path).await?;
        TranslationTable::from_value(&value).map_err(|source| ControllerError::Parse {
            path: path.to_string(),
            source,
        })
    }

    async fn fetch(&self, path: &str) -> Result<Value, ControllerError> {
        self.source
            .fetch_json(path)
            .await
            .map_err(|source| ControllerError::Fetch {
                path: path.to_string(),
                source,
            })
    }

    async fn ensure_content<R: DeserializeOwned>(
        &self,
        section: Section,
        slot: fn(&mut ControllerState) -> &mut SourceSlot<ContentFile<R>>,
    ) -> bool {
        let Some(path) = self.config.data_path(section) else {
            return false;
        };
        {
            let mut state = self.state.borrow_mut();
            let entry = slot(&mut state);
            match *entry {
                SourceSlot::Ready(_) => {
                    debug!(section = section.name(), "content cache hit");
                    return true;
                }
                SourceSlot::Pending => {
                    debug!(section = section.name(), "content fetch already in flight");
                    return false;
                }
                SourceSlot::Failed => {
                    warn!(
                        section = section.name(),
                        "section skipped; content failed to load earlier"
                    );
                    return false;
                }
                SourceSlot::Idle => *entry = SourceSlot::Pending,
            }
        }

        let url = self.config.asset_url(path);
        let loaded = self.fetch(&url).await.and_then(|value| {
            ContentFile::<R>::from_value(value).map_err(|source| ControllerError::Parse {
                path: url.clone(),
                source,
            })
        });
        let next = loaded.map_or_else(
            |err| {
                error!(error = %err, section = section.name(), "failed to load section content");
                SourceSlot::Failed
            },
            |file| {
                for skipped in &file.skipped {
                    warn!(section = section.name(), %skipped, "record skipped");
                }
                debug!(
                    section = section.name(),
                    records = file.items.len(),
                    "content loaded"
                );
                SourceSlot::Ready(Rc::new(file))
            },
        );
        let ready = matches!(next, SourceSlot::Ready(_));
        *slot(&mut self.state.borrow_mut()) = next;
        ready
    }

    fn current(&self) -> Option<(Rc<TranslationTable>, Language)> {
        let state = self.state.borrow();
        state
            .table
            .as_ref()
            .map(|table| (Rc::clone(table), state.language))
    }

    fn markup(&self, section: Section) -> Option<String> {
        let state = self.state.borrow();
        let table = state.table.as_deref()?;
        let ctx = RenderContext::new(state.language, table);
        match section {
            Section::Navbar => Some(render_navbar(&ctx)),
            Section::Hero => Some(render_hero(&ctx)),
            Section::Projects => state
                .projects
                .ready()
                .map(|file| render_projects(&ctx, file)),
            Section::Publications => state
                .publications
                .ready()
                .map(|file| render_publications(&ctx, file, &state.expanded)),
        }
    }

    fn write_slot(&self, section: Section) {
        let slot = self.config.slot(section);
        if !self.document.has_slot(slot) {
            return;
        }
        if let Some(html) = self.markup(section) {
            self.document.replace_slot(slot, &html);
        }
    }
}

fn stored_language<P: PreferenceStore + ?Sized>(prefs: &P, key: &str) -> Language {
    prefs
        .load(key)
        .and_then(|tag| Language::from_tag(&tag))
        .unwrap_or(DEFAULT_LANGUAGE)
}

fn usable_language(table: &TranslationTable, preferred: Language) -> Language {
    if table.contains(preferred) {
        preferred
    } else if table.contains(DEFAULT_LANGUAGE) {
        DEFAULT_LANGUAGE
    } else {
        table.languages().next().unwrap_or(preferred)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::memory::MemoryStore;
    use serde_json::json;

    #[test]
    fn stored_preference_is_normalised() {
        assert_eq!(stored_language(&MemoryStore::default(), "language"), Language::En);
        assert_eq!(
            stored_language(&MemoryStore::with("language", "zh-CN"), "language"),
            Language::Zh
        );
        assert_eq!(
            stored_language(&MemoryStore::with("language", "fr"), "language"),
            Language::En
        );
    }

    #[test]
    fn preferred_language_falls_back_to_a_loaded_catalog()
    -> Result<(), folio_content::ContentError> {
        let english = TranslationTable::from_value(&json!({ "en": { "a": "A" } }))?;
        assert_eq!(usable_language(&english, Language::Zh), Language::En);

        let chinese = TranslationTable::from_value(&json!({ "zh": { "a": "甲" } }))?;
        assert_eq!(usable_language(&chinese, Language::En), Language::Zh);
        assert_eq!(usable_language(&chinese, Language::Zh), Language::Zh);
        Ok(())
    }

    #[test]
    fn only_ready_slots_expose_content() {
        let ready = SourceSlot::Ready(Rc::new(7));
        assert_eq!(ready.ready(), Some(&7));
        assert_eq!(SourceSlot::<i32>::Pending.ready(), None);
        assert_eq!(SourceSlot::<i32>::Failed.ready(), None);
        assert_eq!(SourceSlot::<i32>::Idle.ready(), None);
    }
}
