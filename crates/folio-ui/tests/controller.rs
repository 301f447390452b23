#![cfg(not(target_arch = "wasm32"))]

use std::cell::RefCell;
use std::rc::Rc;

use async_trait::async_trait;
use folio_content::Language;
use folio_test_support::fixtures::{self, PROJECTS_PATH, PUBLICATIONS_PATH, TRANSLATIONS_PATH};
use folio_ui::core::memory::{MemoryDocument, MemoryElement, MemoryStore, StaticSource};
use folio_ui::core::ports::{ContentSource, Document};
use folio_ui::{Hydration, PageAction, PageConfig, PageController, Section, SourceError};
use serde_json::{Value, json};
use tokio::sync::oneshot;

type Controller = PageController<StaticSource, MemoryStore, MemoryDocument>;

const SLOTS: [&str; 4] = [
    "navbar-container",
    "hero-container",
    "projects-container",
    "publications-container",
];

struct Page {
    controller: Controller,
    source: Rc<StaticSource>,
    store: Rc<MemoryStore>,
    document: Rc<MemoryDocument>,
}

fn site() -> StaticSource {
    StaticSource::default()
        .with_document(TRANSLATIONS_PATH, fixtures::translations())
        .with_document(PROJECTS_PATH, fixtures::projects())
        .with_document(PUBLICATIONS_PATH, fixtures::publications())
}

fn full_document() -> MemoryDocument {
    let document = MemoryDocument::with_slots(SLOTS);
    document.push_element(MemoryElement::new("h2").with_attribute("data-i18n", "about.heading"));
    document.push_element(
        MemoryElement::new("input").with_attribute("data-i18n", "contact.namePlaceholder"),
    );
    document
}

fn page_with(source: StaticSource, store: MemoryStore, document: MemoryDocument) -> Page {
    let source = Rc::new(source);
    let store = Rc::new(store);
    let document = Rc::new(document);
    let controller = PageController::new(
        PageConfig::default(),
        Rc::clone(&source),
        Rc::clone(&store),
        Rc::clone(&document),
    );
    Page {
        controller,
        source,
        store,
        document,
    }
}

fn page() -> Page {
    page_with(site(), MemoryStore::default(), full_document())
}

fn slot(page: &Page, id: &str) -> String {
    page.document.slot_html(id).unwrap_or_default()
}

#[tokio::test]
async fn translate_uses_the_table_once_loaded() {
    let page = page();
    assert_eq!(page.controller.translate("navbar.home"), "navbar.home");

    page.controller.load().await;
    assert_eq!(page.controller.translate("navbar.home"), "Home");
    assert_eq!(page.controller.translate("hero.name"), "Ada Lovelace");
    assert_eq!(page.controller.translate("navbar.missing"), "navbar.missing");
    assert_eq!(page.controller.translate("navbar"), "navbar");
}

#[tokio::test]
async fn load_hydrates_every_slot_and_attribute() {
    let page = page();
    assert_eq!(page.controller.hydration(), Hydration::Unhydrated);

    page.controller.load().await;
    assert_eq!(page.controller.hydration(), Hydration::Hydrated(Language::En));

    let snapshot = page.document.snapshot();
    assert_eq!(snapshot.title, "Ada Lovelace");
    assert_eq!(snapshot.lang.as_deref(), Some("en"));
    assert_eq!(snapshot.elements[0].text, "About me");
    assert_eq!(snapshot.elements[1].attribute("placeholder"), Some("Your name"));

    assert!(slot(&page, "navbar-container").contains(">Home</a>"));
    assert!(slot(&page, "hero-container").contains("Analyst &amp; Metaphysician"));
    assert!(slot(&page, "projects-container").contains("Analytical Engine Notes"));
    assert!(slot(&page, "projects-container").contains("May 2023 – Present"));
    assert!(slot(&page, "publications-container").contains("Sketch of the Analytical Engine"));
}

#[tokio::test]
async fn stored_preference_selects_the_initial_language() {
    let page = page_with(site(), MemoryStore::with("language", "zh"), full_document());
    assert_eq!(page.controller.resolve_language(), Language::Zh);

    page.controller.load().await;
    assert_eq!(page.controller.hydration(), Hydration::Hydrated(Language::Zh));
    assert_eq!(page.document.snapshot().lang.as_deref(), Some("zh"));
    assert!(slot(&page, "projects-container").contains("2023年05月"));
    assert!(slot(&page, "navbar-container").contains(">首页</a>"));
}

#[tokio::test]
async fn switching_back_restores_the_same_page() {
    let page = page();
    page.controller.load().await;
    let english = page.document.snapshot();

    assert!(page.controller.set_language("zh"));
    let chinese = page.document.snapshot();
    assert_ne!(english, chinese);
    assert_eq!(chinese.title, "艾达·洛芙莱斯");
    assert_eq!(chinese.elements[1].attribute("placeholder"), Some("您的姓名"));

    assert!(page.controller.set_language("en"));
    assert_eq!(page.document.snapshot(), english);
}

#[tokio::test]
async fn unsupported_language_changes_nothing() {
    let page = page();
    page.controller.load().await;
    let before = page.document.snapshot();

    for tag in ["fr", "", "zh-CN", "EN", "en_GB", " zh"] {
        assert!(!page.controller.set_language(tag), "{tag}");
    }
    assert_eq!(page.controller.language(), Language::En);
    assert_eq!(page.document.snapshot(), before);
    assert_eq!(page.store.get("language"), None);
}

#[tokio::test]
async fn language_without_catalog_is_ignored() {
    let source = StaticSource::default().with_document(
        TRANSLATIONS_PATH,
        json!({ "en": { "navbar": { "home": "Home" } } }),
    );
    let page = page_with(source, MemoryStore::default(), full_document());
    page.controller.load().await;

    assert!(!page.controller.set_language("zh"));
    assert_eq!(page.controller.hydration(), Hydration::Hydrated(Language::En));
}

#[tokio::test]
async fn switching_language_persists_without_refetching() {
    let page = page();
    page.controller.load().await;

    assert!(page.controller.set_language("zh"));
    assert!(page.controller.set_language("en"));
    assert!(page.controller.set_language("zh"));

    assert_eq!(page.store.get("language").as_deref(), Some("zh"));
    for path in [TRANSLATIONS_PATH, PROJECTS_PATH, PUBLICATIONS_PATH] {
        assert_eq!(page.source.request_count(path), 1, "{path}");
    }
}

#[tokio::test]
async fn failed_translation_fetch_leaves_the_page_unhydrated() {
    let source = StaticSource::default().with_document(PROJECTS_PATH, fixtures::projects());
    let page = page_with(source, MemoryStore::with("language", "zh"), full_document());
    let before = page.document.snapshot();

    page.controller.load().await;
    assert_eq!(page.controller.hydration(), Hydration::Unhydrated);
    assert_eq!(page.document.snapshot(), before);
    assert!(!page.controller.set_language("en"));
    assert_eq!(page.controller.translate("navbar.home"), "navbar.home");
    assert_eq!(page.source.request_count(PROJECTS_PATH), 0);
}

#[tokio::test]
async fn malformed_translation_table_leaves_the_page_unhydrated() {
    let source = StaticSource::default().with_document(TRANSLATIONS_PATH, json!(["en", "zh"]));
    let page = page_with(source, MemoryStore::default(), full_document());

    page.controller.load().await;
    assert_eq!(page.controller.hydration(), Hydration::Unhydrated);
    assert!(page.document.snapshot().title.is_empty());
}

#[tokio::test]
async fn failed_content_fetch_skips_only_that_section() {
    let source = StaticSource::default()
        .with_document(TRANSLATIONS_PATH, fixtures::translations())
        .with_document(PUBLICATIONS_PATH, fixtures::publications());
    let page = page_with(source, MemoryStore::default(), full_document());

    page.controller.load().await;
    assert_eq!(page.controller.hydration(), Hydration::Hydrated(Language::En));
    assert!(slot(&page, "projects-container").is_empty());
    assert!(!slot(&page, "publications-container").is_empty());

    page.controller.render_section(Section::Projects).await;
    assert_eq!(page.source.request_count(PROJECTS_PATH), 1);
}

#[tokio::test]
async fn records_fall_back_to_english_fields() {
    let page = page_with(site(), MemoryStore::with("language", "zh"), full_document());
    page.controller.load().await;

    let projects = slot(&page, "projects-container");
    assert!(projects.contains("分析机笔记"));
    assert!(projects.contains("Jacquard Loom Study"));
    let publications = slot(&page, "publications-container");
    assert!(publications.contains("Poetical Science"));
    assert!(publications.contains("审稿中"));
}

#[tokio::test]
async fn publication_toggle_survives_language_switch() {
    let page = page();
    page.controller.load().await;

    let action = PageAction::from_data("toggle-publication", "sketch");
    assert_eq!(
        action,
        Some(PageAction::TogglePublication("sketch".to_string()))
    );
    assert!(action.is_some_and(|action| page.controller.dispatch(&action)));
    let expanded = r#"class="publication-details mt-3" id="pub-details-sketch""#;
    assert!(slot(&page, "publications-container").contains(expanded));

    assert!(page.controller.dispatch(&PageAction::SetLanguage("zh".to_string())));
    let publications = slot(&page, "publications-container");
    assert!(publications.contains(expanded));
    assert!(publications.contains(">隐藏详情</button>"));

    assert!(!page.controller.toggle_publication("sketch"));
    assert!(!slot(&page, "publications-container").contains(expanded));
}

#[tokio::test]
async fn absent_slots_are_never_fetched_or_rendered() {
    let document = MemoryDocument::with_slots(["navbar-container"]);
    let page = page_with(site(), MemoryStore::default(), document);

    page.controller.load().await;
    assert!(slot(&page, "navbar-container").contains(">Home</a>"));
    assert_eq!(page.source.request_count(PROJECTS_PATH), 0);
    assert_eq!(page.source.request_count(PUBLICATIONS_PATH), 0);

    page.controller.render_section(Section::Projects).await;
    assert_eq!(page.source.requests(), vec![TRANSLATIONS_PATH.to_string()]);
}

#[tokio::test]
async fn clones_share_one_page_state() {
    let page = page();
    let handle = page.controller.clone();
    page.controller.load().await;

    assert!(handle.set_language("zh"));
    assert_eq!(page.controller.language(), Language::Zh);
    assert_eq!(page.controller.translate("navbar.home"), "首页");
}

#[tokio::test]
async fn malformed_site_profile_still_hydrates() {
    let mut translations = fixtures::translations();
    translations["site"] = json!({ "social": "github" });
    let source = StaticSource::default().with_document(TRANSLATIONS_PATH, translations);
    let page = page_with(source, MemoryStore::default(), full_document());

    page.controller.load().await;
    assert_eq!(page.controller.hydration(), Hydration::Hydrated(Language::En));
    let hero = slot(&page, "hero-container");
    assert!(hero.contains("assets/images/profile/photo.jpg"));
    assert!(!hero.contains("social-links"));
    assert!(slot(&page, "navbar-container").contains(">Home</a>"));
}

#[tokio::test]
async fn malformed_record_drops_only_itself() {
    let mut projects = fixtures::projects();
    if let Some(records) = projects.get_mut("projects").and_then(Value::as_array_mut) {
        records.push(json!({ "title": { "en": "No id" } }));
    }
    let source = StaticSource::default()
        .with_document(TRANSLATIONS_PATH, fixtures::translations())
        .with_document(PROJECTS_PATH, projects);
    let page = page_with(source, MemoryStore::default(), full_document());

    page.controller.load().await;
    let projects = slot(&page, "projects-container");
    assert!(projects.contains("Analytical Engine Notes"));
    assert!(projects.contains(r#"id="project-bernoulli""#));
    assert!(!projects.contains("No id"));
}

/// Serves the static site but holds one path's response until released.
struct GatedSource {
    inner: StaticSource,
    gated_path: &'static str,
    gate: RefCell<Option<oneshot::Receiver<()>>>,
}

#[async_trait(?Send)]
impl ContentSource for GatedSource {
    async fn fetch_json(&self, path: &str) -> Result<Value, SourceError> {
        let response = self.inner.fetch_json(path).await;
        if path == self.gated_path {
            let gate = self.gate.borrow_mut().take();
            if let Some(gate) = gate {
                let _ = gate.await;
            }
        }
        response
    }
}

#[tokio::test]
async fn switch_during_pending_fetch_renders_in_the_new_language() {
    let (release, gate) = oneshot::channel();
    let source = Rc::new(GatedSource {
        inner: site(),
        gated_path: PROJECTS_PATH,
        gate: RefCell::new(Some(gate)),
    });
    let document = Rc::new(full_document());
    let controller = PageController::new(
        PageConfig::default(),
        Rc::clone(&source),
        Rc::new(MemoryStore::default()),
        Rc::clone(&document),
    );
    let projects_slot = || document.slot_html("projects-container").unwrap_or_default();

    let switch = async {
        while source.inner.request_count(PROJECTS_PATH) == 0 {
            tokio::task::yield_now().await;
        }
        assert!(controller.set_language("zh"));
        assert!(slot_contains(&document, "navbar-container", ">首页</a>"));
        assert!(projects_slot().is_empty());

        controller.render_section(Section::Projects).await;
        assert_eq!(source.inner.request_count(PROJECTS_PATH), 1);
        assert!(projects_slot().is_empty());

        let _ = release.send(());
    };
    tokio::join!(controller.load(), switch);

    assert_eq!(controller.hydration(), Hydration::Hydrated(Language::Zh));
    assert_eq!(source.inner.request_count(PROJECTS_PATH), 1);
    let projects = projects_slot();
    assert!(projects.contains("分析机笔记"));
    assert!(projects.contains("2023年05月 – 至今"));
    assert!(slot_contains(&document, "publications-container", "审稿中"));
}

fn slot_contains(document: &MemoryDocument, id: &str, needle: &str) -> bool {
    document.slot_html(id).is_some_and(|html| html.contains(needle))
}
