//! Browser entry point: binds the controller to the live page.
//!
//! # Design
//! - One delegated click listener decodes `data-action` / `data-value` and
//!   hands the action to the controller's dispatcher.
//! - The exported `setLanguage` / `togglePublication` hooks route through the
//!   same dispatcher for static shells that still use inline handlers.

use std::cell::RefCell;
use std::rc::Rc;

use folio_telemetry::{DEFAULT_LOG_LEVEL, init_browser_logging};
use gloo::console;
use gloo::events::EventListener;
use gloo::utils::document;
use tracing::warn;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen_futures::spawn_local;
use web_sys::{DocumentReadyState, Element};

use crate::core::actions::{ACTION_ATTRIBUTE, PageAction, VALUE_ATTRIBUTE};
use crate::core::config::PageConfig;
use crate::core::controller::PageController;
use crate::services::dom::BrowserDocument;
use crate::services::fetch::HttpSource;
use crate::services::storage::LocalPreferenceStore;

/// Element holding an optional JSON [`PageConfig`].
pub const CONFIG_ELEMENT_ID: &str = "folio-config";

type BrowserController = PageController<HttpSource, LocalPreferenceStore, BrowserDocument>;

thread_local! {
    static CONTROLLER: RefCell<Option<BrowserController>> = const { RefCell::new(None) };
}

/// Install logging, build the controller and hydrate once the DOM is parsed.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Err(err) = init_browser_logging(DEFAULT_LOG_LEVEL) {
        console::error!("failed to install logging", err.to_string());
    }

    let controller = PageController::new(
        read_config(),
        Rc::new(HttpSource),
        Rc::new(LocalPreferenceStore),
        Rc::new(BrowserDocument),
    );
    CONTROLLER.with(|slot| *slot.borrow_mut() = Some(controller.clone()));
    install_click_dispatch(controller.clone());

    let hydrate = move || spawn_local(async move { controller.load().await });
    if document().ready_state() == DocumentReadyState::Loading {
        EventListener::once(&document(), "DOMContentLoaded", move |_| hydrate()).forget();
    } else {
        hydrate();
    }
}

/// Switch the page language; `false` when the tag is unsupported or the
/// page is not hydrated yet.
#[wasm_bindgen(js_name = setLanguage)]
#[must_use]
pub fn set_language(tag: &str) -> bool {
    dispatch(&PageAction::SetLanguage(tag.to_string()))
}

/// Expand or collapse a publication's detail panel.
#[wasm_bindgen(js_name = togglePublication)]
#[must_use]
pub fn toggle_publication(id: &str) -> bool {
    dispatch(&PageAction::TogglePublication(id.to_string()))
}

fn dispatch(action: &PageAction) -> bool {
    let controller = CONTROLLER.with(|slot| slot.borrow().clone());
    controller.is_some_and(|controller| controller.dispatch(action))
}

fn read_config() -> PageConfig {
    let Some(element) = document().get_element_by_id(CONFIG_ELEMENT_ID) else {
        return PageConfig::default();
    };
    let raw = element.text_content().unwrap_or_default();
    PageConfig::from_json(&raw).unwrap_or_else(|err| {
        warn!(error = %err, "invalid page config; using defaults");
        PageConfig::default()
    })
}

fn install_click_dispatch(controller: BrowserController) {
    let selector = format!("[{ACTION_ATTRIBUTE}]");
    EventListener::new(&document(), "click", move |event| {
        let Some(target) = event
            .target()
            .and_then(|target| target.dyn_into::<Element>().ok())
        else {
            return;
        };
        let Ok(Some(element)) = target.closest(&selector) else {
            return;
        };
        let name = element.get_attribute(ACTION_ATTRIBUTE).unwrap_or_default();
        let value = element.get_attribute(VALUE_ATTRIBUTE).unwrap_or_default();
        if let Some(action) = PageAction::from_data(&name, &value) {
            event.prevent_default();
            let _ = controller.dispatch(&action);
        }
    })
    .forget();
}
