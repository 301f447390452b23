//! In-memory port implementations used by the preview command and tests.

use std::cell::RefCell;
use std::collections::BTreeMap;

use async_trait::async_trait;
use serde_json::Value;

use crate::core::error::SourceError;
use crate::core::ports::{ContentSource, Document, PreferenceStore, TextTarget};

/// Preference store backed by a map.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<BTreeMap<String, String>>,
}

impl MemoryStore {
    /// Store seeded with a single entry.
    #[must_use]
    pub fn with(key: &str, value: &str) -> Self {
        let store = Self::default();
        store.store(key, value);
        store
    }

    /// Current value for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Option<String> {
        self.get(key)
    }

    fn store(&self, key: &str, value: &str) {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }
}

/// Content source serving pre-registered documents and recording every request.
#[derive(Debug, Default)]
pub struct StaticSource {
    documents: BTreeMap<String, Value>,
    requests: RefCell<Vec<String>>,
}

impl StaticSource {
    /// Register a document under `path`.
    #[must_use]
    pub fn with_document(mut self, path: impl Into<String>, document: Value) -> Self {
        self.documents.insert(path.into(), document);
        self
    }

    /// Every requested path in order.
    #[must_use]
    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }

    /// How many times `path` was requested.
    #[must_use]
    pub fn request_count(&self, path: &str) -> usize {
        self.requests
            .borrow()
            .iter()
            .filter(|requested| requested.as_str() == path)
            .count()
    }
}

#[async_trait(?Send)]
impl ContentSource for StaticSource {
    async fn fetch_json(&self, path: &str) -> Result<Value, SourceError> {
        self.requests.borrow_mut().push(path.to_string());
        self.documents
            .get(path)
            .cloned()
            .ok_or_else(|| SourceError::Missing {
                path: path.to_string(),
            })
    }
}

/// Element carrying attributes, text and an optional placeholder.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryElement {
    /// Upper-case tag name, as the DOM reports it.
    pub tag: String,
    /// Attributes by name.
    pub attributes: BTreeMap<String, String>,
    /// Text content.
    pub text: String,
}

impl MemoryElement {
    /// Element with the given tag name.
    #[must_use]
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_uppercase(),
            ..Self::default()
        }
    }

    /// Add an attribute.
    #[must_use]
    pub fn with_attribute(mut self, name: &str, value: &str) -> Self {
        self.attributes.insert(name.to_string(), value.to_string());
        self
    }

    /// Set the initial text content.
    #[must_use]
    pub fn with_text(mut self, text: &str) -> Self {
        self.text = text.to_string();
        self
    }

    /// Attribute value by name.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }
}

/// Full observable state of a [`MemoryDocument`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemorySnapshot {
    /// Slot markup by identifier.
    pub slots: BTreeMap<String, String>,
    /// Elements in document order.
    pub elements: Vec<MemoryElement>,
    /// Document title.
    pub title: String,
    /// Root `lang` attribute.
    pub lang: Option<String>,
}

/// Document model with named slots and a flat element list.
#[derive(Debug, Default)]
pub struct MemoryDocument {
    state: RefCell<MemorySnapshot>,
}

impl MemoryDocument {
    /// Document with the given (empty) slots.
    #[must_use]
    pub fn with_slots<'a>(ids: impl IntoIterator<Item = &'a str>) -> Self {
        let document = Self::default();
        {
            let mut state = document.state.borrow_mut();
            for id in ids {
                state.slots.insert(id.to_string(), String::new());
            }
        }
        document
    }

    /// Append an element.
    pub fn push_element(&self, element: MemoryElement) {
        self.state.borrow_mut().elements.push(element);
    }

    /// Copy of the current state.
    #[must_use]
    pub fn snapshot(&self) -> MemorySnapshot {
        self.state.borrow().clone()
    }

    /// Slot identifiers and markup in lexical order.
    #[must_use]
    pub fn slots(&self) -> Vec<(String, String)> {
        self.state
            .borrow()
            .slots
            .iter()
            .map(|(id, html)| (id.clone(), html.clone()))
            .collect()
    }
}

impl Document for MemoryDocument {
    fn has_slot(&self, id: &str) -> bool {
        self.state.borrow().slots.contains_key(id)
    }

    fn replace_slot(&self, id: &str, html: &str) -> bool {
        let mut state = self.state.borrow_mut();
        let Some(slot) = state.slots.get_mut(id) else {
            return false;
        };
        html.clone_into(slot);
        true
    }

    fn slot_html(&self, id: &str) -> Option<String> {
        self.state.borrow().slots.get(id).cloned()
    }

    fn set_title(&self, title: &str) {
        title.clone_into(&mut self.state.borrow_mut().title);
    }

    fn set_lang(&self, code: &str) {
        self.state.borrow_mut().lang = Some(code.to_string());
    }

    fn translate_elements(&self, attribute: &str, resolve: &dyn Fn(&str) -> String) {
        let mut state = self.state.borrow_mut();
        for element in &mut state.elements {
            let Some(key) = element.attribute(attribute).map(ToString::to_string) else {
                continue;
            };
            let text = resolve(&key);
            match TextTarget::for_tag(&element.tag) {
                TextTarget::Placeholder => {
                    element.attributes.insert("placeholder".to_string(), text);
                }
                TextTarget::Text => element.text = text,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn store_round_trips_values() {
        let store = MemoryStore::with("language", "zh");
        assert_eq!(store.load("language").as_deref(), Some("zh"));
        store.store("language", "en");
        assert_eq!(store.get("language").as_deref(), Some("en"));
        assert_eq!(store.load("theme"), None);
    }

    #[tokio::test]
    async fn static_source_counts_requests() {
        let source = StaticSource::default().with_document("a.json", json!({ "ok": true }));
        assert!(source.fetch_json("a.json").await.is_ok());
        assert!(matches!(
            source.fetch_json("b.json").await,
            Err(SourceError::Missing { .. })
        ));
        assert_eq!(source.request_count("a.json"), 1);
        assert_eq!(source.requests(), vec!["a.json", "b.json"]);
    }

    #[test]
    fn missing_slots_are_not_created() {
        let document = MemoryDocument::with_slots(["hero"]);
        assert!(document.replace_slot("hero", "<p>hi</p>"));
        assert!(!document.replace_slot("navbar", "<nav></nav>"));
        assert_eq!(document.slot_html("hero").as_deref(), Some("<p>hi</p>"));
        assert!(!document.has_slot("navbar"));
    }

    #[test]
    fn translation_respects_element_kind() {
        let document = MemoryDocument::default();
        document.push_element(MemoryElement::new("h2").with_attribute("data-i18n", "about.heading"));
        document.push_element(
            MemoryElement::new("input").with_attribute("data-i18n", "contact.namePlaceholder"),
        );
        document.push_element(MemoryElement::new("p").with_text("untouched"));

        document.translate_elements("data-i18n", &|key| format!("<{key}>"));

        let elements = document.snapshot().elements;
        assert_eq!(elements[0].text, "<about.heading>");
        assert_eq!(
            elements[1].attribute("placeholder"),
            Some("<contact.namePlaceholder>")
        );
        assert!(elements[1].text.is_empty());
        assert_eq!(elements[2].text, "untouched");
    }
}
