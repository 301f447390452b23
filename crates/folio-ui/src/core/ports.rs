//! Seams between the page controller and the browser.
//!
//! # Design
//! - The controller only talks to these traits, so it runs natively in tests
//!   and in the preview command.
//! - Everything is single-threaded: futures are `?Send` and methods take `&self`
//!   because DOM handles are shared, not owned.

use async_trait::async_trait;
use serde_json::Value;

use crate::core::error::SourceError;

/// Persistent key/value storage for the language preference.
pub trait PreferenceStore {
    /// Read a stored value.
    fn load(&self, key: &str) -> Option<String>;
    /// Persist a value; failures are logged by the implementation.
    fn store(&self, key: &str, value: &str);
}

/// Asynchronous JSON resource loader.
#[async_trait(?Send)]
pub trait ContentSource {
    /// Fetch and decode the JSON document at `path`.
    async fn fetch_json(&self, path: &str) -> Result<Value, SourceError>;
}

/// The DOM operations the controller needs.
pub trait Document {
    /// Whether a slot with this identifier exists on the page.
    fn has_slot(&self, id: &str) -> bool;
    /// Replace a slot's markup; returns `false` when the slot is absent.
    fn replace_slot(&self, id: &str, html: &str) -> bool;
    /// Current markup of a slot.
    fn slot_html(&self, id: &str) -> Option<String>;
    /// Set `document.title`.
    fn set_title(&self, title: &str);
    /// Set the `lang` attribute of the root element.
    fn set_lang(&self, code: &str);
    /// Rewrite every element carrying `attribute` with `resolve(key)`.
    fn translate_elements(&self, attribute: &str, resolve: &dyn Fn(&str) -> String);
}

/// Where a translated string lands on an element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextTarget {
    /// `placeholder` attribute (form fields).
    Placeholder,
    /// Text content.
    Text,
}

impl TextTarget {
    /// Target for an element tag name (case-insensitive).
    #[must_use]
    pub fn for_tag(tag: &str) -> Self {
        if tag.eq_ignore_ascii_case("input") || tag.eq_ignore_ascii_case("textarea") {
            Self::Placeholder
        } else {
            Self::Text
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_fields_receive_placeholders() {
        assert_eq!(TextTarget::for_tag("INPUT"), TextTarget::Placeholder);
        assert_eq!(TextTarget::for_tag("textarea"), TextTarget::Placeholder);
        assert_eq!(TextTarget::for_tag("SPAN"), TextTarget::Text);
        assert_eq!(TextTarget::for_tag("select"), TextTarget::Text);
    }
}
