//! DOM access through `web-sys`.

use gloo::console;
use gloo::utils::document;
use wasm_bindgen::JsCast;
use web_sys::Element;

use crate::core::ports::{Document, TextTarget};

/// The live page document.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserDocument;

impl Document for BrowserDocument {
    fn has_slot(&self, id: &str) -> bool {
        document().get_element_by_id(id).is_some()
    }

    fn replace_slot(&self, id: &str, html: &str) -> bool {
        let Some(slot) = document().get_element_by_id(id) else {
            return false;
        };
        slot.set_inner_html(html);
        true
    }

    fn slot_html(&self, id: &str) -> Option<String> {
        document()
            .get_element_by_id(id)
            .map(|slot| slot.inner_html())
    }

    fn set_title(&self, title: &str) {
        document().set_title(title);
    }

    fn set_lang(&self, code: &str) {
        let Some(root) = document().document_element() else {
            return;
        };
        if let Err(err) = root.set_attribute("lang", code) {
            console::error!("failed to set document language", code, err);
        }
    }

    fn translate_elements(&self, attribute: &str, resolve: &dyn Fn(&str) -> String) {
        let selector = format!("[{attribute}]");
        let nodes = match document().query_selector_all(&selector) {
            Ok(nodes) => nodes,
            Err(err) => {
                console::error!("invalid translation selector", selector, err);
                return;
            }
        };
        for index in 0..nodes.length() {
            let Some(element) = nodes
                .item(index)
                .and_then(|node| node.dyn_into::<Element>().ok())
            else {
                continue;
            };
            let Some(key) = element.get_attribute(attribute) else {
                continue;
            };
            let text = resolve(&key);
            match TextTarget::for_tag(&element.tag_name()) {
                TextTarget::Placeholder => {
                    if let Err(err) = element.set_attribute("placeholder", &text) {
                        console::error!("failed to set placeholder", key, err);
                    }
                }
                TextTarget::Text => element.set_text_content(Some(&text)),
            }
        }
    }
}
