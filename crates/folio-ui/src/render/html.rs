//! Shared markup fragments: badges, action buttons and external links.

use maud::{Markup, html};

use crate::core::actions::PageAction;

/// `<span class="badge ...">` with the given caption.
#[must_use]
pub fn badge(class: &str, caption: &str) -> Markup {
    html! {
        span class=(format!("badge {class} me-1")) { (caption) }
    }
}

/// Badge colour for a status or venue kind.
#[must_use]
pub fn badge_class(value: &str) -> &'static str {
    match value {
        "ongoing" | "published" => "bg-success",
        "accepted" | "conference" => "bg-primary",
        "under-review" => "bg-warning text-dark",
        "journal" => "bg-info text-dark",
        _ => "bg-secondary",
    }
}

/// Button that dispatches `action` through the delegated click listener.
#[must_use]
pub fn action_button(action: &PageAction, class: &str, caption: &str) -> Markup {
    let (name, value) = action.data_attributes();
    html! {
        button type="button" class=(class) data-action=(name) data-value=(value) { (caption) }
    }
}

/// External link opening in a new tab.
#[must_use]
pub fn external_link(href: &str, class: &str, caption: &str) -> Markup {
    html! {
        a href=(href) class=(class) target="_blank" rel="noopener" { (caption) }
    }
}
