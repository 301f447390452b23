//! Navigation bar with page links and language buttons.

use folio_content::Language;
use maud::html;

use crate::core::actions::PageAction;
use crate::render::RenderContext;
use crate::render::html::action_button;

const PAGES: [(&str, &str); 5] = [
    ("index.html", "navbar.home"),
    ("about.html", "navbar.about"),
    ("projects.html", "navbar.projects"),
    ("publications.html", "navbar.publications"),
    ("contact.html", "navbar.contact"),
];

/// Render the navbar; one switch button per language the table carries.
#[must_use]
pub fn render_navbar(ctx: &RenderContext<'_>) -> String {
    let languages = Language::all()
        .into_iter()
        .filter(|language| ctx.table.contains(*language));
    html! {
        nav class="navbar navbar-expand-lg navbar-dark bg-dark" {
            div class="container-fluid" {
                a class="navbar-brand fw-bold" href="index.html" { (ctx.t("navbar.brand")) }
                button class="navbar-toggler" type="button" data-bs-toggle="collapse"
                    data-bs-target="#navbarNav" aria-controls="navbarNav"
                    aria-expanded="false" aria-label="Toggle navigation" {
                    span class="navbar-toggler-icon" {}
                }
                div class="collapse navbar-collapse" id="navbarNav" {
                    ul class="navbar-nav mx-auto" {
                        @for (href, key) in PAGES {
                            li class="nav-item" {
                                a class="nav-link" href=(href) { (ctx.t(key)) }
                            }
                        }
                    }
                    div class="d-flex gap-2" {
                        @for language in languages {
                            (action_button(
                                &PageAction::SetLanguage(language.code().to_string()),
                                if language == ctx.language {
                                    "btn btn-sm btn-light"
                                } else {
                                    "btn btn-sm btn-outline-light"
                                },
                                language.label(),
                            ))
                        }
                    }
                }
            }
        }
    }
    .into_string()
}
