//! Publications section with collapsible detail panels.

use std::collections::BTreeSet;

use folio_content::{Publication, PublicationsFile, format_month};
use maud::{Markup, html};

use crate::core::actions::PageAction;
use crate::render::RenderContext;
use crate::render::html::{action_button, badge, badge_class, external_link};

/// Render the publications section; ids in `expanded` show their details.
#[must_use]
pub fn render_publications(
    ctx: &RenderContext<'_>,
    file: &PublicationsFile,
    expanded: &BTreeSet<String>,
) -> String {
    let labels = &file.labels;
    html! {
        section class="publications-section py-5" {
            div class="container" {
                h2 class="mb-4" { (labels.get(ctx.language, "title")) }
                @if file.items.is_empty() {
                    p class="text-muted" { (labels.get(ctx.language, "empty")) }
                } @else {
                    div class="publication-list" {
                        @for publication in &file.items {
                            (publication_entry(
                                ctx,
                                file,
                                publication,
                                expanded.contains(&publication.id),
                            ))
                        }
                    }
                }
            }
        }
    }
    .into_string()
}

fn publication_entry(
    ctx: &RenderContext<'_>,
    file: &PublicationsFile,
    publication: &Publication,
    expanded: bool,
) -> Markup {
    let language = ctx.language;
    let labels = &file.labels;
    let venue = publication.venue.resolve(language);
    let date = publication
        .date
        .as_deref()
        .map(|date| format_month(date, language));
    let summary = publication.summary.resolve(language);
    let links: Vec<_> = [
        (publication.links.doi.as_deref(), "doi"),
        (publication.links.pdf.as_deref(), "pdf"),
        (publication.links.url.as_deref(), "url"),
    ]
    .into_iter()
    .filter_map(|(href, key)| href.map(|href| (href, key)))
    .collect();
    let details_class = if expanded {
        "publication-details mt-3"
    } else {
        "publication-details mt-3 d-none"
    };

    html! {
        div class="card mb-3 shadow-sm publication-item" id=(format!("pub-{}", publication.id)) {
            div class="card-body" {
                h5 class="card-title" { (publication.title.resolve(language)) }
                @if !publication.authors.is_empty() {
                    p class="card-text mb-1" { (authors(ctx, &publication.authors)) }
                }
                @if !venue.is_empty() || date.is_some() {
                    p class="card-text text-muted mb-2" {
                        @if !venue.is_empty() {
                            em { (venue) }
                        }
                        @if let Some(date) = &date {
                            @if !venue.is_empty() {
                                ", "
                            }
                            (date)
                        }
                    }
                }
                div class="mb-2" {
                    @if let Some(kind) = publication.kind.as_deref() {
                        (badge(badge_class(kind), labels.get(language, kind)))
                    }
                    @if let Some(status) = &publication.status {
                        (badge(badge_class(status.key()), labels.get(language, status.key())))
                    }
                }
                div class="publication-links" {
                    @for (href, key) in &links {
                        (external_link(
                            href,
                            "btn btn-sm btn-outline-primary me-2",
                            labels.get(language, key),
                        ))
                    }
                    (action_button(
                        &PageAction::TogglePublication(publication.id.clone()),
                        "btn btn-sm btn-outline-secondary",
                        labels.get(language, if expanded { "hideDetails" } else { "showDetails" }),
                    ))
                }
                div class=(details_class) id=(format!("pub-details-{}", publication.id)) {
                    @if !summary.is_empty() {
                        h6 { (labels.get(language, "abstract")) }
                        p class="small" { (summary) }
                    }
                    @if !publication.keywords.is_empty() {
                        p class="small mb-0" {
                            strong { (labels.get(language, "keywords")) ":" }
                            " "
                            @for keyword in &publication.keywords {
                                (badge("bg-light text-dark", keyword))
                            }
                        }
                    }
                }
            }
        }
    }
}

fn authors(ctx: &RenderContext<'_>, authors: &[String]) -> Markup {
    let highlight = ctx.table.site().highlight_author.as_deref();
    html! {
        @for (index, author) in authors.iter().enumerate() {
            @if index > 0 {
                ", "
            }
            @if Some(author.as_str()) == highlight {
                strong { (author) }
            } @else {
                (author)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_content::{ContentResult, Language, TranslationTable};
    use folio_test_support::fixtures;

    fn inputs() -> ContentResult<(TranslationTable, PublicationsFile)> {
        Ok((
            TranslationTable::from_value(&fixtures::translations())?,
            PublicationsFile::from_value(fixtures::publications())?,
        ))
    }

    #[test]
    fn highlighted_author_is_emphasised() -> ContentResult<()> {
        let (table, file) = inputs()?;
        let html = render_publications(
            &RenderContext::new(Language::En, &table),
            &file,
            &BTreeSet::new(),
        );
        assert!(html.contains("L. F. Menabrea, <strong>A. Lovelace</strong>"));
        Ok(())
    }

    #[test]
    fn venue_date_and_badges_follow_language() -> ContentResult<()> {
        let (table, file) = inputs()?;
        let html = render_publications(
            &RenderContext::new(Language::Zh, &table),
            &file,
            &BTreeSet::new(),
        );
        assert!(html.contains("<em>科学回忆录</em>, 2023年05月"));
        assert!(html.contains(r#"<span class="badge bg-info text-dark me-1">期刊</span>"#));
        assert!(html.contains(r#"<span class="badge bg-warning text-dark me-1">审稿中</span>"#));
        assert!(html.contains("<em>arXiv</em>, 2024年01月"));
        assert!(html.contains("Poetical Science"));
        Ok(())
    }

    #[test]
    fn details_are_collapsed_unless_expanded() -> ContentResult<()> {
        let (table, file) = inputs()?;
        let ctx = RenderContext::new(Language::En, &table);

        let collapsed = render_publications(&ctx, &file, &BTreeSet::new());
        assert!(collapsed.contains(r#"class="publication-details mt-3 d-none" id="pub-details-sketch""#));
        assert!(collapsed.contains(
            r#"data-action="toggle-publication" data-value="sketch">Show details</button>"#
        ));

        let expanded = BTreeSet::from(["sketch".to_string()]);
        let open = render_publications(&ctx, &file, &expanded);
        assert!(open.contains(r#"class="publication-details mt-3" id="pub-details-sketch""#));
        assert!(open.contains(r#"data-value="sketch">Hide details</button>"#));
        assert!(open.contains(
            r#"class="publication-details mt-3 d-none" id="pub-details-poetical-science""#
        ));
        Ok(())
    }

    #[test]
    fn details_hold_abstract_and_keywords() -> ContentResult<()> {
        let (table, file) = inputs()?;
        let html = render_publications(
            &RenderContext::new(Language::Zh, &table),
            &file,
            &BTreeSet::new(),
        );
        assert!(html.contains("<h6>摘要</h6><p class=\"small\">描述分析机及计算伯努利数的方法。</p>"));
        assert!(html.contains("<strong>关键词:</strong> "));
        assert!(html.contains("Imagination as a scientific faculty."));
        assert!(html.contains(r#"href="https://doi.org/10.0000/sketch""#));
        Ok(())
    }

    #[test]
    fn empty_list_shows_the_empty_label() -> ContentResult<()> {
        let (table, _) = inputs()?;
        let file = PublicationsFile::from_value(serde_json::json!({ "publications": [] }))?;
        let html = render_publications(
            &RenderContext::new(Language::En, &table),
            &file,
            &BTreeSet::new(),
        );
        assert!(html.contains(r#"<p class="text-muted">empty</p>"#));
        Ok(())
    }
}
