//! Projects section: one card per project record.

use folio_content::{Project, ProjectsFile, format_month};
use maud::{Markup, html};

use crate::render::RenderContext;
use crate::render::html::{badge, badge_class, external_link};

/// Render the projects section from a decoded projects file.
#[must_use]
pub fn render_projects(ctx: &RenderContext<'_>, file: &ProjectsFile) -> String {
    let labels = &file.labels;
    html! {
        section class="projects-section py-5" {
            div class="container" {
                h2 class="mb-4" { (labels.get(ctx.language, "title")) }
                @if file.items.is_empty() {
                    p class="text-muted" { (labels.get(ctx.language, "empty")) }
                } @else {
                    div class="row g-4" {
                        @for project in &file.items {
                            (project_card(ctx, file, project))
                        }
                    }
                }
            }
        }
    }
    .into_string()
}

fn project_card(ctx: &RenderContext<'_>, file: &ProjectsFile, project: &Project) -> Markup {
    let language = ctx.language;
    let labels = &file.labels;
    let title = project.title.resolve(language);
    let role = project.role.resolve(language);
    let description = project.description.resolve(language);
    let links: Vec<_> = [
        (project.links.github.as_deref(), "btn btn-sm btn-dark me-2", "viewCode"),
        (project.links.demo.as_deref(), "btn btn-sm btn-primary me-2", "liveDemo"),
        (project.links.paper.as_deref(), "btn btn-sm btn-outline-secondary me-2", "paper"),
    ]
    .into_iter()
    .filter_map(|(href, class, key)| href.map(|href| (href, class, key)))
    .collect();

    html! {
        div class="col-md-6 col-lg-4" {
            div class="card h-100 shadow-sm" id=(format!("project-{}", project.id)) {
                @if let Some(image) = &project.image {
                    img src=(image) class="card-img-top" alt=(title);
                }
                div class="card-body" {
                    h5 class="card-title" { (title) }
                    div class="mb-2" {
                        @if let Some(status) = &project.status {
                            (badge(badge_class(status.key()), labels.get(language, status.key())))
                        }
                        @if project.featured {
                            (badge("bg-warning text-dark", labels.get(language, "featured")))
                        }
                    }
                    @if let Some(range) = date_range(ctx, file, project) {
                        p class="text-muted small mb-2" { (range) }
                    }
                    @if !role.is_empty() {
                        p class="small mb-2" {
                            strong { (labels.get(language, "role")) ":" }
                            " "
                            (role)
                        }
                    }
                    @if !description.is_empty() {
                        p class="card-text" { (description) }
                    }
                    @if !project.tags.is_empty() {
                        div class="mb-3" {
                            @for tag in &project.tags {
                                (badge("bg-light text-dark", tag))
                            }
                        }
                    }
                    @if !links.is_empty() {
                        div class="project-links" {
                            @for (href, class, key) in &links {
                                (external_link(href, class, labels.get(language, key)))
                            }
                        }
                    }
                }
            }
        }
    }
}

fn date_range(ctx: &RenderContext<'_>, file: &ProjectsFile, project: &Project) -> Option<String> {
    let start = project.start_date.as_deref()?;
    let end = project.end_date.as_deref().map_or_else(
        || file.labels.get(ctx.language, "present").to_string(),
        |end| format_month(end, ctx.language),
    );
    Some(format!("{} – {end}", format_month(start, ctx.language)))
}
