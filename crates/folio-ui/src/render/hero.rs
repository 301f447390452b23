//! Hero section: profile card plus name, title, bio and social links.

use maud::{Markup, html};

use crate::render::RenderContext;

const DEFAULT_PHOTO: &str = "assets/images/profile/photo.jpg";

/// Render the hero section.
#[must_use]
pub fn render_hero(ctx: &RenderContext<'_>) -> String {
    let site = ctx.table.site();
    let photo = site.photo.as_deref().unwrap_or(DEFAULT_PHOTO);
    let email = ctx.t("profile.emailValue");
    let phone = ctx.t("profile.phoneValue");
    let dial: String = phone.chars().filter(|ch| !ch.is_whitespace()).collect();

    let profile: [(&str, Markup); 5] = [
        (
            ctx.t("profile.nationality"),
            html! { (ctx.t("profile.nationalityValue")) },
        ),
        (ctx.t("profile.age"), html! { (ctx.t("profile.ageValue")) }),
        (
            ctx.t("profile.email"),
            html! {
                a href=(format!("mailto:{email}")) class="text-decoration-none" { (email) }
            },
        ),
        (
            ctx.t("profile.phone"),
            html! {
                a href=(format!("tel:{dial}")) class="text-decoration-none" { (phone) }
            },
        ),
        (
            ctx.t("profile.location"),
            html! { (ctx.t("profile.locationValue")) },
        ),
    ];

    html! {
        section class="hero-section py-5" {
            div class="container" {
                div class="row align-items-stretch g-4" {
                    div class="col-lg-3" {
                        div class="card border-0 shadow profile-card" {
                            img src=(photo) alt=(ctx.t("hero.name")) class="card-img-top";
                            div class="card-body text-center" {
                                @for (index, (label, value)) in profile.into_iter().enumerate() {
                                    @if index > 0 {
                                        hr class="my-2";
                                    }
                                    div class="info-item" {
                                        span class="info-label" { (label) }
                                        p class="info-value" { (value) }
                                    }
                                }
                            }
                        }
                    }
                    div class="col-lg-9" {
                        div class="bio-content" {
                            h1 class="hero-name" { (ctx.t("hero.name")) }
                            p class="hero-title text-muted mb-4" { (ctx.t("hero.title")) }
                            p class="hero-bio lead" { (ctx.t("hero.bio")) }
                            @if !site.social.is_empty() {
                                div class="social-links mb-4" {
                                    @for link in &site.social {
                                        a href=(link.url) class="btn btn-outline-dark btn-sm mx-2"
                                            title=(link.label) target="_blank" rel="noopener" {
                                            @if let Some(icon) = &link.icon {
                                                i class=(icon) {}
                                                " "
                                            }
                                            (link.label)
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
    .into_string()
}
