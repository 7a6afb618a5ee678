//! Home page: navbar, hero header, feature grid, footer.
//!
//! The document head is written from the assembled config: the composed head
//! tags in order, the stylesheet, the color-mode script, then the external
//! scripts. The `<html>` element carries the initial color mode as
//! `data-theme`, which is what the accent CSS keys off.
//!
//! When switching is allowed the page ships `static/color-mode.js` inline
//! together with a navbar toggle button. At load it picks the mode the same
//! way [`AmbientTheme::mount`](crate::ambient::AmbientTheme::mount) does
//! (stored choice, then system preference if respected, then the default),
//! and it rewrites `data-theme` and theme-aware image sources on every
//! change. With switching disabled neither is emitted and the page stays in
//! the default mode.

use crate::ambient::ThemeReader;
use crate::assemble::{ColorModeSettings, SiteConfig};
use crate::components::features::render_features;
use crate::components::themed_image::ThemeAwareImage;
use crate::features::{AssetRef, FeatureList};
use crate::head::{render_head_tags, render_scripts};
use crate::metadata::base_path;
use crate::nav::{FooterStyle, NavbarItem, NavbarModel};
use maud::{DOCTYPE, Markup, PreEscaped, html};
use serde::Deserialize;

const COLOR_MODE_JS: &str = include_str!("../../static/color-mode.js");

/// Header block of the home page, from the `[hero]` table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Hero {
    pub title: HeroTitle,
    #[serde(default)]
    pub logo: Option<ThemeAwareImage>,
    #[serde(default)]
    pub call_to_action: Option<CallToAction>,
}

/// Title split into a plain part and an accented part, e.g. `git-` + `sumi`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HeroTitle {
    pub base: String,
    pub accent: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CallToAction {
    pub label: String,
    pub href: String,
}

fn render_nav_item(item: &NavbarItem, base: &str) -> Markup {
    match item {
        NavbarItem::DocSidebarLink {
            sidebar_id, label, ..
        } => html! {
            a.navbar__link href={ (base) "docs/" } data-sidebar-id=(sidebar_id) {
                (label.as_deref().unwrap_or(sidebar_id))
            }
        },
        NavbarItem::ExternalLink {
            href,
            label,
            aria_label,
            class_name,
            ..
        } => {
            let class = match class_name {
                Some(extra) => format!("navbar__link {extra}"),
                None => "navbar__link".to_string(),
            };
            html! {
                a class=(class) href=(href) aria-label=[aria_label.as_deref()]
                    target="_blank" rel="noopener noreferrer" {
                    @if let Some(label) = label {
                        (label)
                    }
                }
            }
        }
    }
}

/// `switchable` adds the color-mode toggle after the right-hand items.
pub fn render_navbar(navbar: &NavbarModel, base: &str, switchable: bool) -> Markup {
    html! {
        nav.navbar {
            div.navbar__items {
                a.navbar__brand href=(base) {
                    @if let Some(logo) = &navbar.logo {
                        img.navbar__logo src=(AssetRef::new(logo.src.as_str()).href(base)) alt=(logo.alt);
                    }
                    @if let Some(title) = &navbar.title {
                        b.navbar__title { (title) }
                    }
                }
                @for item in &navbar.left {
                    (render_nav_item(item, base))
                }
            }
            div.navbar__items."navbar__items--right" {
                @for item in &navbar.right {
                    (render_nav_item(item, base))
                }
                @if switchable {
                    button.navbar__toggle type="button" data-color-mode-toggle
                        aria-label="Switch between dark and light mode" {}
                }
            }
        }
    }
}

fn render_hero(hero: &Hero, tagline: &str, theme: &ThemeReader, base: &str) -> Markup {
    html! {
        header.hero."hero--primary" {
            div.container {
                @if let Some(logo) = &hero.logo {
                    (logo.render(theme, base))
                }
                h1.hero__title {
                    span.wordmark {
                        span { (hero.title.base) }
                        span.wordmark__accent { (hero.title.accent) }
                    }
                }
                p.hero__subtitle { (tagline) }
                @if let Some(cta) = &hero.call_to_action {
                    div.buttons {
                        a.button."button--secondary"."button--lg" href=(cta.href) { (cta.label) }
                    }
                }
            }
        }
    }
}

fn render_footer(config: &SiteConfig) -> Markup {
    let footer = &config.theme_config.footer;
    let style = match footer.style {
        FooterStyle::Dark => "footer footer--dark",
        FooterStyle::Light => "footer footer--light",
    };
    html! {
        footer class=(style) {
            @if let Some(copyright) = &footer.copyright {
                div.footer__copyright { (copyright) }
            }
        }
    }
}

/// Inline color-mode script, or nothing when switching is disabled.
pub fn render_color_mode_script(settings: &ColorModeSettings) -> Markup {
    html! {
        @if !settings.disable_switch {
            script data-default-mode=(settings.default_mode.as_str())
                data-respect-system=(if settings.respect_prefers_color_scheme { "true" } else { "false" }) {
                (PreEscaped(COLOR_MODE_JS))
            }
        }
    }
}

/// Full HTML document around `content`, in the given ambient mode.
pub fn base_document(config: &SiteConfig, theme: &ThemeReader, content: Markup) -> Markup {
    let base = base_path(&config.base_url);
    let page_title = format!("{} | {}", config.tagline, config.title);
    let color_mode = &config.theme_config.color_mode;
    html! {
        (DOCTYPE)
        html lang=(config.i18n.default_locale) data-theme=(theme.get().as_str()) {
            head {
                meta charset="UTF-8";
                title { (page_title) }
                (render_head_tags(&config.head_tags))
                link rel="stylesheet" href={ (base) "theme.css" };
                (render_color_mode_script(color_mode))
                (render_scripts(&config.scripts))
            }
            body {
                (render_navbar(&config.theme_config.navbar, &base, !color_mode.disable_switch))
                (content)
                (render_footer(config))
            }
        }
    }
}

pub fn render_home_page(
    config: &SiteConfig,
    hero: Option<&Hero>,
    features: &FeatureList,
    theme: &ThemeReader,
) -> Markup {
    let base = base_path(&config.base_url);
    let content = html! {
        @if let Some(hero) = hero {
            (render_hero(hero, &config.tagline, theme, &base))
        }
        main {
            @if !features.is_empty() {
                (render_features(features, &base))
            }
        }
    };
    base_document(config, theme, content)
}
