//! Shared test utilities for the docsite test suite.
//!
//! Every sample value is carved out of [`SAMPLE_SITE_TOML`], so unit tests in
//! different modules agree on the same site (git-sumi's documentation site).
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tags = head::compose(&sample_metadata(), &sample_overrides());
//! assert_eq!(find_meta(&tags, "og:title").attr("content"), Some("git-sumi"));
//!
//! let config = full_assembler().assemble().unwrap();
//! assert_eq!(config.theme_config.navbar.right.len(), 1);
//! ```

use std::fs;
use std::path::Path;

use crate::assemble::Assembler;
use crate::components::home::Hero;
use crate::config::{CONFIG_FILE, SiteSource};
use crate::features::FeatureList;
use crate::generate::Site;
use crate::head::{HeadTagEntry, TagName};
use crate::metadata::SiteMetadata;
use crate::nav::{NavItemSpec, NavbarSpec, Position};
use crate::theme::ThemeDescriptor;

// =========================================================================
// Sample site
// =========================================================================

pub const SAMPLE_SITE_TOML: &str = r##"
[site]
title = "git-sumi"
tagline = "The non-opinionated Rust-based commit message linter."
url = "https://sumi.rs"
base_url = "/"
organization = "welpo"
project = "git-sumi"
favicon_path = "img/logo.png"
deployment_branch = "gh-pages"

[site.social_image]
path = "/img/social-card.jpg"
width = 1792
height = 1024

[head]
tags = [
    { tag_name = "meta", attributes = { "http-equiv" = "X-UA-Compatible", content = "IE=edge" } },
    { tag_name = "meta", attributes = { "http-equiv" = "content-type", content = "text/html; charset=utf-8" } },
    { tag_name = "meta", attributes = { name = "viewport", content = "width=device-width, initial-scale=1.0" } },
    { tag_name = "meta", attributes = { name = "color-scheme", content = "light dark" } },
    { tag_name = "meta", attributes = { name = "theme-color", media = "(prefers-color-scheme: light)", content = "#73304F" } },
    { tag_name = "meta", attributes = { name = "theme-color", media = "(prefers-color-scheme: dark)", content = "#272731" } },
    { tag_name = "link", attributes = { rel = "apple-touch-icon", href = "/img/logo.png" } },
    { tag_name = "link", attributes = { rel = "icon", href = "/img/logo.png" } },
]

[navbar]
title = "git-sumi"
logo = { alt = "git-sumi logo: a lantern held on a bamboo stick over the sea", src = "img/logo.png" }

[[navbar.items]]
sidebar_id = "tutorialSidebar"
label = "Documentation"
position = "left"

[[navbar.items]]
href = "https://github.com/welpo/git-sumi"
aria_label = "GitHub"
class_name = "header-github-link"
position = "right"

[theme]
default_mode = "light"
allow_switch = true
respect_system_preference = true
accent_light = "#73304F"
accent_dark = "#272731"

[theme.prism]
light_palette = "oneLight"
dark_palette = "oceanicNext"
additional_languages = ["toml", "bash"]

[docs]
sidebar_path = "./sidebars.js"
edit_url = "https://github.com/welpo/git-sumi/tree/main/website/"
custom_css = "./src/css/custom.css"

[footer]
style = "dark"
copyright = "Copyright © git-sumi"

[[scripts]]
src = "https://stats.sumi.rs/count.js"
async = true
attributes = { "data-goatcounter" = "https://stats.sumi.rs/count" }

[hero]
title = { base = "git-", accent = "sumi" }
logo = { light = "img/logo.png", dark = "img/logo-dark.png", alt = "git-sumi logo", class = "hero__logo" }
call_to_action = { label = "Get started", href = "/docs" }

[[features]]
title = "Simple setup and integration"
image = "img/wizard.png"
description = [
    { text = "Enable your rules using a simple configuration file, and " },
    { link = { href = "/docs/integration", children = [{ text = "integrate " }, { wordmark = { base = "git-", accent = "sumi" } }, { text = " into your existing workflow" }] } },
    { text = "." },
]

[[features]]
title = "Adaptable"
image = "img/chameleon.png"
description = [
    { wordmark = { base = "git-", accent = "sumi" } },
    { text = " follows the " },
    { link = { href = "/docs/rules", children = [{ text = "rules" }] } },
    { text = " of each project you work on. Use a personal config as a fallback to enforce your own rules." },
]

[[features]]
title = "Non-opinionated"
image = "img/sculptor.png"
description = "By default, git-sumi has no rules enabled. Start from scratch or draw inspiration from the examples."
"##;

pub fn sample_source() -> SiteSource {
    toml::from_str(SAMPLE_SITE_TOML).unwrap()
}

pub fn sample_metadata() -> SiteMetadata {
    sample_source().site.unwrap()
}

pub fn sample_overrides() -> Vec<HeadTagEntry> {
    sample_source().head.unwrap().tags
}

/// Two items: the docs sidebar on the left, GitHub on the right.
pub fn sample_navbar() -> NavbarSpec {
    sample_source().navbar.unwrap()
}

pub fn sample_theme() -> ThemeDescriptor {
    sample_source().theme.unwrap()
}

pub fn sample_features() -> FeatureList {
    sample_source().features
}

pub fn sample_hero() -> Hero {
    sample_source().hero.unwrap()
}

/// An assembler with every component of the sample site set.
pub fn full_assembler() -> Assembler {
    sample_source().assembler()
}

pub fn sample_site() -> Site {
    Site::from_source(&sample_source()).unwrap()
}

// =========================================================================
// Navbar specs
// =========================================================================

pub fn external_spec(label: &str, href: &str, position: Position) -> NavItemSpec {
    NavItemSpec {
        label: Some(label.to_string()),
        href: Some(href.to_string()),
        position,
        ..Default::default()
    }
}

pub fn sidebar_spec(label: &str, sidebar_id: &str) -> NavItemSpec {
    NavItemSpec {
        label: Some(label.to_string()),
        sidebar_id: Some(sidebar_id.to_string()),
        ..Default::default()
    }
}

// =========================================================================
// Head tag lookups: panics with a clear message on miss
// =========================================================================

/// Key of a meta tag: its `property`, else its `name`.
fn meta_key(tag: &HeadTagEntry) -> Option<&str> {
    if tag.tag_name != TagName::Meta {
        return None;
    }
    tag.attr("property").or_else(|| tag.attr("name"))
}

/// Find the first meta tag keyed `key`. Panics if not found.
pub fn find_meta<'a>(tags: &'a [HeadTagEntry], key: &str) -> &'a HeadTagEntry {
    tags.iter()
        .find(|t| meta_key(t) == Some(key))
        .unwrap_or_else(|| panic!("meta '{key}' not found. Available: {:?}", head_keys(tags)))
}

/// Meta keys in sequence order; link tags are skipped.
pub fn head_keys(tags: &[HeadTagEntry]) -> Vec<&str> {
    tags.iter().filter_map(meta_key).collect()
}

// =========================================================================
// Filesystem fixtures
// =========================================================================

pub fn write_site(dir: &Path, content: &str) {
    fs::create_dir_all(dir).unwrap();
    fs::write(dir.join(CONFIG_FILE), content).unwrap();
}

/// Write a solid-color image; the format follows the extension.
pub fn write_image(path: &Path, width: u32, height: u32) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    image::RgbImage::from_pixel(width, height, image::Rgb([115, 48, 79]))
        .save(path)
        .unwrap();
}
