//! Site source loading.
//!
//! Reads `docsite.toml` from the site directory, layers any overlay files on
//! top, and deserializes the result into a [`SiteSource`]. The source is the
//! raw material for the [assembler](crate::assemble): it holds the four
//! descriptor components as `Option`s so that a missing table is reported
//! as an incomplete configuration rather than a parse error.
//!
//! ## Layering
//!
//! ```text
//! site/docsite.toml          ← base
//! --overlay staging.toml     ← overrides base
//! --overlay local.toml       ← overrides staging
//! ```
//!
//! Tables merge key by key; scalars and arrays in a later layer replace the
//! earlier value outright (so an overlay that sets `head.tags` replaces the
//! whole list, keeping its order intact).
//!
//! ## Sections
//!
//! | Table          | Required | Holds                                         |
//! |----------------|----------|-----------------------------------------------|
//! | `[site]`       | yes      | [`SiteMetadata`]                              |
//! | `[head]`       | yes      | static head-tag overrides                     |
//! | `[navbar]`     | yes      | [`NavbarSpec`]                                |
//! | `[theme]`      | yes      | [`ThemeDescriptor`]                           |
//! | `[i18n]`       | no       | locales                                       |
//! | `[links]`      | no       | broken-link policies                          |
//! | `[docs]`       | no       | sidebar file, edit URL, custom CSS            |
//! | `[footer]`     | no       | footer style and copyright                    |
//! | `[[scripts]]`  | no       | external scripts                              |
//! | `[hero]`       | no       | home page header                              |
//! | `[[features]]` | no       | home page feature list                        |
//!
//! Unknown keys are rejected to catch typos early.

use crate::assemble::Assembler;
use crate::components::home::Hero;
use crate::features::FeatureList;
use crate::head::{HeadTagEntry, ScriptEntry};
use crate::metadata::SiteMetadata;
use crate::nav::{Footer, NavbarSpec};
use crate::theme::ThemeDescriptor;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const CONFIG_FILE: &str = "docsite.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Everything declared in the site file, before assembly.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteSource {
    pub site: Option<SiteMetadata>,
    pub head: Option<HeadSpec>,
    pub navbar: Option<NavbarSpec>,
    pub theme: Option<ThemeDescriptor>,
    pub i18n: I18n,
    pub links: LinkPolicies,
    pub docs: DocsConfig,
    pub footer: Footer,
    pub scripts: Vec<ScriptEntry>,
    pub hero: Option<Hero>,
    pub features: FeatureList,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HeadSpec {
    /// Appended after the metadata-derived tags, in this order.
    pub tags: Vec<HeadTagEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct I18n {
    #[serde(rename(serialize = "defaultLocale"))]
    pub default_locale: String,
    pub locales: Vec<String>,
}

impl Default for I18n {
    fn default() -> Self {
        Self {
            default_locale: "en".to_string(),
            locales: vec!["en".to_string()],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkPolicy {
    Throw,
    Warn,
    Ignore,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LinkPolicies {
    pub on_broken_links: LinkPolicy,
    pub on_broken_markdown_links: LinkPolicy,
}

impl Default for LinkPolicies {
    fn default() -> Self {
        Self {
            on_broken_links: LinkPolicy::Throw,
            on_broken_markdown_links: LinkPolicy::Warn,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DocsConfig {
    pub sidebar_path: String,
    /// Base URL for "edit this page" links; omitted to hide them.
    pub edit_url: Option<String>,
    pub custom_css: Option<String>,
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            sidebar_path: "./sidebars.js".to_string(),
            edit_url: None,
            custom_css: None,
        }
    }
}

impl SiteSource {
    /// Check cross-field constraints that serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.i18n.locales.is_empty() {
            return Err(ConfigError::Validation(
                "i18n.locales must not be empty".into(),
            ));
        }
        if !self.i18n.locales.contains(&self.i18n.default_locale) {
            return Err(ConfigError::Validation(format!(
                "i18n.default_locale '{}' must be listed in i18n.locales",
                self.i18n.default_locale
            )));
        }
        if self.docs.sidebar_path.trim().is_empty() {
            return Err(ConfigError::Validation(
                "docs.sidebar_path must not be empty".into(),
            ));
        }
        if let Some(script) = self.scripts.iter().find(|s| s.src.trim().is_empty()) {
            return Err(ConfigError::Validation(format!(
                "script src must not be empty (attributes: {:?})",
                script.attributes
            )));
        }
        Ok(())
    }

    /// Hand the declared components to a fresh assembler.
    pub fn assembler(&self) -> Assembler {
        let mut assembler = Assembler::new()
            .i18n(self.i18n.clone())
            .links(self.links)
            .docs(self.docs.clone())
            .footer(self.footer.clone())
            .scripts(self.scripts.clone());
        if let Some(site) = &self.site {
            assembler = assembler.metadata(site.clone());
        }
        if let Some(head) = &self.head {
            assembler = assembler.head_overrides(head.tags.clone());
        }
        if let Some(navbar) = &self.navbar {
            assembler = assembler.navigation(navbar.clone());
        }
        if let Some(theme) = &self.theme {
            assembler = assembler.theme(theme.clone());
        }
        assembler
    }
}

// =============================================================================
// Loading and merging
// =============================================================================

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Read a TOML file as a raw value. `Ok(None)` if the file does not exist.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge overlays onto `base` in order, then deserialize and validate.
pub fn resolve_source(
    base: toml::Value,
    overlays: impl IntoIterator<Item = toml::Value>,
) -> Result<SiteSource, ConfigError> {
    let merged = overlays.into_iter().fold(base, merge_toml);
    let source: SiteSource = merged.try_into()?;
    source.validate()?;
    Ok(source)
}

/// Load `docsite.toml` from `site_dir` and apply `overlays` on top.
///
/// A missing base file yields an empty source (and therefore an incomplete
/// configuration at assembly time). A missing overlay is an error: it was
/// named explicitly.
pub fn load_source(site_dir: &Path, overlays: &[PathBuf]) -> Result<SiteSource, ConfigError> {
    let base = load_raw_config(&site_dir.join(CONFIG_FILE))?
        .unwrap_or_else(|| toml::Value::Table(toml::map::Map::new()));
    let mut layers = Vec::with_capacity(overlays.len());
    for path in overlays {
        let content = fs::read_to_string(path)?;
        layers.push(toml::from_str::<toml::Value>(&content)?);
    }
    tracing::debug!(
        dir = %site_dir.display(),
        overlays = layers.len(),
        "loading site source"
    );
    resolve_source(base, layers)
}

/// Returns a fully-commented stock `docsite.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# docsite configuration
# ======================
# [site], [head], [navbar] and [theme] are required; everything else is
# optional and shown with its default value.
# Unknown keys cause an error.

# ---------------------------------------------------------------------------
# Site metadata
# ---------------------------------------------------------------------------
[site]
title = "my-project"
tagline = "One sentence about my-project."
# Production URL, and the path the site is served under.
url = "https://example.org"
base_url = "/"
organization = "my-org"
project = "my-project"
# Relative to the static/ directory.
favicon_path = "img/logo.png"
# deployment_branch = "gh-pages"

# Social preview card (Open Graph and Twitter). Remove to skip those tags.
[site.social_image]
path = "/img/social-card.png"
width = 1200
height = 630

# ---------------------------------------------------------------------------
# Head tags, appended after the tags derived from [site], in this order.
# ---------------------------------------------------------------------------
[head]
tags = [
    { tag_name = "meta", attributes = { name = "viewport", content = "width=device-width, initial-scale=1.0" } },
    { tag_name = "meta", attributes = { name = "color-scheme", content = "light dark" } },
    { tag_name = "link", attributes = { rel = "icon", href = "/img/logo.png" } },
]

# ---------------------------------------------------------------------------
# Navbar. Each item needs exactly one of `href` or `sidebar_id`, a `label`
# or `aria_label`, and a `position` ("left" or "right").
# ---------------------------------------------------------------------------
[navbar]
title = "my-project"
logo = { alt = "my-project logo", src = "img/logo.png" }

[[navbar.items]]
sidebar_id = "docsSidebar"
label = "Documentation"
position = "left"

[[navbar.items]]
href = "https://github.com/my-org/my-project"
aria_label = "GitHub"
position = "right"

# ---------------------------------------------------------------------------
# Theme
# ---------------------------------------------------------------------------
[theme]
default_mode = "light"            # "light" or "dark"
allow_switch = true               # false pins every page to default_mode
respect_system_preference = true  # initial mode follows the OS when unset
accent_light = "#73304F"
accent_dark = "#272731"

[theme.prism]
light_palette = "github"
dark_palette = "dracula"
additional_languages = []

# ---------------------------------------------------------------------------
# Optional sections
# ---------------------------------------------------------------------------
[i18n]
default_locale = "en"
locales = ["en"]

[links]
on_broken_links = "throw"          # "throw", "warn" or "ignore"
on_broken_markdown_links = "warn"

[docs]
sidebar_path = "./sidebars.js"
# edit_url = "https://github.com/my-org/my-project/tree/main/website/"
# custom_css = "./src/css/custom.css"

[footer]
style = "dark"                     # "dark" or "light"
# copyright = "Copyright © my-project"

# [[scripts]]
# src = "https://stats.example.org/count.js"
# async = true
# attributes = { "data-goatcounter" = "https://stats.example.org/count" }

# [hero]
# title = { base = "my-", accent = "project" }
# logo = { light = "img/logo.png", dark = "img/logo-dark.png", alt = "my-project logo" }
# call_to_action = { label = "Get started", href = "/docs" }

# [[features]]
# title = "Fast"
# image = "img/fast.png"
# description = "Plain text, or a list of { text }, { wordmark } and { link } nodes."
"##
}
