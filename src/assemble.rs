//! Configuration assembly.
//!
//! [`Assembler`] collects the four descriptor components (site metadata,
//! head overrides, navbar spec, theme) plus the optional sections, and
//! [`Assembler::assemble`] turns them into the [`SiteConfig`] record the
//! generator consumes. Assembly is pure: no I/O, no clock, no randomness, so
//! the same inputs always produce an identical config.
//!
//! The output keeps the generator's camelCase schema:
//!
//! ```json
//! {
//!   "title": "git-sumi",
//!   "baseUrl": "/",
//!   "headTags": [{ "tagName": "meta", "attributes": { "property": "og:type", ... } }],
//!   "themeConfig": {
//!     "navbar": { "title": "git-sumi", "items": [{ "type": "docSidebar", ... }] },
//!     "colorMode": { "defaultMode": "light", "disableSwitch": false, ... }
//!   }
//! }
//! ```

use crate::config::{DocsConfig, I18n, LinkPolicies, LinkPolicy};
use crate::head::{self, HeadTagEntry, ScriptEntry};
use crate::metadata::SiteMetadata;
use crate::nav::{self, Footer, NavError, NavbarModel, NavbarSpec};
use crate::theme::{ColorMode, PrismTheme, ThemeDescriptor};
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use std::fmt;
use thiserror::Error;

/// The required descriptor components.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Component {
    Metadata,
    HeadTags,
    Navigation,
    Theme,
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Component::Metadata => "site metadata ([site])",
            Component::HeadTags => "head tags ([head])",
            Component::Navigation => "navigation ([navbar])",
            Component::Theme => "theme ([theme])",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AssembleError {
    #[error("configuration incomplete: missing {0}")]
    ConfigurationIncomplete(Component),
    #[error(transparent)]
    InvalidNavItem(#[from] NavError),
}

/// The assembled descriptor, in the generator's schema.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    pub title: String,
    pub tagline: String,
    pub favicon: String,
    pub url: String,
    pub base_url: String,
    pub organization_name: String,
    pub project_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deployment_branch: Option<String>,
    pub on_broken_links: LinkPolicy,
    pub on_broken_markdown_links: LinkPolicy,
    pub i18n: I18n,
    pub head_tags: Vec<HeadTagEntry>,
    pub scripts: Vec<ScriptEntry>,
    pub docs: DocsPreset,
    pub theme_config: ThemeConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocsPreset {
    pub sidebar_path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edit_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_css: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeConfig {
    /// Social preview image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub navbar: NavbarModel,
    pub footer: Footer,
    pub prism: PrismSettings,
    pub color_mode: ColorModeSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrismSettings {
    pub theme: PrismTheme,
    pub dark_theme: PrismTheme,
    pub additional_languages: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorModeSettings {
    pub default_mode: ColorMode,
    pub disable_switch: bool,
    pub respect_prefers_color_scheme: bool,
}

impl Serialize for NavbarModel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Navbar", 3)?;
        match &self.title {
            Some(title) => state.serialize_field("title", title)?,
            None => state.skip_field("title")?,
        }
        match &self.logo {
            Some(logo) => state.serialize_field("logo", logo)?,
            None => state.skip_field("logo")?,
        }
        let items: Vec<_> = self.items().collect();
        state.serialize_field("items", &items)?;
        state.end()
    }
}

/// Collects descriptor components and assembles them into a [`SiteConfig`].
#[derive(Debug, Clone, Default)]
pub struct Assembler {
    metadata: Option<SiteMetadata>,
    head_overrides: Option<Vec<HeadTagEntry>>,
    navigation: Option<NavbarSpec>,
    theme: Option<ThemeDescriptor>,
    i18n: I18n,
    links: LinkPolicies,
    docs: DocsConfig,
    footer: Footer,
    scripts: Vec<ScriptEntry>,
}

impl Assembler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn metadata(mut self, metadata: SiteMetadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    pub fn head_overrides(mut self, overrides: Vec<HeadTagEntry>) -> Self {
        self.head_overrides = Some(overrides);
        self
    }

    pub fn navigation(mut self, navbar: NavbarSpec) -> Self {
        self.navigation = Some(navbar);
        self
    }

    pub fn theme(mut self, theme: ThemeDescriptor) -> Self {
        self.theme = Some(theme);
        self
    }

    pub fn i18n(mut self, i18n: I18n) -> Self {
        self.i18n = i18n;
        self
    }

    pub fn links(mut self, links: LinkPolicies) -> Self {
        self.links = links;
        self
    }

    pub fn docs(mut self, docs: DocsConfig) -> Self {
        self.docs = docs;
        self
    }

    pub fn footer(mut self, footer: Footer) -> Self {
        self.footer = footer;
        self
    }

    pub fn scripts(mut self, scripts: Vec<ScriptEntry>) -> Self {
        self.scripts = scripts;
        self
    }

    /// Build the generator config.
    ///
    /// Components are checked in the order metadata, head tags, navigation,
    /// theme; the first missing one is reported.
    pub fn assemble(&self) -> Result<SiteConfig, AssembleError> {
        let metadata = self
            .metadata
            .as_ref()
            .ok_or(AssembleError::ConfigurationIncomplete(Component::Metadata))?;
        let overrides = self
            .head_overrides
            .as_deref()
            .ok_or(AssembleError::ConfigurationIncomplete(Component::HeadTags))?;
        let navigation = self
            .navigation
            .as_ref()
            .ok_or(AssembleError::ConfigurationIncomplete(Component::Navigation))?;
        let theme = self
            .theme
            .as_ref()
            .ok_or(AssembleError::ConfigurationIncomplete(Component::Theme))?;

        let head_tags = head::compose(metadata, overrides);
        let navbar = nav::build(navigation)?;

        tracing::debug!(
            head_tags = head_tags.len(),
            scripts = self.scripts.len(),
            "assembled site config"
        );

        Ok(SiteConfig {
            title: metadata.title.clone(),
            tagline: metadata.tagline.clone(),
            favicon: metadata.favicon_path.clone(),
            url: metadata.url.clone(),
            base_url: metadata.base_url.clone(),
            organization_name: metadata.organization.clone(),
            project_name: metadata.project.clone(),
            deployment_branch: metadata.deployment_branch.clone(),
            on_broken_links: self.links.on_broken_links,
            on_broken_markdown_links: self.links.on_broken_markdown_links,
            i18n: self.i18n.clone(),
            head_tags,
            scripts: self.scripts.clone(),
            docs: DocsPreset {
                sidebar_path: self.docs.sidebar_path.clone(),
                edit_url: self.docs.edit_url.clone(),
                custom_css: self.docs.custom_css.clone(),
            },
            theme_config: ThemeConfig {
                image: metadata.social_image.as_ref().map(|i| i.path.clone()),
                navbar,
                footer: self.footer.clone(),
                prism: PrismSettings {
                    theme: theme.prism.light_palette.clone(),
                    dark_theme: theme.prism.dark_palette.clone(),
                    additional_languages: theme.prism.additional_languages.clone(),
                },
                color_mode: ColorModeSettings {
                    default_mode: theme.default_mode,
                    disable_switch: !theme.allow_switch,
                    respect_prefers_color_scheme: theme.respect_system_preference,
                },
            },
        })
    }
}
