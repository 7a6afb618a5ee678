//! Navbar and footer descriptors.
//!
//! Navbar items are declared as flat specs in `docsite.toml`. [`build`]
//! validates them and resolves each into a [`NavbarItem`]: a spec with a
//! `sidebar_id` becomes a sidebar-bound docs link, a spec with an `href`
//! becomes an external link. A spec with both, or neither, is rejected with
//! the index of the offending entry. So is a spec with no `label` and no
//! `aria_label`, which would render as an unnamed link. `position` is
//! required on every item.
//!
//! ```toml
//! [navbar]
//! title = "git-sumi"
//! logo = { alt = "git-sumi logo", src = "img/logo.png" }
//!
//! [[navbar.items]]
//! sidebar_id = "tutorialSidebar"
//! label = "Documentation"
//! position = "left"
//!
//! [[navbar.items]]
//! href = "https://github.com/welpo/git-sumi"
//! aria_label = "GitHub"
//! class_name = "header-github-link"
//! position = "right"
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NavError {
    #[error("invalid navbar item at index {index}: {reason}")]
    InvalidNavItem { index: usize, reason: &'static str },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    #[default]
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Logo {
    pub alt: String,
    pub src: String,
}

/// Navbar section as written in the site file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NavbarSpec {
    pub title: Option<String>,
    pub logo: Option<Logo>,
    pub items: Vec<NavItemSpec>,
}

/// One unresolved navbar entry. Only `position` must be present when parsed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NavItemSpec {
    pub label: Option<String>,
    pub aria_label: Option<String>,
    pub position: Position,
    pub href: Option<String>,
    pub sidebar_id: Option<String>,
    pub class_name: Option<String>,
}

/// A resolved navbar entry, serialized in the generator's item schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum NavbarItem {
    #[serde(rename = "docSidebar", rename_all = "camelCase")]
    DocSidebarLink {
        sidebar_id: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        label: Option<String>,
        position: Position,
    },
    #[serde(rename = "default")]
    ExternalLink {
        href: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        label: Option<String>,
        #[serde(rename = "aria-label", skip_serializing_if = "Option::is_none")]
        aria_label: Option<String>,
        #[serde(rename = "className", skip_serializing_if = "Option::is_none")]
        class_name: Option<String>,
        position: Position,
    },
}

impl NavbarItem {
    pub fn position(&self) -> Position {
        match self {
            NavbarItem::DocSidebarLink { position, .. } => *position,
            NavbarItem::ExternalLink { position, .. } => *position,
        }
    }

    /// Visible label, falling back to the aria label.
    pub fn display_label(&self) -> Option<&str> {
        match self {
            NavbarItem::DocSidebarLink { label, .. } => label.as_deref(),
            NavbarItem::ExternalLink {
                label, aria_label, ..
            } => label.as_deref().or(aria_label.as_deref()),
        }
    }
}

/// Validated navbar split into render groups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavbarModel {
    pub title: Option<String>,
    pub logo: Option<Logo>,
    pub left: Vec<NavbarItem>,
    pub right: Vec<NavbarItem>,
}

impl NavbarModel {
    /// All items, left group first.
    pub fn items(&self) -> impl Iterator<Item = &NavbarItem> {
        self.left.iter().chain(self.right.iter())
    }
}

fn populated(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.trim().is_empty())
}

/// Resolve a single spec; `index` is only used for error reporting.
pub fn resolve_item(index: usize, spec: &NavItemSpec) -> Result<NavbarItem, NavError> {
    let item = match (populated(&spec.href), populated(&spec.sidebar_id)) {
        (Some(href), None) => NavbarItem::ExternalLink {
            href: href.to_string(),
            label: spec.label.clone(),
            aria_label: spec.aria_label.clone(),
            class_name: spec.class_name.clone(),
            position: spec.position,
        },
        (None, Some(sidebar_id)) => NavbarItem::DocSidebarLink {
            sidebar_id: sidebar_id.to_string(),
            label: spec.label.clone(),
            position: spec.position,
        },
        (Some(_), Some(_)) => {
            return Err(NavError::InvalidNavItem {
                index,
                reason: "both href and sidebar_id are set",
            });
        }
        (None, None) => {
            return Err(NavError::InvalidNavItem {
                index,
                reason: "one of href or sidebar_id is required",
            });
        }
    };
    if populated(&spec.label).is_none() && populated(&spec.aria_label).is_none() {
        return Err(NavError::InvalidNavItem {
            index,
            reason: "one of label or aria_label is required",
        });
    }
    Ok(item)
}

/// Validate every item and partition by position.
///
/// Fails on the first invalid item. Within each group, items keep their
/// declaration order.
pub fn build(spec: &NavbarSpec) -> Result<NavbarModel, NavError> {
    let mut left = Vec::new();
    let mut right = Vec::new();
    for (index, item_spec) in spec.items.iter().enumerate() {
        let item = resolve_item(index, item_spec)?;
        match item.position() {
            Position::Left => left.push(item),
            Position::Right => right.push(item),
        }
    }
    tracing::debug!(left = left.len(), right = right.len(), "built navbar");
    Ok(NavbarModel {
        title: spec.title.clone(),
        logo: spec.logo.clone(),
        left,
        right,
    })
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FooterStyle {
    #[default]
    Dark,
    Light,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Footer {
    pub style: FooterStyle,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copyright: Option<String>,
}
