//! Site-level facts shared by every other descriptor.
//!
//! [`SiteMetadata`] is loaded once from the `[site]` table of `docsite.toml`
//! and never mutated afterwards. The head-tag composer, the navbar and the
//! home page all read from the same instance.
//!
//! ```toml
//! [site]
//! title = "git-sumi"
//! tagline = "The non-opinionated Rust-based commit message linter."
//! url = "https://sumi.rs"
//! base_url = "/"
//! organization = "welpo"
//! project = "git-sumi"
//! favicon_path = "img/logo.png"
//! deployment_branch = "gh-pages"
//!
//! [site.social_image]
//! path = "/img/social-card.jpg"
//! width = 1792
//! height = 1024
//! ```
//!
//! Values that end up inside head tags should be non-empty. That is not
//! enforced here: [`SiteMetadata::empty_head_fields`] lists offenders so the
//! composer can warn about them.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SiteMetadata {
    pub title: String,
    pub tagline: String,
    /// Canonical production URL, without trailing path.
    pub url: String,
    /// Path prefix under which the site is served.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Owner of the hosting repository (e.g. the GitHub organization).
    pub organization: String,
    pub project: String,
    /// Favicon, relative to the static directory.
    pub favicon_path: String,
    /// Image used for Open Graph / Twitter previews.
    #[serde(default)]
    pub social_image: Option<SocialImage>,
    #[serde(default)]
    pub deployment_branch: Option<String>,
}

fn default_base_url() -> String {
    "/".to_string()
}

/// `base_url` normalized to `/` or `/prefix/`, ready to prepend to a
/// relative path.
pub fn base_path(base_url: &str) -> String {
    let trimmed = base_url.trim_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        format!("/{trimmed}/")
    }
}

/// Social preview card with its declared pixel dimensions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SocialImage {
    pub path: String,
    pub width: u32,
    pub height: u32,
}

impl SiteMetadata {
    /// Names of head-tag source fields that are empty strings.
    pub fn empty_head_fields(&self) -> Vec<&'static str> {
        let mut empty = Vec::new();
        if self.title.is_empty() {
            empty.push("title");
        }
        if self.tagline.is_empty() {
            empty.push("tagline");
        }
        if self.url.is_empty() {
            empty.push("url");
        }
        if let Some(image) = &self.social_image {
            if image.path.is_empty() {
                empty.push("social_image.path");
            }
        }
        empty
    }

    /// Absolute URL of the site root, `url` joined with `base_url`.
    pub fn site_root(&self) -> String {
        let url = self.url.trim_end_matches('/');
        let base = self.base_url.trim_matches('/');
        if base.is_empty() {
            format!("{url}/")
        } else {
            format!("{url}/{base}/")
        }
    }
}
