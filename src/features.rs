//! Home page feature content.
//!
//! An ordered list of `(title, image, description)` records declared with
//! `[[features]]` in `docsite.toml`. The list is fixed for the lifetime of a
//! build: there are no mutation methods, and rendering walks it in
//! declaration order (see [`crate::components::features`]).
//!
//! Descriptions are [`RichText`]: either a plain string or a sequence of
//! inline nodes.
//!
//! ```toml
//! [[features]]
//! title = "Adaptable"
//! image = "img/chameleon.png"
//! description = [
//!     { wordmark = { base = "git-", accent = "sumi" } },
//!     { text = " follows the " },
//!     { link = { href = "/docs/rules", children = [{ text = "rules" }] } },
//!     { text = " of each project you work on." },
//! ]
//! ```

use serde::{Deserialize, Serialize};

/// Reference to a static asset, or an absolute `http(s)` URL.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssetRef(String);

impl AssetRef {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_external(&self) -> bool {
        self.0.starts_with("http://") || self.0.starts_with("https://")
    }

    /// Path relative to the static directory (leading `/` removed).
    pub fn local_path(&self) -> &str {
        self.0.trim_start_matches('/')
    }

    /// URL usable from any page of a site served under `base`, which must be
    /// normalized by [`base_path`](crate::metadata::base_path).
    pub fn href(&self, base: &str) -> String {
        if self.is_external() {
            self.0.clone()
        } else {
            format!("{}{}", base, self.local_path())
        }
    }
}

impl From<&str> for AssetRef {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

/// Inline content node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", deny_unknown_fields)]
pub enum Inline {
    Text(String),
    /// Project name split into a plain part and an accented part.
    Wordmark { base: String, accent: String },
    Link { href: String, children: Vec<Inline> },
}

impl Inline {
    fn push_plain(&self, out: &mut String) {
        match self {
            Inline::Text(text) => out.push_str(text),
            Inline::Wordmark { base, accent } => {
                out.push_str(base);
                out.push_str(accent);
            }
            Inline::Link { children, .. } => {
                for child in children {
                    child.push_plain(out);
                }
            }
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RichTextRepr {
    Plain(String),
    Nodes(Vec<Inline>),
}

impl From<RichTextRepr> for RichText {
    fn from(repr: RichTextRepr) -> Self {
        match repr {
            RichTextRepr::Plain(text) => RichText(vec![Inline::Text(text)]),
            RichTextRepr::Nodes(nodes) => RichText(nodes),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "RichTextRepr")]
pub struct RichText(Vec<Inline>);

impl RichText {
    pub fn new(nodes: Vec<Inline>) -> Self {
        Self(nodes)
    }

    pub fn nodes(&self) -> &[Inline] {
        &self.0
    }

    /// Text content with all markup dropped.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        for node in &self.0 {
            node.push_plain(&mut out);
        }
        out
    }
}

impl From<&str> for RichText {
    fn from(text: &str) -> Self {
        Self(vec![Inline::Text(text.to_string())])
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FeatureEntry {
    pub title: String,
    pub image: AssetRef,
    pub description: RichText,
}

/// Immutable, ordered feature list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct FeatureList(Vec<FeatureEntry>);

impl FeatureList {
    pub fn new(entries: Vec<FeatureEntry>) -> Self {
        Self(entries)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FeatureEntry> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&FeatureEntry> {
        self.0.get(index)
    }
}

impl<'a> IntoIterator for &'a FeatureList {
    type Item = &'a FeatureEntry;
    type IntoIter = std::slice::Iter<'a, FeatureEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
