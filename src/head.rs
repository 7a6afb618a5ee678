//! Document-head tag composition.
//!
//! The composer turns [`SiteMetadata`] into Open Graph, description and
//! Twitter card tags, then appends the caller's static overrides. The result
//! is handed to the generator's head-injection API in exactly this order.
//!
//! ## Ordering
//!
//! ```text
//! og:type  og:url  og:title  og:description  description
//! og:image  og:image:height  og:image:width  twitter:image  twitter:card
//! <overrides, verbatim>
//! ```
//!
//! The image group is only emitted when the metadata declares a social image.
//! Nothing is deduplicated: two `og:image` entries both reach the document
//! and the browser or crawler decides which one counts.
//!
//! External scripts ([`ScriptEntry`]) are injected after the tags, also in
//! declaration order.

use crate::metadata::SiteMetadata;
use maud::{Escaper, Markup, PreEscaped};
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;
use std::fmt::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagName {
    Meta,
    Link,
}

impl TagName {
    pub fn as_str(self) -> &'static str {
        match self {
            TagName::Meta => "meta",
            TagName::Link => "link",
        }
    }
}

/// A single `<meta>` or `<link>` declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HeadTagEntry {
    #[serde(rename = "tagName", alias = "tag_name")]
    pub tag_name: TagName,
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,
}

impl HeadTagEntry {
    pub fn new<I, K, V>(tag_name: TagName, attributes: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            tag_name,
            attributes: attributes
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn meta<I, K, V>(attributes: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self::new(TagName::Meta, attributes)
    }

    pub fn link<I, K, V>(attributes: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self::new(TagName::Link, attributes)
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }
}

fn og(property: &str, content: impl Into<String>) -> HeadTagEntry {
    HeadTagEntry::meta([("property", property.to_string()), ("content", content.into())])
}

fn named(name: &str, content: impl Into<String>) -> HeadTagEntry {
    HeadTagEntry::meta([("name", name.to_string()), ("content", content.into())])
}

/// Build the full head-tag sequence: metadata-derived tags, then `overrides`.
pub fn compose(metadata: &SiteMetadata, overrides: &[HeadTagEntry]) -> Vec<HeadTagEntry> {
    for field in metadata.empty_head_fields() {
        tracing::warn!(field, "empty site metadata value will render an invalid head tag");
    }

    let mut tags = vec![
        og("og:type", "website"),
        og("og:url", metadata.url.as_str()),
        og("og:title", metadata.title.as_str()),
        og("og:description", metadata.tagline.as_str()),
        named("description", metadata.tagline.as_str()),
    ];

    if let Some(image) = &metadata.social_image {
        tags.push(og("og:image", image.path.as_str()));
        tags.push(og("og:image:height", image.height.to_string()));
        tags.push(og("og:image:width", image.width.to_string()));
        tags.push(named("twitter:image", image.path.as_str()));
        tags.push(named("twitter:card", "summary_large_image"));
    }

    let derived = tags.len();
    tags.extend(overrides.iter().cloned());
    tracing::debug!(derived, overrides = overrides.len(), "composed head tags");
    tags
}

// maud only takes literal attribute names, so dynamic ones are written by hand.
fn push_attr(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    let _ = Escaper::new(out).write_str(name);
    out.push_str("=\"");
    let _ = Escaper::new(out).write_str(value);
    out.push('"');
}

/// Render the sequence as HTML, one tag per line, in sequence order.
pub fn render_head_tags(tags: &[HeadTagEntry]) -> Markup {
    let mut out = String::new();
    for tag in tags {
        out.push('<');
        out.push_str(tag.tag_name.as_str());
        for (name, value) in &tag.attributes {
            push_attr(&mut out, name, value);
        }
        out.push_str(">\n");
    }
    PreEscaped(out)
}

/// SHA-256 over the rendered head, returned as a hex string.
///
/// Identical sequences always produce the same fingerprint, which makes it
/// usable as a cache key for the document head.
pub fn fingerprint(tags: &[HeadTagEntry]) -> String {
    let rendered = render_head_tags(tags).into_string();
    format!("{:x}", Sha256::digest(rendered.as_bytes()))
}

/// An external `<script>` reference.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScriptEntry {
    pub src: String,
    #[serde(default, rename = "async")]
    pub is_async: bool,
    /// Extra attributes such as `data-*` hooks, passed through untouched.
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,
}

impl Serialize for ScriptEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2 + self.attributes.len()))?;
        map.serialize_entry("src", &self.src)?;
        map.serialize_entry("async", &self.is_async)?;
        for (name, value) in &self.attributes {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

pub fn render_scripts(scripts: &[ScriptEntry]) -> Markup {
    let mut out = String::new();
    for script in scripts {
        out.push_str("<script");
        push_attr(&mut out, "src", &script.src);
        if script.is_async {
            out.push_str(" async");
        }
        for (name, value) in &script.attributes {
            push_attr(&mut out, name, value);
        }
        out.push_str("></script>\n");
    }
    PreEscaped(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{find_meta, head_keys, sample_metadata, sample_overrides};

    #[test]
    fn derived_tags_come_first_in_fixed_order() {
        let tags = compose(&sample_metadata(), &[]);
        assert_eq!(
            head_keys(&tags),
            vec![
                "og:type",
                "og:url",
                "og:title",
                "og:description",
                "description",
                "og:image",
                "og:image:height",
                "og:image:width",
                "twitter:image",
                "twitter:card",
            ]
        );
    }

    #[test]
    fn derived_values_come_from_metadata() {
        let meta = sample_metadata();
        let tags = compose(&meta, &[]);
        assert_eq!(find_meta(&tags, "og:url").attr("content"), Some("https://sumi.rs"));
        assert_eq!(find_meta(&tags, "og:title").attr("content"), Some("git-sumi"));
        assert_eq!(
            find_meta(&tags, "description").attr("content"),
            Some(meta.tagline.as_str())
        );
        assert_eq!(find_meta(&tags, "og:image:height").attr("content"), Some("1024"));
        assert_eq!(find_meta(&tags, "og:image:width").attr("content"), Some("1792"));
        assert_eq!(
            find_meta(&tags, "twitter:card").attr("content"),
            Some("summary_large_image")
        );
    }

    #[test]
    fn no_social_image_skips_image_group() {
        let mut meta = sample_metadata();
        meta.social_image = None;
        let tags = compose(&meta, &[]);
        assert_eq!(tags.len(), 5);
        assert!(!head_keys(&tags).contains(&"og:image"));
    }

    #[test]
    fn overrides_appended_verbatim_after_derived() {
        let overrides = sample_overrides();
        let tags = compose(&sample_metadata(), &overrides);
        assert_eq!(tags.len(), 10 + overrides.len());
        assert_eq!(&tags[10..], overrides.as_slice());
    }

    #[test]
    fn duplicates_are_preserved() {
        let overrides = vec![
            HeadTagEntry::meta([("property", "og:image"), ("content", "/a.png")]),
            HeadTagEntry::meta([("property", "og:image"), ("content", "/b.png")]),
        ];
        let tags = compose(&sample_metadata(), &overrides);
        let images: Vec<_> = tags
            .iter()
            .filter(|t| t.attr("property") == Some("og:image"))
            .filter_map(|t| t.attr("content"))
            .collect();
        assert_eq!(images, vec!["/img/social-card.jpg", "/a.png", "/b.png"]);
    }

    #[test]
    fn compose_is_deterministic() {
        let meta = sample_metadata();
        let overrides = sample_overrides();
        let first = compose(&meta, &overrides);
        let second = compose(&meta, &overrides);
        assert_eq!(first, second);
        assert_eq!(
            render_head_tags(&first).into_string(),
            render_head_tags(&second).into_string()
        );
        assert_eq!(fingerprint(&first), fingerprint(&second));
    }

    #[test]
    fn fingerprint_changes_with_order() {
        let a = HeadTagEntry::meta([("name", "a"), ("content", "1")]);
        let b = HeadTagEntry::meta([("name", "b"), ("content", "2")]);
        let h1 = fingerprint(&[a.clone(), b.clone()]);
        let h2 = fingerprint(&[b, a]);
        assert_ne!(h1, h2);
        assert_eq!(h1.len(), 64);
    }

    #[test]
    fn render_escapes_attribute_values() {
        let tag = HeadTagEntry::meta([("content", "a \"quoted\" <value>")]);
        let html = render_head_tags(&[tag]).into_string();
        assert_eq!(html, "<meta content=\"a &quot;quoted&quot; &lt;value&gt;\">\n");
    }

    #[test]
    fn render_link_tag() {
        let tag = HeadTagEntry::link([("rel", "icon"), ("href", "/img/logo.png")]);
        let html = render_head_tags(&[tag]).into_string();
        assert_eq!(html, "<link href=\"/img/logo.png\" rel=\"icon\">\n");
    }

    #[test]
    fn parse_entry_from_toml() {
        let toml = r#"
tag_name = "meta"
attributes = { "http-equiv" = "X-UA-Compatible", content = "IE=edge" }
"#;
        let entry: HeadTagEntry = toml::from_str(toml).unwrap();
        assert_eq!(entry.tag_name, TagName::Meta);
        assert_eq!(entry.attr("http-equiv"), Some("X-UA-Compatible"));
    }

    #[test]
    fn missing_tag_name_rejected() {
        let toml = r#"attributes = { content = "x" }"#;
        let result: Result<HeadTagEntry, _> = toml::from_str(toml);
        assert!(result.is_err());
    }

    #[test]
    fn unknown_tag_name_rejected() {
        let toml = r#"tag_name = "script""#;
        let result: Result<HeadTagEntry, _> = toml::from_str(toml);
        assert!(result.is_err());
    }

    #[test]
    fn serializes_with_generator_key() {
        let tag = HeadTagEntry::link([("rel", "icon")]);
        let json = serde_json::to_value(&tag).unwrap();
        assert_eq!(json["tagName"], "link");
        assert_eq!(json["attributes"]["rel"], "icon");
    }

    #[test]
    fn script_serializes_flat() {
        let script: ScriptEntry = toml::from_str(
            r#"
src = "https://stats.sumi.rs/count.js"
async = true
attributes = { "data-goatcounter" = "https://stats.sumi.rs/count" }
"#,
        )
        .unwrap();
        let json = serde_json::to_value(&script).unwrap();
        assert_eq!(json["src"], "https://stats.sumi.rs/count.js");
        assert_eq!(json["async"], true);
        assert_eq!(json["data-goatcounter"], "https://stats.sumi.rs/count");
    }

    #[test]
    fn render_scripts_in_order() {
        let scripts = vec![
            ScriptEntry {
                src: "/a.js".to_string(),
                is_async: true,
                attributes: BTreeMap::from([("data-x".to_string(), "1".to_string())]),
            },
            ScriptEntry {
                src: "/b.js".to_string(),
                is_async: false,
                attributes: BTreeMap::new(),
            },
        ];
        let html = render_scripts(&scripts).into_string();
        assert_eq!(
            html,
            "<script src=\"/a.js\" async data-x=\"1\"></script>\n<script src=\"/b.js\"></script>\n"
        );
    }
}
