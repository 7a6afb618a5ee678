//! Feature grid for the home page.
//!
//! One column per [`FeatureEntry`], in list order. The entry index only
//! appears as `data-key`, a stable hook for the client-side renderer.

use crate::features::{FeatureEntry, FeatureList, Inline, RichText};
use maud::{Markup, Render, html};

impl Render for Inline {
    fn render(&self) -> Markup {
        match self {
            Inline::Text(text) => html! { (text) },
            Inline::Wordmark { base, accent } => html! {
                span.wordmark {
                    span { (base) }
                    span.wordmark__accent { (accent) }
                }
            },
            Inline::Link { href, children } => html! {
                a href=(href) {
                    @for child in children {
                        (child)
                    }
                }
            },
        }
    }
}

impl Render for RichText {
    fn render(&self) -> Markup {
        html! {
            @for node in self.nodes() {
                (node)
            }
        }
    }
}

/// `base` is the site's normalized base path, prefixed to local images.
pub fn render_feature(key: usize, feature: &FeatureEntry, base: &str) -> Markup {
    html! {
        div.feature.col."col--4" data-key=(key) {
            div."text--center" {
                img.feature__image src=(feature.image.href(base)) alt=(feature.title);
            }
            div."text--center"."padding-horiz--md" {
                h3 { (feature.title) }
                p { (feature.description) }
            }
        }
    }
}

pub fn render_features(features: &FeatureList, base: &str) -> Markup {
    html! {
        section.features {
            div.container {
                div.row {
                    @for (key, feature) in features.iter().enumerate() {
                        (render_feature(key, feature, base))
                    }
                }
            }
        }
    }
}
