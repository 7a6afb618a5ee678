//! Image that follows the ambient color mode.
//!
//! The rendered `<img>` carries the source for the current mode in `src` and
//! both candidates in `data-src-light` / `data-src-dark`. The color-mode
//! script emitted by [`base_document`](crate::components::home::base_document)
//! swaps `src` from those attributes on every mode change.

use crate::ambient::ThemeReader;
use crate::features::AssetRef;
use crate::theme::ColorMode;
use maud::{Markup, html};
use serde::Deserialize;

/// `dark_src` when the mode is dark, `light_src` otherwise.
pub fn select<'a, T: ?Sized>(light_src: &'a T, dark_src: &'a T, mode: ColorMode) -> &'a T {
    match mode {
        ColorMode::Dark => dark_src,
        ColorMode::Light => light_src,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThemeAwareImage {
    pub light: AssetRef,
    /// Defaults to the light variant when omitted.
    #[serde(default)]
    pub dark: Option<AssetRef>,
    pub alt: String,
    #[serde(default)]
    pub class: Option<String>,
}

impl ThemeAwareImage {
    pub fn new(light: impl Into<String>, dark: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            light: AssetRef::new(light),
            dark: Some(AssetRef::new(dark)),
            alt: alt.into(),
            class: None,
        }
    }

    pub fn dark_or_light(&self) -> &AssetRef {
        self.dark.as_ref().unwrap_or(&self.light)
    }

    pub fn src(&self, mode: ColorMode) -> &AssetRef {
        select(&self.light, self.dark_or_light(), mode)
    }

    /// `base` is the site's normalized base path.
    pub fn render(&self, theme: &ThemeReader, base: &str) -> Markup {
        let src = self.src(theme.get());
        html! {
            img src=(src.href(base))
                alt=(self.alt)
                class=[self.class.as_deref()]
                data-src-light=(self.light.href(base))
                data-src-dark=(self.dark_or_light().href(base));
        }
    }
}
