//! Theme descriptor: color modes, syntax-highlighting palettes and accents.
//!
//! Pure data. The descriptor tells the [ambient context](crate::ambient)
//! whether the reader may switch modes and where the initial mode comes from,
//! and provides the per-scheme accent colors that end up in `theme.css`.
//!
//! ```toml
//! [theme]
//! default_mode = "light"
//! allow_switch = true
//! respect_system_preference = true
//! accent_light = "#73304F"
//! accent_dark = "#272731"
//!
//! [theme.prism]
//! light_palette = "oneLight"
//! dark_palette = "oceanicNext"
//! additional_languages = ["toml", "bash"]
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// The two color modes a page can be in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Light,
    Dark,
}

impl ColorMode {
    pub fn opposite(self) -> Self {
        match self {
            ColorMode::Light => ColorMode::Dark,
            ColorMode::Dark => ColorMode::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ColorMode::Light => "light",
            ColorMode::Dark => "dark",
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A CSS hex color, `#rgb`, `#rgba`, `#rrggbb` or `#rrggbbaa`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ColorToken(String);

impl ColorToken {
    pub fn parse(value: &str) -> Result<Self, String> {
        let digits = value
            .strip_prefix('#')
            .ok_or_else(|| format!("color '{value}' must start with '#'"))?;
        if !matches!(digits.len(), 3 | 4 | 6 | 8) {
            return Err(format!("color '{value}' must have 3, 4, 6 or 8 hex digits"));
        }
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(format!("color '{value}' contains non-hex characters"));
        }
        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ColorToken {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ColorToken> for String {
    fn from(token: ColorToken) -> Self {
        token.0
    }
}

impl fmt::Display for ColorToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Name of a syntax-highlighting palette known to the generator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PrismTheme(pub String);

impl PrismTheme {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PrismConfig {
    pub light_palette: PrismTheme,
    pub dark_palette: PrismTheme,
    #[serde(default)]
    pub additional_languages: Vec<String>,
}

impl Default for PrismConfig {
    fn default() -> Self {
        Self {
            light_palette: PrismTheme::new("github"),
            dark_palette: PrismTheme::new("dracula"),
            additional_languages: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThemeDescriptor {
    #[serde(default)]
    pub default_mode: ColorMode,
    #[serde(default = "default_true")]
    pub allow_switch: bool,
    #[serde(default = "default_true")]
    pub respect_system_preference: bool,
    #[serde(default)]
    pub prism: PrismConfig,
    pub accent_light: ColorToken,
    pub accent_dark: ColorToken,
}

fn default_true() -> bool {
    true
}

impl ThemeDescriptor {
    pub fn accent(&self, mode: ColorMode) -> &ColorToken {
        match mode {
            ColorMode::Light => &self.accent_light,
            ColorMode::Dark => &self.accent_dark,
        }
    }
}

/// CSS custom properties for both color schemes.
///
/// The dark block keys off the `data-theme` attribute that the ambient
/// context writes on `<html>`, so it follows explicit toggles as well as the
/// system preference.
pub fn generate_accent_css(theme: &ThemeDescriptor) -> String {
    format!(
        r#":root {{
    color-scheme: light dark;
    --site-color-accent: {light};
}}

[data-theme='dark'] {{
    --site-color-accent: {dark};
}}"#,
        light = theme.accent_light,
        dark = theme.accent_dark,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::sample_theme;

    #[test]
    fn opposite_flips() {
        assert_eq!(ColorMode::Light.opposite(), ColorMode::Dark);
        assert_eq!(ColorMode::Dark.opposite(), ColorMode::Light);
    }

    #[test]
    fn color_token_accepts_hex_forms() {
        for ok in ["#fff", "#ffff", "#73304F", "#272731ff"] {
            assert!(ColorToken::parse(ok).is_ok(), "{ok} should parse");
        }
    }

    #[test]
    fn color_token_rejects_bad_input() {
        assert!(ColorToken::parse("73304F").is_err());
        assert!(ColorToken::parse("#12345").is_err());
        assert!(ColorToken::parse("#zzzzzz").is_err());
        assert!(ColorToken::parse("").is_err());
    }

    #[test]
    fn parse_theme_table_with_defaults() {
        let toml = r##"
accent_light = "#73304F"
accent_dark = "#272731"
"##;
        let theme: ThemeDescriptor = toml::from_str(toml).unwrap();
        assert_eq!(theme.default_mode, ColorMode::Light);
        assert!(theme.allow_switch);
        assert!(theme.respect_system_preference);
        assert_eq!(theme.prism, PrismConfig::default());
    }

    #[test]
    fn invalid_accent_rejected_at_parse() {
        let toml = r##"
accent_light = "purple"
accent_dark = "#272731"
"##;
        let err = toml::from_str::<ThemeDescriptor>(toml).unwrap_err();
        assert!(err.to_string().contains("must start with '#'"));
    }

    #[test]
    fn accent_by_mode() {
        let theme = sample_theme();
        assert_eq!(theme.accent(ColorMode::Light).as_str(), "#73304F");
        assert_eq!(theme.accent(ColorMode::Dark).as_str(), "#272731");
    }

    #[test]
    fn accent_css_contains_both_schemes() {
        let css = generate_accent_css(&sample_theme());
        assert!(css.contains("--site-color-accent: #73304F"));
        assert!(css.contains("[data-theme='dark']"));
        assert!(css.contains("--site-color-accent: #272731"));
    }

    #[test]
    fn color_mode_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&ColorMode::Dark).unwrap(), "\"dark\"");
        assert_eq!(ColorMode::Light.to_string(), "light");
    }
}
