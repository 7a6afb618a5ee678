//! Build output.
//!
//! Takes a loaded [`Site`] and writes the files the external generator and
//! the browser need:
//!
//! ```text
//! build/
//! ├── site.config.json   # assembled SiteConfig, generator schema
//! ├── theme.css          # accent custom properties for both schemes
//! └── index.html         # home page rendered in the default color mode
//! ```
//!
//! Static assets are not copied; the generator owns bundling.

use crate::ambient::ThemeReader;
use crate::assemble::{AssembleError, Component, SiteConfig};
use crate::components::home::{Hero, render_home_page};
use crate::config::SiteSource;
use crate::features::FeatureList;
use crate::head;
use crate::metadata::SiteMetadata;
use crate::theme::{ThemeDescriptor, generate_accent_css};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub const CONFIG_JSON: &str = "site.config.json";
pub const THEME_CSS: &str = "theme.css";
pub const INDEX_HTML: &str = "index.html";

/// An assembled site together with the inputs its pages render from.
#[derive(Debug, Clone, PartialEq)]
pub struct Site {
    pub metadata: SiteMetadata,
    pub config: SiteConfig,
    pub theme: ThemeDescriptor,
    pub hero: Option<Hero>,
    pub features: FeatureList,
}

impl Site {
    pub fn from_source(source: &SiteSource) -> Result<Self, AssembleError> {
        let config = source.assembler().assemble()?;
        let metadata = source
            .site
            .clone()
            .ok_or(AssembleError::ConfigurationIncomplete(Component::Metadata))?;
        let theme = source
            .theme
            .clone()
            .ok_or(AssembleError::ConfigurationIncomplete(Component::Theme))?;
        Ok(Self {
            metadata,
            config,
            theme,
            hero: source.hero.clone(),
            features: source.features.clone(),
        })
    }

    pub fn head_fingerprint(&self) -> String {
        head::fingerprint(&self.config.head_tags)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateReport {
    pub files: Vec<PathBuf>,
    pub head_fingerprint: String,
}

pub fn generate(site: &Site, output_dir: &Path) -> Result<GenerateReport, GenerateError> {
    fs::create_dir_all(output_dir)?;
    let mut files = Vec::new();

    let config_path = output_dir.join(CONFIG_JSON);
    fs::write(&config_path, serde_json::to_string_pretty(&site.config)?)?;
    files.push(config_path);

    let css_path = output_dir.join(THEME_CSS);
    fs::write(&css_path, generate_accent_css(&site.theme))?;
    files.push(css_path);

    // No stored choice or system preference at build time. The inline
    // color-mode script re-resolves the mode in the browser.
    let reader = ThemeReader::fixed(site.theme.default_mode);
    let index = render_home_page(&site.config, site.hero.as_ref(), &site.features, &reader);
    let index_path = output_dir.join(INDEX_HTML);
    fs::write(&index_path, index.into_string())?;
    files.push(index_path);

    for file in &files {
        tracing::info!("Generated {}", file.display());
    }

    Ok(GenerateReport {
        files,
        head_fingerprint: site.head_fingerprint(),
    })
}
