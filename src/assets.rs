//! Static asset verification.
//!
//! Every asset the site references (favicon, navbar logo, social card, hero
//! logo, feature images) must exist under `static/` before anything is
//! written. A dangling reference is a [`AssetError::MissingAsset`]: the build
//! stops, it is never left for the browser to discover.
//!
//! Absolute `http(s)` references are skipped. The declared social card
//! dimensions are compared with the real file; a mismatch only warns, since
//! crawlers still accept the image.

use crate::features::AssetRef;
use crate::generate::Site;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

pub const STATIC_DIR: &str = "static";

#[derive(Error, Debug)]
pub enum AssetError {
    #[error("missing asset '{reference}' referenced by {context}")]
    MissingAsset { reference: String, context: String },
    #[error("failed to index static assets: {0}")]
    Walk(#[from] walkdir::Error),
}

/// Inventory of files under the static directory.
#[derive(Debug, Clone, Default)]
pub struct AssetIndex {
    root: PathBuf,
    files: BTreeSet<String>,
}

impl AssetIndex {
    /// Index every file under `root`. A missing directory yields an empty
    /// index, so every local reference will be reported.
    pub fn scan(root: &Path) -> Result<Self, AssetError> {
        let mut files = BTreeSet::new();
        if root.is_dir() {
            for entry in WalkDir::new(root).follow_links(true) {
                let entry = entry?;
                if !entry.file_type().is_file() {
                    continue;
                }
                if let Ok(rel) = entry.path().strip_prefix(root) {
                    files.insert(rel.to_string_lossy().replace('\\', "/"));
                }
            }
        }
        tracing::debug!(root = %root.display(), files = files.len(), "indexed static assets");
        Ok(Self {
            root: root.to_path_buf(),
            files,
        })
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn contains(&self, asset: &AssetRef) -> bool {
        asset.is_external() || self.files.contains(asset.local_path())
    }

    pub fn path_of(&self, asset: &AssetRef) -> PathBuf {
        self.root.join(asset.local_path())
    }
}

/// Every asset reference in the site, with a label naming where it came from.
pub fn asset_references(site: &Site) -> Vec<(String, AssetRef)> {
    let mut refs = vec![(
        "site.favicon_path".to_string(),
        AssetRef::new(site.metadata.favicon_path.as_str()),
    )];
    if let Some(logo) = &site.config.theme_config.navbar.logo {
        refs.push(("navbar.logo".to_string(), AssetRef::new(logo.src.as_str())));
    }
    if let Some(image) = &site.metadata.social_image {
        refs.push(("site.social_image".to_string(), AssetRef::new(image.path.as_str())));
    }
    if let Some(logo) = site.hero.as_ref().and_then(|h| h.logo.as_ref()) {
        refs.push(("hero.logo.light".to_string(), logo.light.clone()));
        if let Some(dark) = &logo.dark {
            refs.push(("hero.logo.dark".to_string(), dark.clone()));
        }
    }
    for (idx, feature) in site.features.iter().enumerate() {
        refs.push((
            format!("features[{idx}] ({})", feature.title),
            feature.image.clone(),
        ));
    }
    refs
}

/// Fail on the first reference that does not resolve. Returns how many
/// references were checked.
pub fn verify(site: &Site, index: &AssetIndex) -> Result<usize, AssetError> {
    let refs = asset_references(site);
    for (context, asset) in &refs {
        if !index.contains(asset) {
            return Err(AssetError::MissingAsset {
                reference: asset.as_str().to_string(),
                context: context.clone(),
            });
        }
    }
    check_social_dimensions(site, index);
    Ok(refs.len())
}

/// Declared and actual `(width, height)` of a social card whose file size
/// disagrees with `[site.social_image]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeMismatch {
    pub declared: (u32, u32),
    pub actual: (u32, u32),
}

/// Compare the declared social card size with the file on disk.
///
/// `None` when they agree, when there is no social image, when it is
/// external, or when the file cannot be decoded.
pub fn social_dimension_mismatch(site: &Site, index: &AssetIndex) -> Option<SizeMismatch> {
    let image = site.metadata.social_image.as_ref()?;
    let asset = AssetRef::new(image.path.as_str());
    if asset.is_external() {
        return None;
    }
    let declared = (image.width, image.height);
    match image::image_dimensions(index.path_of(&asset)) {
        Ok(actual) if actual != declared => Some(SizeMismatch { declared, actual }),
        Ok(_) => None,
        Err(err) => {
            tracing::debug!(path = %image.path, %err, "could not read social image dimensions");
            None
        }
    }
}

/// Warn when the declared social card size disagrees with the file.
fn check_social_dimensions(site: &Site, index: &AssetIndex) {
    let Some(SizeMismatch { declared, actual }) = social_dimension_mismatch(site, index) else {
        return;
    };
    let path = site
        .metadata
        .social_image
        .as_ref()
        .map(|image| image.path.as_str())
        .unwrap_or_default();
    let declared = format!("{}x{}", declared.0, declared.1);
    let actual = format!("{}x{}", actual.0, actual.1);
    tracing::warn!(
        path,
        %declared,
        %actual,
        "social image dimensions differ from the file"
    );
}
