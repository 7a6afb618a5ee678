//! # docsite
//!
//! Typed site descriptor for a static documentation website. One
//! `docsite.toml` declares the site's metadata, head tags, navbar, theme and
//! home page content; docsite validates it, assembles it into the single
//! configuration object an external static-site generator consumes, and
//! renders the home page around it.
//!
//! # Architecture: Load, Assemble, Emit
//!
//! ```text
//! 1. Load      site/docsite.toml (+ overlays)  →  SiteSource   (raw, all Options)
//! 2. Assemble  SiteSource                       →  SiteConfig   (validated, pure)
//! 3. Emit      SiteConfig + home content        →  build/       (JSON, CSS, HTML)
//! ```
//!
//! Only stage 1 and stage 3 touch the filesystem. Assembly is a pure function
//! of its inputs, so the same descriptor always produces the same config and
//! the same head-tag fingerprint.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | `docsite.toml` loading, overlay merging, validation, stock config |
//! | [`metadata`] | Site-level facts (`[site]`) shared by every descriptor |
//! | [`head`] | Head-tag composition, rendering, fingerprinting, external scripts |
//! | [`nav`] | Navbar item validation and left/right grouping, footer |
//! | [`theme`] | Color modes, accent tokens, syntax-highlighting palettes |
//! | [`assemble`] | Combines the descriptors into the generator's [`assemble::SiteConfig`] |
//! | [`ambient`] | Per-page color-mode context: system preference, stored override, toggle |
//! | [`features`] | Home page feature list and its rich-text descriptions |
//! | [`components`] | Maud render units: theme-aware image, feature grid, home page |
//! | [`assets`] | Verifies every referenced static asset exists |
//! | [`generate`] | Writes `site.config.json`, `theme.css` and `index.html` |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Fail At Build Time
//!
//! A navbar item with both `href` and `sidebar_id`, a missing descriptor
//! table, or an image that is not under `static/` stops the build with an
//! error naming the culprit. Nothing is deferred to the browser.
//!
//! ## Head Tags Keep Their Order
//!
//! Derived Open Graph and Twitter tags come first, then the declared
//! overrides verbatim. Duplicates are kept; deciding which one wins is the
//! crawler's business, not ours.
//!
//! ## Color Mode Is Context, Not A Global
//!
//! [`ambient::AmbientTheme`] owns the current mode for one page. Components
//! read it through a cheap [`ambient::ThemeReader`] handle, and static
//! rendering uses a fixed reader in the default mode.

pub mod ambient;
pub mod assemble;
pub mod assets;
pub mod components;
pub mod config;
pub mod features;
pub mod generate;
pub mod head;
pub mod metadata;
pub mod nav;
pub mod output;
pub mod theme;

#[cfg(test)]
pub(crate) mod test_helpers;
