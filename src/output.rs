//! CLI output formatting for `check` and `build`.
//!
//! # Information-First Display
//!
//! Output is an inventory of what the site declares, not a log of files
//! touched. Every entity (head tag, navbar item, feature) leads with its
//! positional index and identity; secondary facts such as targets and image
//! paths follow on indented context lines.
//!
//! # Output Format
//!
//! ## Check
//!
//! ```text
//! Site
//!     git-sumi: The non-opinionated Rust-based commit message linter.
//!     Root: https://sumi.rs/
//!
//! Head (18 tags)
//!     001 meta property="og:type" content="website"
//!     ...
//!
//! Navbar
//!     Left
//!         001 Documentation (sidebar tutorialSidebar)
//!     Right
//!         001 GitHub → https://github.com/welpo/git-sumi
//!
//! Theme
//!     Default: light (switchable, follows system)
//!     Accent: #73304F / #272731
//!     Prism: oneLight / oceanicNext
//!
//! Features (3)
//!     001 Simple setup and integration
//!         Image: img/wizard.png
//!
//! Assets
//!     8 references verified
//! ```
//!
//! ## Build
//!
//! ```text
//! site.config.json
//! theme.css
//! index.html
//! Head fingerprint: 3f1c9a07b2e4
//! Generated 3 files
//! ```
//!
//! # Architecture
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure: no I/O, no side effects.

use crate::generate::{GenerateReport, Site};
use crate::head::HeadTagEntry;
use crate::nav::NavbarItem;
use std::path::Path;

// ============================================================================
// Shared entity display helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:03}", pos)
}

/// Indentation for a nesting depth (4 spaces per level).
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Header line: index, title, and an optional parenthesized detail.
fn entity_header(index: usize, title: &str, detail: Option<&str>) -> String {
    match detail {
        Some(detail) => format!("{} {} ({})", format_index(index), title, detail),
        None => format!("{} {}", format_index(index), title),
    }
}

/// `meta property="og:type" content="website"`, attributes in key order.
fn head_tag_line(tag: &HeadTagEntry) -> String {
    let mut line = tag.tag_name.as_str().to_string();
    for (name, value) in &tag.attributes {
        line.push_str(&format!(" {}=\"{}\"", name, value));
    }
    line
}

fn nav_item_line(index: usize, item: &NavbarItem) -> String {
    let label = item.display_label().unwrap_or("(unlabeled)");
    match item {
        NavbarItem::DocSidebarLink { sidebar_id, .. } => {
            entity_header(index, label, Some(&format!("sidebar {}", sidebar_id)))
        }
        NavbarItem::ExternalLink { href, .. } => {
            format!("{} \u{2192} {}", entity_header(index, label, None), href)
        }
    }
}

// ============================================================================
// check
// ============================================================================

/// Format the inventory printed by `check`.
///
/// `assets_checked` is the number of asset references that resolved.
pub fn format_check_output(site: &Site, assets_checked: usize) -> Vec<String> {
    let config = &site.config;
    let mut lines = Vec::new();

    lines.push("Site".to_string());
    lines.push(format!("{}{}: {}", indent(1), config.title, config.tagline));
    lines.push(format!("{}Root: {}", indent(1), site.metadata.site_root()));
    if let Some(branch) = &config.deployment_branch {
        lines.push(format!("{}Deploys to: {}", indent(1), branch));
    }

    lines.push(String::new());
    lines.push(format!("Head ({} tags)", config.head_tags.len()));
    for (i, tag) in config.head_tags.iter().enumerate() {
        lines.push(format!(
            "{}{} {}",
            indent(1),
            format_index(i + 1),
            head_tag_line(tag)
        ));
    }
    for script in &config.scripts {
        let mode = if script.is_async { "async" } else { "sync" };
        lines.push(format!("{}script {} ({})", indent(1), script.src, mode));
    }

    lines.push(String::new());
    lines.push("Navbar".to_string());
    let navbar = &config.theme_config.navbar;
    for (group, items) in [("Left", &navbar.left), ("Right", &navbar.right)] {
        if items.is_empty() {
            continue;
        }
        lines.push(format!("{}{}", indent(1), group));
        for (i, item) in items.iter().enumerate() {
            lines.push(format!("{}{}", indent(2), nav_item_line(i + 1, item)));
        }
    }

    lines.push(String::new());
    lines.push("Theme".to_string());
    let theme = &site.theme;
    let switch = if theme.allow_switch {
        "switchable"
    } else {
        "fixed"
    };
    let system = if theme.respect_system_preference {
        ", follows system"
    } else {
        ""
    };
    lines.push(format!(
        "{}Default: {} ({}{})",
        indent(1),
        theme.default_mode,
        switch,
        system
    ));
    lines.push(format!(
        "{}Accent: {} / {}",
        indent(1),
        theme.accent_light.as_str(),
        theme.accent_dark.as_str()
    ));
    lines.push(format!(
        "{}Prism: {} / {}",
        indent(1),
        theme.prism.light_palette.0,
        theme.prism.dark_palette.0
    ));

    if !site.features.is_empty() {
        lines.push(String::new());
        lines.push(format!("Features ({})", site.features.len()));
        for (i, feature) in site.features.iter().enumerate() {
            lines.push(format!(
                "{}{}",
                indent(1),
                entity_header(i + 1, &feature.title, None)
            ));
            lines.push(format!("{}Image: {}", indent(2), feature.image.as_str()));
        }
    }

    lines.push(String::new());
    lines.push("Assets".to_string());
    lines.push(format!("{}{} references verified", indent(1), assets_checked));

    lines
}

/// Print check output to stdout.
pub fn print_check_output(site: &Site, assets_checked: usize) {
    for line in format_check_output(site, assets_checked) {
        println!("{}", line);
    }
}

// ============================================================================
// build
// ============================================================================

/// Format the files written by `build`, relative to `output_dir`.
pub fn format_generate_output(report: &GenerateReport, output_dir: &Path) -> Vec<String> {
    let mut lines: Vec<String> = report
        .files
        .iter()
        .map(|file| {
            file.strip_prefix(output_dir)
                .unwrap_or(file)
                .display()
                .to_string()
        })
        .collect();
    let short = report
        .head_fingerprint
        .get(..12)
        .unwrap_or(&report.head_fingerprint);
    lines.push(format!("Head fingerprint: {}", short));
    lines.push(format!("Generated {} files", report.files.len()));
    lines
}

/// Print build output to stdout.
pub fn print_generate_output(report: &GenerateReport, output_dir: &Path) {
    for line in format_generate_output(report, output_dir) {
        println!("{}", line);
    }
}

// ============================================================================
// Tests
// ============================================================================
