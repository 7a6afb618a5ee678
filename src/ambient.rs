//! Ambient color mode for a browsing session.
//!
//! [`AmbientTheme`] is the single writer of the session's [`ColorMode`].
//! Render units never hold it directly; they get a [`ThemeReader`], a cheap
//! handle onto the same cell. A transition is one write to that cell, so every
//! reader sees the new mode on the next render pass.
//!
//! ## State machine
//!
//! ```text
//!            toggle()                 toggle()
//!   Light ──────────────▶ Dark ──────────────▶ Light
//!
//!   system_changed(m): state = m, only while no override has been recorded
//!                      and the theme respects the system preference
//! ```
//!
//! The initial mode is resolved at [`AmbientTheme::mount`]:
//!
//! | `allow_switch` | stored override | `respect_system_preference` | initial      |
//! |----------------|-----------------|-----------------------------|--------------|
//! | false          | any             | any                         | default mode |
//! | true           | `Some(m)`       | any                         | `m`          |
//! | true           | `None`          | true                        | system       |
//! | true           | `None`          | false                       | default mode |
//!
//! Readers only exist after mount, which is what keeps consumers from
//! observing the mode before the page surface is ready.
//!
//! Everything here is single-threaded: the cell is an `Rc<Cell<_>>`, so the
//! types are `!Send`.

use crate::theme::{ColorMode, ThemeDescriptor};
use std::cell::Cell;
use std::rc::Rc;

/// Source of the operating environment's reported color scheme.
pub trait SystemPreference {
    fn color_mode(&self) -> ColorMode;
}

/// A fixed system preference, handy for tests and static renders.
impl SystemPreference for ColorMode {
    fn color_mode(&self) -> ColorMode {
        *self
    }
}

/// Persistence for the reader's explicit choice.
pub trait PreferenceStore {
    fn load(&self) -> Option<ColorMode>;
    fn save(&mut self, mode: ColorMode);
}

/// Session-scoped in-memory store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MemoryStore {
    value: Option<ColorMode>,
}

impl MemoryStore {
    pub fn with(mode: ColorMode) -> Self {
        Self { value: Some(mode) }
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self) -> Option<ColorMode> {
        self.value
    }

    fn save(&mut self, mode: ColorMode) {
        self.value = Some(mode);
    }
}

/// Read-only view of the ambient mode.
#[derive(Debug, Clone)]
pub struct ThemeReader(Rc<Cell<ColorMode>>);

impl ThemeReader {
    /// A reader detached from any context, pinned to `mode`.
    pub fn fixed(mode: ColorMode) -> Self {
        Self(Rc::new(Cell::new(mode)))
    }

    pub fn get(&self) -> ColorMode {
        self.0.get()
    }
}

/// The session's single writer of the ambient mode.
#[derive(Debug)]
pub struct AmbientTheme<S> {
    cell: Rc<Cell<ColorMode>>,
    default_mode: ColorMode,
    allow_switch: bool,
    respect_system_preference: bool,
    overridden: bool,
    store: S,
}

impl<S: PreferenceStore> AmbientTheme<S> {
    /// Resolve the initial mode and take ownership of the store.
    pub fn mount(descriptor: &ThemeDescriptor, system: &impl SystemPreference, store: S) -> Self {
        let stored = if descriptor.allow_switch {
            store.load()
        } else {
            None
        };
        let initial = if !descriptor.allow_switch {
            descriptor.default_mode
        } else if let Some(mode) = stored {
            mode
        } else if descriptor.respect_system_preference {
            system.color_mode()
        } else {
            descriptor.default_mode
        };
        tracing::debug!(%initial, overridden = stored.is_some(), "mounted ambient theme");

        Self {
            cell: Rc::new(Cell::new(initial)),
            default_mode: descriptor.default_mode,
            allow_switch: descriptor.allow_switch,
            respect_system_preference: descriptor.respect_system_preference,
            overridden: stored.is_some(),
            store,
        }
    }

    pub fn current(&self) -> ColorMode {
        self.cell.get()
    }

    pub fn reader(&self) -> ThemeReader {
        ThemeReader(Rc::clone(&self.cell))
    }

    /// Whether the reader has made an explicit choice this session.
    pub fn has_override(&self) -> bool {
        self.overridden
    }

    /// Flip the mode and persist it. No-op when switching is disabled.
    pub fn toggle(&mut self) -> ColorMode {
        if !self.allow_switch {
            return self.default_mode;
        }
        let next = self.current().opposite();
        self.cell.set(next);
        self.overridden = true;
        self.store.save(next);
        tracing::debug!(mode = %next, "color mode toggled");
        next
    }

    /// React to a change of the system preference after mount.
    pub fn system_changed(&mut self, system: ColorMode) -> ColorMode {
        if self.allow_switch && self.respect_system_preference && !self.overridden {
            self.cell.set(system);
        }
        self.current()
    }

    /// Give the store back, e.g. to carry the choice across a reload.
    pub fn into_store(self) -> S {
        self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::sample_theme;

    fn theme(allow_switch: bool, respect_system: bool, default_mode: ColorMode) -> ThemeDescriptor {
        ThemeDescriptor {
            default_mode,
            allow_switch,
            respect_system_preference: respect_system,
            ..sample_theme()
        }
    }

    #[test]
    fn initial_mode_follows_system_when_respected() {
        let ctx = AmbientTheme::mount(
            &theme(true, true, ColorMode::Light),
            &ColorMode::Dark,
            MemoryStore::default(),
        );
        assert_eq!(ctx.current(), ColorMode::Dark);
        assert!(!ctx.has_override());
    }

    #[test]
    fn initial_mode_is_default_when_system_ignored() {
        let ctx = AmbientTheme::mount(
            &theme(true, false, ColorMode::Light),
            &ColorMode::Dark,
            MemoryStore::default(),
        );
        assert_eq!(ctx.current(), ColorMode::Light);
    }

    #[test]
    fn stored_override_wins_over_system() {
        let ctx = AmbientTheme::mount(
            &theme(true, true, ColorMode::Light),
            &ColorMode::Dark,
            MemoryStore::with(ColorMode::Light),
        );
        assert_eq!(ctx.current(), ColorMode::Light);
        assert!(ctx.has_override());
    }

    #[test]
    fn toggle_override_sticks_after_system_change() {
        let mut ctx = AmbientTheme::mount(
            &theme(true, true, ColorMode::Light),
            &ColorMode::Dark,
            MemoryStore::default(),
        );
        assert_eq!(ctx.current(), ColorMode::Dark);

        assert_eq!(ctx.toggle(), ColorMode::Light);
        assert_eq!(ctx.system_changed(ColorMode::Dark), ColorMode::Light);
        assert_eq!(ctx.current(), ColorMode::Light);
    }

    #[test]
    fn system_change_applies_without_override() {
        let mut ctx = AmbientTheme::mount(
            &theme(true, true, ColorMode::Light),
            &ColorMode::Light,
            MemoryStore::default(),
        );
        assert_eq!(ctx.system_changed(ColorMode::Dark), ColorMode::Dark);
        assert_eq!(ctx.system_changed(ColorMode::Light), ColorMode::Light);
    }

    #[test]
    fn system_change_ignored_when_not_respected() {
        let mut ctx = AmbientTheme::mount(
            &theme(true, false, ColorMode::Light),
            &ColorMode::Light,
            MemoryStore::default(),
        );
        assert_eq!(ctx.system_changed(ColorMode::Dark), ColorMode::Light);
    }

    #[test]
    fn switch_disabled_freezes_default_mode() {
        let mut ctx = AmbientTheme::mount(
            &theme(false, true, ColorMode::Light),
            &ColorMode::Dark,
            MemoryStore::with(ColorMode::Dark),
        );
        assert_eq!(ctx.current(), ColorMode::Light);
        assert_eq!(ctx.toggle(), ColorMode::Light);
        assert_eq!(ctx.system_changed(ColorMode::Dark), ColorMode::Light);
        assert_eq!(ctx.current(), ColorMode::Light);
        assert_eq!(ctx.into_store(), MemoryStore::with(ColorMode::Dark));
    }

    #[test]
    fn toggle_persists_to_store_across_reload() {
        let descriptor = theme(true, true, ColorMode::Light);
        let mut ctx = AmbientTheme::mount(&descriptor, &ColorMode::Light, MemoryStore::default());
        ctx.toggle();
        let store = ctx.into_store();
        assert_eq!(store.load(), Some(ColorMode::Dark));

        let reloaded = AmbientTheme::mount(&descriptor, &ColorMode::Light, store);
        assert_eq!(reloaded.current(), ColorMode::Dark);
    }

    #[test]
    fn all_readers_observe_transition() {
        let mut ctx = AmbientTheme::mount(
            &theme(true, false, ColorMode::Light),
            &ColorMode::Light,
            MemoryStore::default(),
        );
        let readers: Vec<ThemeReader> = (0..3).map(|_| ctx.reader()).collect();
        assert!(readers.iter().all(|r| r.get() == ColorMode::Light));

        ctx.toggle();
        assert!(readers.iter().all(|r| r.get() == ColorMode::Dark));
    }

    #[test]
    fn fixed_reader_is_independent() {
        let reader = ThemeReader::fixed(ColorMode::Dark);
        assert_eq!(reader.get(), ColorMode::Dark);
    }
}
