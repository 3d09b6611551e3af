//! Light/dark theme preference with write-through persistence.
//!
//! DESIGN
//! ======
//! The preference is seeded once from its store at construction and then
//! lives in memory. Every toggle writes the new value back immediately. A
//! failing store never blocks the toggle: the in-memory value governs the
//! rest of the session.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::util::storage::{BrowserStorage, PreferenceStore};

/// Storage key holding `"dark"` or `"light"`.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Page color scheme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    /// Literal persisted for this theme.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Decode a stored value. Only the exact literal `"light"` selects the
    /// light theme; absent or unrecognized values fall back to dark.
    pub fn from_stored(raw: Option<&str>) -> Self {
        match raw {
            Some("light") => Self::Light,
            _ => Self::Dark,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

/// The user's theme choice, backed by a [`PreferenceStore`].
#[derive(Clone, Debug)]
pub struct ThemePreference<S = BrowserStorage> {
    store: S,
    current: Theme,
}

impl<S: PreferenceStore> ThemePreference<S> {
    /// Seed the preference from `store`, falling back to [`Theme::Dark`] when
    /// the key is absent, corrupt, or the store is unreadable.
    pub fn new(store: S) -> Self {
        let current = match store.read(THEME_STORAGE_KEY) {
            Ok(raw) => Theme::from_stored(raw.as_deref()),
            Err(err) => {
                log::warn!("theme preference unreadable, using default: {err}");
                Theme::default()
            }
        };
        log::debug!("theme preference loaded: {}", current.as_str());
        Self { store, current }
    }

    pub fn get(&self) -> Theme {
        self.current
    }

    /// Flip between dark and light, persist the result, and return it.
    pub fn toggle(&mut self) -> Theme {
        self.current = self.current.toggled();
        if let Err(err) = self.store.write(THEME_STORAGE_KEY, self.current.as_str()) {
            log::warn!("theme preference not persisted: {err}");
        }
        log::debug!("theme toggled to {}", self.current.as_str());
        self.current
    }

    #[cfg(test)]
    pub fn store(&self) -> &S {
        &self.store
    }
}
