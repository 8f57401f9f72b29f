//! Preference store adapter.
//!
//! One key in per-origin `localStorage` holds the theme preference. When
//! storage is unavailable (private browsing, storage disabled) reads come
//! back absent and writes are dropped.

use web_sys::{Storage, Window};

use crate::consts::THEME_STORAGE_KEY;
use crate::theme::Theme;

/// Durable per-origin key-value store for the theme preference.
pub struct PrefStore {
    storage: Option<Storage>,
}

impl PrefStore {
    /// Bind to the window's `localStorage`, tolerating its absence.
    #[must_use]
    pub fn from_window(window: &Window) -> Self {
        Self { storage: window.local_storage().ok().flatten() }
    }

    /// The stored theme preference, if any. Unparseable values count as
    /// absent.
    #[must_use]
    pub fn theme(&self) -> Option<Theme> {
        let value = self.storage.as_ref()?.get_item(THEME_STORAGE_KEY).ok().flatten()?;
        Theme::from_str(&value)
    }

    /// Overwrite the stored preference. Last write wins.
    pub fn set_theme(&self, theme: Theme) {
        if let Some(storage) = &self.storage {
            let _ = storage.set_item(THEME_STORAGE_KEY, theme.as_str());
        }
    }
}
