//! Theme service
//!
//! Toggling is the only mutation; the new value is persisted immediately and
//! the presentation layer re-renders everything from the new palette on the
//! next frame.

use crate::error::KantongResult;
use crate::models::Theme;
use crate::storage::Storage;

/// Service for the display theme preference
pub struct ThemeService<'a> {
    storage: &'a mut Storage,
}

impl<'a> ThemeService<'a> {
    /// Create a new theme service
    pub fn new(storage: &'a mut Storage) -> Self {
        Self { storage }
    }

    /// The current theme
    pub fn current(&self) -> Theme {
        self.storage.theme.get()
    }

    /// Flip light/dark, persist, and return the new value
    pub fn toggle(&mut self) -> KantongResult<Theme> {
        let next = self.storage.theme.get().toggled();
        self.storage.theme.set(next);
        self.storage.theme.save()?;
        Ok(next)
    }
}
