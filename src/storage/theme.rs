//! Theme preference repository
//!
//! The theme is persisted as a plain string record ("light" or "dark"), not
//! JSON. Unrecognized or missing values fall back to the dark default.

use std::path::PathBuf;

use crate::error::KantongError;
use crate::models::Theme;

use super::file_io::{read_string_opt, write_string_atomic};

/// Repository for the persisted theme preference
pub struct ThemeRepository {
    path: PathBuf,
    theme: Theme,
}

impl ThemeRepository {
    /// Create a new theme repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            theme: Theme::default(),
        }
    }

    /// Load the stored preference, defaulting to dark
    pub fn load(&mut self) {
        self.theme = Theme::from_stored(read_string_opt(&self.path).as_deref());
    }

    /// The current theme
    pub fn get(&self) -> Theme {
        self.theme
    }

    /// Set the current theme in memory
    pub fn set(&mut self, theme: Theme) {
        self.theme = theme;
    }

    /// Persist the current theme
    pub fn save(&self) -> Result<(), KantongError> {
        write_string_atomic(&self.path, self.theme.as_str())
    }
}
