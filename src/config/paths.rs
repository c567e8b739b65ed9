//! Path management for kantong
//!
//! Provides XDG-compliant path resolution for the data directory.
//!
//! ## Path Resolution Order
//!
//! 1. `KANTONG_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/kantong` or `~/.config/kantong`
//! 3. Windows: `%APPDATA%\kantong`

use std::path::PathBuf;

use crate::error::KantongError;

/// Manages all paths used by kantong
#[derive(Debug, Clone)]
pub struct KantongPaths {
    /// Base directory for all kantong data
    base_dir: PathBuf,
}

impl KantongPaths {
    /// Create a new KantongPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, KantongError> {
        let base_dir = if let Ok(custom) = std::env::var("KANTONG_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create KantongPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/kantong/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (~/.config/kantong/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to transactions.json
    pub fn transactions_file(&self) -> PathBuf {
        self.data_dir().join("transactions.json")
    }

    /// Get the path to goal.json (absent when no goal is set)
    pub fn goal_file(&self) -> PathBuf {
        self.data_dir().join("goal.json")
    }

    /// Get the path to the theme preference (plain string, "light" or "dark")
    pub fn theme_file(&self) -> PathBuf {
        self.data_dir().join("theme")
    }

    /// Ensure all required directories exist
    pub fn ensure_directories(&self) -> Result<(), KantongError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| KantongError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| KantongError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, KantongError> {
    // Unix (Linux/macOS): Use XDG_CONFIG_HOME if set, otherwise ~/.config
    let config_base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").expect("HOME environment variable not set");
            PathBuf::from(home).join(".config")
        });
    Ok(config_base.join("kantong"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, KantongError> {
    // Windows: Use APPDATA
    let appdata = std::env::var("APPDATA")
        .map_err(|_| KantongError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("kantong"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = KantongPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.data_dir(), temp_dir.path().join("data"));
    }

    #[test]
    fn test_file_paths() {
        let temp_dir = TempDir::new().unwrap();
        let paths = KantongPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(
            paths.transactions_file(),
            temp_dir.path().join("data").join("transactions.json")
        );
        assert_eq!(
            paths.goal_file(),
            temp_dir.path().join("data").join("goal.json")
        );
        assert_eq!(
            paths.theme_file(),
            temp_dir.path().join("data").join("theme")
        );
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = KantongPaths::with_base_dir(temp_dir.path().to_path_buf());

        paths.ensure_directories().unwrap();

        assert!(paths.data_dir().exists());
    }
}
