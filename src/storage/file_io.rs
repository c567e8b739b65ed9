//! File I/O utilities with atomic writes
//!
//! Provides safe file operations that won't corrupt data on failure. Reads
//! are lenient: a missing or unparseable file yields the default value, so
//! corrupted storage degrades to an empty ledger instead of an error.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::KantongError;

/// Read JSON from a file, returning the default value if the file doesn't
/// exist or doesn't parse
pub fn read_json_or_default<T, P>(path: P) -> T
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        return T::default();
    }

    File::open(path)
        .ok()
        .and_then(|file| serde_json::from_reader(BufReader::new(file)).ok())
        .unwrap_or_default()
}

/// Write JSON to a file atomically (write to temp, then rename)
///
/// This ensures that the file is either completely written or not modified at
/// all, preventing corruption on crashes or power failures.
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), KantongError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    ensure_parent(path)?;

    // Temp file in the same directory (important for atomic rename)
    let temp_path = path.with_extension("json.tmp");

    let file = File::create(&temp_path)
        .map_err(|e| KantongError::Storage(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, data)
        .map_err(|e| KantongError::Storage(format!("Failed to serialize data: {}", e)))?;

    writer
        .flush()
        .map_err(|e| KantongError::Storage(format!("Failed to flush data: {}", e)))?;

    writer
        .get_ref()
        .sync_all()
        .map_err(|e| KantongError::Storage(format!("Failed to sync data: {}", e)))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        KantongError::Storage(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}

/// Read a plain string record, returning None if the file doesn't exist or
/// can't be read
pub fn read_string_opt<P: AsRef<Path>>(path: P) -> Option<String> {
    let path = path.as_ref();
    if !path.exists() {
        return None;
    }
    fs::read_to_string(path).ok()
}

/// Write a plain string record atomically
pub fn write_string_atomic<P: AsRef<Path>>(path: P, value: &str) -> Result<(), KantongError> {
    let path = path.as_ref();

    ensure_parent(path)?;

    let temp_path = path.with_extension("tmp");
    fs::write(&temp_path, value)
        .map_err(|e| KantongError::Storage(format!("Failed to write temp file: {}", e)))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        KantongError::Storage(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}

/// Remove a file if it exists; absent files are not an error
pub fn remove_if_exists<P: AsRef<Path>>(path: P) -> Result<(), KantongError> {
    let path = path.as_ref();
    if path.exists() {
        fs::remove_file(path)
            .map_err(|e| KantongError::Storage(format!("Failed to remove {}: {}", path.display(), e)))?;
    }
    Ok(())
}

fn ensure_parent(path: &Path) -> Result<(), KantongError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            KantongError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }
    Ok(())
}
