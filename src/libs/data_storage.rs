//! Where dremota keeps its files.
//!
//! One directory per user, under the platform's application data location:
//! `%LOCALAPPDATA%` on Windows, `~/Library/Application Support` on macOS and
//! `~/.local/share` elsewhere, followed by `lacodda/dremota`. A missing
//! environment variable falls back to the working directory.

use anyhow::{Context, Result};
use std::env::consts::OS;
use std::env::var_os;
use std::fs;
use std::path::{Path, PathBuf};

pub const VENDOR_NAME: &str = "lacodda";
pub const APP_NAME: &str = "dremota";

#[derive(Debug, Clone)]
pub struct DataStorage {
    base_path: PathBuf,
}

/// The platform's per-user application data location.
fn platform_data_dir() -> PathBuf {
    let from_env = |name: &str| var_os(name).map(PathBuf::from).unwrap_or_else(|| PathBuf::from("."));
    match OS {
        "windows" => from_env("LOCALAPPDATA"),
        "macos" => from_env("HOME").join("Library").join("Application Support"),
        _ => from_env("HOME").join(".local").join("share"),
    }
}

impl DataStorage {
    /// Resolves the directory from the current environment. Nothing is
    /// created until a path is requested.
    pub fn new() -> Self {
        Self {
            base_path: platform_data_dir().join(VENDOR_NAME).join(APP_NAME),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.base_path
    }

    /// Path of `file_name` inside the data directory, creating the directory
    /// on first use.
    pub fn get_path(&self, file_name: &str) -> Result<PathBuf> {
        fs::create_dir_all(&self.base_path).with_context(|| format!("cannot create data directory {}", self.base_path.display()))?;
        Ok(self.base_path.join(file_name))
    }
}

impl Default for DataStorage {
    fn default() -> Self {
        Self::new()
    }
}
