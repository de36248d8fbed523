// SPDX-License-Identifier: MPL-2.0
//! Session state persisted between runs in `state.cbor`.
//!
//! Unlike `settings.toml`, this file is written by the application only and
//! is not meant to be edited. A missing file yields the default state; an
//! unreadable one yields the default state plus a warning key.

use super::paths;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

const STATE_FILE: &str = "state.cbor";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AppState {
    /// Directory of the last successful save, used when the viewer has no
    /// current folder to start the save dialog in.
    #[serde(default)]
    pub last_save_directory: Option<PathBuf>,

    /// Directory of the last opened image or folder.
    #[serde(default)]
    pub last_open_directory: Option<PathBuf>,
}

impl AppState {
    pub fn load() -> (Self, Option<String>) {
        Self::load_from(None)
    }

    /// Loads state from `base_dir`, or from the resolved data directory.
    pub fn load_from(base_dir: Option<PathBuf>) -> (Self, Option<String>) {
        let Some(path) = Self::state_file_path_with_override(base_dir) else {
            return (Self::default(), None);
        };

        if !path.exists() {
            return (Self::default(), None);
        }

        match fs::File::open(&path) {
            Ok(file) => match ciborium::from_reader(BufReader::new(file)) {
                Ok(state) => (state, None),
                Err(err) => {
                    eprintln!("Failed to parse {}: {}", path.display(), err);
                    (
                        Self::default(),
                        Some("notification-state-parse-error".to_string()),
                    )
                }
            },
            Err(err) => {
                eprintln!("Failed to open {}: {}", path.display(), err);
                (
                    Self::default(),
                    Some("notification-state-read-error".to_string()),
                )
            }
        }
    }

    pub fn save(&self) -> Option<String> {
        self.save_to(None)
    }

    /// Writes state into `base_dir`, creating it if needed.
    ///
    /// Returns the i18n key of a warning when the write fails.
    pub fn save_to(&self, base_dir: Option<PathBuf>) -> Option<String> {
        let Some(path) = Self::state_file_path_with_override(base_dir) else {
            return Some("notification-state-path-error".to_string());
        };

        if let Some(parent) = path.parent() {
            if fs::create_dir_all(parent).is_err() {
                return Some("notification-state-dir-error".to_string());
            }
        }

        match fs::File::create(&path) {
            Ok(file) => {
                if ciborium::into_writer(self, BufWriter::new(file)).is_err() {
                    return Some("notification-state-write-error".to_string());
                }
                None
            }
            Err(_) => Some("notification-state-write-error".to_string()),
        }
    }

    fn state_file_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
        paths::get_app_data_dir_with_override(base_dir).map(|mut path| {
            path.push(STATE_FILE);
            path
        })
    }

    pub fn set_last_save_directory_from_file(&mut self, file_path: &Path) {
        if let Some(parent) = file_path.parent() {
            self.last_save_directory = Some(parent.to_path_buf());
        }
    }

    /// Records the directory of an opened file. Directories are recorded as-is.
    pub fn set_last_open_directory(&mut self, path: &Path) {
        if path.is_dir() {
            self.last_open_directory = Some(path.to_path_buf());
        } else if let Some(parent) = path.parent() {
            self.last_open_directory = Some(parent.to_path_buf());
        }
    }
}
