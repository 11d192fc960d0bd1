//! Configuration for locating campus data files.

use crate::error::{CampusError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Where to find the building and walkway CSV files.
///
/// Relative file names are resolved against `data_dir`. Missing keys in a JSON
/// config fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CampusConfig {
    /// Base directory for the data files
    pub data_dir: PathBuf,

    /// Building records: `shortName,longName,x,y`
    pub buildings_file: PathBuf,

    /// Walkway segments: `x1,y1,x2,y2,distance`
    pub paths_file: PathBuf,
}

impl Default for CampusConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            buildings_file: PathBuf::from("campus_buildings.csv"),
            paths_file: PathBuf::from("campus_paths.csv"),
        }
    }
}

impl CampusConfig {
    /// Read a config from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`CampusError::Io`] if the file cannot be read and
    /// [`CampusError::Config`] if it is not a valid config object.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| CampusError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|e| CampusError::Config {
            message: format!("{}: {e}", path.display()),
        })
    }

    /// Set the base directory for data files
    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = dir.into();
        self
    }

    /// Set the building file name
    pub fn with_buildings_file(mut self, file: impl Into<PathBuf>) -> Self {
        self.buildings_file = file.into();
        self
    }

    /// Set the walkway file name
    pub fn with_paths_file(mut self, file: impl Into<PathBuf>) -> Self {
        self.paths_file = file.into();
        self
    }

    /// Full path to the building file.
    pub fn buildings_path(&self) -> PathBuf {
        self.data_dir.join(&self.buildings_file)
    }

    /// Full path to the walkway file.
    pub fn paths_path(&self) -> PathBuf {
        self.data_dir.join(&self.paths_file)
    }
}
