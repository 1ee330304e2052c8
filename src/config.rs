use std::path::PathBuf;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::{NotesError, Result};

/// Application configuration settings.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Directory where the persisted state slots are stored
    pub data_dir: PathBuf,
}

impl Config {
    /// Resolves the configuration, preferring an explicit data directory
    /// over the platform default.
    pub fn resolve(data_dir: Option<PathBuf>) -> Result<Self> {
        if let Some(dir) = data_dir {
            return Ok(Config { data_dir: dir });
        }

        let dirs = ProjectDirs::from("", "", "ocean-notes").ok_or_else(|| {
            NotesError::ConfigError {
                message: "Could not determine a data directory for this platform".to_string(),
            }
        })?;

        Ok(Config {
            data_dir: dirs.data_dir().to_path_buf(),
        })
    }
}
