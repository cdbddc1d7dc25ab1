//! # Configuration
//!
//! Configuration is loaded with [`confique`] from layered sources.
//!
//! ## Resolution Order
//!
//! Highest priority first:
//! 1. **Environment variables**: `LOBZ_CATALOG`, `LOBZ_RECORDS`, `LOBZ_EDIT_MODE`,
//!    `LOBZ_EMPTY_MESSAGE`.
//! 2. **Local config**: `lobz.toml` in the working directory.
//! 3. **User config**: `lobz.toml` in the OS config directory (via `directories`).
//! 4. **Compiled defaults**.
//!
//! Command-line flags sit above all of these; the CLI applies them after loading.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `catalog` | none | Path to the catalog JSON (levels, verbs, ABET outcomes) |
//! | `records` | none | Path to the records JSON the CLI reads and writes |
//! | `edit_mode` | `false` | List records in edit mode (indexes, no outcome summary) |
//! | `empty_message` | "There don't appear to be any Learning Objectives" | Shown for an empty listing |

use crate::error::Result;
use confique::Config;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "lobz.toml";

#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct LobzConfig {
    /// Path to the catalog JSON file.
    #[config(env = "LOBZ_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Path to the records JSON file.
    #[config(env = "LOBZ_RECORDS")]
    pub records: Option<PathBuf>,

    /// List records in edit mode.
    #[config(default = false, env = "LOBZ_EDIT_MODE")]
    pub edit_mode: bool,

    /// Message shown when there are no records.
    #[config(
        default = "There don't appear to be any Learning Objectives",
        env = "LOBZ_EMPTY_MESSAGE"
    )]
    pub empty_message: String,
}

impl Default for LobzConfig {
    fn default() -> Self {
        Self {
            catalog: None,
            records: None,
            edit_mode: false,
            empty_message: crate::listing::DEFAULT_EMPTY_MESSAGE.to_string(),
        }
    }
}

impl LobzConfig {
    /// Loads config from the environment, `<local_dir>/lobz.toml` and the user config file.
    pub fn load(local_dir: &Path) -> Result<Self> {
        let mut files = vec![local_dir.join(CONFIG_FILENAME)];
        files.extend(user_config_path());
        Self::load_from(&files)
    }

    /// Loads config from the environment and `files`, earlier files winning.
    /// Missing files are skipped.
    pub fn load_from(files: &[PathBuf]) -> Result<Self> {
        let mut builder = Self::builder().env();
        for file in files {
            builder = builder.file(file);
        }
        Ok(builder.load()?)
    }

    /// A commented `lobz.toml` listing every setting and its default.
    pub fn template() -> String {
        confique::toml::template::<Self>(confique::toml::FormatOptions::default())
    }
}

/// `lobz.toml` in the OS user config directory, if one can be determined.
pub fn user_config_path() -> Option<PathBuf> {
    ProjectDirs::from("org", "lobz", "lobz").map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
}
