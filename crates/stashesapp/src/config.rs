//! App configuration.
//!
//! The notes root is an explicit value handed to the store at construction,
//! never process-wide state; tests point it at a temporary directory.

use crate::error::{Result, StashError};
use directories::UserDirs;
use std::path::PathBuf;

const DEFAULT_ROOT_DIR: &str = "Stashes";

#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding one subdirectory per stash.
    pub root: PathBuf,
}

impl Config {
    pub fn from_root(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The default configuration: notes live in `~/Stashes`.
    pub fn resolve() -> Result<Self> {
        let dirs = UserDirs::new()
            .ok_or_else(|| StashError::Store("could not determine home directory".to_string()))?;
        Ok(Self {
            root: dirs.home_dir().join(DEFAULT_ROOT_DIR),
        })
    }
}
