//! Configuration module for Rulekit
//!
//! Optional `rulekit.toml` next to the resource documents:
//!
//! ```toml
//! [defaults]
//! targets = ["markdown", "claude"]
//! output = "dist"
//! flat = false
//! ```
//!
//! Priority: CLI flags over config file over built-in defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{RulekitError, RulekitResult};

/// Default config file name, looked up in the working directory
pub const CONFIG_FILE: &str = "rulekit.toml";

/// Parsed `rulekit.toml`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub defaults: Defaults,
}

/// `[defaults]` section
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Defaults {
    /// Targets compiled when the CLI passes none
    #[serde(default)]
    pub targets: Vec<String>,

    /// Output root; stdout mode when unset and no `--out` given
    #[serde(default)]
    pub output: Option<PathBuf>,

    /// Write without per-target subdirectories
    #[serde(default)]
    pub flat: bool,
}

impl Config {
    /// Load a config file. A missing file is not an error; it yields the
    /// built-in defaults.
    pub fn load(path: &Path) -> RulekitResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| RulekitError::InvalidDocument {
            file: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}
