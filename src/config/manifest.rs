//! Project manifest (stylegen.yaml) parsing.
//!
//! The manifest records where the descriptor tables live and how the
//! generated code is laid out, so a project can run `stylegen` bare.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{GenError, Result};

/// Project manifest loaded from stylegen.yaml.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Manifest {
    /// Path to the style table, relative to the manifest.
    pub style: Option<PathBuf>,

    /// Path to the color table, relative to the manifest.
    pub colors: Option<PathBuf>,

    /// Spaces prepended to every generated line.
    pub indent: Option<usize>,
}

impl Manifest {
    /// Load manifest from a stylegen.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| GenError::from_read(path, e))?;
        Self::parse(&content)
    }

    /// Parse manifest from YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| GenError::Config {
            message: format!("Invalid manifest: {}", e),
            help: Some("Check stylegen.yaml syntax".to_string()),
        })
    }
}
