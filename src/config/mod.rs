//! Run configuration.
//!
//! Settings come from three layers, highest first: command-line flags, the
//! `stylegen.yaml` manifest, and the built-in defaults (`style.csv` and
//! `colors.csv` in the working directory, no indentation).

mod manifest;

use std::path::{Path, PathBuf};

use crate::descriptor::TablePaths;
use crate::emit::EmitOptions;
use crate::error::Result;

pub use manifest::Manifest;

/// The name of the manifest file.
pub const MANIFEST_FILENAME: &str = "stylegen.yaml";

/// Default style table path.
pub const DEFAULT_STYLE_TABLE: &str = "style.csv";

/// Default color table path.
pub const DEFAULT_COLOR_TABLE: &str = "colors.csv";

/// Values given on the command line. `None` means "not given".
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub style: Option<PathBuf>,
    pub colors: Option<PathBuf>,
    pub indent: Option<usize>,
    pub manifest: Option<PathBuf>,
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub tables: TablePaths,
    pub emit: EmitOptions,
    /// Manifest that contributed to these settings, if any.
    pub manifest: Option<PathBuf>,
}

impl Settings {
    /// Resolve settings relative to `root`.
    ///
    /// An explicitly named manifest must exist. Otherwise `root/stylegen.yaml`
    /// is used when present and silently skipped when not.
    pub fn resolve(root: &Path, overrides: Overrides) -> Result<Self> {
        let Overrides {
            style,
            colors,
            indent,
            manifest: manifest_path,
        } = overrides;

        let manifest_path = manifest_path.or_else(|| {
            let candidate = root.join(MANIFEST_FILENAME);
            candidate.is_file().then_some(candidate)
        });

        let (manifest, base) = match &manifest_path {
            Some(path) => {
                let manifest = Manifest::load(path)?;
                let base = path.parent().map(Path::to_path_buf).unwrap_or_default();
                (manifest, base)
            }
            None => (Manifest::default(), root.to_path_buf()),
        };

        let pick = |flag: Option<PathBuf>, from_manifest: Option<PathBuf>, default: &str| {
            flag.or_else(|| from_manifest.map(|p| base.join(p)))
                .unwrap_or_else(|| root.join(default))
        };

        Ok(Self {
            tables: TablePaths {
                style: pick(style, manifest.style, DEFAULT_STYLE_TABLE),
                colors: pick(colors, manifest.colors, DEFAULT_COLOR_TABLE),
            },
            emit: EmitOptions {
                indent: indent.or(manifest.indent).unwrap_or(0),
            },
            manifest: manifest_path,
        })
    }
}
