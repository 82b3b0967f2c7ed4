use crate::error::{CliError, Result};
use funnelview::core::funnel::GeometryConfig;
use funnelview::render::scene::VisualConfig;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileOutputConfig {
    pub pymol_script: Option<PathBuf>,
    pub csv: Option<PathBuf>,
}

/// Contents of the optional TOML config file.
///
/// The `[geometry]` and `[visual]` tables deserialize straight into the core settings, so any
/// key left out keeps its default.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub geometry: Option<GeometryConfig>,
    pub visual: Option<VisualConfig>,
    pub output: Option<FileOutputConfig>,
}

impl FileConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }
}
