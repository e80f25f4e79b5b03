use crate::error::{CliError, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub curation: Option<FileCurationConfig>,
    pub estimation: Option<FileEstimationConfig>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct FileCurationConfig {
    #[serde(rename = "target-category")]
    pub target_category: Option<String>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct FileEstimationConfig {
    #[serde(rename = "force-field")]
    pub force_field: Option<PathBuf>,

    #[serde(rename = "water-force-field")]
    pub water_force_field: Option<PathBuf>,

    #[serde(rename = "n-molecules")]
    pub n_molecules: Option<usize>,

    #[serde(rename = "calculation-layers")]
    pub calculation_layers: Option<Vec<String>>,
}

impl FileConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: FileConfig = toml::from_str(&content).map_err(|e| {
            CliError::Config(format!("could not parse '{}': {}", path.display(), e))
        })?;
        debug!(path = %path.display(), "Loaded configuration file.");
        Ok(config)
    }
}
