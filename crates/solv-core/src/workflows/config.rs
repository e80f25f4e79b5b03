use crate::curation::classify::Category;
use crate::estimation::options::{CalculationLayer, DEFAULT_N_MOLECULES};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error("A staged request needs at least one force-field source")]
    NoForceFieldSources,
}

/// Configuration of the staging workflow: which category to keep and what to
/// write into the staging directory.
#[derive(Debug, Clone, PartialEq)]
pub struct StageConfig {
    /// The functional-group category the data set is filtered down to.
    pub target_category: Category,
    /// Directory the staged request files are written into.
    pub output_dir: PathBuf,
    /// `.offxml` sources in application order (main force field, water model).
    pub force_field_sources: Vec<PathBuf>,
    /// Number of molecules per simulation box.
    pub n_molecules: usize,
    /// Calculation layers the request enables, in order.
    pub calculation_layers: Vec<CalculationLayer>,
}

#[derive(Default)]
pub struct StageConfigBuilder {
    target_category: Option<Category>,
    output_dir: Option<PathBuf>,
    force_field_sources: Vec<PathBuf>,
    n_molecules: Option<usize>,
    calculation_layers: Option<Vec<CalculationLayer>>,
}

impl StageConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn target_category(mut self, category: Category) -> Self {
        self.target_category = Some(category);
        self
    }

    pub fn output_dir(mut self, dir: PathBuf) -> Self {
        self.output_dir = Some(dir);
        self
    }

    pub fn force_field_source(mut self, path: PathBuf) -> Self {
        self.force_field_sources.push(path);
        self
    }

    pub fn n_molecules(mut self, n: usize) -> Self {
        self.n_molecules = Some(n);
        self
    }

    pub fn calculation_layers(mut self, layers: Vec<CalculationLayer>) -> Self {
        self.calculation_layers = Some(layers);
        self
    }

    pub fn build(self) -> Result<StageConfig, ConfigError> {
        if self.force_field_sources.is_empty() {
            return Err(ConfigError::NoForceFieldSources);
        }
        Ok(StageConfig {
            target_category: self
                .target_category
                .ok_or(ConfigError::MissingParameter("target_category"))?,
            output_dir: self
                .output_dir
                .ok_or(ConfigError::MissingParameter("output_dir"))?,
            force_field_sources: self.force_field_sources,
            n_molecules: self.n_molecules.unwrap_or(DEFAULT_N_MOLECULES),
            calculation_layers: self
                .calculation_layers
                .unwrap_or_else(|| vec![CalculationLayer::Simulation]),
        })
    }
}
