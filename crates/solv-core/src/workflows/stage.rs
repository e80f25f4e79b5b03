use super::config::StageConfig;
use super::curate;
use super::progress::{Progress, ProgressReporter};
use crate::core::chem::matcher::FunctionalGroupMatcher;
use crate::core::io::dataset::{DataSetError, PhysicalPropertyDataSet};
use crate::core::models::property::PropertyKind;
use crate::curation::filter::FilterBySmiles;
use crate::estimation::forcefield::{ForceFieldError, ForceFieldSource};
use crate::estimation::options::{CalculationLayer, RequestOptions, SimulationSchema};
use std::path::PathBuf;
use thiserror::Error;
use tracing::{info, instrument, warn};

#[derive(Debug, Error)]
pub enum StageError {
    #[error(transparent)]
    DataSet(#[from] DataSetError),

    #[error(transparent)]
    ForceField(#[from] ForceFieldError),

    #[error("Could not create staging directory '{path}': {source}")]
    CreateDir {
        path: String,
        source: std::io::Error,
    },

    #[error("Could not write request options to '{path}': {source}")]
    WriteOptions {
        path: String,
        source: std::io::Error,
    },
}

/// What the staging workflow wrote and kept.
#[derive(Debug)]
pub struct StageReport {
    /// The filtered data set, as written to `filtered_data_set_path`.
    pub filtered: PhysicalPropertyDataSet,
    pub filtered_data_set_path: PathBuf,
    pub force_field_path: PathBuf,
    pub request_options_path: PathBuf,
    /// Identifiers the target category contributed to the filter.
    pub target_smiles: Vec<String>,
}

/// Classifies the data set, filters it down to the target category, and
/// writes the staged request files (filtered data set, force-field source,
/// request options) into the staging directory.
#[instrument(skip_all, name = "staging_workflow")]
pub fn run(
    data_set: &PhysicalPropertyDataSet,
    config: &StageConfig,
    matcher: &impl FunctionalGroupMatcher,
    reporter: &ProgressReporter,
) -> Result<StageReport, StageError> {
    let report = curate::run(data_set, matcher, reporter);
    let target_smiles = report
        .outcome
        .get(&config.target_category)
        .cloned()
        .unwrap_or_default();

    reporter.report(Progress::PhaseStart {
        name: "Staging estimation request",
    });

    let filtered = FilterBySmiles::new(target_smiles.iter().cloned()).apply(data_set);
    if filtered.is_empty() {
        warn!(
            category = %config.target_category,
            "No properties survived the category filter; staging an empty data set."
        );
    }

    std::fs::create_dir_all(&config.output_dir).map_err(|e| StageError::CreateDir {
        path: config.output_dir.to_string_lossy().to_string(),
        source: e,
    })?;

    let filtered_data_set_path = config.output_dir.join(format!(
        "filtered_dataset_{}.json",
        config.target_category
    ));
    filtered.to_json_path(&filtered_data_set_path)?;

    let force_field = ForceFieldSource::from_offxml_paths(config.force_field_sources.clone());
    let force_field_path = config.output_dir.join("force-field.json");
    force_field.to_json_path(&force_field_path)?;

    let mut options = RequestOptions::new();
    options.set_calculation_layers(config.calculation_layers.iter().copied());
    options.add_schema(
        CalculationLayer::Simulation,
        PropertyKind::SolvationFreeEnergy,
        SimulationSchema {
            n_molecules: config.n_molecules,
        },
    );
    let request_options_path = config.output_dir.join("request-options.json");
    options
        .to_json_path(&request_options_path)
        .map_err(|e| StageError::WriteOptions {
            path: request_options_path.to_string_lossy().to_string(),
            source: e,
        })?;

    info!(
        category = %config.target_category,
        retained = filtered.len(),
        staging_dir = %config.output_dir.display(),
        "Staged estimation request."
    );
    reporter.report(Progress::PhaseFinish);

    Ok(StageReport {
        filtered,
        filtered_data_set_path,
        force_field_path,
        request_options_path,
        target_smiles,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::chem::matcher::GroupCatalog;
    use crate::core::models::property::{PropertyPhase, ThermodynamicState};
    use crate::core::models::property::PhysicalProperty;
    use crate::core::models::substance::Substance;
    use crate::curation::classify::Category;
    use crate::estimation::options::CalculationLayer;
    use crate::workflows::config::StageConfigBuilder;
    use tempfile::tempdir;

    fn data_set_of(solutes: &[&str]) -> PhysicalPropertyDataSet {
        let properties = solutes
            .iter()
            .enumerate()
            .map(|(i, smiles)| PhysicalProperty {
                id: format!("prop-{}", i),
                kind: PropertyKind::SolvationFreeEnergy,
                phase: PropertyPhase::Liquid,
                state: ThermodynamicState::ambient(),
                substance: Substance::solute_in_water(*smiles),
                value: -1.0,
                uncertainty: None,
                source: None,
            })
            .collect();
        PhysicalPropertyDataSet::new(properties)
    }

    #[test]
    fn stages_filtered_data_set_and_request_files() {
        let dir = tempdir().unwrap();
        let data_set = data_set_of(&["CCO", "CC#C", "CCCC"]);
        let config = StageConfigBuilder::new()
            .target_category(Category::TerminalAlkynes)
            .output_dir(dir.path().join("staging"))
            .force_field_source(PathBuf::from("openff-2.1.0.offxml"))
            .force_field_source(PathBuf::from("tip3p.offxml"))
            .build()
            .unwrap();

        let report = run(
            &data_set,
            &config,
            &GroupCatalog::new(),
            &ProgressReporter::new(),
        )
        .unwrap();

        assert_eq!(report.target_smiles, vec!["CC#C", "O"]);
        assert_eq!(report.filtered.len(), 1);
        assert_eq!(report.filtered.properties()[0].id, "prop-1");

        // Every staged artifact is readable back.
        let restored =
            PhysicalPropertyDataSet::from_json_path(&report.filtered_data_set_path).unwrap();
        assert_eq!(restored, report.filtered);

        let force_field = ForceFieldSource::from_json_path(&report.force_field_path).unwrap();
        assert_eq!(force_field.offxml_sources().len(), 2);

        let options_json = std::fs::read_to_string(&report.request_options_path).unwrap();
        let options = RequestOptions::from_json_str(&options_json).unwrap();
        assert_eq!(
            options.calculation_layers(),
            &[CalculationLayer::Simulation]
        );
        assert_eq!(
            options
                .schema(
                    CalculationLayer::Simulation,
                    PropertyKind::SolvationFreeEnergy
                )
                .unwrap()
                .n_molecules,
            256
        );
    }

    #[test]
    fn file_name_carries_the_target_category() {
        let dir = tempdir().unwrap();
        let config = StageConfigBuilder::new()
            .target_category(Category::Alcohols)
            .output_dir(dir.path().to_path_buf())
            .force_field_source(PathBuf::from("ff.offxml"))
            .build()
            .unwrap();

        let report = run(
            &data_set_of(&["CCO"]),
            &config,
            &GroupCatalog::new(),
            &ProgressReporter::new(),
        )
        .unwrap();

        assert!(
            report
                .filtered_data_set_path
                .to_string_lossy()
                .ends_with("filtered_dataset_alcohols.json")
        );
    }

    #[test]
    fn empty_category_stages_an_empty_data_set() {
        let dir = tempdir().unwrap();
        let config = StageConfigBuilder::new()
            .target_category(Category::Nitros)
            .output_dir(dir.path().to_path_buf())
            .force_field_source(PathBuf::from("ff.offxml"))
            .build()
            .unwrap();

        let report = run(
            &data_set_of(&["CCO"]),
            &config,
            &GroupCatalog::new(),
            &ProgressReporter::new(),
        )
        .unwrap();

        assert!(report.filtered.is_empty());
        assert_eq!(report.target_smiles, vec!["O"]);
    }
}
