use super::defaults::DefaultsConfig;
use super::file::FileConfig;
use super::models::AppConfig;
use crate::cli::StageArgs;
use crate::error::{CliError, Result};
use solvsieve::curation::classify::Category;
use solvsieve::estimation::options::CalculationLayer;
use solvsieve::workflows::config::StageConfigBuilder;
use std::path::PathBuf;

/// Environment variables the original workflow reads the force-field file
/// names from; they act as the lowest-precedence source for the paths.
const FORCE_FIELD_ENV: &str = "OFF";
const WATER_FORCE_FIELD_ENV: &str = "WATERFF";

pub fn build_stage_config(args: &StageArgs, file_config: &FileConfig) -> Result<AppConfig> {
    let defaults = DefaultsConfig::default();
    let curation = file_config.curation.clone().unwrap_or_default();
    let estimation = file_config.estimation.clone().unwrap_or_default();

    let target_category = resolve_category(
        args.category.as_deref(),
        curation.target_category.as_deref(),
        defaults.target_category,
    )?;

    let force_field = args
        .force_field
        .clone()
        .or(estimation.force_field)
        .or_else(|| std::env::var(FORCE_FIELD_ENV).ok().map(PathBuf::from))
        .ok_or_else(|| {
            CliError::Config(format!(
                "No force field given: pass --force-field, set [estimation] force-field, or export {}",
                FORCE_FIELD_ENV
            ))
        })?;
    let water_force_field = args
        .water_force_field
        .clone()
        .or(estimation.water_force_field)
        .or_else(|| {
            std::env::var(WATER_FORCE_FIELD_ENV)
                .ok()
                .map(PathBuf::from)
        });

    let n_molecules = args
        .n_molecules
        .or(estimation.n_molecules)
        .unwrap_or(defaults.n_molecules);

    let calculation_layers = match &estimation.calculation_layers {
        Some(names) => names
            .iter()
            .map(|name| {
                name.parse::<CalculationLayer>().map_err(|_| {
                    CliError::Config(format!("Unknown calculation layer: '{}'", name))
                })
            })
            .collect::<Result<Vec<_>>>()?,
        None => vec![CalculationLayer::Simulation],
    };

    let mut builder = StageConfigBuilder::new()
        .target_category(target_category)
        .output_dir(args.output_dir.clone())
        .force_field_source(force_field)
        .n_molecules(n_molecules)
        .calculation_layers(calculation_layers);
    if let Some(water) = water_force_field {
        builder = builder.force_field_source(water);
    }

    let stage = builder
        .build()
        .map_err(|e| CliError::Config(e.to_string()))?;

    Ok(AppConfig {
        input_path: args.input.clone(),
        stage,
    })
}

/// Resolves a category name with CLI-over-file-over-default precedence.
pub fn resolve_category(
    cli_arg: Option<&str>,
    file_arg: Option<&str>,
    default: Category,
) -> Result<Category> {
    let Some(name) = cli_arg.or(file_arg) else {
        return Ok(default);
    };
    name.parse().map_err(|_| {
        CliError::Argument(format!(
            "Unknown category '{}'; expected one of: {}",
            name,
            Category::ALL
                .iter()
                .map(|c| c.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        ))
    })
}
