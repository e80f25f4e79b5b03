use crate::cli::StageArgs;
use crate::config::builder::build_stage_config;
use crate::config::file::FileConfig;
use crate::data;
use crate::error::Result;
use crate::progress::CliProgressHandler;
use solvsieve::core::chem::matcher::GroupCatalog;
use solvsieve::workflows::progress::ProgressReporter;
use solvsieve::workflows::stage;
use tracing::info;

pub fn run(args: StageArgs, file_config: &FileConfig) -> Result<()> {
    let app_config = build_stage_config(&args, file_config)?;
    let data_set = data::load_data_set(&app_config.input_path)?;

    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.callback());

    info!("Invoking the staging workflow...");
    let report = stage::run(
        &data_set,
        &app_config.stage,
        &GroupCatalog::new(),
        &reporter,
    )?;

    println!(
        "Staged {} properties for the '{}' category.",
        report.filtered.len(),
        app_config.stage.target_category
    );
    println!(
        "  data set:        {}",
        report.filtered_data_set_path.display()
    );
    println!("  force field:     {}", report.force_field_path.display());
    println!(
        "  request options: {}",
        report.request_options_path.display()
    );
    Ok(())
}
