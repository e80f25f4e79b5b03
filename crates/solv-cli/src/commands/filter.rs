use crate::cli::FilterArgs;
use crate::config::builder::resolve_category;
use crate::config::defaults::DefaultsConfig;
use crate::config::file::FileConfig;
use crate::data;
use crate::error::Result;
use crate::progress::CliProgressHandler;
use solvsieve::core::chem::matcher::GroupCatalog;
use solvsieve::curation::filter::FilterBySmiles;
use solvsieve::workflows::curate;
use solvsieve::workflows::progress::ProgressReporter;
use tracing::info;

pub fn run(args: FilterArgs, file_config: &FileConfig) -> Result<()> {
    let data_set = data::load_data_set(&args.input)?;

    let smiles_to_include = if args.smiles.is_empty() {
        let category = resolve_category(
            args.category.as_deref(),
            file_config
                .curation
                .as_ref()
                .and_then(|c| c.target_category.as_deref()),
            DefaultsConfig::default().target_category,
        )?;
        info!(%category, "Classifying data set to resolve the category filter.");

        let progress_handler = CliProgressHandler::new();
        let reporter = ProgressReporter::with_callback(progress_handler.callback());
        let report = curate::run(&data_set, &GroupCatalog::new(), &reporter);
        report
            .outcome
            .get(&category)
            .cloned()
            .unwrap_or_default()
    } else {
        args.smiles.clone()
    };

    let filtered = FilterBySmiles::new(smiles_to_include).apply(&data_set);
    filtered.to_json_path(&args.output)?;

    println!(
        "Retained {} of {} properties. Filtered data set written to: {}",
        filtered.len(),
        data_set.len(),
        args.output.display()
    );
    Ok(())
}
