use crate::cli::ClassifyArgs;
use crate::data;
use crate::error::Result;
use crate::progress::CliProgressHandler;
use solvsieve::core::chem::matcher::GroupCatalog;
use solvsieve::workflows::curate;
use solvsieve::workflows::progress::ProgressReporter;
use tracing::info;

pub fn run(args: ClassifyArgs) -> Result<()> {
    let data_set = data::load_data_set(&args.input)?;

    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.callback());

    info!("Invoking the curation workflow...");
    let report = curate::run(&data_set, &GroupCatalog::new(), &reporter);

    println!(
        "Classified {} unique substances ({} structures, {} parse failures):",
        report.substances.len(),
        report.entries.len(),
        report.parse_failures
    );
    for (category, sequence) in &report.outcome {
        // The trailing entry is always the reserved solvent.
        println!("  {:<18} {:>5}", category.as_str(), sequence.len() - 1);
    }

    if let Some(output) = &args.output {
        let json = serde_json::to_string_pretty(&report.outcome)
            .map_err(|e| crate::error::CliError::Other(e.into()))?;
        std::fs::write(output, json)?;
        println!("Classification written to: {}", output.display());
    }

    Ok(())
}
