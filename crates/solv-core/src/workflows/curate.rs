use crate::core::chem::matcher::FunctionalGroupMatcher;
use crate::core::io::dataset::PhysicalPropertyDataSet;
use crate::core::models::substance::Substance;
use crate::curation::assemble::{ClassificationOutcome, assemble_smiles};
use crate::curation::classify::{CategoryBuckets, classify_structures};
use crate::curation::extract::{ParsedEntry, parse_entries, unique_substances};
use crate::workflows::progress::{Progress, ProgressReporter};
use tracing::{info, instrument};

/// The full output of the classification pipeline.
#[derive(Debug)]
pub struct CurationReport {
    /// The deduplicated substances, in first-encounter order.
    pub substances: Vec<Substance>,
    /// The parallel structure list the buckets index into.
    pub entries: Vec<ParsedEntry>,
    /// How many entries failed to parse (and were routed to `other`).
    pub parse_failures: usize,
    /// Per-category structure-index buckets.
    pub buckets: CategoryBuckets,
    /// Per-category identifier sequences, each ending with the solvent.
    pub outcome: ClassificationOutcome,
}

/// Runs the classification pipeline: dedup, parse, classify, re-assemble.
///
/// This never fails: malformed component identifiers are absorbed during
/// parsing and the affected structures classify into `other`.
#[instrument(skip_all, name = "curation_workflow")]
pub fn run(
    data_set: &PhysicalPropertyDataSet,
    matcher: &impl FunctionalGroupMatcher,
    reporter: &ProgressReporter,
) -> CurationReport {
    reporter.report(Progress::PhaseStart {
        name: "Deduplicating substances",
    });
    let substances = unique_substances(data_set);
    info!(
        properties = data_set.len(),
        unique = substances.len(),
        "Collected unique substances."
    );
    reporter.report(Progress::PhaseFinish);

    reporter.report(Progress::PhaseStart {
        name: "Parsing structures",
    });
    reporter.report(Progress::TaskStart {
        total_steps: substances.len() as u64,
    });
    // parse_entries walks substance by substance; drive the bar at the same
    // granularity by feeding it one substance at a time.
    let mut entries = Vec::new();
    for (substance_idx, substance) in substances.iter().enumerate() {
        let start = entries.len();
        entries.extend(parse_entries(std::slice::from_ref(substance)));
        for entry in &mut entries[start..] {
            entry.substance = substance_idx;
        }
        reporter.report(Progress::TaskIncrement);
    }
    reporter.report(Progress::TaskFinish);

    let parse_failures = entries.iter().filter(|e| e.molecule.is_none()).count();
    if parse_failures > 0 {
        info!(
            parse_failures,
            "Some component identifiers failed to parse; they classify as 'other'."
        );
    }
    reporter.report(Progress::PhaseFinish);

    reporter.report(Progress::PhaseStart {
        name: "Classifying functional groups",
    });
    let structures: Vec<_> = entries.iter().map(|e| e.molecule.clone()).collect();
    let buckets = classify_structures(&structures, matcher);
    reporter.report(Progress::PhaseFinish);

    reporter.report(Progress::PhaseStart {
        name: "Assembling identifier lists",
    });
    let outcome = assemble_smiles(&buckets, &entries, &substances);
    reporter.report(Progress::PhaseFinish);

    info!(
        structures = structures.len(),
        parse_failures, "Curation workflow complete."
    );

    CurationReport {
        substances,
        entries,
        parse_failures,
        buckets,
        outcome,
    }
}
