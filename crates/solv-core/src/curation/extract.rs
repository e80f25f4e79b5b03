use crate::core::chem::molecule::Molecule;
use crate::core::chem::smiles::parse_smiles;
use crate::core::io::dataset::PhysicalPropertyDataSet;
use crate::core::models::substance::Substance;
use std::collections::HashSet;
use tracing::debug;

/// One element of the parallel structure list: a non-water component
/// identifier, the unique substance it came from, and its parsed structure.
///
/// `molecule` is `None` when the identifier failed to parse; downstream
/// consumers treat such entries as having no functional-group matches.
#[derive(Debug, Clone)]
pub struct ParsedEntry {
    pub smiles: String,
    /// Index into the unique-substance list this identifier originated from.
    pub substance: usize,
    pub molecule: Option<Molecule>,
}

/// Collects the distinct substances of a data set.
///
/// Distinctness is order-insensitive value equality over the component pair.
/// First-encounter order is preserved so repeated runs over the same data set
/// produce the same sequence (and, a fortiori, the same set).
pub fn unique_substances(data_set: &PhysicalPropertyDataSet) -> Vec<Substance> {
    let mut seen = HashSet::new();
    let mut unique = Vec::new();
    for substance in data_set.substances() {
        if seen.insert(substance.clone()) {
            unique.push(substance.clone());
        }
    }
    unique
}

/// Builds the parallel structure list for a set of unique substances.
///
/// Walks both components of every substance in order, drops identifiers equal
/// to the reserved solvent, and parses the rest. Parse failures are recorded
/// as entries with no molecule rather than reported as errors.
pub fn parse_entries(substances: &[Substance]) -> Vec<ParsedEntry> {
    let mut entries = Vec::new();
    for (substance_idx, substance) in substances.iter().enumerate() {
        for component in substance.components() {
            if component.is_water() {
                continue;
            }
            let molecule = match parse_smiles(component.smiles()) {
                Ok(molecule) => Some(molecule),
                Err(error) => {
                    debug!(
                        smiles = component.smiles(),
                        %error,
                        "Component identifier failed to parse; treating as unmatched."
                    );
                    None
                }
            };
            entries.push(ParsedEntry {
                smiles: component.smiles().to_string(),
                substance: substance_idx,
                molecule,
            });
        }
    }
    entries
}
