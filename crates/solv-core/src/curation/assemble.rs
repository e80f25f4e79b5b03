use super::classify::{Category, CategoryBuckets};
use super::extract::ParsedEntry;
use crate::core::models::component::WATER_SMILES;
use crate::core::models::substance::Substance;
use std::collections::BTreeMap;

/// The classification result: per-category ordered component identifier
/// sequences, each terminated by the reserved solvent identifier.
pub type ClassificationOutcome = BTreeMap<Category, Vec<String>>;

/// Re-assembles one category's bucket into a flat identifier sequence.
///
/// For every index in the bucket, the originating substance's two component
/// identifiers are appended, skipping any equal to the reserved solvent; the
/// solvent identifier is then appended exactly once at the end of the whole
/// sequence. An empty bucket therefore yields the solvent identifier alone.
pub fn assemble_category(
    indices: &[usize],
    entries: &[ParsedEntry],
    substances: &[Substance],
) -> Vec<String> {
    let mut smiles = Vec::new();
    for &index in indices {
        let substance = &substances[entries[index].substance];
        for component in substance.components() {
            if !component.is_water() {
                smiles.push(component.smiles().to_string());
            }
        }
    }
    smiles.push(WATER_SMILES.to_string());
    smiles
}

/// Re-assembles every bucket into the full classification outcome.
pub fn assemble_smiles(
    buckets: &CategoryBuckets,
    entries: &[ParsedEntry],
    substances: &[Substance],
) -> ClassificationOutcome {
    buckets
        .iter()
        .map(|(category, indices)| {
            (category, assemble_category(indices, entries, substances))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::component::Component;
    use crate::curation::extract::parse_entries;

    fn fixtures(solutes: &[&str]) -> (Vec<Substance>, Vec<ParsedEntry>) {
        let substances: Vec<_> = solutes
            .iter()
            .map(|s| Substance::solute_in_water(*s))
            .collect();
        let entries = parse_entries(&substances);
        (substances, entries)
    }

    #[test]
    fn empty_bucket_yields_solvent_only() {
        let (substances, entries) = fixtures(&["CCO"]);
        let smiles = assemble_category(&[], &entries, &substances);
        assert_eq!(smiles, vec!["O"]);
    }

    #[test]
    fn solvent_is_excluded_per_index_and_appended_once() {
        let (substances, entries) = fixtures(&["CCO", "CCN"]);
        let smiles = assemble_category(&[0, 1], &entries, &substances);
        assert_eq!(smiles, vec!["CCO", "CCN", "O"]);
    }

    #[test]
    fn non_water_pairs_contribute_both_components() {
        let substances = vec![Substance::new(
            Component::solute("CCO"),
            Component::solute("CCN"),
        )];
        let entries = parse_entries(&substances);
        // Both entries point at the same substance; either index expands to
        // the full pair.
        let smiles = assemble_category(&[0], &entries, &substances);
        assert_eq!(smiles, vec!["CCO", "CCN", "O"]);
    }

    #[test]
    fn full_outcome_covers_every_category() {
        let (substances, entries) = fixtures(&["CCO"]);
        let buckets = CategoryBuckets::new();
        let outcome = assemble_smiles(&buckets, &entries, &substances);
        assert_eq!(outcome.len(), Category::ALL.len());
        for sequence in outcome.values() {
            assert_eq!(sequence, &vec!["O".to_string()]);
        }
    }

    #[test]
    fn every_sequence_ends_with_exactly_one_solvent() {
        let (substances, entries) = fixtures(&["CCO", "CC(=O)O"]);
        let mut buckets = CategoryBuckets::new();
        buckets.push(Category::All, 0);
        buckets.push(Category::All, 1);
        buckets.push(Category::Alcohols, 0);
        let outcome = assemble_smiles(&buckets, &entries, &substances);
        for sequence in outcome.values() {
            assert_eq!(sequence.last().map(String::as_str), Some("O"));
            let solvent_count = sequence.iter().filter(|s| *s == "O").count();
            assert_eq!(solvent_count, 1);
        }
        assert_eq!(outcome[&Category::Alcohols], vec!["CCO", "O"]);
        assert_eq!(outcome[&Category::All], vec!["CCO", "CC(=O)O", "O"]);
    }
}
