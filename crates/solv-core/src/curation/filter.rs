use crate::core::io::dataset::PhysicalPropertyDataSet;
use crate::core::models::property::PropertyKind;
use std::collections::HashSet;
use tracing::info;

/// Retains properties whose substance is fully covered by an identifier
/// allow-list.
///
/// The reserved solvent is always admitted, so a solute-in-water pairing
/// survives whenever its solute is listed; a substance with any unlisted
/// non-water component is dropped.
#[derive(Debug, Clone)]
pub struct FilterBySmiles {
    smiles_to_include: HashSet<String>,
}

impl FilterBySmiles {
    pub fn new<I, S>(smiles_to_include: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            smiles_to_include: smiles_to_include.into_iter().map(Into::into).collect(),
        }
    }

    pub fn apply(&self, data_set: &PhysicalPropertyDataSet) -> PhysicalPropertyDataSet {
        let retained: Vec<_> = data_set
            .properties()
            .iter()
            .filter(|property| {
                property
                    .substance
                    .components()
                    .iter()
                    .all(|c| c.is_water() || self.smiles_to_include.contains(c.smiles()))
            })
            .cloned()
            .collect();
        info!(
            before = data_set.len(),
            after = retained.len(),
            "Filtered data set by component identifiers."
        );
        PhysicalPropertyDataSet::new(retained)
    }
}

/// Retains properties whose kind is in an allow-list.
#[derive(Debug, Clone)]
pub struct FilterByPropertyKinds {
    kinds: HashSet<PropertyKind>,
}

impl FilterByPropertyKinds {
    pub fn new<I: IntoIterator<Item = PropertyKind>>(kinds: I) -> Self {
        Self {
            kinds: kinds.into_iter().collect(),
        }
    }

    pub fn apply(&self, data_set: &PhysicalPropertyDataSet) -> PhysicalPropertyDataSet {
        let retained: Vec<_> = data_set
            .properties()
            .iter()
            .filter(|property| self.kinds.contains(&property.kind))
            .cloned()
            .collect();
        info!(
            before = data_set.len(),
            after = retained.len(),
            "Filtered data set by property kind."
        );
        PhysicalPropertyDataSet::new(retained)
    }
}
