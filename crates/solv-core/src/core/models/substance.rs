use super::component::Component;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// An unordered pair of chemical components associated with one or more
/// measured physical properties.
///
/// Equality and hashing are insensitive to component order, so `{A, B}` and
/// `{B, A}` collapse to a single entry when substances are deduplicated. The
/// stored component order is preserved and observable through
/// [`components`](Substance::components), which downstream consumers rely on
/// when re-assembling identifier sequences.
#[derive(Debug, Clone, Eq, Serialize, Deserialize)]
pub struct Substance {
    components: [Component; 2],
}

impl Substance {
    /// Creates a substance from its two components.
    pub fn new(first: Component, second: Component) -> Self {
        Self {
            components: [first, second],
        }
    }

    /// Creates the common solvation pairing of a solute with water.
    pub fn solute_in_water(solute_smiles: impl Into<String>) -> Self {
        Self::new(Component::solute(solute_smiles), Component::water())
    }

    /// The two components in stored order.
    pub fn components(&self) -> &[Component; 2] {
        &self.components
    }

    /// The component SMILES pair sorted lexicographically.
    ///
    /// This is the canonical form used for order-insensitive equality.
    fn sorted_smiles(&self) -> (&str, &str) {
        let a = self.components[0].smiles();
        let b = self.components[1].smiles();
        if a <= b { (a, b) } else { (b, a) }
    }
}

impl PartialEq for Substance {
    fn eq(&self, other: &Self) -> bool {
        self.sorted_smiles() == other.sorted_smiles()
    }
}

impl Hash for Substance {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.sorted_smiles().hash(state);
    }
}

impl fmt::Display for Substance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} + {}", self.components[0], self.components[1])
    }
}
