use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The canonical SMILES identifier of the reserved solvent, water.
///
/// Component identifiers equal to this value are excluded from per-molecule
/// classification and re-appended exactly once at the end of every
/// per-category SMILES sequence.
pub const WATER_SMILES: &str = "O";

/// Represents the role a component plays within a substance.
///
/// Solvation free-energy measurements always pair a solute with a solvent;
/// other property types may carry two solutes (e.g. a binary mixture), in
/// which case both components are `Solute`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentRole {
    /// The dissolved species whose property is being measured.
    #[default]
    Solute,
    /// The dissolving medium.
    Solvent,
}

impl FromStr for ComponentRole {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "solute" => Ok(ComponentRole::Solute),
            "solvent" => Ok(ComponentRole::Solvent),
            _ => Err(()),
        }
    }
}

/// A single chemical component of a substance.
///
/// A component is identified by its canonical line-notation (SMILES) string;
/// two components with the same SMILES are the same chemical species
/// regardless of role.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Component {
    smiles: String,
    role: ComponentRole,
}

impl Component {
    /// Creates a component with the given SMILES identifier and role.
    pub fn new(smiles: impl Into<String>, role: ComponentRole) -> Self {
        Self {
            smiles: smiles.into(),
            role,
        }
    }

    /// Creates a solute component from a SMILES identifier.
    pub fn solute(smiles: impl Into<String>) -> Self {
        Self::new(smiles, ComponentRole::Solute)
    }

    /// Creates the reserved solvent component, water.
    pub fn water() -> Self {
        Self::new(WATER_SMILES, ComponentRole::Solvent)
    }

    /// The SMILES identifier of this component.
    pub fn smiles(&self) -> &str {
        &self.smiles
    }

    /// The role of this component within its substance.
    pub fn role(&self) -> ComponentRole {
        self.role
    }

    /// Whether this component is the reserved solvent.
    pub fn is_water(&self) -> bool {
        self.smiles == WATER_SMILES
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.smiles)
    }
}
