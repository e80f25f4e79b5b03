use super::substance::Substance;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The physical phase a property was measured in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyPhase {
    Solid,
    #[default]
    Liquid,
    Gas,
}

impl FromStr for PropertyPhase {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "solid" => Ok(PropertyPhase::Solid),
            "liquid" => Ok(PropertyPhase::Liquid),
            "gas" => Ok(PropertyPhase::Gas),
            _ => Err(()),
        }
    }
}

/// The kinds of physical property this crate understands.
///
/// `OsmoticCoefficient` is a custom property type registered on top of the
/// standard set, supported in the liquid phase only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PropertyKind {
    SolvationFreeEnergy,
    Density,
    EnthalpyOfMixing,
    OsmoticCoefficient,
}

impl PropertyKind {
    /// The default unit string in which values of this kind are expressed.
    pub fn default_unit(&self) -> &'static str {
        match self {
            PropertyKind::SolvationFreeEnergy => "kJ / mol",
            PropertyKind::Density => "g / ml",
            PropertyKind::EnthalpyOfMixing => "kJ / mol",
            PropertyKind::OsmoticCoefficient => "dimensionless",
        }
    }

    /// The phases this property kind supports.
    pub fn supported_phases(&self) -> &'static [PropertyPhase] {
        match self {
            PropertyKind::OsmoticCoefficient => &[PropertyPhase::Liquid],
            _ => &[
                PropertyPhase::Solid,
                PropertyPhase::Liquid,
                PropertyPhase::Gas,
            ],
        }
    }
}

impl fmt::Display for PropertyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PropertyKind::SolvationFreeEnergy => "SolvationFreeEnergy",
            PropertyKind::Density => "Density",
            PropertyKind::EnthalpyOfMixing => "EnthalpyOfMixing",
            PropertyKind::OsmoticCoefficient => "OsmoticCoefficient",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for PropertyKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SolvationFreeEnergy" => Ok(PropertyKind::SolvationFreeEnergy),
            "Density" => Ok(PropertyKind::Density),
            "EnthalpyOfMixing" => Ok(PropertyKind::EnthalpyOfMixing),
            "OsmoticCoefficient" => Ok(PropertyKind::OsmoticCoefficient),
            _ => Err(()),
        }
    }
}

/// The thermodynamic conditions a property was measured at.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThermodynamicState {
    /// Temperature in kelvin.
    pub temperature: f64,
    /// Pressure in kilopascals, when reported.
    pub pressure: Option<f64>,
}

impl ThermodynamicState {
    /// Ambient conditions: 298.15 K at one standard atmosphere.
    pub fn ambient() -> Self {
        Self {
            temperature: 298.15,
            pressure: Some(101.325),
        }
    }
}

/// One measured physical data point tied to a substance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhysicalProperty {
    /// Stable identifier of the measurement within its source data set.
    pub id: String,
    pub kind: PropertyKind,
    pub phase: PropertyPhase,
    pub state: ThermodynamicState,
    pub substance: Substance,
    /// Measured value in the kind's default unit.
    pub value: f64,
    /// Reported experimental uncertainty, same unit as `value`.
    pub uncertainty: Option<f64>,
    /// Identifier of the originating data source (e.g. a DOI), when known.
    pub source: Option<String>,
}
