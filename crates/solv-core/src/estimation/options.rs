use crate::core::models::property::PropertyKind;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// The default number of molecules in a simulation box.
pub const DEFAULT_N_MOLECULES: usize = 256;

/// The default port the estimation server listens on.
pub const DEFAULT_SERVER_PORT: u16 = 8120;

/// The calculation approaches an estimation server may apply, in the order
/// they should be attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CalculationLayer {
    #[serde(rename = "SimulationLayer")]
    Simulation,
    #[serde(rename = "ReweightingLayer")]
    Reweighting,
}

impl CalculationLayer {
    pub fn as_str(&self) -> &'static str {
        match self {
            CalculationLayer::Simulation => "SimulationLayer",
            CalculationLayer::Reweighting => "ReweightingLayer",
        }
    }
}

impl fmt::Display for CalculationLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CalculationLayer {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SimulationLayer" => Ok(CalculationLayer::Simulation),
            "ReweightingLayer" => Ok(CalculationLayer::Reweighting),
            _ => Err(()),
        }
    }
}

/// The per-property calculation schema attached to a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationSchema {
    /// Number of molecules placed in the simulation box.
    pub n_molecules: usize,
}

impl Default for SimulationSchema {
    fn default() -> Self {
        Self {
            n_molecules: DEFAULT_N_MOLECULES,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct SchemaEntry {
    layer: CalculationLayer,
    property: PropertyKind,
    schema: SimulationSchema,
}

/// How a data set should be estimated: which calculation layers to use and
/// which schema each (layer, property kind) pair applies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestOptions {
    calculation_layers: Vec<CalculationLayer>,
    schemas: Vec<SchemaEntry>,
}

impl RequestOptions {
    /// Creates options that use molecular simulation only.
    pub fn new() -> Self {
        Self {
            calculation_layers: vec![CalculationLayer::Simulation],
            schemas: Vec::new(),
        }
    }

    /// Replaces the calculation layer sequence.
    pub fn set_calculation_layers<I: IntoIterator<Item = CalculationLayer>>(
        &mut self,
        layers: I,
    ) {
        self.calculation_layers = layers.into_iter().collect();
    }

    pub fn calculation_layers(&self) -> &[CalculationLayer] {
        &self.calculation_layers
    }

    /// Registers a schema for a (layer, property kind) pair, replacing any
    /// schema previously registered for that pair.
    pub fn add_schema(
        &mut self,
        layer: CalculationLayer,
        property: PropertyKind,
        schema: SimulationSchema,
    ) {
        if let Some(entry) = self
            .schemas
            .iter_mut()
            .find(|entry| entry.layer == layer && entry.property == property)
        {
            entry.schema = schema;
        } else {
            self.schemas.push(SchemaEntry {
                layer,
                property,
                schema,
            });
        }
    }

    /// The schema registered for a (layer, property kind) pair, if any.
    pub fn schema(
        &self,
        layer: CalculationLayer,
        property: PropertyKind,
    ) -> Option<&SimulationSchema> {
        self.schemas
            .iter()
            .find(|entry| entry.layer == layer && entry.property == property)
            .map(|entry| &entry.schema)
    }

    pub fn to_json_string(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json_path<P: AsRef<Path>>(&self, path: P) -> Result<(), std::io::Error> {
        let content = self
            .to_json_string()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        std::fs::write(path, content)
    }
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Where the estimation server is reachable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionOptions {
    pub server_address: String,
    pub server_port: u16,
}

impl Default for ConnectionOptions {
    fn default() -> Self {
        Self {
            server_address: "localhost".to_string(),
            server_port: DEFAULT_SERVER_PORT,
        }
    }
}
