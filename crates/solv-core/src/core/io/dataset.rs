use crate::core::models::property::{
    PhysicalProperty, PropertyKind, PropertyPhase, ThermodynamicState,
};
use crate::core::models::substance::Substance;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DataSetError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("JSON error for '{path}': {source}")]
    Json {
        path: String,
        source: serde_json::Error,
    },

    #[error("CSV parsing error for '{path}': {source}")]
    Csv { path: String, source: csv::Error },
}

/// An owning collection of measured physical properties.
///
/// The container is the unit of persistence and of filtering: filters consume
/// a data set by reference and produce a new one, leaving the input intact.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PhysicalPropertyDataSet {
    properties: Vec<PhysicalProperty>,
}

/// One row of a FreeSolv-style experimental table.
///
/// Each row describes a solute measured in water; the temperature column is
/// optional and defaults to ambient conditions.
#[derive(Debug, Deserialize)]
struct CsvRecord {
    id: String,
    smiles: String,
    value: f64,
    uncertainty: Option<f64>,
    temperature: Option<f64>,
}

impl PhysicalPropertyDataSet {
    pub fn new(properties: Vec<PhysicalProperty>) -> Self {
        Self { properties }
    }

    pub fn properties(&self) -> &[PhysicalProperty] {
        &self.properties
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Iterates the substance of every property, duplicates included.
    pub fn substances(&self) -> impl Iterator<Item = &Substance> {
        self.properties.iter().map(|property| &property.substance)
    }

    /// Appends all properties of another data set.
    pub fn merge(&mut self, other: PhysicalPropertyDataSet) {
        self.properties.extend(other.properties);
    }

    /// Deserializes a data set from its JSON form.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serializes the data set to pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Reads a data set from a JSON file.
    pub fn from_json_path<P: AsRef<Path>>(path: P) -> Result<Self, DataSetError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| DataSetError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        Self::from_json_str(&content).map_err(|e| DataSetError::Json {
            path: path.to_string_lossy().to_string(),
            source: e,
        })
    }

    /// Writes the data set to a JSON file, pretty-printed.
    pub fn to_json_path<P: AsRef<Path>>(&self, path: P) -> Result<(), DataSetError> {
        let path = path.as_ref();
        let content = self.to_json_string().map_err(|e| DataSetError::Json {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        std::fs::write(path, content).map_err(|e| DataSetError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })
    }

    /// Imports a FreeSolv-style CSV table of hydration free energies.
    ///
    /// Every row becomes a liquid-phase solvation free-energy property whose
    /// substance pairs the row's solute with water.
    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<Self, DataSetError> {
        let path = path.as_ref();
        let mut reader = csv::Reader::from_path(path).map_err(|e| DataSetError::Csv {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;

        let mut properties = Vec::new();
        for result in reader.deserialize::<CsvRecord>() {
            let record = result.map_err(|e| DataSetError::Csv {
                path: path.to_string_lossy().to_string(),
                source: e,
            })?;
            let state = ThermodynamicState {
                temperature: record.temperature.unwrap_or(298.15),
                pressure: Some(101.325),
            };
            properties.push(PhysicalProperty {
                id: record.id,
                kind: PropertyKind::SolvationFreeEnergy,
                phase: PropertyPhase::Liquid,
                state,
                substance: Substance::solute_in_water(record.smiles),
                value: record.value,
                uncertainty: record.uncertainty,
                source: None,
            });
        }
        Ok(Self { properties })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    fn sample_property(id: &str, smiles: &str) -> PhysicalProperty {
        PhysicalProperty {
            id: id.to_string(),
            kind: PropertyKind::SolvationFreeEnergy,
            phase: PropertyPhase::Liquid,
            state: ThermodynamicState::ambient(),
            substance: Substance::solute_in_water(smiles),
            value: -5.0,
            uncertainty: Some(0.2),
            source: Some("10.0000/example".to_string()),
        }
    }

    #[test]
    fn json_round_trip_preserves_the_data_set() {
        let data_set = PhysicalPropertyDataSet::new(vec![
            sample_property("p1", "CCO"),
            sample_property("p2", "CCN"),
        ]);
        let json = data_set.to_json_string().unwrap();
        let restored = PhysicalPropertyDataSet::from_json_str(&json).unwrap();
        assert_eq!(restored, data_set);
    }

    #[test]
    fn json_path_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data-set.json");

        let data_set = PhysicalPropertyDataSet::new(vec![sample_property("p1", "CCO")]);
        data_set.to_json_path(&path).unwrap();
        let restored = PhysicalPropertyDataSet::from_json_path(&path).unwrap();
        assert_eq!(restored, data_set);
    }

    #[test]
    fn missing_json_file_reports_the_path() {
        let error = PhysicalPropertyDataSet::from_json_path("/nonexistent/data.json")
            .unwrap_err();
        assert!(matches!(error, DataSetError::Io { .. }));
        assert!(error.to_string().contains("/nonexistent/data.json"));
    }

    #[test]
    fn csv_import_builds_solute_in_water_properties() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("freesolv.csv");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "id,smiles,value,uncertainty,temperature").unwrap();
        writeln!(file, "mobley_1,CCO,-20.98,0.25,298.15").unwrap();
        writeln!(file, "mobley_2,CCN,-19.03,,").unwrap();

        let data_set = PhysicalPropertyDataSet::from_csv_path(&path).unwrap();
        assert_eq!(data_set.len(), 2);

        let first = &data_set.properties()[0];
        assert_eq!(first.kind, PropertyKind::SolvationFreeEnergy);
        assert_eq!(first.substance.components()[0].smiles(), "CCO");
        assert!(first.substance.components()[1].is_water());
        assert_eq!(first.uncertainty, Some(0.25));

        let second = &data_set.properties()[1];
        assert_eq!(second.uncertainty, None);
        assert_eq!(second.state.temperature, 298.15);
    }

    #[test]
    fn malformed_csv_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.csv");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "id,smiles,value,uncertainty,temperature").unwrap();
        writeln!(file, "mobley_1,CCO,not-a-number,,").unwrap();

        let error = PhysicalPropertyDataSet::from_csv_path(&path).unwrap_err();
        assert!(matches!(error, DataSetError::Csv { .. }));
    }

    #[test]
    fn merge_appends_properties() {
        let mut base = PhysicalPropertyDataSet::new(vec![sample_property("p1", "CCO")]);
        let other = PhysicalPropertyDataSet::new(vec![sample_property("p2", "CCN")]);
        base.merge(other);
        assert_eq!(base.len(), 2);
        assert!(!base.is_empty());
    }
}
