use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ForceFieldError {
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
}

/// A SMIRNOFF force-field source: the `.offxml` parameter files an estimation
/// request applies, in priority order (main force field first, then the water
/// model).
///
/// The typing engine that consumes these files is an external collaborator;
/// this type only identifies and transports the sources, serialized to JSON
/// alongside the staged request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForceFieldSource {
    offxml_sources: Vec<PathBuf>,
}

impl ForceFieldSource {
    /// Creates a source from `.offxml` paths in application order.
    pub fn from_offxml_paths<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            offxml_sources: paths.into_iter().map(Into::into).collect(),
        }
    }

    pub fn offxml_sources(&self) -> &[PathBuf] {
        &self.offxml_sources
    }

    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json_string(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json_path<P: AsRef<Path>>(path: P) -> Result<Self, ForceFieldError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ForceFieldError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        Self::from_json_str(&content).map_err(|e| ForceFieldError::Json {
            path: path.to_string_lossy().to_string(),
            source: e,
        })
    }

    pub fn to_json_path<P: AsRef<Path>>(&self, path: P) -> Result<(), ForceFieldError> {
        let path = path.as_ref();
        let content = self.to_json_string().map_err(|e| ForceFieldError::Json {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        std::fs::write(path, content).map_err(|e| ForceFieldError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })
    }
}
