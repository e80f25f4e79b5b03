use super::forcefield::ForceFieldSource;
use super::options::RequestOptions;
use crate::core::io::dataset::PhysicalPropertyDataSet;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EstimationError {
    #[error("Could not reach the estimation server at {address}: {reason}")]
    Connection { address: String, reason: String },

    #[error("The estimation server rejected the request: {0}")]
    Rejected(String),
}

/// The outcome of an estimation request.
///
/// Properties the backend could not estimate are reported as exception
/// strings rather than failing the whole request.
#[derive(Debug, Clone, PartialEq)]
pub struct EstimationResult {
    /// The successfully estimated properties.
    pub estimated: PhysicalPropertyDataSet,
    /// One message per property the backend gave up on.
    pub exceptions: Vec<String>,
}

/// A client capable of estimating a property data set against a force field.
///
/// Implementations own the connection to the estimation server and any
/// polling it requires; `request_estimate` blocks until the request resolves.
pub trait EstimationClient {
    fn request_estimate(
        &self,
        data_set: &PhysicalPropertyDataSet,
        force_field: &ForceFieldSource,
        options: &RequestOptions,
    ) -> Result<EstimationResult, EstimationError>;
}
