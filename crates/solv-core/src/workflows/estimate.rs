use crate::core::io::dataset::PhysicalPropertyDataSet;
use crate::estimation::client::{EstimationClient, EstimationError, EstimationResult};
use crate::estimation::forcefield::ForceFieldSource;
use crate::estimation::options::RequestOptions;
use tracing::{info, instrument, warn};

/// Submits a data set for estimation through the client seam and waits for
/// the result.
///
/// The client owns the connection and the polling; this workflow only adds
/// narration around the blocking call.
#[instrument(skip_all, name = "estimation_workflow")]
pub fn run(
    data_set: &PhysicalPropertyDataSet,
    force_field: &ForceFieldSource,
    options: &RequestOptions,
    client: &impl EstimationClient,
) -> Result<EstimationResult, EstimationError> {
    info!(
        properties = data_set.len(),
        layers = options.calculation_layers().len(),
        "Submitting estimation request."
    );

    let result = client.request_estimate(data_set, force_field, options)?;

    if !result.exceptions.is_empty() {
        warn!(
            failed = result.exceptions.len(),
            "Some properties could not be estimated."
        );
    }
    info!(
        estimated = result.estimated.len(),
        "Estimation request complete."
    );
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::property::{
        PhysicalProperty, PropertyKind, PropertyPhase, ThermodynamicState,
    };
    use crate::core::models::substance::Substance;

    /// A client that estimates every property as its experimental value.
    struct EchoClient;

    impl EstimationClient for EchoClient {
        fn request_estimate(
            &self,
            data_set: &PhysicalPropertyDataSet,
            _force_field: &ForceFieldSource,
            _options: &RequestOptions,
        ) -> Result<EstimationResult, EstimationError> {
            Ok(EstimationResult {
                estimated: data_set.clone(),
                exceptions: Vec::new(),
            })
        }
    }

    struct UnreachableServer;

    impl EstimationClient for UnreachableServer {
        fn request_estimate(
            &self,
            _data_set: &PhysicalPropertyDataSet,
            _force_field: &ForceFieldSource,
            _options: &RequestOptions,
        ) -> Result<EstimationResult, EstimationError> {
            Err(EstimationError::Connection {
                address: "localhost:8120".to_string(),
                reason: "connection refused".to_string(),
            })
        }
    }

    fn sample_data_set() -> PhysicalPropertyDataSet {
        PhysicalPropertyDataSet::new(vec![PhysicalProperty {
            id: "p1".to_string(),
            kind: PropertyKind::SolvationFreeEnergy,
            phase: PropertyPhase::Liquid,
            state: ThermodynamicState::ambient(),
            substance: Substance::solute_in_water("CC#C"),
            value: -0.64,
            uncertainty: None,
            source: None,
        }])
    }

    #[test]
    fn echo_client_round_trips_the_data_set() {
        let data_set = sample_data_set();
        let result = run(
            &data_set,
            &ForceFieldSource::from_offxml_paths(["ff.offxml"]),
            &RequestOptions::new(),
            &EchoClient,
        )
        .unwrap();
        assert_eq!(result.estimated, data_set);
        assert!(result.exceptions.is_empty());
    }

    #[test]
    fn client_errors_propagate() {
        let error = run(
            &sample_data_set(),
            &ForceFieldSource::from_offxml_paths(["ff.offxml"]),
            &RequestOptions::new(),
            &UnreachableServer,
        )
        .unwrap_err();
        assert!(matches!(error, EstimationError::Connection { .. }));
        assert!(error.to_string().contains("localhost:8120"));
    }
}
