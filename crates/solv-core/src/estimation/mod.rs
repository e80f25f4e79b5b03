//! The seam between this crate and the external estimation stack.
//!
//! An estimation run is described by a force-field source, request options,
//! and connection options, and submitted through the
//! [`client::EstimationClient`] trait. The scheduler, the server, and the
//! wire protocol all live on the far side of that trait.

pub mod client;
pub mod forcefield;
pub mod options;
