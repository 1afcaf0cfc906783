//! Networking modules for the transporter REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` defines the `TransporterApi` seam and its HTTP implementation,
//! `types` the wire schema, and `error` the failure taxonomy forms react to.

pub mod api;
pub mod error;
pub mod types;

#[cfg(test)]
pub(crate) mod fake_api;
