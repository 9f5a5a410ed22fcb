#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![warn(clippy::all, clippy::cargo, clippy::nursery, missing_docs)]
#![doc = include_str!("../README.md")]

/// Fundamental physical constants used throughout the library.
pub mod constants;
/// Shared scalar aliases and numeric helpers.
pub mod math;
/// Conductor and insulator material properties.
pub mod materials;
/// Two-wire and coaxial line models.
pub mod lines;
/// Distributed-line view: characteristic impedance and propagation.
pub mod transmission;
/// Length sweeps over a line model.
pub mod sweep;
/// CSV export and console tables.
pub mod report;
/// Error types shared between modules.
pub mod errors;

/// Common exports for downstream crates.
pub mod prelude;
