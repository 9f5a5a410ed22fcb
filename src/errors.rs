//! Shared error types used across submodules.

use thiserror::Error;

/// Input-validation failures raised by the line models.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LineError {
    /// Raised when the conductor dimensions cannot form a line
    /// (outer-to-inner ratio ≤ 1, non-positive radius, non-finite values).
    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),
    /// Raised for non-positive conductor conductivity, negative frequency,
    /// negative length or other unusable material values.
    #[error("invalid material: {0}")]
    InvalidMaterial(String),
}

impl LineError {
    /// True for [`LineError::InvalidGeometry`].
    #[must_use]
    pub const fn is_geometry(&self) -> bool {
        matches!(self, Self::InvalidGeometry(_))
    }

    /// True for [`LineError::InvalidMaterial`].
    #[must_use]
    pub const fn is_material(&self) -> bool {
        matches!(self, Self::InvalidMaterial(_))
    }
}

/// Errors raised while sweeping a model or exporting the table.
#[derive(Debug, Error)]
pub enum SweepError {
    /// A single evaluation failed; the sweep aborts.
    #[error(transparent)]
    Line(#[from] LineError),
    /// The requested length range is empty or malformed.
    #[error("invalid sweep range: {0}")]
    InvalidRange(String),
    /// Writing the report failed.
    #[error("export failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Top-level error type for the crate.
#[derive(Debug, Error)]
pub enum TxLineError {
    /// Wraps line model errors.
    #[error(transparent)]
    Line(#[from] LineError),
    /// Wraps sweep and export errors.
    #[error(transparent)]
    Sweep(#[from] SweepError),
}
