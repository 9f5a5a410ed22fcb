//! Parallel two-conductor line.

use std::f64::consts::PI;

use crate::errors::LineError;
use crate::materials::MaterialProperties;
use crate::math::{all_finite, two_wire_log_ratio, Scalar};

use super::{derived_constants, LineModel, PerUnitLength};

/// Cross-section of a two-wire line.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TwoWireGeometry {
    /// Radius `d` of each conductor in meters.
    pub radius_m: Scalar,
    /// Center-to-center spacing `D` in meters.
    pub spacing_m: Scalar,
}

impl TwoWireGeometry {
    /// Creates a geometry from conductor radius and center spacing.
    #[must_use]
    pub const fn new(radius_m: Scalar, spacing_m: Scalar) -> Self {
        Self {
            radius_m,
            spacing_m,
        }
    }

    /// 14 AWG conductors (0.813 mm radius) spaced 2 cm apart.
    #[must_use]
    pub const fn awg14_reference() -> Self {
        Self::new(0.000_813, 0.02)
    }

    /// Spacing ratio `D/d`.
    #[must_use]
    pub fn ratio(&self) -> Scalar {
        self.spacing_m / self.radius_m
    }
}

/// Two-wire line model: `R' = 2Rs/(πd)`, `L' = (μi/π)·acosh(D/d)`,
/// `C' = πε/acosh(D/d)`, `G' = πσ/acosh(D/d)`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TwoWireLineModel {
    geometry: TwoWireGeometry,
}

impl TwoWireLineModel {
    /// Wraps a cross-section.
    #[must_use]
    pub const fn new(geometry: TwoWireGeometry) -> Self {
        Self { geometry }
    }

    /// The cross-section this model evaluates.
    #[must_use]
    pub const fn geometry(&self) -> &TwoWireGeometry {
        &self.geometry
    }
}

impl LineModel for TwoWireLineModel {
    fn kind(&self) -> &'static str {
        "two-wire"
    }

    fn validate_geometry(&self) -> Result<(), LineError> {
        let TwoWireGeometry {
            radius_m: d,
            spacing_m: big_d,
        } = self.geometry;
        if !all_finite(&[d, big_d]) {
            return Err(LineError::InvalidGeometry(format!(
                "dimensions must be finite, got d = {d}, D = {big_d}"
            )));
        }
        if d <= 0.0 {
            return Err(LineError::InvalidGeometry(format!(
                "conductor radius must be positive, got {d}"
            )));
        }
        let k = big_d / d;
        if !k.is_finite() || k <= 1.0 {
            return Err(LineError::InvalidGeometry(format!(
                "spacing ratio D/d must exceed 1, got {k}"
            )));
        }
        Ok(())
    }

    fn per_unit_length(
        &self,
        material: &MaterialProperties,
        frequency_hz: Scalar,
    ) -> Result<PerUnitLength, LineError> {
        self.validate_geometry()?;
        let (epsilon, mu_i, rs) = derived_constants(material, frequency_hz)?;
        let d = self.geometry.radius_m;
        let log_ratio = two_wire_log_ratio(self.geometry.ratio());

        PerUnitLength {
            r_per_m: 2.0 * rs / (PI * d),
            l_per_m: mu_i / PI * log_ratio,
            c_per_m: PI * epsilon / log_ratio,
            g_per_m: material.insulator_conductivity.map(|sigma| PI * sigma / log_ratio),
        }
        .checked()
    }
}
