//! Coaxial line.

use std::f64::consts::PI;

use crate::errors::LineError;
use crate::materials::MaterialProperties;
use crate::math::{all_finite, Scalar};

use super::{derived_constants, LineModel, PerUnitLength};

/// Cross-section of a coaxial line.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoaxialGeometry {
    /// Inner conductor radius `a` in meters.
    pub inner_radius_m: Scalar,
    /// Outer conductor radius `b` in meters.
    pub outer_radius_m: Scalar,
}

impl CoaxialGeometry {
    /// Creates a geometry from inner and outer radii.
    #[must_use]
    pub const fn new(inner_radius_m: Scalar, outer_radius_m: Scalar) -> Self {
        Self {
            inner_radius_m,
            outer_radius_m,
        }
    }

    /// Radius ratio `b/a`.
    #[must_use]
    pub fn ratio(&self) -> Scalar {
        self.outer_radius_m / self.inner_radius_m
    }
}

/// Coaxial line model: `R' = (Rs/2π)(1/a + 1/b)`, `L' = (μi/2π)·ln(b/a)`,
/// `C' = 2πε/ln(b/a)`, `G' = 2πσ/ln(b/a)`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoaxialLineModel {
    geometry: CoaxialGeometry,
}

impl CoaxialLineModel {
    /// Wraps a cross-section.
    #[must_use]
    pub const fn new(geometry: CoaxialGeometry) -> Self {
        Self { geometry }
    }

    /// The cross-section this model evaluates.
    #[must_use]
    pub const fn geometry(&self) -> &CoaxialGeometry {
        &self.geometry
    }
}

impl LineModel for CoaxialLineModel {
    fn kind(&self) -> &'static str {
        "coaxial"
    }

    fn validate_geometry(&self) -> Result<(), LineError> {
        let CoaxialGeometry {
            inner_radius_m: a,
            outer_radius_m: b,
        } = self.geometry;
        if !all_finite(&[a, b]) {
            return Err(LineError::InvalidGeometry(format!(
                "radii must be finite, got a = {a}, b = {b}"
            )));
        }
        if a <= 0.0 {
            return Err(LineError::InvalidGeometry(format!(
                "inner radius must be positive, got {a}"
            )));
        }
        let ratio = b / a;
        if !ratio.is_finite() || ratio <= 1.0 {
            return Err(LineError::InvalidGeometry(format!(
                "radius ratio b/a must exceed 1, got {ratio}"
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
        let CoaxialGeometry {
            inner_radius_m: a,
            outer_radius_m: b,
        } = self.geometry;
        let log_ratio = (b / a).ln();

        PerUnitLength {
            r_per_m: rs / (2.0 * PI) * (1.0 / a + 1.0 / b),
            l_per_m: mu_i / (2.0 * PI) * log_ratio,
            c_per_m: 2.0 * PI * epsilon / log_ratio,
            g_per_m: material
                .insulator_conductivity
                .map(|sigma| 2.0 * PI * sigma / log_ratio),
        }
        .checked()
    }
}
