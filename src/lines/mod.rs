//! Closed-form line models and the records they produce.

/// Coaxial line model.
pub mod coaxial;
/// Parallel two-conductor line model.
pub mod two_wire;

pub use coaxial::{CoaxialGeometry, CoaxialLineModel};
pub use two_wire::{TwoWireGeometry, TwoWireLineModel};

use crate::errors::LineError;
use crate::materials::MaterialProperties;
use crate::math::{all_finite, Scalar};

/// Excitation frequency and physical length of a line.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OperatingPoint {
    /// Signal frequency in hertz.
    pub frequency_hz: Scalar,
    /// Cable length in meters.
    pub length_m: Scalar,
}

impl OperatingPoint {
    /// Creates an operating point.
    #[must_use]
    pub const fn new(frequency_hz: Scalar, length_m: Scalar) -> Self {
        Self {
            frequency_hz,
            length_m,
        }
    }

    /// Same frequency, different length.
    #[must_use]
    pub const fn with_length(self, length_m: Scalar) -> Self {
        Self::new(self.frequency_hz, length_m)
    }

    /// Rejects negative or non-finite frequency and length.
    pub fn validate(&self) -> Result<(), LineError> {
        validate_frequency(self.frequency_hz)?;
        validate_length(self.length_m)
    }
}

fn validate_length(length_m: Scalar) -> Result<(), LineError> {
    if !length_m.is_finite() || length_m < 0.0 {
        return Err(LineError::InvalidMaterial(format!(
            "length must be finite and non-negative, got {length_m}"
        )));
    }
    Ok(())
}

pub(crate) fn validate_frequency(frequency_hz: Scalar) -> Result<(), LineError> {
    if !frequency_hz.is_finite() || frequency_hz < 0.0 {
        return Err(LineError::InvalidMaterial(format!(
            "frequency must be finite and non-negative, got {frequency_hz}"
        )));
    }
    Ok(())
}

/// Distributed parameters per meter of line.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerUnitLength {
    /// Series resistance per meter (Ω/m).
    pub r_per_m: Scalar,
    /// Series inductance per meter (H/m).
    pub l_per_m: Scalar,
    /// Shunt capacitance per meter (F/m).
    pub c_per_m: Scalar,
    /// Shunt conductance per meter (S/m), when dielectric loss is modelled.
    pub g_per_m: Option<Scalar>,
}

impl PerUnitLength {
    /// Passes through finite values. Overflow here comes from extreme
    /// dimensions, so it is reported as a geometry error.
    pub(crate) fn checked(self) -> Result<Self, LineError> {
        let g = self.g_per_m.unwrap_or(0.0);
        if !all_finite(&[self.r_per_m, self.l_per_m, self.c_per_m, g]) {
            return Err(LineError::InvalidGeometry(format!(
                "dimensions give non-finite per-meter values: {self:?}"
            )));
        }
        Ok(self)
    }

    /// Totals for a line of `length_m` meters.
    #[must_use]
    pub fn scaled(&self, length_m: Scalar) -> LineParameters {
        LineParameters {
            r: self.r_per_m * length_m,
            l: self.l_per_m * length_m,
            c: self.c_per_m * length_m,
            g: self.g_per_m.map(|g| g * length_m),
        }
    }
}

/// Absolute R/L/C/G totals of a line, already multiplied by its length.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineParameters {
    /// Resistance in ohms.
    pub r: Scalar,
    /// Inductance in henries.
    pub l: Scalar,
    /// Capacitance in farads.
    pub c: Scalar,
    /// Conductance in siemens; `None` when the insulator is treated as lossless.
    pub g: Option<Scalar>,
}

impl LineParameters {
    /// True when every present field is finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        all_finite(&[self.r, self.l, self.c, self.g.unwrap_or(0.0)])
    }

    /// Per-meter values of a line that was `length_m` long.
    ///
    /// Returns `None` for a zero-length line.
    #[must_use]
    pub fn per_unit_length(&self, length_m: Scalar) -> Option<PerUnitLength> {
        if length_m <= 0.0 || !length_m.is_finite() {
            return None;
        }
        Some(PerUnitLength {
            r_per_m: self.r / length_m,
            l_per_m: self.l / length_m,
            c_per_m: self.c / length_m,
            g_per_m: self.g.map(|g| g / length_m),
        })
    }
}

/// A line cross-section that can be evaluated at an operating point.
pub trait LineModel {
    /// Short human-readable name of the line kind.
    fn kind(&self) -> &'static str;

    /// Checks the cross-section dimensions.
    fn validate_geometry(&self) -> Result<(), LineError>;

    /// Per-meter parameters at `frequency_hz`.
    ///
    /// This is the checked entry point: implementations validate geometry
    /// first, then material and frequency, and never return non-finite values.
    fn per_unit_length(
        &self,
        material: &MaterialProperties,
        frequency_hz: Scalar,
    ) -> Result<PerUnitLength, LineError>;

    /// Total parameters at the given operating point.
    ///
    /// Length is checked after the per-meter values, and totals that
    /// overflow are rejected.
    fn compute(
        &self,
        material: &MaterialProperties,
        operating_point: &OperatingPoint,
    ) -> Result<LineParameters, LineError> {
        let per_m = self.per_unit_length(material, operating_point.frequency_hz)?;
        validate_length(operating_point.length_m)?;
        let params = per_m.scaled(operating_point.length_m);
        if !params.is_finite() {
            return Err(LineError::InvalidMaterial(format!(
                "length {} m overflows the line totals",
                operating_point.length_m
            )));
        }
        tracing::debug!(
            kind = self.kind(),
            length_m = operating_point.length_m,
            frequency_hz = operating_point.frequency_hz,
            r = params.r,
            l = params.l,
            c = params.c,
            g = ?params.g,
            "evaluated line model"
        );
        Ok(params)
    }
}

impl<M: LineModel + ?Sized> LineModel for &M {
    fn kind(&self) -> &'static str {
        (**self).kind()
    }

    fn validate_geometry(&self) -> Result<(), LineError> {
        (**self).validate_geometry()
    }

    fn per_unit_length(
        &self,
        material: &MaterialProperties,
        frequency_hz: Scalar,
    ) -> Result<PerUnitLength, LineError> {
        (**self).per_unit_length(material, frequency_hz)
    }
}

/// Checks material and frequency and returns `(ε, μi, Rs)`.
pub(crate) fn derived_constants(
    material: &MaterialProperties,
    frequency_hz: Scalar,
) -> Result<(Scalar, Scalar, Scalar), LineError> {
    material.validate()?;
    validate_frequency(frequency_hz)?;
    let derived = (
        material.permittivity(),
        material.insulator_permeability_abs(),
        material.surface_resistance(frequency_hz),
    );
    if !all_finite(&[derived.0, derived.1, derived.2]) {
        return Err(LineError::InvalidMaterial(format!(
            "material at {frequency_hz} Hz gives non-finite ε, μi or Rs: {derived:?}"
        )));
    }
    Ok(derived)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn scaling_keeps_missing_conductance_missing() {
        let per_m = PerUnitLength {
            r_per_m: 1.0,
            l_per_m: 2.0e-6,
            c_per_m: 3.0e-12,
            g_per_m: None,
        };
        let p = per_m.scaled(10.0);
        assert_relative_eq!(p.r, 10.0);
        assert_relative_eq!(p.l, 2.0e-5);
        assert_relative_eq!(p.c, 3.0e-11);
        assert_eq!(p.g, None);
    }

    #[test]
    fn per_unit_length_inverts_scaling() {
        let per_m = PerUnitLength {
            r_per_m: 0.5,
            l_per_m: 1.0e-6,
            c_per_m: 1.0e-11,
            g_per_m: Some(1.0e-9),
        };
        let back = per_m.scaled(250.0).per_unit_length(250.0).unwrap();
        assert_relative_eq!(back.r_per_m, 0.5, max_relative = 1.0e-12);
        assert_relative_eq!(back.g_per_m.unwrap(), 1.0e-9, max_relative = 1.0e-12);
        assert!(per_m.scaled(0.0).per_unit_length(0.0).is_none());
    }

    #[test]
    fn overflowing_per_meter_values_are_a_geometry_error() {
        let per_m = PerUnitLength {
            r_per_m: Scalar::INFINITY,
            l_per_m: 1.0e-6,
            c_per_m: 1.0e-11,
            g_per_m: None,
        };
        assert!(per_m.checked().unwrap_err().is_geometry());
    }

    #[test]
    fn missing_conductance_counts_as_finite() {
        let p = LineParameters {
            r: 1.0,
            l: 1.0e-3,
            c: 1.0e-8,
            g: None,
        };
        assert!(p.is_finite());
        assert!(!LineParameters { g: Some(Scalar::NAN), ..p }.is_finite());
    }

    #[test]
    fn negative_length_is_a_material_error() {
        let err = OperatingPoint::new(60.0, -1.0).validate().unwrap_err();
        assert!(err.is_material());
    }

    #[test]
    fn negative_frequency_is_a_material_error() {
        let err = OperatingPoint::new(-60.0, 1.0).validate().unwrap_err();
        assert!(err.is_material());
    }
}
