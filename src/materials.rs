//! Material properties of the conductors and the insulating medium.

use std::f64::consts::PI;

use crate::constants::{COPPER_CONDUCTIVITY, VACUUM_PERMEABILITY, VACUUM_PERMITTIVITY};
use crate::errors::LineError;
use crate::math::Scalar;

/// Linear isotropic material parameters of a transmission line.
///
/// Permittivity and permeabilities are stored relative to vacuum; the
/// absolute values are derived on demand. When `insulator_conductivity` is
/// `Some`, the line models also report the shunt conductance `G`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaterialProperties {
    /// Relative permittivity εr of the insulator (1 for air).
    pub relative_permittivity: Scalar,
    /// Relative permeability μri of the insulator.
    pub insulator_permeability: Scalar,
    /// Relative permeability μrc of the conductors.
    pub conductor_permeability: Scalar,
    /// Conductor conductivity σc in S/m.
    pub conductor_conductivity: Scalar,
    /// Insulator conductivity σ in S/m, if dielectric loss is modelled.
    pub insulator_conductivity: Option<Scalar>,
}

impl MaterialProperties {
    /// Creates a lossless-dielectric material set.
    #[must_use]
    pub const fn new(
        relative_permittivity: Scalar,
        insulator_permeability: Scalar,
        conductor_permeability: Scalar,
        conductor_conductivity: Scalar,
    ) -> Self {
        Self {
            relative_permittivity,
            insulator_permeability,
            conductor_permeability,
            conductor_conductivity,
            insulator_conductivity: None,
        }
    }

    /// Copper conductors in air.
    #[must_use]
    pub const fn copper_in_air() -> Self {
        Self::new(1.0, 1.0, 1.0, COPPER_CONDUCTIVITY)
    }

    /// Returns a copy that models dielectric loss with conductivity `sigma` (S/m).
    #[must_use]
    pub const fn with_insulator_conductivity(mut self, sigma: Scalar) -> Self {
        self.insulator_conductivity = Some(sigma);
        self
    }

    /// Absolute permittivity ε = ε₀·εr in F/m.
    #[must_use]
    pub fn permittivity(&self) -> Scalar {
        VACUUM_PERMITTIVITY * self.relative_permittivity
    }

    /// Absolute permeability μi = μ₀·μri of the insulator in H/m.
    #[must_use]
    pub fn insulator_permeability_abs(&self) -> Scalar {
        VACUUM_PERMEABILITY * self.insulator_permeability
    }

    /// Absolute permeability μc = μ₀·μrc of the conductors in H/m.
    #[must_use]
    pub fn conductor_permeability_abs(&self) -> Scalar {
        VACUUM_PERMEABILITY * self.conductor_permeability
    }

    /// Skin-effect surface resistance `Rs = sqrt(π f μc / σc)` in ohms.
    ///
    /// Assumes a validated material and a non-negative frequency.
    #[must_use]
    pub fn surface_resistance(&self, frequency_hz: Scalar) -> Scalar {
        (PI * frequency_hz * self.conductor_permeability_abs() / self.conductor_conductivity).sqrt()
    }

    /// Skin depth `δ = 1 / sqrt(π f μc σc)` in meters; infinite at DC.
    #[must_use]
    pub fn skin_depth(&self, frequency_hz: Scalar) -> Scalar {
        1.0 / (PI * frequency_hz * self.conductor_permeability_abs() * self.conductor_conductivity)
            .sqrt()
    }

    /// Intrinsic impedance √(μi / ε) of the insulating medium in ohms.
    #[must_use]
    pub fn intrinsic_impedance(&self) -> Scalar {
        (self.insulator_permeability_abs() / self.permittivity()).sqrt()
    }

    /// Checks every value the line formulas depend on.
    pub fn validate(&self) -> Result<(), LineError> {
        let relative = [
            ("relative permittivity", self.relative_permittivity),
            ("insulator permeability", self.insulator_permeability),
            ("conductor permeability", self.conductor_permeability),
        ];
        for (name, value) in relative {
            if !value.is_finite() || value < 0.0 {
                return Err(LineError::InvalidMaterial(format!(
                    "{name} must be finite and non-negative, got {value}"
                )));
            }
        }
        let sigma_c = self.conductor_conductivity;
        if !sigma_c.is_finite() || sigma_c <= 0.0 {
            return Err(LineError::InvalidMaterial(format!(
                "conductor conductivity must be positive, got {sigma_c}"
            )));
        }
        if let Some(sigma) = self.insulator_conductivity {
            if !sigma.is_finite() || sigma < 0.0 {
                return Err(LineError::InvalidMaterial(format!(
                    "insulator conductivity must be finite and non-negative, got {sigma}"
                )));
            }
        }
        Ok(())
    }
}

impl Default for MaterialProperties {
    fn default() -> Self {
        Self::copper_in_air()
    }
}
