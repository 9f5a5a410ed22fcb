//! Physical constants used by the line models.
//!
//! ## Accuracy
//!
//! The vacuum permittivity is the rounded engineering value `8.854e-12 F/m`
//! and the vacuum permeability is the classical `4π × 10⁻⁷ H/m`. Both differ
//! from the CODATA 2018 values in the fifth significant figure or beyond,
//! which is well below the accuracy of the closed-form line formulas.
//! Reference tables for 14 AWG two-wire lines are computed with these values.

use std::f64::consts::PI;

use crate::math::Scalar;

/// Vacuum permittivity ε₀ in farads per meter (F/m).
pub const VACUUM_PERMITTIVITY: Scalar = 8.854e-12;
/// Vacuum permeability μ₀ in henries per meter (H/m), `4π × 10⁻⁷`.
pub const VACUUM_PERMEABILITY: Scalar = 4.0 * PI * 1.0e-7;
/// Conductivity of annealed copper in siemens per meter (S/m).
pub const COPPER_CONDUCTIVITY: Scalar = 5.8e7;

/// Returns the angular frequency corresponding to a linear frequency `hz`.
#[inline]
#[must_use]
pub fn angular_frequency(hz: Scalar) -> Scalar {
    2.0 * PI * hz
}
