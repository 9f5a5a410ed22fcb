//! Distributed-line view of computed parameters.

use crate::lines::{LineParameters, PerUnitLength};
use crate::math::{CScalar, Scalar};

/// Distributed RLGC parameters per unit length, with `G = 0` when not modelled.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RLGC {
    /// Series resistance per meter (Ω/m).
    pub r_per_m: Scalar,
    /// Series inductance per meter (H/m).
    pub l_per_m: Scalar,
    /// Shunt conductance per meter (S/m).
    pub g_per_m: Scalar,
    /// Shunt capacitance per meter (F/m).
    pub c_per_m: Scalar,
}

impl From<PerUnitLength> for RLGC {
    fn from(p: PerUnitLength) -> Self {
        Self {
            r_per_m: p.r_per_m,
            l_per_m: p.l_per_m,
            g_per_m: p.g_per_m.unwrap_or(0.0),
            c_per_m: p.c_per_m,
        }
    }
}

/// Uniform transmission line of known length.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransmissionLine {
    /// Physical length in meters.
    pub length_m: Scalar,
    /// Distributed parameters.
    pub rlgc: RLGC,
}

impl TransmissionLine {
    /// Line of length `length_m` with the given RLGC per-unit parameters.
    #[must_use]
    pub const fn new(length_m: Scalar, rlgc: RLGC) -> Self {
        Self { length_m, rlgc }
    }

    /// Recovers the distributed line behind a set of totals.
    ///
    /// Returns `None` when `length_m` is not positive.
    #[must_use]
    pub fn from_parameters(params: &LineParameters, length_m: Scalar) -> Option<Self> {
        params
            .per_unit_length(length_m)
            .map(|per_m| Self::new(length_m, per_m.into()))
    }

    fn series(&self, omega: Scalar) -> CScalar {
        CScalar::new(self.rlgc.r_per_m, omega * self.rlgc.l_per_m)
    }

    fn shunt(&self, omega: Scalar) -> CScalar {
        CScalar::new(self.rlgc.g_per_m, omega * self.rlgc.c_per_m)
    }

    /// High-frequency characteristic impedance `sqrt(L'/C')` in ohms.
    #[must_use]
    pub fn lossless_impedance(&self) -> Scalar {
        (self.rlgc.l_per_m / self.rlgc.c_per_m).sqrt()
    }

    /// Characteristic impedance `sqrt((R' + jωL')/(G' + jωC'))`.
    ///
    /// Infinite when the shunt admittance vanishes (DC with `G = 0`).
    #[must_use]
    pub fn characteristic_impedance(&self, omega: Scalar) -> CScalar {
        let shunt = self.shunt(omega);
        if shunt.norm() == 0.0 {
            return CScalar::new(Scalar::INFINITY, 0.0);
        }
        (self.series(omega) / shunt).sqrt()
    }

    /// Propagation constant `γ = α + jβ = sqrt((R' + jωL')(G' + jωC'))` per meter.
    #[must_use]
    pub fn propagation_constant(&self, omega: Scalar) -> CScalar {
        (self.series(omega) * self.shunt(omega)).sqrt()
    }

    /// Phase velocity `ω/β` in m/s; `None` at DC.
    #[must_use]
    pub fn phase_velocity(&self, omega: Scalar) -> Option<Scalar> {
        let beta = self.propagation_constant(omega).im;
        (omega > 0.0 && beta > 0.0).then(|| omega / beta)
    }

    /// Total attenuation over the whole length in decibels.
    #[must_use]
    pub fn attenuation_db(&self, omega: Scalar) -> Scalar {
        20.0 * std::f64::consts::LOG10_E * self.propagation_constant(omega).re * self.length_m
    }
}
