//! Shared numerical primitives.

/// Primary scalar type used across the crate.
pub type Scalar = f64;
/// Primary complex scalar type used for phasors and impedances.
pub type CScalar = num_complex::Complex<Scalar>;

/// Natural log of the spacing ratio of a two-wire line, `ln(k + sqrt(k² - 1))`.
///
/// This is `arccosh(k)` written out in closed form. Callers guarantee `k ≥ 1`.
/// Above `1e8` the ratio is factored as `ln k + ln(1 + sqrt(1 - 1/k²))` so
/// `k²` never overflows.
#[must_use]
pub fn two_wire_log_ratio(k: Scalar) -> Scalar {
    if k < 1.0e8 {
        (k + (k * k - 1.0).sqrt()).ln()
    } else {
        k.ln() + (1.0 + (1.0 - 1.0 / (k * k)).sqrt()).ln()
    }
}

/// Returns true when every value is finite.
#[must_use]
pub fn all_finite(values: &[Scalar]) -> bool {
    values.iter().all(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn log_ratio_matches_acosh() {
        for k in [1.001, 2.0, 24.6, 1.0e4] {
            assert_relative_eq!(two_wire_log_ratio(k), k.acosh(), max_relative = 1.0e-12);
        }
    }

    #[test]
    fn log_ratio_stays_finite_for_huge_ratios() {
        for k in [1.0e8, 1.0e154, 1.0e160, Scalar::MAX] {
            let v = two_wire_log_ratio(k);
            assert!(v.is_finite(), "k = {k}");
            assert_relative_eq!(v, k.ln() + std::f64::consts::LN_2, max_relative = 1.0e-12);
        }
    }

    #[test]
    fn log_ratio_vanishes_at_unity() {
        assert_eq!(two_wire_log_ratio(1.0), 0.0);
    }

    #[test]
    fn all_finite_rejects_nan() {
        assert!(all_finite(&[1.0, 2.0]));
        assert!(!all_finite(&[1.0, Scalar::NAN]));
        assert!(!all_finite(&[Scalar::INFINITY]));
    }
}
