//! Length sweeps over a line model.

use std::path::PathBuf;

use crate::errors::SweepError;
use crate::lines::{LineModel, LineParameters, OperatingPoint};
use crate::materials::MaterialProperties;
use crate::math::{all_finite, Scalar};

/// Generates `n` linearly spaced samples in [start, stop].
#[must_use]
pub fn linspace(start: Scalar, stop: Scalar, n: usize) -> Vec<Scalar> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n as Scalar - 1.0);
            (0..n).map(|i| start + step * i as Scalar).collect()
        }
    }
}

/// Inclusive range of cable lengths `start, start + step, …, stop`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LengthRange {
    /// First length in meters.
    pub start_m: Scalar,
    /// Last length in meters (included when it lies on the grid).
    pub stop_m: Scalar,
    /// Increment in meters.
    pub step_m: Scalar,
}

impl LengthRange {
    /// Creates a range; call [`LengthRange::lengths`] to validate and expand it.
    #[must_use]
    pub const fn new(start_m: Scalar, stop_m: Scalar, step_m: Scalar) -> Self {
        Self {
            start_m,
            stop_m,
            step_m,
        }
    }

    /// Expands the range. Each sample is `start + i·step`, so no error accumulates.
    pub fn lengths(&self) -> Result<Vec<Scalar>, SweepError> {
        let Self {
            start_m,
            stop_m,
            step_m,
        } = *self;
        if !all_finite(&[start_m, stop_m, step_m]) {
            return Err(SweepError::InvalidRange(format!(
                "bounds must be finite, got {start_m}..={stop_m} step {step_m}"
            )));
        }
        if step_m <= 0.0 {
            return Err(SweepError::InvalidRange(format!(
                "step must be positive, got {step_m}"
            )));
        }
        if start_m < 0.0 || start_m > stop_m {
            return Err(SweepError::InvalidRange(format!(
                "need 0 <= start <= stop, got {start_m}..={stop_m}"
            )));
        }
        let spans = (stop_m - start_m) / step_m;
        let count = (spans + 1.0e-9).floor() as usize + 1;
        Ok((0..count).map(|i| start_m + step_m * i as Scalar).collect())
    }
}

impl Default for LengthRange {
    fn default() -> Self {
        Self::new(100.0, 5000.0, 100.0)
    }
}

/// Everything needed to run and export a sweep.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct SweepConfig {
    /// Lengths to evaluate.
    pub range: LengthRange,
    /// Excitation frequency in hertz.
    pub frequency_hz: Scalar,
    /// Destination of the CSV export, if any.
    pub csv_path: Option<PathBuf>,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            range: LengthRange::default(),
            frequency_hz: 60.0,
            csv_path: None,
        }
    }
}

/// One evaluated length.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepRow {
    /// Cable length in meters.
    pub length_m: Scalar,
    /// Line totals at that length.
    pub params: LineParameters,
}

/// Rows in ascending input order.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SweepTable {
    /// Evaluated rows.
    pub rows: Vec<SweepRow>,
}

impl SweepTable {
    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True if no rows were evaluated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// True when any row carries a conductance value.
    #[must_use]
    pub fn has_conductance(&self) -> bool {
        self.rows.iter().any(|row| row.params.g.is_some())
    }
}

/// Evaluates one model at many lengths with fixed material and frequency.
#[derive(Debug, Clone)]
pub struct SweepRunner<M> {
    model: M,
    material: MaterialProperties,
    frequency_hz: Scalar,
}

impl<M: LineModel> SweepRunner<M> {
    /// Creates a runner.
    #[must_use]
    pub const fn new(model: M, material: MaterialProperties, frequency_hz: Scalar) -> Self {
        Self {
            model,
            material,
            frequency_hz,
        }
    }

    /// Runs over an inclusive length range.
    pub fn run(&self, range: &LengthRange) -> Result<SweepTable, SweepError> {
        self.run_lengths(range.lengths()?)
    }

    /// Runs over arbitrary lengths, keeping their order. Aborts on the first failure.
    pub fn run_lengths<I>(&self, lengths: I) -> Result<SweepTable, SweepError>
    where
        I: IntoIterator<Item = Scalar>,
    {
        let base = OperatingPoint::new(self.frequency_hz, 0.0);
        let rows = lengths
            .into_iter()
            .map(|length_m| -> Result<SweepRow, SweepError> {
                let params = self.model.compute(&self.material, &base.with_length(length_m))?;
                tracing::trace!(length_m, "sweep row");
                Ok(SweepRow { length_m, params })
            })
            .collect::<Result<Vec<_>, _>>()?;
        tracing::debug!(
            kind = self.model.kind(),
            rows = rows.len(),
            frequency_hz = self.frequency_hz,
            "sweep finished"
        );
        Ok(SweepTable { rows })
    }
}
