//! Convenience re-exports for line calculations.

pub use crate::constants::*;
pub use crate::errors::{LineError, SweepError, TxLineError};
pub use crate::lines::{
    CoaxialGeometry, CoaxialLineModel, LineModel, LineParameters, OperatingPoint, PerUnitLength,
    TwoWireGeometry, TwoWireLineModel,
};
pub use crate::materials::MaterialProperties;
pub use crate::math::{CScalar, Scalar};
pub use crate::report::{render_console, write_console, write_csv, write_csv_file};
pub use crate::sweep::{linspace, LengthRange, SweepConfig, SweepRow, SweepRunner, SweepTable};
pub use crate::transmission::{TransmissionLine, RLGC};
