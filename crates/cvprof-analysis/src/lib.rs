//! Analysis pipeline for C-V carrier profiling.
//!
//! Composes the numeric stages that turn an ordered sample sequence into a
//! per-file result set:
//!
//! 1. split the sweep into forward and backward legs at the voltage
//!    extremum,
//! 2. estimate dV/dC at each interior sample by central differences,
//! 3. apply the closed-form transform to carrier density and depth,
//! 4. integrate the profile into a sheet carrier density.
//!
//! Each stage tolerates the realities of noisy experimental data: flat
//! voltage runs, non-monotonic capacitance, and physically invalid samples
//! are dropped locally without failing the file.

pub mod derivative;
pub mod error;
pub mod integrate;
pub mod pipeline;
pub mod split;
pub mod transform;

pub use derivative::{estimate_dv_dc, DerivativeEstimate};
pub use error::{Error, Result};
pub use integrate::integrate_sheet_density;
pub use pipeline::{process_content, process_file};
pub use split::split_sweep;
pub use transform::transform_sample;
