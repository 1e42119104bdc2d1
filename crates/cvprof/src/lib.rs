//! # cvprof
//!
//! Carrier profiling from capacitance-voltage measurements.
//!
//! cvprof turns C-V sweep data measured on semiconductor test structures
//! (HEMT capacitor pads and similar) into a carrier-density-vs-depth
//! profile and a per-file sheet carrier density:
//!
//! - parse raw voltage/capacitance records, tolerant of instrument-export
//!   quirks (headers, decimal commas, Latin-1 encodings),
//! - split each sweep into forward and backward legs at the voltage
//!   extremum,
//! - estimate dV/dC by central differences, robust to flat runs and
//!   non-monotonic capacitance,
//! - apply the closed-form Ncv/Zcv transform,
//! - integrate Ncv over Zcv by the trapezoidal rule.
//!
//! ## Quick start
//!
//! ```rust
//! use cvprof::prelude::*;
//!
//! let config = MeasurementConfig::new(50.0, 9.0).unwrap();
//! let content = "\
//! Voltage(V) Capacitance(F)
//! 0.0 5.0e-12
//! 1.0 4.0e-12
//! 2.0 3.0e-12
//! 3.0 2.0e-12
//! 4.0 1.0e-12
//! ";
//!
//! let result = cvprof::process_content(content, None, &config).unwrap();
//! assert_eq!(result.forward.points.len(), 3);
//! assert!(result.forward.sheet_density.value_cm2 > 0.0);
//! ```
//!
//! ## Multi-file runs
//!
//! Each file's pipeline is a pure function of its content and the shared
//! read-only configuration, so [`process_files`] fans files out across
//! rayon workers; per-file failures are recorded without aborting the
//! run.

// Re-export the workspace crates
pub use cvprof_analysis as analysis;
pub use cvprof_batch as batch;
pub use cvprof_core as core;
pub use cvprof_parser as parser;

// ============================================================================
// Convenient re-exports from cvprof_core
// ============================================================================

pub use cvprof_core::{
    // Configuration
    MeasurementConfig,
    // Errors
    Error as CoreError,
    // Results
    FrequencyResultSet,
    LegProfile,
    ProfilePoint,
    SheetDensity,
    // Raw data model
    Sample,
    SweepDirection,
    SweepLeg,
};

// ============================================================================
// Convenient re-exports from cvprof_parser
// ============================================================================

pub use cvprof_parser::{
    decode_text,
    frequency_label,
    parse_samples,
    parse_samples_bytes,
    Error as ParseError,
};

// ============================================================================
// Convenient re-exports from cvprof_analysis
// ============================================================================

pub use cvprof_analysis::{
    estimate_dv_dc,
    integrate_sheet_density,
    process_content,
    process_file,
    split_sweep,
    transform_sample,
    Error as AnalysisError,
};

// ============================================================================
// Convenient re-exports from cvprof_batch
// ============================================================================

pub use cvprof_batch::{
    process_files,
    Error as RunError,
    FileOutcome,
    RunConfig,
    RunResult,
};

/// Prelude module containing commonly used types and functions.
///
/// ```rust
/// use cvprof::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        process_content, process_file, process_files, FrequencyResultSet, LegProfile,
        MeasurementConfig, ProfilePoint, RunConfig, RunResult, Sample, SheetDensity,
        SweepDirection,
    };
}
