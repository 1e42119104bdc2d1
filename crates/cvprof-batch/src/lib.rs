//! Parallel multi-file run driver for C-V carrier profiling.
//!
//! Maps a set of measurement files through the per-file analysis
//! pipeline. Each file's pipeline is a pure computation over that file's
//! content plus the shared read-only configuration, so files are processed
//! on rayon's thread pool with no coordination; a failure in one file
//! never cancels or corrupts another.

pub mod error;
pub mod run;

pub use error::{Error, Result};
pub use run::{process_files, FileOutcome, RunConfig, RunResult};
