//! Error types for cvprof-analysis.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("parse error: {0}")]
    Parser(#[from] cvprof_parser::Error),

    #[error("sample {sample_index}: capacitance must be positive, got {capacitance:e} F")]
    NonPositiveCapacitance {
        sample_index: usize,
        capacitance: f64,
    },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
