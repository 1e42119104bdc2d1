//! Error types for cvprof-parser.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("parse error at line {line}: {message}")]
    ParseError { line: usize, message: String },

    #[error("no usable samples in file")]
    EmptyFile,
}

pub type Result<T> = std::result::Result<T, Error>;
