//! Error types for cvprof-batch.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("no file in the run produced a usable result ({failed} failed)")]
    NoUsableFiles { failed: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
