//! Error types for cvprof-core.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("capacitor diameter must be positive, got {0} um")]
    NonPositiveDiameter(f64),

    #[error("relative permittivity must be positive, got {0}")]
    NonPositivePermittivity(f64),
}

pub type Result<T> = std::result::Result<T, Error>;
