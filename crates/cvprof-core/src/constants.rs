//! Physical constants used by the C-V transform.

/// Vacuum permittivity (F/m).
pub const EPSILON_0: f64 = 8.854e-12;

/// Elementary charge (C).
pub const ELEMENTARY_CHARGE: f64 = 1.602e-19;
