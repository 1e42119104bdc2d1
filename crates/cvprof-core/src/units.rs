//! Unit conversions used across the profiling pipeline.
//!
//! Measured data comes in SI base units (volts, farads, meters) while the
//! reported profile uses the conventional semiconductor units: depth in
//! nanometers, volume density in cm^-3, areal density in cm^-2.

/// Meters to nanometers.
pub const M_TO_NM: f64 = 1e9;

/// Micrometers to meters.
pub const UM_TO_M: f64 = 1e-6;

/// Volume density m^-3 to cm^-3.
pub const PER_M3_TO_PER_CM3: f64 = 1e-6;

/// Nanometers to centimeters (length factor inside the depth integral).
pub const NM_TO_CM: f64 = 1e-7;

/// Convert a length in micrometers to meters.
pub fn um_to_m(um: f64) -> f64 {
    um * UM_TO_M
}

/// Convert a length in meters to nanometers.
pub fn m_to_nm(m: f64) -> f64 {
    m * M_TO_NM
}
