//! Measurement configuration shared by every file in a run.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::units::um_to_m;

/// Geometry and material parameters for one measurement run.
///
/// Supplied once per run and shared read-only by all processed files.
/// `interface_depth_nm` is carried for downstream visualization and is not
/// read by the numeric pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeasurementConfig {
    /// Capacitor diameter in micrometers.
    pub diameter_um: f64,
    /// Relative permittivity of the dielectric stack.
    pub epsilon_r: f64,
    /// Expected interface depth in nanometers.
    #[serde(default)]
    pub interface_depth_nm: f64,
}

impl MeasurementConfig {
    /// Create a configuration, validating that geometry and permittivity
    /// are physically meaningful.
    pub fn new(diameter_um: f64, epsilon_r: f64) -> Result<Self> {
        if !(diameter_um > 0.0) {
            return Err(Error::NonPositiveDiameter(diameter_um));
        }
        if !(epsilon_r > 0.0) {
            return Err(Error::NonPositivePermittivity(epsilon_r));
        }
        Ok(Self {
            diameter_um,
            epsilon_r,
            interface_depth_nm: 0.0,
        })
    }

    /// Set the expected interface depth marker.
    pub fn with_interface_depth(mut self, depth_nm: f64) -> Self {
        self.interface_depth_nm = depth_nm;
        self
    }

    /// Capacitor area A = pi * (d/2)^2 in m^2.
    pub fn area_m2(&self) -> f64 {
        let radius_m = um_to_m(self.diameter_um) / 2.0;
        std::f64::consts::PI * radius_m * radius_m
    }
}
