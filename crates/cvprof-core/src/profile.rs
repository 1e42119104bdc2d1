//! Derived carrier-density profile types and the per-file result aggregate.

use serde::Serialize;

use crate::sample::SweepDirection;

/// One point of the carrier-density-vs-depth profile.
///
/// Owned by the leg that produced it; never mutated after creation.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ProfilePoint {
    /// Apparent carrier density in cm^-3 (non-negative magnitude).
    pub ncv_cm3: f64,
    /// Apparent depth in nanometers.
    pub zcv_nm: f64,
    /// File-level acquisition index of the source sample.
    pub sample_index: usize,
}

/// Integrated sheet carrier density for one leg.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SheetDensity {
    /// Areal density in cm^-2.
    pub value_cm2: f64,
    /// Set when the leg had fewer than 2 usable profile points and the
    /// value is a placeholder zero.
    pub degenerate: bool,
}

/// Profile and sheet density for one sweep leg.
#[derive(Debug, Clone, Serialize)]
pub struct LegProfile {
    /// Direction of the source leg.
    pub direction: SweepDirection,
    /// Profile points in the order they were produced.
    pub points: Vec<ProfilePoint>,
    /// Integrated sheet carrier density.
    pub sheet_density: SheetDensity,
}

impl LegProfile {
    /// An empty profile with a degenerate (zero) sheet density.
    pub fn empty(direction: SweepDirection) -> Self {
        Self {
            direction,
            points: Vec::new(),
            sheet_density: SheetDensity {
                value_cm2: 0.0,
                degenerate: true,
            },
        }
    }
}

/// Complete result for one measurement file.
///
/// Construction is all-or-nothing: a file either yields a full result set
/// or a per-file error, never a partial aggregate.
#[derive(Debug, Clone, Serialize)]
pub struct FrequencyResultSet {
    /// Measurement frequency label inferred from the file name, when
    /// recognizable.
    pub label: Option<String>,
    /// Increasing-voltage leg profile.
    pub forward: LegProfile,
    /// Decreasing-voltage leg profile.
    pub backward: LegProfile,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_leg_profile_is_degenerate() {
        let profile = LegProfile::empty(SweepDirection::Backward);
        assert!(profile.points.is_empty());
        assert_eq!(profile.sheet_density.value_cm2, 0.0);
        assert!(profile.sheet_density.degenerate);
    }
}
