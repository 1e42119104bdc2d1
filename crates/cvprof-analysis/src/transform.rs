//! Closed-form transform from (C, dV/dC) to carrier density and depth.

use cvprof_core::constants::{ELEMENTARY_CHARGE, EPSILON_0};
use cvprof_core::units::{M_TO_NM, PER_M3_TO_PER_CM3};
use cvprof_core::{MeasurementConfig, ProfilePoint, Sample};

use crate::error::{Error, Result};

/// Map one sample and its dV/dC estimate to a profile point.
///
/// ```text
/// Zcv = e0 * er * A / C                      [m]   -> nm
/// Ncv = C^3 / (e0 * er * A^2 * q) * dV/dC    [m^-3] -> cm^-3
/// ```
///
/// The signed derivative is applied first and the absolute value taken
/// last, so the reported density is a non-negative magnitude. A
/// non-positive capacitance is undefined for both formulas and returns
/// `Error::NonPositiveCapacitance`; callers drop the point and continue.
pub fn transform_sample(
    sample: &Sample,
    dv_dc: f64,
    sample_index: usize,
    config: &MeasurementConfig,
) -> Result<ProfilePoint> {
    let c = sample.capacitance;
    if c <= 0.0 {
        return Err(Error::NonPositiveCapacitance {
            sample_index,
            capacitance: c,
        });
    }

    let eps = EPSILON_0 * config.epsilon_r;
    let area = config.area_m2();

    let zcv_m = eps * area / c;
    let ncv_m3 = c.powi(3) / (eps * area * area * ELEMENTARY_CHARGE) * dv_dc;

    Ok(ProfilePoint {
        ncv_cm3: (ncv_m3 * PER_M3_TO_PER_CM3).abs(),
        zcv_nm: zcv_m * M_TO_NM,
        sample_index,
    })
}
