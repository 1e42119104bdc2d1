//! Central-difference estimation of dV/dC along a sweep leg.

use cvprof_core::SweepLeg;

/// Fraction of the leg's capacitance span below which a central-difference
/// denominator is treated as singular and the sample is dropped.
pub const SINGULAR_DC_EPS_FRACTION: f64 = 1e-9;

/// A dV/dC estimate at one interior sample of a leg.
#[derive(Debug, Clone, Copy)]
pub struct DerivativeEstimate {
    /// Leg-local index of the sample the estimate is centered on.
    pub leg_index: usize,
    /// Estimated dV/dC in V/F, carrying the algebraic sign implied by the
    /// leg's direction.
    pub dv_dc: f64,
}

/// Estimate dV/dC at each interior sample of a leg.
///
/// Uses the immediate-neighbor central difference
/// `(V[i+1] - V[i-1]) / (C[i+1] - C[i-1])`. The first and last sample of
/// a leg lack a two-sided neighborhood and are always dropped. Samples
/// inside long flat runs and samples whose denominator falls below the
/// singularity threshold are dropped too; on noisy legs a dropped point is
/// expected, not an error.
///
/// No absolute value is taken here; the physics transform resolves the
/// sign.
pub fn estimate_dv_dc(leg: &SweepLeg) -> Vec<DerivativeEstimate> {
    if leg.len() < 3 {
        return Vec::new();
    }

    let eps = leg.capacitance_span() * SINGULAR_DC_EPS_FRACTION;
    let mut estimates = Vec::with_capacity(leg.len() - 2);

    for i in 1..leg.len() - 1 {
        if leg.is_excluded(i) {
            continue;
        }

        let dv = leg.samples[i + 1].voltage - leg.samples[i - 1].voltage;
        let dc = leg.samples[i + 1].capacitance - leg.samples[i - 1].capacitance;

        if dc.abs() <= eps {
            log::debug!(
                "{} leg: dropping sample {} (singular dC = {:e} F)",
                leg.direction,
                leg.sample_index(i),
                dc
            );
            continue;
        }

        estimates.push(DerivativeEstimate {
            leg_index: i,
            dv_dc: dv / dc,
        });
    }

    estimates
}
