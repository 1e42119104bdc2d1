//! Sheet-density integration over the depth profile.

use cvprof_core::units::NM_TO_CM;
use cvprof_core::{ProfilePoint, SheetDensity, SweepDirection};

/// Integrate Ncv over Zcv for one leg's profile, yielding the sheet
/// carrier density in cm^-2.
///
/// Points are sorted by Zcv ascending before integrating; the leg's
/// natural sample order need not increase in depth once derivative
/// dropout has thinned it. Trapezoidal rule over the non-uniform spacing,
/// with the nm -> cm length factor folded into each segment.
///
/// Fewer than 2 points cannot span a segment: the result is a zero flagged
/// as degenerate, not a failure.
pub fn integrate_sheet_density(points: &[ProfilePoint], direction: SweepDirection) -> SheetDensity {
    if points.len() < 2 {
        log::warn!(
            "{} leg: {} profile point(s), sheet density degenerates to 0",
            direction,
            points.len()
        );
        return SheetDensity {
            value_cm2: 0.0,
            degenerate: true,
        };
    }

    let mut sorted: Vec<&ProfilePoint> = points.iter().collect();
    sorted.sort_by(|a, b| a.zcv_nm.total_cmp(&b.zcv_nm));

    let value_cm2 = sorted
        .windows(2)
        .map(|w| 0.5 * (w[0].ncv_cm3 + w[1].ncv_cm3) * (w[1].zcv_nm - w[0].zcv_nm) * NM_TO_CM)
        .sum();

    SheetDensity {
        value_cm2,
        degenerate: false,
    }
}
