//! Sweep-direction detection and leg splitting.

use cvprof_core::{Sample, SweepDirection, SweepLeg};

/// Fraction of the file's voltage span below which a voltage step counts
/// as flat. Device noise can freeze the voltage readback for consecutive
/// samples, so an exact-zero comparison is not enough.
pub const FLAT_VOLTAGE_EPS_FRACTION: f64 = 1e-6;

/// Maximal flat runs spanning more than this many samples are excluded
/// from derivative estimation.
pub const FLAT_RUN_THRESHOLD: usize = 2;

#[derive(Clone, Copy)]
enum Trend {
    Up,
    Down,
}

/// Split an ordered sample sequence into (forward leg, backward leg).
///
/// The split point is the global voltage extremum of the detected sweep
/// shape: the maximum for an up-then-down sweep, the minimum for a
/// down-then-up sweep. The extremum sample is shared, appearing as the
/// last sample of the first leg and the first sample of the second, so
/// neither leg is truncated at the turning point.
///
/// A file whose voltage never reverses direction yields the whole
/// sequence as the forward leg and an empty backward leg.
pub fn split_sweep(samples: &[Sample]) -> (SweepLeg, SweepLeg) {
    let eps = flat_eps(samples);

    let Some(trend) = initial_trend(samples, eps) else {
        return whole_as_forward(samples, eps);
    };

    let turn = match trend {
        Trend::Up => extremum_index(samples, |a, b| b > a),
        Trend::Down => extremum_index(samples, |a, b| b < a),
    };

    let reverses = samples[turn..].windows(2).any(|w| {
        let dv = w[1].voltage - w[0].voltage;
        match trend {
            Trend::Up => dv < -eps,
            Trend::Down => dv > eps,
        }
    });
    if !reverses {
        return whole_as_forward(samples, eps);
    }

    let excluded = flat_run_exclusions(samples, eps);

    let first = SweepLeg::new(
        match trend {
            Trend::Up => SweepDirection::Forward,
            Trend::Down => SweepDirection::Backward,
        },
        samples[..=turn].to_vec(),
        0,
    )
    .with_excluded(reindex(&excluded, 0, turn + 1));

    let second = SweepLeg::new(
        match trend {
            Trend::Up => SweepDirection::Backward,
            Trend::Down => SweepDirection::Forward,
        },
        samples[turn..].to_vec(),
        turn,
    )
    .with_excluded(reindex(&excluded, turn, samples.len()));

    match trend {
        Trend::Up => (first, second),
        Trend::Down => (second, first),
    }
}

/// Flat-step threshold for this file: a small fraction of the measured
/// voltage span. A zero span (constant voltage) makes every step flat.
fn flat_eps(samples: &[Sample]) -> f64 {
    let (min, max) = samples.iter().fold(
        (f64::INFINITY, f64::NEG_INFINITY),
        |(lo, hi), s| (lo.min(s.voltage), hi.max(s.voltage)),
    );
    if max > min {
        (max - min) * FLAT_VOLTAGE_EPS_FRACTION
    } else {
        0.0
    }
}

/// Sign of the first non-flat voltage step, or `None` when every step is
/// flat (or the file has fewer than 2 samples).
fn initial_trend(samples: &[Sample], eps: f64) -> Option<Trend> {
    for w in samples.windows(2) {
        let dv = w[1].voltage - w[0].voltage;
        if dv > eps {
            return Some(Trend::Up);
        }
        if dv < -eps {
            return Some(Trend::Down);
        }
    }
    None
}

/// Index of the first occurrence of the global extremum selected by `better`.
fn extremum_index(samples: &[Sample], better: impl Fn(f64, f64) -> bool) -> usize {
    let mut best = 0;
    for (i, s) in samples.iter().enumerate().skip(1) {
        if better(samples[best].voltage, s.voltage) {
            best = i;
        }
    }
    best
}

/// File-level indices of samples inside flat runs spanning more than
/// `FLAT_RUN_THRESHOLD` samples. Runs are maximal, so the result is sorted
/// and duplicate-free.
fn flat_run_exclusions(samples: &[Sample], eps: f64) -> Vec<usize> {
    let mut excluded = Vec::new();
    let mut run_start: Option<usize> = None;

    for i in 0..samples.len().saturating_sub(1) {
        let flat = (samples[i + 1].voltage - samples[i].voltage).abs() <= eps;
        match (flat, run_start) {
            (true, None) => run_start = Some(i),
            (false, Some(start)) => {
                push_run(&mut excluded, start, i);
                run_start = None;
            }
            _ => {}
        }
    }
    if let Some(start) = run_start {
        push_run(&mut excluded, start, samples.len() - 1);
    }

    excluded
}

/// Record samples `start..=end` if the run spans more than the threshold.
fn push_run(excluded: &mut Vec<usize>, start: usize, end: usize) {
    if end - start + 1 > FLAT_RUN_THRESHOLD {
        excluded.extend(start..=end);
    }
}

/// Leg-local exclusion indices for the sample range `[start, end)`.
fn reindex(excluded: &[usize], start: usize, end: usize) -> Vec<usize> {
    excluded
        .iter()
        .filter(|&&i| i >= start && i < end)
        .map(|&i| i - start)
        .collect()
}

fn whole_as_forward(samples: &[Sample], eps: f64) -> (SweepLeg, SweepLeg) {
    let excluded = flat_run_exclusions(samples, eps);
    let forward = SweepLeg::new(SweepDirection::Forward, samples.to_vec(), 0)
        .with_excluded(excluded);
    (forward, SweepLeg::empty(SweepDirection::Backward))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn samples(voltages: &[f64]) -> Vec<Sample> {
        voltages
            .iter()
            .enumerate()
            .map(|(i, &v)| Sample::new(v, 1e-12 * (i as f64 + 1.0)))
            .collect()
    }

    #[test]
    fn test_monotonic_increasing_is_single_forward_leg() {
        let s = samples(&[0.0, 1.0, 2.0, 3.0]);
        let (fwd, bwd) = split_sweep(&s);
        assert_eq!(fwd.len(), 4);
        assert_eq!(fwd.direction, SweepDirection::Forward);
        assert!(bwd.is_empty());
    }

    #[test]
    fn test_monotonic_decreasing_is_single_forward_leg() {
        let s = samples(&[3.0, 2.0, 1.0, 0.0]);
        let (fwd, bwd) = split_sweep(&s);
        assert_eq!(fwd.len(), 4);
        assert!(bwd.is_empty());
    }

    #[test]
    fn test_up_then_down_shares_turning_point() {
        let s = samples(&[0.0, 1.0, 2.0, 3.0, 2.0, 1.0]);
        let (fwd, bwd) = split_sweep(&s);

        assert_eq!(fwd.direction, SweepDirection::Forward);
        assert_eq!(bwd.direction, SweepDirection::Backward);
        assert_eq!(fwd.len(), 4);
        assert_eq!(bwd.len(), 3);

        // Sample at the voltage maximum (index 3) closes one leg and opens
        // the other
        assert_eq!(fwd.samples.last().unwrap().voltage, 3.0);
        assert_eq!(bwd.samples.first().unwrap().voltage, 3.0);
        assert_eq!(fwd.sample_index(fwd.len() - 1), 3);
        assert_eq!(bwd.sample_index(0), 3);
    }

    #[test]
    fn test_down_then_up_assigns_directions() {
        let s = samples(&[2.0, 1.0, 0.0, 1.0, 2.0]);
        let (fwd, bwd) = split_sweep(&s);

        assert_eq!(bwd.len(), 3);
        assert_eq!(bwd.direction, SweepDirection::Backward);
        assert_eq!(bwd.sample_index(0), 0);

        assert_eq!(fwd.len(), 3);
        assert_eq!(fwd.direction, SweepDirection::Forward);
        assert_eq!(fwd.sample_index(0), 2);
        assert_eq!(fwd.samples.first().unwrap().voltage, 0.0);
    }

    #[test]
    fn test_flat_steps_do_not_reverse_the_sweep() {
        // Frozen readback in the middle of a rising sweep
        let s = samples(&[0.0, 1.0, 1.0, 2.0, 3.0]);
        let (fwd, bwd) = split_sweep(&s);
        assert_eq!(fwd.len(), 5);
        assert!(bwd.is_empty());
    }

    #[test]
    fn test_long_flat_run_marked_excluded() {
        // Samples 1..=3 hold the same voltage: a 3-sample run, above the
        // threshold of 2
        let s = samples(&[0.0, 1.0, 1.0, 1.0, 2.0, 3.0]);
        let (fwd, _) = split_sweep(&s);
        assert_eq!(fwd.len(), 6);
        assert!(!fwd.is_excluded(0));
        assert!(fwd.is_excluded(1));
        assert!(fwd.is_excluded(2));
        assert!(fwd.is_excluded(3));
        assert!(!fwd.is_excluded(4));
    }

    #[test]
    fn test_two_sample_flat_pair_not_excluded() {
        let s = samples(&[0.0, 1.0, 1.0, 2.0]);
        let (fwd, _) = split_sweep(&s);
        assert!(!fwd.is_excluded(1));
        assert!(!fwd.is_excluded(2));
    }

    #[test]
    fn test_constant_voltage_file() {
        let s = samples(&[1.0, 1.0, 1.0, 1.0]);
        let (fwd, bwd) = split_sweep(&s);
        assert_eq!(fwd.len(), 4);
        assert!(bwd.is_empty());
        // The whole file is one long flat run
        assert!((0..4).all(|i| fwd.is_excluded(i)));
    }

    #[test]
    fn test_short_input() {
        let s = samples(&[1.0]);
        let (fwd, bwd) = split_sweep(&s);
        assert_eq!(fwd.len(), 1);
        assert!(bwd.is_empty());

        let (fwd, bwd) = split_sweep(&[]);
        assert!(fwd.is_empty());
        assert!(bwd.is_empty());
    }
}
