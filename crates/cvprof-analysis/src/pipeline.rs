//! Per-file analysis pipeline.

use std::path::Path;

use cvprof_core::{FrequencyResultSet, LegProfile, MeasurementConfig, SweepLeg};
use cvprof_parser::{decode_text, frequency_label, parse_samples};

use crate::derivative::estimate_dv_dc;
use crate::error::Result;
use crate::integrate::integrate_sheet_density;
use crate::split::split_sweep;
use crate::transform::transform_sample;

/// Process the text content of one measurement file into a result set.
///
/// Runs parse -> split -> {derive -> transform -> integrate} per leg. The
/// result is all-or-nothing: parse failures and empty files yield `Err`
/// and no partial aggregate. Sample-level anomalies (singular dC steps,
/// non-positive capacitance) drop the offending point and continue.
pub fn process_content(
    content: &str,
    label: Option<String>,
    config: &MeasurementConfig,
) -> Result<FrequencyResultSet> {
    let samples = parse_samples(content)?;
    let (forward, backward) = split_sweep(&samples);

    Ok(FrequencyResultSet {
        label,
        forward: profile_leg(&forward, config),
        backward: profile_leg(&backward, config),
    })
}

/// Read, decode, and process one measurement file from disk.
///
/// The frequency label is inferred from the file name; the content goes
/// through the UTF-8/Latin-1 decode before parsing.
pub fn process_file(path: &Path, config: &MeasurementConfig) -> Result<FrequencyResultSet> {
    let bytes = std::fs::read(path)?;
    let label = path
        .file_name()
        .and_then(|n| n.to_str())
        .and_then(frequency_label);
    process_content(&decode_text(&bytes), label, config)
}

/// Derive, transform, and integrate one leg. An empty or too-short leg
/// produces an empty profile with a degenerate sheet density.
fn profile_leg(leg: &SweepLeg, config: &MeasurementConfig) -> LegProfile {
    let mut points = Vec::new();

    for estimate in estimate_dv_dc(leg) {
        let i = estimate.leg_index;
        let sample = &leg.samples[i];
        match transform_sample(sample, estimate.dv_dc, leg.sample_index(i), config) {
            Ok(point) => points.push(point),
            Err(err) => log::debug!("{} leg: dropping point ({err})", leg.direction),
        }
    }

    let sheet_density = integrate_sheet_density(&points, leg.direction);

    LegProfile {
        direction: leg.direction,
        points,
        sheet_density,
    }
}
