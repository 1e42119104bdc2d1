//! Sample parsing for delimited C-V measurement records.

use cvprof_core::Sample;

use crate::encoding::decode_text;
use crate::error::{Error, Result};

/// Parse the text content of one measurement file into ordered samples.
///
/// Each data-bearing line must hold exactly two whitespace-separated
/// numeric fields: voltage then capacitance. Lines whose first field is
/// not numeric are headers and are skipped. Decimal commas are normalized
/// to points before parsing, so `1,5e-12` and `1.5e-12` read the same.
/// Rows carrying a non-finite reading are dropped.
///
/// Returns `Error::ParseError` for a data line with the wrong field count
/// or an unparsable numeric token, `Error::EmptyFile` when no valid
/// samples are recovered.
pub fn parse_samples(content: &str) -> Result<Vec<Sample>> {
    let mut samples = Vec::new();

    for (idx, raw) in content.lines().enumerate() {
        let line = idx + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            continue;
        }

        let normalized = trimmed.replace(',', ".");
        let fields: Vec<&str> = normalized.split_whitespace().collect();

        // Header/metadata line: first field is not a number
        let Ok(voltage) = fields[0].parse::<f64>() else {
            continue;
        };

        if fields.len() != 2 {
            return Err(Error::ParseError {
                line,
                message: format!("expected 2 fields (voltage, capacitance), found {}", fields.len()),
            });
        }

        let capacitance: f64 = fields[1].parse().map_err(|_| Error::ParseError {
            line,
            message: format!("invalid capacitance value: '{}'", fields[1]),
        })?;

        if !voltage.is_finite() || !capacitance.is_finite() {
            log::debug!("line {line}: dropping row with non-finite reading");
            continue;
        }

        samples.push(Sample::new(voltage, capacitance));
    }

    if samples.is_empty() {
        return Err(Error::EmptyFile);
    }

    Ok(samples)
}

/// Parse raw file bytes, decoding UTF-8 with a Latin-1 fallback first.
pub fn parse_samples_bytes(bytes: &[u8]) -> Result<Vec<Sample>> {
    parse_samples(&decode_text(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_column_data() {
        let samples = parse_samples("0.0 5.0e-12\n0.5 4.5e-12\n1.0 4.0e-12\n").unwrap();
        assert_eq!(samples.len(), 3);
        assert_eq!(samples[1].voltage, 0.5);
        assert_eq!(samples[1].capacitance, 4.5e-12);
    }

    #[test]
    fn test_headers_skipped() {
        let content = "C-V sweep, device 3\nVoltage(V) Capacitance(F)\n\n0.0 5e-12\n1.0 4e-12\n";
        let samples = parse_samples(content).unwrap();
        assert_eq!(samples.len(), 2);
    }

    #[test]
    fn test_acquisition_order_preserved() {
        let samples = parse_samples("1.0 1e-12\n0.0 2e-12\n1.0 1e-12\n").unwrap();
        let voltages: Vec<f64> = samples.iter().map(|s| s.voltage).collect();
        assert_eq!(voltages, vec![1.0, 0.0, 1.0]);
    }

    #[test]
    fn test_decimal_comma() {
        let samples = parse_samples("0,5 4,5e-12\n1,0 4,0e-12\n").unwrap();
        assert_eq!(samples[0].voltage, 0.5);
        assert_eq!(samples[0].capacitance, 4.5e-12);
        assert_eq!(samples[1].voltage, 1.0);
    }

    #[test]
    fn test_wrong_field_count_is_error() {
        let err = parse_samples("0.0 5e-12 1e-12\n").unwrap_err();
        match err {
            Error::ParseError { line, .. } => assert_eq!(line, 1),
            other => panic!("expected ParseError, got {other:?}"),
        }
    }

    #[test]
    fn test_bad_capacitance_token_is_error() {
        let err = parse_samples("0.0 5e-12\n1.0 bogus\n").unwrap_err();
        match err {
            Error::ParseError { line, .. } => assert_eq!(line, 2),
            other => panic!("expected ParseError, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_and_header_only_files() {
        assert!(matches!(parse_samples(""), Err(Error::EmptyFile)));
        assert!(matches!(
            parse_samples("header only\nanother header\n"),
            Err(Error::EmptyFile)
        ));
    }

    #[test]
    fn test_non_finite_rows_dropped() {
        let samples = parse_samples("0.0 5e-12\nNaN 4e-12\n1.0 inf\n2.0 3e-12\n").unwrap();
        assert_eq!(samples.len(), 2);
        assert_eq!(samples[1].voltage, 2.0);
    }

    #[test]
    fn test_bytes_entry_point_with_latin1() {
        let bytes = b"Kapazit\xe4t\n0.0 5e-12\n1.0 4e-12\n";
        let samples = parse_samples_bytes(bytes).unwrap();
        assert_eq!(samples.len(), 2);
    }
}
