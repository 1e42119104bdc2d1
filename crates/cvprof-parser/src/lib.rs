//! Measurement-file parsing for C-V carrier profiling.
//!
//! Turns the raw text of one C-V measurement file into an ordered sequence
//! of voltage/capacitance samples. Handles the quirks of real instrument
//! exports: arbitrary header lines, decimal-comma locales, non-UTF-8
//! encodings, and rows with non-finite readings.

pub mod encoding;
pub mod error;
pub mod label;
pub mod parse;

pub use encoding::decode_text;
pub use error::{Error, Result};
pub use label::frequency_label;
pub use parse::{parse_samples, parse_samples_bytes};
