//! Frequency-label inference from measurement file names.

/// Infer a measurement-frequency label from a file name.
///
/// Instrument exports commonly encode the AC frequency as a `<value>kHz`
/// prefix, e.g. `100kHz_sample3.txt`. Returns everything up to and
/// including the first `kHz`, or `None` when the convention is absent.
/// The label is advisory only and never affects numeric results.
pub fn frequency_label(file_name: &str) -> Option<String> {
    let pos = file_name.find("kHz")?;
    Some(format!("{}kHz", &file_name[..pos]))
}
