//! Input decoding with a Latin-1 fallback.

use std::borrow::Cow;

/// Decode raw file bytes to text.
///
/// Valid UTF-8 is borrowed as-is. Anything else falls back to Latin-1,
/// where every byte maps to the code point of the same value, so decoding
/// cannot fail. Instrument software on older Windows installs commonly
/// writes ISO-8859-1 headers.
pub fn decode_text(bytes: &[u8]) -> Cow<'_, str> {
    match std::str::from_utf8(bytes) {
        Ok(text) => Cow::Borrowed(text),
        Err(_) => {
            log::debug!("input is not valid UTF-8, decoding as Latin-1");
            Cow::Owned(bytes.iter().map(|&b| b as char).collect())
        }
    }
}
