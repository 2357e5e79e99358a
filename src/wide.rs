//! Conversion between host UTF-8 text and the UTF-16 the registry API speaks.

/// Encodes `text` as a null-terminated UTF-16 string for passing to the OS.
pub fn to_wide(text: &str) -> Vec<u16> {
    text.encode_utf16().chain(std::iter::once(0)).collect()
}

/// Decodes a UTF-16 buffer of known length. Malformed input (unpaired
/// surrogates) decodes to an empty string rather than an error.
pub fn from_wide(wide: &[u16]) -> String {
    String::from_utf16(wide).unwrap_or_default()
}
