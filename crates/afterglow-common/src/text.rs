//! Single-byte text decoding.
//!
//! Resource strings are stored one byte per character. Every byte value maps
//! to the Unicode code point of the same number (Latin-1), so decoding never
//! fails.

/// Decode bytes as Latin-1 text.
pub fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().copied().map(char::from).collect()
}

/// Strip trailing null bytes. Interior nulls are kept.
pub fn trim_trailing_nulls(bytes: &[u8]) -> &[u8] {
    let len = bytes
        .iter()
        .rposition(|&b| b != 0)
        .map_or(0, |last| last + 1);
    &bytes[..len]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_high_bytes() {
        assert_eq!(decode_latin1(b"\xa9 1992"), "© 1992");
    }

    #[test]
    fn test_trim_trailing_only() {
        assert_eq!(trim_trailing_nulls(b"a\0b\0\0"), b"a\0b");
        assert_eq!(trim_trailing_nulls(b"\0\0"), b"");
        assert_eq!(trim_trailing_nulls(b"abc"), b"abc");
    }
}
