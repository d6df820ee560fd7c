//! Embedded silent MP3 payload.
//!
//! The bytes are an ID3-tagged MP3 stream with a Xing/Info frame and no
//! audible content. Nothing here inspects or varies the structure; the
//! payload is written verbatim into every fixture.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::error::FixtureError;

/// Base64 literal of the silent MP3 payload. Line breaks are ignored.
pub const SILENT_MP3_BASE64: &str = "
SUQzAwAAAAAAI1RTU0UAAAAPAAADTGF2ZjU4LjI5LjEwMAAAAAAAAAAAAAAA//OEAAAAAAAAAAAA
AAAAAAAAAAAASW5mbwAAAA8AAAACAAABIADAwMDAwMDAwMDAwMDAwMDAwMDAwMDAwMDAwMDAwMDA
wMDAwMDAwMDAwMDAwMDAwMDAwMD/////////////////////////////////////////////////
/////////////////8AAAAAGhQsAAGTJllZZWXlXUZA1cFZQo2NhKOjQElFSkpKQElElFElFEl91
EpWWVdxFlc5QElFUklBQEVGU0pKQUVVSkpKSEVKSkpKSkpKSkpKSkpKSkpKSkpKSkpKSkpKSkpKS
kpI=
";

/// Decode the embedded payload.
pub fn silent_mp3() -> Result<Vec<u8>, FixtureError> {
    decode_payload(SILENT_MP3_BASE64)
}

/// Decode a base64 payload literal, ignoring ASCII whitespace.
///
/// A corrupt literal is fatal: there is no fallback payload.
pub fn decode_payload(literal: &str) -> Result<Vec<u8>, FixtureError> {
    let compact: String = literal
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();
    STANDARD
        .decode(compact.as_bytes())
        .map_err(|err| FixtureError::PayloadDecodeFailed {
            reason: err.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_payload_is_id3_tagged() {
        let bytes = silent_mp3().unwrap();
        assert_eq!(bytes.len(), 287);
        assert_eq!(&bytes[..3], b"ID3");
    }

    #[test]
    fn embedded_payload_is_deterministic() {
        assert_eq!(silent_mp3().unwrap(), silent_mp3().unwrap());
    }

    #[test]
    fn whitespace_is_ignored() {
        let bytes = decode_payload("  SUQz\nAw==\r\n").unwrap();
        assert_eq!(bytes, b"ID3\x03");
    }

    #[test]
    fn empty_literal_decodes_to_empty_payload() {
        assert!(decode_payload("\n\n").unwrap().is_empty());
    }

    #[test]
    fn corrupt_literal_is_rejected() {
        let err = decode_payload("SUQzAw=!").unwrap_err();
        assert!(matches!(err, FixtureError::PayloadDecodeFailed { .. }));

        // unpadded tail
        let err = decode_payload("SUQzA").unwrap_err();
        assert!(matches!(err, FixtureError::PayloadDecodeFailed { .. }));
    }
}
