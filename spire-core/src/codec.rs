/// XOR masking and base64 framing of the autosave payload
use base64::{Engine, engine::general_purpose::STANDARD};

use crate::error::CodecError;

/// 3-byte cyclic XOR mask used by the game (the ASCII bytes of "key").
/// Obfuscation only, not a secret; must match the game exactly.
pub const KEY: &[u8] = b"key";

/// XOR `data` byte-for-byte with `key`, cycling the key.
/// `key` must be non-empty.
fn xor_cycle(data: &[u8], key: &[u8]) -> Vec<u8> {
    data.iter()
        .enumerate()
        .map(|(i, b)| b ^ key[i % key.len()])
        .collect()
}

/// Apply the cyclic XOR mask to `data`.
///
/// The operation is its own inverse: applying it twice with the same key
/// returns the original bytes. Fails with [`CodecError::InvalidKey`] when
/// the key is empty.
pub fn xor_transform(data: &[u8], key: &[u8]) -> Result<Vec<u8>, CodecError> {
    if key.is_empty() {
        return Err(CodecError::InvalidKey);
    }
    Ok(xor_cycle(data, key))
}

/// Decode opaque save content to the plaintext payload.
///
/// Base64-decodes (standard alphabet, padded), then unmasks with [`KEY`].
/// Surrounding ASCII whitespace (usually a trailing newline) is tolerated;
/// anything else that is not base64 fails with
/// [`CodecError::MalformedEncoding`].
pub fn decode(opaque: &[u8]) -> Result<Vec<u8>, CodecError> {
    let masked = STANDARD.decode(opaque.trim_ascii())?;
    Ok(xor_cycle(&masked, KEY))
}

/// Encode a plaintext payload into the opaque save form.
///
/// Masks with [`KEY`], then base64-encodes. Total over all byte sequences.
pub fn encode(plain: &[u8]) -> Vec<u8> {
    STANDARD.encode(xor_cycle(plain, KEY)).into_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_xor_involution() {
        let data = b"The Silent picks up 99 gold.";
        let key = b"mask";

        let once = xor_transform(data, key).unwrap();
        let twice = xor_transform(&once, key).unwrap();

        assert_ne!(once, data.to_vec());
        assert_eq!(twice, data.to_vec());
    }

    #[test]
    fn test_xor_empty_key_rejected() {
        let result = xor_transform(b"data", b"");
        assert!(matches!(result, Err(CodecError::InvalidKey)));
    }

    #[test]
    fn test_known_vector() {
        // {0x7b ^ 0x6b, 0x7d ^ 0x65} = {0x10, 0x18}, base64 "EBg="
        assert_eq!(encode(b"{}"), b"EBg=");
        assert_eq!(decode(b"EBg=").unwrap(), b"{}");
    }

    #[test]
    fn test_encode_decode_roundtrip() {
        let payload = br#"{"gold":240,"relics":["Burning Blood"],"floor_num":7}"#;

        let opaque = encode(payload);
        let plain = decode(&opaque).unwrap();

        assert_eq!(plain, payload.to_vec());
    }

    #[test]
    fn test_roundtrip_non_ascii_payload() {
        let payload: Vec<u8> = (0u8..=255).collect();
        assert_eq!(decode(&encode(&payload)).unwrap(), payload);
    }

    #[test]
    fn test_trailing_newline_tolerated() {
        assert_eq!(decode(b"EBg=\n").unwrap(), b"{}");
    }

    #[test]
    fn test_malformed_base64() {
        let result = decode(b"!!! not base64 !!!");
        assert!(matches!(result, Err(CodecError::MalformedEncoding(_))));
    }
}
