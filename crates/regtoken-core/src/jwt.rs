use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use hmac::{Hmac, Mac};
use serde::Serialize;
use sha2::Sha256;

use crate::error::TokenError;

pub type HmacSha256 = Hmac<Sha256>;

/// Encode one JWT segment: compact JSON with lexicographically sorted object
/// keys, then base64url without padding (RFC 7515 appendix C).
///
/// Sorted keys are not required by the JWT spec; they make the encoded
/// output byte-identical across implementations, which is what the
/// reference vectors compare against.
pub fn encode_segment<T: Serialize>(value: &T) -> Result<String, TokenError> {
    // serde_json::Map is BTreeMap-backed, so serializing through a Value
    // emits object keys in sorted order regardless of field order in `T`.
    let canonical = serde_json::to_value(value)?;
    Ok(URL_SAFE_NO_PAD.encode(serde_json::to_vec(&canonical)?))
}

/// HS256 signature segment over `header_b64 + "." + payload_b64`,
/// base64url-encoded without padding.
pub fn sign_hs256(header_b64: &str, payload_b64: &str, signing_key: &[u8]) -> String {
    let signing_input = format!("{header_b64}.{payload_b64}");
    let digest = hmac_sha256(signing_key, signing_input.as_bytes());
    URL_SAFE_NO_PAD.encode(digest)
}

pub(crate) fn hmac_sha256(key: &[u8], message: &[u8]) -> [u8; 32] {
    let mut mac = HmacSha256::new_from_slice(key).expect("HMAC accepts any key length");
    mac.update(message);
    mac.finalize().into_bytes().into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[derive(Serialize)]
    struct Unordered {
        zulu: u32,
        alpha: &'static str,
    }

    #[test]
    fn segment_is_compact_sorted_and_unpadded() {
        let encoded = encode_segment(&Unordered {
            zulu: 1,
            alpha: "a",
        })
        .unwrap();
        assert!(!encoded.contains('='));
        let decoded = URL_SAFE_NO_PAD.decode(&encoded).unwrap();
        assert_eq!(decoded, br#"{"alpha":"a","zulu":1}"#);
    }

    #[test]
    fn segment_round_trips() {
        let mut map = BTreeMap::new();
        map.insert("iat".to_string(), serde_json::json!(1514862245));
        map.insert("nonce".to_string(), serde_json::json!("fixed-nonce"));
        let encoded = encode_segment(&map).unwrap();
        let decoded: BTreeMap<String, serde_json::Value> =
            serde_json::from_slice(&URL_SAFE_NO_PAD.decode(&encoded).unwrap()).unwrap();
        assert_eq!(decoded, map);
    }

    #[test]
    fn segment_encoding_is_deterministic() {
        let value = serde_json::json!({ "b": 2, "a": 1 });
        assert_eq!(
            encode_segment(&value).unwrap(),
            encode_segment(&value).unwrap()
        );
    }

    #[test]
    fn signature_matches_direct_hmac() {
        let key = b"0123456789abcdef0123456789abcdef";
        let signature = sign_hs256("aGVhZGVy", "cGF5bG9hZA", key);
        let expected = URL_SAFE_NO_PAD.encode(hmac_sha256(key, b"aGVhZGVy.cGF5bG9hZA"));
        assert_eq!(signature, expected);
    }
}
