use chrono::{DateTime, Utc};

use crate::jwt::hmac_sha256;

/// Minimum accepted signing-key length: 256 bits.
pub const MIN_SIGNING_KEY_BYTES: usize = 32;

const KEY_ID_PREFIX: &str = "hkdfv1-";

/// UTC calendar date of `at`, formatted `YYYYMMDD`.
pub fn format_date_ymd(at: DateTime<Utc>) -> String {
    at.format("%Y%m%d").to_string()
}

/// Key id (JWT `kid` header) naming the derivation scheme and the UTC issue
/// date, so a verifier can recompute the matching per-day key.
pub fn key_id(issued_at: DateTime<Utc>) -> String {
    format!("{KEY_ID_PREFIX}{}", format_date_ymd(issued_at))
}

/// Derive the per-day signing key from the raw (base64-decoded) application
/// secret: `HMAC-SHA256(key = secret, message = YYYYMMDD(issued_at))`.
///
/// The key is scoped to a single UTC calendar day; the long-lived secret
/// never signs tokens directly.
pub fn derive_signing_key(secret: &[u8], issued_at: DateTime<Utc>) -> Vec<u8> {
    hmac_sha256(secret, format_date_ymd(issued_at).as_bytes()).to_vec()
}
