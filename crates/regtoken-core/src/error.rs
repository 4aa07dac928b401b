use thiserror::Error;

#[derive(Debug, Error)]
pub enum TokenError {
    /// The application secret was not valid standard base64.
    #[error("application secret is not valid base64: {0}")]
    InvalidSecretEncoding(#[from] base64::DecodeError),

    /// The derived signing key is under 256 bits. Unreachable while the
    /// derivation is HMAC-SHA256; checked before every signature anyway.
    #[error("signing key too short: {0} bytes, must be at least 32")]
    SigningKeyTooShort(usize),

    #[error("failed to serialize token segment: {0}")]
    Serialize(#[from] serde_json::Error),
}
