//! Error types for webhook verification.
//!
//! Every failure is surfaced as a typed error so that callers can tell apart
//! caller mistakes (multi-valued headers, bad generator options) from
//! authentication failures (bad signature, stale timestamp). Nothing here is
//! retryable: verification is a pure function of its inputs, and re-running
//! it would deterministically reproduce the same outcome.

use thiserror::Error;

/// Errors produced while verifying or generating webhook signatures.
///
/// Variants carry the raw header and payload where they help diagnose
/// integration problems. Secrets and computed digests are never included.
#[derive(Debug, Error)]
pub enum WebhookError {
    /// The signature header was supplied as a multi-valued collection.
    ///
    /// Some transport layers hand over repeated HTTP header fields as a list.
    /// That is a caller error, not a signature mismatch: the caller must
    /// reject the request or select the single meaningful value explicitly
    /// rather than have this library silently pick one.
    #[error("expected exactly one signature header value, found {count}")]
    AmbiguousHeader { count: usize },

    /// The payload bytes are not valid UTF-8.
    #[error("webhook payload is not valid UTF-8")]
    PayloadEncoding,

    /// No usable timestamp was found in the signature header.
    ///
    /// Raised when the `t=` pair is missing entirely or its value does not
    /// parse as a base-10 integer.
    #[error(
        "unable to extract timestamp and signatures from header. \
         Header: {header}"
    )]
    MalformedHeader { header: String, payload: String },

    /// The header is well-formed but carries no signature under the expected
    /// scheme.
    ///
    /// Distinct from [`WebhookError::MalformedHeader`]: this covers headers
    /// signed only under schemes this verifier does not recognize yet.
    #[error("no signatures found with expected scheme {scheme}. Header: {header}")]
    NoSignaturesForScheme { scheme: String, header: String },

    /// None of the candidate signatures matched the computed digest.
    #[error(
        "no signatures found matching the expected signature for payload. \
         Are you passing the raw request body you received from Payrail? \
         A payload that was parsed and re-serialized will not be byte-identical \
         to the original and cannot match its signature"
    )]
    SignatureMismatch { header: String, payload: String },

    /// The signature is valid but the signed timestamp is outside the
    /// tolerance window.
    #[error("timestamp outside the tolerance zone: event is {age}s old, tolerance is {tolerance}s")]
    TimestampExpired { age: i64, tolerance: i64 },

    /// Missing or invalid options passed to the test-header generator.
    #[error("invalid options: {message}")]
    InvalidOptions { message: String },

    /// The crypto backend failed to compute an HMAC digest.
    #[error("crypto provider error: {0}")]
    Crypto(#[from] CryptoError),

    /// The verified payload could not be decoded into an event.
    #[error("failed to decode event payload: {0}")]
    EventDecoding(#[from] serde_json::Error),
}

impl WebhookError {
    /// Check if this error means the request failed authentication.
    ///
    /// Authentication failures are the outcomes a webhook HTTP handler should
    /// answer with a 400-level rejection: the request could not be proven to
    /// come from Payrail. The remaining variants indicate a problem on the
    /// receiving side instead (generator misuse, broken crypto backend, or a
    /// payload that verified but does not decode).
    pub fn is_authentication_failure(&self) -> bool {
        match self {
            Self::AmbiguousHeader { .. } => true,
            Self::PayloadEncoding => true,
            Self::MalformedHeader { .. } => true,
            Self::NoSignaturesForScheme { .. } => true,
            Self::SignatureMismatch { .. } => true,
            Self::TimestampExpired { .. } => true,
            Self::InvalidOptions { .. } => false,
            Self::Crypto(_) => false,
            Self::EventDecoding(_) => false,
        }
    }
}

/// Errors raised by a [`CryptoProvider`] implementation.
///
/// [`CryptoProvider`]: crate::webhook::CryptoProvider
#[derive(Debug, Error)]
pub enum CryptoError {
    /// The secret could not be used as an HMAC key.
    #[error("secret cannot be used as an HMAC key: {message}")]
    InvalidKey { message: String },

    /// The backend failed while computing the digest.
    #[error("HMAC computation failed: {message}")]
    ComputationFailed { message: String },
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
