//! Webhook signature verification.
//!
//! Confirms that a notification body was produced by Payrail and has not been
//! replayed or tampered with. The expected digest is HMAC-SHA256 over the
//! exact byte sequence `"{timestamp}.{raw body}"`, so callers must hand over
//! the unmodified wire payload: a body that was parsed and re-serialized
//! upstream will not be byte-identical and cannot verify.
//!
//! Two entry-point families are provided:
//!
//! - [`verify_header`] / [`verify_header_async`] take every input per call
//!   and differ only in how the HMAC is obtained from the crypto backend.
//! - [`WebhookVerifier`] binds the endpoint secret, tolerance, and backend
//!   once at startup and is shared across requests.
//!
//! # Security
//!
//! - Candidate signatures are compared in constant time (`subtle`).
//! - Signature validity is always checked before timestamp validity, so a
//!   request that is both forged and stale reports a bad signature rather
//!   than leaking the replay window to a caller without the key.
//! - Secrets and digests are never logged and are redacted from `Debug`
//!   output.

use crate::error::WebhookError;
use crate::events::Event;
use crate::webhook::crypto::{CryptoProvider, DefaultCryptoProvider};
use crate::webhook::header::SignatureHeader;
use crate::webhook::SCHEME_V1;
use std::sync::Arc;
use subtle::ConstantTimeEq;
use tracing::{debug, instrument};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Default replay tolerance applied by [`WebhookVerifier`], in seconds.
pub const DEFAULT_TOLERANCE_SECS: i64 = 300;

/// Verify a webhook signature header against the raw request body.
///
/// A `tolerance` greater than zero bounds the accepted age (in seconds) of
/// the signed timestamp; zero or negative disables the replay-window check
/// entirely, an explicit opt-out for callers who accept that risk.
///
/// # Errors
///
/// Returns a [`WebhookError`] naming the exact failure: malformed header,
/// no signatures under the `v1` scheme, signature mismatch, or expired
/// timestamp. See [`crate::error`] for the full taxonomy.
#[instrument(skip_all, fields(payload_len = payload.len(), tolerance))]
pub fn verify_header(
    payload: &[u8],
    header: &str,
    secret: &str,
    tolerance: i64,
    crypto: &dyn CryptoProvider,
) -> Result<(), WebhookError> {
    let context = VerificationContext::prepare(payload, header)?;
    let expected = crypto.compute_hmac_signature(&context.signed_payload(), secret)?;
    context.check(&expected, tolerance)
}

/// Awaitable variant of [`verify_header`].
///
/// Identical in every respect except that the HMAC computation is awaited;
/// parsing, comparison, and the tolerance check run synchronously.
#[instrument(skip_all, fields(payload_len = payload.len(), tolerance))]
pub async fn verify_header_async(
    payload: &[u8],
    header: &str,
    secret: &str,
    tolerance: i64,
    crypto: &dyn CryptoProvider,
) -> Result<(), WebhookError> {
    let context = VerificationContext::prepare(payload, header)?;
    let expected = crypto
        .compute_hmac_signature_async(&context.signed_payload(), secret)
        .await?;
    context.check(&expected, tolerance)
}

// ============================================================================
// Verification context
// ============================================================================

/// Inputs of a single verification call after structural validation.
///
/// Constructed fresh per call and discarded after the outcome is decided.
/// Splitting preparation from the digest check keeps the sync and async entry
/// points identical everywhere except the one suspension point.
struct VerificationContext<'a> {
    payload: &'a str,
    header: &'a str,
    timestamp: i64,
    signatures: Vec<String>,
}

impl<'a> VerificationContext<'a> {
    /// Decode the payload and parse the header, rejecting structurally
    /// unusable input before any cryptographic work happens.
    fn prepare(payload: &'a [u8], header: &'a str) -> Result<Self, WebhookError> {
        let payload = std::str::from_utf8(payload).map_err(|_| WebhookError::PayloadEncoding)?;

        let parsed = SignatureHeader::parse(header, SCHEME_V1);
        let Some(timestamp) = parsed.timestamp else {
            return Err(WebhookError::MalformedHeader {
                header: header.to_string(),
                payload: payload.to_string(),
            });
        };
        if parsed.signatures.is_empty() {
            return Err(WebhookError::NoSignaturesForScheme {
                scheme: SCHEME_V1.to_string(),
                header: header.to_string(),
            });
        }

        Ok(Self {
            payload,
            header,
            timestamp,
            signatures: parsed.signatures,
        })
    }

    /// The exact byte sequence the sender signed.
    fn signed_payload(&self) -> String {
        format!("{}.{}", self.timestamp, self.payload)
    }

    /// Compare candidates against the expected digest, then enforce the
    /// tolerance window. Signature validity is decided first.
    fn check(&self, expected: &str, tolerance: i64) -> Result<(), WebhookError> {
        let any_match = self
            .signatures
            .iter()
            .any(|candidate| constant_time_eq(candidate, expected));
        if !any_match {
            return Err(WebhookError::SignatureMismatch {
                header: self.header.to_string(),
                payload: self.payload.to_string(),
            });
        }

        let age = chrono::Utc::now().timestamp() - self.timestamp;
        if tolerance > 0 && age > tolerance {
            return Err(WebhookError::TimestampExpired { age, tolerance });
        }

        debug!(timestamp = self.timestamp, age, "webhook signature verified");
        Ok(())
    }
}

/// Constant-time string equality.
///
/// Unequal lengths compare unequal immediately; length is public information
/// (the digest length is fixed by the scheme), so only the byte comparison
/// must not leak the position of the first mismatch.
fn constant_time_eq(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.as_bytes().ct_eq(b.as_bytes()).into()
}

// ============================================================================
// WebhookVerifier
// ============================================================================

/// Endpoint secret with zeroize-on-drop semantics.
#[derive(Zeroize, ZeroizeOnDrop)]
struct EndpointSecret(String);

/// A verifier bound to one endpoint secret.
///
/// Construct once at startup and share across requests; cloning is cheap and
/// all state is read-only after construction, so concurrent verifications
/// need no locking. The crypto backend defaults to
/// [`DefaultCryptoProvider`] and can be replaced through
/// [`with_crypto_provider`](Self::with_crypto_provider).
///
/// # Examples
///
/// ```rust,no_run
/// use payrail_sdk::webhook::WebhookVerifier;
///
/// # fn example(payload: &[u8], header: &str) -> Result<(), payrail_sdk::WebhookError> {
/// let verifier = WebhookVerifier::new("whsec_...");
///
/// let event = verifier.construct_event(payload, header)?;
/// println!("received {}", event.event_type);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct WebhookVerifier {
    secret: Arc<EndpointSecret>,
    tolerance: i64,
    crypto: Arc<dyn CryptoProvider>,
}

impl WebhookVerifier {
    /// Create a verifier for `secret` with the default tolerance of
    /// [`DEFAULT_TOLERANCE_SECS`] and the default crypto backend.
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: Arc::new(EndpointSecret(secret.into())),
            tolerance: DEFAULT_TOLERANCE_SECS,
            crypto: Arc::new(DefaultCryptoProvider::new()),
        }
    }

    /// Replace the replay tolerance, in seconds.
    ///
    /// Zero or negative disables the timestamp check.
    pub fn with_tolerance(mut self, tolerance: i64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Replace the crypto backend.
    pub fn with_crypto_provider(mut self, crypto: Arc<dyn CryptoProvider>) -> Self {
        self.crypto = crypto;
        self
    }

    /// Verify a signature header against the raw request body.
    ///
    /// # Errors
    ///
    /// See [`verify_header`].
    pub fn verify(&self, payload: &[u8], header: &str) -> Result<(), WebhookError> {
        verify_header(
            payload,
            header,
            &self.secret.0,
            self.tolerance,
            self.crypto.as_ref(),
        )
    }

    /// Awaitable variant of [`verify`](Self::verify).
    pub async fn verify_async(&self, payload: &[u8], header: &str) -> Result<(), WebhookError> {
        verify_header_async(
            payload,
            header,
            &self.secret.0,
            self.tolerance,
            self.crypto.as_ref(),
        )
        .await
    }

    /// Verify the signature, then decode the payload into an [`Event`].
    ///
    /// The event is decoded from the same raw bytes that were verified; the
    /// caller owns the returned value.
    ///
    /// # Errors
    ///
    /// Any verification failure from [`verify`](Self::verify), or
    /// [`WebhookError::EventDecoding`] if the verified payload is not a valid
    /// event document.
    pub fn construct_event(&self, payload: &[u8], header: &str) -> Result<Event, WebhookError> {
        self.verify(payload, header)?;
        Ok(serde_json::from_slice(payload)?)
    }

    /// Awaitable variant of [`construct_event`](Self::construct_event).
    pub async fn construct_event_async(
        &self,
        payload: &[u8],
        header: &str,
    ) -> Result<Event, WebhookError> {
        self.verify_async(payload, header).await?;
        Ok(serde_json::from_slice(payload)?)
    }
}

// Security: don't expose the endpoint secret in debug output
impl std::fmt::Debug for WebhookVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WebhookVerifier")
            .field("secret", &"<REDACTED>")
            .field("tolerance", &self.tolerance)
            .finish()
    }
}

#[cfg(test)]
#[path = "verifier_tests.rs"]
mod tests;
