//! Test-fixture header generation.
//!
//! The verification protocol run in reverse: given a payload and a secret,
//! synthesize the signature header Payrail would have sent. Test suites use
//! this to exercise webhook handlers without talking to the real sender.

use crate::error::WebhookError;
use crate::webhook::crypto::{CryptoProvider, DefaultCryptoProvider};
use crate::webhook::SCHEME_V1;

/// Inputs for [`generate_test_header_string`].
///
/// `payload` and `secret` are required at construction; everything else
/// defaults: the timestamp to the current unix time, the scheme to `v1`, and
/// the signature to an HMAC computed over `"{timestamp}.{payload}"` with
/// `secret`.
#[derive(Debug, Clone)]
pub struct TestHeaderOptions {
    /// Raw body the header should sign.
    pub payload: String,
    /// Endpoint secret used when no explicit signature is supplied.
    pub secret: String,
    /// Signed timestamp; `None` or `0` means "now".
    pub timestamp: Option<i64>,
    /// Scheme tag; `None` or empty means `v1`.
    pub scheme: Option<String>,
    /// Pre-computed signature to emit verbatim instead of signing.
    pub signature: Option<String>,
}

impl TestHeaderOptions {
    /// Options for signing `payload` with `secret`, everything else
    /// defaulted.
    pub fn new(payload: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            payload: payload.into(),
            secret: secret.into(),
            timestamp: None,
            scheme: None,
            signature: None,
        }
    }

    /// Pin the signed timestamp instead of using the current time.
    pub fn timestamp(mut self, timestamp: i64) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Tag the signature under `scheme` instead of `v1`.
    pub fn scheme(mut self, scheme: impl Into<String>) -> Self {
        self.scheme = Some(scheme.into());
        self
    }

    /// Emit `signature` verbatim instead of computing one.
    pub fn signature(mut self, signature: impl Into<String>) -> Self {
        self.signature = Some(signature.into());
        self
    }
}

/// Generate a signature header using the default crypto backend.
///
/// # Errors
///
/// Returns [`WebhookError::InvalidOptions`] when a signature must be computed
/// but the secret is empty, or [`WebhookError::Crypto`] when the backend
/// fails.
///
/// # Examples
///
/// ```rust
/// use payrail_sdk::webhook::{generate_test_header_string, TestHeaderOptions};
///
/// let header = generate_test_header_string(
///     TestHeaderOptions::new(r#"{"id":"evt_123"}"#, "whsec_test").timestamp(1614556800),
/// )
/// .unwrap();
/// assert!(header.starts_with("t=1614556800,v1="));
/// ```
pub fn generate_test_header_string(opts: TestHeaderOptions) -> Result<String, WebhookError> {
    generate_test_header_string_with_provider(opts, &DefaultCryptoProvider::new())
}

/// Generate a signature header using a caller-supplied crypto backend.
///
/// # Errors
///
/// See [`generate_test_header_string`].
pub fn generate_test_header_string_with_provider(
    opts: TestHeaderOptions,
    crypto: &dyn CryptoProvider,
) -> Result<String, WebhookError> {
    let timestamp = opts
        .timestamp
        .filter(|t| *t != 0)
        .unwrap_or_else(|| chrono::Utc::now().timestamp());

    let scheme = match opts.scheme.as_deref() {
        Some(scheme) if !scheme.is_empty() => scheme,
        _ => SCHEME_V1,
    };

    let signature = match opts.signature {
        Some(signature) if !signature.is_empty() => signature,
        _ => {
            if opts.secret.is_empty() {
                return Err(WebhookError::InvalidOptions {
                    message: "a secret is required to compute a signature".to_string(),
                });
            }
            let signed_payload = format!("{}.{}", timestamp, opts.payload);
            crypto.compute_hmac_signature(&signed_payload, &opts.secret)?
        }
    };

    Ok(format!("t={timestamp},{scheme}={signature}"))
}

#[cfg(test)]
#[path = "test_header_tests.rs"]
mod tests;
