//! Pluggable crypto backend for HMAC-SHA256 computation.
//!
//! The verifier never talks to a cryptographic library directly; it goes
//! through the [`CryptoProvider`] capability so that hosts can substitute a
//! different primitive source (hardware tokens, platform crypto APIs) without
//! touching the verification protocol. [`DefaultCryptoProvider`] is the
//! implementation used when callers do not supply their own.

use crate::error::CryptoError;
use async_trait::async_trait;
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Provider of the HMAC-SHA256 primitive used to sign and verify webhooks.
///
/// Implementations differ only in where they obtain HMAC-SHA256, never in the
/// protocol built on top of it. The trait is flat: a blocking computation and
/// an awaitable variant, nothing else.
#[async_trait]
pub trait CryptoProvider: Send + Sync {
    /// Compute the hex-encoded HMAC-SHA256 of `data` keyed by `secret`.
    fn compute_hmac_signature(&self, data: &str, secret: &str) -> Result<String, CryptoError>;

    /// Awaitable variant of [`CryptoProvider::compute_hmac_signature`].
    ///
    /// The default implementation delegates to the blocking computation; an
    /// HMAC over a webhook body is CPU-bound and completes without yielding.
    /// Backends that front an asynchronous API override this.
    async fn compute_hmac_signature_async(
        &self,
        data: &str,
        secret: &str,
    ) -> Result<String, CryptoError> {
        self.compute_hmac_signature(data, secret)
    }
}

/// Default crypto backend built on the RustCrypto `hmac` and `sha2` crates.
///
/// Stateless; construct once and share freely across concurrent
/// verifications.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultCryptoProvider;

impl DefaultCryptoProvider {
    /// Create the default provider.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CryptoProvider for DefaultCryptoProvider {
    fn compute_hmac_signature(&self, data: &str, secret: &str) -> Result<String, CryptoError> {
        let mut mac =
            HmacSha256::new_from_slice(secret.as_bytes()).map_err(|e| CryptoError::InvalidKey {
                message: e.to_string(),
            })?;
        mac.update(data.as_bytes());
        Ok(hex::encode(mac.finalize().into_bytes()))
    }
}

#[cfg(test)]
#[path = "crypto_tests.rs"]
mod tests;
