//! Tests for the crypto backend.

use super::*;

// ============================================================================
// Test: Default Provider
// ============================================================================

#[test]
fn test_default_provider_known_answer() {
    // Arrange: vector computed independently with a reference HMAC-SHA256
    // implementation.
    let provider = DefaultCryptoProvider::new();

    // Act
    let digest = provider
        .compute_hmac_signature("1614556800.{\"id\":\"evt_123\"}", "webhook_secret_key")
        .expect("HMAC computation should not fail");

    // Assert
    assert_eq!(
        digest,
        "3f3df45b189e5a4b383192094041bb94c0a607c0817fe19b0f900d629d302259"
    );
}

#[test]
fn test_default_provider_rfc_style_vector() {
    let provider = DefaultCryptoProvider::new();

    let digest = provider
        .compute_hmac_signature("The quick brown fox jumps over the lazy dog", "key")
        .expect("HMAC computation should not fail");

    assert_eq!(
        digest,
        "f7bc83f430538424b13298e6aa6fb143ef4d59a14946175997479dbc2d1a3cd8"
    );
}

#[test]
fn test_default_provider_digest_is_hex_sha256_length() {
    let provider = DefaultCryptoProvider::new();

    let digest = provider
        .compute_hmac_signature("payload", "secret")
        .expect("HMAC computation should not fail");

    assert_eq!(digest.len(), 64, "SHA-256 digest is 32 bytes / 64 hex chars");
    assert!(digest.chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn test_default_provider_is_deterministic() {
    let provider = DefaultCryptoProvider::new();

    let first = provider.compute_hmac_signature("data", "secret").unwrap();
    let second = provider.compute_hmac_signature("data", "secret").unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_default_provider_distinguishes_secrets() {
    let provider = DefaultCryptoProvider::new();

    let with_s1 = provider.compute_hmac_signature("data", "secret_one").unwrap();
    let with_s2 = provider.compute_hmac_signature("data", "secret_two").unwrap();

    assert_ne!(with_s1, with_s2);
}

#[test]
fn test_default_provider_accepts_empty_secret() {
    // HMAC accepts keys of any length, including zero; rejecting an empty
    // secret is generator policy, not backend policy.
    let provider = DefaultCryptoProvider::new();

    let result = provider.compute_hmac_signature("data", "");

    assert!(result.is_ok());
}

// ============================================================================
// Test: Async Delegation
// ============================================================================

#[test]
fn test_async_default_matches_sync() {
    let provider = DefaultCryptoProvider::new();

    let sync_digest = provider.compute_hmac_signature("data", "secret").unwrap();
    let async_digest =
        tokio_test::block_on(provider.compute_hmac_signature_async("data", "secret")).unwrap();

    assert_eq!(
        sync_digest, async_digest,
        "Default async implementation must delegate to the blocking one"
    );
}

// ============================================================================
// Test: Polymorphism
// ============================================================================

struct UppercasingProvider;

#[async_trait]
impl CryptoProvider for UppercasingProvider {
    fn compute_hmac_signature(&self, data: &str, secret: &str) -> Result<String, CryptoError> {
        DefaultCryptoProvider::new()
            .compute_hmac_signature(data, secret)
            .map(|digest| digest.to_uppercase())
    }
}

#[test]
fn test_custom_provider_is_honored() {
    let provider = UppercasingProvider;

    let digest = provider.compute_hmac_signature("data", "secret").unwrap();

    assert!(digest.chars().all(|c| !c.is_ascii_lowercase()));
}
