//! Tests for test-fixture header generation.

use super::*;
use crate::error::CryptoError;
use async_trait::async_trait;

// ============================================================================
// Test: Format
// ============================================================================

#[test]
fn test_generated_header_format() {
    let header = generate_test_header_string(
        TestHeaderOptions::new(r#"{"id":"evt_123"}"#, "whsec_test").timestamp(1614556800),
    )
    .expect("generation should succeed");

    let (timestamp_pair, signature_pair) = header
        .split_once(',')
        .expect("header should contain two pairs");
    assert_eq!(timestamp_pair, "t=1614556800");
    let signature = signature_pair
        .strip_prefix("v1=")
        .expect("signature pair should be tagged v1");
    assert_eq!(signature.len(), 64, "hex-encoded SHA-256 digest expected");
}

#[test]
fn test_generated_signature_matches_backend() {
    // The emitted signature is exactly the backend's digest over
    // "{timestamp}.{payload}".
    let header = generate_test_header_string(
        TestHeaderOptions::new(r#"{"id":"evt_123"}"#, "webhook_secret_key").timestamp(1614556800),
    )
    .unwrap();

    assert_eq!(
        header,
        "t=1614556800,v1=3f3df45b189e5a4b383192094041bb94c0a607c0817fe19b0f900d629d302259"
    );
}

#[test]
fn test_explicit_signature_is_emitted_verbatim() {
    let header = generate_test_header_string(
        TestHeaderOptions::new("payload", "")
            .timestamp(1614556800)
            .signature("deadbeef"),
    )
    .expect("explicit signature needs no secret");

    assert_eq!(header, "t=1614556800,v1=deadbeef");
}

#[test]
fn test_custom_scheme_is_emitted() {
    let header = generate_test_header_string(
        TestHeaderOptions::new("payload", "whsec_test")
            .timestamp(1614556800)
            .scheme("v2"),
    )
    .unwrap();

    assert!(header.starts_with("t=1614556800,v2="));
}

// ============================================================================
// Test: Defaults
// ============================================================================

#[test]
fn test_timestamp_defaults_to_now() {
    let before = chrono::Utc::now().timestamp();

    let header =
        generate_test_header_string(TestHeaderOptions::new("payload", "whsec_test")).unwrap();

    let after = chrono::Utc::now().timestamp();
    let timestamp: i64 = header
        .strip_prefix("t=")
        .and_then(|rest| rest.split(',').next())
        .and_then(|t| t.parse().ok())
        .expect("header should start with a numeric t= pair");
    assert!(
        (before..=after).contains(&timestamp),
        "Defaulted timestamp {timestamp} should be between {before} and {after}"
    );
}

#[test]
fn test_zero_timestamp_falls_back_to_now() {
    let before = chrono::Utc::now().timestamp();

    let header = generate_test_header_string(
        TestHeaderOptions::new("payload", "whsec_test").timestamp(0),
    )
    .unwrap();

    let timestamp: i64 = header
        .strip_prefix("t=")
        .and_then(|rest| rest.split(',').next())
        .and_then(|t| t.parse().ok())
        .unwrap();
    assert!(timestamp >= before, "Zero timestamp should mean \"now\"");
}

#[test]
fn test_empty_scheme_falls_back_to_v1() {
    let header = generate_test_header_string(
        TestHeaderOptions::new("payload", "whsec_test")
            .timestamp(1614556800)
            .scheme(""),
    )
    .unwrap();

    assert!(header.starts_with("t=1614556800,v1="));
}

// ============================================================================
// Test: Option Validation
// ============================================================================

#[test]
fn test_missing_secret_without_signature_is_an_options_error() {
    let result =
        generate_test_header_string(TestHeaderOptions::new("payload", "").timestamp(1614556800));

    match result {
        Err(WebhookError::InvalidOptions { message }) => {
            assert!(message.contains("secret"), "message was: {message}");
        }
        other => panic!("Expected InvalidOptions, got {other:?}"),
    }
}

// ============================================================================
// Test: Provider Override
// ============================================================================

struct CannedProvider;

#[async_trait]
impl CryptoProvider for CannedProvider {
    fn compute_hmac_signature(&self, _data: &str, _secret: &str) -> Result<String, CryptoError> {
        Ok("cafe".to_string())
    }
}

#[test]
fn test_provider_override_is_used_for_signing() {
    let header = generate_test_header_string_with_provider(
        TestHeaderOptions::new("payload", "whsec_test").timestamp(1614556800),
        &CannedProvider,
    )
    .unwrap();

    assert_eq!(header, "t=1614556800,v1=cafe");
}
