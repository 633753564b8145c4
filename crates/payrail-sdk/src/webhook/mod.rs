//! Webhook signature verification and test-fixture generation.
//!
//! Payrail signs every webhook delivery: the `Payrail-Signature` header
//! carries a unix timestamp and one or more HMAC-SHA256 signatures over
//! `"{timestamp}.{raw body}"`. This module verifies that header against the
//! raw request bytes, bounding replay exposure with a tolerance window, and
//! can also run the protocol in reverse to synthesize test fixtures.
//!
//! # Core Components
//!
//! - [`SignatureHeader`] - parsed form of the signature header
//! - [`verify_header`]/[`verify_header_async`] - per-call verification
//! - [`WebhookVerifier`] - construct-once verifier bound to an endpoint secret
//! - [`CryptoProvider`] - pluggable HMAC-SHA256 backend
//! - [`generate_test_header_string`] - fixture generation for test suites
//!
//! # Raw Body Requirement
//!
//! Signatures cover the exact bytes on the wire. The HTTP layer above this
//! module must preserve the unparsed request body; any re-parsing or
//! re-encoding upstream (pretty-printing, key reordering) produces different
//! bytes and makes every verification fail. This is a documented failure mode
//! of the integration, not of the verifier.
//!
//! # Examples
//!
//! ```rust
//! use payrail_sdk::webhook::{
//!     generate_test_header_string, TestHeaderOptions, WebhookVerifier,
//! };
//!
//! let secret = "whsec_test";
//! let payload = br#"{"id":"evt_1","object":"event","type":"payment_intent.succeeded","created":1614556800,"data":{"object":{}}}"#;
//!
//! // Synthesize the header Payrail would have sent for this body.
//! let header = generate_test_header_string(TestHeaderOptions::new(
//!     String::from_utf8(payload.to_vec()).unwrap(),
//!     secret,
//! ))
//! .unwrap();
//!
//! let verifier = WebhookVerifier::new(secret);
//! let event = verifier.construct_event(payload, &header).unwrap();
//! assert_eq!(event.event_type, "payment_intent.succeeded");
//! ```

pub mod crypto;
pub mod header;
pub mod test_header;
pub mod verifier;

// Re-export main types
pub use crypto::{CryptoProvider, DefaultCryptoProvider};
pub use header::{single_header_value, SignatureHeader};
pub use test_header::{
    generate_test_header_string, generate_test_header_string_with_provider, TestHeaderOptions,
};
pub use verifier::{verify_header, verify_header_async, WebhookVerifier, DEFAULT_TOLERANCE_SECS};

/// HTTP header that carries the webhook signature.
pub const SIGNATURE_HEADER: &str = "Payrail-Signature";

/// Signature scheme this verifier understands.
///
/// Versioned so that a future signature format can coexist with `v1` in the
/// same header without breaking existing verifiers.
pub const SCHEME_V1: &str = "v1";

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
