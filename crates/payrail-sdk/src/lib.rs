//! # Payrail SDK
//!
//! Client SDK for the Payrail payment-processing API, centered on webhook
//! signature verification: the protocol that lets a server receiving an
//! asynchronous event notification confirm that the body was produced by
//! Payrail and has not been replayed or tampered with.
//!
//! The SDK provides:
//! - Signature header parsing (`t=<unix>,v1=<hex>` pairs)
//! - Blocking and awaitable verification with constant-time comparison and
//!   replay-window enforcement
//! - A pluggable HMAC-SHA256 crypto backend
//! - Test-fixture header generation for webhook handler test suites
//!
//! Network transport, retries, and resource modeling are deliberately out of
//! scope; the verifier consumes the raw request body and header your HTTP
//! layer hands it.
//!
//! # Examples
//!
//! ## Verifying a webhook
//!
//! ```rust,no_run
//! use payrail_sdk::webhook::WebhookVerifier;
//!
//! # fn example(payload: &[u8], header: &str) {
//! let verifier = WebhookVerifier::new("whsec_...");
//!
//! match verifier.construct_event(payload, header) {
//!     Ok(event) => println!("verified event {}", event.id),
//!     Err(e) if e.is_authentication_failure() => {
//!         // Respond 400; the request could not be proven to come from Payrail.
//!     }
//!     Err(e) => eprintln!("verification setup problem: {e}"),
//! }
//! # }
//! ```
//!
//! ## Multi-valued header guard
//!
//! ```rust,no_run
//! use payrail_sdk::webhook::{single_header_value, WebhookVerifier};
//!
//! # fn example(header_values: Vec<String>, payload: &[u8]) -> Result<(), payrail_sdk::WebhookError> {
//! let verifier = WebhookVerifier::new("whsec_...");
//!
//! // Fails fast if the transport delivered the signature header twice.
//! let header = single_header_value(&header_values)?;
//! verifier.verify(payload, header)?;
//! # Ok(())
//! # }
//! ```

// Public modules
pub mod error;
pub mod events;
pub mod webhook;

// Re-export commonly used types at crate root for convenience
pub use error::{CryptoError, WebhookError};

pub use events::{Event, EventData, EventRequest};

pub use webhook::{
    generate_test_header_string, single_header_value, verify_header, verify_header_async,
    CryptoProvider, DefaultCryptoProvider, SignatureHeader, TestHeaderOptions, WebhookVerifier,
    DEFAULT_TOLERANCE_SECS, SCHEME_V1, SIGNATURE_HEADER,
};
