//! Decoded webhook event model.
//!
//! An [`Event`] is what a webhook body decodes into once its signature has
//! been verified. The `data.object` payload is kept as raw JSON: which
//! resource it holds depends on the event type, and resource modeling is the
//! concern of the wider SDK, not of verification.

use serde::{Deserialize, Serialize};

/// A Payrail event notification.
///
/// Returned by `WebhookVerifier::construct_event` after the signature on the
/// raw body checked out. The caller owns the value; nothing is retained
/// across calls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    /// Unique event identifier, e.g. `evt_1MqqbKLt4dXK03v5qaIbiNCC`.
    pub id: String,
    /// Object discriminator, always `"event"`.
    pub object: String,
    /// Event name, e.g. `payment_intent.succeeded`.
    #[serde(rename = "type")]
    pub event_type: String,
    /// API version the payload was rendered under.
    #[serde(default)]
    pub api_version: Option<String>,
    /// Unix timestamp at which the event was created by the sender.
    pub created: i64,
    /// Whether the event originates from live mode.
    #[serde(default)]
    pub livemode: bool,
    /// Number of webhooks still pending delivery for this event.
    #[serde(default)]
    pub pending_webhooks: u64,
    /// The event payload.
    pub data: EventData,
    /// The API request that caused the event, when there was one.
    #[serde(default)]
    pub request: Option<EventRequest>,
}

/// Payload of an [`Event`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventData {
    /// The resource the event describes, as raw JSON.
    pub object: serde_json::Value,
    /// For `*.updated` events, the attribute values before the change.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_attributes: Option<serde_json::Value>,
}

/// Originating API request of an [`Event`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventRequest {
    /// Request identifier, absent for events not caused by an API call.
    #[serde(default)]
    pub id: Option<String>,
    /// Idempotency key the request carried, if any.
    #[serde(default)]
    pub idempotency_key: Option<String>,
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
