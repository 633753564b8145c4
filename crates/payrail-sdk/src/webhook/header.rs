//! Signature header parsing.
//!
//! The `Payrail-Signature` header is a comma-separated list of `key=value`
//! pairs carrying a unix timestamp (`t=...`) and one or more scheme-tagged
//! signatures (`v1=...`). Parsing is a pure function of the header text; all
//! policy (which failures mean what) lives in the verifier.

use crate::error::WebhookError;

/// Structured form of a signature header.
///
/// Built by scanning `key=value` tokens:
/// - `t` sets the timestamp; the last occurrence wins. A value that does not
///   parse as a base-10 integer leaves the timestamp unset, the same as a
///   missing `t=` pair.
/// - Keys equal to the expected scheme append their value to `signatures` in
///   encounter order. Multiple signatures under one scheme are how secret
///   rotation presents: both the old and the new secret's signatures are sent.
/// - Unrecognized keys are ignored so that future schemes do not break
///   existing verifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureHeader {
    /// Signed unix timestamp in seconds, if a parseable `t=` pair was found.
    pub timestamp: Option<i64>,
    /// Candidate signatures under the expected scheme, in encounter order.
    pub signatures: Vec<String>,
}

impl SignatureHeader {
    /// Parse a raw header string, collecting signatures tagged with
    /// `expected_scheme`.
    ///
    /// Never fails: unusable input yields a header that
    /// [`is_verifiable`](Self::is_verifiable) reports as unfit for
    /// verification.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use payrail_sdk::webhook::SignatureHeader;
    ///
    /// let header = SignatureHeader::parse("t=1614556800,v1=deadbeef", "v1");
    /// assert_eq!(header.timestamp, Some(1614556800));
    /// assert_eq!(header.signatures, vec!["deadbeef".to_string()]);
    /// ```
    pub fn parse(header: &str, expected_scheme: &str) -> Self {
        let mut timestamp = None;
        let mut signatures = Vec::new();

        for token in header.split(',') {
            // Tokens without a '=' carry neither a timestamp nor a signature.
            let Some((key, value)) = token.split_once('=') else {
                continue;
            };

            if key == "t" {
                timestamp = value.parse::<i64>().ok();
            } else if key == expected_scheme {
                signatures.push(value.to_string());
            }
        }

        Self {
            timestamp,
            signatures,
        }
    }

    /// Check whether this header carries everything verification needs: a
    /// timestamp and at least one candidate signature.
    pub fn is_verifiable(&self) -> bool {
        self.timestamp.is_some() && !self.signatures.is_empty()
    }
}

/// Extract the single signature header value from a multi-valued transport.
///
/// HTTP allows a header field to occur more than once, and several server
/// frameworks surface that as a list. A repeated signature header is invalid
/// input: this guard fails fast instead of silently picking one value.
///
/// # Errors
///
/// Returns [`WebhookError::AmbiguousHeader`] unless `values` holds exactly
/// one entry.
///
/// # Examples
///
/// ```rust
/// use payrail_sdk::webhook::single_header_value;
///
/// let values = vec!["t=1614556800,v1=deadbeef".to_string()];
/// assert!(single_header_value(&values).is_ok());
///
/// let repeated = vec!["t=1,v1=aa".to_string(), "t=2,v1=bb".to_string()];
/// assert!(single_header_value(&repeated).is_err());
/// ```
pub fn single_header_value<S: AsRef<str>>(values: &[S]) -> Result<&str, WebhookError> {
    match values {
        [single] => Ok(single.as_ref()),
        _ => Err(WebhookError::AmbiguousHeader {
            count: values.len(),
        }),
    }
}

#[cfg(test)]
#[path = "header_tests.rs"]
mod tests;
