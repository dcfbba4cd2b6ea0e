//! Order hand-off link
//!
//! The composed order summary is handed to an external messaging service as a
//! deep link. Only the link is built here; opening it belongs to the host.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};

/// Characters escaped the same way as `encodeURIComponent`
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub const DEFAULT_ENDPOINT: &str = "https://wa.me/919999999999";
pub const DEFAULT_GREETING: &str = "Hello! I would like to place an order:\n\n";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLink {
    pub endpoint: String,
    pub greeting: String,
}

impl Default for OrderLink {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            greeting: DEFAULT_GREETING.to_string(),
        }
    }
}

impl OrderLink {
    pub fn new(endpoint: impl Into<String>, greeting: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            greeting: greeting.into(),
        }
    }

    /// The text actually sent: greeting followed by the order summary
    pub fn full_message(&self, summary: &str) -> String {
        format!("{}{summary}", self.greeting)
    }

    pub fn url(&self, summary: &str) -> String {
        let text = self.full_message(summary);
        format!(
            "{}?text={}",
            self.endpoint,
            utf8_percent_encode(&text, URI_COMPONENT)
        )
    }
}
