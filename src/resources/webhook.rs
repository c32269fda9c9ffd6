//! Webhook resource.
//!
//! Records of webhook deliveries made to an endpoint, retrievable for
//! debugging. Verifying webhook signatures is out of scope here.
//!
//! Reference: https://developer.gocardless.com/api-reference#core-endpoints-webhooks

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One webhook delivery attempt and the response it received.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Webhook {
    /// Unique identifier, beginning with "WB".
    pub id: String,
    pub created_at: DateTime<Utc>,
    /// Whether this was a test webhook triggered from the dashboard.
    #[serde(default)]
    pub is_test: bool,
    /// JSON body that was sent.
    pub request_body: String,
    #[serde(default)]
    pub request_headers: BTreeMap<String, String>,
    #[serde(default)]
    pub response_body: Option<String>,
    /// True when the stored response body was cut off at the storage limit.
    #[serde(default)]
    pub response_body_truncated: bool,
    #[serde(default)]
    pub response_code: Option<i32>,
    #[serde(default)]
    pub response_headers: BTreeMap<String, String>,
    /// Whether the endpoint acknowledged the delivery with a 2xx.
    #[serde(default)]
    pub successful: bool,
    /// Endpoint the webhook was sent to.
    pub url: String,
}
