//! Event resource.
//!
//! Events record everything that happens to the other resources and are
//! what webhook bodies carry.
//!
//! Reference: https://developer.gocardless.com/api-reference#core-endpoints-events

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::metadata::Metadata;
use crate::wire_enum;

/// Something that happened to a resource.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    /// Unique identifier, beginning with "EV".
    pub id: String,
    pub created_at: DateTime<Utc>,
    /// What happened, e.g. "paid" or "bounced". Actions are added over
    /// time, so this stays a plain string rather than an enumeration.
    pub action: String,
    pub resource_type: EventResourceType,
    #[serde(default)]
    pub details: Option<EventDetails>,
    #[serde(default)]
    pub links: EventLinks,
    #[serde(default)]
    pub metadata: Metadata,
}

/// Cause and provenance of an event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventDetails {
    #[serde(default)]
    pub origin: Option<EventOrigin>,
    /// Machine-readable cause, e.g. "payout_paid".
    #[serde(default)]
    pub cause: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Direct debit scheme the event relates to, where applicable.
    #[serde(default)]
    pub scheme: Option<String>,
    /// Scheme-specific reason code, where the scheme provides one.
    #[serde(default)]
    pub reason_code: Option<String>,
}

/// The resource an event points at. At most one field is set, matching
/// `resource_type`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creditor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mandate: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payout: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refund: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscription: Option<String>,
    /// Event that caused this one, for chained events.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_event: Option<String>,
}

wire_enum! {
    /// Resource family an event belongs to.
    pub enum EventResourceType {
        BillingRequests => "billing_requests",
        Creditors => "creditors",
        InstalmentSchedules => "instalment_schedules",
        Mandates => "mandates",
        PayerAuthorisations => "payer_authorisations",
        Payments => "payments",
        Payouts => "payouts",
        Refunds => "refunds",
        SchemeIdentifiers => "scheme_identifiers",
        Subscriptions => "subscriptions",
    }
}

wire_enum! {
    /// Who or what triggered an event.
    pub enum EventOrigin {
        Api => "api",
        Gocardless => "gocardless",
        Payer => "payer",
        Customer => "customer",
    }
}
