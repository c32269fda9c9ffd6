//! Creditor resource.
//!
//! Reference: https://developer.gocardless.com/api-reference#core-endpoints-creditors

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::currency::Currency;
use crate::wire_enum;

/// The organisation collecting payments and receiving payouts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Creditor {
    /// Unique identifier, beginning with "CR".
    pub id: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub address_line1: Option<String>,
    #[serde(default)]
    pub address_line2: Option<String>,
    #[serde(default)]
    pub address_line3: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub postal_code: Option<String>,
    /// ISO 3166-1 alpha-2 code.
    #[serde(default)]
    pub country_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verification_status: Option<VerificationStatus>,
    /// Currency non-supported payout currencies are converted into.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fx_payout_currency: Option<Currency>,
    #[serde(default)]
    pub links: CreditorLinks,
}

/// Default payout accounts per currency, where configured.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreditorLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_aud_payout_account: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_dkk_payout_account: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_eur_payout_account: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_gbp_payout_account: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_sek_payout_account: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_usd_payout_account: Option<String>,
}

wire_enum! {
    /// Progress of the creditor through identity verification.
    pub enum VerificationStatus {
        Successful => "successful",
        InReview => "in_review",
        ActionRequired => "action_required",
    }
}
