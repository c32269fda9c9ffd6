//! Creditor balance resource.
//!
//! Reference: https://developer.gocardless.com/api-reference#core-endpoints-balances

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::currency::Currency;
use crate::wire_enum;

/// Funds held on behalf of a creditor, split by lifecycle stage.
///
/// Balances have no ID of their own; a creditor has one balance per
/// (currency, balance type) pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Balance {
    /// Amount in the lowest denomination of `currency` (e.g. pence in GBP,
    /// cents in EUR).
    pub amount: i64,
    pub balance_type: BalanceType,
    pub currency: Currency,
    /// When this balance figure was last refreshed.
    #[serde(default)]
    pub last_updated_at: Option<DateTime<Utc>>,
    pub links: BalanceLinks,
}

/// Resources linked from a balance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalanceLinks {
    /// ID of the creditor the balance belongs to.
    pub creditor: String,
}

wire_enum! {
    /// Lifecycle stage a balance figure refers to.
    pub enum BalanceType {
        /// Funds confirmed as collected, not yet paid out.
        ConfirmedFunds => "confirmed_funds",
        /// Funds assigned to a payout that has not yet settled.
        PendingPayouts => "pending_payouts",
        /// Payments submitted to the banks, awaiting confirmation.
        PendingPaymentsSubmitted => "pending_payments_submitted",
    }
}
