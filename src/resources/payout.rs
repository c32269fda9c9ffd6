//! Payout resource.
//!
//! Reference: https://developer.gocardless.com/api-reference#core-endpoints-payouts

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::currency::Currency;
use crate::metadata::Metadata;
use crate::wire_enum;

/// A transfer of collected funds to a creditor's bank account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payout {
    /// Unique identifier, beginning with "PO".
    pub id: String,
    /// Amount in the lowest denomination of `currency`.
    pub amount: i64,
    /// Date the payout is expected to arrive in the bank account.
    #[serde(default)]
    pub arrival_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub currency: Currency,
    /// Fees deducted from this payout, in the lowest denomination.
    #[serde(default)]
    pub deducted_fees: i64,
    /// Present only for payouts settled in a different currency.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fx: Option<PayoutFx>,
    pub links: PayoutLinks,
    #[serde(default)]
    pub metadata: Metadata,
    pub payout_type: PayoutType,
    /// Reference shown on the creditor's bank statement.
    #[serde(default)]
    pub reference: Option<String>,
    pub status: PayoutStatus,
    /// Currency fees were taxed in, where that differs from `currency`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_currency: Option<Currency>,
}

/// Foreign-exchange details for payouts settled in another currency.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayoutFx {
    /// Rate quoted when the payout was created.
    #[serde(default)]
    pub estimated_exchange_rate: Option<Decimal>,
    /// Rate actually applied; set once the payout settles.
    #[serde(default)]
    pub exchange_rate: Option<Decimal>,
    /// Settled amount in `fx_currency`, in its lowest denomination.
    #[serde(default)]
    pub fx_amount: Option<i64>,
    #[serde(default)]
    pub fx_currency: Option<Currency>,
}

/// Resources linked from a payout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayoutLinks {
    pub creditor: String,
    pub creditor_bank_account: String,
}

wire_enum! {
    /// Payout lifecycle state.
    pub enum PayoutStatus {
        Pending => "pending",
        Paid => "paid",
        Bounced => "bounced",
    }
}

wire_enum! {
    /// Whether the payout is for a merchant or a partner integration.
    pub enum PayoutType {
        Merchant => "merchant",
        Partner => "partner",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payout_payload() {
        let payout: Payout = serde_json::from_str(
            r#"{
                "id": "PO00001XKMGAT2",
                "amount": 47600,
                "arrival_date": "2024-06-05",
                "created_at": "2024-06-03T11:15:42.000Z",
                "currency": "GBP",
                "deducted_fees": 1200,
                "fx": {
                    "estimated_exchange_rate": "1.1234567890",
                    "exchange_rate": null,
                    "fx_amount": null,
                    "fx_currency": "EUR"
                },
                "links": {
                    "creditor": "CR000012345678",
                    "creditor_bank_account": "BA000098765432"
                },
                "metadata": {"invoice": "INV-881"},
                "payout_type": "merchant",
                "reference": "JUNE-PAYOUT",
                "status": "paid",
                "tax_currency": "GBP"
            }"#,
        )
        .unwrap();

        assert_eq!(payout.id, "PO00001XKMGAT2");
        assert_eq!(payout.status, PayoutStatus::Paid);
        assert_eq!(payout.payout_type, PayoutType::Merchant);
        assert_eq!(payout.metadata.get("invoice"), Some("INV-881"));

        let fx = payout.fx.unwrap();
        assert_eq!(
            fx.estimated_exchange_rate,
            Some("1.1234567890".parse().unwrap())
        );
        assert_eq!(fx.exchange_rate, None);
        assert_eq!(fx.fx_currency, Some(Currency::Eur));
    }

    #[test]
    fn test_minimal_payout_payload() {
        // Optional blocks absent entirely.
        let payout: Payout = serde_json::from_str(
            r#"{
                "id": "PO00001XKMGAT3",
                "amount": 100,
                "created_at": "2024-06-03T11:15:42.000Z",
                "currency": "SEK",
                "links": {
                    "creditor": "CR000012345678",
                    "creditor_bank_account": "BA000098765432"
                },
                "payout_type": "partner",
                "status": "pending"
            }"#,
        )
        .unwrap();

        assert_eq!(payout.arrival_date, None);
        assert_eq!(payout.deducted_fees, 0);
        assert!(payout.fx.is_none());
        assert!(payout.metadata.is_empty());
    }
}
