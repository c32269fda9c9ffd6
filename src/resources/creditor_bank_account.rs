//! Creditor bank account resource.
//!
//! Reference: https://developer.gocardless.com/api-reference#core-endpoints-creditor-bank-accounts

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::currency::Currency;
use crate::metadata::Metadata;
use crate::wire_enum;

/// A bank account payouts can be sent to.
///
/// Account numbers are never returned in full; only the last two digits
/// survive into `account_number_ending`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreditorBankAccount {
    /// Unique identifier, beginning with "BA".
    pub id: String,
    pub account_holder_name: String,
    /// Last two digits of the account number.
    pub account_number_ending: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_type: Option<AccountType>,
    #[serde(default)]
    pub bank_name: Option<String>,
    /// ISO 3166-1 alpha-2 code.
    pub country_code: String,
    pub created_at: DateTime<Utc>,
    pub currency: Currency,
    /// Disabled accounts can no longer receive payouts.
    pub enabled: bool,
    pub links: CreditorBankAccountLinks,
    #[serde(default)]
    pub metadata: Metadata,
}

/// Resources linked from a creditor bank account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreditorBankAccountLinks {
    pub creditor: String,
}

wire_enum! {
    /// Bank account type. Relevant for US accounts only.
    pub enum AccountType {
        Savings => "savings",
        Checking => "checking",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_creditor_bank_account_payload() {
        let account: CreditorBankAccount = serde_json::from_str(
            r#"{
                "id": "BA000098765432",
                "account_holder_name": "ACME PLC",
                "account_number_ending": "11",
                "account_type": "checking",
                "bank_name": "BARCLAYS BANK PLC",
                "country_code": "GB",
                "created_at": "2024-01-10T16:20:05.000Z",
                "currency": "GBP",
                "enabled": true,
                "links": {"creditor": "CR000012345678"},
                "metadata": {}
            }"#,
        )
        .unwrap();

        assert_eq!(account.id, "BA000098765432");
        assert_eq!(account.account_type, Some(AccountType::Checking));
        assert!(account.enabled);
        assert!(account.metadata.is_empty());
    }
}
