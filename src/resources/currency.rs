//! Currencies supported for bank accounts, payouts and balances.

use crate::wire_enum;

wire_enum! {
    /// ISO 4217 currency codes accepted by the API.
    pub enum Currency {
        Aud => "AUD",
        Cad => "CAD",
        Dkk => "DKK",
        Eur => "EUR",
        Gbp => "GBP",
        Nzd => "NZD",
        Sek => "SEK",
        Usd => "USD",
    }
}
