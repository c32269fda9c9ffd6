//! GoCardless Pro API client
//!
//! Typed resources for the GoCardless payments API, plus the client to
//! fetch them. Two pieces carry the behavioral weight:
//!
//! - [`Metadata`]: the bounded key-value annotation set attached to
//!   resources (at most 3 entries, keys up to 50 characters, values up to
//!   500), validated on every mutation.
//! - Tolerant wire enums ([`codec`]): enumerated fields decode any
//!   unrecognized wire string into an explicit `Unknown` sentinel instead
//!   of failing, so new API values never break an old client. Encoding
//!   the sentinel is the error, not decoding it.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use gocardless_pro::{ClientConfig, GoCardlessClient, PayoutListParams};
//!
//! # async fn run() -> gocardless_pro::Result<()> {
//! let client = GoCardlessClient::new(ClientConfig::sandbox("access-token"))?;
//!
//! let page = client.payouts(&PayoutListParams::default()).await?;
//! for payout in &page.items {
//!     println!("{} {} {}", payout.id, payout.amount, payout.currency);
//! }
//! # Ok(())
//! # }
//! ```

// Core error handling
pub mod error;

// Tolerant wire-string enum codec
pub mod codec;

// Bounded validated metadata attached to resources
pub mod metadata;

// Typed API resources
pub mod resources;

// HTTP client
pub mod client;

pub use client::{
    ClientConfig, CreditorBankAccountCreateLinks, CreditorBankAccountCreateParams,
    CreditorBankAccountListParams, Cursors, Environment, EventListParams, GoCardlessClient,
    ListMeta, ListParams, Page, PayoutListParams, WebhookListParams,
};
pub use error::{EnumError, Error, MetadataError, Result};
pub use metadata::Metadata;
pub use resources::*;
