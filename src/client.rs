//! GoCardless API client
//!
//! Typed HTTP client for fetching and creating resources. Each method maps
//! one-to-one onto a documented endpoint and unwraps the resource envelope
//! the API puts around bodies ({"payouts": ...}, {"events": ...}, and so
//! on). Listing endpoints are cursor-paginated via [`Page`].
//!
//! Deliberately absent: rate limiting, retries and webhook signature
//! verification.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{ApiErrorBody, ApiErrorEnvelope, Error, Result};
use crate::metadata::Metadata;
use crate::resources::{
    AccountType, Balance, Creditor, CreditorBankAccount, Currency, Event, EventResourceType,
    Payout, PayoutStatus, PayoutType, Webhook,
};

const LIVE_API_BASE: &str = "https://api.gocardless.com";
const SANDBOX_API_BASE: &str = "https://api-sandbox.gocardless.com";
/// API version pin sent with every request.
const GOCARDLESS_VERSION: &str = "2015-07-06";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Which GoCardless environment to talk to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Live,
    Sandbox,
}

impl Environment {
    pub fn base_url(self) -> &'static str {
        match self {
            Environment::Live => LIVE_API_BASE,
            Environment::Sandbox => SANDBOX_API_BASE,
        }
    }
}

/// Options controlling client construction.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Read-write access token from the dashboard.
    pub access_token: String,
    pub environment: Environment,
    pub timeout: Duration,
}

impl ClientConfig {
    /// Config for the live environment with the default timeout.
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            environment: Environment::Live,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Config for the sandbox environment with the default timeout.
    pub fn sandbox(access_token: impl Into<String>) -> Self {
        Self {
            environment: Environment::Sandbox,
            ..Self::new(access_token)
        }
    }
}

/// One page of a cursor-paginated listing.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub meta: ListMeta,
}

/// Pagination block returned in list envelopes.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListMeta {
    #[serde(default)]
    pub cursors: Cursors,
    #[serde(default)]
    pub limit: Option<i32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Cursors {
    /// Cursor for the page before this one.
    #[serde(default)]
    pub before: Option<String>,
    /// Cursor for the page after this one. Absent on the last page.
    #[serde(default)]
    pub after: Option<String>,
}

pub struct GoCardlessClient {
    client: Client,
    base_url: Url,
}

impl GoCardlessClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        if config.access_token.is_empty() {
            return Err(Error::Config {
                message: "access token must not be empty".to_string(),
            });
        }

        let mut headers = HeaderMap::new();
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", config.access_token))
            .map_err(|_| Error::Config {
                message: "access token contains characters not valid in a header".to_string(),
            })?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);
        headers.insert(
            "GoCardless-Version",
            HeaderValue::from_static(GOCARDLESS_VERSION),
        );

        let client = Client::builder()
            .timeout(config.timeout)
            .default_headers(headers)
            .build()?;

        let base_url = Url::parse(config.environment.base_url()).map_err(|e| Error::Config {
            message: format!("invalid base URL: {e}"),
        })?;

        Ok(Self { client, base_url })
    }

    // ------------------------------------------------------------------
    // Payouts
    // ------------------------------------------------------------------

    /// Fetch a single payout by ID.
    pub async fn payout(&self, id: &str) -> Result<Payout> {
        let envelope: PayoutEnvelope = self.get(&["payouts", id]).await?;
        Ok(envelope.payouts)
    }

    /// List payouts matching the given filters.
    pub async fn payouts(&self, params: &PayoutListParams) -> Result<Page<Payout>> {
        let envelope: PayoutListEnvelope = self.get_with_query(&["payouts"], params).await?;
        Ok(Page {
            items: envelope.payouts,
            meta: envelope.meta,
        })
    }

    // ------------------------------------------------------------------
    // Balances
    // ------------------------------------------------------------------

    /// List the balances held for a creditor.
    pub async fn balances(&self, creditor_id: &str) -> Result<Page<Balance>> {
        let envelope: BalanceListEnvelope = self
            .get_with_query(&["balances"], &[("creditor", creditor_id)])
            .await?;
        Ok(Page {
            items: envelope.balances,
            meta: envelope.meta,
        })
    }

    // ------------------------------------------------------------------
    // Creditors
    // ------------------------------------------------------------------

    /// Fetch a single creditor by ID.
    pub async fn creditor(&self, id: &str) -> Result<Creditor> {
        let envelope: CreditorEnvelope = self.get(&["creditors", id]).await?;
        Ok(envelope.creditors)
    }

    /// List creditors.
    pub async fn creditors(&self, params: &ListParams) -> Result<Page<Creditor>> {
        let envelope: CreditorListEnvelope = self.get_with_query(&["creditors"], params).await?;
        Ok(Page {
            items: envelope.creditors,
            meta: envelope.meta,
        })
    }

    // ------------------------------------------------------------------
    // Creditor bank accounts
    // ------------------------------------------------------------------

    /// Fetch a single creditor bank account by ID.
    pub async fn creditor_bank_account(&self, id: &str) -> Result<CreditorBankAccount> {
        let envelope: CreditorBankAccountEnvelope =
            self.get(&["creditor_bank_accounts", id]).await?;
        Ok(envelope.creditor_bank_accounts)
    }

    /// List creditor bank accounts.
    pub async fn creditor_bank_accounts(
        &self,
        params: &CreditorBankAccountListParams,
    ) -> Result<Page<CreditorBankAccount>> {
        let envelope: CreditorBankAccountListEnvelope = self
            .get_with_query(&["creditor_bank_accounts"], params)
            .await?;
        Ok(Page {
            items: envelope.creditor_bank_accounts,
            meta: envelope.meta,
        })
    }

    /// Create a creditor bank account.
    pub async fn create_creditor_bank_account(
        &self,
        params: &CreditorBankAccountCreateParams,
    ) -> Result<CreditorBankAccount> {
        let body = CreditorBankAccountCreateEnvelope {
            creditor_bank_accounts: params,
        };
        let envelope: CreditorBankAccountEnvelope = self
            .post_with_body(&["creditor_bank_accounts"], &body)
            .await?;
        Ok(envelope.creditor_bank_accounts)
    }

    /// Disable a creditor bank account. Disabled accounts cannot be
    /// re-enabled.
    pub async fn disable_creditor_bank_account(&self, id: &str) -> Result<CreditorBankAccount> {
        let envelope: CreditorBankAccountEnvelope = self
            .post(&["creditor_bank_accounts", id, "actions", "disable"])
            .await?;
        Ok(envelope.creditor_bank_accounts)
    }

    // ------------------------------------------------------------------
    // Webhooks
    // ------------------------------------------------------------------

    /// Fetch a single webhook delivery record by ID.
    pub async fn webhook(&self, id: &str) -> Result<Webhook> {
        let envelope: WebhookEnvelope = self.get(&["webhooks", id]).await?;
        Ok(envelope.webhooks)
    }

    /// List webhook delivery records.
    pub async fn webhooks(&self, params: &WebhookListParams) -> Result<Page<Webhook>> {
        let envelope: WebhookListEnvelope = self.get_with_query(&["webhooks"], params).await?;
        Ok(Page {
            items: envelope.webhooks,
            meta: envelope.meta,
        })
    }

    /// Re-send a webhook. The API only permits this for webhooks that
    /// failed delivery.
    pub async fn retry_webhook(&self, id: &str) -> Result<Webhook> {
        let envelope: WebhookEnvelope =
            self.post(&["webhooks", id, "actions", "retry"]).await?;
        Ok(envelope.webhooks)
    }

    // ------------------------------------------------------------------
    // Events
    // ------------------------------------------------------------------

    /// Fetch a single event by ID.
    pub async fn event(&self, id: &str) -> Result<Event> {
        let envelope: EventEnvelope = self.get(&["events", id]).await?;
        Ok(envelope.events)
    }

    /// List events matching the given filters.
    pub async fn events(&self, params: &EventListParams) -> Result<Page<Event>> {
        let envelope: EventListEnvelope = self.get_with_query(&["events"], params).await?;
        Ok(Page {
            items: envelope.events,
            meta: envelope.meta,
        })
    }

    // ------------------------------------------------------------------
    // Transport helpers
    // ------------------------------------------------------------------

    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| Error::Config {
                message: "base URL cannot carry path segments".to_string(),
            })?
            .extend(segments);
        Ok(url)
    }

    async fn get<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T> {
        let url = self.endpoint(segments)?;
        tracing::debug!(%url, "GET");
        let response = self.client.get(url).send().await?;
        Self::decode_response(response).await
    }

    async fn get_with_query<T, Q>(&self, segments: &[&str], query: &Q) -> Result<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let url = self.endpoint(segments)?;
        tracing::debug!(%url, "GET");
        let response = self.client.get(url).query(query).send().await?;
        Self::decode_response(response).await
    }

    async fn post<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T> {
        let url = self.endpoint(segments)?;
        tracing::debug!(%url, "POST");
        let response = self.client.post(url).send().await?;
        Self::decode_response(response).await
    }

    async fn post_with_body<T, B>(&self, segments: &[&str], body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize,
    {
        let url = self.endpoint(segments)?;
        tracing::debug!(%url, "POST");
        let response = self.client.post(url).json(body).send().await?;
        Self::decode_response(response).await
    }

    async fn decode_response<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let status = response.status();
        if status.is_success() {
            return Ok(response.json::<T>().await?);
        }

        let status = status.as_u16();
        let raw = response.text().await?;
        let body = serde_json::from_str::<ApiErrorEnvelope>(&raw)
            .map(|envelope| envelope.error)
            .unwrap_or_else(|_| ApiErrorBody::from_message(raw));
        tracing::debug!(status, message = %body.message, "API error response");
        Err(Error::Api { status, body })
    }
}

// ----------------------------------------------------------------------
// List / create parameters
// ----------------------------------------------------------------------

/// Cursor and limit parameters shared by plain listing endpoints.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<String>,
}

/// Filters for listing payouts.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PayoutListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<String>,
    /// Restrict to payouts for this creditor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creditor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creditor_bank_account: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<Currency>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PayoutStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payout_type: Option<PayoutType>,
}

/// Filters for listing creditor bank accounts.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreditorBankAccountListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creditor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

/// Filters for listing webhook delivery records.
#[derive(Debug, Clone, Default, Serialize)]
pub struct WebhookListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_test: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub successful: Option<bool>,
}

/// Filters for listing events.
#[derive(Debug, Clone, Default, Serialize)]
pub struct EventListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<String>,
    /// Restrict to one resource family.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<EventResourceType>,
    /// Restrict to one action, e.g. "paid".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    /// Restrict to events on this payout.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payout: Option<String>,
}

/// Body for creating a creditor bank account.
///
/// Exactly one of the account identification schemes must be filled in:
/// account number plus branch code, or IBAN.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreditorBankAccountCreateParams {
    pub account_holder_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iban: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<Currency>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_type: Option<AccountType>,
    #[serde(skip_serializing_if = "Metadata::is_empty")]
    pub metadata: Metadata,
    pub links: CreditorBankAccountCreateLinks,
}

/// Links required when creating a creditor bank account.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreditorBankAccountCreateLinks {
    /// ID of the creditor the account belongs to.
    pub creditor: String,
}

// ----------------------------------------------------------------------
// Wire envelopes
// ----------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct PayoutEnvelope {
    payouts: Payout,
}

#[derive(Debug, Deserialize)]
struct PayoutListEnvelope {
    payouts: Vec<Payout>,
    #[serde(default)]
    meta: ListMeta,
}

#[derive(Debug, Deserialize)]
struct BalanceListEnvelope {
    balances: Vec<Balance>,
    #[serde(default)]
    meta: ListMeta,
}

#[derive(Debug, Deserialize)]
struct CreditorEnvelope {
    creditors: Creditor,
}

#[derive(Debug, Deserialize)]
struct CreditorListEnvelope {
    creditors: Vec<Creditor>,
    #[serde(default)]
    meta: ListMeta,
}

#[derive(Debug, Deserialize)]
struct CreditorBankAccountEnvelope {
    creditor_bank_accounts: CreditorBankAccount,
}

#[derive(Debug, Deserialize)]
struct CreditorBankAccountListEnvelope {
    creditor_bank_accounts: Vec<CreditorBankAccount>,
    #[serde(default)]
    meta: ListMeta,
}

#[derive(Debug, Serialize)]
struct CreditorBankAccountCreateEnvelope<'a> {
    creditor_bank_accounts: &'a CreditorBankAccountCreateParams,
}

#[derive(Debug, Deserialize)]
struct WebhookEnvelope {
    webhooks: Webhook,
}

#[derive(Debug, Deserialize)]
struct WebhookListEnvelope {
    webhooks: Vec<Webhook>,
    #[serde(default)]
    meta: ListMeta,
}

#[derive(Debug, Deserialize)]
struct EventEnvelope {
    events: Event,
}

#[derive(Debug, Deserialize)]
struct EventListEnvelope {
    events: Vec<Event>,
    #[serde(default)]
    meta: ListMeta,
}
