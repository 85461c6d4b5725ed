//! HTTP client for the ledger service.

use reqwest::header::{HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use coopera_core::{AccountBalance, RawTransaction};

use crate::session::SessionAccess;

#[derive(Debug, Error)]
pub enum LedgerError {
    /// No bearer credential in the session store.
    #[error("missing session credential")]
    MissingCredential,

    /// Network-level failure (connect, timeout, body read, decode).
    #[error("ledger request failed")]
    Transport(#[from] reqwest::Error),

    /// The ledger answered with a non-success status.
    #[error("ledger returned {status}: {body}")]
    Status { status: StatusCode, body: String },
}

pub type LedgerResult<T> = Result<T, LedgerError>;

/// Read access to the remote ledger.
///
/// History calls return records in server-defined order: typically
/// most-recent-first, but not guaranteed. Callers that need "the latest N"
/// must sort themselves (see [`crate::service::AccountService::latest_at`]).
///
/// The history endpoints scope results by the bearer credential
/// server-side; the account id parameter keeps the capability explicit so
/// fakes and future backends can scope by it directly.
#[allow(async_fn_in_trait)]
pub trait LedgerApi {
    async fn fetch_all(&self, account_id: &str) -> LedgerResult<Vec<RawTransaction>>;

    async fn fetch_by_status(
        &self,
        account_id: &str,
        status: &str,
    ) -> LedgerResult<Vec<RawTransaction>>;

    async fn fetch_by_date_range(
        &self,
        account_id: &str,
        from: &str,
        to: &str,
    ) -> LedgerResult<Vec<RawTransaction>>;

    async fn fetch_balance(&self, account_id: &str) -> LedgerResult<AccountBalance>;

    async fn deposit(&self, account_id: &str, amount: f64) -> LedgerResult<AccountBalance>;
}

/// reqwest-backed [`LedgerApi`] speaking the ledger's `/api/cuenta` routes.
pub struct HttpLedgerClient<S> {
    base_url: String,
    http: reqwest::Client,
    session: S,
}

impl<S: SessionAccess> HttpLedgerClient<S> {
    pub fn new(base_url: impl Into<String>, session: S) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            http: reqwest::Client::new(),
            session,
        }
    }

    fn bearer(&self) -> LedgerResult<HeaderValue> {
        let token = self.session.token().ok_or(LedgerError::MissingCredential)?;
        HeaderValue::from_str(&format!("Bearer {token}"))
            .map_err(|_| LedgerError::MissingCredential)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> LedgerResult<T> {
        let url = format!("{}{path}", self.base_url);
        tracing::debug!(%url, "ledger GET");

        let resp = self
            .http
            .get(&url)
            .header(AUTHORIZATION, self.bearer()?)
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(LedgerError::Status { status, body });
        }
        Ok(resp.json().await?)
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> LedgerResult<T> {
        let url = format!("{}{path}", self.base_url);
        tracing::debug!(%url, "ledger POST");

        let resp = self
            .http
            .post(&url)
            .header(AUTHORIZATION, self.bearer()?)
            .json(body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(LedgerError::Status { status, body });
        }
        Ok(resp.json().await?)
    }
}

impl<S: SessionAccess> LedgerApi for HttpLedgerClient<S> {
    async fn fetch_all(&self, _account_id: &str) -> LedgerResult<Vec<RawTransaction>> {
        self.get_json("/api/cuenta/historial/todo").await
    }

    async fn fetch_by_status(
        &self,
        _account_id: &str,
        status: &str,
    ) -> LedgerResult<Vec<RawTransaction>> {
        self.get_json(&format!("/api/cuenta/historial/estado/{status}"))
            .await
    }

    async fn fetch_by_date_range(
        &self,
        _account_id: &str,
        from: &str,
        to: &str,
    ) -> LedgerResult<Vec<RawTransaction>> {
        self.get_json(&format!("/api/cuenta/historial/fechas/{from}/{to}"))
            .await
    }

    async fn fetch_balance(&self, account_id: &str) -> LedgerResult<AccountBalance> {
        self.get_json(&format!("/api/cuenta/consultar-saldo/{account_id}"))
            .await
    }

    async fn deposit(&self, account_id: &str, amount: f64) -> LedgerResult<AccountBalance> {
        #[derive(Serialize)]
        struct DepositReq<'a> {
            id: &'a str,
            amount: f64,
        }

        self.post_json(
            "/api/cuenta/agregar",
            &DepositReq {
                id: account_id,
                amount,
            },
        )
        .await
    }
}
