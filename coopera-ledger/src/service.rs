//! Account-facing operations: history queries, balance, deposits.
//!
//! Every operation resolves the viewing account from the injected session,
//! calls the ledger, and runs the results through normalization. Failure
//! policy: a transport failure or missing session degrades to `None` ("no
//! data available", distinct from an empty history); a malformed creation
//! date is a data-contract violation and propagates as an error.

use std::cmp::Reverse;

use chrono::{DateTime, Utc};

use coopera_core::format::creation_instant;
use coopera_core::normalize::normalize;
use coopera_core::window::DateWindow;
use coopera_core::{AccountBalance, FormatError, NormalizedTransaction, RawTransaction};

use crate::client::{LedgerApi, LedgerResult};
use crate::session::SessionAccess;

/// The "latest movements" view queries this many days back...
pub const LATEST_WINDOW_DAYS: u32 = 15;
/// ...and shows at most this many movements.
pub const LATEST_LIMIT: usize = 5;

pub struct AccountService<S, L> {
    session: S,
    ledger: L,
}

impl<S: SessionAccess, L: LedgerApi> AccountService<S, L> {
    pub fn new(session: S, ledger: L) -> Self {
        Self { session, ledger }
    }

    /// Full movement history for the session account, newest-first as the
    /// ledger returns it.
    pub async fn full_history(
        &self,
    ) -> Result<Option<Vec<NormalizedTransaction>>, FormatError> {
        let Some(account) = self.viewer() else {
            return Ok(None);
        };
        let Some(records) = recover(self.ledger.fetch_all(&account).await, "historial/todo")
        else {
            return Ok(None);
        };
        Ok(Some(normalize_all(&records, &account)?))
    }

    /// History filtered by ledger status ("pendiente", "aprobado", ...).
    pub async fn history_by_status(
        &self,
        status: &str,
    ) -> Result<Option<Vec<NormalizedTransaction>>, FormatError> {
        let Some(account) = self.viewer() else {
            return Ok(None);
        };
        let Some(records) = recover(
            self.ledger.fetch_by_status(&account, status).await,
            "historial/estado",
        ) else {
            return Ok(None);
        };
        Ok(Some(normalize_all(&records, &account)?))
    }

    /// History bounded by `YYYY-MM-DD` dates, inclusive.
    pub async fn history_by_dates(
        &self,
        from: &str,
        to: &str,
    ) -> Result<Option<Vec<NormalizedTransaction>>, FormatError> {
        let Some(account) = self.viewer() else {
            return Ok(None);
        };
        let Some(records) = recover(
            self.ledger.fetch_by_date_range(&account, from, to).await,
            "historial/fechas",
        ) else {
            return Ok(None);
        };
        Ok(Some(normalize_all(&records, &account)?))
    }

    /// The latest movements: at most [`LATEST_LIMIT`] from the last
    /// [`LATEST_WINDOW_DAYS`] days, newest first.
    pub async fn latest(&self) -> Result<Option<Vec<NormalizedTransaction>>, FormatError> {
        self.latest_at(Utc::now()).await
    }

    /// [`Self::latest`] with an explicit reference instant, so the window
    /// is deterministic under test.
    pub async fn latest_at(
        &self,
        now: DateTime<Utc>,
    ) -> Result<Option<Vec<NormalizedTransaction>>, FormatError> {
        let Some(account) = self.viewer() else {
            return Ok(None);
        };
        let window = DateWindow::last_n_days(LATEST_WINDOW_DAYS, now);
        let Some(records) = recover(
            self.ledger
                .fetch_by_date_range(&account, &window.from_param(), &window.to_param())
                .await,
            "historial/fechas",
        ) else {
            return Ok(None);
        };

        let mut movements = normalize_all(&records, &account)?;
        // The ledger's order is unspecified; sort here so "latest" holds
        // no matter what the server did.
        movements.sort_by_key(|t| Reverse(creation_instant(&t.raw.creation_date).ok()));
        movements.truncate(LATEST_LIMIT);
        Ok(Some(movements))
    }

    /// Current balance of the session account.
    pub async fn balance(&self) -> Option<AccountBalance> {
        let account = self.viewer()?;
        recover(self.ledger.fetch_balance(&account).await, "consultar-saldo")
    }

    /// Load money into the session account, returning the updated balance.
    pub async fn deposit(&self, amount: f64) -> Option<AccountBalance> {
        let account = self.viewer()?;
        recover(self.ledger.deposit(&account, amount).await, "agregar")
    }

    fn viewer(&self) -> Option<String> {
        let account = self.session.account_id();
        if account.is_none() {
            tracing::warn!("no viewing account in session; treating as no data");
        }
        account
    }
}

fn normalize_all(
    records: &[RawTransaction],
    account: &str,
) -> Result<Vec<NormalizedTransaction>, FormatError> {
    records.iter().map(|t| normalize(t, account)).collect()
}

fn recover<T>(result: LedgerResult<T>, operation: &str) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            tracing::warn!(operation, error = %err, "ledger call failed; treating as no data");
            None
        }
    }
}
