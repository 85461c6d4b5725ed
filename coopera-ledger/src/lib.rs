//! coopera-ledger: the remote ledger boundary and account services.
//!
//! Capabilities are injected, never ambient: services receive a
//! [`SessionAccess`] and a [`LedgerApi`] at construction, which is what
//! makes every operation testable against in-memory fakes.

pub mod client;
pub mod service;
pub mod session;

pub use client::{HttpLedgerClient, LedgerApi, LedgerError, LedgerResult};
pub use service::{AccountService, LATEST_LIMIT, LATEST_WINDOW_DAYS};
pub use session::{SessionAccess, StaticSession};
