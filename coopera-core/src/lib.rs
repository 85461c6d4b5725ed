//! coopera-core: ledger record types and the movement normalization pipeline.
//!
//! Everything here is pure: given the same raw record and viewing account,
//! normalization always produces the same display record. All I/O lives in
//! coopera-ledger.

pub mod classify;
pub mod format;
pub mod normalize;
pub mod transaction;
pub mod window;

pub use classify::{classify, Classified, LedgerCategory};
pub use format::{creation_instant, describe, display_date, FormatError};
pub use normalize::normalize;
pub use transaction::{AccountBalance, Direction, NormalizedTransaction, RawTransaction};
pub use window::DateWindow;
