//! Ledger record types, as they cross the wire and as they are displayed.

use serde::{Deserialize, Serialize};

/// A transaction exactly as the ledger service returns it.
///
/// Counterparty accounts and name parts may be absent: donations can be
/// made anonymously, and the ledger serializes missing fields as `null`.
/// Records are never mutated once fetched; display-ready variants are
/// derived per view (see [`crate::normalize`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTransaction {
    pub id: String,
    /// ISO 8601 timestamp, always present.
    pub creation_date: String,
    /// Ledger category tag ("Microcrédito", "Donación", "Pago", ...).
    #[serde(rename = "transaction")]
    pub category: String,
    #[serde(default)]
    pub sender_account: Option<String>,
    #[serde(default)]
    pub receiver_account: Option<String>,
    #[serde(default)]
    pub sender_name: Option<String>,
    #[serde(default)]
    pub sender_surname: Option<String>,
    #[serde(default)]
    pub receiver_name: Option<String>,
    #[serde(default)]
    pub receiver_surname: Option<String>,
    pub amount: f64,
}

/// Whether the viewing account sent or received the money.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Outgoing,
    Incoming,
}

impl Direction {
    /// The viewer is the sender iff the sender account equals the viewing
    /// account id. Account ids are opaque; equality only, never parsed.
    pub fn of(raw: &RawTransaction, viewing_account_id: &str) -> Self {
        if raw.sender_account.as_deref() == Some(viewing_account_id) {
            Direction::Outgoing
        } else {
            Direction::Incoming
        }
    }

    pub fn is_outgoing(self) -> bool {
        matches!(self, Direction::Outgoing)
    }
}

/// Display-ready movement, derived per view and never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedTransaction {
    #[serde(flatten)]
    pub raw: RawTransaction,
    /// Direction-relabeled display category (e.g. "Colaboración enviada").
    pub category: String,
    /// Counterparty description, anonymized when the sender is unknown.
    pub description: String,
    /// Creation date rendered DD/MM/YY, es-ES conventions.
    pub display_date: String,
    pub direction: Direction,
}

/// Balance snapshot returned by the ledger's saldo endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountBalance {
    pub id: String,
    pub balance: f64,
}
