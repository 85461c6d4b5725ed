//! Deterministic relabeling of ledger categories from the viewer's side.
//!
//! No lookup tables or I/O, just a fixed decision table over the category tag
//! and the transfer direction.

use crate::transaction::{Direction, RawTransaction};

/// The ledger's category vocabulary. Tags outside the known set are kept
/// as [`LedgerCategory::Other`] and pass through display unchanged, so new
/// upstream categories degrade gracefully instead of breaking the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedgerCategory {
    Microcredito,
    Donacion,
    Pago,
    Other,
}

impl LedgerCategory {
    pub fn parse(tag: &str) -> Self {
        match tag {
            "Microcrédito" => LedgerCategory::Microcredito,
            "Donación" => LedgerCategory::Donacion,
            "Pago" => LedgerCategory::Pago,
            _ => LedgerCategory::Other,
        }
    }
}

/// Result of classification.
#[derive(Debug, Clone, PartialEq)]
pub struct Classified {
    pub label: String,
    pub direction: Direction,
}

/// Relabel a raw category for display from the viewing account's side.
///
/// "Donación" and "Pago" share a label: both read as gift-like transfers
/// to the viewer. The distinction survives in the raw record.
pub fn classify(raw: &RawTransaction, viewing_account_id: &str) -> Classified {
    let direction = Direction::of(raw, viewing_account_id);

    let label = match (LedgerCategory::parse(&raw.category), direction) {
        (LedgerCategory::Microcredito, Direction::Outgoing) => "Colaboración enviada".to_string(),
        (LedgerCategory::Microcredito, Direction::Incoming) => "Colaboración recibida".to_string(),
        (LedgerCategory::Donacion | LedgerCategory::Pago, Direction::Outgoing) => {
            "Donación enviada".to_string()
        }
        (LedgerCategory::Donacion | LedgerCategory::Pago, Direction::Incoming) => {
            "Donación recibida".to_string()
        }
        (LedgerCategory::Other, _) => raw.category.clone(),
    };

    Classified { label, direction }
}
