//! Normalization: raw ledger record → display-ready movement.

use crate::classify::{classify, Classified};
use crate::format::{describe, display_date, FormatError};
use crate::transaction::{NormalizedTransaction, RawTransaction};

/// Derive the display record for a raw transaction as seen from the
/// viewing account. Deterministic: same record + same viewer, same output.
pub fn normalize(
    raw: &RawTransaction,
    viewing_account_id: &str,
) -> Result<NormalizedTransaction, FormatError> {
    let Classified { label, direction } = classify(raw, viewing_account_id);
    let description = describe(raw, direction);
    let display_date = display_date(&raw.creation_date)?;

    Ok(NormalizedTransaction {
        raw: raw.clone(),
        category: label,
        description,
        display_date,
        direction,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn microcredito() -> RawTransaction {
        RawTransaction {
            id: "tx-1".to_string(),
            creation_date: "2024-03-05T00:00:00Z".to_string(),
            category: "Microcrédito".to_string(),
            sender_account: Some("ACC1".to_string()),
            receiver_account: Some("ACC2".to_string()),
            sender_name: Some("Juan".to_string()),
            sender_surname: Some("Pérez".to_string()),
            receiver_name: Some("Ana".to_string()),
            receiver_surname: Some("Lopez".to_string()),
            amount: 1000.0,
        }
    }

    #[test]
    fn test_microcredito_seen_by_sender() {
        let n = normalize(&microcredito(), "ACC1").unwrap();
        assert_eq!(n.category, "Colaboración enviada");
        assert_eq!(n.description, "Microcrédito a Ana Lopez");
        assert_eq!(n.display_date, "05/03/24");
        assert!(n.direction.is_outgoing());
        // Raw fields survive untouched.
        assert_eq!(n.raw.category, "Microcrédito");
        assert_eq!(n.raw.amount, 1000.0);
    }

    #[test]
    fn test_microcredito_seen_by_receiver() {
        let n = normalize(&microcredito(), "ACC2").unwrap();
        assert_eq!(n.category, "Colaboración recibida");
        assert_eq!(n.description, "Colaboración recibida de Juan Pérez");
        assert!(!n.direction.is_outgoing());
    }

    #[test]
    fn test_anonymous_donation_to_viewer() {
        let raw = RawTransaction {
            id: "tx-2".to_string(),
            creation_date: "2024-03-05T00:00:00Z".to_string(),
            category: "Donación".to_string(),
            sender_account: None,
            receiver_account: Some("ACC2".to_string()),
            sender_name: None,
            sender_surname: None,
            receiver_name: None,
            receiver_surname: None,
            amount: 50.0,
        };
        let n = normalize(&raw, "ACC2").unwrap();
        assert_eq!(n.category, "Donación recibida");
        assert_eq!(n.description, "De donante anónimo");
    }

    #[test]
    fn test_normalize_is_deterministic() {
        let raw = microcredito();
        assert_eq!(normalize(&raw, "ACC1").unwrap(), normalize(&raw, "ACC1").unwrap());
    }

    #[test]
    fn test_malformed_date_propagates() {
        let mut raw = microcredito();
        raw.creation_date = "not a date".to_string();
        assert!(normalize(&raw, "ACC1").is_err());
    }
}
