use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::enums::TradeDirection;

/// A single closed trade as recorded in the journal.
///
/// Trades are immutable once logged: an edit is a delete followed by a fresh
/// entry, so `pnl` never changes under an existing `id`. Only `date` (for
/// ordering) and `pnl` are consumed by the statistics engine; `pair`, `lot`
/// and `notes` exist for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    /// Unique identifier, assigned at creation and never reused.
    pub id: Uuid,
    /// The moment the trade was closed. Need not be unique; storage order
    /// breaks ties.
    pub date: DateTime<Utc>,
    /// Free-form instrument label, e.g. "EURUSD".
    pub pair: String,
    /// Serialized as `"type": "BUY" | "SELL"`, the storage layer's column.
    #[serde(rename = "type")]
    pub direction: TradeDirection,
    /// Positive lot size. Display-only.
    pub lot: Decimal,
    /// Signed realized profit or loss in account currency.
    pub pnl: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Trade {
    /// Creates a new trade with a freshly assigned id and no notes.
    pub fn new(
        date: DateTime<Utc>,
        pair: impl Into<String>,
        direction: TradeDirection,
        lot: Decimal,
        pnl: Decimal,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            date,
            pair: pair.into(),
            direction,
            lot,
            pnl,
            notes: None,
        }
    }
}

/// The journal owner's account settings, as far as analytics is concerned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// Capital at account creation. The engine takes it as a fresh input on
    /// every call, so a settings edit simply flows through on the next
    /// computation.
    #[serde(alias = "initialBalance")]
    pub starting_balance: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn trade_uses_the_storage_wire_format() {
        let json = r#"{
            "id": "67e55044-10b1-426f-9247-bb680e5fe0c8",
            "date": "2026-01-05T14:30:00Z",
            "pair": "XAUUSD",
            "type": "SELL",
            "lot": "0.10",
            "pnl": "-42.50"
        }"#;

        let trade: Trade = serde_json::from_str(json).unwrap();
        assert_eq!(trade.direction, TradeDirection::Short);
        assert_eq!(trade.pnl, dec!(-42.50));
        assert_eq!(trade.notes, None);
    }

    #[test]
    fn account_accepts_the_legacy_field_name() {
        let account: Account = serde_json::from_str(r#"{"initialBalance": "1000"}"#).unwrap();
        assert_eq!(account.starting_balance, dec!(1000));
    }
}
