use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value as JsonValue;

use plentykit_core::{LocationId, OrderItemId, ValueObject};

/// Direction of a stock movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Out,
    In,
}

/// Booking status of a stock transaction. Redistributions only book regular stock.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    #[default]
    Regular,
}

/// Lot and traceability metadata carried verbatim from a plan onto its transactions.
///
/// `None` means the key was absent and is omitted again on output. Any value
/// that was present, `null` and non-string values included, is copied as is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LotAttributes {
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub batch: Option<JsonValue>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub best_before_date: Option<JsonValue>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub identification: Option<JsonValue>,
}

/// Keeps an explicit `null` as `Some(Null)` instead of folding it into `None`.
fn present<'de, D>(deserializer: D) -> Result<Option<JsonValue>, D::Error>
where
    D: Deserializer<'de>,
{
    JsonValue::deserialize(deserializer).map(Some)
}

/// One stock ledger movement; serialized as a "create stock transaction" body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub quantity: i64,
    pub direction: Direction,
    pub status: TransactionStatus,
    pub warehouse_location_id: LocationId,
    pub order_item_id: OrderItemId,
    #[serde(flatten)]
    pub lot: LotAttributes,
}

impl ValueObject for Transaction {}

/// Outgoing and incoming transactions produced for one redistribution.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedistributionTransactions {
    pub outgoing: Vec<Transaction>,
    pub incoming: Vec<Transaction>,
}

impl ValueObject for RedistributionTransactions {}

impl RedistributionTransactions {
    pub fn into_parts(self) -> (Vec<Transaction>, Vec<Transaction>) {
        (self.outgoing, self.incoming)
    }

    pub fn is_empty(&self) -> bool {
        self.outgoing.is_empty() && self.incoming.is_empty()
    }

    /// Sum of outgoing quantities, saturating at the `i64` bounds.
    pub fn outgoing_total(&self) -> i64 {
        saturating_total(&self.outgoing)
    }

    /// Sum of incoming quantities, saturating at the `i64` bounds.
    pub fn incoming_total(&self) -> i64 {
        saturating_total(&self.incoming)
    }
}

fn saturating_total(transactions: &[Transaction]) -> i64 {
    transactions
        .iter()
        .fold(0i64, |total, t| total.saturating_add(t.quantity))
}
