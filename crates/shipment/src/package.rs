use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use plentykit_core::{
    DomainResult, ItemId, OrderItemId, PackageId, PackageRecordId, PalletId, VariationId,
};

/// Descriptive fields of a content line, copied into full-mode item summaries.
///
/// These are only ever copied, never interpreted. The API sends weights as
/// strings or numbers and any of them may be `null`, so they are kept as raw
/// JSON; a missing key reads as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemDescriptor {
    #[serde(default)]
    pub attribute_values: JsonValue,
    #[serde(default)]
    pub batch: JsonValue,
    #[serde(default)]
    pub best_before_date: JsonValue,
    #[serde(default)]
    pub item_name: JsonValue,
    #[serde(default)]
    pub item_net_weight: JsonValue,
    #[serde(default)]
    pub item_weight: JsonValue,
    #[serde(default)]
    pub order_item_id: Option<OrderItemId>,
    #[serde(default)]
    pub order_item_name: JsonValue,
    #[serde(default)]
    pub serial_number: JsonValue,
    pub variation_id: VariationId,
    #[serde(default)]
    pub variation_number: JsonValue,
}

/// One item-level record inside a physical package.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentLine {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Physical package this line sits in; shared by all lines of that package.
    pub package_id: PackageId,
    pub item_id: ItemId,
    pub item_quantity: i64,
    #[serde(flatten)]
    pub descriptor: ItemDescriptor,
}

/// Package-level metadata, copied verbatim into full-mode package entries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageMetadata {
    #[serde(default)]
    pub created_at: JsonValue,
    #[serde(default)]
    pub is_closed: JsonValue,
    #[serde(default)]
    pub label_path: JsonValue,
    #[serde(default)]
    pub no_of_packages_in_pallet: JsonValue,
    /// Secondary package identifier (unrelated to [`ContentLine::package_id`]).
    #[serde(default)]
    pub package_id: JsonValue,
    #[serde(default)]
    pub package_number: JsonValue,
    #[serde(default)]
    pub package_sscc: JsonValue,
    #[serde(default)]
    pub package_type: JsonValue,
    #[serde(default)]
    pub return_package_number: JsonValue,
    #[serde(default)]
    pub updated_at: JsonValue,
    #[serde(default)]
    pub volume: JsonValue,
    #[serde(default)]
    pub weight: JsonValue,
}

/// One physical package as shipped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageRecord {
    pub id: PackageRecordId,
    pub pallet_id: PalletId,
    /// 1-based position of this package within its pallet.
    pub no_of_package: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_id: Option<i64>,
    #[serde(flatten)]
    pub metadata: PackageMetadata,
    #[serde(default)]
    pub content: Vec<ContentLine>,
}

impl PackageRecord {
    /// Decode the API's shipping-package list.
    pub fn list_from_json(raw: &str) -> DomainResult<Vec<Self>> {
        Ok(serde_json::from_str(raw)?)
    }
}
