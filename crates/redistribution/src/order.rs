use serde::{Deserialize, Serialize};

use plentykit_core::{DomainResult, OrderItemId, VariationId, WarehouseId};

/// Role a warehouse plays in a redistribution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelationRole {
    Sender,
    Receiver,
    #[serde(other)]
    Other,
}

/// Link between an order and another entity (for redistributions: warehouses).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRelation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_id: Option<i64>,
    pub reference_type: String,
    pub reference_id: i64,
    pub relation: RelationRole,
}

/// One line of a redistribution order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    /// Ledger line reference; becomes `orderItemId` on every transaction.
    pub id: OrderItemId,
    pub item_variation_id: VariationId,
    pub quantity: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_item_name: Option<String>,
}

/// A warehouse-to-warehouse movement order as fetched from the API.
///
/// Read-only to the engines; built by whoever talks to the remote system.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RedistributionOrder {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plenty_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_id: Option<i64>,
    #[serde(default)]
    pub relations: Vec<OrderRelation>,
    #[serde(default)]
    pub order_items: Vec<OrderItem>,
}

impl RedistributionOrder {
    /// Decode an order from the API's JSON representation.
    pub fn from_json(raw: &str) -> DomainResult<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Order line moving the given variation, if the order contains one.
    pub fn order_item_for(&self, variation_id: VariationId) -> Option<&OrderItem> {
        self.order_items
            .iter()
            .find(|item| item.item_variation_id == variation_id)
    }

    /// Warehouse the stock leaves from.
    pub fn sender_warehouse(&self) -> Option<WarehouseId> {
        self.warehouse_with_role(RelationRole::Sender)
    }

    /// Warehouse the stock is moved into.
    pub fn receiver_warehouse(&self) -> Option<WarehouseId> {
        self.warehouse_with_role(RelationRole::Receiver)
    }

    fn warehouse_with_role(&self, role: RelationRole) -> Option<WarehouseId> {
        self.relations
            .iter()
            .find(|r| r.relation == role && r.reference_type == "warehouse")
            .map(|r| WarehouseId::new(r.reference_id))
    }
}
