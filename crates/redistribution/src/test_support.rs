//! Shared fixtures: one order moving two variations from warehouse 105 to 107.

use serde_json::json;

use plentykit_core::{LocationId, OrderItemId, VariationId};

use crate::order::{OrderItem, OrderRelation, RedistributionOrder, RelationRole};
use crate::plan::{SourceLocation, TargetLocation, VariationPlan};
use crate::transaction::LotAttributes;

pub(crate) fn sample_order() -> RedistributionOrder {
    let relation = |reference_id, relation| OrderRelation {
        order_id: Some(1),
        reference_type: "warehouse".to_string(),
        reference_id,
        relation,
    };
    let item = |id, variation, quantity, name: &str| OrderItem {
        id: OrderItemId::new(id),
        item_variation_id: VariationId::new(variation),
        quantity,
        order_item_name: Some(name.to_string()),
    };

    RedistributionOrder {
        id: Some(1),
        plenty_id: Some(12345),
        type_id: Some(15),
        relations: vec![
            relation(105, RelationRole::Sender),
            relation(107, RelationRole::Receiver),
        ],
        order_items: vec![item(2, 1234, 10, "test_1"), item(3, 2345, 12, "test_2")],
    }
}

pub(crate) fn source(location_id: i64, quantity: i64) -> SourceLocation {
    SourceLocation {
        location_id: LocationId::new(location_id),
        quantity,
        targets: None,
    }
}

pub(crate) fn target(location_id: i64, quantity: i64) -> TargetLocation {
    TargetLocation {
        location_id: LocationId::new(location_id),
        quantity,
    }
}

pub(crate) fn plans_without_locations() -> Vec<VariationPlan> {
    let mut first = VariationPlan::new(VariationId::new(1234), 10);
    first.name = Some("test_1".to_string());
    let mut second = VariationPlan::new(VariationId::new(2345), 12);
    second.name = Some("test_2".to_string());
    vec![first, second]
}

pub(crate) fn plans_with_outgoing() -> Vec<VariationPlan> {
    let mut plans = plans_without_locations();
    plans[0].locations = Some(vec![source(1, 10)]);
    plans[1].locations = Some(vec![source(2, 6), source(3, 6)]);
    plans
}

pub(crate) fn plans_with_both() -> Vec<VariationPlan> {
    let mut plans = plans_with_outgoing();
    if let Some(locations) = plans[0].locations.as_mut() {
        locations[0].targets = Some(vec![target(110, 10)]);
    }
    if let Some(locations) = plans[1].locations.as_mut() {
        locations[0].targets = Some(vec![target(111, 6)]);
        locations[1].targets = Some(vec![target(112, 3), target(113, 3)]);
    }
    plans
}

pub(crate) fn plans_with_lot_attributes() -> Vec<VariationPlan> {
    let lot = |batch: &str, identification: &str| LotAttributes {
        batch: Some(json!(batch)),
        best_before_date: Some(json!("2020-01-03T15:00:00+02:00")),
        identification: Some(json!(identification)),
    };
    let mut plans = plans_with_outgoing();
    plans[0].lot = lot("1234_batch", "1234_identification");
    plans[1].lot = lot("2345_batch", "2345_identification");
    plans
}
