//! Plan → stock transactions.

use plentykit_core::{LocationId, OrderItemId, VariationId};

use crate::order::RedistributionOrder;
use crate::plan::{SourceLocation, TargetLocation, VariationPlan};
use crate::transaction::{
    Direction, LotAttributes, RedistributionTransactions, Transaction, TransactionStatus,
};

/// Why a plan entry produced no transactions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkipReason {
    /// The order has no line for the plan's variation.
    UnknownVariation,
    /// The plan has not been assigned to any source location yet.
    Unallocated,
}

/// Notice handed to the observer of [`synthesize_with`] for every inert plan entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkippedPlan {
    pub variation_id: VariationId,
    pub reason: SkipReason,
}

/// Build the outgoing and incoming transactions for a redistribution.
///
/// Plans whose variation is not part of `order`, or that carry no source
/// locations, are partial states and contribute nothing.
pub fn synthesize(
    order: &RedistributionOrder,
    variations: &[VariationPlan],
) -> RedistributionTransactions {
    synthesize_with(order, variations, |_| {})
}

/// Same as [`synthesize`], reporting every skipped plan entry to `on_skip`.
///
/// Output order: plan order, then location declaration order, then target
/// declaration order within each location.
pub fn synthesize_with<F>(
    order: &RedistributionOrder,
    variations: &[VariationPlan],
    mut on_skip: F,
) -> RedistributionTransactions
where
    F: FnMut(SkippedPlan),
{
    let mut batch = RedistributionTransactions::default();

    let allocated = variations.iter().filter_map(|plan| {
        let skip = |reason| {
            tracing::debug!(
                variation_id = %plan.variation_id,
                ?reason,
                "redistribution plan skipped"
            );
            SkippedPlan {
                variation_id: plan.variation_id,
                reason,
            }
        };

        let Some(item) = order.order_item_for(plan.variation_id) else {
            on_skip(skip(SkipReason::UnknownVariation));
            return None;
        };
        match plan.locations.as_deref() {
            Some(locations) if !locations.is_empty() => {
                Some((LineStamp::new(item.id, &plan.lot), locations))
            }
            _ => {
                on_skip(skip(SkipReason::Unallocated));
                None
            }
        }
    });

    for (stamp, locations) in allocated {
        for location in locations {
            batch.outgoing.push(stamp.outgoing(location));
            for target in location.targets.iter().flatten() {
                batch.incoming.push(stamp.incoming(target));
            }
        }
    }

    tracing::debug!(
        outgoing = batch.outgoing.len(),
        incoming = batch.incoming.len(),
        "redistribution transactions synthesized"
    );
    batch
}

/// Fields shared by every transaction of one plan entry.
struct LineStamp<'a> {
    order_item_id: OrderItemId,
    lot: &'a LotAttributes,
}

impl<'a> LineStamp<'a> {
    fn new(order_item_id: OrderItemId, lot: &'a LotAttributes) -> Self {
        Self { order_item_id, lot }
    }

    fn outgoing(&self, location: &SourceLocation) -> Transaction {
        self.transaction(Direction::Out, location.quantity, location.location_id)
    }

    fn incoming(&self, target: &TargetLocation) -> Transaction {
        self.transaction(Direction::In, target.quantity, target.location_id)
    }

    fn transaction(
        &self,
        direction: Direction,
        quantity: i64,
        location: LocationId,
    ) -> Transaction {
        Transaction {
            quantity,
            direction,
            status: TransactionStatus::Regular,
            warehouse_location_id: location,
            order_item_id: self.order_item_id,
            lot: self.lot.clone(),
        }
    }
}
