//! Redistribution module: stock transactions for warehouse-to-warehouse moves.
//!
//! A redistribution plan says how much of each variation leaves which source
//! location and where it lands. This crate turns such a plan into the flat
//! list of stock ledger transactions the remote API expects, and checks that a
//! plan is quantity-consistent before it is sent out. Everything here is
//! deterministic domain logic (no IO, no HTTP, no storage).

pub mod order;
pub mod plan;
pub mod synthesize;
pub mod transaction;
pub mod validate;

#[cfg(test)]
mod test_support;

pub use order::{OrderItem, OrderRelation, RedistributionOrder, RelationRole};
pub use plan::{RedistributionTemplate, SourceLocation, TargetLocation, VariationPlan};
pub use synthesize::{SkipReason, SkippedPlan, synthesize, synthesize_with};
pub use transaction::{
    Direction, LotAttributes, RedistributionTransactions, Transaction, TransactionStatus,
};
pub use validate::{ConservationViolation, ensure_valid, validate, violations};
