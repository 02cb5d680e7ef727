//! `plentykit-core`: shared building blocks for the data engines.
//!
//! This crate contains **pure domain** primitives (no transport or storage concerns).

pub mod error;
pub mod id;
pub mod value_object;

pub use error::{DomainError, DomainResult};
pub use id::{
    ItemId, LocationId, OrderItemId, PackageId, PackageRecordId, PalletId, VariationId,
    WarehouseId,
};
pub use value_object::ValueObject;
