//! Shipment module: package manifests folded into per-item and per-pallet views.
//!
//! The remote API reports a shipment as a flat list of physical packages, each
//! with its own content lines. [`summarize`] turns that list into:
//! - per-item totals broken down by pallet and package, and
//! - per-pallet package membership in first-seen order.
//!
//! Pure domain logic; fetching the packages is someone else's job.

pub mod aggregate;
pub mod package;
pub mod summary;

#[cfg(test)]
mod test_support;

pub use aggregate::{summarize, summarize_json, summarize_with};
pub use package::{ContentLine, ItemDescriptor, PackageMetadata, PackageRecord};
pub use summary::{
    ContentKey, ItemSummary, PackageEntry, ShipmentSummary, SummaryKey, SummaryMode,
    SummaryOptions,
};
