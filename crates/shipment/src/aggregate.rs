//! Package list → shipment summary.
//!
//! Two merge rules meet in this fold and must not be confused:
//! - item descriptors are **first-write-wins** ([`seed_item`]): the first
//!   content line seen for a key defines them;
//! - package entries are **last-write-wins** ([`overwrite_package_entry`]):
//!   a later line for the same (key, pallet, package) replaces the earlier one.

use indexmap::IndexMap;
use serde_json::Value as JsonValue;

use plentykit_core::{DomainResult, PackageId, PalletId};

use crate::package::{ContentLine, PackageRecord};
use crate::summary::{ItemSummary, PackageEntry, ShipmentSummary, SummaryMode, SummaryOptions};

/// Summarize a shipment's packages, grouping content by variation.
///
/// Returns `None` for an empty package list: there is no shipment yet, so
/// there is nothing to summarize.
pub fn summarize(packages: &[PackageRecord], mode: SummaryMode) -> Option<ShipmentSummary> {
    summarize_with(packages, SummaryOptions::new(mode))
}

/// Same as [`summarize`] with explicit options (mode and grouping key).
///
/// Totals saturate at the `i64` bounds.
pub fn summarize_with(
    packages: &[PackageRecord],
    options: SummaryOptions,
) -> Option<ShipmentSummary> {
    if packages.is_empty() {
        return None;
    }

    let mut summary = ShipmentSummary::default();
    for package in packages {
        for line in &package.content {
            let item = summary
                .content
                .entry(options.key.resolve(line))
                .or_insert_with(|| seed_item(line, options.mode));

            item.total_quantity = item.total_quantity.saturating_add(line.item_quantity);
            overwrite_package_entry(item, package, line, options.mode);
            record_pallet_member(&mut summary.pallets, package.pallet_id, line.package_id);
        }
    }

    tracing::debug!(
        packages = packages.len(),
        items = summary.content.len(),
        pallets = summary.pallets.len(),
        mode = %options.mode,
        "shipment packages summarized"
    );
    Some(summary)
}

/// [`summarize`] rendered as the JSON object handed to callers (`{}` when empty).
pub fn summarize_json(packages: &[PackageRecord], mode: SummaryMode) -> DomainResult<JsonValue> {
    match summarize(packages, mode) {
        Some(summary) => Ok(serde_json::to_value(&summary)?),
        None => Ok(JsonValue::Object(serde_json::Map::new())),
    }
}

/// First-write-wins: only called when the key is seen for the first time.
fn seed_item(line: &ContentLine, mode: SummaryMode) -> ItemSummary {
    ItemSummary {
        total_quantity: 0,
        details: mode.is_full().then(|| line.descriptor.clone()),
        packages: IndexMap::new(),
    }
}

/// Last-write-wins: replaces whatever entry exists for this pallet/package.
fn overwrite_package_entry(
    item: &mut ItemSummary,
    package: &PackageRecord,
    line: &ContentLine,
    mode: SummaryMode,
) {
    let entry = PackageEntry {
        package_no: package.no_of_package,
        quantity: line.item_quantity,
        details: mode.is_full().then(|| package.metadata.clone()),
    };
    item.packages
        .entry(package.pallet_id)
        .or_default()
        .insert(line.package_id, entry);
}

fn record_pallet_member(
    pallets: &mut IndexMap<PalletId, Vec<PackageId>>,
    pallet_id: PalletId,
    package_id: PackageId,
) {
    let members = pallets.entry(pallet_id).or_default();
    if !members.contains(&package_id) {
        members.push(package_id);
    }
}
