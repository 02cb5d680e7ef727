//! Summary view types produced by [`crate::summarize`].

use core::str::FromStr;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use plentykit_core::{DomainError, ItemId, PackageId, PalletId, ValueObject, VariationId};

use crate::package::{ContentLine, ItemDescriptor, PackageMetadata};

/// How much detail a summary carries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummaryMode {
    /// Totals and package quantities only.
    #[default]
    Minimal,
    /// Also copy item descriptors and package metadata.
    Full,
}

impl SummaryMode {
    pub fn is_full(self) -> bool {
        self == Self::Full
    }
}

impl FromStr for SummaryMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "minimal" => Ok(Self::Minimal),
            "full" => Ok(Self::Full),
            other => Err(DomainError::validation(format!(
                "unknown summary mode '{other}' (expected minimal or full)"
            ))),
        }
    }
}

impl core::fmt::Display for SummaryMode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            Self::Minimal => "minimal",
            Self::Full => "full",
        })
    }
}

/// Which content-line identifier groups the `content` map.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SummaryKey {
    /// Group by `variationId`; what the ERP front end shows per shipment.
    #[default]
    Variation,
    /// Group by `itemId`, merging all variations of an item.
    Item,
}

impl SummaryKey {
    pub(crate) fn resolve(self, line: &ContentLine) -> ContentKey {
        match self {
            Self::Variation => line.descriptor.variation_id.into(),
            Self::Item => line.item_id.into(),
        }
    }
}

/// Knobs for [`crate::summarize_with`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SummaryOptions {
    pub mode: SummaryMode,
    pub key: SummaryKey,
}

impl SummaryOptions {
    pub fn new(mode: SummaryMode) -> Self {
        Self {
            mode,
            key: SummaryKey::default(),
        }
    }

    pub fn keyed_by(mut self, key: SummaryKey) -> Self {
        self.key = key;
        self
    }
}

/// Key of the `content` map (a variation or item id, see [`SummaryKey`]).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentKey(i64);

impl ContentKey {
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    pub const fn get(self) -> i64 {
        self.0
    }
}

impl From<VariationId> for ContentKey {
    fn from(value: VariationId) -> Self {
        Self(value.get())
    }
}

impl From<ItemId> for ContentKey {
    fn from(value: ItemId) -> Self {
        Self(value.get())
    }
}

/// Quantity of one item inside one physical package.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageEntry {
    pub package_no: i64,
    pub quantity: i64,
    /// Owning package's metadata; full mode only.
    #[serde(flatten)]
    pub details: Option<PackageMetadata>,
}

impl ValueObject for PackageEntry {}

/// Per-pallet, per-package breakdown of one item.
pub type PalletBreakdown = IndexMap<PalletId, IndexMap<PackageId, PackageEntry>>;

/// Aggregate for one content key.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemSummary {
    pub total_quantity: i64,
    /// Descriptors of the first line seen for this key; full mode only.
    #[serde(flatten)]
    pub details: Option<ItemDescriptor>,
    pub packages: PalletBreakdown,
}

impl ValueObject for ItemSummary {}

/// The folded view of a shipment.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ShipmentSummary {
    pub content: IndexMap<ContentKey, ItemSummary>,
    /// Packages per pallet, in order of first appearance, without duplicates.
    pub pallets: IndexMap<PalletId, Vec<PackageId>>,
}

impl ValueObject for ShipmentSummary {}

impl ShipmentSummary {
    pub fn total_quantity(&self, key: impl Into<ContentKey>) -> Option<i64> {
        self.content.get(&key.into()).map(|item| item.total_quantity)
    }

    pub fn pallet(&self, pallet_id: PalletId) -> Option<&[PackageId]> {
        self.pallets.get(&pallet_id).map(Vec::as_slice)
    }

    /// Copy of this summary with every full-mode field removed.
    pub fn to_minimal(&self) -> Self {
        let content: IndexMap<ContentKey, ItemSummary> = self
            .content
            .iter()
            .map(|(key, item)| {
                let packages: PalletBreakdown = item
                    .packages
                    .iter()
                    .map(|(pallet, entries)| {
                        let entries: IndexMap<PackageId, PackageEntry> = entries
                            .iter()
                            .map(|(package, entry)| {
                                let entry = PackageEntry {
                                    details: None,
                                    ..entry.clone()
                                };
                                (*package, entry)
                            })
                            .collect();
                        (*pallet, entries)
                    })
                    .collect();
                let item = ItemSummary {
                    total_quantity: item.total_quantity,
                    details: None,
                    packages,
                };
                (*key, item)
            })
            .collect();

        Self {
            content,
            pallets: self.pallets.clone(),
        }
    }
}
