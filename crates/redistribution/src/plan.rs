use serde::{Deserialize, Serialize};

use plentykit_core::{DomainResult, LocationId, VariationId};

use crate::transaction::LotAttributes;

/// Receiving side of a source location's quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetLocation {
    pub location_id: LocationId,
    pub quantity: i64,
}

/// Quantity taken out of one storage location.
///
/// `targets` is `None` while the inbound leg has not been allocated yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceLocation {
    pub location_id: LocationId,
    pub quantity: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub targets: Option<Vec<TargetLocation>>,
}

/// Sum of `quantities`, `None` if it does not fit in an `i64`.
pub(crate) fn checked_total(quantities: impl IntoIterator<Item = i64>) -> Option<i64> {
    quantities.into_iter().try_fold(0i64, i64::checked_add)
}

/// Distribution plan for a single variation.
///
/// `locations` is `None` while the variation has not been assigned to source
/// locations. Keys other than the ones modelled here (monetary `amounts`, for
/// instance) are plan metadata and are dropped on decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariationPlan {
    pub variation_id: VariationId,
    pub total_quantity: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locations: Option<Vec<SourceLocation>>,
    #[serde(flatten)]
    pub lot: LotAttributes,
}

impl VariationPlan {
    pub fn new(variation_id: VariationId, total_quantity: i64) -> Self {
        Self {
            variation_id,
            total_quantity,
            name: None,
            locations: None,
            lot: LotAttributes::default(),
        }
    }

    pub fn with_locations(mut self, locations: Vec<SourceLocation>) -> Self {
        self.locations = Some(locations);
        self
    }

    pub fn with_lot(mut self, lot: LotAttributes) -> Self {
        self.lot = lot;
        self
    }
}

/// A full redistribution template, as edited before submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedistributionTemplate {
    #[serde(default)]
    pub variations: Vec<VariationPlan>,
}

impl RedistributionTemplate {
    pub fn new(variations: Vec<VariationPlan>) -> Self {
        Self { variations }
    }

    pub fn from_json(raw: &str) -> DomainResult<Self> {
        Ok(serde_json::from_str(raw)?)
    }
}
