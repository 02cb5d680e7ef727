//! Conservation checks for redistribution templates.
//!
//! Two independent laws: the locations of a plan add up to its total, and the
//! targets of a location add up to the location's quantity. An unallocated
//! level (no `locations`, no `targets`) has nothing to conserve and passes.
//! A sum that overflows `i64` never matches.

use plentykit_core::{DomainError, DomainResult, LocationId, VariationId};

use crate::plan::{RedistributionTemplate, checked_total};

/// A single conservation-law failure.
///
/// `actual` is `None` when the quantities overflow `i64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConservationViolation {
    /// Source locations do not add up to the plan's total quantity.
    LocationsMismatch {
        variation_id: VariationId,
        expected: i64,
        actual: Option<i64>,
    },
    /// Targets do not add up to their source location's quantity.
    TargetsMismatch {
        variation_id: VariationId,
        location_id: LocationId,
        expected: i64,
        actual: Option<i64>,
    },
}

/// Renders a sum, or `overflow` when there is none.
struct Sum(Option<i64>);

impl core::fmt::Display for Sum {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.0 {
            Some(sum) => write!(f, "{sum}"),
            None => f.write_str("overflow"),
        }
    }
}

impl core::fmt::Display for ConservationViolation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match *self {
            Self::LocationsMismatch {
                variation_id,
                expected,
                actual,
            } => write!(
                f,
                "variation {variation_id}: locations sum to {}, expected {expected}",
                Sum(actual)
            ),
            Self::TargetsMismatch {
                variation_id,
                location_id,
                expected,
                actual,
            } => write!(
                f,
                "variation {variation_id}, location {location_id}: \
                 targets sum to {}, expected {expected}",
                Sum(actual)
            ),
        }
    }
}

/// Every conservation violation in `template`, in plan/location order.
pub fn violations(template: &RedistributionTemplate) -> Vec<ConservationViolation> {
    let mut found = Vec::new();

    for plan in &template.variations {
        if let Some(locations) = plan.locations.as_deref() {
            let actual = checked_total(locations.iter().map(|l| l.quantity));
            if actual != Some(plan.total_quantity) {
                found.push(ConservationViolation::LocationsMismatch {
                    variation_id: plan.variation_id,
                    expected: plan.total_quantity,
                    actual,
                });
            }
        }

        for location in plan.locations.iter().flatten() {
            let Some(targets) = location.targets.as_deref() else {
                continue;
            };
            let actual = checked_total(targets.iter().map(|t| t.quantity));
            if actual != Some(location.quantity) {
                found.push(ConservationViolation::TargetsMismatch {
                    variation_id: plan.variation_id,
                    location_id: location.location_id,
                    expected: location.quantity,
                    actual,
                });
            }
        }
    }

    found
}

/// `true` when both conservation laws hold everywhere in `template`.
pub fn validate(template: &RedistributionTemplate) -> bool {
    let found = violations(template);
    if !found.is_empty() {
        tracing::debug!(violations = found.len(), "redistribution template rejected");
    }
    found.is_empty()
}

/// Like [`validate`], but names the first violation as an error.
pub fn ensure_valid(template: &RedistributionTemplate) -> DomainResult<()> {
    match violations(template).first() {
        Some(violation) => Err(DomainError::invariant(violation.to_string())),
        None => Ok(()),
    }
}
