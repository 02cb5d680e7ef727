//! Value object trait: equality by value, not identity.
//!
//! Everything the engines emit (stock transactions, package entries, summaries)
//! is a value object: built fresh per call, never mutated afterwards, and
//! compared field by field.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. Two synthesized
/// transactions with the same quantity, direction, location and order line are
/// the same transaction as far as the ledger is concerned.
///
/// The trait requires:
/// - **Clone**: results are handed back to callers by value
/// - **PartialEq**: tests and callers compare outputs structurally
/// - **Debug**: outputs show up in traces and assertion failures
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct PackageEntry {
///     package_no: i64,
///     quantity: i64,
/// }
///
/// impl ValueObject for PackageEntry {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
