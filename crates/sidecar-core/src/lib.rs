//! Ordering and grouping engine for sidecar metadata.
//!
//! Sidecars are sorted on one property whose comparable type is inferred
//! from the whole record set, then bucketed by a tuple of stringified
//! properties so each sidecar gets an ordinal position within its group.
//!
//! # Example
//!
//! ```ignore
//! use sidecar_core::{NthOfType, NthOfTypeOptions};
//!
//! let nth = NthOfType::new(&NthOfTypeOptions::default())?;
//! let result = nth.run(sidecars);
//! for position in result.positions() {
//!     println!("{} {} {}", position.key, position.ordinal, position.sidecar.path().display());
//! }
//! ```

pub mod grouping;
pub mod inference;
pub mod ordering;
pub mod ordinal;
pub mod pipeline;

pub use grouping::{GroupTable, group_sidecars};
pub use inference::{Comparable, ComparisonRule, IntegerKey, Representation, as_integer};
pub use ordering::{CompositeKey, SortedSidecars, order_sidecars, sort_sidecars};
pub use ordinal::{Position, assign_positions, ordinal};
pub use pipeline::{NthOfType, NthOfTypeResult};

pub use sidecar_model::{
    GroupKey, GroupSpec, ModelError, NthOfTypeOptions, Sidecar, SortDirection, SortSpec,
};

/// Parse a `PROPERTY[:asc|desc]` sort expression.
pub fn parse_sort_key(expression: &str) -> sidecar_model::Result<SortSpec> {
    SortSpec::parse(expression)
}

/// Parse a comma-separated group expression, dropping blank entries.
pub fn parse_group_keys(expression: &str) -> GroupSpec {
    GroupSpec::parse(expression)
}
