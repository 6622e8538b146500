//! Data model for ordering and grouping sidecar metadata files.

pub mod error;
pub mod group_key;
pub mod options;
pub mod sidecar;
pub mod spec;

pub use error::{ModelError, Result};
pub use group_key::{GroupKey, MISSING_PLACEHOLDER};
pub use options::{
    DEFAULT_GROUP_EXPRESSION, DEFAULT_GROUP_PROPERTY, DEFAULT_SORT_EXPRESSION,
    DEFAULT_SORT_PROPERTY, NthOfTypeOptions, SIDECAR_EXTENSION,
};
pub use sidecar::{Sidecar, property_text};
pub use spec::{GroupSpec, SortDirection, SortSpec};
