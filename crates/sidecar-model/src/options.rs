//! Defaults and options for the nth-of-type pipeline.

use serde::{Deserialize, Serialize};

/// Property sorted on when no sort expression is given.
pub const DEFAULT_SORT_PROPERTY: &str = "SeriesNumber";

/// Property grouped on when no group expression is given.
pub const DEFAULT_GROUP_PROPERTY: &str = "SeriesDescription";

pub const DEFAULT_SORT_EXPRESSION: &str = "SeriesNumber:asc";

pub const DEFAULT_GROUP_EXPRESSION: &str = DEFAULT_GROUP_PROPERTY;

/// File-name suffix that marks a sidecar.
pub const SIDECAR_EXTENSION: &str = ".json";

/// Textual sort and group expressions, as supplied by the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NthOfTypeOptions {
    /// `PROPERTY[:asc|desc]`.
    pub sort_by: String,
    /// Comma-separated property names.
    pub group_by: String,
}

impl Default for NthOfTypeOptions {
    fn default() -> Self {
        Self {
            sort_by: DEFAULT_SORT_EXPRESSION.to_string(),
            group_by: DEFAULT_GROUP_EXPRESSION.to_string(),
        }
    }
}

impl NthOfTypeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_sort_by(mut self, expression: impl Into<String>) -> Self {
        self.sort_by = expression.into();
        self
    }

    #[must_use]
    pub fn with_group_by(mut self, expression: impl Into<String>) -> Self {
        self.group_by = expression.into();
        self
    }
}
