//! Group keys: the tuple of stringified property values a sidecar is bucketed by.

use std::fmt;

use serde::Serialize;

use crate::sidecar::{Sidecar, property_text};
use crate::spec::GroupSpec;

/// Text shown for a key component whose property is missing.
pub const MISSING_PLACEHOLDER: &str = "<missing>";

/// One stringified value per property of a [`GroupSpec`].
///
/// A missing property is stored as `None`, which never equals any string
/// (including `""` or the placeholder text), so sidecars with and without
/// the property land in different groups.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct GroupKey(Vec<Option<String>>);

impl GroupKey {
    pub fn new(parts: Vec<Option<String>>) -> Self {
        Self(parts)
    }

    /// Key made only of present values.
    pub fn from_values<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(values.into_iter().map(|value| Some(value.into())).collect())
    }

    /// Compute the key of `sidecar` under `spec`.
    pub fn for_sidecar(sidecar: &Sidecar, spec: &GroupSpec) -> Self {
        Self(
            spec.properties()
                .iter()
                .map(|name| sidecar.property(name).map(property_text))
                .collect(),
        )
    }

    pub fn parts(&self) -> &[Option<String>] {
        &self.0
    }

    /// Components as display text, with missing ones shown as the placeholder.
    pub fn labels(&self) -> Vec<&str> {
        self.0
            .iter()
            .map(|part| part.as_deref().unwrap_or(MISSING_PLACEHOLDER))
            .collect()
    }

    pub fn has_missing(&self) -> bool {
        self.0.iter().any(Option::is_none)
    }
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.labels().join(" / "))
    }
}
