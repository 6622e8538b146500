//! Sort and group specifications parsed from user-facing expressions.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{ModelError, Result};

/// Direction of the requested sort.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    /// Token accepted after `:` in a sort expression.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ascending => "asc",
            Self::Descending => "desc",
        }
    }

    pub fn is_descending(self) -> bool {
        matches!(self, Self::Descending)
    }

    fn from_token(token: &str) -> Option<Self> {
        match token {
            "asc" => Some(Self::Ascending),
            "desc" => Some(Self::Descending),
            _ => None,
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Property to sort by and the direction to sort in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct SortSpec {
    property: String,
    direction: SortDirection,
}

impl SortSpec {
    pub fn new(property: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            property: property.into(),
            direction,
        }
    }

    /// Parse `PROPERTY` or `PROPERTY:DIRECTION`.
    ///
    /// The direction token is case-sensitive and must be `asc` or `desc`;
    /// without one the sort is ascending. Only the first `:` separates the
    /// two parts.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidSortDirection`] for an unknown direction
    /// token and [`ModelError::EmptyPropertyName`] when no property is named.
    pub fn parse(expression: &str) -> Result<Self> {
        let (property, direction) = match expression.split_once(':') {
            Some((property, token)) => {
                let direction = SortDirection::from_token(token).ok_or_else(|| {
                    ModelError::InvalidSortDirection {
                        expression: expression.to_string(),
                        direction: token.to_string(),
                    }
                })?;
                (property, direction)
            }
            None => (expression, SortDirection::Ascending),
        };
        if property.is_empty() {
            return Err(ModelError::EmptyPropertyName {
                expression: expression.to_string(),
            });
        }
        Ok(Self::new(property, direction))
    }

    pub fn property(&self) -> &str {
        &self.property
    }

    pub fn direction(&self) -> SortDirection {
        self.direction
    }

    pub fn is_descending(&self) -> bool {
        self.direction.is_descending()
    }
}

impl FromStr for SortSpec {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for SortSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.property, self.direction)
    }
}

/// Ordered list of properties that together form a group key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct GroupSpec(Vec<String>);

impl GroupSpec {
    pub fn new<I, S>(properties: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(properties.into_iter().map(Into::into).collect())
    }

    /// Parse a comma-separated list of property names.
    ///
    /// Names are taken verbatim and only empty entries are dropped, so
    /// `"A,,B"` yields `["A", "B"]` while `"A, B"` names `" B"`. Duplicates
    /// are kept in the order given.
    pub fn parse(expression: &str) -> Self {
        Self(
            expression
                .split(',')
                .filter(|name| !name.is_empty())
                .map(str::to_string)
                .collect(),
        )
    }

    pub fn properties(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for GroupSpec {
    fn from(expression: &str) -> Self {
        Self::parse(expression)
    }
}

impl fmt::Display for GroupSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_defaults_to_ascending() {
        let spec = SortSpec::parse("SeriesNumber").unwrap();
        assert_eq!(spec.property(), "SeriesNumber");
        assert_eq!(spec.direction(), SortDirection::Ascending);
    }

    #[test]
    fn sort_parses_both_directions() {
        assert!(!SortSpec::parse("SeriesNumber:asc").unwrap().is_descending());
        assert!(SortSpec::parse("SeriesDescription:desc").unwrap().is_descending());
    }

    #[test]
    fn sort_direction_is_case_sensitive() {
        let err = SortSpec::parse("SeriesNumber:DESC").unwrap_err();
        assert_eq!(
            err,
            ModelError::InvalidSortDirection {
                expression: "SeriesNumber:DESC".to_string(),
                direction: "DESC".to_string(),
            }
        );
    }

    #[test]
    fn sort_rejects_empty_direction_and_property() {
        assert!(matches!(
            SortSpec::parse("SeriesNumber:"),
            Err(ModelError::InvalidSortDirection { .. })
        ));
        assert!(matches!(
            SortSpec::parse(":asc"),
            Err(ModelError::EmptyPropertyName { .. })
        ));
        assert!(matches!(
            SortSpec::parse(""),
            Err(ModelError::EmptyPropertyName { .. })
        ));
    }

    #[test]
    fn sort_display_round_trips() {
        let spec: SortSpec = "EchoTime:desc".parse().unwrap();
        assert_eq!(spec.to_string(), "EchoTime:desc");
    }

    #[test]
    fn group_drops_blank_entries() {
        assert_eq!(GroupSpec::parse("A,,B").properties(), ["A", "B"]);
        assert_eq!(GroupSpec::parse("A,B,").properties(), ["A", "B"]);
        assert!(GroupSpec::parse(",,").is_empty());
    }

    #[test]
    fn names_are_taken_verbatim() {
        assert_eq!(GroupSpec::parse("A, B").properties(), ["A", " B"]);
        assert_eq!(GroupSpec::parse(" ").properties(), [" "]);
        assert_eq!(SortSpec::parse(" EchoTime:desc").unwrap().property(), " EchoTime");
        assert_eq!(SortSpec::parse("EchoTime ").unwrap().property(), "EchoTime ");
    }

    #[test]
    fn group_keeps_duplicates_in_order() {
        assert_eq!(GroupSpec::parse("B,A,B").properties(), ["B", "A", "B"]);
    }
}
