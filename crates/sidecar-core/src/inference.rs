//! Comparable-type inference for a sort property.
//!
//! The representation is decided once for the whole record set and then
//! applied per record:
//! 1. Values that are absent or null are missing and take no part.
//! 2. If every present value is an integer, or a string holding a base-10
//!    integer, the property compares numerically.
//! 3. Otherwise every present value compares as text.

use std::cmp::Ordering;
use std::fmt;

use serde::Serialize;
use serde_json::Value;
use sidecar_model::{Sidecar, property_text};
use tracing::debug;

/// How present values of a property are compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Representation {
    Integer,
    Text,
}

impl Representation {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Integer => "integer",
            Self::Text => "text",
        }
    }
}

impl fmt::Display for Representation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A base-10 integer of any size.
///
/// Stored as sign plus digits without leading zeros, so ordering needs no
/// fixed-width conversion. Zero is never negative.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IntegerKey {
    negative: bool,
    digits: String,
}

impl IntegerKey {
    /// Parse an optional sign followed by one or more ASCII digits.
    ///
    /// Anything else in the string, including surrounding whitespace or a
    /// decimal point, rejects the whole value.
    pub fn parse(text: &str) -> Option<Self> {
        let (negative, digits) = match text.as_bytes().first() {
            Some(b'-') => (true, &text[1..]),
            Some(b'+') => (false, &text[1..]),
            _ => (false, text),
        };
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let significant = digits.trim_start_matches('0');
        let digits = if significant.is_empty() { "0" } else { significant };
        Some(Self {
            negative: negative && digits != "0",
            digits: digits.to_string(),
        })
    }

    fn cmp_magnitude(&self, other: &Self) -> Ordering {
        self.digits
            .len()
            .cmp(&other.digits.len())
            .then_with(|| self.digits.cmp(&other.digits))
    }
}

impl From<i64> for IntegerKey {
    fn from(value: i64) -> Self {
        Self {
            negative: value < 0,
            digits: value.unsigned_abs().to_string(),
        }
    }
}

impl Ord for IntegerKey {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.negative, other.negative) {
            (false, false) => self.cmp_magnitude(other),
            (true, true) => other.cmp_magnitude(self),
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
        }
    }
}

impl PartialOrd for IntegerKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for IntegerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            f.write_str("-")?;
        }
        f.write_str(&self.digits)
    }
}

/// Comparison key for a present value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Comparable {
    Integer(IntegerKey),
    Text(String),
}

impl Ord for Comparable {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Integer(left), Self::Integer(right)) => left.cmp(right),
            (Self::Text(left), Self::Text(right)) => left.cmp(right),
            // Only reachable for values outside the inferred set.
            (Self::Integer(_), Self::Text(_)) => Ordering::Less,
            (Self::Text(_), Self::Integer(_)) => Ordering::Greater,
        }
    }
}

impl PartialOrd for Comparable {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Comparable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            Self::Text(value) => f.write_str(value),
        }
    }
}

/// The inferred comparison for one property over one record set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonRule {
    property: String,
    representation: Representation,
}

impl ComparisonRule {
    /// Decide the representation of `property` across `sidecars`.
    ///
    /// A property with no present values is treated as integer; the choice
    /// has no effect since every record is then missing.
    pub fn infer(sidecars: &[Sidecar], property: &str) -> Self {
        let mut present = 0usize;
        let mut first_text: Option<&Sidecar> = None;
        for sidecar in sidecars {
            let Some(value) = sidecar.property(property) else {
                continue;
            };
            present += 1;
            if first_text.is_none() && as_integer(value).is_none() {
                first_text = Some(sidecar);
            }
        }

        let representation = match first_text {
            None => Representation::Integer,
            Some(sidecar) => {
                debug!(
                    property,
                    path = %sidecar.path().display(),
                    "non-integer value, comparing as text"
                );
                Representation::Text
            }
        };
        debug!(
            property,
            %representation,
            present,
            missing = sidecars.len() - present,
            "inferred sort representation"
        );

        Self {
            property: property.to_string(),
            representation,
        }
    }

    pub fn property(&self) -> &str {
        &self.property
    }

    pub fn representation(&self) -> Representation {
        self.representation
    }

    /// Comparison key of `sidecar`, or `None` when the property is missing.
    pub fn key(&self, sidecar: &Sidecar) -> Option<Comparable> {
        let value = sidecar.property(&self.property)?;
        Some(match self.representation {
            Representation::Integer => match as_integer(value) {
                Some(number) => Comparable::Integer(number),
                None => Comparable::Text(property_text(value)),
            },
            Representation::Text => Comparable::Text(property_text(value)),
        })
    }
}

/// Integer interpretation of a JSON value.
///
/// Numbers qualify when their JSON text is an integer literal; strings
/// qualify when the whole string is a base-10 integer. Neither is bounded in
/// size. Floats and booleans never qualify.
pub fn as_integer(value: &Value) -> Option<IntegerKey> {
    match value {
        Value::Number(number) => IntegerKey::parse(&number.to_string()),
        Value::String(text) => IntegerKey::parse(text),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sidecars(values: &[Value]) -> Vec<Sidecar> {
        values
            .iter()
            .enumerate()
            .map(|(i, value)| {
                let mut data = serde_json::Map::new();
                if !value.is_null() {
                    data.insert("SeriesNumber".to_string(), value.clone());
                }
                Sidecar::new(format!("{i}.json"), data)
            })
            .collect()
    }

    fn int(value: i64) -> Option<IntegerKey> {
        Some(IntegerKey::from(value))
    }

    #[test]
    fn integer_strings_qualify() {
        assert_eq!(as_integer(&json!(13)), int(13));
        assert_eq!(as_integer(&json!("13")), int(13));
        assert_eq!(as_integer(&json!("-4")), int(-4));
        assert_eq!(as_integer(&json!("+4")), int(4));
        assert_eq!(as_integer(&json!("007")), int(7));
        assert_eq!(as_integer(&json!("-0")), int(0));
        assert_eq!(
            as_integer(&json!(u64::MAX)).map(|key| key.to_string()),
            Some(u64::MAX.to_string())
        );
    }

    #[test]
    fn residual_characters_disqualify() {
        assert_eq!(as_integer(&json!("13a")), None);
        assert_eq!(as_integer(&json!(" 13")), None);
        assert_eq!(as_integer(&json!("1.0")), None);
        assert_eq!(as_integer(&json!("")), None);
        assert_eq!(as_integer(&json!("-")), None);
        assert_eq!(as_integer(&json!("1e3")), None);
        assert_eq!(as_integer(&json!(1.5)), None);
        assert_eq!(as_integer(&json!(true)), None);
    }

    #[test]
    fn all_integer_values_infer_integer() {
        let records = sidecars(&[json!(2), json!("13"), Value::Null, json!(1)]);
        let rule = ComparisonRule::infer(&records, "SeriesNumber");
        assert_eq!(rule.representation(), Representation::Integer);
        assert_eq!(rule.key(&records[1]), int(13).map(Comparable::Integer));
        assert_eq!(rule.key(&records[2]), None);
    }

    #[test]
    fn one_text_value_downgrades_everything() {
        let records = sidecars(&[json!(2), json!("13"), json!("localizer")]);
        let rule = ComparisonRule::infer(&records, "SeriesNumber");
        assert_eq!(rule.representation(), Representation::Text);
        assert_eq!(rule.key(&records[0]), Some(Comparable::Text("2".to_string())));
        assert_eq!(rule.key(&records[1]), Some(Comparable::Text("13".to_string())));
    }

    #[test]
    fn no_present_values_is_integer() {
        let records = sidecars(&[Value::Null, Value::Null]);
        let rule = ComparisonRule::infer(&records, "SeriesNumber");
        assert_eq!(rule.representation(), Representation::Integer);
        assert!(records.iter().all(|sc| rule.key(sc).is_none()));
    }

    #[test]
    fn integers_order_numerically() {
        let key = |value: i64| Comparable::Integer(IntegerKey::from(value));
        assert!(key(2) < key(13));
        assert!(key(-13) < key(-2));
        assert!(key(-1) < key(0));
        assert!(Comparable::Text("13".to_string()) < Comparable::Text("2".to_string()));
    }

    #[test]
    fn oversized_integer_strings_stay_numeric() {
        let huge = format!("1{}", "0".repeat(41));
        let records = sidecars(&[json!(huge), json!("2"), json!(format!("-{huge}"))]);
        let rule = ComparisonRule::infer(&records, "SeriesNumber");
        assert_eq!(rule.representation(), Representation::Integer);

        let keys: Vec<_> = records.iter().map(|sc| rule.key(sc)).collect();
        assert!(keys[1] < keys[0]);
        assert!(keys[2] < keys[1]);
        assert_eq!(keys[0].as_ref().map(ToString::to_string), Some(huge));
    }

    #[test]
    fn json_numbers_beyond_u64_stay_numeric() {
        let document: Value = serde_json::from_str(
            r#"[18446744073709551616, 2, -18446744073709551617]"#,
        )
        .expect("valid json");
        let values = document.as_array().cloned().unwrap_or_default();
        let records = sidecars(&values);
        let rule = ComparisonRule::infer(&records, "SeriesNumber");
        assert_eq!(rule.representation(), Representation::Integer);

        let keys: Vec<_> = records.iter().map(|sc| rule.key(sc)).collect();
        assert!(keys[1] < keys[0]);
        assert!(keys[2] < keys[1]);
        assert_eq!(
            keys[0].as_ref().map(ToString::to_string).as_deref(),
            Some("18446744073709551616")
        );
    }
}
