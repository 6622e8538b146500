//! Deterministic ordering of sidecars by an inferred sort key.

use std::cmp::Ordering;

use sidecar_model::{Sidecar, SortDirection, SortSpec};
use tracing::debug;

use crate::inference::{Comparable, ComparisonRule};

/// Composite sort key: missing flag, inferred value, then file name.
///
/// The missing flag is never reversed, so missing records trail in both
/// directions. Value and file name are reversed together for descending
/// sorts. The full path breaks ties between equal file names from different
/// directories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompositeKey {
    value: Option<Comparable>,
    file_name: String,
    path: String,
}

impl CompositeKey {
    pub fn new(rule: &ComparisonRule, sidecar: &Sidecar) -> Self {
        Self {
            value: rule.key(sidecar),
            file_name: sidecar.file_name().into_owned(),
            path: sidecar.path().to_string_lossy().into_owned(),
        }
    }

    pub fn is_missing(&self) -> bool {
        self.value.is_none()
    }

    pub fn value(&self) -> Option<&Comparable> {
        self.value.as_ref()
    }

    pub fn compare(&self, other: &Self, direction: SortDirection) -> Ordering {
        match (&self.value, &other.value) {
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => self.tie_break(other),
            (Some(left), Some(right)) => {
                let ordering = left.cmp(right).then_with(|| self.tie_break(other));
                match direction {
                    SortDirection::Ascending => ordering,
                    SortDirection::Descending => ordering.reverse(),
                }
            }
        }
    }

    fn tie_break(&self, other: &Self) -> Ordering {
        self.file_name
            .cmp(&other.file_name)
            .then_with(|| self.path.cmp(&other.path))
    }
}

/// Sidecars in sort order, with the rule that ordered them.
#[derive(Debug, Clone)]
pub struct SortedSidecars {
    pub rule: ComparisonRule,
    pub sidecars: Vec<Sidecar>,
    /// Number of trailing sidecars missing the sort property.
    pub missing: usize,
}

/// Sort sidecars and keep the inferred comparison rule.
///
/// Present records are ordered by `(value, file name)` in the requested
/// direction; records missing the property follow in file name order.
pub fn order_sidecars(sidecars: Vec<Sidecar>, spec: &SortSpec) -> SortedSidecars {
    let rule = ComparisonRule::infer(&sidecars, spec.property());
    let direction = spec.direction();

    let mut keyed: Vec<(CompositeKey, Sidecar)> = sidecars
        .into_iter()
        .map(|sidecar| (CompositeKey::new(&rule, &sidecar), sidecar))
        .collect();
    keyed.sort_by(|(left, _), (right, _)| left.compare(right, direction));

    let missing = keyed.iter().filter(|(key, _)| key.is_missing()).count();
    debug!(
        sort = %spec,
        representation = %rule.representation(),
        sidecar_count = keyed.len(),
        missing,
        "ordered sidecars"
    );

    SortedSidecars {
        rule,
        sidecars: keyed.into_iter().map(|(_, sidecar)| sidecar).collect(),
        missing,
    }
}

/// Sort sidecars by `spec`.
pub fn sort_sidecars(sidecars: Vec<Sidecar>, spec: &SortSpec) -> Vec<Sidecar> {
    order_sidecars(sidecars, spec).sidecars
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    fn sidecar(path: &str, data: Value) -> Sidecar {
        let Value::Object(map) = data else {
            panic!("fixture must be an object");
        };
        Sidecar::new(path, map)
    }

    fn names(sidecars: &[Sidecar]) -> Vec<String> {
        sidecars
            .iter()
            .map(|sc| sc.path().to_string_lossy().into_owned())
            .collect()
    }

    fn fixture() -> Vec<Sidecar> {
        vec![
            sidecar("d.json", json!({"SeriesNumber": 2, "SeriesDescription": "desc2"})),
            sidecar("b.json", json!({"SeriesNumber": 1, "SeriesDescription": "desc3"})),
            sidecar("c.json", json!({"SeriesNumber": 3, "SeriesDescription": "desc2"})),
            sidecar("a.json", json!({"SeriesNumber": 1, "SeriesDescription": "desc1"})),
        ]
    }

    #[test]
    fn ascending_breaks_ties_by_file_name() {
        let spec = SortSpec::parse("SeriesNumber:asc").unwrap();
        let ordered = sort_sidecars(fixture(), &spec);
        assert_eq!(names(&ordered), ["a.json", "b.json", "d.json", "c.json"]);
    }

    #[test]
    fn descending_reverses_tie_break() {
        let spec = SortSpec::parse("SeriesNumber:desc").unwrap();
        let ordered = sort_sidecars(fixture(), &spec);
        assert_eq!(names(&ordered), ["c.json", "d.json", "b.json", "a.json"]);
    }

    #[test]
    fn descending_text_property() {
        let spec = SortSpec::parse("SeriesDescription:desc").unwrap();
        let ordered = sort_sidecars(fixture(), &spec);
        assert_eq!(names(&ordered), ["b.json", "d.json", "c.json", "a.json"]);
    }

    #[test]
    fn missing_values_trail_in_both_directions() {
        let mut records = fixture();
        records.push(sidecar("f.json", json!({"SeriesDescription": "desc3"})));
        records.push(sidecar("e.json", json!({"SeriesNumber": null})));

        for expr in ["SeriesNumber:asc", "SeriesNumber:desc"] {
            let sorted = order_sidecars(records.clone(), &SortSpec::parse(expr).unwrap());
            assert_eq!(sorted.missing, 2);
            assert_eq!(names(&sorted.sidecars[4..]), ["e.json", "f.json"]);
        }
    }

    #[test]
    fn numeric_strings_sort_numerically() {
        let mut records = fixture();
        records.push(sidecar("e.json", json!({"SeriesNumber": "13"})));
        let sorted = order_sidecars(records, &SortSpec::parse("SeriesNumber").unwrap());
        assert_eq!(
            names(&sorted.sidecars),
            ["a.json", "b.json", "d.json", "c.json", "e.json"]
        );
    }

    #[test]
    fn same_file_name_falls_back_to_path() {
        let records = vec![
            sidecar("run-2/scan.json", json!({"SeriesNumber": 1})),
            sidecar("run-1/scan.json", json!({"SeriesNumber": 1})),
        ];
        let ordered = sort_sidecars(records, &SortSpec::parse("SeriesNumber").unwrap());
        assert_eq!(names(&ordered), ["run-1/scan.json", "run-2/scan.json"]);
    }
}
