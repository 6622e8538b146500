//! Partitioning of ordered sidecars into groups.

use indexmap::IndexMap;
use indexmap::map::Iter;
use sidecar_model::{GroupKey, GroupSpec, Sidecar};
use tracing::debug;

/// Sidecars bucketed by group key.
///
/// Keys keep the order in which they were first seen and each bucket keeps
/// the order its members were appended in.
#[derive(Debug, Clone, Default)]
pub struct GroupTable {
    groups: IndexMap<GroupKey, Vec<Sidecar>>,
}

impl GroupTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `sidecar` to the bucket for `key`, creating it on first use.
    pub fn push(&mut self, key: GroupKey, sidecar: Sidecar) {
        self.groups.entry(key).or_default().push(sidecar);
    }

    pub fn get(&self, key: &GroupKey) -> Option<&[Sidecar]> {
        self.groups.get(key).map(Vec::as_slice)
    }

    /// Look up a group whose key components are all present.
    pub fn get_values(&self, values: &[&str]) -> Option<&[Sidecar]> {
        self.get(&GroupKey::from_values(values.iter().copied()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &GroupKey> {
        self.groups.keys()
    }

    pub fn iter(&self) -> Iter<'_, GroupKey, Vec<Sidecar>> {
        self.groups.iter()
    }

    /// Number of groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Number of sidecars across all groups.
    pub fn member_count(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }
}

impl<'a> IntoIterator for &'a GroupTable {
    type Item = (&'a GroupKey, &'a Vec<Sidecar>);
    type IntoIter = Iter<'a, GroupKey, Vec<Sidecar>>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}

/// Group already-ordered sidecars by the properties in `spec`.
///
/// No sorting happens here: members of each group appear in the order they
/// have in `ordered`.
pub fn group_sidecars(ordered: Vec<Sidecar>, spec: &GroupSpec) -> GroupTable {
    let mut table = GroupTable::new();
    for sidecar in ordered {
        let key = GroupKey::for_sidecar(&sidecar, spec);
        table.push(key, sidecar);
    }
    debug!(
        group_by = %spec,
        group_count = table.len(),
        sidecar_count = table.member_count(),
        "grouped sidecars"
    );
    table
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

    fn names(members: &[Sidecar]) -> Vec<String> {
        members.iter().map(|sc| sc.file_name().into_owned()).collect()
    }

    #[test]
    fn keys_follow_first_occurrence() {
        let ordered = vec![
            sidecar("a.json", json!({"SeriesDescription": "desc1"})),
            sidecar("b.json", json!({"SeriesDescription": "desc3"})),
            sidecar("d.json", json!({"SeriesDescription": "desc2"})),
            sidecar("c.json", json!({"SeriesDescription": "desc2"})),
        ];
        let table = group_sidecars(ordered, &GroupSpec::parse("SeriesDescription"));

        let keys: Vec<String> = table.keys().map(ToString::to_string).collect();
        assert_eq!(keys, ["desc1", "desc3", "desc2"]);
        assert_eq!(names(table.get_values(&["desc2"]).unwrap()), ["d.json", "c.json"]);
        assert_eq!(table.member_count(), 4);
    }

    #[test]
    fn missing_property_gets_its_own_group() {
        let ordered = vec![
            sidecar("a.json", json!({"SeriesDescription": ""})),
            sidecar("b.json", json!({})),
            sidecar("c.json", json!({"SeriesDescription": null})),
        ];
        let table = group_sidecars(ordered, &GroupSpec::parse("SeriesDescription"));

        assert_eq!(table.len(), 2);
        assert_eq!(names(table.get_values(&[""]).unwrap()), ["a.json"]);
        let missing = GroupKey::new(vec![None]);
        assert_eq!(names(table.get(&missing).unwrap()), ["b.json", "c.json"]);
    }

    #[test]
    fn empty_spec_puts_everything_in_one_group() {
        let ordered = vec![
            sidecar("a.json", json!({"SeriesNumber": 1})),
            sidecar("b.json", json!({"SeriesNumber": 2})),
        ];
        let table = group_sidecars(ordered, &GroupSpec::parse(""));
        assert_eq!(table.len(), 1);
        assert_eq!(names(table.get_values(&[]).unwrap()), ["a.json", "b.json"]);
    }

    #[test]
    fn empty_input_has_no_groups() {
        let table = group_sidecars(Vec::new(), &GroupSpec::parse("SeriesDescription"));
        assert!(table.is_empty());
    }
}
