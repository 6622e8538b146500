//! Sidecar records: one JSON metadata file and its parsed properties.

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

/// A loaded sidecar metadata file.
///
/// Records are created once by the loader and never mutated afterwards, so
/// the fields are only reachable through accessors.
#[derive(Debug, Clone, PartialEq)]
pub struct Sidecar {
    path: PathBuf,
    data: Map<String, Value>,
}

impl Sidecar {
    pub fn new(path: impl Into<PathBuf>, data: Map<String, Value>) -> Self {
        Self {
            path: path.into(),
            data,
        }
    }

    /// Location of the sidecar file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All properties as parsed from the file.
    pub fn data(&self) -> &Map<String, Value> {
        &self.data
    }

    /// Base name of the file, used as the ordering tie-break.
    pub fn file_name(&self) -> Cow<'_, str> {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy())
            .unwrap_or_default()
    }

    /// Value of `name`, or `None` when the key is absent or explicitly null.
    pub fn property(&self, name: &str) -> Option<&Value> {
        match self.data.get(name) {
            None | Some(Value::Null) => None,
            Some(value) => Some(value),
        }
    }

    /// Whether `name` is missing from this sidecar.
    pub fn is_missing(&self, name: &str) -> bool {
        self.property(name).is_none()
    }
}

/// Render a property value as text.
///
/// Strings are returned verbatim; numbers and booleans use their JSON
/// spelling; arrays and objects become compact JSON.
pub fn property_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Number(number) => number.to_string(),
        Value::Bool(flag) => flag.to_string(),
        Value::Null => String::new(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sidecar(path: &str, data: Value) -> Sidecar {
        let Value::Object(map) = data else {
            panic!("fixture must be an object");
        };
        Sidecar::new(path, map)
    }

    #[test]
    fn null_is_missing() {
        let sc = sidecar("a.json", json!({"SeriesNumber": null, "Other": 1}));
        assert!(sc.is_missing("SeriesNumber"));
        assert!(sc.is_missing("Absent"));
        assert!(!sc.is_missing("Other"));
    }

    #[test]
    fn file_name_is_base_name() {
        let sc = sidecar("sub/dir/scan_01.json", json!({}));
        assert_eq!(sc.file_name(), "scan_01.json");
    }

    #[test]
    fn property_text_forms() {
        assert_eq!(property_text(&json!("desc1")), "desc1");
        assert_eq!(property_text(&json!(1)), "1");
        assert_eq!(property_text(&json!(1.5)), "1.5");
        assert_eq!(property_text(&json!(true)), "true");
        assert_eq!(property_text(&json!([1, 2])), "[1,2]");
    }
}
