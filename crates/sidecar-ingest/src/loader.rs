//! Sidecar loading: read each file and parse it into a property mapping.

use std::path::{Path, PathBuf};

use serde_json::Value;
use sidecar_model::Sidecar;
use tracing::trace;

use crate::error::{IngestError, Result};

/// Loads one sidecar.
///
/// # Errors
///
/// Fails when the file cannot be read, is not valid JSON, or does not hold
/// a JSON object at the top level.
pub fn load_sidecar(path: &Path) -> Result<Sidecar> {
    let contents = std::fs::read_to_string(path).map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    let value: Value = serde_json::from_str(&contents).map_err(|e| IngestError::JsonParse {
        path: path.to_path_buf(),
        source: e,
    })?;

    match value {
        Value::Object(data) => {
            trace!(path = %path.display(), property_count = data.len(), "loaded sidecar");
            Ok(Sidecar::new(path, data))
        }
        other => Err(IngestError::NotAnObject {
            path: path.to_path_buf(),
            kind: value_kind(&other),
        }),
    }
}

/// Loads every sidecar in `paths`, in the same order.
///
/// The first file that fails to load aborts the whole load.
pub fn load_sidecars(paths: &[PathBuf]) -> Result<Vec<Sidecar>> {
    paths.iter().map(|path| load_sidecar(path)).collect()
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
