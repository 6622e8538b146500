//! Sidecar file discovery and extension filtering.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{IngestError, Result};

/// Keeps paths whose file name ends with `extension`.
///
/// The match is an exact, case-sensitive suffix match on the file name and
/// input order is preserved.
pub fn filter_files(paths: &[PathBuf], extension: &str) -> Vec<PathBuf> {
    paths
        .iter()
        .filter(|path| has_extension(path, extension))
        .cloned()
        .collect()
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.ends_with(extension))
}

/// Lists sidecar files in a directory.
///
/// Returns files sorted by path. Sub-directories are searched only when
/// `recursive` is set.
pub fn discover_sidecars(dir: &Path, extension: &str, recursive: bool) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(IngestError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let mut files = Vec::new();
    walk(dir, recursive, &mut files)?;
    files.sort();

    let sidecars = filter_files(&files, extension);
    debug!(
        dir = %dir.display(),
        file_count = files.len(),
        sidecar_count = sidecars.len(),
        "discovered sidecars"
    );
    Ok(sidecars)
}

fn walk(dir: &Path, recursive: bool, files: &mut Vec<PathBuf>) -> Result<()> {
    let entries = std::fs::read_dir(dir).map_err(|e| IngestError::DirectoryRead {
        path: dir.to_path_buf(),
        source: e,
    })?;

    for entry_result in entries {
        let entry = entry_result.map_err(|e| IngestError::DirectoryRead {
            path: dir.to_path_buf(),
            source: e,
        })?;

        let path = entry.path();
        if path.is_dir() {
            if recursive {
                walk(&path, recursive, files)?;
            }
        } else if path.is_file() {
            files.push(path);
        }
    }

    Ok(())
}

/// Expands command-line inputs into sidecar paths.
///
/// Files are kept when they carry the sidecar extension; directories are
/// expanded with [`discover_sidecars`]. Argument order is preserved.
pub fn collect_inputs(inputs: &[PathBuf], extension: &str, recursive: bool) -> Result<Vec<PathBuf>> {
    let mut sidecars = Vec::new();
    for input in inputs {
        if input.is_dir() {
            sidecars.extend(discover_sidecars(input, extension, recursive)?);
        } else if input.exists() {
            if has_extension(input, extension) {
                sidecars.push(input.clone());
            } else {
                debug!(path = %input.display(), "skipping non-sidecar input");
            }
        } else {
            return Err(IngestError::PathNotFound {
                path: input.clone(),
            });
        }
    }
    Ok(sidecars)
}
