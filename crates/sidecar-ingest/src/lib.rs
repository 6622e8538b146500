//! Sidecar ingestion utilities.
//!
//! This crate supplies the collaborators around the ordering engine:
//! finding sidecar files and loading each one into a [`Sidecar`] record.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use sidecar_ingest::{discover_sidecars, load_sidecars};
//!
//! let files = discover_sidecars(Path::new("sub-01/ses-01"), ".json", false)?;
//! let sidecars = load_sidecars(&files)?;
//! ```
//!
//! [`Sidecar`]: sidecar_model::Sidecar

mod discovery;
mod error;
mod loader;

// === Error Types ===
pub use error::{IngestError, Result};

// === File Discovery ===
pub use discovery::{collect_inputs, discover_sidecars, filter_files};

// === Loading ===
pub use loader::{load_sidecar, load_sidecars};
