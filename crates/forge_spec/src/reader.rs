//! Spec document reading utilities.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{SpecError, SpecResult};
use crate::models::ModuleSpec;

/// Reader for spec documents.
pub struct SpecReader;

impl SpecReader {
    /// Read a module specification from a YAML or JSON document, chosen by
    /// file extension.
    pub fn read_module(path: impl AsRef<Path>) -> SpecResult<ModuleSpec> {
        let path = path.as_ref();
        debug!("Reading module spec from {:?}", path);

        if !path.exists() {
            return Err(SpecError::NotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path)?;
        let extension = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            "yaml" | "yml" => Ok(serde_yaml::from_str(&content)?),
            "json" => Ok(serde_json::from_str(&content)?),
            _ => Err(SpecError::UnsupportedFormat(path.to_path_buf())),
        }
    }
}
