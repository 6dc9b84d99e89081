//! Incremental assembly of a [`ModuleSpec`].
//!
//! Interactive front ends collect module fragments piecemeal; this builder
//! is the boundary between that mutable accumulation and the generator,
//! which only ever sees the finished, immutable specification.

use crate::models::{ModelSpec, ModuleSpec};

/// Accumulates module fragments and produces an immutable [`ModuleSpec`].
#[derive(Debug, Default)]
pub struct ModuleSpecBuilder {
    name: String,
    version: Option<String>,
    category: Option<String>,
    models: Vec<ModelSpec>,
}

impl ModuleSpecBuilder {
    /// Start building a module with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set the module version (defaults to `1.0`).
    pub fn version(&mut self, version: impl Into<String>) -> &mut Self {
        self.version = Some(version.into());
        self
    }

    /// Set the module category (defaults to empty).
    pub fn category(&mut self, category: impl Into<String>) -> &mut Self {
        self.category = Some(category.into());
        self
    }

    /// Append a model, keeping declaration order.
    pub fn add_model(&mut self, model: ModelSpec) -> &mut Self {
        self.models.push(model);
        self
    }

    /// Finish and hand the immutable specification to the caller.
    pub fn build(self) -> ModuleSpec {
        let mut spec = ModuleSpec::new(self.name);
        if let Some(version) = self.version {
            spec.version = version;
        }
        if let Some(category) = self.category {
            spec.category = category;
        }
        spec.models = self.models;
        spec
    }
}
