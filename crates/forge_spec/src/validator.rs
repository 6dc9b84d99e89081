//! Structural validation of module specifications.
//!
//! Validation never blocks the skippable-entity filtering rules; it reports
//! what the generator will silently drop so spec authors can fix the
//! document instead of wondering where a field went.

use crate::models::{FieldKind, ModelSpec, ModuleSpec};

/// Validation result with details.
#[derive(Debug, Default)]
pub struct ValidationResult {
    pub valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self {
            valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn add_error(&mut self, message: impl Into<String>) {
        self.valid = false;
        self.errors.push(message.into());
    }

    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    pub fn merge(&mut self, other: ValidationResult) {
        if !other.valid {
            self.valid = false;
        }
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }
}

/// Validator for module specifications.
pub struct SpecValidator;

impl SpecValidator {
    /// Validate a module specification.
    pub fn validate_module(spec: &ModuleSpec) -> ValidationResult {
        let mut result = ValidationResult::new();

        if spec.name.is_empty() {
            result.add_error("Module name cannot be empty; nothing would be generated");
        }

        if spec.models.is_empty() {
            result.add_warning("Module has no models; only boilerplate artifacts are generated");
        }

        // The launcher menu always points at the first model, usable or not.
        if let Some(first) = spec.models.first() {
            if !first.is_usable() {
                result.add_warning(
                    "First model has an empty name; the application launcher menu \
                     will reference an empty action id",
                );
            }
        }

        for (index, model) in spec.models.iter().enumerate() {
            if !model.is_usable() {
                result.add_warning(format!(
                    "Model #{} has an empty name and is skipped by every synthesizer",
                    index + 1
                ));
                continue;
            }
            result.merge(Self::validate_model(model));
        }

        result
    }

    /// Validate a single model.
    pub fn validate_model(model: &ModelSpec) -> ValidationResult {
        let mut result = ValidationResult::new();

        if model.name.split('.').last().unwrap_or_default().is_empty() {
            result.add_warning(format!(
                "Model '{}' ends in a dot; its derived file and class names are empty",
                model.name
            ));
        }

        for (index, field) in model.fields.iter().enumerate() {
            if !field.is_usable() {
                result.add_warning(format!(
                    "Field #{} of model '{}' has an empty name and is skipped",
                    index + 1,
                    model.name
                ));
                continue;
            }

            if field.kind.is_numeric() || field.kind.is_text() {
                if let Some(bounds) = field.bounds {
                    if bounds.min > bounds.max {
                        result.add_warning(format!(
                            "Field '{}' of model '{}' has inverted bounds [{}, {}]; \
                             the generated constraint rejects every value",
                            field.name, model.name, bounds.min, bounds.max
                        ));
                    }
                }
            }

            if field.kind == FieldKind::Selection {
                let dropped = field.options.len() - field.usable_options().count();
                if dropped > 0 {
                    result.add_warning(format!(
                        "Field '{}' of model '{}' drops {} selection option(s) with an \
                         empty key or label",
                        field.name, model.name, dropped
                    ));
                }
                if field.usable_options().count() == 0 {
                    result.add_warning(format!(
                        "Selection field '{}' of model '{}' has no usable options",
                        field.name, model.name
                    ));
                }
            }
        }

        result
    }
}
