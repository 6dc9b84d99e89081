//! Data model for module specifications.
//!
//! A [`ModuleSpec`] is the immutable input to the generation engine: one
//! module, an ordered list of models, each with an ordered list of typed
//! fields. Everything the generator emits is a read-only projection of this
//! tree.

use serde::{Deserialize, Serialize};

/// Default validation range applied to numeric values and text lengths.
///
/// A validation routine is only generated for a field whose bounds deviate
/// from this range.
pub const DEFAULT_BOUNDS: Bounds = Bounds { min: 0, max: 100 };

fn default_version() -> String {
    "1.0".to_string()
}

/// The kind of a model field.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum FieldKind {
    ShortText,
    LongText,
    Integer,
    Decimal,
    Boolean,
    Date,
    Datetime,
    Selection,
    ManyToOne,
}

impl FieldKind {
    /// The Odoo field constructor this kind maps to.
    pub fn odoo_constructor(&self) -> &'static str {
        match self {
            FieldKind::ShortText => "Char",
            FieldKind::LongText => "Text",
            FieldKind::Integer => "Integer",
            FieldKind::Decimal => "Float",
            FieldKind::Boolean => "Boolean",
            FieldKind::Date => "Date",
            FieldKind::Datetime => "Datetime",
            FieldKind::Selection => "Selection",
            FieldKind::ManyToOne => "Many2one",
        }
    }

    /// Kinds whose bounds constrain the field value.
    pub fn is_numeric(&self) -> bool {
        matches!(self, FieldKind::Integer | FieldKind::Decimal)
    }

    /// Kinds whose bounds constrain the text length.
    pub fn is_text(&self) -> bool {
        matches!(self, FieldKind::ShortText | FieldKind::LongText)
    }
}

/// Inclusive validation bounds for numeric values or text lengths.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Bounds {
    pub min: i64,
    pub max: i64,
}

impl Bounds {
    pub fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    /// Whether these bounds equal the default range, in which case no
    /// validation routine is emitted.
    pub fn is_default(&self) -> bool {
        *self == DEFAULT_BOUNDS
    }
}

impl Default for Bounds {
    fn default() -> Self {
        DEFAULT_BOUNDS
    }
}

/// One (key, label) pair of a selection field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SelectionOption {
    pub key: String,
    pub label: String,
}

impl SelectionOption {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
        }
    }

    /// Options with an empty key or label are silently dropped.
    pub fn is_usable(&self) -> bool {
        !self.key.is_empty() && !self.label.is_empty()
    }
}

/// What a generated validation routine constrains.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundKind {
    Value,
    Length,
}

impl BoundKind {
    pub fn noun(&self) -> &'static str {
        match self {
            BoundKind::Value => "value",
            BoundKind::Length => "length",
        }
    }
}

/// A derived constraint for a field whose bounds deviate from the default.
///
/// Not stored on the spec; projected on demand by
/// [`FieldSpec::validation_rule`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationRule {
    /// Technical name of the field that triggers the constraint.
    pub field: String,
    /// Display label used in the rejection message.
    pub label: String,
    pub kind: BoundKind,
    pub min: i64,
    pub max: i64,
}

impl ValidationRule {
    /// The rejection message reported when a record violates the bound.
    pub fn message(&self) -> String {
        format!(
            "{} {} must lie within [{}, {}]",
            self.label,
            self.kind.noun(),
            self.min,
            self.max
        )
    }
}

/// A single typed, named attribute of a model.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: String,
    pub kind: FieldKind,
    /// Display label; defaults to a capitalized form of the name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default)]
    pub required: bool,
    /// Validation bounds for numeric and text kinds; other kinds ignore them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bounds: Option<Bounds>,
    /// Options of a selection field; empty for other kinds.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<SelectionOption>,
}

impl FieldSpec {
    /// Create a new field with the given technical name and kind.
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
            label: None,
            required: false,
            bounds: None,
            options: Vec::new(),
        }
    }

    /// Set the display label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Mark the field as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Set the validation bounds.
    pub fn with_bounds(mut self, min: i64, max: i64) -> Self {
        self.bounds = Some(Bounds::new(min, max));
        self
    }

    /// Append a selection option.
    pub fn with_option(mut self, key: impl Into<String>, label: impl Into<String>) -> Self {
        self.options.push(SelectionOption::new(key, label));
        self
    }

    /// Fields with an empty name are skipped by every synthesizer.
    pub fn is_usable(&self) -> bool {
        !self.name.is_empty()
    }

    /// The display label, falling back to the capitalized field name.
    pub fn display_label(&self) -> String {
        match self.label.as_deref() {
            Some(label) if !label.is_empty() => label.to_string(),
            _ => capitalize(&self.name),
        }
    }

    /// Selection options that survive the empty-key/empty-label filter.
    pub fn usable_options(&self) -> impl Iterator<Item = &SelectionOption> {
        self.options.iter().filter(|o| o.is_usable())
    }

    /// The derived constraint, if this field's bounds deviate from the
    /// default range. Unusable fields and kinds without bounds yield none.
    pub fn validation_rule(&self) -> Option<ValidationRule> {
        if !self.is_usable() {
            return None;
        }
        let kind = if self.kind.is_numeric() {
            BoundKind::Value
        } else if self.kind.is_text() {
            BoundKind::Length
        } else {
            return None;
        };
        let bounds = self.bounds.unwrap_or_default();
        if bounds.is_default() {
            return None;
        }
        Some(ValidationRule {
            field: self.name.clone(),
            label: self.display_label(),
            kind,
            min: bounds.min,
            max: bounds.max,
        })
    }
}

/// A data entity definition with a dotted technical name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ModelSpec {
    /// Dotted technical name, e.g. `library.book`.
    pub name: String,
    #[serde(default)]
    pub fields: Vec<FieldSpec>,
}

impl ModelSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Append a field.
    pub fn with_field(mut self, field: FieldSpec) -> Self {
        self.fields.push(field);
        self
    }

    /// Models with an empty name contribute no artifact.
    pub fn is_usable(&self) -> bool {
        !self.name.is_empty()
    }

    /// Fields that survive the empty-name filter, in declaration order.
    pub fn usable_fields(&self) -> impl Iterator<Item = &FieldSpec> {
        self.fields.iter().filter(|f| f.is_usable())
    }

    /// Derived constraints of all usable fields, in declaration order.
    pub fn validation_rules(&self) -> Vec<ValidationRule> {
        self.usable_fields()
            .filter_map(FieldSpec::validation_rule)
            .collect()
    }
}

/// The top-level generated unit: one module with its models.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ModuleSpec {
    pub name: String,
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub models: Vec<ModelSpec>,
}

impl ModuleSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: default_version(),
            category: String::new(),
            models: Vec::new(),
        }
    }

    /// Set the module version.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Set the module category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Append a model.
    pub fn with_model(mut self, model: ModelSpec) -> Self {
        self.models.push(model);
        self
    }

    /// Models that survive the empty-name filter, in declaration order.
    pub fn usable_models(&self) -> impl Iterator<Item = &ModelSpec> {
        self.models.iter().filter(|m| m.is_usable())
    }
}

/// Capitalize like the display-label fallback expects: first character
/// uppercased, remainder lowercased.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
    }
}
