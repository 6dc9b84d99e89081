//! # forge_spec
//!
//! Module specification model for AddonForge.
//!
//! This crate owns the declarative description of an addon module — the
//! module itself, its data models, their typed fields and validation
//! bounds — plus the surrounding plumbing: a builder for assembling a
//! specification incrementally, a reader for YAML/JSON spec documents, and
//! a structural validator.
//!
//! The specification is built once, stays immutable while the generation
//! engine (the `forge_gen` crate) projects artifacts from it, and is
//! discarded afterwards.
//!
//! ## Example
//!
//! ```rust
//! use forge_spec::{FieldKind, FieldSpec, ModelSpec, ModuleSpec, SpecValidator};
//!
//! let spec = ModuleSpec::new("library_mgmt")
//!     .with_category("Tools")
//!     .with_model(
//!         ModelSpec::new("library.book")
//!             .with_field(FieldSpec::new("title", FieldKind::ShortText).required())
//!             .with_field(FieldSpec::new("pages", FieldKind::Integer).with_bounds(0, 2000)),
//!     );
//!
//! let result = SpecValidator::validate_module(&spec);
//! assert!(result.valid);
//! ```

pub mod builder;
pub mod error;
pub mod models;
pub mod reader;
pub mod validator;

pub use builder::ModuleSpecBuilder;
pub use error::{SpecError, SpecResult};
pub use models::*;
pub use reader::SpecReader;
pub use validator::{SpecValidator, ValidationResult};
