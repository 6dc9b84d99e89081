//! # forge_gen
//!
//! The AddonForge generation engine: turns an immutable
//! [`ModuleSpec`](forge_spec::ModuleSpec) into a complete, mutually
//! consistent set of addon-module artifacts.
//!
//! The engine is a one-way pipeline. A single synthesis pass
//! ([`plan::plan_module`]) invokes every synthesizer — manifest, model
//! sources, access rules, views, menu — exactly once and collects the
//! ordered artifact list. Two backends consume that one plan: the
//! direct-write [`DirectoryEmitter`] and the provisioning-script renderer
//! in [`script`]. Because neither backend re-derives content, their
//! outputs cannot drift apart.
//!
//! All cross-referenced identifiers (file stems, class names, record ids,
//! action ids, menu ids) come from [`naming`]; all behavioral constants
//! (view field cap, form split point, menu sequences, target paths) live
//! in [`policy`].
//!
//! ## Example
//!
//! ```rust,no_run
//! use forge_gen::Generator;
//! use forge_spec::{FieldKind, FieldSpec, ModelSpec, ModuleSpec};
//!
//! let spec = ModuleSpec::new("library_mgmt").with_model(
//!     ModelSpec::new("library.book")
//!         .with_field(FieldSpec::new("title", FieldKind::ShortText).required()),
//! );
//!
//! let generated = Generator::new(spec)
//!     .generate(std::path::Path::new("."))
//!     .unwrap();
//! println!("module at {:?}", generated.module_root);
//! ```

pub mod artifact;
pub mod emitter;
pub mod error;
pub mod manifest;
pub mod menu;
pub mod model;
pub mod naming;
pub mod plan;
pub mod policy;
pub mod script;
pub mod security;
pub mod views;

pub use artifact::{Artifact, ModulePlan};
pub use emitter::{DirectoryEmitter, Generated, Generator};
pub use error::{GenError, GenResult};
pub use plan::{plan_module, preflight};
pub use script::{render_provision_script, ScriptOptions};
