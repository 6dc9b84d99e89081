//! Single synthesis pass over a specification.
//!
//! Both emission backends consume the plan produced here; neither re-derives
//! artifact content on its own.

use std::collections::HashMap;

use tracing::debug;

use forge_spec::ModuleSpec;

use crate::artifact::{Artifact, ModulePlan};
use crate::error::{GenError, GenResult};
use crate::naming;
use crate::policy::{ACCESS_FILE, ICON_FILE, MANIFEST_FILE, MENU_FILE};
use crate::{manifest, menu, model, security, views};

/// Check the generation preconditions without producing anything.
///
/// Rejects an empty module name and any pair of usable models whose dotted
/// names reduce to the same last segment (they would fight over one file
/// and one class name).
pub fn preflight(spec: &ModuleSpec) -> GenResult<()> {
    if spec.name.is_empty() {
        return Err(GenError::EmptyModuleName);
    }

    let mut stems: HashMap<String, &str> = HashMap::new();
    for m in spec.usable_models() {
        let stem = naming::file_stem(&m.name).to_string();
        if let Some(first) = stems.insert(stem.clone(), &m.name) {
            return Err(GenError::DuplicateModelArtifact {
                stem,
                first: first.to_string(),
                second: m.name.clone(),
            });
        }
    }
    Ok(())
}

/// Run every synthesizer once, in the fixed sequence, and collect the
/// ordered artifact list.
pub fn plan_module(spec: &ModuleSpec) -> GenResult<ModulePlan> {
    preflight(spec)?;

    let mut artifacts = vec![
        Artifact::new(MANIFEST_FILE, manifest::render_manifest(spec)),
        Artifact::new("__init__.py", model::render_module_init()),
        Artifact::new("models/__init__.py", model::render_models_init(spec)),
    ];

    for m in spec.usable_models() {
        artifacts.push(Artifact::new(
            format!("models/{}", naming::model_file_name(&m.name)),
            model::render_model(m),
        ));
    }

    artifacts.push(Artifact::new(ACCESS_FILE, security::render_access_csv(spec)));

    for m in spec.usable_models() {
        artifacts.push(Artifact::new(
            format!("views/{}", naming::views_file_name(&m.name)),
            views::render_views(m),
        ));
    }

    artifacts.push(Artifact::new(MENU_FILE, menu::render_menu(spec)));
    artifacts.push(Artifact::new(ICON_FILE, String::new()));

    debug!(
        "Planned {} artifacts for module '{}'",
        artifacts.len(),
        spec.name
    );

    Ok(ModulePlan {
        module_name: spec.name.clone(),
        artifacts,
    })
}
