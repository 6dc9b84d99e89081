//! Dual-target artifact emitter.
//!
//! The direct-write backend materializes a plan as a directory tree; the
//! script backend (see [`crate::script`]) wraps the same plan into a
//! provisioning script. [`Generator`] is the façade doing both in one pass.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use forge_spec::ModuleSpec;

use crate::artifact::ModulePlan;
use crate::error::GenResult;
use crate::naming;
use crate::plan::plan_module;
use crate::script::{render_provision_script, ScriptOptions};

/// Direct-write backend: materialize a plan under a target directory.
pub struct DirectoryEmitter {
    target_root: PathBuf,
}

impl DirectoryEmitter {
    /// Create an emitter writing below the given directory.
    pub fn new(target_root: impl Into<PathBuf>) -> Self {
        Self {
            target_root: target_root.into(),
        }
    }

    /// Write the module tree and return its root.
    ///
    /// Artifacts are written in plan order; a failed write aborts the pass
    /// and later artifacts are not attempted.
    pub fn emit(&self, plan: &ModulePlan) -> GenResult<PathBuf> {
        let module_root = self.target_root.join(&plan.module_name);
        info!("Writing module tree at {:?}", module_root);

        for dir in plan.directories() {
            fs::create_dir_all(module_root.join(dir))?;
        }

        for artifact in &plan.artifacts {
            let path = module_root.join(&artifact.path);
            fs::write(&path, &artifact.content)?;
            debug!("Wrote {:?}", path);
        }

        Ok(module_root)
    }
}

/// Paths produced by a full generation pass.
#[derive(Debug)]
pub struct Generated {
    pub module_root: Option<PathBuf>,
    pub script_path: Option<PathBuf>,
}

/// End-to-end generator: one synthesis pass feeding both backends.
pub struct Generator {
    spec: ModuleSpec,
    script_options: ScriptOptions,
}

impl Generator {
    /// Create a generator for the given specification.
    pub fn new(spec: ModuleSpec) -> Self {
        Self {
            spec,
            script_options: ScriptOptions::default(),
        }
    }

    /// Override the script backend options.
    pub fn with_script_options(mut self, options: ScriptOptions) -> Self {
        self.script_options = options;
        self
    }

    /// Synthesize the plan without emitting anything.
    pub fn plan(&self) -> GenResult<ModulePlan> {
        plan_module(&self.spec)
    }

    /// Write the module tree and the sibling provisioning script.
    pub fn generate(&self, target_dir: &Path) -> GenResult<Generated> {
        let plan = self.plan()?;
        let module_root = DirectoryEmitter::new(target_dir).emit(&plan)?;
        let script_path = self.write_script(&plan, target_dir)?;
        Ok(Generated {
            module_root: Some(module_root),
            script_path: Some(script_path),
        })
    }

    /// Write only the module tree.
    pub fn generate_tree(&self, target_dir: &Path) -> GenResult<Generated> {
        let plan = self.plan()?;
        let module_root = DirectoryEmitter::new(target_dir).emit(&plan)?;
        Ok(Generated {
            module_root: Some(module_root),
            script_path: None,
        })
    }

    /// Write only the provisioning script.
    pub fn generate_script(&self, target_dir: &Path) -> GenResult<Generated> {
        let plan = self.plan()?;
        fs::create_dir_all(target_dir)?;
        let script_path = self.write_script(&plan, target_dir)?;
        Ok(Generated {
            module_root: None,
            script_path: Some(script_path),
        })
    }

    fn write_script(&self, plan: &ModulePlan, target_dir: &Path) -> GenResult<PathBuf> {
        let script_path = target_dir.join(naming::script_file_name(&plan.module_name));
        let script = render_provision_script(plan, &self.script_options);
        fs::write(&script_path, script)?;
        mark_executable(&script_path)?;
        info!("Wrote provisioning script at {:?}", script_path);
        Ok(script_path)
    }
}

#[cfg(unix)]
fn mark_executable(path: &Path) -> GenResult<()> {
    use std::os::unix::fs::PermissionsExt;
    let mut permissions = fs::metadata(path)?.permissions();
    permissions.set_mode(0o755);
    fs::set_permissions(path, permissions)?;
    Ok(())
}

#[cfg(not(unix))]
fn mark_executable(_path: &Path) -> GenResult<()> {
    Ok(())
}
