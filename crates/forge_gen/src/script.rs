//! Provisioning-script synthesizer.
//!
//! Wraps a [`ModulePlan`] into one self-contained bash script that recreates
//! the exact same tree on a remote host: elevated directory creation, every
//! artifact embedded as a quoted heredoc, then ownership and permission
//! normalization.

use crate::artifact::{Artifact, ModulePlan};
use crate::policy::{DEFAULT_ADDONS_PATH, MODULE_MODE, MODULE_OWNER};

/// Options of the script backend.
#[derive(Debug, Clone)]
pub struct ScriptOptions {
    /// Addons directory on the target host.
    pub addons_path: String,
}

impl Default for ScriptOptions {
    fn default() -> Self {
        Self {
            addons_path: DEFAULT_ADDONS_PATH.to_string(),
        }
    }
}

impl ScriptOptions {
    /// Override the target addons directory.
    pub fn with_addons_path(mut self, path: impl Into<String>) -> Self {
        self.addons_path = path.into();
        self
    }
}

/// Render the provisioning script for a plan.
pub fn render_provision_script(plan: &ModulePlan, options: &ScriptOptions) -> String {
    let mut out = String::from("#!/bin/bash\n\n");
    out.push_str(&format!(
        "# Provision the {} module on an Odoo host.\n",
        plan.module_name
    ));
    out.push_str(&format!("MODULE_NAME=\"{}\"\n", plan.module_name));
    out.push_str(&format!("ADDONS_PATH=\"{}\"\n", options.addons_path));
    out.push_str("MODULE_ROOT=\"$ADDONS_PATH/$MODULE_NAME\"\n\n");

    out.push_str("sudo mkdir -p \"$MODULE_ROOT\"\n");
    for dir in plan.directories() {
        out.push_str(&format!("sudo mkdir -p \"$MODULE_ROOT/{dir}\"\n"));
    }

    for artifact in &plan.artifacts {
        out.push('\n');
        out.push_str(&render_block(artifact));
    }

    out.push_str(&format!(
        "\nsudo chown -R {MODULE_OWNER} \"$MODULE_ROOT\"\n\
         sudo chmod -R {MODULE_MODE} \"$MODULE_ROOT\"\n\n\
         echo \"Module $MODULE_NAME provisioned at $MODULE_ROOT. \
         Restart the Odoo service to load it.\"\n"
    ));

    out
}

/// Render one artifact as a script block: a `touch` for empty content, a
/// quoted heredoc otherwise.
fn render_block(artifact: &Artifact) -> String {
    let mut out = format!("# {}\n", artifact.path);
    if artifact.content.is_empty() {
        out.push_str(&format!("sudo touch \"$MODULE_ROOT/{}\"\n", artifact.path));
        return out;
    }

    let delimiter = heredoc_delimiter(&artifact.content);
    out.push_str(&format!(
        "sudo tee \"$MODULE_ROOT/{}\" > /dev/null <<'{delimiter}'\n",
        artifact.path
    ));
    out.push_str(&artifact.content);
    if !artifact.content.ends_with('\n') {
        out.push('\n');
    }
    out.push_str(&format!("{delimiter}\n"));
    out
}

/// Pick a heredoc delimiter no line of the content can terminate early.
fn heredoc_delimiter(content: &str) -> String {
    let mut candidate = String::from("EOF");
    let mut counter = 0u32;
    while content.lines().any(|line| line == candidate) {
        counter += 1;
        candidate = format!("EOF_{counter}");
    }
    candidate
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::plan_module;
    use forge_spec::{FieldKind, FieldSpec, ModelSpec, ModuleSpec};

    fn sample_plan() -> ModulePlan {
        let spec = ModuleSpec::new("library_mgmt").with_model(
            ModelSpec::new("library.book")
                .with_field(FieldSpec::new("title", FieldKind::ShortText).required()),
        );
        plan_module(&spec).unwrap()
    }

    #[test]
    fn test_script_shape() {
        let script = render_provision_script(&sample_plan(), &ScriptOptions::default());

        assert!(script.starts_with("#!/bin/bash\n"));
        assert!(script.contains("MODULE_NAME=\"library_mgmt\""));
        assert!(script.contains(&format!("ADDONS_PATH=\"{DEFAULT_ADDONS_PATH}\"")));
        assert!(script.contains("sudo mkdir -p \"$MODULE_ROOT/static/description\""));
        assert!(script.contains("sudo tee \"$MODULE_ROOT/__manifest__.py\" > /dev/null <<'EOF'"));
        assert!(script.contains("sudo touch \"$MODULE_ROOT/static/description/icon.png\""));
        assert!(script.contains("sudo chown -R odoo:odoo \"$MODULE_ROOT\""));
        assert!(script.contains("sudo chmod -R 755 \"$MODULE_ROOT\""));
        assert!(script.contains("echo \"Module $MODULE_NAME provisioned"));
    }

    #[test]
    fn test_every_artifact_is_embedded_verbatim() {
        let plan = sample_plan();
        let script = render_provision_script(&plan, &ScriptOptions::default());

        for artifact in &plan.artifacts {
            if !artifact.content.is_empty() {
                assert!(
                    script.contains(&artifact.content),
                    "artifact {} not embedded verbatim",
                    artifact.path
                );
            }
        }
    }

    #[test]
    fn test_heredoc_delimiter_avoids_content_lines() {
        assert_eq!(heredoc_delimiter("hello\nworld\n"), "EOF");
        assert_eq!(heredoc_delimiter("hello\nEOF\nworld\n"), "EOF_1");
        assert_eq!(heredoc_delimiter("EOF\nEOF_1\n"), "EOF_2");
        // A line merely containing the delimiter does not terminate it.
        assert_eq!(heredoc_delimiter("say EOF loudly\n"), "EOF");
    }

    #[test]
    fn test_hostile_content_cannot_break_out() {
        let artifact = Artifact::new("models/evil.py", "start\nEOF\nend\n");
        let block = render_block(&artifact);

        assert!(block.contains("<<'EOF_1'\n"));
        assert!(block.ends_with("EOF_1\n"));
        // The embedded EOF line survives as content.
        assert!(block.contains("start\nEOF\nend\n"));
    }

    #[test]
    fn test_custom_addons_path() {
        let options = ScriptOptions::default().with_addons_path("/srv/odoo/addons");
        let script = render_provision_script(&sample_plan(), &options);
        assert!(script.contains("ADDONS_PATH=\"/srv/odoo/addons\""));
    }
}
