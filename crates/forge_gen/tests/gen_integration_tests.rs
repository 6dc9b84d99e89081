//! Integration tests for the generation engine.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use tempfile::tempdir;
use walkdir::WalkDir;

use forge_gen::{plan_module, GenError, Generator, ScriptOptions};
use forge_spec::{FieldKind, FieldSpec, ModelSpec, ModuleSpec};

/// The scenario module from the design notes: one book model with a
/// required title and a bounded page count.
fn library_spec() -> ModuleSpec {
    ModuleSpec::new("library_mgmt")
        .with_version("1.0")
        .with_category("Tools")
        .with_model(
            ModelSpec::new("library.book")
                .with_field(FieldSpec::new("title", FieldKind::ShortText).required())
                .with_field(FieldSpec::new("pages", FieldKind::Integer).with_bounds(0, 2000)),
        )
}

/// Collect every file below a root as relative-path → content.
fn tree_contents(root: &Path) -> BTreeMap<String, String> {
    let mut contents = BTreeMap::new();
    for entry in WalkDir::new(root).into_iter().filter_map(|e| e.ok()) {
        if entry.path().is_file() {
            let relative = entry
                .path()
                .strip_prefix(root)
                .unwrap()
                .to_string_lossy()
                .replace('\\', "/");
            contents.insert(relative, fs::read_to_string(entry.path()).unwrap());
        }
    }
    contents
}

/// Generation with an empty module name fails and creates no files.
#[test]
fn test_empty_module_name_is_a_blocking_precondition() {
    let temp = tempdir().unwrap();
    let result = Generator::new(ModuleSpec::new("")).generate(temp.path());

    assert!(matches!(result, Err(GenError::EmptyModuleName)));
    assert_eq!(
        fs::read_dir(temp.path()).unwrap().count(),
        0,
        "precondition failure must not leave partial output"
    );
}

/// An empty-named model contributes nothing, in both backends.
#[test]
fn test_empty_model_is_skipped_everywhere() {
    let spec = ModuleSpec::new("library_mgmt")
        .with_model(ModelSpec::new("library.book"))
        .with_model(ModelSpec::new(""));

    let plan = plan_module(&spec).unwrap();
    assert!(plan.find("models/.py").is_none());
    assert!(plan.find("views/_views.xml").is_none());

    let acl = &plan.find("security/ir.model.access.csv").unwrap().content;
    assert_eq!(acl.lines().count(), 2, "header plus exactly one row");

    let menu = &plan.find("views/menu_views.xml").unwrap().content;
    assert_eq!(menu.matches("parent=").count(), 1);

    let script = forge_gen::render_provision_script(&plan, &ScriptOptions::default());
    assert!(!script.contains("models/.py"));
    assert!(!script.contains("views/_views.xml"));
}

/// An empty-named field is referenced by no artifact at all.
#[test]
fn test_empty_field_is_skipped_everywhere() {
    let spec = ModuleSpec::new("library_mgmt").with_model(
        ModelSpec::new("library.book")
            .with_field(FieldSpec::new("title", FieldKind::ShortText))
            .with_field(FieldSpec::new("", FieldKind::Integer).with_bounds(1, 2)),
    );

    let plan = plan_module(&spec).unwrap();
    let source = &plan.find("models/book.py").unwrap().content;
    assert_eq!(source.matches("fields.").count(), 1);
    assert!(!source.contains("@api.constrains"));

    let views = &plan.find("views/book_views.xml").unwrap().content;
    assert!(!views.contains("<field name=\"\""));
}

/// Two runs over the same specification produce byte-identical trees.
#[test]
fn test_generation_is_idempotent() {
    let first = tempdir().unwrap();
    let second = tempdir().unwrap();

    Generator::new(library_spec()).generate(first.path()).unwrap();
    Generator::new(library_spec()).generate(second.path()).unwrap();

    let first_tree = tree_contents(first.path());
    let second_tree = tree_contents(second.path());
    assert!(!first_tree.is_empty());
    assert_eq!(first_tree, second_tree);
}

/// The direct-write tree matches the plan, and the script embeds every
/// artifact verbatim: the two backends cannot drift apart.
#[test]
fn test_cross_backend_equivalence() {
    let temp = tempdir().unwrap();
    let spec = library_spec();
    let plan = plan_module(&spec).unwrap();

    let generated = Generator::new(spec).generate(temp.path()).unwrap();
    let module_root = generated.module_root.unwrap();

    // Direct-write backend: tree equals plan, nothing extra.
    let tree = tree_contents(&module_root);
    assert_eq!(tree.len(), plan.artifacts.len());
    for artifact in &plan.artifacts {
        assert_eq!(
            tree.get(&artifact.path),
            Some(&artifact.content),
            "tree diverges from plan at {}",
            artifact.path
        );
    }

    // Script backend: same artifacts, wrapped.
    let script = fs::read_to_string(generated.script_path.unwrap()).unwrap();
    for artifact in &plan.artifacts {
        if artifact.content.is_empty() {
            assert!(script.contains(&format!("sudo touch \"$MODULE_ROOT/{}\"", artifact.path)));
        } else {
            assert!(
                script.contains(&artifact.content),
                "script omits or rewrites {}",
                artifact.path
            );
        }
    }
}

/// A numeric field at the default bounds emits no routine; shifted bounds
/// emit exactly one routine naming both bounds.
#[test]
fn test_validation_emission_rules() {
    let spec = ModuleSpec::new("warehouse").with_model(
        ModelSpec::new("warehouse.crate")
            .with_field(FieldSpec::new("volume", FieldKind::Integer).with_bounds(0, 100))
            .with_field(FieldSpec::new("weight", FieldKind::Integer).with_bounds(-5, 50)),
    );

    let plan = plan_module(&spec).unwrap();
    let source = &plan.find("models/crate.py").unwrap().content;

    assert_eq!(source.matches("@api.constrains").count(), 1);
    assert!(!source.contains("_check_volume_value"));
    assert!(source.contains("if record.weight < -5 or record.weight > 50:"));
    assert!(source.contains("raise ValidationError('Weight value must lie within [-5, 50]')"));
}

/// Nine usable fields: the list view references exactly the first six.
#[test]
fn test_list_view_cap() {
    let mut model = ModelSpec::new("wide.table");
    for name in ["a", "b", "c", "d", "e", "f", "g", "h", "i"] {
        model = model.with_field(FieldSpec::new(name, FieldKind::ShortText));
    }
    let plan = plan_module(&ModuleSpec::new("wide").with_model(model)).unwrap();

    let views = &plan.find("views/table_views.xml").unwrap().content;
    let list = &views[views.find("<list>").unwrap()..views.find("</list>").unwrap()];
    assert_eq!(list.matches("<field name=").count(), 6);
    assert!(list.contains("name=\"f\""));
    assert!(!list.contains("name=\"g\""));
}

/// Five usable fields: form groups of two and three.
#[test]
fn test_form_view_split() {
    let mut model = ModelSpec::new("wide.table");
    for name in ["a", "b", "c", "d", "e"] {
        model = model.with_field(FieldSpec::new(name, FieldKind::ShortText));
    }
    let plan = plan_module(&ModuleSpec::new("wide").with_model(model)).unwrap();

    let views = &plan.find("views/table_views.xml").unwrap().content;
    let form = &views[views.find("<form").unwrap()..views.find("</form>").unwrap()];
    let second_group = &form[form.rfind("<group>").unwrap()..];
    assert_eq!(form.matches("<field name=").count(), 5);
    assert_eq!(second_group.matches("<field name=").count(), 3);
    assert!(second_group.contains("name=\"c\""));
}

/// The full scenario from the design notes, end to end.
#[test]
fn test_library_scenario() {
    let temp = tempdir().unwrap();
    let generated = Generator::new(library_spec()).generate(temp.path()).unwrap();
    let module_root = generated.module_root.unwrap();

    let manifest = fs::read_to_string(module_root.join("__manifest__.py")).unwrap();
    assert!(manifest.contains("'depends': ['base'],"));
    assert!(manifest.contains("'name': 'library_mgmt',"));

    let source = fs::read_to_string(module_root.join("models/book.py")).unwrap();
    assert!(source.contains("class Book(models.Model):"));
    assert!(source.contains("title = fields.Char(string='Title', required=True)"));
    assert!(source.contains("pages = fields.Integer(string='Pages')"));
    assert!(source.contains("if record.pages < 0 or record.pages > 2000:"));

    let acl = fs::read_to_string(module_root.join("security/ir.model.access.csv")).unwrap();
    assert!(acl.contains("access_library_book,access_library_book,model_library_book,,1,1,1,1"));

    let menu = fs::read_to_string(module_root.join("views/menu_views.xml")).unwrap();
    assert!(menu.contains("library_mgmt_menu_root"));
    assert!(menu.contains("name=\"Book\""));
    assert!(menu.contains("action=\"action_library.book\""));
    assert!(menu.contains("library_mgmt_menu_app"));

    assert!(module_root.join("static/description/icon.png").exists());
    assert!(module_root.join("__init__.py").exists());
    assert_eq!(
        fs::read_to_string(module_root.join("models/__init__.py")).unwrap(),
        "from . import book\n"
    );
}

/// Artifact content containing a bare heredoc terminator still round-trips
/// through the script backend.
#[test]
fn test_script_survives_heredoc_terminator_in_content() {
    let spec = ModuleSpec::new("tricky").with_model(
        ModelSpec::new("tricky.note")
            .with_field(FieldSpec::new("body", FieldKind::LongText).with_label("EOF")),
    );

    let plan = plan_module(&spec).unwrap();
    let script = forge_gen::render_provision_script(&plan, &ScriptOptions::default());

    // The label lands inside a heredoc line, which is harmless; a block is
    // only rewritten when a full line equals its delimiter.
    let source = &plan.find("models/note.py").unwrap().content;
    assert!(script.contains(source.as_str()));
}

/// Colliding stems are rejected before any file is written.
#[test]
fn test_collision_preflight_blocks_generation() {
    let temp = tempdir().unwrap();
    let spec = ModuleSpec::new("shop")
        .with_model(ModelSpec::new("a.x"))
        .with_model(ModelSpec::new("b.x"));

    let result = Generator::new(spec).generate(temp.path());
    assert!(matches!(result, Err(GenError::DuplicateModelArtifact { .. })));
    assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 0);
}

/// The script-only backend produces no module tree, only the executable
/// script.
#[test]
fn test_script_only_generation() {
    let temp = tempdir().unwrap();
    let generated = Generator::new(library_spec())
        .generate_script(temp.path())
        .unwrap();

    assert!(generated.module_root.is_none());
    assert!(generated.script_path.unwrap().exists());
    assert!(!temp.path().join("library_mgmt").exists());
}
