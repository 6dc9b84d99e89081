//! Menu synthesizer.
//!
//! One shared artifact for the whole module: a root menu item, one child
//! per usable model pointing at its window action, and an
//! application-launcher item pointing at the first model's action.

use forge_spec::ModuleSpec;

use crate::naming;
use crate::policy::{ICON_FILE, LAUNCHER_MENU_SEQUENCE, ROOT_MENU_SEQUENCE};

/// Render `views/menu_views.xml`.
///
/// Child sequence numbers are 1-based positions in the full model list, so
/// a skipped empty-named model still consumes its position. The launcher is
/// emitted whenever the module has at least one model and always references
/// the first model's action id, usable or not.
pub fn render_menu(spec: &ModuleSpec) -> String {
    let mut out = String::from("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<odoo>\n");
    out.push_str(&format!(
        "    <menuitem id=\"{root_id}\" name=\"{title}\" sequence=\"{seq}\"/>\n",
        root_id = naming::root_menu_id(&spec.name),
        title = naming::module_title(&spec.name),
        seq = ROOT_MENU_SEQUENCE,
    ));

    for (position, model) in spec.models.iter().enumerate() {
        if !model.is_usable() {
            continue;
        }
        out.push_str(&format!(
            "\n    <menuitem id=\"{menu_id}\"\n        \
             name=\"{name}\"\n        \
             parent=\"{parent}\"\n        \
             action=\"{action}\"\n        \
             sequence=\"{seq}\"/>\n",
            menu_id = naming::menu_id(&model.name),
            name = naming::display_title(&model.name),
            parent = naming::root_menu_id(&spec.name),
            action = naming::action_id(&model.name),
            seq = position + 1,
        ));
    }

    if let Some(first) = spec.models.first() {
        out.push_str(&format!(
            "\n    <menuitem id=\"{launcher_id}\"\n        \
             name=\"{title}\"\n        \
             action=\"{action}\"\n        \
             sequence=\"{seq}\"\n        \
             web_icon=\"{module},{icon}\"/>\n",
            launcher_id = naming::launcher_menu_id(&spec.name),
            title = naming::module_title(&spec.name),
            action = naming::action_id(&first.name),
            seq = LAUNCHER_MENU_SEQUENCE,
            module = spec.name,
            icon = ICON_FILE,
        ));
    }

    out.push_str("</odoo>\n");
    out
}
