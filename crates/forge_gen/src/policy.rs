//! Behavioral policy constants.
//!
//! These values are contracts of the generated output, not incidental
//! implementation detail; changing one changes every emitted module.

/// The list view renders at most this many fields (a display-width cap).
pub const LIST_VIEW_FIELD_CAP: usize = 6;

/// Sequence number of the root menu item.
pub const ROOT_MENU_SEQUENCE: u32 = 10;

/// Sequence number of the application-launcher menu item.
pub const LAUNCHER_MENU_SEQUENCE: u32 = 1;

/// Addons directory the provisioning script targets by default.
pub const DEFAULT_ADDONS_PATH: &str = "/opt/odoo17/odoo17-custom-addons";

/// Ownership applied to the provisioned module tree.
pub const MODULE_OWNER: &str = "odoo:odoo";

/// Permissions applied to the provisioned module tree.
pub const MODULE_MODE: &str = "755";

/// Subdirectories of every generated module, in creation order.
pub const MODULE_DIRS: [&str; 4] = ["models", "security", "views", "static/description"];

/// Relative path of the manifest artifact.
pub const MANIFEST_FILE: &str = "__manifest__.py";

/// Relative path of the access-control artifact.
pub const ACCESS_FILE: &str = "security/ir.model.access.csv";

/// Relative path of the shared menu artifact.
pub const MENU_FILE: &str = "views/menu_views.xml";

/// Relative path of the module icon placeholder.
pub const ICON_FILE: &str = "static/description/icon.png";

/// Name stamped into the generated manifest boilerplate.
pub const GENERATOR_NAME: &str = "AddonForge";

/// Index at which the form view splits a model's fields into two groups:
/// the first group gets `fields[..split]`, the second `fields[split..]`.
pub fn form_split_point(field_count: usize) -> usize {
    field_count / 2
}
