//! Identifier and naming derivations.
//!
//! Every cross-referenced string in the generated artifacts — file stems,
//! class names, record ids, action ids, menu ids, ACL row ids — is derived
//! here and nowhere else, so every synthesizer that needs "the file for
//! model X" computes byte-identical strings. All derivations are pure
//! functions of the input string.

/// Last dot-segment of a dotted model name; used as the file stem and the
/// access-rule suffix. `library.book` → `book`.
pub fn file_stem(model_name: &str) -> &str {
    model_name.rsplit('.').next().unwrap_or(model_name)
}

/// Generated class name: last dot-segment, title-cased, underscores
/// removed. `library.book_copy` → `BookCopy`.
pub fn class_name(model_name: &str) -> String {
    title_case(file_stem(model_name)).replace('_', "")
}

/// Record id prefix: the dotted name with dots replaced by underscores.
/// `library.book` → `library_book`.
pub fn record_prefix(model_name: &str) -> String {
    model_name.replace('.', "_")
}

/// Window action id: `action_` + the dotted name. Unlike record ids the
/// dots are kept; generated artifacts reference actions in this exact form.
pub fn action_id(model_name: &str) -> String {
    format!("action_{model_name}")
}

/// Display title of a model: last dot-segment, underscores replaced by
/// spaces, title-cased. `library.book_copy` → `Book Copy`.
pub fn display_title(model_name: &str) -> String {
    title_case(&file_stem(model_name).replace('_', " "))
}

/// Display title of a module: underscores replaced by spaces, title-cased.
pub fn module_title(module_name: &str) -> String {
    title_case(&module_name.replace('_', " "))
}

/// Form view record id.
pub fn form_view_id(model_name: &str) -> String {
    format!("{}_view_form", record_prefix(model_name))
}

/// List view record id.
pub fn list_view_id(model_name: &str) -> String {
    format!("{}_view_list", record_prefix(model_name))
}

/// Menu item id of a model.
pub fn menu_id(model_name: &str) -> String {
    format!("{}_menu", record_prefix(model_name))
}

/// ACL row id of a model.
pub fn access_id(model_name: &str) -> String {
    format!("access_{}", record_prefix(model_name))
}

/// External reference to the model record, as used in the ACL file.
pub fn model_ref(model_name: &str) -> String {
    format!("model_{}", record_prefix(model_name))
}

/// Root menu item id of a module.
pub fn root_menu_id(module_name: &str) -> String {
    format!("{module_name}_menu_root")
}

/// Application-launcher menu item id of a module.
pub fn launcher_menu_id(module_name: &str) -> String {
    format!("{module_name}_menu_app")
}

/// File name of a model's view artifact.
pub fn views_file_name(model_name: &str) -> String {
    format!("{}_views.xml", file_stem(model_name))
}

/// File name of a model's source artifact.
pub fn model_file_name(model_name: &str) -> String {
    format!("{}.py", file_stem(model_name))
}

/// File name of the provisioning script emitted next to the module tree.
pub fn script_file_name(module_name: &str) -> String {
    format!("create_{module_name}_module.sh")
}

/// Title-case a string: uppercase every letter that does not follow
/// another letter, lowercase the rest. Non-letters pass through unchanged.
fn title_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut prev_is_alpha = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_is_alpha {
                result.extend(c.to_lowercase());
            } else {
                result.extend(c.to_uppercase());
            }
            prev_is_alpha = true;
        } else {
            result.push(c);
            prev_is_alpha = false;
        }
    }
    result
}
