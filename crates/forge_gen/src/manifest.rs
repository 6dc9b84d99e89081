//! Manifest synthesizer.

use forge_spec::ModuleSpec;

use crate::naming;
use crate::policy::{ACCESS_FILE, GENERATOR_NAME, MENU_FILE};

/// Data files the manifest loads, in load order: the ACL file first, then
/// one view file per usable model, then the menu file.
pub fn data_files(spec: &ModuleSpec) -> Vec<String> {
    let mut files = vec![ACCESS_FILE.to_string()];
    for model in spec.usable_models() {
        files.push(format!("views/{}", naming::views_file_name(&model.name)));
    }
    files.push(MENU_FILE.to_string());
    files
}

/// Render the `__manifest__.py` descriptor.
///
/// Name, version and category are emitted verbatim from the specification;
/// summary and description are fixed boilerplate; the dependency list is
/// fixed to the base platform.
pub fn render_manifest(spec: &ModuleSpec) -> String {
    let mut data = String::new();
    for file in data_files(spec) {
        data.push_str(&format!("        '{file}',\n"));
    }

    format!(
        "\
# -*- coding: utf-8 -*-
{{
    'name': '{name}',
    'version': '{version}',
    'category': '{category}',
    'summary': 'Generated by {generator}',
    'description': 'This module was automatically generated by {generator}.',
    'depends': ['base'],
    'data': [
{data}    ],
    'installable': True,
    'application': True,
}}
",
        name = spec.name,
        version = spec.version,
        category = spec.category,
        generator = GENERATOR_NAME,
        data = data,
    )
}
