//! Model-source synthesizer.
//!
//! Emits one Python source file per usable model: the class declaration,
//! one field per usable FieldSpec in declaration order, and a trailing
//! block of `@api.constrains` routines for every field whose bounds
//! deviate from the default range.

use forge_spec::{BoundKind, FieldKind, FieldSpec, ModelSpec, ModuleSpec, ValidationRule};

use crate::naming;

/// Render the source file of one model.
pub fn render_model(model: &ModelSpec) -> String {
    let mut out = String::new();
    out.push_str("# -*- coding: utf-8 -*-\n\n");
    out.push_str("from odoo import models, fields, api\n");
    out.push_str("from odoo.exceptions import ValidationError\n\n");
    out.push_str(&format!(
        "class {}(models.Model):\n",
        naming::class_name(&model.name)
    ));
    out.push_str(&format!("    _name = '{}'\n", model.name));
    out.push_str(&format!(
        "    _description = '{}'\n",
        naming::display_title(&model.name)
    ));

    let fields: Vec<&FieldSpec> = model.usable_fields().collect();
    if !fields.is_empty() {
        out.push('\n');
        for field in &fields {
            out.push_str(&render_field(field));
        }
    }

    let rules = model.validation_rules();
    if !rules.is_empty() {
        out.push_str("\n    # Validations\n");
        for rule in &rules {
            out.push('\n');
            out.push_str(&render_rule(rule));
        }
    }

    out
}

/// Render the `models/__init__.py` index, one import per usable model in
/// declaration order.
pub fn render_models_init(spec: &ModuleSpec) -> String {
    let mut out = String::new();
    for model in spec.usable_models() {
        out.push_str(&format!("from . import {}\n", naming::file_stem(&model.name)));
    }
    out
}

/// Render the module root `__init__.py`.
pub fn render_module_init() -> String {
    "# -*- coding: utf-8 -*-\n\nfrom . import models\n".to_string()
}

fn render_field(field: &FieldSpec) -> String {
    let constructor = field.kind.odoo_constructor();
    let mut tail = format!("string='{}'", field.display_label());
    if field.required {
        tail.push_str(", required=True");
    }

    if field.kind == FieldKind::Selection {
        let options: Vec<_> = field.usable_options().collect();
        if options.is_empty() {
            return format!("    {} = fields.{constructor}([], {tail})\n", field.name);
        }
        let mut out = format!("    {} = fields.{constructor}([\n", field.name);
        for option in options {
            out.push_str(&format!("        ('{}', '{}'),\n", option.key, option.label));
        }
        out.push_str(&format!("    ], {tail})\n"));
        return out;
    }

    format!("    {} = fields.{constructor}({tail})\n", field.name)
}

fn render_rule(rule: &ValidationRule) -> String {
    let (suffix, accessor) = match rule.kind {
        BoundKind::Value => ("value", format!("record.{}", rule.field)),
        BoundKind::Length => ("length", format!("len(record.{})", rule.field)),
    };

    format!(
        "    @api.constrains('{field}')
    def _check_{field}_{suffix}(self):
        for record in self:
            if record.{field}:
                if {accessor} < {min} or {accessor} > {max}:
                    raise ValidationError('{message}')
",
        field = rule.field,
        suffix = suffix,
        accessor = accessor,
        min = rule.min,
        max = rule.max,
        message = rule.message(),
    )
}
