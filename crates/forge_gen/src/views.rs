//! View synthesizer.
//!
//! One artifact per usable model: a form view splitting the fields into two
//! side-by-side groups, a list view capped at the first
//! [`LIST_VIEW_FIELD_CAP`](crate::policy::LIST_VIEW_FIELD_CAP) fields, and
//! the window action binding the model to both.

use forge_spec::{FieldSpec, ModelSpec};

use crate::naming;
use crate::policy::{form_split_point, LIST_VIEW_FIELD_CAP};

/// Render `views/<stem>_views.xml` for one model.
pub fn render_views(model: &ModelSpec) -> String {
    let fields: Vec<&FieldSpec> = model.usable_fields().collect();
    let (first_half, second_half) = fields.split_at(form_split_point(fields.len()));
    let list_fields = &fields[..fields.len().min(LIST_VIEW_FIELD_CAP)];

    format!(
        r#"<?xml version="1.0" encoding="utf-8"?>
<odoo>
    <record id="{form_id}" model="ir.ui.view">
        <field name="name">{name}.form</field>
        <field name="model">{name}</field>
        <field name="arch" type="xml">
            <form string="{title}">
                <sheet>
                    <group>
                        <group>
{first_group}                        </group>
                        <group>
{second_group}                        </group>
                    </group>
                </sheet>
            </form>
        </field>
    </record>

    <record id="{list_id}" model="ir.ui.view">
        <field name="name">{name}.list</field>
        <field name="model">{name}</field>
        <field name="arch" type="xml">
            <list>
{list_fields}            </list>
        </field>
    </record>

    <record id="{action_id}" model="ir.actions.act_window">
        <field name="name">{title}</field>
        <field name="res_model">{name}</field>
        <field name="view_mode">list,form</field>
    </record>
</odoo>
"#,
        form_id = naming::form_view_id(&model.name),
        list_id = naming::list_view_id(&model.name),
        action_id = naming::action_id(&model.name),
        name = model.name,
        title = naming::display_title(&model.name),
        first_group = field_refs(first_half, "                            "),
        second_group = field_refs(second_half, "                            "),
        list_fields = field_refs(list_fields, "                "),
    )
}

fn field_refs(fields: &[&FieldSpec], indent: &str) -> String {
    fields
        .iter()
        .map(|f| format!("{indent}<field name=\"{}\"/>\n", f.name))
        .collect()
}
