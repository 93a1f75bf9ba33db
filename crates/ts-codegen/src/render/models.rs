//! `models.ts`: one shape cluster per model.

use super::interface;
use crate::naming::ModelNames;
use typegen_core::{ModelDescriptor, SchemaDescriptor};

pub fn render_models(descriptor: &SchemaDescriptor) -> String {
    let mut out = String::new();
    for model in &descriptor.models {
        out.push('\n');
        render_model(&mut out, model);
    }
    out
}

fn render_model(out: &mut String, model: &ModelDescriptor) {
    let names = ModelNames::from_model_name(model.model_name.clone());

    out.push_str(&format!("/** Row of table `{}`. */\n", model.table_name));
    let row: Vec<_> = model
        .fields
        .iter()
        .map(|f| (f.field_name.as_str(), false, f.value_type()))
        .collect();
    interface(out, &names.model, &row);
    out.push('\n');

    out.push_str("/** Row returned by `SELECT *`. Invisible columns are present only when selected by name. */\n");
    let select_all: Vec<_> = model
        .fields
        .iter()
        .map(|f| (f.field_name.as_str(), !f.in_select_all(), f.value_type()))
        .collect();
    interface(out, &names.omitted_by_select_all, &select_all);
    out.push('\n');

    let primary_key: Vec<_> = model
        .primary_key_fields()
        .map(|f| (f.field_name.as_str(), false, f.language_type.clone()))
        .collect();
    if primary_key.is_empty() {
        out.push_str(&format!("export type {} = never;\n", names.primary_key));
    } else {
        interface(out, &names.primary_key, &primary_key);
    }
    out.push('\n');

    let create: Vec<_> = model
        .fields
        .iter()
        .filter(|f| f.in_create_data())
        .map(|f| (f.field_name.as_str(), f.optional_on_create(), f.value_type()))
        .collect();
    interface(out, &names.create_data, &create);
    out.push('\n');

    let update: Vec<_> = model
        .fields
        .iter()
        .filter(|f| f.in_update_data())
        .map(|f| (f.field_name.as_str(), true, f.value_type()))
        .collect();
    interface(out, &names.update_data, &update);
    out.push('\n');

    let mut variants = Vec::new();
    if !primary_key.is_empty() {
        variants.push(names.primary_key.clone());
    }
    variants.extend(
        model
            .unique_fields()
            .map(|f| format!("{{ {}: {} }}", f.field_name, f.language_type)),
    );
    if variants.is_empty() {
        out.push_str(&format!("export type {} = never;\n", names.find_unique_params));
    } else {
        out.push_str(&format!("export type {} =\n", names.find_unique_params));
        let last = variants.len() - 1;
        for (idx, variant) in variants.iter().enumerate() {
            let end = if idx == last { ";" } else { "" };
            out.push_str(&format!("  | {variant}{end}\n"));
        }
    }
}
