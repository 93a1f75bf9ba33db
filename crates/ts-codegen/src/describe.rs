//! Schema snapshot to [`SchemaDescriptor`].
//!
//! Classifies every column, names every model and rejects naming
//! collisions. The returned descriptor is a fresh value; the snapshot is
//! not touched.

use crate::naming::{is_reserved_type_name, ModelNames};
use mysql_types::classify;
use std::collections::HashMap;
use tracing::{debug, info, warn};
use typegen_core::{
    ClassifierConfig, DatabaseSchema, FieldDescriptor, FullTextIndexDescriptor, ModelDescriptor,
    SchemaDescriptor, SchemaError, Table,
};

/// Build the descriptor for a whole schema.
///
/// Fails on the first ambiguous annotation, naming collision or field name
/// collision. Classification warnings stay attached to the affected fields
/// and are logged.
pub fn describe_schema(
    schema: &DatabaseSchema,
    config: &ClassifierConfig,
) -> Result<SchemaDescriptor, SchemaError> {
    let mut type_names: HashMap<String, &str> = HashMap::new();
    let mut accessors: HashMap<String, &str> = HashMap::new();
    let mut models = Vec::with_capacity(schema.tables.len());

    for table in &schema.tables {
        let names = ModelNames::from_table_name(&table.name);

        if is_reserved_type_name(&names.model) {
            return Err(SchemaError::ReservedTypeName {
                table: table.name.clone(),
                model_name: names.model,
            });
        }

        for name in names.type_names() {
            claim(&mut type_names, name, &table.name)?;
        }
        claim(&mut accessors, &names.accessor, &table.name)?;

        let model = describe_table(table, names, config)?;
        debug!(
            "Table '{}' -> model '{}' with {} fields",
            model.table_name,
            model.model_name,
            model.fields.len()
        );
        models.push(model);
    }

    let descriptor = SchemaDescriptor::new(schema.database_name.clone(), models);

    let mut warning_count = 0;
    for (table, column, warning) in descriptor.warnings() {
        warn!("{table}.{column}: {warning}");
        warning_count += 1;
    }
    info!(
        "Described {} models ({} warnings)",
        descriptor.models.len(),
        warning_count
    );

    Ok(descriptor)
}

fn claim<'a>(
    seen: &mut HashMap<String, &'a str>,
    name: &str,
    table: &'a str,
) -> Result<(), SchemaError> {
    match seen.get(name) {
        Some(first) if *first != table => Err(SchemaError::NamingCollision {
            model_name: name.to_string(),
            first_table: first.to_string(),
            second_table: table.to_string(),
        }),
        Some(_) => Ok(()),
        None => {
            seen.insert(name.to_string(), table);
            Ok(())
        }
    }
}

/// Build the descriptor for one table.
pub fn describe_table(
    table: &Table,
    names: ModelNames,
    config: &ClassifierConfig,
) -> Result<ModelDescriptor, SchemaError> {
    let mut seen: HashMap<String, &str> = HashMap::new();
    let mut fields: Vec<FieldDescriptor> = Vec::with_capacity(table.columns.len());

    for column in &table.columns {
        let field = classify(column, config)
            .map_err(|conflict| conflict.into_schema_error(&table.name, &column.name))?;

        if let Some(first) = seen.insert(field.field_name.clone(), &column.name) {
            return Err(SchemaError::FieldNameCollision {
                table: table.name.clone(),
                field_name: field.field_name,
                first_column: first.to_string(),
                second_column: column.name.clone(),
            });
        }
        fields.push(field);
    }

    let full_text_indexes = table
        .indexes
        .iter()
        .filter(|index| index.is_full_text())
        .map(|index| FullTextIndexDescriptor {
            name: index.name.clone(),
            fields: index
                .columns
                .iter()
                .filter_map(|column| {
                    fields
                        .iter()
                        .find(|f| &f.column_name == column)
                        .map(|f| f.field_name.clone())
                })
                .collect(),
        })
        .collect();

    Ok(ModelDescriptor {
        table_name: table.name.clone(),
        model_name: names.model,
        accessor_name: names.accessor,
        fields,
        full_text_indexes,
    })
}
