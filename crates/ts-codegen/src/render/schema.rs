//! `schema.ts`: the shipped schema descriptor and cast-type lookup.

use crate::error::Result;
use typegen_core::{CastType, SchemaDescriptor};

pub fn render_schema(descriptor: &SchemaDescriptor) -> Result<String> {
    let cast_types = CastType::ALL
        .iter()
        .map(|cast| format!("'{cast}'"))
        .collect::<Vec<_>>()
        .join(" | ");
    let json = descriptor.to_json_pretty()?;

    let mut out = String::new();
    out.push('\n');
    out.push_str(&format!("export type CastType = {cast_types};\n"));
    out.push('\n');
    out.push_str(&format!("export const schema = {json} as const;\n"));
    out.push('\n');
    out.push_str("export type Schema = typeof schema;\n");
    out.push('\n');
    out.push_str("const castMap: Readonly<Record<string, CastType>> = schema.castMap;\n");
    out.push('\n');
    out.push_str("/** Cast type of `table.column`, or `undefined` for unknown columns. */\n");
    out.push_str(
        "export function castTypeOf(table: string, column: string): CastType | undefined {\n",
    );
    out.push_str("  return castMap[`${table}.${column}`];\n");
    out.push_str("}\n");
    Ok(out)
}
