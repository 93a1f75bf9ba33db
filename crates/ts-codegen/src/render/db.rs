//! `db.ts`: the typed access surface, one accessor per model.

use super::GeneratedFileRole;
use crate::naming::ModelNames;
use typegen_core::SchemaDescriptor;

const MODEL_ACCESSOR: &str = "\
/** Access to one table, typed by its generated shapes. */
export interface ModelAccessor<Row, SelectAllRow, CreateData, UpdateData, PrimaryKey, FindUniqueParams> {
  readonly tableName: string;
  findUnique(params: FindUniqueParams): Promise<SelectAllRow | null>;
  findMany(where?: Partial<Row>): Promise<SelectAllRow[]>;
  create(data: CreateData): Promise<PrimaryKey>;
  update(params: FindUniqueParams, data: UpdateData): Promise<void>;
  delete(params: FindUniqueParams): Promise<void>;
}
";

pub fn render_db(descriptor: &SchemaDescriptor) -> String {
    let mut out = String::new();
    out.push('\n');
    if !descriptor.models.is_empty() {
        out.push_str(&format!(
            "import type * as models from '{}';\n",
            GeneratedFileRole::Models.module_path()
        ));
    }
    out.push_str(&format!(
        "import type {{ Schema }} from '{}';\n",
        GeneratedFileRole::Schema.module_path()
    ));
    out.push('\n');
    out.push_str(MODEL_ACCESSOR);
    out.push('\n');

    out.push_str("export interface Db {\n");
    out.push_str("  readonly schema: Schema;\n");
    for model in &descriptor.models {
        let names = ModelNames::from_model_name(model.model_name.clone());
        out.push_str(&format!("  readonly {}: ModelAccessor<\n", model.accessor_name));
        let params = [
            &names.model,
            &names.omitted_by_select_all,
            &names.create_data,
            &names.update_data,
            &names.primary_key,
            &names.find_unique_params,
        ];
        let last = params.len() - 1;
        for (idx, param) in params.iter().enumerate() {
            let sep = if idx == last { "" } else { "," };
            out.push_str(&format!("    models.{param}{sep}\n"));
        }
        out.push_str("  >;\n");
    }
    out.push_str("}\n");
    out
}
