mod format;
mod json;
mod table;

pub(crate) use json::{output_count_json, output_models_json, output_records_json};
pub(crate) use table::{CostTableOptions, print_cost_table, print_models_table};
