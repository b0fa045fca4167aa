use crate::storage::Schema;
use crate::types::Record;

pub const NO_RECORDS: &str = "No records found";

/// Formats a SELECT result as a tab-separated table in schema column order
pub fn format_select(schema: &Schema, rows: &[&Record]) -> String {
    if rows.is_empty() {
        return NO_RECORDS.to_string();
    }

    let header = schema
        .columns
        .iter()
        .map(|c| c.name.as_str())
        .collect::<Vec<_>>()
        .join("\t");

    let row_lines = rows
        .iter()
        .map(|row| {
            schema
                .columns
                .iter()
                .map(|c| row.get(&c.name).map(|v| v.to_string()).unwrap_or_default())
                .collect::<Vec<_>>()
                .join("\t")
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!("{}\n{}", header, row_lines)
}

/// One `- name` line per table
pub fn format_table_list<'a>(names: impl Iterator<Item = &'a str>) -> String {
    let lines: Vec<String> = names.map(|n| format!("- {n}")).collect();
    if lines.is_empty() {
        "No tables".to_string()
    } else {
        lines.join("\n")
    }
}
