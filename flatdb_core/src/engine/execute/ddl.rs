use tracing::{info, warn};

use crate::error::DbError;
use crate::storage::{Column, StorageEngine};

use super::load_records;
use crate::engine::format::format_table_list;

/// What `info` reports about a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableInfo {
    pub name: String,
    pub columns: Vec<Column>,
    pub record_count: usize,
}

impl TableInfo {
    pub fn describe(&self) -> String {
        let cols = self
            .columns
            .iter()
            .map(|c| format!("{}:{}", c.name, c.dtype))
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "Table: {}\nColumns: {}\nRecords: {}",
            self.name, cols, self.record_count
        )
    }
}

pub fn table_info(storage: &dyn StorageEngine, table: &str) -> Result<TableInfo, DbError> {
    let catalog = storage.load_catalog()?;
    let schema = catalog.schema(table)?;
    let records = load_records(storage, schema)?;
    Ok(TableInfo {
        name: schema.name.clone(),
        columns: schema.columns.clone(),
        record_count: records.len(),
    })
}

pub(super) fn handle_create(
    table: &str,
    specs: &[String],
    storage: &mut dyn StorageEngine,
) -> Result<String, DbError> {
    let mut catalog = storage.load_catalog()?;
    let described = catalog.create_table(table, specs)?.describe();
    // A stale document left under this name must not leak into the new table.
    storage.save_table(table, &[])?;
    if let Err(e) = storage.save_catalog(&catalog) {
        if let Err(cleanup) = storage.drop_table(table) {
            warn!(table, error = %cleanup, "could not remove records of uncreated table");
        }
        return Err(e);
    }
    Ok(format!(
        "Table \"{}\" created with columns: {}",
        table, described
    ))
}

pub(super) fn handle_drop(table: &str, storage: &mut dyn StorageEngine) -> Result<String, DbError> {
    let mut catalog = storage.load_catalog()?;
    catalog.drop_table(table)?;
    storage.save_catalog(&catalog)?;
    // The catalog no longer lists the table, so leftover records are unreachable.
    match storage.drop_table(table) {
        Ok(()) => info!(table, "table records removed"),
        Err(e) => warn!(table, error = %e, "table dropped but its records were not removed"),
    }
    Ok(format!("Table \"{}\" dropped", table))
}

pub(super) fn handle_list(storage: &dyn StorageEngine) -> Result<String, DbError> {
    let catalog = storage.load_catalog()?;
    Ok(format_table_list(catalog.list_tables()))
}

pub(super) fn handle_info(table: &str, storage: &dyn StorageEngine) -> Result<String, DbError> {
    table_info(storage, table).map(|i| i.describe())
}
