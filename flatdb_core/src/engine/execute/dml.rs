use tracing::info;

use crate::engine::format::format_select;
use crate::engine::records;
use crate::error::DbError;
use crate::parser::command::Assignment;
use crate::storage::StorageEngine;
use crate::types::Clause;

use super::load_records;

pub(super) fn handle_insert(
    table: &str,
    values: &[String],
    storage: &mut dyn StorageEngine,
) -> Result<String, DbError> {
    let catalog = storage.load_catalog()?;
    let schema = catalog.schema(table)?;
    let mut rows = load_records(storage, schema)?;

    let id = records::insert(schema, values, &mut rows)?;
    storage.save_table(table, &rows)?;
    info!(table, id, "record inserted");
    Ok(format!("Inserted record with ID={} into \"{}\"", id, table))
}

pub(super) fn handle_select(
    table: &str,
    filter: Option<&Clause>,
    storage: &dyn StorageEngine,
) -> Result<String, DbError> {
    let catalog = storage.load_catalog()?;
    let schema = catalog.schema(table)?;
    let rows = load_records(storage, schema)?;
    let selected = records::select(&rows, filter);
    Ok(format_select(schema, &selected))
}

pub(super) fn handle_update(
    table: &str,
    assignments: &[Assignment],
    filter: &Clause,
    storage: &mut dyn StorageEngine,
) -> Result<String, DbError> {
    let catalog = storage.load_catalog()?;
    let schema = catalog.schema(table)?;
    let mut rows = load_records(storage, schema)?;

    let updated = records::update(schema, &mut rows, assignments, filter)?;
    if updated > 0 {
        storage.save_table(table, &rows)?;
    }
    info!(table, updated, "records updated");
    Ok(format!("{} record(s) updated", updated))
}

pub(super) fn handle_delete(
    table: &str,
    filter: &Clause,
    storage: &mut dyn StorageEngine,
) -> Result<String, DbError> {
    let catalog = storage.load_catalog()?;
    let schema = catalog.schema(table)?;
    let mut rows = load_records(storage, schema)?;

    let deleted = records::delete(&mut rows, filter);
    if deleted > 0 {
        storage.save_table(table, &rows)?;
    }
    info!(table, deleted, "records deleted");
    Ok(format!("{} record(s) deleted", deleted))
}
