mod ddl;
mod dml;

use std::collections::HashSet;

use crate::error::DbError;
use crate::parser::command::Command;
use crate::storage::{Schema, StorageEngine, ID_COLUMN};
use crate::types::value::Value;
use crate::types::Record;

pub use ddl::{table_info, TableInfo};

/// Executes a parsed command against the storage engine.
///
/// The catalog and the affected table are read fresh for every command and
/// written back only after the operation succeeded.
pub fn execute_command(cmd: Command, storage: &mut dyn StorageEngine) -> Result<String, DbError> {
    match cmd {
        Command::CreateTable { table, columns } => ddl::handle_create(&table, &columns, storage),
        Command::DropTable { table } => ddl::handle_drop(&table, storage),
        Command::ListTables => ddl::handle_list(storage),
        Command::Info { table } => ddl::handle_info(&table, storage),
        Command::Insert { table, values } => dml::handle_insert(&table, &values, storage),
        Command::Select { table, filter } => dml::handle_select(&table, filter.as_ref(), storage),
        Command::Update {
            table,
            assignments,
            filter,
        } => dml::handle_update(&table, &assignments, &filter.unwrap_or_default(), storage),
        Command::Delete { table, filter } => dml::handle_delete(&table, &filter, storage),
    }
}

/// Loads a table's records and checks each against the schema.
pub fn load_records(storage: &dyn StorageEngine, schema: &Schema) -> Result<Vec<Record>, DbError> {
    let records = storage.load_table(&schema.name)?;
    let mut ids = HashSet::new();
    for record in &records {
        schema.check_record(record)?;
        if let Some(Value::Int(id)) = record.get(ID_COLUMN) {
            if !ids.insert(*id) {
                return Err(DbError::Storage(format!(
                    "table \"{}\" holds ID {} twice",
                    schema.name, id
                )));
            }
        }
    }
    Ok(records)
}
