use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::DbError;
use crate::storage::schema::{Column, Schema, ID_COLUMN};
use crate::types::datatype::parse_datatype;

/// Manages table schemas (metadata catalog).
///
/// Tables are kept in creation order; that order is what `list_tables`
/// yields and what the catalog document stores.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    tables: Vec<Schema>,
}

impl Catalog {
    /// Creates a new empty catalog
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Checks if a table exists in the catalog
    pub fn exists(&self, table: &str) -> bool {
        self.tables.iter().any(|s| s.name == table)
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// Registers a table from `name:type` column specs and prepends `ID:int`.
    ///
    /// All specs are validated before anything is registered, so on error the
    /// catalog is untouched.
    pub fn create_table(&mut self, table: &str, specs: &[String]) -> Result<&Schema, DbError> {
        if self.exists(table) {
            return Err(DbError::DuplicateTable(table.to_string()));
        }
        validate_table_name(table)?;

        let mut columns = vec![Column::id()];
        let mut seen: HashSet<&str> = HashSet::from([ID_COLUMN]);
        for spec in specs {
            let (name, dtype) = spec
                .split_once(':')
                .ok_or_else(|| DbError::MalformedColumnSpec(spec.clone()))?;
            let name = name.trim();
            if name.is_empty() || !seen.insert(name) {
                return Err(DbError::MalformedColumnSpec(spec.clone()));
            }
            columns.push(Column::new(name, parse_datatype(dtype.trim())?));
        }

        self.tables.push(Schema::new(table, columns));
        let schema = &self.tables[self.tables.len() - 1];
        info!(table, columns = %schema.describe(), "table created");
        Ok(schema)
    }

    /// Removes a table's schema and returns it
    pub fn drop_table(&mut self, table: &str) -> Result<Schema, DbError> {
        let pos = self
            .tables
            .iter()
            .position(|s| s.name == table)
            .ok_or_else(|| DbError::UnknownTable(table.to_string()))?;
        info!(table, "table dropped");
        Ok(self.tables.remove(pos))
    }

    /// Table names in creation order
    pub fn list_tables(&self) -> impl Iterator<Item = &str> + '_ {
        self.tables.iter().map(|s| s.name.as_str())
    }

    /// Retrieves the schema for a given table
    pub fn schema(&self, table: &str) -> Result<&Schema, DbError> {
        self.tables
            .iter()
            .find(|s| s.name == table)
            .ok_or_else(|| DbError::UnknownTable(table.to_string()))
    }

    /// Checks a catalog read back from storage.
    pub fn validate(&self) -> Result<(), DbError> {
        let mut names: HashSet<&str> = HashSet::new();
        for schema in &self.tables {
            validate_table_name(&schema.name)
                .map_err(|e| DbError::Storage(format!("catalog entry rejected: {e}")))?;
            if !names.insert(schema.name.as_str()) {
                return Err(DbError::Storage(format!(
                    "catalog lists table \"{}\" twice",
                    schema.name
                )));
            }
            if schema.columns.first() != Some(&Column::id()) {
                return Err(DbError::Storage(format!(
                    "table \"{}\" does not start with ID:int",
                    schema.name
                )));
            }
            let mut cols: HashSet<&str> = HashSet::new();
            if let Some(dup) = schema.columns.iter().find(|c| !cols.insert(c.name.as_str())) {
                return Err(DbError::Storage(format!(
                    "table \"{}\" declares column '{}' twice",
                    schema.name, dup.name
                )));
            }
        }
        Ok(())
    }
}

// Table names double as file names.
fn validate_table_name(table: &str) -> Result<(), DbError> {
    let ok = !table.is_empty()
        && table
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if ok {
        Ok(())
    } else {
        Err(DbError::InvalidTableName(table.to_string()))
    }
}
