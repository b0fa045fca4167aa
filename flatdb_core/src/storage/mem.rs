use std::collections::HashMap;

use crate::error::DbError;
use crate::storage::engine::StorageEngine;
use crate::storage::Catalog;
use crate::types::Record;

/// In-memory storage implementation using HashMap
#[derive(Debug, Default)]
pub struct MemStorage {
    catalog: Catalog,
    tables: HashMap<String, Vec<Record>>,
}

impl MemStorage {
    /// Creates a new empty in-memory storage
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageEngine for MemStorage {
    fn load_catalog(&self) -> Result<Catalog, DbError> {
        Ok(self.catalog.clone())
    }

    fn save_catalog(&mut self, catalog: &Catalog) -> Result<(), DbError> {
        self.catalog = catalog.clone();
        Ok(())
    }

    fn load_table(&self, table: &str) -> Result<Vec<Record>, DbError> {
        Ok(self.tables.get(table).cloned().unwrap_or_default())
    }

    fn save_table(&mut self, table: &str, records: &[Record]) -> Result<(), DbError> {
        self.tables.insert(table.to_string(), records.to_vec());
        Ok(())
    }

    fn drop_table(&mut self, table: &str) -> Result<(), DbError> {
        self.tables.remove(table);
        Ok(())
    }
}
