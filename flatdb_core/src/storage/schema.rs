use serde::{Deserialize, Serialize};

use crate::error::DbError;
use crate::types::datatype::DataType;
use crate::types::Record;

pub const ID_COLUMN: &str = "ID";

/// Represents a single column in a table schema
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
    #[serde(rename = "type")]
    pub dtype: DataType,
}

impl Column {
    pub fn new(name: impl Into<String>, dtype: DataType) -> Self {
        Self {
            name: name.into(),
            dtype,
        }
    }

    pub fn id() -> Self {
        Self::new(ID_COLUMN, DataType::Int)
    }
}

/// A named table and its ordered columns. The first column is always `ID:int`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    pub name: String,
    pub columns: Vec<Column>,
}

impl Schema {
    pub fn new(name: impl Into<String>, columns: Vec<Column>) -> Self {
        Self {
            name: name.into(),
            columns,
        }
    }

    /// Columns the caller supplies on insert (everything after `ID`)
    pub fn data_columns(&self) -> &[Column] {
        self.columns.get(1..).unwrap_or(&[])
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// `ID:int, name:str, ...`
    pub fn describe(&self) -> String {
        self.columns
            .iter()
            .map(|c| format!("{}:{}", c.name, c.dtype))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Checks a loaded record against the schema: same key set, matching types.
    pub fn check_record(&self, record: &Record) -> Result<(), DbError> {
        if record.len() != self.columns.len() {
            return Err(DbError::Storage(format!(
                "record in table \"{}\" has {} fields, expected {}",
                self.name,
                record.len(),
                self.columns.len()
            )));
        }
        for col in &self.columns {
            match record.get(&col.name) {
                Some(v) if v.dtype() == col.dtype => {}
                Some(v) => {
                    return Err(DbError::Storage(format!(
                        "column '{}' in table \"{}\" holds '{}', expected {}",
                        col.name, self.name, v, col.dtype
                    )));
                }
                None => {
                    return Err(DbError::Storage(format!(
                        "record in table \"{}\" is missing column '{}'",
                        self.name, col.name
                    )));
                }
            }
        }
        match record.get(ID_COLUMN).and_then(|v| v.as_int()) {
            Some(id) if id >= 0 => Ok(()),
            _ => Err(DbError::Storage(format!(
                "record in table \"{}\" has a negative ID",
                self.name
            ))),
        }
    }
}
