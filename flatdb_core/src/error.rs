use thiserror::Error;

/// Every failure a core operation can report.
///
/// None of these are fatal: the operation that returned one left the catalog,
/// the record collections and the files on disk exactly as they were.
#[derive(Debug, Error)]
pub enum DbError {
    #[error("Table \"{0}\" already exists")]
    DuplicateTable(String),

    #[error("Table \"{0}\" does not exist")]
    UnknownTable(String),

    #[error("Invalid table name '{0}'. Use letters, digits, '_' or '-'")]
    InvalidTableName(String),

    #[error("Bad column definition '{0}'. Use name:type like age:int")]
    MalformedColumnSpec(String),

    #[error("Unknown type '{0}'. Use int|str|bool")]
    UnknownType(String),

    #[error("Expected {expected} values but got {got}")]
    ArityMismatch { expected: usize, got: usize },

    #[error("Invalid value '{value}' for column '{column}' of type {dtype}")]
    InvalidValue {
        column: String,
        dtype: String,
        value: String,
    },

    #[error("Unknown column '{column}' in table \"{table}\"")]
    UnknownColumn { table: String, column: String },

    #[error("Column '{0}' cannot be updated")]
    ReadOnlyColumn(String),

    #[error("{0}")]
    Parse(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl From<std::io::Error> for DbError {
    fn from(e: std::io::Error) -> Self {
        DbError::Storage(e.to_string())
    }
}

impl From<serde_json::Error> for DbError {
    fn from(e: serde_json::Error) -> Self {
        DbError::Storage(format!("malformed JSON document: {e}"))
    }
}

