use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::DbError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DataType {
    #[serde(rename = "int")]
    Int,
    #[serde(rename = "str")]
    Str,
    #[serde(rename = "bool")]
    Bool,
}

impl DataType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DataType::Int => "int",
            DataType::Str => "str",
            DataType::Bool => "bool",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Type names are matched exactly: `int`, `str`, `bool`.
pub fn parse_datatype(s: &str) -> Result<DataType, DbError> {
    match s {
        "int" => Ok(DataType::Int),
        "str" => Ok(DataType::Str),
        "bool" => Ok(DataType::Bool),
        other => Err(DbError::UnknownType(other.to_string())),
    }
}
