use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::DbError;
use crate::types::datatype::DataType;

/// A stored cell. Serialized untagged so a record document reads as plain JSON
/// (`{"ID": 1, "name": "Bob", "active": true}`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Int(i64),
    Str(String),
    Bool(bool),
}

impl Value {
    pub fn dtype(&self) -> DataType {
        match self {
            Value::Int(_) => DataType::Int,
            Value::Str(_) => DataType::Str,
            Value::Bool(_) => DataType::Bool,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{n}"),
            Value::Str(s) => f.write_str(s),
            Value::Bool(b) => write!(f, "{b}"),
        }
    }
}

/// Converts one raw insert token into a value of the column's type.
///
/// Only `int` can fail. `bool` accepts `true`/`1` (any case) as true and
/// everything else as false.
pub fn coerce_value(column: &str, dtype: DataType, raw: &str) -> Result<Value, DbError> {
    match dtype {
        DataType::Int => raw
            .trim()
            .parse::<i64>()
            .map(Value::Int)
            .map_err(|_| DbError::InvalidValue {
                column: column.to_string(),
                dtype: dtype.to_string(),
                value: raw.to_string(),
            }),
        DataType::Str => Ok(Value::Str(raw.to_string())),
        DataType::Bool => {
            let lower = raw.to_lowercase();
            Ok(Value::Bool(lower == "true" || lower == "1"))
        }
    }
}

/// Parses the right-hand side of a `where` comparison.
///
/// Surrounding quotes are stripped, `true`/`false` (any case) become booleans,
/// a run of ASCII digits becomes an integer, anything else stays a string.
pub fn parse_literal(token: &str) -> Value {
    let s = token.trim_matches(|c: char| c == '"' || c == '\'');
    if s.eq_ignore_ascii_case("true") {
        return Value::Bool(true);
    }
    if s.eq_ignore_ascii_case("false") {
        return Value::Bool(false);
    }
    if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) {
        if let Ok(n) = s.parse::<i64>() {
            return Value::Int(n);
        }
    }
    Value::Str(s.to_string())
}
