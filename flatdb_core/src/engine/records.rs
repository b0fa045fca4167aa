//! Record store: insert, select, update and delete over one table's
//! in-memory record collection.
//!
//! These functions never touch storage. The caller loads the collection,
//! runs one of them, and saves the collection back when it changed.

use crate::error::DbError;
use crate::parser::command::Assignment;
use crate::storage::{Schema, ID_COLUMN};
use crate::types::value::{coerce_value, Value};
use crate::types::{Clause, Record};

/// True when every `(column, value)` pair of the clause equals the record's
/// stored value. No coercion: `Int(1)` never equals `Str("1")`. An empty
/// clause matches everything.
pub fn matches(record: &Record, clause: &Clause) -> bool {
    clause
        .iter()
        .all(|(col, expected)| record.get(col) == Some(expected))
}

/// `1` for an empty collection, otherwise one past the highest ID.
pub fn next_id(records: &[Record]) -> Result<i64, DbError> {
    let max = records
        .iter()
        .filter_map(|r| r.get(ID_COLUMN).and_then(Value::as_int))
        .max();
    match max {
        None => Ok(1),
        Some(max) => max
            .checked_add(1)
            .ok_or_else(|| DbError::Storage(format!("no ID left after {max}"))),
    }
}

/// Coerces `raw_values` positionally against the non-ID columns and appends
/// the new record. Returns the assigned ID.
///
/// Nothing is appended unless every value coerces.
pub fn insert(
    schema: &Schema,
    raw_values: &[String],
    records: &mut Vec<Record>,
) -> Result<i64, DbError> {
    let columns = schema.data_columns();
    if raw_values.len() != columns.len() {
        return Err(DbError::ArityMismatch {
            expected: columns.len(),
            got: raw_values.len(),
        });
    }

    let mut record = Record::new();
    for (col, raw) in columns.iter().zip(raw_values) {
        record.insert(col.name.clone(), coerce_value(&col.name, col.dtype, raw)?);
    }

    let id = next_id(records)?;
    record.insert(ID_COLUMN.to_string(), Value::Int(id));
    records.push(record);
    Ok(id)
}

/// Matching records in their original order.
pub fn select<'a>(records: &'a [Record], filter: Option<&Clause>) -> Vec<&'a Record> {
    match filter {
        Some(clause) => records.iter().filter(|r| matches(r, clause)).collect(),
        None => records.iter().collect(),
    }
}

/// Coerces set-list values against the schema exactly like insert values.
/// `ID` may not be assigned.
pub fn coerce_assignments(schema: &Schema, set: &[Assignment]) -> Result<Clause, DbError> {
    let mut out = Clause::new();
    for a in set {
        if a.column == ID_COLUMN {
            return Err(DbError::ReadOnlyColumn(a.column.clone()));
        }
        let col = schema.column(&a.column).ok_or_else(|| DbError::UnknownColumn {
            table: schema.name.clone(),
            column: a.column.clone(),
        })?;
        out.insert(a.column.clone(), coerce_value(&a.column, col.dtype, &a.value)?);
    }
    Ok(out)
}

/// Writes the set list into every matching record and returns how many
/// records matched. Assignments are validated before any record changes.
pub fn update(
    schema: &Schema,
    records: &mut [Record],
    set: &[Assignment],
    filter: &Clause,
) -> Result<usize, DbError> {
    let assignments = coerce_assignments(schema, set)?;
    let mut updated = 0;
    for record in records.iter_mut().filter(|r| matches(r, filter)) {
        for (col, value) in &assignments {
            record.insert(col.clone(), value.clone());
        }
        updated += 1;
    }
    Ok(updated)
}

/// Removes every matching record, keeping survivors in order. Returns how
/// many were removed.
pub fn delete(records: &mut Vec<Record>, filter: &Clause) -> usize {
    let before = records.len();
    records.retain(|r| !matches(r, filter));
    before - records.len()
}
