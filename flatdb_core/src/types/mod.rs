pub mod datatype;
pub mod value;

use std::collections::BTreeMap;

use value::Value;

/// One row: column name to value. Always carries an `ID` entry.
pub type Record = BTreeMap<String, Value>;

/// Column name to exact value. A where-clause matches when every pair does;
/// a coerced set-clause writes every pair.
pub type Clause = BTreeMap<String, Value>;
