use crate::types::Clause;

/// `column = value` from an update's set list. The value is the text as
/// typed (quotes removed) and is coerced against the column type like an
/// insert value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub column: String,
    pub value: String,
}

/// One parsed line of the command language.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    CreateTable {
        table: String,
        /// Raw `name:type` specs, validated by the catalog
        columns: Vec<String>,
    },
    DropTable {
        table: String,
    },
    ListTables,
    Info {
        table: String,
    },

    Insert {
        table: String,
        values: Vec<String>,
    },

    Select {
        table: String,
        filter: Option<Clause>,
    },

    Update {
        table: String,
        assignments: Vec<Assignment>,
        /// `None` updates every record
        filter: Option<Clause>,
    },

    Delete {
        table: String,
        filter: Clause,
    },
}
