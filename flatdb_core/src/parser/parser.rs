mod clause;
mod tokenizer;

use crate::error::DbError;
use crate::parser::command::Command;

use clause::{parse_assignments, parse_where};
use tokenizer::{tokenize, Token};

const CREATE_USAGE: &str = "Usage: create_table <table> <col:type> ...";
const DROP_USAGE: &str = "Usage: drop_table <table>";
const INFO_USAGE: &str = "Usage: info <table>";
const INSERT_USAGE: &str = "Usage: insert into <table> values (<v1>, <v2>, ...)";
const SELECT_USAGE: &str = "Usage: select from <table> [where <col> = <value> [and ...]]";
const UPDATE_USAGE: &str =
    "Usage: update <table> set <col> = <value> [, ...] [where <col> = <value> [and ...]]";
const DELETE_USAGE: &str = "Usage: delete from <table> where <col> = <value> [and ...]";

fn usage(msg: &str) -> DbError {
    DbError::Parse(msg.to_string())
}

pub fn parse(input: &str) -> Result<Command, DbError> {
    let tokens = tokenize(input)?;
    let Some(first) = tokens.first() else {
        return Err(usage("Empty command"));
    };
    if first.quoted {
        return Err(DbError::Parse(format!("Unknown command '{}'", first.text)));
    }

    let keyword = first.text.to_lowercase();

    match keyword.as_str() {
        "create_table" => parse_create(&tokens),
        "drop_table" => parse_single_table(&tokens, DROP_USAGE)
            .map(|table| Command::DropTable { table }),
        "list_tables" => {
            if tokens.len() != 1 {
                return Err(usage("Usage: list_tables"));
            }
            Ok(Command::ListTables)
        }
        "info" => parse_single_table(&tokens, INFO_USAGE).map(|table| Command::Info { table }),
        "insert" => parse_insert(&tokens),
        "select" => parse_select(&tokens),
        "update" => parse_update(&tokens),
        "delete" => parse_delete(&tokens),
        _ => Err(DbError::Parse(format!("Unknown command '{}'", first.text))),
    }
}

fn parse_single_table(tokens: &[Token], usage_msg: &str) -> Result<String, DbError> {
    if tokens.len() != 2 || tokens[1].is_punct() {
        return Err(usage(usage_msg));
    }
    Ok(tokens[1].text.clone())
}

fn parse_create(tokens: &[Token]) -> Result<Command, DbError> {
    // create_table <table> <col>:<type> <col>:<type> ...
    if tokens.len() < 3 || tokens.iter().skip(1).any(Token::is_punct) {
        return Err(usage(CREATE_USAGE));
    }
    Ok(Command::CreateTable {
        table: tokens[1].text.clone(),
        columns: tokens[2..].iter().map(|t| t.text.clone()).collect(),
    })
}

fn parse_insert(tokens: &[Token]) -> Result<Command, DbError> {
    // insert into <table> values (<v1>, <v2>, ...)
    if tokens.len() < 6
        || !tokens[1].is_keyword("into")
        || tokens[2].is_punct()
        || !tokens[3].is_keyword("values")
        || !tokens[4].is("(")
        || !tokens[tokens.len() - 1].is(")")
    {
        return Err(usage(INSERT_USAGE));
    }
    let table = tokens[2].text.clone();
    let mut values: Vec<String> = Vec::new();
    let mut i = 5usize;
    let end = tokens.len() - 1;

    while i < end {
        if tokens[i].is_punct() {
            return Err(usage("Bad INSERT values. Empty value between commas."));
        }
        values.push(tokens[i].text.clone());
        i += 1;
        if i < end {
            if !tokens[i].is(",") {
                return Err(usage("Bad INSERT values. Values must be comma-separated; quote values with spaces."));
            }
            i += 1;
            if i >= end {
                return Err(usage("Bad INSERT values. Trailing comma is not allowed."));
            }
        }
    }

    Ok(Command::Insert { table, values })
}

fn parse_select(tokens: &[Token]) -> Result<Command, DbError> {
    // select from <table> [where ...]
    if tokens.len() < 3 || !tokens[1].is_keyword("from") || tokens[2].is_punct() {
        return Err(usage(SELECT_USAGE));
    }
    let table = tokens[2].text.clone();
    let filter = match tokens.get(3) {
        None => None,
        Some(t) if t.is_keyword("where") => Some(parse_where(&tokens[4..], SELECT_USAGE)?),
        Some(_) => return Err(usage(SELECT_USAGE)),
    };
    Ok(Command::Select { table, filter })
}

fn parse_update(tokens: &[Token]) -> Result<Command, DbError> {
    // update <table> set <col> = <val> [, <col> = <val> ...] [where ...]
    if tokens.len() < 6 || tokens[1].is_punct() || !tokens[2].is_keyword("set") {
        return Err(usage(UPDATE_USAGE));
    }
    let table = tokens[1].text.clone();

    let where_idx = tokens.iter().position(|t| t.is_keyword("where"));
    let set_end = where_idx.unwrap_or(tokens.len());
    if set_end <= 3 {
        return Err(usage("UPDATE requires at least one assignment after SET"));
    }
    let assignments = parse_assignments(&tokens[3..set_end], UPDATE_USAGE)?;
    let filter = match where_idx {
        Some(idx) => Some(parse_where(&tokens[idx + 1..], UPDATE_USAGE)?),
        None => None,
    };

    Ok(Command::Update {
        table,
        assignments,
        filter,
    })
}

fn parse_delete(tokens: &[Token]) -> Result<Command, DbError> {
    // delete from <table> where ...
    if tokens.len() < 4
        || !tokens[1].is_keyword("from")
        || tokens[2].is_punct()
        || !tokens[3].is_keyword("where")
    {
        return Err(usage(DELETE_USAGE));
    }
    let filter = parse_where(&tokens[4..], DELETE_USAGE)?;
    Ok(Command::Delete {
        table: tokens[2].text.clone(),
        filter,
    })
}
