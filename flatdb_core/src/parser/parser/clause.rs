use super::tokenizer::Token;
use crate::error::DbError;
use crate::parser::command::Assignment;
use crate::types::value::parse_literal;
use crate::types::Clause;

/// `col = value [and col = value ...]`, values parsed as literals
pub(super) fn parse_where(tokens: &[Token], usage_msg: &str) -> Result<Clause, DbError> {
    let mut clause = Clause::new();
    for (column, value) in parse_pairs(tokens, |t| t.is_keyword("and"), usage_msg)? {
        clause.insert(column, parse_literal(&value.text));
    }
    Ok(clause)
}

/// `col = value [, col = value ...]`, values kept as typed
pub(super) fn parse_assignments(
    tokens: &[Token],
    usage_msg: &str,
) -> Result<Vec<Assignment>, DbError> {
    Ok(parse_pairs(tokens, |t| t.is(","), usage_msg)?
        .into_iter()
        .map(|(column, value)| Assignment {
            column,
            value: value.text.clone(),
        })
        .collect())
}

fn parse_pairs<'a>(
    tokens: &'a [Token],
    is_separator: impl Fn(&Token) -> bool,
    usage_msg: &str,
) -> Result<Vec<(String, &'a Token)>, DbError> {
    let mut pairs: Vec<(String, &Token)> = Vec::new();
    let mut i = 0usize;
    loop {
        if i + 3 > tokens.len() {
            return Err(DbError::Parse(usage_msg.to_string()));
        }
        if !tokens[i + 1].is("=") || tokens[i].is_punct() || tokens[i + 2].is_punct() {
            return Err(DbError::Parse(usage_msg.to_string()));
        }
        let column = tokens[i].text.clone();
        if pairs.iter().any(|(c, _)| *c == column) {
            return Err(DbError::Parse(format!("Column '{column}' appears twice")));
        }
        pairs.push((column, &tokens[i + 2]));
        i += 3;
        if i == tokens.len() {
            return Ok(pairs);
        }
        if !is_separator(&tokens[i]) {
            return Err(DbError::Parse(usage_msg.to_string()));
        }
        i += 1;
    }
}
