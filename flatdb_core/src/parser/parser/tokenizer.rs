use crate::error::DbError;

/// A token and whether it came from a quoted string. Quoted tokens are always
/// values: they never act as keywords or punctuation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct Token {
    pub text: String,
    pub quoted: bool,
}

impl Token {
    fn bare(text: String) -> Self {
        Self {
            text,
            quoted: false,
        }
    }

    /// Unquoted punctuation such as `,` or `=`
    pub fn is(&self, punct: &str) -> bool {
        !self.quoted && self.text == punct
    }

    /// Unquoted keyword, any case
    pub fn is_keyword(&self, keyword: &str) -> bool {
        !self.quoted && self.text.eq_ignore_ascii_case(keyword)
    }

    pub fn is_punct(&self) -> bool {
        !self.quoted && matches!(self.text.as_str(), "=" | "," | "(" | ")")
    }
}

/// Splits a command line into tokens.
///
/// Whitespace separates tokens. `"..."` and `'...'` group text (quotes are
/// dropped; `\"`, `\'` and `\\` escape inside them). `,`, `(`, `)` and `=`
/// are tokens of their own outside quotes.
pub(super) fn tokenize(input: &str) -> Result<Vec<Token>, DbError> {
    let mut tokens: Vec<Token> = Vec::new();
    let mut current = String::new();
    let mut quote: Option<char> = None;
    let mut just_closed_quote = false;

    let mut it = input.chars().peekable();

    while let Some(ch) = it.next() {
        match ch {
            '"' | '\'' if quote.is_none() || quote == Some(ch) => {
                if just_closed_quote {
                    return Err(DbError::Parse(
                        "Unexpected quote after closing quote. Add whitespace between tokens."
                            .to_string(),
                    ));
                }

                if quote.is_none() {
                    if !current.is_empty() {
                        return Err(DbError::Parse(
                            "A quote cannot start in the middle of a token. Add whitespace before the quote."
                                .to_string(),
                        ));
                    }
                    quote = Some(ch);
                } else {
                    quote = None;
                    just_closed_quote = true;
                }
            }

            '\\' if quote.is_some() => {
                match it.peek().copied() {
                    Some(c @ ('"' | '\'' | '\\')) => {
                        it.next();
                        current.push(c);
                    }
                    _ => {
                        return Err(DbError::Parse(
                            "Invalid escape sequence in quotes. Use \\\" or \\' for a quote or \\\\ for a backslash."
                                .to_string(),
                        ));
                    }
                }
            }

            c if c.is_whitespace() && quote.is_none() => {
                if just_closed_quote {
                    tokens.push(Token {
                        text: std::mem::take(&mut current),
                        quoted: true,
                    });
                    just_closed_quote = false;
                    continue;
                }

                if !current.is_empty() {
                    tokens.push(Token::bare(std::mem::take(&mut current)));
                }
            }

            ',' | '(' | ')' | '=' if quote.is_none() => {
                if just_closed_quote {
                    tokens.push(Token {
                        text: std::mem::take(&mut current),
                        quoted: true,
                    });
                    just_closed_quote = false;
                } else if !current.is_empty() {
                    tokens.push(Token::bare(std::mem::take(&mut current)));
                }
                tokens.push(Token::bare(ch.to_string()));
            }

            _ => {
                if just_closed_quote {
                    return Err(DbError::Parse(
                        "Characters found immediately after a closing quote. Add whitespace after the quoted string."
                            .to_string(),
                    ));
                }
                current.push(ch);
            }
        }
    }

    if quote.is_some() {
        return Err(DbError::Parse("Unclosed quote in input".to_string()));
    }

    if just_closed_quote {
        tokens.push(Token {
            text: current,
            quoted: true,
        });
    } else if !current.is_empty() {
        tokens.push(Token::bare(current));
    }

    Ok(tokens)
}
