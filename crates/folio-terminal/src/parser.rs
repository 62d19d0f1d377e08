//! Input-line parsing: tokenizer and invocation builder.
//!
//! Splits on whitespace with double-quoted tokens kept whole, then
//! classifies tokens into the command name, positional arguments, and
//! `--long[=value]` / `-short` flags. No escaping, pipes, or redirection.

use std::collections::BTreeMap;

use folio_types::error::{FolioError, Result};

/// Value carried by a parsed flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlagValue {
    /// Bare flag (`--verbose`, `-v`, or `--key=` with an empty value).
    Bool(bool),
    /// Valued long flag (`--key=value`).
    Text(String),
}

/// A parsed command invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Command name as typed (compared case-insensitively at dispatch).
    pub name: String,
    /// Positional arguments, quotes stripped.
    pub args: Vec<String>,
    /// Flags keyed by name.
    pub flags: BTreeMap<String, FlagValue>,
}

/// One token plus whether it began with a double quote.
///
/// Quoted tokens are never classified as flags, even if their content
/// starts with a dash.
struct Token {
    text: String,
    quoted: bool,
}

fn tokenize(input: &str) -> Result<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut chars = input.chars().peekable();

    while let Some(&c) = chars.peek() {
        if c.is_whitespace() {
            chars.next();
            continue;
        }

        let mut text = String::new();
        let quoted = c == '"';
        let mut in_quotes = false;

        while let Some(&c) = chars.peek() {
            if c == '"' {
                chars.next();
                in_quotes = !in_quotes;
            } else if c.is_whitespace() && !in_quotes {
                break;
            } else {
                text.push(c);
                chars.next();
            }
        }

        if in_quotes {
            return Err(FolioError::Parse("unterminated double quote".into()));
        }
        tokens.push(Token { text, quoted });
    }

    Ok(tokens)
}

/// Parse one raw input line into an [`Invocation`].
///
/// The first token is the command name; the rest are classified. The
/// result is validated: an empty name (e.g. the input `""`) is a parse
/// error rather than an unknown command.
pub fn parse(input: &str) -> Result<Invocation> {
    let mut tokens = tokenize(input)?.into_iter();

    let name = match tokens.next() {
        Some(t) => t.text,
        None => return Err(FolioError::Parse("empty input".into())),
    };
    if name.is_empty() {
        return Err(FolioError::Parse("command name must not be empty".into()));
    }

    let mut args = Vec::new();
    let mut flags = BTreeMap::new();

    for token in tokens {
        if !token.quoted && let Some(body) = token.text.strip_prefix("--") {
            match body.split_once('=') {
                Some((key, value)) if !value.is_empty() => {
                    flags.insert(key.to_string(), FlagValue::Text(value.to_string()));
                },
                Some((key, _)) => {
                    flags.insert(key.to_string(), FlagValue::Bool(true));
                },
                None => {
                    flags.insert(body.to_string(), FlagValue::Bool(true));
                },
            }
        } else if !token.quoted && let Some(short) = token.text.strip_prefix('-') {
            flags.insert(short.to_string(), FlagValue::Bool(true));
        } else {
            args.push(token.text);
        }
    }

    Ok(Invocation { name, args, flags })
}
