//! Free-text expense grammar. Each newline-separated line must read
//! `category amount` with an optional trailing `M` marking the entry as
//! recurring:
//!
//! ```text
//! line := category_text SP signed_integer [SP "M"]
//! ```
//!
//! One explicit tokenizer replaces the historical pile of slightly
//! different regexes; the whole line must be consumed, so trailing garbage
//! after the amount is rejected rather than silently ignored.

use crate::domain::normalize_name;
use crate::errors::{LedgerError, Result};

/// One validated line of user input, in message order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedEntry {
    pub category_name: String,
    pub amount: i64,
    /// Recurring entries are stored with the `Monthly` sentinel instead of
    /// a timestamp. The flag is per-line only and never carries forward to
    /// later lines.
    pub recurring: bool,
}

/// Parses a whole message. Any malformed line fails the entire parse, so a
/// batch is never partially applied.
pub fn parse(raw: &str) -> Result<Vec<ParsedEntry>> {
    raw.split('\n').map(parse_line).collect()
}

fn parse_line(line: &str) -> Result<ParsedEntry> {
    let mut tokens: Vec<&str> = line.split_whitespace().collect();

    let recurring = tokens
        .last()
        .is_some_and(|token| token.eq_ignore_ascii_case("m"));
    if recurring {
        tokens.pop();
    }

    let amount = tokens
        .pop()
        .and_then(parse_signed_integer)
        .ok_or_else(|| parse_error(line))?;

    if tokens.is_empty() {
        return Err(parse_error(line));
    }

    Ok(ParsedEntry {
        category_name: normalize_name(&tokens.join(" ")),
        amount,
        recurring,
    })
}

/// Accepts an optionally `-`-prefixed run of ASCII digits, nothing else.
pub(crate) fn parse_signed_integer(token: &str) -> Option<i64> {
    let digits = token.strip_prefix('-').unwrap_or(token);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    token.parse().ok()
}

fn parse_error(line: &str) -> LedgerError {
    LedgerError::Parse {
        line: line.trim().to_string(),
    }
}
