use crate::constants::STATUS_WORD_BITS;
use crate::error::{Error, Result};

/// Parse a status word the way the command line accepts it.
///
/// Accepts decimal with optional `+` sign and `_` between digits, and
/// `0x`/`0o`/`0b` prefixed literals. Surrounding whitespace is ignored.
/// Negative values and values wider than 16 bits are rejected.
pub fn parse_status_word(input: &str) -> Result<u16> {
    let trimmed = input.trim();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);

    if unsigned.starts_with('-') {
        return Err(Error::invalid_number(input, "status words cannot be negative"));
    }

    let (radix, digits) = split_radix(unsigned);
    let digits = strip_separators(input, digits)?;

    let value = u64::from_str_radix(&digits, radix)
        .map_err(|e| Error::invalid_number(input, e.to_string()))?;

    u16::try_from(value).map_err(|_| {
        Error::invalid_number(
            input,
            format!("{value} does not fit in a {STATUS_WORD_BITS}-bit status word"),
        )
    })
}

fn split_radix(literal: &str) -> (u32, &str) {
    let lower = literal.get(..2).map(str::to_ascii_lowercase);
    match lower.as_deref() {
        Some("0x") => (16, &literal[2..]),
        Some("0o") => (8, &literal[2..]),
        Some("0b") => (2, &literal[2..]),
        _ => (10, literal),
    }
}

/// Drop `_` separators, which are only allowed between two digits.
fn strip_separators(input: &str, digits: &str) -> Result<String> {
    if digits.is_empty() {
        return Err(Error::invalid_number(input, "no digits"));
    }
    if digits.starts_with(['+', '-']) {
        return Err(Error::invalid_number(input, "unexpected sign"));
    }
    if digits.starts_with('_') || digits.ends_with('_') || digits.contains("__") {
        return Err(Error::invalid_number(input, "misplaced '_' separator"));
    }
    Ok(digits.replace('_', ""))
}
