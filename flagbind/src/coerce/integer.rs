//! Integer literal parsing with optional base detection.
//!
//! [`Radix::Auto`] accepts the literal forms `0x`/`0X` (hexadecimal),
//! `0o`/`0O` and a bare leading `0` (octal), `0b`/`0B` (binary) and plain
//! decimal. Underscores may separate digits, or follow a base prefix, in that
//! mode only. Values are parsed into 128-bit integers and narrowed by the
//! caller.

/// How integer literals are read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Radix {
    /// Base-10 digits only. Used for scalar fields.
    #[default]
    Decimal,
    /// Base inferred from the literal's prefix. Used for list elements.
    Auto,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum IntError {
    Syntax,
    Range,
}

/// Parses an optionally signed literal.
pub(crate) fn parse_signed(raw: &str, radix: Radix) -> Result<i128, IntError> {
    let (negative, body) = match raw.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, raw.strip_prefix('+').unwrap_or(raw)),
    };
    let magnitude = parse_unsigned(body, radix)?;
    if negative {
        0_i128
            .checked_sub_unsigned(magnitude)
            .ok_or(IntError::Range)
    } else {
        i128::try_from(magnitude).map_err(|_| IntError::Range)
    }
}

/// Parses an unsigned literal. Signs are rejected.
pub(crate) fn parse_unsigned(raw: &str, radix: Radix) -> Result<u128, IntError> {
    match radix {
        Radix::Decimal => digits(raw, 10),
        Radix::Auto => {
            if !underscores_ok(raw) {
                return Err(IntError::Syntax);
            }
            let cleaned: String = raw.chars().filter(|&c| c != '_').collect();
            let (base, rest) = split_base(&cleaned);
            if base == 8 && rest.is_empty() && cleaned == "0" {
                return Ok(0);
            }
            digits(rest, base)
        }
    }
}

/// Detects the base prefix and returns the remaining digits.
fn split_base(literal: &str) -> (u32, &str) {
    let Some(tail) = literal.strip_prefix('0') else {
        return (10, literal);
    };
    let mut chars = tail.chars();
    let marker = chars.next().map(|c| c.to_ascii_lowercase());
    let has_digits = !chars.as_str().is_empty();
    match marker {
        Some('x') if has_digits => (16, chars.as_str()),
        Some('o') if has_digits => (8, chars.as_str()),
        Some('b') if has_digits => (2, chars.as_str()),
        _ => (8, tail),
    }
}

fn digits(text: &str, base: u32) -> Result<u128, IntError> {
    if text.is_empty() || !text.chars().all(|c| c.is_digit(base)) {
        return Err(IntError::Syntax);
    }
    u128::from_str_radix(text, base).map_err(|_| IntError::Range)
}

/// Checks that underscores only ever sit between digits or after a base
/// prefix.
fn underscores_ok(literal: &str) -> bool {
    #[derive(Clone, Copy, PartialEq)]
    enum Seen {
        Start,
        Digit,
        Underscore,
        Other,
    }

    let mut seen = Seen::Start;
    let mut rest = literal;
    let mut hex = false;
    if let Some(tail) = literal.strip_prefix('0') {
        let mut chars = tail.chars();
        if let Some(marker) = chars.next().map(|c| c.to_ascii_lowercase())
            && matches!(marker, 'b' | 'o' | 'x')
        {
            rest = chars.as_str();
            seen = Seen::Digit;
            hex = marker == 'x';
        }
    }
    for c in rest.chars() {
        if c.is_ascii_digit() || (hex && c.is_ascii_hexdigit()) {
            seen = Seen::Digit;
            continue;
        }
        if c == '_' {
            if seen != Seen::Digit {
                return false;
            }
            seen = Seen::Underscore;
            continue;
        }
        if seen == Seen::Underscore {
            return false;
        }
        seen = Seen::Other;
    }
    seen != Seen::Underscore
}
