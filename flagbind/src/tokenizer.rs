//! Splits invocation tokens into [`RawArgument`] records.
//!
//! A token that starts with the configured prefix opens a flag. Its name is
//! either the text before the first `=` or the first whitespace-separated
//! field of the remainder; anything after becomes the flag's first values.
//! Tokens without the prefix extend whichever flag was opened last. Repeated
//! flags accumulate into a single record.

use std::collections::HashMap;

use crate::{RawArgument, Settings};

/// Outcome of reading a single prefixed token.
#[derive(Debug, PartialEq, Eq)]
enum FlagToken<'a> {
    /// Nothing followed the prefix.
    Blank,
    /// `=` was present but nothing preceded it.
    Unnamed,
    Named { name: &'a str, values: Vec<&'a str> },
}

fn read_flag(body: &str) -> FlagToken<'_> {
    if let Some((name, value)) = body.split_once('=') {
        if name.is_empty() {
            return FlagToken::Unnamed;
        }
        return FlagToken::Named {
            name,
            values: vec![value],
        };
    }
    let mut fields = body.split_whitespace();
    match fields.next() {
        Some(name) => FlagToken::Named {
            name,
            values: fields.collect(),
        },
        None => FlagToken::Blank,
    }
}

/// Records keyed by name, kept in first-seen order.
#[derive(Default)]
struct Records {
    index: HashMap<String, usize>,
    entries: Vec<RawArgument>,
}

impl Records {
    /// Appends `values` to `name`, creating the record when absent.
    fn merge(&mut self, name: &str, values: Vec<&str>) -> usize {
        if let Some(&slot) = self.index.get(name) {
            if let Some(record) = self.entries.get_mut(slot) {
                record.extend(values);
            }
            return slot;
        }
        let slot = self.entries.len();
        self.entries.push(RawArgument::new(name, values));
        self.index.insert(name.to_owned(), slot);
        slot
    }

    fn push_value(&mut self, slot: usize, value: &str) {
        if let Some(record) = self.entries.get_mut(slot) {
            record.push(value);
        }
    }

    fn finish(self) -> Vec<RawArgument> {
        self.entries.into_iter().map(RawArgument::finalize).collect()
    }
}

/// Groups the settings' tokens into one record per distinct flag name.
///
/// Records come back in the order their flags were first seen, although
/// callers should not rely on any particular order. Empty values are removed
/// from every record before it is returned.
///
/// ```rust
/// use flagbind::{RawArgument, Settings, tokenize};
///
/// let settings = Settings::from_tokens("demo", "--", ["--count=1", "--count", "2", "3"]);
/// assert_eq!(tokenize(&settings), vec![RawArgument::new("count", ["1", "2", "3"])]);
/// ```
#[must_use]
pub fn tokenize(settings: &Settings) -> Vec<RawArgument> {
    let prefix = settings.prefix();
    let mut records = Records::default();
    let mut current: Option<usize> = None;

    for token in settings.arguments() {
        let Some(body) = token.strip_prefix(prefix) else {
            match current {
                Some(slot) => records.push_value(slot, token),
                None => tracing::trace!(token = %token, "dropping value before any flag"),
            }
            continue;
        };
        match read_flag(body) {
            FlagToken::Blank => {
                tracing::trace!(token = %token, "ignoring bare prefix");
            }
            FlagToken::Unnamed => {
                tracing::trace!(token = %token, "ignoring flag without a name");
                current = None;
            }
            FlagToken::Named { name, values } => {
                current = Some(records.merge(name, values));
            }
        }
    }

    records.finish()
}
