//! Per-kind assignment rules.

use crate::coerce::Radix;

use super::report::SkipReason;
use super::slot::{FieldSlot, ListTarget, ScalarTarget};

/// What happened when values were written to one field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[must_use]
pub struct Assignment {
    stored: usize,
    skipped: Vec<SkipReason>,
}

impl Assignment {
    /// Number of values written to the field.
    #[must_use]
    pub const fn stored(&self) -> usize {
        self.stored
    }

    /// Values, or the whole argument, that were not applied.
    #[must_use]
    pub fn skipped(&self) -> &[SkipReason] {
        &self.skipped
    }

    /// Returns `true` when at least one value reached the field.
    #[must_use]
    pub const fn wrote(&self) -> bool {
        self.stored > 0
    }

    pub(crate) fn into_skipped(self) -> Vec<SkipReason> {
        self.skipped
    }

    fn skip(reason: SkipReason) -> Self {
        Self {
            stored: 0,
            skipped: vec![reason],
        }
    }
}

/// Writes `values` into `slot` following the rules for its kind.
pub(crate) fn assign(field: &'static str, slot: FieldSlot<'_>, values: &[String]) -> Assignment {
    match slot {
        FieldSlot::Text(text) => assign_text(field, text, values),
        FieldSlot::Scalar(target) => assign_scalar(field, target, values),
        FieldSlot::List(target) => assign_list(field, target, values),
        FieldSlot::Unsupported => Assignment::skip(SkipReason::UnsupportedKind { field }),
    }
}

/// One value is stored as is; several are each followed by a space.
fn assign_text(field: &'static str, text: &mut String, values: &[String]) -> Assignment {
    match values {
        [] => Assignment::skip(SkipReason::MissingValue { field }),
        [only] => {
            text.clone_from(only);
            Assignment {
                stored: 1,
                skipped: Vec::new(),
            }
        }
        many => {
            *text = many.iter().fold(String::new(), |mut joined, value| {
                joined.push_str(value);
                joined.push(' ');
                joined
            });
            Assignment {
                stored: many.len(),
                skipped: Vec::new(),
            }
        }
    }
}

/// Only the first value is read, as a base-10 literal.
fn assign_scalar(
    field: &'static str,
    target: &mut dyn ScalarTarget,
    values: &[String],
) -> Assignment {
    let Some(first) = values.first() else {
        return Assignment::skip(SkipReason::MissingValue { field });
    };
    match target.coercer().coerce(first, Radix::Decimal) {
        Ok(value) => {
            if target.store(value) {
                Assignment {
                    stored: 1,
                    skipped: Vec::new(),
                }
            } else {
                Assignment::skip(SkipReason::UnsupportedKind { field })
            }
        }
        Err(source) => Assignment::skip(SkipReason::Rejected {
            field,
            value: first.clone(),
            source,
        }),
    }
}

/// Every value is coerced on its own; failures are dropped individually.
fn assign_list(field: &'static str, target: &mut dyn ListTarget, values: &[String]) -> Assignment {
    let coercer = target.coercer();
    let mut outcome = Assignment::default();
    for raw in values {
        match coercer.coerce(raw, Radix::Auto) {
            Ok(value) => {
                if target.push(value) {
                    outcome.stored += 1;
                } else {
                    outcome.skipped.push(SkipReason::UnsupportedKind { field });
                }
            }
            Err(source) => outcome.skipped.push(SkipReason::Rejected {
                field,
                value: raw.clone(),
                source,
            }),
        }
    }
    outcome
}
