//! Records of arguments the binder could not apply.

use thiserror::Error;

use crate::BindError;
use crate::coerce::CoerceError;

/// Why an argument, or one of its values, was not applied.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum SkipReason {
    /// No field matches the flag name.
    #[error("no field matches this flag")]
    Unmapped,
    /// The matching field has no coercion path.
    #[error("field '{field}' has a type that cannot be bound")]
    UnsupportedKind {
        /// Rust name of the matched field.
        field: &'static str,
    },
    /// The flag carried no values for a single-valued field.
    #[error("field '{field}' needs a value but none was given")]
    MissingValue {
        /// Rust name of the matched field.
        field: &'static str,
    },
    /// A value failed coercion and was dropped.
    #[error("field '{field}' rejected {value:?}: {source}")]
    Rejected {
        /// Rust name of the matched field.
        field: &'static str,
        /// Raw value that was dropped.
        value: String,
        /// Coercion failure.
        #[source]
        source: CoerceError,
    },
}

/// A skipped argument together with the flag name that carried it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkipRecord {
    name: String,
    reason: SkipReason,
}

impl SkipRecord {
    /// Pairs a flag name with a skip reason.
    #[must_use]
    pub fn new(name: impl Into<String>, reason: SkipReason) -> Self {
        Self {
            name: name.into(),
            reason,
        }
    }

    /// Flag name as it appeared on the command line, without prefix.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Why the argument was skipped.
    #[must_use]
    pub const fn reason(&self) -> &SkipReason {
        &self.reason
    }

    /// Splits the record into its name and reason.
    #[must_use]
    pub fn into_parts(self) -> (String, SkipReason) {
        (self.name, self.reason)
    }
}

/// Summary of one [`bind`](crate::bind) pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BindReport {
    bound: usize,
    skipped: Vec<SkipRecord>,
}

impl BindReport {
    /// Number of arguments that wrote to a field.
    ///
    /// An argument counts once even if only some of its list values were
    /// accepted.
    #[must_use]
    pub const fn bound(&self) -> usize {
        self.bound
    }

    /// Everything that was not applied, in argument order.
    #[must_use]
    pub fn skipped(&self) -> &[SkipRecord] {
        &self.skipped
    }

    /// Returns `true` when nothing was skipped.
    #[must_use]
    pub const fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }

    /// Converts the report into a result for strict callers.
    ///
    /// # Errors
    ///
    /// Returns the skip records as a [`BindError`] when any exist.
    pub fn into_result(self) -> Result<Self, BindError> {
        let Self { bound, skipped } = self;
        BindError::from_records(skipped).map_or_else(
            || {
                Ok(Self {
                    bound,
                    skipped: Vec::new(),
                })
            },
            Err,
        )
    }

    pub(crate) const fn record_bound(&mut self) {
        self.bound += 1;
    }

    pub(crate) fn record_skip(&mut self, name: &str, reason: SkipReason) {
        self.skipped.push(SkipRecord::new(name, reason));
    }
}
