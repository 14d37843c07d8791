//! Container for the skip errors of one strict bind.

use std::{error::Error, fmt};

use super::BindError;

/// Every [`BindError`] produced by a single strict bind, in argument order.
///
/// Built by [`BindError::from_records`] when more than one argument was
/// skipped.
#[derive(Debug)]
pub struct AggregatedErrors(Vec<BindError>);

impl AggregatedErrors {
    pub(super) const fn new(errors: Vec<BindError>) -> Self {
        Self(errors)
    }

    /// Iterate over the contained errors.
    #[must_use = "iterators should be consumed to inspect errors"]
    pub fn iter(&self) -> std::slice::Iter<'_, BindError> {
        self.0.iter()
    }

    /// Number of errors in the aggregation.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for AggregatedErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, e) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}: {e}", i + 1)?;
        }
        Ok(())
    }
}

impl Error for AggregatedErrors {}
