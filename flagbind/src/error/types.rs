//! Primary error enum for strict binding.

use thiserror::Error;

use super::aggregate::AggregatedErrors;
use crate::bind::{SkipReason, SkipRecord};

/// Errors returned by [`initialize_strict`](crate::initialize_strict).
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BindError {
    /// A single argument, or one of its values, was not applied.
    #[error("argument '{name}' was not bound: {reason}")]
    Skipped {
        /// Flag name without prefix.
        name: String,
        /// Why the argument was skipped.
        #[source]
        reason: SkipReason,
    },

    /// Several arguments were not applied.
    #[error("{} arguments were not bound:\n{}", .0.len(), .0)]
    Aggregate(Box<AggregatedErrors>),
}

impl From<SkipRecord> for BindError {
    fn from(record: SkipRecord) -> Self {
        let (name, reason) = record.into_parts();
        Self::Skipped { name, reason }
    }
}
