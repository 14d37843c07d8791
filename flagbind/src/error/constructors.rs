//! Building a `BindError` from the skips of a bind pass.

use super::{AggregatedErrors, BindError};
use crate::SkipRecord;

impl BindError {
    /// Turns skip records into one error.
    ///
    /// Returns `None` for no records, [`Self::Skipped`] for exactly one, and
    /// [`Self::Aggregate`] keeping every record in order otherwise.
    ///
    /// ```
    /// use flagbind::{BindError, SkipReason, SkipRecord};
    ///
    /// let err = BindError::from_records(vec![
    ///     SkipRecord::new("colour", SkipReason::Unmapped),
    ///     SkipRecord::new("size", SkipReason::Unmapped),
    /// ]);
    /// assert!(matches!(err, Some(BindError::Aggregate(agg)) if agg.len() == 2));
    /// ```
    #[must_use]
    pub fn from_records(records: Vec<SkipRecord>) -> Option<Self> {
        let mut errors: Vec<Self> = records.into_iter().map(Self::from).collect();
        match errors.len() {
            0 => None,
            1 => errors.pop(),
            _ => Some(Self::Aggregate(Box::new(AggregatedErrors::new(errors)))),
        }
    }

    /// Skip records carried by this error, flattened across aggregation.
    ///
    /// ```
    /// use flagbind::{BindError, SkipReason};
    /// let err = BindError::Skipped { name: "colour".into(), reason: SkipReason::Unmapped };
    /// assert_eq!(err.records(), vec![("colour", &SkipReason::Unmapped)]);
    /// ```
    #[must_use]
    pub fn records(&self) -> Vec<(&str, &crate::SkipReason)> {
        match self {
            Self::Skipped { name, reason } => vec![(name.as_str(), reason)],
            Self::Aggregate(errors) => errors.iter().flat_map(Self::records).collect(),
        }
    }
}
