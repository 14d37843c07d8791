//! Named argument records produced by the tokenizer.

use serde::Serialize;

/// A flag name together with every value collected for it.
///
/// For example `--argument value1 value2` is stored as the name `argument`
/// with the values `["value1", "value2"]`. The name never changes once the
/// record exists; later tokens only extend the value list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RawArgument {
    name: String,
    values: Vec<String>,
}

impl RawArgument {
    /// Builds a record from a name and its values.
    #[must_use]
    pub fn new<I, T>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            name: name.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// Flag name with the prefix removed.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Values in first-seen order.
    #[must_use]
    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub(crate) fn push(&mut self, value: impl Into<String>) {
        self.values.push(value.into());
    }

    pub(crate) fn extend<I, T>(&mut self, values: I)
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.values.extend(values.into_iter().map(Into::into));
    }

    /// Drops empty values; called once scanning has finished.
    pub(crate) fn finalize(mut self) -> Self {
        self.values.retain(|value| !value.is_empty());
        self
    }
}
