//! Invocation settings consumed by the tokenizer.

use serde::{Deserialize, Serialize};

/// Everything the tokenizer needs to know about one invocation.
///
/// Settings are built once and read thereafter; the fields are private so a
/// constructed value cannot drift. The type is serde-enabled so applications
/// can keep the prefix in their own configuration. When deserialized without
/// an `arguments` key, the process arguments are captured instead.
///
/// ```rust
/// use flagbind::Settings;
///
/// let settings = Settings::from_tokens("demo", "--", ["--verbose", "1"]);
/// assert_eq!(settings.prefix(), "--");
/// assert_eq!(settings.arguments(), ["--verbose", "1"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    name: String,
    #[serde(default = "process_arguments")]
    arguments: Vec<String>,
    prefix: String,
}

impl Settings {
    /// Creates settings from the current process arguments.
    ///
    /// The program name (`argv[0]`) is excluded. Arguments that are not valid
    /// UTF-8 are converted lossily.
    #[must_use]
    pub fn new(name: impl Into<String>, prefix: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            arguments: process_arguments(),
            prefix: prefix.into(),
        }
    }

    /// Creates settings from an explicit token list.
    ///
    /// Unlike [`Settings::new`], the first token is *not* treated as the
    /// program name.
    #[must_use]
    pub fn from_tokens<I, T>(name: impl Into<String>, prefix: impl Into<String>, tokens: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            name: name.into(),
            arguments: tokens.into_iter().map(Into::into).collect(),
            prefix: prefix.into(),
        }
    }

    /// Logical program name. Used for diagnostics only.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Tokens to scan, in invocation order.
    #[must_use]
    pub fn arguments(&self) -> &[String] {
        &self.arguments
    }

    /// String that marks a token as a flag name.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}

fn process_arguments() -> Vec<String> {
    std::env::args_os()
        .skip(1)
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::{Result, ensure};
    use rstest::rstest;

    #[rstest]
    fn from_tokens_keeps_every_token() {
        let settings = Settings::from_tokens("app", "--", ["first", "--flag"]);
        assert_eq!(settings.name(), "app");
        assert_eq!(settings.arguments(), ["first", "--flag"]);
    }

    #[rstest]
    fn deserializes_explicit_arguments() -> Result<()> {
        let settings: Settings = serde_json::from_str(
            r#"{"name": "app", "prefix": "/", "arguments": ["/level", "3"]}"#,
        )?;
        ensure!(settings.prefix() == "/", "prefix should round through serde");
        ensure!(
            settings.arguments() == ["/level", "3"],
            "unexpected arguments: {:?}",
            settings.arguments()
        );
        Ok(())
    }

    #[rstest]
    fn missing_arguments_fall_back_to_process() -> Result<()> {
        let settings: Settings = serde_json::from_str(r#"{"name": "app", "prefix": "--"}"#)?;
        ensure!(
            settings.arguments() == process_arguments().as_slice(),
            "expected process arguments, got {:?}",
            settings.arguments()
        );
        Ok(())
    }
}
