//! Core crate for the `flagbind` argument binder.
//!
//! `flagbind` turns the flat token list a process was invoked with into values
//! stored directly on the fields of a configuration struct. Work happens in
//! two passes:
//!
//! 1. [`tokenize`] groups tokens into named [`RawArgument`] records, merging
//!    repeated flags and collecting trailing values.
//! 2. [`bind`] resolves each record to a field through the [`FieldBinder`]
//!    trait and coerces its values into the field's type.
//!
//! [`initialize`] runs both passes. Values that cannot be coerced, and flags
//! with no matching field, are skipped **silently**: a field given bad input
//! keeps its previous value. Use [`initialize_strict`] to have those skips
//! reported as a [`BindError`] instead.
//!
//! The derive macro lives in the companion `flagbind_macros` crate and is
//! re-exported here.
//!
//! ```rust
//! use flagbind::{FieldBinder, Settings};
//!
//! #[derive(Debug, Default, FieldBinder)]
//! struct Config {
//!     name: String,
//!     ports: Vec<u16>,
//! }
//!
//! let settings = Settings::from_tokens("demo", "--", ["--name", "web", "--ports", "80", "443"]);
//! let mut config = Config::default();
//! flagbind::initialize(&mut config, &settings);
//! assert_eq!(config.name, "web");
//! assert_eq!(config.ports, vec![80, 443]);
//! ```

pub use flagbind_macros::FieldBinder;

mod bind;
mod coerce;
mod error;
mod raw;
mod settings;
mod tokenizer;

pub use bind::{
    Assignment, BindReport, Bindable, FieldBinder, FieldDescriptor, FieldHandle, FieldKind,
    FieldSlot, ListTarget, ScalarTarget, SkipReason, SkipRecord, bind, names_match,
};
pub use coerce::{CoerceError, Element, ElementCoercer, Radix, Value};
pub use error::{AggregatedErrors, BindError};
pub use raw::RawArgument;
pub use settings::Settings;
pub use tokenizer::tokenize;

/// Tokenizes the settings' arguments and binds them onto `target`.
///
/// Binding is skipped entirely when tokenization yields no records. Flags that
/// match no field, values that fail to parse and fields of unsupported kinds
/// are ignored; the affected fields keep whatever value they held before the
/// call. This is easy to mistake for a bug, so reach for
/// [`initialize_strict`] when bad input must be surfaced.
///
/// # Examples
///
/// ```rust
/// use flagbind::{FieldBinder, Settings};
///
/// #[derive(Default, FieldBinder)]
/// struct Limits {
///     retries: u8,
/// }
///
/// let mut limits = Limits { retries: 3 };
/// let settings = Settings::from_tokens("demo", "--", ["--retries", "many"]);
/// flagbind::initialize(&mut limits, &settings);
/// assert_eq!(limits.retries, 3);
/// ```
pub fn initialize<T: FieldBinder>(target: &mut T, settings: &Settings) {
    let _span = tracing::debug_span!("initialize", program = settings.name()).entered();
    let arguments = tokenize(settings);
    if arguments.is_empty() {
        tracing::debug!("no arguments to bind");
        return;
    }
    let report = bind(target, &arguments);
    tracing::debug!(
        bound = report.bound(),
        skipped = report.skipped().len(),
        "binding finished"
    );
}

/// Tokenizes and binds like [`initialize`], reporting every skipped argument.
///
/// Fields are assigned exactly as [`initialize`] would assign them; strictness
/// only changes what the caller is told. A single skip is returned as
/// [`BindError::Skipped`], several are collected into
/// [`BindError::Aggregate`].
///
/// # Errors
///
/// Returns a [`BindError`] when any argument was unmapped, carried no value,
/// targeted an unsupported field, or contained a value that failed coercion.
///
/// # Examples
///
/// ```rust
/// use flagbind::{BindError, FieldBinder, Settings};
///
/// #[derive(Default, FieldBinder)]
/// struct Limits {
///     retries: u8,
/// }
///
/// let mut limits = Limits::default();
/// let settings = Settings::from_tokens("demo", "--", ["--retries", "300"]);
/// let err = flagbind::initialize_strict(&mut limits, &settings).unwrap_err();
/// assert!(matches!(err, BindError::Skipped { .. }));
/// ```
pub fn initialize_strict<T: FieldBinder>(
    target: &mut T,
    settings: &Settings,
) -> Result<BindReport, BindError> {
    let _span = tracing::debug_span!("initialize_strict", program = settings.name()).entered();
    let arguments = tokenize(settings);
    if arguments.is_empty() {
        return Ok(BindReport::default());
    }
    let report = bind(target, &arguments);
    report.into_result()
}
