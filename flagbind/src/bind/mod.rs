//! Binding of [`RawArgument`]s onto configuration fields.
//!
//! A configuration type exposes its fields through [`FieldBinder`], normally
//! via `#[derive(FieldBinder)]`. The derive emits a static
//! [`FieldDescriptor`] table and a `slot` accessor; name resolution and the
//! per-kind assignment rules live here so every derived type shares them.

mod assign;
mod report;
mod slot;

pub use assign::Assignment;
pub use report::{BindReport, SkipReason, SkipRecord};
pub use slot::{Bindable, FieldKind, FieldSlot, ListTarget, ScalarTarget};

use crate::RawArgument;

/// Index of a resolved field within its type's descriptor table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldHandle(usize);

impl FieldHandle {
    /// Wraps a descriptor-table index.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Position in the descriptor table.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// One row of a configuration type's descriptor table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    name: &'static str,
    field: &'static str,
    kind: FieldKind,
}

impl FieldDescriptor {
    /// Describes a field bound under `name`.
    ///
    /// `field` is the Rust identifier, which differs from `name` when the
    /// field was renamed with `#[flagbind(name = "...")]`.
    #[must_use]
    pub const fn new(name: &'static str, field: &'static str, kind: FieldKind) -> Self {
        Self { name, field, kind }
    }

    /// Name flags are matched against.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Rust identifier of the field.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        self.field
    }

    /// Shape of the field.
    #[must_use]
    pub const fn kind(&self) -> FieldKind {
        self.kind
    }
}

/// Compares a flag name with a field name after capitalizing the first
/// letter of each.
///
/// Only the leading character is normalized; the rest must match exactly.
///
/// ```rust
/// use flagbind::names_match;
///
/// assert!(names_match("name", "name"));
/// assert!(names_match("Name", "name"));
/// assert!(!names_match("NAME", "name"));
/// ```
#[must_use]
pub fn names_match(flag: &str, field: &str) -> bool {
    let mut flag_chars = flag.chars();
    let mut field_chars = field.chars();
    match (flag_chars.next(), field_chars.next()) {
        (Some(a), Some(b)) => {
            a.to_uppercase().eq(b.to_uppercase()) && flag_chars.as_str() == field_chars.as_str()
        }
        (None, None) => true,
        _ => false,
    }
}

/// Access to the fields of a configuration structure by name.
///
/// Implement this with `#[derive(FieldBinder)]`. Hand-written
/// implementations only need [`FieldBinder::descriptors`] and
/// [`FieldBinder::slot`]; the handle passed to `slot` always indexes the
/// table returned by `descriptors`.
pub trait FieldBinder {
    /// Descriptor table for every bindable field, in declaration order.
    fn descriptors() -> &'static [FieldDescriptor]
    where
        Self: Sized;

    /// Borrows the field at `handle`, or `None` for an unknown handle.
    fn slot(&mut self, handle: FieldHandle) -> Option<FieldSlot<'_>>;

    /// Finds the field a flag name binds to.
    fn resolve(name: &str) -> Option<FieldHandle>
    where
        Self: Sized,
    {
        Self::descriptors()
            .iter()
            .position(|descriptor| names_match(name, descriptor.name()))
            .map(FieldHandle::new)
    }

    /// Coerces `values` into the field at `handle`.
    fn assign(&mut self, handle: FieldHandle, values: &[String]) -> Assignment
    where
        Self: Sized,
    {
        let Some(descriptor) = Self::descriptors().get(handle.index()) else {
            return Assignment::default();
        };
        let field = descriptor.field();
        match self.slot(handle) {
            Some(slot) => assign::assign(field, slot, values),
            None => assign::assign(field, FieldSlot::Unsupported, values),
        }
    }
}

/// Applies every argument to the matching field of `target`.
///
/// Arguments with no matching field are skipped, as are values that fail
/// coercion. Nothing is reported unless the caller inspects the returned
/// [`BindReport`].
pub fn bind<T: FieldBinder>(target: &mut T, arguments: &[RawArgument]) -> BindReport {
    let mut report = BindReport::default();
    for argument in arguments {
        let name = argument.name();
        let Some(handle) = T::resolve(name) else {
            tracing::debug!(argument = name, "no field matches argument");
            report.record_skip(name, SkipReason::Unmapped);
            continue;
        };
        let outcome = target.assign(handle, argument.values());
        if outcome.wrote() {
            report.record_bound();
        }
        for reason in outcome.into_skipped() {
            tracing::debug!(argument = name, %reason, "argument value skipped");
            report.record_skip(name, reason);
        }
    }
    report
}
