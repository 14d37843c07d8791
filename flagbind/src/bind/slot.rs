//! Typed mutable views onto configuration fields.

use std::collections::{BTreeMap, HashMap};

use crate::coerce::{Element, ElementCoercer, Value};

/// Static shape of a bindable field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// A `String` field.
    Text,
    /// An integer field of the given width.
    Scalar(ElementCoercer),
    /// A `Vec` whose elements use the given coercer.
    List(ElementCoercer),
    /// A field that matches by name but is never written.
    Unsupported,
}

/// A mutable view of one field, handed out by
/// [`FieldBinder::slot`](crate::FieldBinder::slot).
pub enum FieldSlot<'a> {
    /// Text field.
    Text(&'a mut String),
    /// Integer scalar field.
    Scalar(&'a mut dyn ScalarTarget),
    /// List field.
    List(&'a mut dyn ListTarget),
    /// Field with no coercion path.
    Unsupported,
}

/// A single-valued field that can be overwritten with a coerced [`Value`].
pub trait ScalarTarget {
    /// Coercer producing values for this field.
    fn coercer(&self) -> ElementCoercer;

    /// Replaces the field's value. Returns `false` when `value` is of the
    /// wrong variant, leaving the field untouched.
    fn store(&mut self, value: Value) -> bool;
}

/// A list field that can be extended with coerced [`Value`]s.
pub trait ListTarget {
    /// Coercer producing elements for this list.
    fn coercer(&self) -> ElementCoercer;

    /// Appends `value`. Returns `false` when it is of the wrong variant.
    fn push(&mut self, value: Value) -> bool;
}

impl<T: Element> ScalarTarget for T {
    fn coercer(&self) -> ElementCoercer {
        T::COERCER
    }

    fn store(&mut self, value: Value) -> bool {
        T::from_value(value).is_some_and(|parsed| {
            *self = parsed;
            true
        })
    }
}

impl<T: Element> ListTarget for Vec<T> {
    fn coercer(&self) -> ElementCoercer {
        T::COERCER
    }

    fn push(&mut self, value: Value) -> bool {
        T::from_value(value).is_some_and(|parsed| {
            Vec::push(self, parsed);
            true
        })
    }
}

/// Field types the derive macro knows how to expose.
///
/// Every field of a `#[derive(FieldBinder)]` struct must implement this trait
/// unless it is marked `#[flagbind(skip)]`. Types without a coercion path
/// report [`FieldKind::Unsupported`] so they still match by name but are
/// never written.
pub trait Bindable {
    /// Shape reported in the descriptor table.
    const KIND: FieldKind;

    /// Borrows the field as a [`FieldSlot`].
    fn slot(&mut self) -> FieldSlot<'_>;
}

impl Bindable for String {
    const KIND: FieldKind = FieldKind::Text;

    fn slot(&mut self) -> FieldSlot<'_> {
        FieldSlot::Text(self)
    }
}

impl<T: Element> Bindable for Vec<T> {
    const KIND: FieldKind = FieldKind::List(T::COERCER);

    fn slot(&mut self) -> FieldSlot<'_> {
        FieldSlot::List(self)
    }
}

macro_rules! scalar {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Bindable for $ty {
                const KIND: FieldKind = FieldKind::Scalar(<$ty as Element>::COERCER);

                fn slot(&mut self) -> FieldSlot<'_> {
                    FieldSlot::Scalar(self)
                }
            }
        )*
    };
}

scalar!(i8, i16, i32, isize, i64, u8, u16, u32, usize, u64);

// Floats and booleans are only coerced as list elements.
macro_rules! unsupported {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Bindable for $ty {
                const KIND: FieldKind = FieldKind::Unsupported;

                fn slot(&mut self) -> FieldSlot<'_> {
                    FieldSlot::Unsupported
                }
            }
        )*
    };
}

unsupported!(f32, f64, bool);

impl<K, V, S> Bindable for HashMap<K, V, S> {
    const KIND: FieldKind = FieldKind::Unsupported;

    fn slot(&mut self) -> FieldSlot<'_> {
        FieldSlot::Unsupported
    }
}

impl<K, V> Bindable for BTreeMap<K, V> {
    const KIND: FieldKind = FieldKind::Unsupported;

    fn slot(&mut self) -> FieldSlot<'_> {
        FieldSlot::Unsupported
    }
}
