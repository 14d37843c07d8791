//! Element coercion table.
//!
//! Each [`ElementCoercer`] variant is a pure `&str -> Result<Value, _>`
//! conversion for one element type. The binder looks the coercer up from the
//! target field rather than branching on types itself.

mod integer;

use std::fmt;

use thiserror::Error;

pub use integer::Radix;

/// The closed set of element types a field can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementCoercer {
    /// UTF-8 text, used verbatim.
    Str,
    /// `i8`.
    I8,
    /// `i16`.
    I16,
    /// `i32`.
    I32,
    /// `isize`, limited to the 32-bit range on every target.
    Isize,
    /// `i64`.
    I64,
    /// `u8`.
    U8,
    /// `u16`.
    U16,
    /// `u32`.
    U32,
    /// `usize`, limited to the 32-bit range on every target.
    Usize,
    /// `u64`.
    U64,
    /// `f32`.
    F32,
    /// `f64`.
    F64,
    /// `bool`.
    Bool,
}

/// A successfully coerced element.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Text value.
    Str(String),
    /// `i8` value.
    I8(i8),
    /// `i16` value.
    I16(i16),
    /// `i32` value.
    I32(i32),
    /// `isize` value.
    Isize(isize),
    /// `i64` value.
    I64(i64),
    /// `u8` value.
    U8(u8),
    /// `u16` value.
    U16(u16),
    /// `u32` value.
    U32(u32),
    /// `usize` value.
    Usize(usize),
    /// `u64` value.
    U64(u64),
    /// `f32` value.
    F32(f32),
    /// `f64` value.
    F64(f64),
    /// `bool` value.
    Bool(bool),
}

/// Reasons a single value could not be coerced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoerceError {
    /// The text is not a literal of the requested type.
    #[error("invalid {kind} literal {value:?}")]
    Syntax {
        /// Type the value was coerced into.
        kind: ElementCoercer,
        /// Offending input.
        value: String,
    },
    /// The literal is well formed but does not fit the requested width.
    #[error("{value:?} is out of range for {kind}")]
    Range {
        /// Type the value was coerced into.
        kind: ElementCoercer,
        /// Offending input.
        value: String,
    },
}

impl ElementCoercer {
    /// Coerces `raw` using `radix` for the integer variants.
    ///
    /// Non-integer variants ignore `radix`.
    ///
    /// # Errors
    ///
    /// Returns a [`CoerceError`] when `raw` is not a literal of this type or
    /// does not fit its width.
    ///
    /// ```rust
    /// use flagbind::{ElementCoercer, Radix, Value};
    ///
    /// assert_eq!(ElementCoercer::U8.coerce("0x1f", Radix::Auto), Ok(Value::U8(31)));
    /// assert!(ElementCoercer::U8.coerce("0x1f", Radix::Decimal).is_err());
    /// ```
    pub fn coerce(self, raw: &str, radix: Radix) -> Result<Value, CoerceError> {
        match self {
            Self::Str => Ok(Value::Str(raw.to_owned())),
            Self::I8 => self.signed(raw, radix).map(Value::I8),
            Self::I16 => self.signed(raw, radix).map(Value::I16),
            Self::I32 => self.signed(raw, radix).map(Value::I32),
            Self::Isize => self
                .signed::<i32>(raw, radix)
                .and_then(|narrow| isize::try_from(narrow).map_err(|_| self.range(raw)))
                .map(Value::Isize),
            Self::I64 => self.signed(raw, radix).map(Value::I64),
            Self::U8 => self.unsigned(raw, radix).map(Value::U8),
            Self::U16 => self.unsigned(raw, radix).map(Value::U16),
            Self::U32 => self.unsigned(raw, radix).map(Value::U32),
            Self::Usize => self
                .unsigned::<u32>(raw, radix)
                .and_then(|narrow| usize::try_from(narrow).map_err(|_| self.range(raw)))
                .map(Value::Usize),
            Self::U64 => self.unsigned(raw, radix).map(Value::U64),
            Self::F32 => self.float::<f32>(raw).map(Value::F32),
            Self::F64 => self.float::<f64>(raw).map(Value::F64),
            Self::Bool => parse_bool(raw)
                .map(Value::Bool)
                .ok_or_else(|| self.syntax(raw)),
        }
    }

    fn signed<T: TryFrom<i128>>(self, raw: &str, radix: Radix) -> Result<T, CoerceError> {
        let wide = integer::parse_signed(raw, radix).map_err(|err| self.classify(err, raw))?;
        T::try_from(wide).map_err(|_| self.range(raw))
    }

    fn unsigned<T: TryFrom<u128>>(self, raw: &str, radix: Radix) -> Result<T, CoerceError> {
        let wide = integer::parse_unsigned(raw, radix).map_err(|err| self.classify(err, raw))?;
        T::try_from(wide).map_err(|_| self.range(raw))
    }

    fn float<T>(self, raw: &str) -> Result<T, CoerceError>
    where
        T: std::str::FromStr + FloatLike,
    {
        let value: T = raw.parse().map_err(|_| self.syntax(raw))?;
        if value.is_infinite() && !names_infinity(raw) {
            return Err(self.range(raw));
        }
        Ok(value)
    }

    fn classify(self, err: integer::IntError, raw: &str) -> CoerceError {
        match err {
            integer::IntError::Syntax => self.syntax(raw),
            integer::IntError::Range => self.range(raw),
        }
    }

    fn syntax(self, raw: &str) -> CoerceError {
        CoerceError::Syntax {
            kind: self,
            value: raw.to_owned(),
        }
    }

    fn range(self, raw: &str) -> CoerceError {
        CoerceError::Range {
            kind: self,
            value: raw.to_owned(),
        }
    }
}

impl fmt::Display for ElementCoercer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Str => "string",
            Self::I8 => "i8",
            Self::I16 => "i16",
            Self::I32 => "i32",
            Self::Isize => "isize",
            Self::I64 => "i64",
            Self::U8 => "u8",
            Self::U16 => "u16",
            Self::U32 => "u32",
            Self::Usize => "usize",
            Self::U64 => "u64",
            Self::F32 => "f32",
            Self::F64 => "f64",
            Self::Bool => "bool",
        };
        f.write_str(name)
    }
}

/// Float operations needed to detect overflow to infinity.
trait FloatLike: Copy {
    fn is_infinite(self) -> bool;
}

impl FloatLike for f32 {
    fn is_infinite(self) -> bool {
        Self::is_infinite(self)
    }
}

impl FloatLike for f64 {
    fn is_infinite(self) -> bool {
        Self::is_infinite(self)
    }
}

/// Whether the literal spells infinity rather than overflowing into it.
fn names_infinity(raw: &str) -> bool {
    let unsigned = raw.trim_start_matches(['+', '-']);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}

/// Boolean literals: `1 t T TRUE true True` and `0 f F FALSE false False`.
fn parse_bool(raw: &str) -> Option<bool> {
    match raw {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}

/// Rust types usable as list elements.
///
/// Every implementation pairs the type with exactly one [`ElementCoercer`]
/// and unwraps the matching [`Value`] variant.
pub trait Element: Sized {
    /// Coercer that produces this type.
    const COERCER: ElementCoercer;

    /// Extracts `Self` from a coerced value of the matching variant.
    fn from_value(value: Value) -> Option<Self>;
}

macro_rules! element {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl Element for $ty {
                const COERCER: ElementCoercer = ElementCoercer::$variant;

                fn from_value(value: Value) -> Option<Self> {
                    match value {
                        Value::$variant(inner) => Some(inner),
                        _ => None,
                    }
                }
            }
        )*
    };
}

element! {
    String => Str,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    isize => Isize,
    i64 => I64,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    usize => Usize,
    u64 => U64,
    f32 => F32,
    f64 => F64,
    bool => Bool,
}
