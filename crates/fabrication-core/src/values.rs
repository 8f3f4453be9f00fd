//! Generated values handed from the generator to a shape.
//!
//! `FieldValue` is the type-agnostic carrier produced by generators and
//! consumed by [`Shape::set_field`](crate::Shape::set_field).

use crate::shape::{FieldError, Shape};
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Utc};
use std::any::Any;
use std::fmt;
use uuid::Uuid;

/// A single generated field value.
///
/// Compound values produced by recursive fabrication travel as
/// [`FieldValue::Instance`] and are recovered with
/// [`into_instance`](FieldValue::into_instance).
pub enum FieldValue {
    /// Boolean value
    Bool(bool),

    /// 8-bit signed integer
    Int8(i8),

    /// 16-bit signed integer
    Int16(i16),

    /// 32-bit signed integer
    Int32(i32),

    /// 64-bit signed integer
    Int64(i64),

    /// 32-bit floating point
    Float32(f32),

    /// 64-bit floating point
    Float64(f64),

    /// Unicode scalar value
    Char(char),

    /// String value
    Text(String),

    /// UUID value
    Uuid(Uuid),

    /// Calendar date
    Date(NaiveDate),

    /// Date and time without timezone
    LocalDateTime(NaiveDateTime),

    /// UTC instant
    Instant(DateTime<Utc>),

    /// Date and time with offset
    ZonedDateTime(DateTime<FixedOffset>),

    /// Enumeration member, by name
    Enum(&'static str),

    /// Recursively fabricated compound instance
    Instance(Box<dyn Any>),
}

impl FieldValue {
    /// Name of the variant, used in mismatch errors.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Bool(_) => "bool",
            Self::Int8(_) => "int8",
            Self::Int16(_) => "int16",
            Self::Int32(_) => "int32",
            Self::Int64(_) => "int64",
            Self::Float32(_) => "float32",
            Self::Float64(_) => "float64",
            Self::Char(_) => "char",
            Self::Text(_) => "text",
            Self::Uuid(_) => "uuid",
            Self::Date(_) => "date",
            Self::LocalDateTime(_) => "local_date_time",
            Self::Instant(_) => "instant",
            Self::ZonedDateTime(_) => "zoned_date_time",
            Self::Enum(_) => "enum",
            Self::Instance(_) => "instance",
        }
    }

    /// Try to get this value as a string reference.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get this value as an enumeration member name.
    pub fn as_enum(&self) -> Option<&'static str> {
        match self {
            Self::Enum(member) => Some(*member),
            _ => None,
        }
    }

    /// Recover a compound instance of shape `S`.
    pub fn into_instance<S: Shape>(self) -> Result<S, FieldError> {
        match self {
            Self::Instance(instance) => instance
                .downcast::<S>()
                .map(|boxed| *boxed)
                .map_err(|_| FieldError::ShapeMismatch { expected: S::NAME }),
            other => Err(FieldError::TypeMismatch {
                expected: S::NAME,
                found: other.kind(),
            }),
        }
    }
}

impl fmt::Debug for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(v) => f.debug_tuple("Bool").field(v).finish(),
            Self::Int8(v) => f.debug_tuple("Int8").field(v).finish(),
            Self::Int16(v) => f.debug_tuple("Int16").field(v).finish(),
            Self::Int32(v) => f.debug_tuple("Int32").field(v).finish(),
            Self::Int64(v) => f.debug_tuple("Int64").field(v).finish(),
            Self::Float32(v) => f.debug_tuple("Float32").field(v).finish(),
            Self::Float64(v) => f.debug_tuple("Float64").field(v).finish(),
            Self::Char(v) => f.debug_tuple("Char").field(v).finish(),
            Self::Text(v) => f.debug_tuple("Text").field(v).finish(),
            Self::Uuid(v) => f.debug_tuple("Uuid").field(v).finish(),
            Self::Date(v) => f.debug_tuple("Date").field(v).finish(),
            Self::LocalDateTime(v) => f.debug_tuple("LocalDateTime").field(v).finish(),
            Self::Instant(v) => f.debug_tuple("Instant").field(v).finish(),
            Self::ZonedDateTime(v) => f.debug_tuple("ZonedDateTime").field(v).finish(),
            Self::Enum(v) => f.debug_tuple("Enum").field(v).finish(),
            Self::Instance(_) => f.write_str("Instance(..)"),
        }
    }
}

// Instances carry no comparable identity, so they never compare equal.
impl PartialEq for FieldValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Int8(a), Self::Int8(b)) => a == b,
            (Self::Int16(a), Self::Int16(b)) => a == b,
            (Self::Int32(a), Self::Int32(b)) => a == b,
            (Self::Int64(a), Self::Int64(b)) => a == b,
            (Self::Float32(a), Self::Float32(b)) => a == b,
            (Self::Float64(a), Self::Float64(b)) => a == b,
            (Self::Char(a), Self::Char(b)) => a == b,
            (Self::Text(a), Self::Text(b)) => a == b,
            (Self::Uuid(a), Self::Uuid(b)) => a == b,
            (Self::Date(a), Self::Date(b)) => a == b,
            (Self::LocalDateTime(a), Self::LocalDateTime(b)) => a == b,
            (Self::Instant(a), Self::Instant(b)) => a == b,
            (Self::ZonedDateTime(a), Self::ZonedDateTime(b)) => a == b,
            (Self::Enum(a), Self::Enum(b)) => a == b,
            _ => false,
        }
    }
}

macro_rules! impl_value_conversions {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for FieldValue {
                fn from(value: $ty) -> Self {
                    Self::$variant(value)
                }
            }

            impl TryFrom<FieldValue> for $ty {
                type Error = FieldError;

                fn try_from(value: FieldValue) -> Result<Self, Self::Error> {
                    match value {
                        FieldValue::$variant(inner) => Ok(inner),
                        other => Err(FieldError::TypeMismatch {
                            expected: stringify!($ty),
                            found: other.kind(),
                        }),
                    }
                }
            }
        )*
    };
}

impl_value_conversions! {
    bool => Bool,
    i8 => Int8,
    i16 => Int16,
    i32 => Int32,
    i64 => Int64,
    f32 => Float32,
    f64 => Float64,
    char => Char,
    String => Text,
    Uuid => Uuid,
    NaiveDate => Date,
    NaiveDateTime => LocalDateTime,
    DateTime<Utc> => Instant,
    DateTime<FixedOffset> => ZonedDateTime,
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}
