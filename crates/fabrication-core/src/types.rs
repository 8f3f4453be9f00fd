//! Field types understood by the fabrication engine.
//!
//! This module defines `FieldType`, the closed type universe the generator
//! registry dispatches on. Every field a [`Shape`](crate::Shape) exposes is
//! described by one of these variants.

use crate::shape::{Shape, ShapeRef};
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Utc};
use std::fmt;
use uuid::Uuid;

/// Type of a single field on a shape.
///
/// `FieldType` is the key used by the generator registry. Two fields with the
/// same `FieldType` always receive values from the same generator.
///
/// # Categories
///
/// 1. **Primitives** (`Bool`, sized integers, floats, `Char`, `Text`, `Uuid`) have
///    built-in seed-derived generators
/// 2. **Temporal** types are served from the registry's clock sources
/// 3. **`Enum`** defaults to its first declared member
/// 4. **`Shape`** is fabricated recursively while the recursion budget lasts
/// 5. **`Abstract`** and **`Opaque`** are only ever filled by custom generators
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FieldType {
    /// Boolean value
    Bool,

    /// 8-bit signed integer
    Int8,

    /// 16-bit signed integer
    Int16,

    /// 32-bit signed integer
    Int32,

    /// 64-bit signed integer
    Int64,

    /// 32-bit IEEE 754 floating point
    Float32,

    /// 64-bit IEEE 754 floating point
    Float64,

    /// Single unicode scalar value
    Char,

    /// Unlimited text
    Text,

    /// UUID (128-bit)
    Uuid,

    /// Calendar date without time (YYYY-MM-DD)
    Date,

    /// Date and time without timezone
    LocalDateTime,

    /// Point on the UTC timeline
    Instant,

    /// Date and time with a fixed UTC offset
    ZonedDateTime,

    /// Enumeration with its members in declaration order
    Enum {
        /// Enumeration name
        name: &'static str,
        /// Declared members
        variants: &'static [&'static str],
    },

    /// Concrete compound shape
    Shape(ShapeRef),

    /// Interface or abstract type; never instantiated by the engine
    Abstract(&'static str),

    /// Any other type the engine has no built-in knowledge of
    Opaque(&'static str),
}

impl FieldType {
    /// Field type for a concrete shape.
    pub fn shape<S: Shape>() -> Self {
        Self::Shape(ShapeRef::of::<S>())
    }

    /// Field type for an enumeration.
    pub fn enumeration(name: &'static str, variants: &'static [&'static str]) -> Self {
        Self::Enum { name, variants }
    }

    /// Short name used in error messages and logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Int8 => "int8",
            Self::Int16 => "int16",
            Self::Int32 => "int32",
            Self::Int64 => "int64",
            Self::Float32 => "float32",
            Self::Float64 => "float64",
            Self::Char => "char",
            Self::Text => "text",
            Self::Uuid => "uuid",
            Self::Date => "date",
            Self::LocalDateTime => "local_date_time",
            Self::Instant => "instant",
            Self::ZonedDateTime => "zoned_date_time",
            Self::Enum { name, .. } => name,
            Self::Shape(shape) => shape.name(),
            Self::Abstract(name) | Self::Opaque(name) => name,
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Rust types with a fixed [`FieldType`].
///
/// Used to register custom generators by Rust type instead of spelling out the
/// `FieldType` variant.
pub trait FieldTyped {
    /// The field type values of `Self` are generated for.
    fn field_type() -> FieldType;
}

macro_rules! impl_field_typed {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl FieldTyped for $ty {
                fn field_type() -> FieldType {
                    FieldType::$variant
                }
            }
        )*
    };
}

impl_field_typed! {
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
