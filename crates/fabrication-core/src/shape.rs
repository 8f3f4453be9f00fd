//! The shape capability: allocation, field enumeration and field assignment.
//!
//! The engine never inspects a type beyond what [`Shape`] exposes. A shape
//! implementation can be hand-written or generated; the engine only needs to
//! allocate an empty instance, list its fields and set a field by name.

use crate::types::FieldType;
use crate::values::FieldValue;
use std::any::{Any, TypeId};
use std::fmt;
use std::hash::{Hash, Hasher};

// ============================================================================
// Error Types
// ============================================================================

/// Error raised when a value cannot be stored into a shape.
#[derive(Debug, thiserror::Error)]
pub enum FieldError {
    /// The shape does not declare the field
    #[error("Shape '{shape}' has no field '{field}'")]
    UnknownField { shape: &'static str, field: String },

    /// The value variant does not fit the field
    #[error("Expected a {expected} value but received {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    /// A type-erased instance was not of the expected shape
    #[error("Instance is not a '{expected}'")]
    ShapeMismatch { expected: &'static str },
}

impl FieldError {
    /// Convenience constructor for the catch-all arm of `set_field`.
    pub fn unknown(shape: &'static str, field: &str) -> Self {
        Self::UnknownField {
            shape,
            field: field.to_string(),
        }
    }
}

// ============================================================================
// Field Descriptors
// ============================================================================

/// Name and type of one field of a shape.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDescriptor {
    /// Field name, passed back to [`Shape::set_field`]
    pub name: &'static str,
    /// Declared field type
    pub field_type: FieldType,
    /// Synthesized back-reference that must never be populated
    pub synthetic: bool,
}

impl FieldDescriptor {
    /// Describe a regular field.
    pub fn new(name: &'static str, field_type: FieldType) -> Self {
        Self {
            name,
            field_type,
            synthetic: false,
        }
    }

    /// Describe a synthesized field (e.g. a handle to an enclosing instance).
    ///
    /// Synthetic fields are skipped by [`ShapeRef::all_fields`].
    pub fn synthetic(name: &'static str, field_type: FieldType) -> Self {
        Self {
            name,
            field_type,
            synthetic: true,
        }
    }
}

// ============================================================================
// Shape Capability
// ============================================================================

/// Capability a type must provide to be fabricated.
///
/// # Example
///
/// ```rust
/// use fabrication_core::{FieldDescriptor, FieldError, FieldType, FieldValue, Shape};
///
/// #[derive(Default)]
/// struct Person {
///     name: String,
///     age: i32,
/// }
///
/// impl Shape for Person {
///     const NAME: &'static str = "Person";
///
///     fn fields() -> Vec<FieldDescriptor> {
///         vec![
///             FieldDescriptor::new("name", FieldType::Text),
///             FieldDescriptor::new("age", FieldType::Int32),
///         ]
///     }
///
///     fn allocate() -> Self {
///         Self::default()
///     }
///
///     fn set_field(&mut self, field: &str, value: FieldValue) -> Result<(), FieldError> {
///         match field {
///             "name" => self.name = value.try_into()?,
///             "age" => self.age = value.try_into()?,
///             _ => return Err(FieldError::unknown(Self::NAME, field)),
///         }
///         Ok(())
///     }
/// }
/// ```
pub trait Shape: Sized + 'static {
    /// Human-readable shape name
    const NAME: &'static str;

    /// Fields declared directly on this shape, in declaration order.
    fn fields() -> Vec<FieldDescriptor>;

    /// Parent shape whose fields this shape also carries.
    ///
    /// Inherited fields are assigned through this shape's own
    /// [`set_field`](Shape::set_field), which is expected to delegate.
    fn ancestor() -> Option<ShapeRef> {
        None
    }

    /// Allocate an empty instance without running any construction logic.
    fn allocate() -> Self;

    /// Store `value` into the field called `field`.
    fn set_field(&mut self, field: &str, value: FieldValue) -> Result<(), FieldError>;
}

fn allocate_erased<S: Shape>() -> Box<dyn Any> {
    Box::new(S::allocate())
}

fn assign_erased<S: Shape>(
    target: &mut dyn Any,
    field: &str,
    value: FieldValue,
) -> Result<(), FieldError> {
    target
        .downcast_mut::<S>()
        .ok_or(FieldError::ShapeMismatch { expected: S::NAME })?
        .set_field(field, value)
}

/// Type-erased handle to a [`Shape`] implementation.
///
/// Lets a field declare a compound type and lets the generator fabricate it
/// without knowing the concrete Rust type. Equality and hashing go by
/// `TypeId`.
#[derive(Clone, Copy)]
pub struct ShapeRef {
    name: &'static str,
    type_id: TypeId,
    fields: fn() -> Vec<FieldDescriptor>,
    ancestor: fn() -> Option<ShapeRef>,
    allocate: fn() -> Box<dyn Any>,
    assign: fn(&mut dyn Any, &str, FieldValue) -> Result<(), FieldError>,
}

impl ShapeRef {
    /// Handle for the shape `S`.
    pub fn of<S: Shape>() -> Self {
        Self {
            name: S::NAME,
            type_id: TypeId::of::<S>(),
            fields: S::fields,
            ancestor: S::ancestor,
            allocate: allocate_erased::<S>,
            assign: assign_erased::<S>,
        }
    }

    /// Shape name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// `TypeId` of the underlying Rust type.
    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// Whether this handle refers to `S`.
    pub fn is<S: Shape>(&self) -> bool {
        self.type_id == TypeId::of::<S>()
    }

    /// Every populatable field: own fields first, then each ancestor's,
    /// nearest ancestor first. Synthetic fields are dropped.
    pub fn all_fields(&self) -> Vec<FieldDescriptor> {
        let mut fields = (self.fields)();
        let mut next = (self.ancestor)();
        while let Some(ancestor) = next {
            fields.extend((ancestor.fields)());
            next = (ancestor.ancestor)();
        }
        fields.retain(|field| !field.synthetic);
        fields
    }

    /// Allocate an empty, type-erased instance.
    pub fn allocate(&self) -> Box<dyn Any> {
        (self.allocate)()
    }

    /// Store `value` into `field` of a type-erased instance.
    pub fn assign(
        &self,
        target: &mut dyn Any,
        field: &str,
        value: FieldValue,
    ) -> Result<(), FieldError> {
        (self.assign)(target, field, value)
    }
}

impl fmt::Debug for ShapeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ShapeRef").field(&self.name).finish()
    }
}

impl PartialEq for ShapeRef {
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id
    }
}

impl Eq for ShapeRef {}

impl Hash for ShapeRef {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.type_id.hash(state);
    }
}
