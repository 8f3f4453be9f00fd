//! Shapes shared by the integration tests.

#![allow(dead_code)]

use chrono::NaiveDate;
use fabricator::{FieldDescriptor, FieldError, FieldType, FieldValue, Shape, ShapeRef};

/// Initialize logging for tests
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "debug".into()),
        )
        .with_test_writer()
        .try_init();
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    #[default]
    Active,
    Suspended,
    Closed,
}

impl Status {
    pub const FIELD_TYPE: FieldType = FieldType::Enum {
        name: "Status",
        variants: &["Active", "Suspended", "Closed"],
    };

    fn from_value(value: FieldValue) -> Result<Self, FieldError> {
        match value.as_enum() {
            Some("Active") => Ok(Self::Active),
            Some("Suspended") => Ok(Self::Suspended),
            Some("Closed") => Ok(Self::Closed),
            _ => Err(FieldError::TypeMismatch {
                expected: "Status",
                found: value.kind(),
            }),
        }
    }
}

#[derive(Debug, Default)]
pub struct Person {
    pub name: String,
    pub age: i32,
    pub status: Status,
    /// Not declared; stays `None` unless mutated
    pub title: Option<String>,
}

impl Shape for Person {
    const NAME: &'static str = "Person";

    fn fields() -> Vec<FieldDescriptor> {
        vec![
            FieldDescriptor::new("name", FieldType::Text),
            FieldDescriptor::new("age", FieldType::Int32),
            FieldDescriptor::new("status", Status::FIELD_TYPE),
            FieldDescriptor::new("title", FieldType::Opaque("Option<String>")),
        ]
    }

    fn allocate() -> Self {
        Self::default()
    }

    fn set_field(&mut self, field: &str, value: FieldValue) -> Result<(), FieldError> {
        match field {
            "name" => self.name = value.try_into()?,
            "age" => self.age = value.try_into()?,
            "status" => self.status = Status::from_value(value)?,
            _ => return Err(FieldError::unknown(Self::NAME, field)),
        }
        Ok(())
    }
}

/// Extends [`Person`].
#[derive(Debug, Default)]
pub struct Employee {
    pub person: Person,
    pub employee_id: i64,
    pub hired: Option<NaiveDate>,
}

impl Shape for Employee {
    const NAME: &'static str = "Employee";

    fn fields() -> Vec<FieldDescriptor> {
        vec![
            FieldDescriptor::new("employee_id", FieldType::Int64),
            FieldDescriptor::new("hired", FieldType::Date),
        ]
    }

    fn ancestor() -> Option<ShapeRef> {
        Some(ShapeRef::of::<Person>())
    }

    fn allocate() -> Self {
        Self::default()
    }

    fn set_field(&mut self, field: &str, value: FieldValue) -> Result<(), FieldError> {
        match field {
            "employee_id" => self.employee_id = value.try_into()?,
            "hired" => self.hired = Some(value.try_into()?),
            _ => return self.person.set_field(field, value),
        }
        Ok(())
    }
}

/// Self-referencing shape.
#[derive(Debug, Default)]
pub struct Node {
    pub depth: i32,
    pub child: Option<Box<Node>>,
}

impl Node {
    /// Number of nested nodes below this one.
    pub fn chain_len(&self) -> usize {
        let mut len = 0;
        let mut current = self.child.as_deref();
        while let Some(node) = current {
            len += 1;
            current = node.child.as_deref();
        }
        len
    }
}

impl Shape for Node {
    const NAME: &'static str = "Node";

    fn fields() -> Vec<FieldDescriptor> {
        vec![
            FieldDescriptor::new("depth", FieldType::Int32),
            FieldDescriptor::new("child", FieldType::shape::<Node>()),
        ]
    }

    fn allocate() -> Self {
        Self::default()
    }

    fn set_field(&mut self, field: &str, value: FieldValue) -> Result<(), FieldError> {
        match field {
            "depth" => self.depth = value.try_into()?,
            "child" => self.child = Some(Box::new(value.into_instance()?)),
            _ => return Err(FieldError::unknown(Self::NAME, field)),
        }
        Ok(())
    }
}
