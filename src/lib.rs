//! Fabricator
//!
//! A library for fabricating fully populated test objects with minimal setup.
//!
//! # Features
//!
//! - Default values: every declared field is filled from a seeded generator registry
//! - Nested shapes: compound fields are fabricated recursively up to a depth limit
//! - Mutations: targeted changes applied after default generation
//! - Collections: a positional DSL chooses which elements each mutation affects
//!
//! # Crates
//!
//! - `fabrication_core` - field types, field values, the `Shape` capability and settings
//! - `fabrication_generator` - `GeneratorRegistry` and `InstanceBuilder`
//!
//! # Usage
//!
//! ```ignore
//! let fabricator = Fabricator::new();
//!
//! let person = fabricator
//!     .create_new::<Person>()
//!     .with(|p| p.name = "TestName".into())
//!     .fabricate()?;
//!
//! let people = fabricator
//!     .create_many::<Person>()
//!     .of_size(10)?
//!     .the_first(3)
//!     .with(|p| p.title = Some("Dr".into()))?
//!     .the_next(2)
//!     .with(|p| p.title = Some("Prof".into()))?
//!     .fabricate()?;
//! ```

pub mod collection;
pub mod error;
pub mod fabricator;

pub use collection::selector::{IndexRange, Selector};
pub use collection::{CollectionBuilder, DEFAULT_COLLECTION_SIZE};
pub use error::{Error, Result, SelectionError};
pub use fabricator::Fabricator;

// Re-export the building blocks so callers need a single dependency
pub use fabrication_core::{
    FieldDescriptor, FieldError, FieldType, FieldTyped, FieldValue, GeneratorSettings,
    SettingsError, Shape, ShapeRef, DEFAULT_RECURSE_LIMIT,
};
pub use fabrication_generator::{
    FabricationError, GeneratorRegistry, InstanceBuilder, Mutation, TemporalSources,
};
