//! Core types for the fabricator framework.
//!
//! This crate provides the foundational types shared by the generator and the
//! collection builder:
//!
//! - [`FieldType`] - The type universe generators are keyed by
//! - [`FieldValue`] - Generated values handed to a shape
//! - [`Shape`] / [`ShapeRef`] - The allocation and field-assignment capability
//! - [`GeneratorSettings`] - Registry tunables loaded from YAML
//!
//! # Architecture
//!
//! ```text
//! fabrication-core (this crate)
//!    │
//!    ├─── fabrication-generator  (registry + instance population)
//!    │
//!    └─── fabricator             (collection builder + selection DSL)
//! ```

pub mod settings;
pub mod shape;
pub mod types;
pub mod values;

// Re-exports for convenience
pub use settings::{GeneratorSettings, SettingsError, DEFAULT_RECURSE_LIMIT};
pub use shape::{FieldDescriptor, FieldError, Shape, ShapeRef};
pub use types::{FieldType, FieldTyped};
pub use values::FieldValue;
