//! Default-value generation for the fabricator framework.
//!
//! This crate provides the `GeneratorRegistry`, which maps field types to
//! deterministic value generators, and the `InstanceBuilder`, which allocates
//! a shape, fills every field from the registry and applies queued mutations.
//!
//! # Architecture
//!
//! ```text
//! InstanceBuilder<T>
//!        │  allocate + enumerate fields (Shape)
//!        ▼
//! ┌─────────────────────┐
//! │  GeneratorRegistry  │
//! │                     │
//! │  - seed             │
//! │  - custom / builtin │
//! │  - recurse_limit    │──── compound field ───► next_generation()
//! │  - clock sources    │                         (seed + 1, limit - 1)
//! └─────────┬───────────┘
//!           │
//!           ▼
//!    FieldValue per field, then mutations in insertion order
//! ```
//!
//! # Generators
//!
//! Built-in generators derive every primitive from the seed:
//!
//! - integers and floats - the seed itself
//! - `char` - `'A'` shifted by the seed
//! - `bool` - `false`
//! - text - the field name, or the seed's decimal text
//! - `uuid` - the seed in the low bits
//! - temporal types - the registry's clock sources

pub mod error;
pub mod generators;
pub mod instance;
pub mod registry;

// Re-exports for convenience
pub use error::FabricationError;
pub use generators::temporal::TemporalSources;
pub use generators::Generator;
pub use instance::{fabricate_shape, InstanceBuilder, Mutation};
pub use registry::GeneratorRegistry;
