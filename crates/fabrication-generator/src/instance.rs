//! Instance population and the single-instance builder.

use crate::error::FabricationError;
use crate::registry::GeneratorRegistry;
use fabrication_core::{Shape, ShapeRef};
use std::any::Any;
use std::fmt;
use std::rc::Rc;
use tracing::trace;

/// Callback applied to a freshly populated instance.
///
/// Shared (`Rc`) so one callback can sit in many collection slots.
pub type Mutation<T> = Rc<dyn Fn(&mut T)>;

/// Allocate and populate a type-erased instance of `shape`.
///
/// This is the recursive step used by the registry for compound fields.
pub fn fabricate_shape(
    shape: &ShapeRef,
    registry: &GeneratorRegistry,
) -> Result<Box<dyn Any>, FabricationError> {
    let mut instance = shape.allocate();
    populate(shape, instance.as_mut(), registry)?;
    Ok(instance)
}

/// Fill every field of `target` the registry has a value for.
///
/// Fields for which the registry yields nothing keep their allocation value.
fn populate(
    shape: &ShapeRef,
    target: &mut dyn Any,
    registry: &GeneratorRegistry,
) -> Result<(), FabricationError> {
    for field in shape.all_fields() {
        match registry.generate(&field.field_type, Some(field.name))? {
            Some(value) => {
                trace!(
                    shape = shape.name(),
                    field = field.name,
                    kind = value.kind(),
                    "Populating field"
                );
                shape
                    .assign(target, field.name, value)
                    .map_err(|source| FabricationError::Field {
                        shape: shape.name(),
                        field: field.name,
                        source,
                    })?;
            }
            None => {
                trace!(shape = shape.name(), field = field.name, "Leaving field unset");
            }
        }
    }
    Ok(())
}

/// Builds one populated instance of `T`.
///
/// # Example
///
/// ```ignore
/// let person = InstanceBuilder::<Person>::new()
///     .with(|p| p.name = "TestName".to_string())
///     .and(|p| p.age = 5)
///     .fabricate()?;
/// ```
pub struct InstanceBuilder<T: Shape> {
    registry: GeneratorRegistry,
    mutations: Vec<Mutation<T>>,
}

impl<T: Shape> InstanceBuilder<T> {
    /// Builder using the default registry.
    pub fn new() -> Self {
        Self::with_registry(GeneratorRegistry::default())
    }

    /// Builder using the given registry.
    pub fn with_registry(registry: GeneratorRegistry) -> Self {
        Self {
            registry,
            mutations: Vec::new(),
        }
    }

    /// Builder pre-loaded with already-shared mutations.
    pub fn with_mutations(registry: GeneratorRegistry, mutations: Vec<Mutation<T>>) -> Self {
        Self {
            registry,
            mutations,
        }
    }

    /// Queue a mutation, applied after default generation.
    pub fn with<F>(mut self, mutation: F) -> Self
    where
        F: Fn(&mut T) + 'static,
    {
        self.mutations.push(Rc::new(mutation));
        self
    }

    /// Alias of [`with`](Self::with).
    pub fn and<F>(self, mutation: F) -> Self
    where
        F: Fn(&mut T) + 'static,
    {
        self.with(mutation)
    }

    /// The registry used for default values.
    pub fn registry(&self) -> &GeneratorRegistry {
        &self.registry
    }

    /// Number of queued mutations.
    pub fn mutation_count(&self) -> usize {
        self.mutations.len()
    }

    /// Allocate a new instance, populate its fields, then apply the queued
    /// mutations in insertion order.
    ///
    /// Every call yields a fresh instance.
    pub fn fabricate(&self) -> Result<T, FabricationError> {
        let mut instance = T::allocate();
        populate(&ShapeRef::of::<T>(), &mut instance, &self.registry)?;

        for mutation in &self.mutations {
            mutation(&mut instance);
        }

        Ok(instance)
    }
}

impl<T: Shape> Default for InstanceBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Shape> fmt::Debug for InstanceBuilder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InstanceBuilder")
            .field("shape", &T::NAME)
            .field("registry", &self.registry)
            .field("mutations", &self.mutations.len())
            .finish()
    }
}
