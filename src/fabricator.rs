//! Entry point tying a registry to both builders.

use crate::collection::CollectionBuilder;
use fabrication_core::{GeneratorSettings, SettingsError, Shape};
use fabrication_generator::{GeneratorRegistry, InstanceBuilder};
use std::path::Path;
use tracing::debug;

/// Hands out builders that share one registry.
#[derive(Debug, Clone, Default)]
pub struct Fabricator {
    registry: GeneratorRegistry,
}

impl Fabricator {
    /// Fabricator over the default registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fabricator over a configured registry.
    pub fn with_registry(registry: GeneratorRegistry) -> Self {
        Self { registry }
    }

    /// Fabricator configured from settings.
    pub fn from_settings(settings: &GeneratorSettings) -> Self {
        Self::with_registry(GeneratorRegistry::from_settings(settings))
    }

    /// Fabricator configured from a YAML settings file.
    pub fn from_settings_file(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let settings = GeneratorSettings::from_file(path)?;
        debug!(path = %path.display(), seed = settings.seed, "Loaded generator settings");
        Ok(Self::from_settings(&settings))
    }

    /// The shared registry.
    pub fn registry(&self) -> &GeneratorRegistry {
        &self.registry
    }

    /// Mutable access for registering custom generators.
    pub fn registry_mut(&mut self) -> &mut GeneratorRegistry {
        &mut self.registry
    }

    /// Builder for a single `T`.
    pub fn create_new<T: Shape>(&self) -> InstanceBuilder<T> {
        InstanceBuilder::with_registry(self.registry.clone())
    }

    /// Builder for a collection of `T`.
    pub fn create_many<T: Shape>(&self) -> CollectionBuilder<T> {
        CollectionBuilder::with_registry(self.registry.clone())
    }
}
