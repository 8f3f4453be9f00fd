//! Type-keyed default-value registry.

use crate::error::FabricationError;
use crate::generators::temporal::TemporalSources;
use crate::generators::{builtin_generators, Generator};
use crate::instance::fabricate_shape;
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Utc};
use fabrication_core::{FieldType, FieldTyped, FieldValue, GeneratorSettings};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Registry mapping field types to value generators.
///
/// Lookup order for [`generate`](Self::generate):
///
/// 1. Text fields take their own field name when `use_field_name_for_string` is set
/// 2. Custom generators, then built-in generators, for the exact field type
/// 3. Enumerations take their first declared member
/// 4. Concrete shapes are fabricated with [`next_generation`](Self::next_generation)
///    while recursion is enabled and the limit is above zero
/// 5. Anything else is left unset
///
/// The registry is never mutated by generation. Nested fabrication works on a
/// clone with the seed advanced by one and the recursion limit lowered by one.
#[derive(Clone)]
pub struct GeneratorRegistry {
    seed: i64,
    use_field_name_for_string: bool,
    recursive: bool,
    recurse_limit: u32,
    custom: HashMap<FieldType, Generator>,
    builtin: HashMap<FieldType, Generator>,
    clock: TemporalSources,
}

impl GeneratorRegistry {
    /// Registry with the default settings (seed 0).
    pub fn new() -> Self {
        Self::from_settings(&GeneratorSettings::default())
    }

    /// Registry with the default settings and the given seed.
    pub fn with_seed(seed: i64) -> Self {
        Self::from_settings(&GeneratorSettings::with_seed(seed))
    }

    /// Registry configured from loaded settings.
    pub fn from_settings(settings: &GeneratorSettings) -> Self {
        let clock = TemporalSources::default();
        Self {
            seed: settings.seed,
            use_field_name_for_string: settings.use_field_name_for_string,
            recursive: settings.recursive,
            recurse_limit: settings.recurse_limit,
            custom: HashMap::new(),
            builtin: builtin_generators(settings.seed, &clock),
            clock,
        }
    }

    /// Snapshot of the tunables, suitable for serializing back to YAML.
    pub fn settings(&self) -> GeneratorSettings {
        GeneratorSettings {
            seed: self.seed,
            use_field_name_for_string: self.use_field_name_for_string,
            recursive: self.recursive,
            recurse_limit: self.recurse_limit,
        }
    }

    /// Current seed.
    pub fn seed(&self) -> i64 {
        self.seed
    }

    /// Remaining recursion depth.
    pub fn recurse_limit(&self) -> u32 {
        self.recurse_limit
    }

    /// Whether compound fields are fabricated.
    pub fn is_recursive(&self) -> bool {
        self.recursive
    }

    /// Whether text fields take their own field name.
    pub fn uses_field_name_for_string(&self) -> bool {
        self.use_field_name_for_string
    }

    /// Register a custom generator, replacing any built-in for the same type.
    pub fn register<F>(&mut self, field_type: FieldType, generator: F) -> &mut Self
    where
        F: Fn() -> FieldValue + Send + Sync + 'static,
    {
        self.custom.insert(field_type, Arc::new(generator));
        self
    }

    /// Register a custom generator keyed by the Rust type it produces.
    pub fn register_typed<T, F>(&mut self, generator: F) -> &mut Self
    where
        T: FieldTyped + Into<FieldValue>,
        F: Fn() -> T + Send + Sync + 'static,
    {
        self.register(T::field_type(), move || generator().into())
    }

    /// Set whether text fields take their own field name.
    pub fn with_use_field_name_for_string(mut self, enabled: bool) -> Self {
        self.use_field_name_for_string = enabled;
        self
    }

    /// Set whether compound fields are fabricated.
    pub fn with_recursive(mut self, enabled: bool) -> Self {
        self.recursive = enabled;
        self
    }

    /// Set the recursion depth.
    pub fn with_recurse_limit(mut self, limit: u32) -> Self {
        self.recurse_limit = limit;
        self
    }

    /// Replace every clock source at once.
    pub fn with_clock(mut self, clock: TemporalSources) -> Self {
        self.clock = clock;
        self.builtin = builtin_generators(self.seed, &self.clock);
        self
    }

    /// Replace the source used for `Date` fields.
    pub fn with_current_date<F>(mut self, source: F) -> Self
    where
        F: Fn() -> NaiveDate + Send + Sync + 'static,
    {
        self.clock.current_date = Arc::new(source);
        self.builtin = builtin_generators(self.seed, &self.clock);
        self
    }

    /// Replace the source used for `Instant` fields.
    pub fn with_current_instant<F>(mut self, source: F) -> Self
    where
        F: Fn() -> DateTime<Utc> + Send + Sync + 'static,
    {
        self.clock.current_instant = Arc::new(source);
        self.builtin = builtin_generators(self.seed, &self.clock);
        self
    }

    /// Replace the source used for `ZonedDateTime` fields.
    pub fn with_current_zoned_date_time<F>(mut self, source: F) -> Self
    where
        F: Fn() -> DateTime<FixedOffset> + Send + Sync + 'static,
    {
        self.clock.current_zoned_date_time = Arc::new(source);
        self.builtin = builtin_generators(self.seed, &self.clock);
        self
    }

    /// Replace the source used for `LocalDateTime` fields.
    pub fn with_current_local_date_time<F>(mut self, source: F) -> Self
    where
        F: Fn() -> NaiveDateTime + Send + Sync + 'static,
    {
        self.clock.current_local_date_time = Arc::new(source);
        self.builtin = builtin_generators(self.seed, &self.clock);
        self
    }

    /// Clone for one level deeper: seed + 1, recursion limit - 1.
    ///
    /// Custom generators, clock sources and flags are shared unchanged.
    pub fn next_generation(&self) -> Self {
        let seed = self.seed.wrapping_add(1);
        Self {
            seed,
            use_field_name_for_string: self.use_field_name_for_string,
            recursive: self.recursive,
            recurse_limit: self.recurse_limit.saturating_sub(1),
            custom: self.custom.clone(),
            builtin: builtin_generators(seed, &self.clock),
            clock: self.clock.clone(),
        }
    }

    /// Produce the default value for a field, or `None` to leave it unset.
    ///
    /// Only a nested fabrication can fail; unsupported types are not errors.
    pub fn generate(
        &self,
        field_type: &FieldType,
        field_name: Option<&str>,
    ) -> Result<Option<FieldValue>, FabricationError> {
        if *field_type == FieldType::Text && self.use_field_name_for_string {
            if let Some(name) = field_name {
                return Ok(Some(FieldValue::Text(name.to_string())));
            }
        }

        if let Some(generator) = self
            .custom
            .get(field_type)
            .or_else(|| self.builtin.get(field_type))
        {
            return Ok(Some(generator()));
        }

        match field_type {
            FieldType::Enum { variants, .. } => Ok(variants.first().copied().map(FieldValue::Enum)),
            FieldType::Shape(shape) if self.recursive && self.recurse_limit > 0 => {
                let nested = self.next_generation();
                debug!(
                    shape = shape.name(),
                    seed = nested.seed,
                    remaining = nested.recurse_limit,
                    "Fabricating nested shape"
                );
                fabricate_shape(shape, &nested).map(|instance| Some(FieldValue::Instance(instance)))
            }
            FieldType::Shape(shape) => {
                debug!(
                    shape = shape.name(),
                    recursive = self.recursive,
                    "Recursion exhausted, leaving field unset"
                );
                Ok(None)
            }
            _ => Ok(None),
        }
    }
}

impl Default for GeneratorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for GeneratorRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut custom: Vec<_> = self.custom.keys().map(FieldType::name).collect();
        custom.sort_unstable();
        f.debug_struct("GeneratorRegistry")
            .field("seed", &self.seed)
            .field("use_field_name_for_string", &self.use_field_name_for_string)
            .field("recursive", &self.recursive)
            .field("recurse_limit", &self.recurse_limit)
            .field("custom", &custom)
            .finish_non_exhaustive()
    }
}
