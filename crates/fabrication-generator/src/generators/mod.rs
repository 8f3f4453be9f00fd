//! Built-in value generators for the primitive and temporal field types.
//!
//! This module builds the default type → generator table for a given seed.
//! The registry rebuilds it whenever the seed or the clock sources change.

pub mod numeric;
pub mod temporal;
pub mod text;

use fabrication_core::{FieldType, FieldValue};
use std::collections::HashMap;
use std::sync::Arc;
use temporal::TemporalSources;

/// Zero-argument value-producing function.
pub type Generator = Arc<dyn Fn() -> FieldValue + Send + Sync>;

/// Build the built-in generator table for `seed`.
pub fn builtin_generators(seed: i64, clock: &TemporalSources) -> HashMap<FieldType, Generator> {
    let mut table: HashMap<FieldType, Generator> = HashMap::new();

    table.insert(FieldType::Int8, Arc::new(move || numeric::generate_int8(seed)));
    table.insert(FieldType::Int16, Arc::new(move || numeric::generate_int16(seed)));
    table.insert(FieldType::Int32, Arc::new(move || numeric::generate_int32(seed)));
    table.insert(FieldType::Int64, Arc::new(move || numeric::generate_int64(seed)));
    table.insert(FieldType::Float32, Arc::new(move || numeric::generate_float32(seed)));
    table.insert(FieldType::Float64, Arc::new(move || numeric::generate_float64(seed)));
    table.insert(FieldType::Char, Arc::new(move || text::generate_char(seed)));
    table.insert(FieldType::Bool, Arc::new(text::generate_bool));
    table.insert(FieldType::Text, Arc::new(move || text::generate_text(seed)));
    table.insert(FieldType::Uuid, Arc::new(move || text::generate_uuid(seed)));

    let date = Arc::clone(&clock.current_date);
    table.insert(FieldType::Date, Arc::new(move || FieldValue::Date(date())));

    let instant = Arc::clone(&clock.current_instant);
    table.insert(FieldType::Instant, Arc::new(move || FieldValue::Instant(instant())));

    let zoned = Arc::clone(&clock.current_zoned_date_time);
    table.insert(
        FieldType::ZonedDateTime,
        Arc::new(move || FieldValue::ZonedDateTime(zoned())),
    );

    let local = Arc::clone(&clock.current_local_date_time);
    table.insert(
        FieldType::LocalDateTime,
        Arc::new(move || FieldValue::LocalDateTime(local())),
    );

    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_builtin_table_covers_primitives_and_temporals() {
        let table = builtin_generators(0, &TemporalSources::default());

        for field_type in [
            FieldType::Bool,
            FieldType::Int8,
            FieldType::Int16,
            FieldType::Int32,
            FieldType::Int64,
            FieldType::Float32,
            FieldType::Float64,
            FieldType::Char,
            FieldType::Text,
            FieldType::Uuid,
            FieldType::Date,
            FieldType::Instant,
            FieldType::ZonedDateTime,
            FieldType::LocalDateTime,
        ] {
            assert!(table.contains_key(&field_type), "missing {field_type}");
        }
        assert!(!table.contains_key(&FieldType::Opaque("Vec<u8>")));
    }

    #[test]
    fn test_builtin_values_for_seed() {
        let table = builtin_generators(3, &TemporalSources::default());

        assert_eq!(table[&FieldType::Int32](), FieldValue::Int32(3));
        assert_eq!(table[&FieldType::Text](), FieldValue::from("3"));
        assert_eq!(table[&FieldType::Char](), FieldValue::Char('D'));
        assert_eq!(table[&FieldType::Bool](), FieldValue::Bool(false));
    }

    #[test]
    fn test_temporal_generators_read_the_clock() {
        let at = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
        let table = builtin_generators(0, &TemporalSources::fixed(at));

        assert_eq!(table[&FieldType::Instant](), FieldValue::Instant(at));
        assert_eq!(
            table[&FieldType::LocalDateTime](),
            FieldValue::LocalDateTime(at.naive_utc())
        );
    }
}
