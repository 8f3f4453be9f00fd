//! Seed-derived numeric generators.
//!
//! Every numeric field receives the seed itself, narrowed with a wrapping
//! cast to the field's width.

use fabrication_core::FieldValue;

/// 8-bit integer from the seed.
pub fn generate_int8(seed: i64) -> FieldValue {
    FieldValue::Int8(seed as i8)
}

/// 16-bit integer from the seed.
pub fn generate_int16(seed: i64) -> FieldValue {
    FieldValue::Int16(seed as i16)
}

/// 32-bit integer from the seed.
pub fn generate_int32(seed: i64) -> FieldValue {
    FieldValue::Int32(seed as i32)
}

/// 64-bit integer from the seed.
pub fn generate_int64(seed: i64) -> FieldValue {
    FieldValue::Int64(seed)
}

/// 32-bit float from the seed.
pub fn generate_float32(seed: i64) -> FieldValue {
    FieldValue::Float32(seed as f32)
}

/// 64-bit float from the seed.
pub fn generate_float64(seed: i64) -> FieldValue {
    FieldValue::Float64(seed as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_is_the_value() {
        assert_eq!(generate_int8(7), FieldValue::Int8(7));
        assert_eq!(generate_int16(7), FieldValue::Int16(7));
        assert_eq!(generate_int32(7), FieldValue::Int32(7));
        assert_eq!(generate_int64(7), FieldValue::Int64(7));
        assert_eq!(generate_float32(7), FieldValue::Float32(7.0));
        assert_eq!(generate_float64(7), FieldValue::Float64(7.0));
    }

    #[test]
    fn test_narrowing_wraps() {
        assert_eq!(generate_int8(300), FieldValue::Int8(44));
        assert_eq!(generate_int16(-1), FieldValue::Int16(-1));
    }
}
