//! Seed-derived text, character, boolean and identifier generators.

use fabrication_core::FieldValue;
use uuid::Uuid;

/// Decimal text of the seed.
pub fn generate_text(seed: i64) -> FieldValue {
    FieldValue::Text(seed.to_string())
}

/// `'A'` shifted by the seed.
///
/// Falls back to `'A'` when the shifted code point is not a valid scalar.
pub fn generate_char(seed: i64) -> FieldValue {
    let code = i64::from(u32::from('A')).wrapping_add(seed);
    let ch = u32::try_from(code)
        .ok()
        .and_then(char::from_u32)
        .unwrap_or('A');
    FieldValue::Char(ch)
}

/// Booleans always default to `false`.
pub fn generate_bool() -> FieldValue {
    FieldValue::Bool(false)
}

/// UUID whose low 64 bits are the seed.
pub fn generate_uuid(seed: i64) -> FieldValue {
    FieldValue::Uuid(Uuid::from_u128(u128::from(seed as u64)))
}
