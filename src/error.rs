//! Error types for the collection builder and the fabricator facade.

use fabrication_core::SettingsError;
use fabrication_generator::FabricationError;
use thiserror::Error;

/// Misuse of the selection DSL.
///
/// Every message names the offending value together with the collection size
/// or the number of elements still available.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    /// Count below one.
    #[error(
        "Unable to modify {count} elements with {operation}: the number of elements to affect must be a positive integer"
    )]
    NonPositiveCount { operation: &'static str, count: i64 },

    /// Count larger than the collection.
    #[error("Unable to modify {count} elements with {operation}: the collection only has {size} elements")]
    CountExceedsSize {
        operation: &'static str,
        count: i64,
        size: usize,
    },

    /// Index outside `[0, size)`.
    #[error("Index {index} passed to {operation} is outside a collection of size {size}")]
    IndexOutOfRange {
        operation: &'static str,
        index: i64,
        size: usize,
    },

    /// Slice with identical bounds.
    #[error("Slice bounds are both {index}; use the_nth({index}) to modify a single element")]
    EqualSliceBounds { index: i64 },

    /// Slice start after its end.
    #[error("Slice start {start} is after slice end {end}")]
    InvertedSlice { start: i64, end: i64 },

    /// Relative selector ran past either end of the collection.
    #[error("Unable to modify {requested} elements with {operation}: only {remaining} elements left")]
    NotEnoughElements {
        operation: &'static str,
        requested: i64,
        remaining: usize,
    },

    /// Collection sized to zero.
    #[error("A collection must contain at least one element")]
    EmptyCollection,
}

/// Unified error type for the fabricator crate.
#[derive(Error, Debug)]
pub enum Error {
    /// Selection DSL error.
    #[error("Selection error: {0}")]
    Selection(#[from] SelectionError),

    /// Instance population error.
    #[error("Fabrication error: {0}")]
    Fabrication(#[from] FabricationError),

    /// Settings loading error.
    #[error("Settings error: {0}")]
    Settings(#[from] SettingsError),
}

/// Result alias using [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_offending_values() {
        let err = SelectionError::CountExceedsSize {
            operation: "the_first",
            count: 100,
            size: 5,
        };
        assert_eq!(
            err.to_string(),
            "Unable to modify 100 elements with the_first: the collection only has 5 elements"
        );

        let err = SelectionError::NotEnoughElements {
            operation: "the_next",
            requested: 3,
            remaining: 1,
        };
        assert!(err.to_string().contains("only 1 elements left"));
    }

    #[test]
    fn test_wrapping() {
        let err: Error = SelectionError::EmptyCollection.into();
        assert!(matches!(err, Error::Selection(SelectionError::EmptyCollection)));
        assert!(err.to_string().starts_with("Selection error:"));
    }
}
