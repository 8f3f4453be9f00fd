//! Error types for instance fabrication.

use fabrication_core::FieldError;
use thiserror::Error;

/// Errors that can occur while populating an instance.
#[derive(Error, Debug)]
pub enum FabricationError {
    /// A generated value could not be stored into its field.
    #[error("Failed to set field '{field}' on '{shape}': {source}")]
    Field {
        shape: &'static str,
        field: &'static str,
        #[source]
        source: FieldError,
    },
}
