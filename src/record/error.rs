use thiserror::Error;

use crate::schema::FieldType;

/// Errors raised while constructing or mutating records.
#[derive(Debug, Error)]
pub enum RecordError {
    /// A declared field was not supplied a value.
    #[error("missing value for declared field: {name}")]
    MissingField {
        /// The unsatisfied field name.
        name: String,
    },
    /// A value or lookup referenced a field the shape does not declare.
    #[error("undeclared field: {name}")]
    UnknownField {
        /// The undeclared field name.
        name: String,
    },
    /// A value's runtime type differs from the declared field type.
    #[error("type mismatch for field {name}: declared {declared:?}, got {actual:?}")]
    TypeMismatch {
        /// The offending field name.
        name: String,
        /// The type the shape declares.
        declared: FieldType,
        /// The type of the supplied value.
        actual: FieldType,
    },
    /// The shape declares a field type with no runtime value representation.
    #[error("field {name} has no runtime representation: {declared:?}")]
    Unrepresentable {
        /// The offending field name.
        name: String,
        /// The declared type.
        declared: FieldType,
    },
    /// The record is frozen; writes are rejected.
    #[error("record is frozen; writes are rejected")]
    Frozen,
}
