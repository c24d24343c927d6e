use thiserror::Error;

/// Errors raised while building shapes or predicates.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// The predicate tag is outside the closed set of recognized tags.
    #[error("unknown predicate tag: {tag}")]
    UnknownPredicate {
        /// The rejected tag.
        tag: String,
    },
    /// A field name occurs more than once in a shape declaration.
    #[error("duplicate field in shape: {name}")]
    DuplicateField {
        /// The repeated field name.
        name: String,
    },
}
