//! Shape descriptions and type-driven field selection.
//!
//! A [`Shape`] declares named fields with [`FieldType`] tags. Projecting a
//! shape through a [`TypePredicate`] retains exactly the fields whose
//! declared type is assignable to the predicate, producing a derived shape.

mod error;

use std::sync::Arc;

pub use error::SchemaError;

use crate::logging::kit_log;

/// Declared value type of a field.
///
/// Wrapper types are distinct from their payloads: a `Deferred(Number)`
/// field never satisfies the plain `Number` predicate.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FieldType {
    /// Text value.
    Text,
    /// Integer numeric value.
    Number,
    /// Callable producing the payload type.
    Func(Arc<FieldType>),
    /// Future resolving to the payload type.
    Deferred(Arc<FieldType>),
}

impl FieldType {
    /// Shorthand for a callable returning `payload`.
    pub fn func(payload: FieldType) -> Self {
        FieldType::Func(Arc::new(payload))
    }

    /// Shorthand for a future resolving to `payload`.
    pub fn deferred(payload: FieldType) -> Self {
        FieldType::Deferred(Arc::new(payload))
    }

    /// Whether a field of this type satisfies `predicate`.
    pub fn is_assignable_to(&self, predicate: &TypePredicate) -> bool {
        match (self, predicate) {
            (FieldType::Text, TypePredicate::Text) => true,
            (FieldType::Number, TypePredicate::Number) => true,
            (FieldType::Func(_), TypePredicate::AnyFunc) => true,
            (FieldType::Func(ret), TypePredicate::FuncReturning(want)) => ret.as_ref() == want,
            (FieldType::Deferred(_), TypePredicate::AnyDeferred) => true,
            (FieldType::Deferred(payload), TypePredicate::DeferredOf(want)) => {
                payload.as_ref() == want
            }
            // A callable producing a future is itself future-valued.
            (FieldType::Func(ret), TypePredicate::AnyDeferred | TypePredicate::DeferredOf(_)) => {
                ret.is_assignable_to(predicate)
            }
            _ => false,
        }
    }
}

/// Filter criterion tested against each field's declared type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypePredicate {
    /// Text fields.
    Text,
    /// Numeric fields.
    Number,
    /// Callables with the exact given return type.
    FuncReturning(FieldType),
    /// Any callable, regardless of return type.
    AnyFunc,
    /// Future-valued fields with the exact given payload type.
    DeferredOf(FieldType),
    /// Any future-valued field.
    AnyDeferred,
}

impl TypePredicate {
    /// Parse a predicate from its closed set of tags.
    ///
    /// Accepted tags: `text`, `number`, `func`, `func:text`, `deferred`,
    /// `deferred:number`. Anything else fails with
    /// [`SchemaError::UnknownPredicate`] rather than silently matching
    /// nothing.
    pub fn parse(tag: &str) -> Result<Self, SchemaError> {
        match tag {
            "text" => Ok(TypePredicate::Text),
            "number" => Ok(TypePredicate::Number),
            "func" => Ok(TypePredicate::AnyFunc),
            "func:text" => Ok(TypePredicate::FuncReturning(FieldType::Text)),
            "deferred" => Ok(TypePredicate::AnyDeferred),
            "deferred:number" => Ok(TypePredicate::DeferredOf(FieldType::Number)),
            _ => Err(SchemaError::UnknownPredicate {
                tag: tag.to_string(),
            }),
        }
    }
}

/// One declared field of a shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDesc {
    /// Field name, unique within its shape.
    pub name: String,
    /// Declared value type.
    pub field_type: FieldType,
}

impl FieldDesc {
    /// Build a field descriptor.
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            field_type,
        }
    }
}

/// An immutable record shape description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shape {
    fields: Vec<FieldDesc>,
}

impl Shape {
    /// Build a shape, rejecting duplicate field names.
    pub fn new(fields: Vec<FieldDesc>) -> Result<Self, SchemaError> {
        for (i, field) in fields.iter().enumerate() {
            if fields[..i].iter().any(|prior| prior.name == field.name) {
                return Err(SchemaError::DuplicateField {
                    name: field.name.clone(),
                });
            }
        }
        Ok(Self { fields })
    }

    /// Declared fields in declaration order.
    pub fn fields(&self) -> &[FieldDesc] {
        &self.fields
    }

    /// Look up a field by name.
    pub fn field(&self, name: &str) -> Option<&FieldDesc> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Whether the shape declares `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.field(name).is_some()
    }

    pub(crate) fn index_of(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|field| field.name == name)
    }

    /// Number of declared fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the shape declares no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Derive the sub-shape whose fields are assignable to `predicate`.
    ///
    /// Selection is per-field with no cross-field interaction; declaration
    /// order is kept. Zero matches produce an empty shape, not an error.
    pub fn project(&self, predicate: &TypePredicate) -> Shape {
        let fields: Vec<FieldDesc> = self
            .fields
            .iter()
            .filter(|field| field.field_type.is_assignable_to(predicate))
            .cloned()
            .collect();
        kit_log!(
            log::Level::Debug,
            "shape_project",
            "retained={} total={}",
            fields.len(),
            self.fields.len(),
        );
        Shape { fields }
    }
}

/// Creates a [`Shape`] from literal field declarations, suitable for rapid
/// testing and development.
///
/// ## Example:
///
/// ```
/// use shapekit::{shape, FieldType};
///
/// let shape = shape!(
///     ("foo", FieldType::Text),
///     ("bar", FieldType::Number),
///     ("baz", FieldType::func(FieldType::Text)),
/// );
/// assert_eq!(shape.len(), 3);
/// ```
///
/// Repeating a field name is a construction error and panics here; use
/// [`Shape::new`] to handle it.
#[macro_export]
macro_rules! shape {
    ($(($name:expr, $type:expr)),* $(,)?) => {
        $crate::schema::Shape::new(vec![
            $(
                $crate::schema::FieldDesc::new($name, $type),
            )*
        ])
        .expect("shape! literals must not repeat field names")
    };
}
