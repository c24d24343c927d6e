use std::sync::Arc;

use super::{FieldValue, FrozenRecord, RecordError};
use crate::{
    logging::kit_log,
    schema::{FieldType, Shape},
};

/// A concrete record instance conforming to a [`Shape`].
///
/// Values are stored in shape order; every declared field is present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    shape: Arc<Shape>,
    values: Vec<FieldValue>,
}

impl Record {
    /// Validate `values` against `shape` and build the record.
    ///
    /// Every declared field must be supplied a value of the declared type.
    /// Shapes declaring callable or deferred fields describe permitted
    /// operations only and have no runtime instances.
    pub fn new<I, S>(shape: Arc<Shape>, values: I) -> Result<Self, RecordError>
    where
        I: IntoIterator<Item = (S, FieldValue)>,
        S: Into<String>,
    {
        if let Some(field) = shape.fields().iter().find(|field| {
            matches!(
                field.field_type,
                FieldType::Func(_) | FieldType::Deferred(_)
            )
        }) {
            return Err(RecordError::Unrepresentable {
                name: field.name.clone(),
                declared: field.field_type.clone(),
            });
        }

        let mut slots: Vec<Option<FieldValue>> = vec![None; shape.len()];
        for (name, value) in values {
            let name = name.into();
            let Some(idx) = shape.index_of(&name) else {
                kit_log!(log::Level::Warn, "record_reject", "undeclared field {}", name);
                return Err(RecordError::UnknownField { name });
            };
            let declared = &shape.fields()[idx].field_type;
            if value.field_type() != *declared {
                return Err(RecordError::TypeMismatch {
                    name,
                    declared: declared.clone(),
                    actual: value.field_type(),
                });
            }
            slots[idx] = Some(value);
        }

        let mut out = Vec::with_capacity(slots.len());
        for (slot, field) in slots.into_iter().zip(shape.fields()) {
            match slot {
                Some(value) => out.push(value),
                None => {
                    return Err(RecordError::MissingField {
                        name: field.name.clone(),
                    })
                }
            }
        }
        Ok(Self { shape, values: out })
    }

    /// Shape this record conforms to.
    pub fn shape(&self) -> &Arc<Shape> {
        &self.shape
    }

    /// Value of the named field, if declared.
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.shape.index_of(name).map(|idx| &self.values[idx])
    }

    /// Structural presence test used by partitioning.
    pub fn has_field(&self, name: &str) -> bool {
        self.shape.contains(name)
    }

    /// Iterate `(name, value)` pairs in shape order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.shape
            .fields()
            .iter()
            .zip(&self.values)
            .map(|(desc, value)| (desc.name.as_str(), value))
    }

    /// Type-checked field write.
    pub fn set(&mut self, name: &str, value: FieldValue) -> Result<(), RecordError> {
        let Some(idx) = self.shape.index_of(name) else {
            return Err(RecordError::UnknownField {
                name: name.to_string(),
            });
        };
        let declared = &self.shape.fields()[idx].field_type;
        if value.field_type() != *declared {
            return Err(RecordError::TypeMismatch {
                name: name.to_string(),
                declared: declared.clone(),
                actual: value.field_type(),
            });
        }
        self.values[idx] = value;
        Ok(())
    }

    /// Borrowed read-only view over all fields.
    ///
    /// Zero-cost: enforcement is the absence of any write surface on the
    /// view type, with no runtime artifact. The record stays mutable through
    /// the original binding once the view is dropped.
    pub fn view(&self) -> RecordView<'_> {
        RecordView {
            record: self,
            indices: (0..self.values.len()).collect(),
        }
    }

    /// Restrict this record to the fields of a derived shape.
    ///
    /// Every field of `shape` must be declared on this record.
    pub fn project(&self, shape: &Shape) -> Result<RecordView<'_>, RecordError> {
        let mut indices = Vec::with_capacity(shape.len());
        for field in shape.fields() {
            let Some(idx) = self.shape.index_of(&field.name) else {
                return Err(RecordError::UnknownField {
                    name: field.name.clone(),
                });
            };
            indices.push(idx);
        }
        Ok(RecordView {
            record: self,
            indices,
        })
    }

    /// Wrap this record in a runtime-enforced read-only wrapper.
    pub fn freeze(self) -> FrozenRecord {
        FrozenRecord::new(self)
    }
}

/// Borrowed, read-only projection of a [`Record`].
#[derive(Debug, Clone)]
pub struct RecordView<'a> {
    record: &'a Record,
    indices: Vec<usize>,
}

impl<'a> RecordView<'a> {
    /// Value of the named field, if it is part of the view.
    pub fn get(&self, name: &str) -> Option<&'a FieldValue> {
        let idx = self.record.shape.index_of(name)?;
        self.indices
            .contains(&idx)
            .then(|| &self.record.values[idx])
    }

    /// Field names visible through the view, in shape order.
    pub fn names(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.indices
            .iter()
            .map(|&idx| self.record.shape.fields()[idx].name.as_str())
    }

    /// Number of visible fields.
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Whether the view exposes no fields.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}
