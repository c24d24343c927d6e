use super::{FieldValue, Record, RecordError, RecordView};

/// Runtime-enforced read-only wrapper around a [`Record`].
///
/// Reads pass through; every write attempt fails with
/// [`RecordError::Frozen`] and leaves the wrapped record untouched.
/// Freezing takes ownership, so no alias obtained beforehand can keep
/// mutating the record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrozenRecord {
    inner: Record,
}

impl FrozenRecord {
    pub(crate) fn new(inner: Record) -> Self {
        Self { inner }
    }

    /// Value of the named field, if declared.
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.inner.get(name)
    }

    /// Structural presence test.
    pub fn has_field(&self, name: &str) -> bool {
        self.inner.has_field(name)
    }

    /// Iterate `(name, value)` pairs in shape order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.inner.fields()
    }

    /// Borrowed view over the frozen record.
    pub fn view(&self) -> RecordView<'_> {
        self.inner.view()
    }

    /// Rejected write; always fails with [`RecordError::Frozen`].
    pub fn set(&mut self, _name: &str, _value: FieldValue) -> Result<(), RecordError> {
        Err(RecordError::Frozen)
    }

    /// Unwrap, restoring mutability to whoever owns the result.
    pub fn thaw(self) -> Record {
        self.inner
    }
}
