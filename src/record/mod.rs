//! Concrete records and the operations defined over sequences of them.

/// Record construction and mutation errors.
pub mod error;
mod frozen;
mod instance;
mod partition;
mod value;

pub use error::RecordError;
pub use frozen::FrozenRecord;
pub use instance::{Record, RecordView};
pub use partition::{narrow, partition_by_field, partition_by_tag, Tagged};
pub use value::FieldValue;
