#![deny(missing_docs)]
//! Runtime building blocks for working with record shapes.
//!
//! `shapekit` keeps a record's declared shape (field names and value-type
//! tags) as a first-class runtime value. Shapes can be filtered by a type
//! predicate into derived shapes, concrete records are validated against
//! their shape, heterogeneous record sequences partition by structural
//! presence or by an explicit discriminant, and deferred computations
//! compose with strict per-chain ordering.

mod logging;

/// Shape descriptions and type-driven field selection.
pub mod schema;

/// Concrete records, read-only views, and partitioning.
pub mod record;

/// Deferred values, report composition, and output sinks.
#[cfg(feature = "tokio")]
pub mod task;

pub use crate::{
    record::{
        narrow, partition_by_field, partition_by_tag, FieldValue, FrozenRecord, Record,
        RecordError, RecordView, Tagged,
    },
    schema::{FieldDesc, FieldType, SchemaError, Shape, TypePredicate},
};
#[cfg(feature = "tokio")]
pub use crate::task::{
    delayed, join_delayed_text, multiply_add_delayed, run_report, ChannelSink, Delayed,
    OutputSink, ReportOption, StdoutSink,
};
