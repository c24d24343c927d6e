//! Deferred values and report composition.
//!
//! A [`Delayed`] value resolves after a fixed wait. Report computations
//! await their delayed inputs strictly in order, while sibling computations
//! are started without awaiting one another, so they interleave and the
//! whole report finishes after the longest single chain of waits.

mod delay;
mod option;
mod report;
mod sink;

pub use delay::{delayed, Delayed};
pub use option::ReportOption;
pub use report::{join_delayed_text, multiply_add_delayed, run_report};
pub use sink::{ChannelSink, OutputSink, StdoutSink};
