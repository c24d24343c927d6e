//! Report computations composed from delayed values.

use futures_util::future::join;

use super::{delayed, OutputSink, ReportOption};
use crate::logging::kit_log;

/// Resolve each part after `opt.wait` and join the results in input order.
///
/// The parts are awaited strictly one after another, so the total latency is
/// one wait period per part.
pub async fn join_delayed_text(parts: &[String], opt: &ReportOption) -> String {
    let mut resolved = Vec::with_capacity(parts.len());
    for part in parts {
        resolved.push(delayed(part.clone(), opt.wait).await);
    }
    resolved.join(&opt.separator)
}

/// Resolve `(a * b) + c` where every operand arrives after `opt.wait`.
///
/// Operands are awaited strictly in order, left to right.
pub async fn multiply_add_delayed(a: i64, b: i64, c: i64, opt: &ReportOption) -> i64 {
    delayed(a, opt.wait).await * delayed(b, opt.wait).await + delayed(c, opt.wait).await
}

/// Run both report computations concurrently and write one line per
/// computation to `sink`: the numeric total, then the joined text.
///
/// The computations are started without awaiting one another and only meet
/// again when both are done, so the report completes after the longest
/// single chain of waits rather than their sum.
pub async fn run_report<S: OutputSink>(sink: &mut S, opt: &ReportOption) {
    let (factor_a, factor_b, addend) = opt.factors;
    let (total, sentence) = join(
        multiply_add_delayed(factor_a, factor_b, addend, opt),
        join_delayed_text(&opt.text_parts, opt),
    )
    .await;
    kit_log!(
        log::Level::Debug,
        "report_done",
        "parts={} total={}",
        opt.text_parts.len(),
        total,
    );
    sink.write_line(&total.to_string());
    sink.write_line(&sentence);
}
