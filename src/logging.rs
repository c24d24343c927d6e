//! Internal logging helpers for structured shapekit events.

/// Single logging target for shapekit.
pub(crate) const LOG_TARGET: &str = "shapekit";

macro_rules! kit_log {
    ($level:expr, $event:expr, $fmt:expr $(, $args:expr)* $(,)?) => {{
        if log::log_enabled!(target: crate::logging::LOG_TARGET, $level) {
            log::log!(
                target: crate::logging::LOG_TARGET,
                $level,
                "event={} {}",
                $event,
                format_args!($fmt $(, $args)*)
            );
        }
    }};
}

pub(crate) use kit_log;
