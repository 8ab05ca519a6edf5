//! logging macros for objfilter
//!
//! all events go through `tracing` under the "objfilter" target and carry a
//! `component` and a snake_case `event` field. the library never installs a
//! subscriber; hosts wire one up with `tracing_subscriber` or similar.

/// target for all objfilter log events
pub(crate) const OBJFILTER_TARGET: &str = "objfilter";

/// trace-level event, used per evaluated node
macro_rules! log_trace {
    ($($field:tt)*) => {
        ::tracing::trace!(target: $crate::observability::OBJFILTER_TARGET, $($field)*)
    };
}

/// debug-level event
macro_rules! log_debug {
    ($($field:tt)*) => {
        ::tracing::debug!(target: $crate::observability::OBJFILTER_TARGET, $($field)*)
    };
}

/// warn-level event
macro_rules! log_warn {
    ($($field:tt)*) => {
        ::tracing::warn!(target: $crate::observability::OBJFILTER_TARGET, $($field)*)
    };
}

pub(crate) use log_debug;
pub(crate) use log_trace;
pub(crate) use log_warn;
