//! Logging and tracing facilities for Horizon Grid.
//!
//! Horizon Grid uses the `tracing` crate for instrumentation. To see logs,
//! install a tracing subscriber in your application:
//!
//! ```ignore
//! fn main() {
//!     tracing_subscriber::fmt()
//!         .with_env_filter("horizon_grid::resize=trace,horizon_grid::sort=debug")
//!         .init();
//! }
//! ```
//!
//! Every subsystem logs under its own target (see [`targets`]) so that
//! high-frequency traces such as pointer moves during a column drag can be
//! enabled independently of the rest.

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core framework target.
    pub const CORE: &str = "horizon_grid_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "horizon_grid_core::signal";
    /// Header cell event dispatch.
    pub const HEADER: &str = "horizon_grid::header";
    /// Column resize sessions.
    pub const RESIZE: &str = "horizon_grid::resize";
    /// Sort list transitions.
    pub const SORT: &str = "horizon_grid::sort";
    /// Focus delegation.
    pub const FOCUS: &str = "horizon_grid::focus";
    /// Column reordering by drag and drop.
    pub const REORDER: &str = "horizon_grid::reorder";
    /// Configuration loading.
    pub const CONFIG: &str = "horizon_grid::config";
}

/// Span names used throughout Horizon Grid for tracing.
pub mod span_names {
    /// Header cell event handling span.
    pub const HEADER_EVENT: &str = "horizon_grid::header_event";
    /// Performance measurement span.
    pub const PERF: &str = "horizon_grid::perf";
}

/// A guard that keeps a tracing span entered until dropped.
///
/// This is useful for tracking the duration of operations.
#[derive(Debug)]
pub struct PerfSpan {
    #[allow(dead_code)]
    span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Create a new performance span.
    ///
    /// The span will be active until the guard is dropped.
    pub fn new(name: &'static str) -> Self {
        let span = tracing::info_span!(target: "horizon_grid::perf", "perf", operation = name);
        Self {
            span: span.entered(),
        }
    }
}

/// Macros for common tracing patterns.
///
/// Thin wrappers around the `tracing` macros that take a target from
/// [`targets`] as the first argument.
#[macro_export]
macro_rules! grid_trace {
    ($target:expr, $($arg:tt)*) => {
        ::tracing::trace!(target: $target, $($arg)*)
    };
}

#[macro_export]
macro_rules! grid_debug {
    ($target:expr, $($arg:tt)*) => {
        ::tracing::debug!(target: $target, $($arg)*)
    };
}

#[macro_export]
macro_rules! grid_info {
    ($target:expr, $($arg:tt)*) => {
        ::tracing::info!(target: $target, $($arg)*)
    };
}

#[macro_export]
macro_rules! grid_warn {
    ($target:expr, $($arg:tt)*) => {
        ::tracing::warn!(target: $target, $($arg)*)
    };
}
