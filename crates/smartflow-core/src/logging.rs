//! Logging facilities for SmartFlow.
//!
//! SmartFlow uses the `tracing` crate for instrumentation. Nothing is printed
//! unless the application installs a subscriber:
//!
//! ```ignore
//! fn main() {
//!     tracing_subscriber::fmt()
//!         .with_env_filter("smartflow=debug")
//!         .init();
//! }
//! ```
//!
//! Registration calls log at trace level. Layout and minimum-size passes log
//! at debug level and run inside a [`PerfSpan`].

/// Span names used throughout SmartFlow for tracing.
pub mod span_names {
    /// Placement pass span.
    pub const LAYOUT: &str = "smartflow::layout";
    /// Minimum-size pass span.
    pub const MIN_SIZE: &str = "smartflow::min_size";
}

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core crate target.
    pub const CORE: &str = "smartflow_core";
    /// Row layout engine target.
    pub const LAYOUT: &str = "smartflow::layout";
    /// Container wrapper target.
    pub const CONTAINER: &str = "smartflow::container";
    /// Configuration loading target.
    pub const CONFIG: &str = "smartflow::config";
    /// Performance spans target.
    pub const PERF: &str = "smartflow::perf";
}

/// A guard that keeps a tracing span entered until dropped.
///
/// This is used to track the duration of layout passes.
#[derive(Debug)]
pub struct PerfSpan {
    #[allow(dead_code)]
    span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Create and enter a new performance span.
    pub fn new(name: &'static str) -> Self {
        let span = tracing::info_span!(target: "smartflow::perf", "perf", operation = name);
        Self {
            span: span.entered(),
        }
    }
}

/// Trace-level logging with the layout target.
#[macro_export]
macro_rules! flow_trace {
    ($($arg:tt)*) => {
        tracing::trace!(target: "smartflow::layout", $($arg)*)
    };
}

/// Debug-level logging with the layout target.
#[macro_export]
macro_rules! flow_debug {
    ($($arg:tt)*) => {
        tracing::debug!(target: "smartflow::layout", $($arg)*)
    };
}

/// Warn-level logging with the layout target.
#[macro_export]
macro_rules! flow_warn {
    ($($arg:tt)*) => {
        tracing::warn!(target: "smartflow::layout", $($arg)*)
    };
}
