//! Logging facilities for browser widgets.
//!
//! Browser widgets use the `tracing` crate for instrumentation. The libraries
//! never install a subscriber; to see logs, install one in the host
//! application:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("browser_widgets=debug")
//!     .init();
//! ```
//!
//! Every event is tagged with one of the [`targets`] so a host can filter by
//! subsystem, e.g. `RUST_LOG=browser_widgets::model=trace`.

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Signal/slot system target.
    pub const SIGNAL: &str = "browser_widgets_core::signal";
    /// List model target (grouping, flattening, row removal).
    pub const MODEL: &str = "browser_widgets::model";
    /// Selection state target (radio options).
    pub const SELECTION: &str = "browser_widgets::selection";
    /// Performance spans.
    pub const PERF: &str = "browser_widgets::perf";
}

/// A guard that keeps a tracing span entered until dropped.
///
/// Wrap bulk operations (loading a page of history items, re-rendering every
/// row) to get their duration in a timing-aware subscriber.
#[derive(Debug)]
pub struct PerfSpan {
    _span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Create and enter a new performance span.
    pub fn new(name: &'static str) -> Self {
        let span = tracing::info_span!(target: targets::PERF, "perf", operation = name);
        Self {
            _span: span.entered(),
        }
    }
}
