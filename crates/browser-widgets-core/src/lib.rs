//! Core systems for browser widgets.
//!
//! This crate provides the foundational pieces shared by the widget models:
//!
//! - **Signal/Slot System**: Type-safe change notification for models
//! - **Logging**: `tracing` targets, performance spans and logging macros
//!
//! # Signal/Slot Example
//!
//! ```
//! use browser_widgets_core::Signal;
//!
//! // Create a signal that notifies when rows are removed
//! let rows_removed = Signal::<(usize, usize)>::new();
//!
//! // Connect a slot to handle the signal
//! let conn_id = rows_removed.connect(|(first, last)| {
//!     println!("Rows {first}..={last} removed");
//! });
//!
//! // Emit the signal
//! rows_removed.emit((2, 3));
//!
//! // Disconnect when done
//! rows_removed.disconnect(conn_id);
//! ```

pub mod logging;
pub mod signal;

pub use logging::PerfSpan;
pub use signal::{ConnectionGuard, ConnectionId, Signal};
