//! Browser widgets: the data layer of the browser's list widgets.
//!
//! The crate models what a history or downloads list shows, row by row,
//! without tying it to any toolkit. A view asks a model how many rows there
//! are, binds each visible row through a [`model::RowRenderer`], and listens
//! to the model's signals to stay in sync.
//!
//! # Quick Start
//!
//! ```
//! use std::sync::Arc;
//! use browser_widgets::prelude::*;
//!
//! struct Download {
//!     id: u64,
//!     file_name: String,
//!     finished_at_ms: i64,
//! }
//!
//! impl TimedItem for Download {
//!     fn timestamp(&self) -> i64 {
//!         self.finished_at_ms
//!     }
//!
//!     fn stable_id(&self) -> u64 {
//!         self.id
//!     }
//! }
//!
//! let config = DateDividedConfig::new().with_day_boundary(DayBoundary::UTC);
//! let mut downloads = DateDividedModel::with_config(config)?;
//! downloads.set_headers([HeaderKind::Persistent]);
//! downloads.load_items([Arc::new(Download {
//!     id: 1,
//!     file_name: "report.pdf".into(),
//!     finished_at_ms: 0,
//! })]);
//!
//! let today = chrono::NaiveDate::from_ymd_opt(1970, 1, 1).unwrap();
//! let mut renderer = TextRowRenderer::new(today, |d: &Download| d.file_name.clone());
//! assert_eq!(
//!     downloads.render_rows(&mut renderer)?,
//!     vec!["[persistent header]", "Today", "─ report.pdf"]
//! );
//! # Ok::<(), browser_widgets::Error>(())
//! ```
//!
//! # Modules
//!
//! - [`model`]: Date-divided lists, radio options, rendering seam
//! - [`error`]: Error and result types
//!
//! Signals and logging targets live in the `browser_widgets_core` crate.

pub mod error;
pub mod model;
pub mod prelude;

pub use error::{Error, Result};
