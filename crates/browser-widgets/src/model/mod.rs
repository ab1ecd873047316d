//! Row models for browser list widgets.
//!
//! This module holds the data side of the browser's list widgets, separated
//! from anything that draws:
//!
//! - Date-divided lists (history, downloads, recent tabs) that cluster items
//!   under per-day separators, with optional headers and footer
//! - Rich radio option lists with single-choice selection
//!
//! # Core Types
//!
//! - `TimedItem`: The contract for items in a date-divided list
//! - `DateDividedModel`: Flattens groups of items into displayable rows
//! - `Group`, `ItemGroup`, `HeaderItemGroup`: The clusters rows come from
//! - `Entry`, `RowKind`: What a row is
//! - `RowRenderer`: The seam a rendering layer implements
//! - `RadioOptionsModel`: Single-choice selection state
//! - `RowModel`, `ModelSignals`: What views rely on to stay in sync
//!
//! # Architecture Overview
//!
//! ```text
//! ┌──────────────────┐     ┌─────────────┐     ┌─────────────┐
//! │ DateDividedModel │────>│   Signals   │────>│    View     │
//! │   (RowModel)     │     │             │     │             │
//! └──────────────────┘     └─────────────┘     └─────────────┘
//!          │                                          │
//!          │        ┌──────────────────┐              │
//!          └───────>│ bind_row(N, r)   │<─────────────┘
//!                   │ RowRenderer      │
//!                   └──────────────────┘
//! ```
//!
//! Views ask for the row count, bind each visible position through a
//! `RowRenderer`, and listen to the model's signals for updates.

mod config;
mod date_divided;
mod entry;
mod group;
mod radio;
mod renderer;
mod timed_item;
mod traits;

pub use config::{DateDividedConfig, DayBoundary, GroupOrder};
pub use date_divided::DateDividedModel;
pub use entry::{Entry, HeaderKind, RowKind, RowPosition};
pub use group::{Group, HeaderItemGroup, ItemGroup};
pub use radio::{RadioOption, RadioOptionsModel};
pub use renderer::{RowRenderer, TextRowRenderer, date_label};
pub use timed_item::TimedItem;
pub use traits::{ModelSignals, RowModel};
