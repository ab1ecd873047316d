//! Commonly used types, for glob import.
//!
//! ```
//! use browser_widgets::prelude::*;
//! ```

pub use crate::error::{Error, Result};
pub use crate::model::{
    DateDividedConfig, DateDividedModel, DayBoundary, Entry, Group, GroupOrder, HeaderItemGroup,
    HeaderKind, ItemGroup, RadioOption, RadioOptionsModel, RowKind, RowModel, RowPosition,
    RowRenderer, TextRowRenderer, TimedItem,
};
pub use browser_widgets_core::{ConnectionId, Signal};
