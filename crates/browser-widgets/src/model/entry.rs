//! Row classification for the flattened list.

use std::fmt;
use std::sync::Arc;

use chrono::NaiveDate;

/// The kind of a header pseudo-item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeaderKind {
    /// A header that belongs to the list content (e.g. a privacy disclaimer).
    Standard,
    /// A header that stays even when the list has no items (e.g. a
    /// "clear browsing data" button).
    Persistent,
}

impl HeaderKind {
    /// The row kind used to render this header.
    pub fn row_kind(self) -> RowKind {
        match self {
            Self::Standard => RowKind::StandardHeader,
            Self::Persistent => RowKind::PersistentHeader,
        }
    }
}

/// The view type of a flattened row.
///
/// Adapters switch on this to decide which kind of row view to create.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowKind {
    /// A [`HeaderKind::Standard`] header row.
    StandardHeader,
    /// A [`HeaderKind::Persistent`] header row.
    PersistentHeader,
    /// The date separator that opens a day group.
    Date,
    /// A real item.
    Normal,
    /// The footer row (e.g. "load more").
    Footer,
}

impl RowKind {
    /// Returns `true` for rows backed by a real item.
    pub fn is_item(self) -> bool {
        matches!(self, Self::Normal)
    }
}

impl fmt::Display for RowKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::StandardHeader => "STANDARD_HEADER",
            Self::PersistentHeader => "PERSISTENT_HEADER",
            Self::Date => "DATE",
            Self::Normal => "NORMAL",
            Self::Footer => "FOOTER",
        };
        f.write_str(name)
    }
}

/// One flattened, displayable row.
#[derive(Debug)]
pub enum Entry<T> {
    /// A header pseudo-item.
    Header(HeaderKind),
    /// The date separator of a day group.
    DateSeparator(NaiveDate),
    /// A real item, shared with the caller.
    Item(Arc<T>),
    /// The footer pseudo-item.
    Footer,
}

impl<T> Entry<T> {
    /// The view type of this row.
    pub fn kind(&self) -> RowKind {
        match self {
            Self::Header(kind) => kind.row_kind(),
            Self::DateSeparator(_) => RowKind::Date,
            Self::Item(_) => RowKind::Normal,
            Self::Footer => RowKind::Footer,
        }
    }

    /// The item behind this row, if it is an item row.
    pub fn item(&self) -> Option<&Arc<T>> {
        match self {
            Self::Item(item) => Some(item),
            _ => None,
        }
    }
}

impl<T> Clone for Entry<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Header(kind) => Self::Header(*kind),
            Self::DateSeparator(date) => Self::DateSeparator(*date),
            Self::Item(item) => Self::Item(Arc::clone(item)),
            Self::Footer => Self::Footer,
        }
    }
}

/// Where an item row sits inside its group.
///
/// Renderers use the first/last flags to round the corners of a group's card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowPosition {
    /// The flattened position of the row.
    pub row: usize,
    /// Index of the owning group in the model's group sequence.
    pub group: usize,
    /// Index of the item among the group's items (separator excluded).
    pub index_in_group: usize,
    /// The item is the first item of its group.
    pub is_first_in_group: bool,
    /// The item is the last item of its group.
    pub is_last_in_group: bool,
}
