//! Groups: the clusters a date-divided list is made of.
//!
//! A [`Group`] contributes a contiguous run of rows to the flattened list.
//! Positions passed to group methods are relative to the start of that run.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::NaiveDate;

use super::entry::{Entry, HeaderKind, RowKind};
use super::timed_item::TimedItem;

/// An ordered cluster of real items, optionally opened by a date separator.
///
/// Groups built by [`DateDividedModel::load_items`](super::DateDividedModel::load_items)
/// are dated: their first row is the date separator. A caller may also build
/// an undated group, which contributes only its item rows.
#[derive(Debug)]
pub struct ItemGroup<T> {
    date: Option<NaiveDate>,
    items: Vec<Arc<T>>,
}

impl<T> Default for ItemGroup<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ItemGroup<T> {
    /// Creates an empty group without a date separator.
    pub fn new() -> Self {
        Self {
            date: None,
            items: Vec::new(),
        }
    }

    /// Creates an empty group for one calendar day.
    pub fn for_date(date: NaiveDate) -> Self {
        Self {
            date: Some(date),
            items: Vec::new(),
        }
    }

    /// The day this group clusters, if it is a date group.
    pub fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    /// The real items, in display order.
    pub fn items(&self) -> &[Arc<T>] {
        &self.items
    }

    /// Number of real items (the date separator is not counted).
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the group holds no real items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Appends an item. The group imposes no ordering of its own.
    pub fn add_item(&mut self, item: Arc<T>) {
        self.items.push(item);
    }

    /// Number of rows this group contributes, including its date separator.
    pub fn item_count(&self) -> usize {
        self.separator_rows() + self.items.len()
    }

    /// Row kind at `index` within the group, or `None` past the end.
    pub fn row_kind(&self, index: usize) -> Option<RowKind> {
        if index >= self.item_count() {
            None
        } else if index < self.separator_rows() {
            Some(RowKind::Date)
        } else {
            Some(RowKind::Normal)
        }
    }

    /// The item at `index` within the group; `None` for the separator row.
    pub fn item_at(&self, index: usize) -> Option<&Arc<T>> {
        index
            .checked_sub(self.separator_rows())
            .and_then(|i| self.items.get(i))
    }

    /// The entry at `index` within the group.
    pub fn entry_at(&self, index: usize) -> Option<Entry<T>> {
        match (self.date, index) {
            (Some(date), 0) => Some(Entry::DateSeparator(date)),
            _ => self.item_at(index).cloned().map(Entry::Item),
        }
    }

    /// Rows that precede the first item (0 or 1).
    pub(crate) fn separator_rows(&self) -> usize {
        usize::from(self.date.is_some())
    }
}

impl<T: TimedItem> ItemGroup<T> {
    /// Inserts an item after every item at least as recent as it.
    ///
    /// Keeps the group sorted newest first while preserving load order among
    /// equal timestamps.
    pub fn insert_by_recency(&mut self, item: Arc<T>) {
        let timestamp = item.timestamp();
        let at = self
            .items
            .partition_point(|existing| existing.timestamp() >= timestamp);
        self.items.insert(at, item);
    }

    /// Index among the real items of the item with this stable id.
    pub fn position_of(&self, stable_id: u64) -> Option<usize> {
        self.items
            .iter()
            .position(|item| item.stable_id() == stable_id)
    }

    /// Returns `true` if an item with this stable id is in the group.
    pub fn contains(&self, stable_id: u64) -> bool {
        self.position_of(stable_id).is_some()
    }

    /// Removes the item with this stable id.
    ///
    /// Returns `None` if the group does not hold it, otherwise whether the
    /// group is now empty of real items.
    pub fn remove_item(&mut self, stable_id: u64) -> Option<bool> {
        let index = self.position_of(stable_id)?;
        self.items.remove(index);
        Some(self.items.is_empty())
    }

    /// Drops items whose stable id is already in `seen` or repeats within
    /// the group. Kept ids are added to `seen`; dropped ids are returned.
    pub(crate) fn retain_unseen(&mut self, seen: &mut HashSet<u64>) -> Vec<u64> {
        let mut dropped = Vec::new();
        self.items.retain(|item| {
            let stable_id = item.stable_id();
            let fresh = seen.insert(stable_id);
            if !fresh {
                dropped.push(stable_id);
            }
            fresh
        });
        dropped
    }
}

/// A group made only of header pseudo-items.
///
/// Header groups never carry a date separator and are never removed because
/// items elsewhere in the list went away.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderItemGroup {
    headers: Vec<HeaderKind>,
}

impl HeaderItemGroup {
    /// Creates a header group with the given headers, in order.
    pub fn new(headers: impl IntoIterator<Item = HeaderKind>) -> Self {
        Self {
            headers: headers.into_iter().collect(),
        }
    }

    /// The headers, in display order.
    pub fn kinds(&self) -> &[HeaderKind] {
        &self.headers
    }

    /// Appends a header.
    pub fn push(&mut self, kind: HeaderKind) {
        self.headers.push(kind);
    }

    /// Removes the first header of this kind. Returns `true` if one was removed.
    pub fn remove(&mut self, kind: HeaderKind) -> bool {
        match self.headers.iter().position(|k| *k == kind) {
            Some(index) => {
                self.headers.remove(index);
                true
            }
            None => false,
        }
    }

    /// Number of header rows.
    pub fn item_count(&self) -> usize {
        self.headers.len()
    }

    /// Row kind at `index` within the group.
    pub fn row_kind(&self, index: usize) -> Option<RowKind> {
        self.headers.get(index).map(|kind| kind.row_kind())
    }
}

/// A cluster of rows in a date-divided list.
#[derive(Debug)]
pub enum Group<T> {
    /// Header pseudo-items.
    Header(HeaderItemGroup),
    /// Real items, optionally under a date separator.
    Items(ItemGroup<T>),
    /// The single footer row. Always the last group of a model.
    Footer,
}

impl<T> Group<T> {
    /// Number of rows this group contributes.
    pub fn item_count(&self) -> usize {
        match self {
            Self::Header(group) => group.item_count(),
            Self::Items(group) => group.item_count(),
            Self::Footer => 1,
        }
    }

    /// Row kind at `index` within the group, or `None` past the end.
    pub fn row_kind(&self, index: usize) -> Option<RowKind> {
        match self {
            Self::Header(group) => group.row_kind(index),
            Self::Items(group) => group.row_kind(index),
            Self::Footer => (index == 0).then_some(RowKind::Footer),
        }
    }

    /// The item at `index` within the group, if that row is an item row.
    pub fn item_at(&self, index: usize) -> Option<&Arc<T>> {
        match self {
            Self::Items(group) => group.item_at(index),
            _ => None,
        }
    }

    /// The entry at `index` within the group.
    pub fn entry_at(&self, index: usize) -> Option<Entry<T>> {
        match self {
            Self::Header(group) => group.kinds().get(index).copied().map(Entry::Header),
            Self::Items(group) => group.entry_at(index),
            Self::Footer => (index == 0).then_some(Entry::Footer),
        }
    }

    /// The item group, if this is one.
    pub fn as_items(&self) -> Option<&ItemGroup<T>> {
        match self {
            Self::Items(group) => Some(group),
            _ => None,
        }
    }

    /// Mutable access to the item group, if this is one.
    pub fn as_items_mut(&mut self) -> Option<&mut ItemGroup<T>> {
        match self {
            Self::Items(group) => Some(group),
            _ => None,
        }
    }

    /// Returns `true` for header groups.
    pub fn is_header(&self) -> bool {
        matches!(self, Self::Header(_))
    }

    /// Returns `true` for the footer group.
    pub fn is_footer(&self) -> bool {
        matches!(self, Self::Footer)
    }
}

impl<T> From<ItemGroup<T>> for Group<T> {
    fn from(group: ItemGroup<T>) -> Self {
        Self::Items(group)
    }
}

impl<T> From<HeaderItemGroup> for Group<T> {
    fn from(group: HeaderItemGroup) -> Self {
        Self::Header(group)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Visit {
        id: u64,
        at: i64,
    }

    impl TimedItem for Visit {
        fn timestamp(&self) -> i64 {
            self.at
        }

        fn stable_id(&self) -> u64 {
            self.id
        }
    }

    fn visit(id: u64, at: i64) -> Arc<Visit> {
        Arc::new(Visit { id, at })
    }

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    }

    #[test]
    fn test_dated_group_counts_separator() {
        let mut group = ItemGroup::for_date(day());
        assert_eq!(group.item_count(), 1);

        group.add_item(visit(1, 10));
        group.add_item(visit(2, 20));

        assert_eq!(group.len(), 2);
        assert_eq!(group.item_count(), 3);
        assert_eq!(group.row_kind(0), Some(RowKind::Date));
        assert_eq!(group.row_kind(1), Some(RowKind::Normal));
        assert_eq!(group.row_kind(3), None);
        assert!(group.item_at(0).is_none());
        assert_eq!(group.item_at(2).map(|v| v.id), Some(2));
    }

    #[test]
    fn test_undated_group_has_no_separator() {
        let mut group = ItemGroup::new();
        group.add_item(visit(1, 10));

        assert_eq!(group.item_count(), 1);
        assert_eq!(group.row_kind(0), Some(RowKind::Normal));
        assert_eq!(group.item_at(0).map(|v| v.id), Some(1));
    }

    #[test]
    fn test_remove_item_reports_emptiness() {
        let mut group = ItemGroup::for_date(day());
        group.add_item(visit(1, 10));
        group.add_item(visit(2, 20));

        assert_eq!(group.remove_item(9), None);
        assert_eq!(group.remove_item(1), Some(false));
        assert_eq!(group.remove_item(2), Some(true));
        assert!(group.is_empty());
        // The separator still counts while the group exists.
        assert_eq!(group.item_count(), 1);
    }

    #[test]
    fn test_retain_unseen_drops_known_and_repeated_ids() {
        let mut group = ItemGroup::for_date(day());
        group.add_item(visit(1, 10));
        group.add_item(visit(2, 20));
        group.add_item(visit(3, 30));
        group.add_item(visit(3, 40));

        let mut seen = HashSet::from([2]);
        assert_eq!(group.retain_unseen(&mut seen), vec![2, 3]);

        let ids: Vec<u64> = group.items().iter().map(|v| v.id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert_eq!(group.items()[1].at, 30);
        assert_eq!(seen, HashSet::from([1, 2, 3]));
    }

    #[test]
    fn test_insert_by_recency_is_stable() {
        let mut group = ItemGroup::new();
        group.insert_by_recency(visit(1, 50));
        group.insert_by_recency(visit(2, 80));
        group.insert_by_recency(visit(3, 50));
        group.insert_by_recency(visit(4, 10));

        let ids: Vec<u64> = group.items().iter().map(|v| v.id).collect();
        assert_eq!(ids, vec![2, 1, 3, 4]);
    }

    #[test]
    fn test_header_group() {
        let mut headers = HeaderItemGroup::new([HeaderKind::Standard]);
        headers.push(HeaderKind::Persistent);

        let group: Group<Visit> = headers.clone().into();
        assert_eq!(group.item_count(), 2);
        assert_eq!(group.row_kind(0), Some(RowKind::StandardHeader));
        assert_eq!(group.row_kind(1), Some(RowKind::PersistentHeader));
        assert!(group.item_at(0).is_none());
        assert!(group.is_header());

        assert!(headers.remove(HeaderKind::Standard));
        assert!(!headers.remove(HeaderKind::Standard));
        assert_eq!(headers.kinds(), &[HeaderKind::Persistent]);
    }

    #[test]
    fn test_footer_group() {
        let group = Group::<Visit>::Footer;
        assert_eq!(group.item_count(), 1);
        assert_eq!(group.row_kind(0), Some(RowKind::Footer));
        assert_eq!(group.row_kind(1), None);
        assert!(matches!(group.entry_at(0), Some(Entry::Footer)));
        assert!(group.is_footer());
    }
}
