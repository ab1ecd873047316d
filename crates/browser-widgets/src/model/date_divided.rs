//! Date-divided list model.
//!
//! `DateDividedModel<T>` turns a flat collection of timestamped items into
//! the row sequence of a history-style list: optional headers, then one
//! cluster per calendar day opened by a date separator, then an optional
//! footer.
//!
//! ```text
//! row  kind               group
//!  0   STANDARD_HEADER    Header
//!  1   DATE  (Mar 2)      Items(2024-03-02)
//!  2   NORMAL  visit #7   Items(2024-03-02)
//!  3   NORMAL  visit #6   Items(2024-03-02)
//!  4   DATE  (Mar 1)      Items(2024-03-01)
//!  5   NORMAL  visit #3   Items(2024-03-01)
//!  6   FOOTER             Footer
//! ```
//!
//! Row positions are never stored on items. The model keeps the start row of
//! every group in a prefix table that is rebuilt after each mutation, so a
//! position lookup is a binary search over groups.

use std::collections::HashSet;
use std::sync::Arc;

use browser_widgets_core::PerfSpan;
use browser_widgets_core::logging::targets;
use chrono::NaiveDate;

use super::config::{DateDividedConfig, GroupOrder};
use super::entry::{Entry, HeaderKind, RowKind, RowPosition};
use super::group::{Group, HeaderItemGroup, ItemGroup};
use super::renderer::RowRenderer;
use super::timed_item::TimedItem;
use super::traits::{ModelSignals, RowModel};
use crate::error::{Error, Result};

/// Groups plus the derived row numbering.
struct GroupLayout<T> {
    groups: Vec<Group<T>>,
    /// `row_starts[i]` is the flattened position of the first row of group `i`.
    row_starts: Vec<usize>,
    row_count: usize,
}

impl<T> GroupLayout<T> {
    fn new() -> Self {
        Self {
            groups: Vec::new(),
            row_starts: Vec::new(),
            row_count: 0,
        }
    }

    fn rebuild(&mut self) {
        self.row_starts.clear();
        let mut next = 0;
        for group in &self.groups {
            self.row_starts.push(next);
            next += group.item_count();
        }
        self.row_count = next;
    }

    /// Index at which new non-footer groups go.
    fn insertion_index(&self) -> usize {
        match self.groups.last() {
            Some(Group::Footer) => self.groups.len() - 1,
            _ => self.groups.len(),
        }
    }

    /// Flattened row that a group inserted at `index` would start at.
    fn start_of(&self, index: usize) -> usize {
        self.row_starts.get(index).copied().unwrap_or(self.row_count)
    }

    fn insert_group(&mut self, index: usize, group: Group<T>) {
        self.groups.insert(index, group);
        self.rebuild();
    }

    fn remove_group(&mut self, index: usize) -> Group<T> {
        let group = self.groups.remove(index);
        self.rebuild();
        group
    }

    /// Owning group and offset within it for a flattened position.
    fn locate(&self, position: usize) -> Result<(usize, usize)> {
        if position >= self.row_count {
            return Err(Error::invalid_position(position, self.row_count));
        }
        // Empty groups share their start with the next group; the last group
        // starting at or before `position` is the one that owns it.
        let group = self.row_starts.partition_point(|&start| start <= position) - 1;
        Ok((group, position - self.row_starts[group]))
    }

    fn date_group_index(&self, date: NaiveDate) -> Option<usize> {
        self.groups.iter().position(|group| {
            group
                .as_items()
                .is_some_and(|items| items.date() == Some(date))
        })
    }

    fn clear(&mut self) {
        self.groups.clear();
        self.rebuild();
    }
}

impl<T: TimedItem> GroupLayout<T> {
    /// Group index and item index of the item with this stable id.
    fn find(&self, stable_id: u64) -> Option<(usize, usize)> {
        self.groups.iter().enumerate().find_map(|(g, group)| {
            group
                .as_items()
                .and_then(|items| items.position_of(stable_id))
                .map(|i| (g, i))
        })
    }

    fn stable_ids(&self) -> HashSet<u64> {
        self.groups
            .iter()
            .filter_map(Group::as_items)
            .flat_map(|group| group.items().iter().map(|item| item.stable_id()))
            .collect()
    }

    /// Buckets items into day groups. Returns (loaded, skipped, groups created).
    fn load<I>(&mut self, items: I, config: &DateDividedConfig) -> (usize, usize, usize)
    where
        I: IntoIterator<Item = Arc<T>>,
    {
        let mut seen = self.stable_ids();
        let (mut loaded, mut skipped, mut created) = (0, 0, 0);

        for item in items {
            let stable_id = item.stable_id();
            if !seen.insert(stable_id) {
                tracing::warn!(target: targets::MODEL, stable_id, "skipping item with duplicate stable id");
                skipped += 1;
                continue;
            }

            let day = config.day_boundary.day_of(item.timestamp());
            let group_index = match self.date_group_index(day) {
                Some(index) => index,
                None => {
                    let index = match config.order {
                        GroupOrder::Preserve => self.insertion_index(),
                        GroupOrder::NewestFirst => self.newest_first_index(day),
                    };
                    self.groups.insert(index, Group::Items(ItemGroup::for_date(day)));
                    tracing::debug!(target: targets::MODEL, %day, index, "created date group");
                    created += 1;
                    index
                }
            };

            if let Some(group) = self.groups[group_index].as_items_mut() {
                match config.order {
                    GroupOrder::Preserve => group.add_item(item),
                    GroupOrder::NewestFirst => group.insert_by_recency(item),
                }
                loaded += 1;
            }
        }

        self.rebuild();
        (loaded, skipped, created)
    }

    /// Where a new day group goes to keep dated groups newest first.
    fn newest_first_index(&self, day: NaiveDate) -> usize {
        self.groups
            .iter()
            .position(|group| match group {
                Group::Items(items) => items.date().is_some_and(|d| d < day),
                Group::Footer => true,
                Group::Header(_) => false,
            })
            .unwrap_or(self.groups.len())
    }
}

/// A list model that clusters timestamped items under per-day separators.
///
/// All mutation goes through `&mut self` and every query is answered from the
/// current groups, so repeated queries without mutation return identical
/// results. Misuse (a position past the end, removing an unknown item) is
/// reported as an [`Error`] rather than clamped.
///
/// # Signals
///
/// - `rows_about_to_be_inserted` / `rows_inserted`: [`add_group`](Self::add_group), footer added
/// - `rows_about_to_be_removed` / `rows_removed`: [`remove_item`](Self::remove_item), footer removed
/// - `model_about_to_reset` / `model_reset`: [`load_items`](Self::load_items),
///   [`set_headers`](Self::set_headers), [`clear`](Self::clear)
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use browser_widgets::model::{
///     DateDividedConfig, DateDividedModel, DayBoundary, HeaderItemGroup, HeaderKind, RowKind,
///     TimedItem,
/// };
///
/// struct Visit(u64, i64);
///
/// impl TimedItem for Visit {
///     fn timestamp(&self) -> i64 { self.1 }
///     fn stable_id(&self) -> u64 { self.0 }
/// }
///
/// let config = DateDividedConfig::new().with_day_boundary(DayBoundary::UTC);
/// let mut model = DateDividedModel::with_config(config).unwrap();
/// model.add_group(HeaderItemGroup::new([HeaderKind::Standard]));
/// model.load_items([Arc::new(Visit(1, 1_000)), Arc::new(Visit(2, 2_000))]);
///
/// assert_eq!(model.row_count(), 4);
/// assert_eq!(model.row_kind(1).unwrap(), RowKind::Date);
///
/// model.remove_by_id(1).unwrap();
/// assert_eq!(model.row_count(), 3);
/// ```
pub struct DateDividedModel<T> {
    layout: GroupLayout<T>,
    config: DateDividedConfig,
    signals: ModelSignals,
}

impl<T> Default for DateDividedModel<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Debug for DateDividedModel<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DateDividedModel")
            .field("groups", &self.layout.groups.len())
            .field("row_count", &self.layout.row_count)
            .field("config", &self.config)
            .finish()
    }
}

impl<T> DateDividedModel<T> {
    /// Creates an empty model with the default configuration.
    pub fn new() -> Self {
        Self {
            layout: GroupLayout::new(),
            config: DateDividedConfig::default(),
            signals: ModelSignals::new(),
        }
    }

    /// Creates an empty model with the given configuration.
    pub fn with_config(config: DateDividedConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            ..Self::new()
        })
    }

    /// The model's configuration.
    pub fn config(&self) -> &DateDividedConfig {
        &self.config
    }

    /// The groups, in display order.
    pub fn groups(&self) -> &[Group<T>] {
        &self.layout.groups
    }

    /// Total number of flattened rows across all groups.
    pub fn row_count(&self) -> usize {
        self.layout.row_count
    }

    /// Replaces the list header with a single header group of these kinds.
    ///
    /// An empty iterator removes the header.
    pub fn set_headers(&mut self, kinds: impl IntoIterator<Item = HeaderKind>) {
        let headers = HeaderItemGroup::new(kinds);
        let layout = &mut self.layout;
        self.signals.emit_reset(|| {
            layout.groups.retain(|group| !group.is_header());
            if headers.item_count() > 0 {
                layout.groups.insert(0, Group::Header(headers));
            }
            layout.rebuild();
        });
    }

    /// Returns `true` if any header row is shown.
    pub fn has_list_header(&self) -> bool {
        self.layout
            .groups
            .iter()
            .any(|group| group.is_header() && group.item_count() > 0)
    }

    /// Shows or hides the footer row, which is always the last row.
    pub fn set_footer(&mut self, show: bool) {
        if show == self.has_footer() {
            return;
        }

        let layout = &mut self.layout;
        if show {
            let row = layout.row_count;
            self.signals.emit_rows_inserted(row, row, || {
                let end = layout.groups.len();
                layout.insert_group(end, Group::Footer);
            });
        } else {
            let row = layout.row_count - 1;
            self.signals.emit_rows_removed(row, row, || {
                let last = layout.groups.len() - 1;
                layout.remove_group(last);
            });
        }
    }

    /// Returns `true` if the footer row is shown.
    pub fn has_footer(&self) -> bool {
        matches!(self.layout.groups.last(), Some(Group::Footer))
    }

    /// Removes every group, headers and footer included.
    pub fn clear(&mut self) {
        let layout = &mut self.layout;
        self.signals.emit_reset(|| layout.clear());
    }

    /// Row kind of the flattened row at `position`.
    pub fn row_kind(&self, position: usize) -> Result<RowKind> {
        let (group, offset) = self.layout.locate(position)?;
        self.layout.groups[group]
            .row_kind(offset)
            .ok_or_else(|| Error::invalid_position(position, self.row_count()))
    }

    /// The owning group of the row at `position`, and its item if the row is
    /// an item row.
    pub fn item_at(&self, position: usize) -> Result<(&Group<T>, Option<&Arc<T>>)> {
        let (group, offset) = self.layout.locate(position)?;
        let group = &self.layout.groups[group];
        Ok((group, group.item_at(offset)))
    }

    /// The entry shown at `position`.
    pub fn entry_at(&self, position: usize) -> Result<Entry<T>> {
        let (group, offset) = self.layout.locate(position)?;
        self.layout.groups[group]
            .entry_at(offset)
            .ok_or_else(|| Error::invalid_position(position, self.row_count()))
    }

    /// Placement of the item row at `position` within its group.
    ///
    /// Returns `Ok(None)` for header, separator and footer rows.
    pub fn row_position(&self, position: usize) -> Result<Option<RowPosition>> {
        let (group, offset) = self.layout.locate(position)?;
        let Some(items) = self.layout.groups[group].as_items() else {
            return Ok(None);
        };
        let Some(index_in_group) = offset.checked_sub(items.separator_rows()) else {
            return Ok(None);
        };
        Ok(Some(RowPosition {
            row: position,
            group,
            index_in_group,
            is_first_in_group: index_in_group == 0,
            is_last_in_group: index_in_group + 1 == items.len(),
        }))
    }

    /// Hands the row at `position` to a renderer.
    pub fn bind_row<R>(&self, position: usize, renderer: &mut R) -> Result<R::Row>
    where
        R: RowRenderer<T>,
    {
        let entry = self.entry_at(position)?;
        Ok(match entry {
            Entry::Header(kind) => renderer.header(kind),
            Entry::DateSeparator(date) => renderer.date(date),
            Entry::Footer => renderer.footer(),
            Entry::Item(item) => {
                let placement = self
                    .row_position(position)?
                    .ok_or_else(|| Error::invalid_position(position, self.row_count()))?;
                renderer.item(&item, placement)
            }
        })
    }

    /// Renders every row in order, stopping at the first row that fails to
    /// bind.
    pub fn render_rows<R>(&self, renderer: &mut R) -> Result<Vec<R::Row>>
    where
        R: RowRenderer<T>,
    {
        let _span = PerfSpan::new("date_divided::render_rows");
        (0..self.row_count())
            .map(|row| self.bind_row(row, renderer))
            .collect()
    }
}

impl<T: TimedItem> DateDividedModel<T> {
    /// Appends a group after the existing groups (before the footer, if any).
    ///
    /// Items whose stable id is already in the model, or repeats within the
    /// group, are skipped as in [`load_items`](Self::load_items). A dated
    /// group left with no items is not added. Adding [`Group::Footer`] is the
    /// same as `set_footer(true)`.
    pub fn add_group(&mut self, group: impl Into<Group<T>>) {
        let mut group = group.into();
        if group.is_footer() {
            self.set_footer(true);
            return;
        }

        if let Some(items) = group.as_items_mut() {
            let mut seen = self.layout.stable_ids();
            for stable_id in items.retain_unseen(&mut seen) {
                tracing::warn!(target: targets::MODEL, stable_id, "skipping item with duplicate stable id");
            }
            if let Some(date) = items.date().filter(|_| items.is_empty()) {
                tracing::debug!(target: targets::MODEL, %date, "not adding empty date group");
                return;
            }
        }

        let index = self.layout.insertion_index();
        let first = self.layout.start_of(index);
        let rows = group.item_count();
        tracing::debug!(target: targets::MODEL, index, rows, "adding group");

        if rows == 0 {
            self.layout.insert_group(index, group);
            return;
        }

        let layout = &mut self.layout;
        self.signals
            .emit_rows_inserted(first, first + rows - 1, || layout.insert_group(index, group));
    }

    /// Buckets items into day groups and adds them to the model.
    ///
    /// An item joins the existing group for its day if there is one;
    /// otherwise a new day group is created after the existing groups (or,
    /// with [`GroupOrder::NewestFirst`], at its date-ordered place). Items
    /// whose stable id is already in the model are skipped. Emits a reset.
    pub fn load_items<I>(&mut self, items: I)
    where
        I: IntoIterator<Item = Arc<T>>,
    {
        let _span = PerfSpan::new("date_divided::load_items");
        let layout = &mut self.layout;
        let config = &self.config;
        let mut stats = (0, 0, 0);
        self.signals
            .emit_reset(|| stats = layout.load(items, config));

        let (loaded, skipped, groups_created) = stats;
        tracing::debug!(
            target: targets::MODEL,
            loaded,
            skipped,
            groups_created,
            row_count = self.layout.row_count,
            "loaded items"
        );
    }

    /// Returns `true` if an item with this stable id is in the model.
    pub fn contains(&self, stable_id: u64) -> bool {
        self.layout.find(stable_id).is_some()
    }

    /// Flattened position of the item with this stable id.
    pub fn position_of(&self, stable_id: u64) -> Option<usize> {
        self.layout.find(stable_id).map(|(group, index)| {
            let separator = self.layout.groups[group]
                .as_items()
                .map_or(0, ItemGroup::separator_rows);
            self.layout.row_starts[group] + separator + index
        })
    }

    /// Removes an item, matched by stable id.
    ///
    /// See [`remove_by_id`](Self::remove_by_id).
    pub fn remove_item(&mut self, item: &T) -> Result<Arc<T>> {
        self.remove_by_id(item.stable_id())
    }

    /// Removes the item with this stable id and returns it.
    ///
    /// If that empties its item group, the whole group (date separator
    /// included) is removed. Header groups and the footer are never removed.
    pub fn remove_by_id(&mut self, stable_id: u64) -> Result<Arc<T>> {
        let (group_index, item_index) = self
            .layout
            .find(stable_id)
            .ok_or_else(|| Error::item_not_found(stable_id))?;

        let start = self.layout.row_starts[group_index];
        let group = &self.layout.groups[group_index];
        let (first, last, drop_group) = match group.as_items() {
            Some(items) if items.len() == 1 => (start, start + group.item_count() - 1, true),
            Some(items) => {
                let row = start + items.separator_rows() + item_index;
                (row, row, false)
            }
            None => return Err(Error::item_not_found(stable_id)),
        };

        let removed = group
            .as_items()
            .and_then(|items| items.items().get(item_index))
            .cloned();
        let layout = &mut self.layout;
        self.signals.emit_rows_removed(first, last, || {
            if drop_group {
                layout.remove_group(group_index);
            } else if let Some(items) = layout.groups[group_index].as_items_mut() {
                items.remove_item(stable_id);
                layout.rebuild();
            }
        });

        if drop_group {
            tracing::debug!(target: targets::MODEL, stable_id, group = group_index, "removed emptied group");
        } else {
            tracing::trace!(target: targets::MODEL, stable_id, row = first, "removed item");
        }
        removed.ok_or_else(|| Error::item_not_found(stable_id))
    }
}

impl<T> RowModel for DateDividedModel<T> {
    fn row_count(&self) -> usize {
        self.layout.row_count
    }

    fn signals(&self) -> &ModelSignals {
        &self.signals
    }
}

static_assertions::assert_impl_all!(DateDividedModel<String>: Send, Sync);
