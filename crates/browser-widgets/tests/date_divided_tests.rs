//! Date-divided list tests.

use std::sync::Arc;

use browser_widgets::prelude::*;
use chrono::NaiveDate;
use parking_lot::Mutex;

const DAY_MS: i64 = 86_400_000;
// 2024-03-01T00:00:00Z
const MARCH_1: i64 = 1_709_251_200_000;

#[derive(Debug, Clone, PartialEq)]
struct HistoryEntry {
    id: u64,
    title: &'static str,
    visited_at: i64,
}

impl TimedItem for HistoryEntry {
    fn timestamp(&self) -> i64 {
        self.visited_at
    }

    fn stable_id(&self) -> u64 {
        self.id
    }
}

fn entry(id: u64, title: &'static str, visited_at: i64) -> Arc<HistoryEntry> {
    Arc::new(HistoryEntry {
        id,
        title,
        visited_at,
    })
}

fn history() -> DateDividedModel<HistoryEntry> {
    DateDividedModel::with_config(DateDividedConfig::new().with_day_boundary(DayBoundary::UTC))
        .expect("UTC config is valid")
}

fn group_rows(model: &DateDividedModel<HistoryEntry>) -> usize {
    model.groups().iter().map(Group::item_count).sum()
}

#[test]
fn test_standard_header_with_one_day() {
    let mut model = history();
    model.add_group(HeaderItemGroup::new([HeaderKind::Standard]));
    let item1 = entry(1, "Rust Blog", MARCH_1 + 1_000);
    let item2 = entry(2, "crates.io", MARCH_1 + 2_000);
    model.load_items([item1.clone(), item2.clone()]);

    assert_eq!(model.row_count(), 4);
    assert_eq!(model.row_kind(0).unwrap(), RowKind::StandardHeader);
    assert_eq!(model.row_kind(1).unwrap(), RowKind::Date);
    assert_eq!(model.item_at(2).unwrap().1, Some(&item1));
    assert_eq!(model.item_at(3).unwrap().1, Some(&item2));

    model.remove_item(&item1).unwrap();

    assert_eq!(model.row_count(), 3);
    assert_eq!(model.item_at(2).unwrap().1, Some(&item2));
}

#[test]
fn test_headers_survive_removing_last_item() {
    let mut model = history();
    model.add_group(HeaderItemGroup::new([
        HeaderKind::Standard,
        HeaderKind::Persistent,
    ]));
    model.load_items([entry(1, "Only visit", MARCH_1)]);
    assert_eq!(model.row_count(), 4);

    model.remove_by_id(1).unwrap();

    assert_eq!(model.row_count(), 2);
    assert_eq!(model.row_kind(0).unwrap(), RowKind::StandardHeader);
    assert_eq!(model.row_kind(1).unwrap(), RowKind::PersistentHeader);
    assert!(model.has_list_header());
}

#[test]
fn test_row_count_matches_group_contributions() {
    let mut model = history();
    model.add_group(HeaderItemGroup::new([HeaderKind::Persistent]));
    assert_eq!(model.row_count(), group_rows(&model));

    model.load_items((0..5).map(|i| entry(i, "a", MARCH_1 + i as i64 * DAY_MS / 2)));
    assert_eq!(model.row_count(), group_rows(&model));

    let mut undated = ItemGroup::new();
    undated.add_item(entry(100, "pinned", 0));
    model.add_group(undated);
    assert_eq!(model.row_count(), group_rows(&model));

    model.load_items([entry(200, "later", MARCH_1 + 10 * DAY_MS)]);
    assert_eq!(model.row_count(), group_rows(&model));
}

#[test]
fn test_removing_sole_item_drops_whole_group() {
    let mut model = history();
    model.load_items([
        entry(1, "a", MARCH_1),
        entry(2, "b", MARCH_1 + 1),
        entry(3, "c", MARCH_1 + DAY_MS),
    ]);
    let before = model.row_count();

    model.remove_by_id(3).unwrap();

    assert_eq!(model.row_count(), before - 2);
    assert_eq!(model.groups().len(), 1);
}

#[test]
fn test_removing_one_of_several_drops_one_row() {
    let mut model = history();
    model.load_items([entry(1, "a", MARCH_1), entry(2, "b", MARCH_1 + 1)]);
    let before = model.row_count();

    model.remove_by_id(2).unwrap();

    assert_eq!(model.row_count(), before - 1);
}

#[test]
fn test_header_group_never_removed() {
    let mut model = history();
    model.set_headers([HeaderKind::Standard]);

    for round in 0..3u64 {
        model.load_items([entry(round, "visit", MARCH_1 + round as i64 * DAY_MS)]);
        model.remove_by_id(round).unwrap();
        assert_eq!(model.row_count(), 1);
        assert_eq!(model.row_kind(0).unwrap(), RowKind::StandardHeader);
    }

    assert!(model.remove_by_id(0).is_err());
    assert_eq!(model.row_count(), 1);
}

#[test]
fn test_queries_are_idempotent() {
    let mut model = history();
    model.set_headers([HeaderKind::Standard]);
    model.load_items([entry(1, "a", MARCH_1), entry(2, "b", MARCH_1 + DAY_MS)]);

    let snapshot = |model: &DateDividedModel<HistoryEntry>| {
        (0..model.row_count())
            .map(|row| {
                let (_, item) = model.item_at(row).unwrap();
                (model.row_kind(row).unwrap(), item.map(|i| i.id))
            })
            .collect::<Vec<_>>()
    };

    let first = snapshot(&model);
    assert_eq!(first, snapshot(&model));
    assert_eq!(model.row_count(), model.row_count());
}

#[test]
fn test_positions_past_end_fail() {
    let mut model = history();
    model.load_items([entry(1, "a", MARCH_1)]);

    assert_eq!(
        model.row_kind(2).unwrap_err(),
        Error::InvalidPosition {
            position: 2,
            row_count: 2
        }
    );
    assert!(model.item_at(2).is_err());
    assert!(model.entry_at(99).is_err());
}

#[test]
fn test_equal_timestamps_keep_input_order() {
    let mut model = history();
    model.load_items([
        entry(3, "c", MARCH_1 + 500),
        entry(1, "a", MARCH_1 + 500),
        entry(2, "b", MARCH_1 + 500),
    ]);

    let ids: Vec<u64> = (1..model.row_count())
        .filter_map(|row| model.item_at(row).unwrap().1.map(|i| i.id))
        .collect();
    assert_eq!(ids, vec![3, 1, 2]);
}

#[test]
fn test_render_history_page() {
    let config = DateDividedConfig::new()
        .with_day_boundary(DayBoundary::UTC)
        .with_order(GroupOrder::NewestFirst);
    let mut model = DateDividedModel::with_config(config).unwrap();
    model.set_headers([HeaderKind::Standard]);
    model.load_items([
        entry(1, "Rust Blog", MARCH_1 + 1_000),
        entry(2, "This Week in Rust", MARCH_1 + 3 * DAY_MS + 10),
        entry(3, "docs.rs", MARCH_1 + 3 * DAY_MS + 20),
        entry(4, "crates.io", MARCH_1 + 2 * DAY_MS),
    ]);
    model.set_footer(true);

    let today = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
    let mut renderer = TextRowRenderer::new(today, |e: &HistoryEntry| e.title.to_string());

    assert_eq!(
        model.render_rows(&mut renderer).unwrap(),
        vec![
            "[header]",
            "Today",
            "┌ docs.rs",
            "└ This Week in Rust",
            "Yesterday",
            "─ crates.io",
            "Friday, March 1, 2024",
            "─ Rust Blog",
            "[footer]",
        ]
    );
}

#[test]
fn test_signals_track_mutations() {
    let mut model = history();
    let events = Arc::new(Mutex::new(Vec::new()));

    let recv = events.clone();
    model
        .signals()
        .rows_inserted
        .connect(move |(first, last)| recv.lock().push(format!("inserted {first}..={last}")));
    let recv = events.clone();
    model
        .signals()
        .rows_removed
        .connect(move |(first, last)| recv.lock().push(format!("removed {first}..={last}")));
    let recv = events.clone();
    model
        .signals()
        .model_reset
        .connect(move |_| recv.lock().push("reset".to_string()));

    model.add_group(HeaderItemGroup::new([HeaderKind::Standard]));
    model.load_items([entry(1, "a", MARCH_1), entry(2, "b", MARCH_1 + 1)]);
    model.set_footer(true);
    model.remove_by_id(1).unwrap();
    model.remove_by_id(2).unwrap();
    model.set_footer(false);

    assert_eq!(
        *events.lock(),
        vec![
            "inserted 0..=0",
            "reset",
            "inserted 4..=4",
            "removed 2..=2",
            "removed 1..=2",
            "removed 1..=1",
        ]
    );
}

#[test]
fn test_entry_and_position_lookup() {
    let mut model = history();
    model.set_headers([HeaderKind::Persistent]);
    model.load_items([entry(7, "a", MARCH_1), entry(8, "b", MARCH_1 + DAY_MS)]);

    assert!(matches!(model.entry_at(0).unwrap(), Entry::Header(HeaderKind::Persistent)));
    assert!(matches!(
        model.entry_at(1).unwrap(),
        Entry::DateSeparator(d) if d == NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    ));
    assert_eq!(model.position_of(8), Some(4));
    assert!(model.contains(7));
    assert!(!model.contains(9));

    let placement = model.row_position(4).unwrap().unwrap();
    assert_eq!(placement.group, 2);
    assert!(placement.is_first_in_group && placement.is_last_in_group);
}
