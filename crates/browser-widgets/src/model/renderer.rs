//! Rendering seam between a row model and whatever draws rows.
//!
//! A rendering layer implements [`RowRenderer`] once, with one method per
//! kind of row, and [`DateDividedModel::bind_row`](super::DateDividedModel::bind_row)
//! dispatches each position to the right method. The model never knows what
//! a row turns into: a widget, a terminal line, an accessibility node.

use chrono::{Days, NaiveDate};

use super::entry::{HeaderKind, RowPosition};

/// Turns flattened rows into the renderer's row type.
pub trait RowRenderer<T> {
    /// What one rendered row is.
    type Row;

    /// Renders a header pseudo-item.
    fn header(&mut self, kind: HeaderKind) -> Self::Row;

    /// Renders the separator that opens a day group.
    fn date(&mut self, date: NaiveDate) -> Self::Row;

    /// Renders a real item, with its placement inside its group.
    fn item(&mut self, item: &T, position: RowPosition) -> Self::Row;

    /// Renders the footer row.
    fn footer(&mut self) -> Self::Row;
}

/// Label for a date separator, relative to `today`.
///
/// ```
/// use browser_widgets::model::date_label;
/// use chrono::NaiveDate;
///
/// let today = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
/// assert_eq!(date_label(today, today), "Today");
/// assert_eq!(date_label(NaiveDate::from_ymd_opt(2024, 3, 3).unwrap(), today), "Yesterday");
/// assert_eq!(date_label(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(), today), "Friday, March 1, 2024");
/// ```
pub fn date_label(date: NaiveDate, today: NaiveDate) -> String {
    if date == today {
        "Today".to_string()
    } else if today.checked_sub_days(Days::new(1)) == Some(date) {
        "Yesterday".to_string()
    } else {
        date.format("%A, %B %-d, %Y").to_string()
    }
}

/// A renderer producing one line of text per row.
///
/// Useful for logging a model's state and for asserting on it in tests.
/// Items are drawn as cards: `┌` opens a group, `│` continues it, `└` closes
/// it, and `─` marks a group with a single item.
pub struct TextRowRenderer<F> {
    today: NaiveDate,
    label: F,
}

impl<F> TextRowRenderer<F> {
    /// Creates a renderer that labels dates relative to `today` and items
    /// with `label`.
    pub fn new(today: NaiveDate, label: F) -> Self {
        Self { today, label }
    }
}

impl<T, F> RowRenderer<T> for TextRowRenderer<F>
where
    F: FnMut(&T) -> String,
{
    type Row = String;

    fn header(&mut self, kind: HeaderKind) -> String {
        match kind {
            HeaderKind::Standard => "[header]".to_string(),
            HeaderKind::Persistent => "[persistent header]".to_string(),
        }
    }

    fn date(&mut self, date: NaiveDate) -> String {
        date_label(date, self.today)
    }

    fn item(&mut self, item: &T, position: RowPosition) -> String {
        let corner = match (position.is_first_in_group, position.is_last_in_group) {
            (true, true) => '─',
            (true, false) => '┌',
            (false, true) => '└',
            (false, false) => '│',
        };
        format!("{corner} {}", (self.label)(item))
    }

    fn footer(&mut self) -> String {
        "[footer]".to_string()
    }
}
