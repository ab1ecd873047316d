//! Configuration for the date-divided list.

use chrono::{DateTime, FixedOffset, Local, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// The time zone in which a timestamp is mapped to a calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DayBoundary {
    /// The system's local time zone (default).
    #[default]
    Local,
    /// A fixed offset east of UTC, in seconds.
    FixedOffset {
        /// Seconds east of UTC; must be strictly within ±24 hours.
        seconds: i32,
    },
}

impl DayBoundary {
    /// Midnight-to-midnight in UTC.
    pub const UTC: Self = Self::FixedOffset { seconds: 0 };

    /// The calendar day a millisecond timestamp falls on.
    ///
    /// Timestamps outside chrono's representable range are listed under the
    /// Unix epoch day.
    pub fn day_of(&self, timestamp_ms: i64) -> NaiveDate {
        let utc = DateTime::<Utc>::from_timestamp_millis(timestamp_ms).unwrap_or_default();
        match self {
            Self::Local => utc.with_timezone(&Local).date_naive(),
            Self::FixedOffset { seconds } => match FixedOffset::east_opt(*seconds) {
                Some(offset) => utc.with_timezone(&offset).date_naive(),
                None => utc.date_naive(),
            },
        }
    }

    fn validate(&self) -> Result<()> {
        match self {
            Self::Local => Ok(()),
            Self::FixedOffset { seconds } => FixedOffset::east_opt(*seconds)
                .map(|_| ())
                .ok_or_else(|| {
                    Error::InvalidConfig(format!("fixed offset of {seconds}s is out of range"))
                }),
        }
    }
}

/// How groups and items are ordered as they are loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupOrder {
    /// Keep the order in which the caller supplied items (default). New day
    /// groups are appended; items are appended to their group.
    #[default]
    Preserve,
    /// Most recent day first, most recent item first within a day. Items with
    /// equal timestamps keep their load order.
    NewestFirst,
}

/// Settings for a [`DateDividedModel`](super::DateDividedModel).
///
/// # Example
///
/// ```
/// use browser_widgets::model::{DateDividedConfig, DayBoundary, GroupOrder};
///
/// let config = DateDividedConfig::new()
///     .with_day_boundary(DayBoundary::UTC)
///     .with_order(GroupOrder::NewestFirst);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DateDividedConfig {
    /// Time zone used to bucket items into days.
    pub day_boundary: DayBoundary,
    /// Ordering applied while loading.
    pub order: GroupOrder,
}

impl DateDividedConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the day boundary.
    pub fn with_day_boundary(mut self, day_boundary: DayBoundary) -> Self {
        self.day_boundary = day_boundary;
        self
    }

    /// Sets the group ordering.
    pub fn with_order(mut self, order: GroupOrder) -> Self {
        self.order = order;
        self
    }

    /// Checks that every setting is usable.
    pub fn validate(&self) -> Result<()> {
        self.day_boundary.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 2024-03-01T23:30:00Z
    const LATE_EVENING_UTC: i64 = 1_709_335_800_000;

    #[test]
    fn test_day_of_respects_offset() {
        let utc = DayBoundary::UTC.day_of(LATE_EVENING_UTC);
        assert_eq!(utc, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());

        let plus_one = DayBoundary::FixedOffset { seconds: 3600 }.day_of(LATE_EVENING_UTC);
        assert_eq!(plus_one, NaiveDate::from_ymd_opt(2024, 3, 2).unwrap());
    }

    #[test]
    fn test_out_of_range_timestamp_maps_to_epoch() {
        let day = DayBoundary::UTC.day_of(i64::MAX);
        assert_eq!(day, NaiveDate::from_ymd_opt(1970, 1, 1).unwrap());
    }

    #[test]
    fn test_validate_rejects_bad_offset() {
        let config = DateDividedConfig::new()
            .with_day_boundary(DayBoundary::FixedOffset { seconds: 90_000 });
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
        assert!(DateDividedConfig::new().validate().is_ok());
    }

    #[test]
    fn test_serde_defaults() {
        let config: DateDividedConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, DateDividedConfig::default());

        let config: DateDividedConfig = serde_json::from_str(
            r#"{"day_boundary":{"kind":"fixed_offset","seconds":-18000},"order":"newest_first"}"#,
        )
        .unwrap();
        assert_eq!(config.day_boundary, DayBoundary::FixedOffset { seconds: -18000 });
        assert_eq!(config.order, GroupOrder::NewestFirst);
    }
}
