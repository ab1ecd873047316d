//! The value contract for items shown in a date-divided list.

/// An item that can be placed in a [`DateDividedModel`](super::DateDividedModel).
///
/// Implementors are plain values owned by the caller: a history visit, a
/// download, a recently closed tab. The model shares them as `Arc<T>` and
/// never mutates them.
///
/// # Example
///
/// ```
/// use browser_widgets::model::TimedItem;
///
/// struct Visit {
///     id: u64,
///     url: String,
///     visited_at_ms: i64,
/// }
///
/// impl TimedItem for Visit {
///     fn timestamp(&self) -> i64 {
///         self.visited_at_ms
///     }
///
///     fn stable_id(&self) -> u64 {
///         self.id
///     }
/// }
/// ```
pub trait TimedItem {
    /// Milliseconds since the Unix epoch; decides which day the item is listed under.
    fn timestamp(&self) -> i64;

    /// Identifier that is unique among the items of one model.
    fn stable_id(&self) -> u64;

    /// Item identity is stable-id identity.
    fn same_item(&self, other: &Self) -> bool {
        self.stable_id() == other.stable_id()
    }
}

impl<T: TimedItem + ?Sized> TimedItem for std::sync::Arc<T> {
    fn timestamp(&self) -> i64 {
        (**self).timestamp()
    }

    fn stable_id(&self) -> u64 {
        (**self).stable_id()
    }
}
