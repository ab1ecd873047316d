//! Core traits shared by the flat row models.
//!
//! Both the date-divided list and the radio option list present themselves
//! to a view as a flat sequence of rows. A view only needs to know how many
//! rows there are and when they change; everything else goes through the
//! concrete model.

use browser_widgets_core::Signal;

use crate::error::{Error, Result};

/// A model that exposes a flat, virtualizable sequence of rows.
///
/// Views poll [`row_count`](RowModel::row_count) and then ask the concrete
/// model for each visible row (the "bind row at position N" pattern). They
/// stay in sync by connecting to [`signals`](RowModel::signals).
pub trait RowModel {
    /// Returns the number of flattened rows.
    fn row_count(&self) -> usize;

    /// Returns the signals for this model.
    fn signals(&self) -> &ModelSignals;

    /// Returns `true` if the model has no rows.
    fn is_empty(&self) -> bool {
        self.row_count() == 0
    }

    /// Fails with [`Error::InvalidPosition`] if `row` is past the end.
    fn check_row(&self, row: usize) -> Result<()> {
        let row_count = self.row_count();
        if row < row_count {
            Ok(())
        } else {
            Err(Error::invalid_position(row, row_count))
        }
    }
}

/// Collection of signals emitted by row models.
///
/// Row ranges are inclusive `(first, last)` pairs of flattened positions,
/// always expressed against the row numbering *before* a removal and *after*
/// an insertion.
///
/// # Signal Usage
///
/// - **Before modifications**: `rows_about_to_be_*` or `model_about_to_reset`
/// - **After modifications**: `rows_*` or `model_reset`
pub struct ModelSignals {
    /// Emitted just before rows are inserted.
    /// Args: (first row, last row)
    pub rows_about_to_be_inserted: Signal<(usize, usize)>,

    /// Emitted after rows have been inserted.
    /// Args: (first row, last row)
    pub rows_inserted: Signal<(usize, usize)>,

    /// Emitted just before rows are removed.
    /// Args: (first row, last row)
    pub rows_about_to_be_removed: Signal<(usize, usize)>,

    /// Emitted after rows have been removed.
    /// Args: (first row, last row)
    pub rows_removed: Signal<(usize, usize)>,

    /// Emitted when rows keep their position but their content changed.
    /// Args: (first row, last row)
    pub data_changed: Signal<(usize, usize)>,

    /// Emitted before the model is reset.
    pub model_about_to_reset: Signal<()>,

    /// Emitted after the model has been reset.
    pub model_reset: Signal<()>,
}

impl Default for ModelSignals {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ModelSignals {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelSignals")
            .field("rows_inserted", &self.rows_inserted)
            .field("rows_removed", &self.rows_removed)
            .field("data_changed", &self.data_changed)
            .field("model_reset", &self.model_reset)
            .finish_non_exhaustive()
    }
}

impl ModelSignals {
    /// Creates a new set of model signals.
    pub fn new() -> Self {
        Self {
            rows_about_to_be_inserted: Signal::new(),
            rows_inserted: Signal::new(),
            rows_about_to_be_removed: Signal::new(),
            rows_removed: Signal::new(),
            data_changed: Signal::new(),
            model_about_to_reset: Signal::new(),
            model_reset: Signal::new(),
        }
    }

    /// Emits signals for row insertion.
    ///
    /// Calls the provided function between the about_to_be_inserted and inserted signals.
    pub fn emit_rows_inserted<F>(&self, first: usize, last: usize, insert_fn: F)
    where
        F: FnOnce(),
    {
        self.rows_about_to_be_inserted.emit((first, last));
        insert_fn();
        self.rows_inserted.emit((first, last));
    }

    /// Emits signals for row removal.
    ///
    /// Calls the provided function between the about_to_be_removed and removed signals.
    pub fn emit_rows_removed<F>(&self, first: usize, last: usize, remove_fn: F)
    where
        F: FnOnce(),
    {
        self.rows_about_to_be_removed.emit((first, last));
        remove_fn();
        self.rows_removed.emit((first, last));
    }

    /// Emits signals for a model reset.
    ///
    /// Calls the provided function between the about_to_reset and reset signals.
    pub fn emit_reset<F>(&self, reset_fn: F)
    where
        F: FnOnce(),
    {
        self.model_about_to_reset.emit(());
        reset_fn();
        self.model_reset.emit(());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::sync::Arc;

    struct Fixed(usize, ModelSignals);

    impl RowModel for Fixed {
        fn row_count(&self) -> usize {
            self.0
        }

        fn signals(&self) -> &ModelSignals {
            &self.1
        }
    }

    #[test]
    fn test_check_row() {
        let model = Fixed(3, ModelSignals::new());
        assert!(model.check_row(2).is_ok());
        assert_eq!(model.check_row(3), Err(Error::invalid_position(3, 3)));
        assert!(!model.is_empty());
        assert!(Fixed(0, ModelSignals::new()).is_empty());
    }

    #[test]
    fn test_emit_rows_removed_order() {
        let signals = ModelSignals::new();
        let received = Arc::new(Mutex::new(Vec::new()));

        let recv_about = received.clone();
        signals
            .rows_about_to_be_removed
            .connect(move |(first, last)| recv_about.lock().push(("about", *first, *last)));

        let recv_done = received.clone();
        signals
            .rows_removed
            .connect(move |(first, last)| recv_done.lock().push(("done", *first, *last)));

        let recv_fn = received.clone();
        signals.emit_rows_removed(1, 2, || recv_fn.lock().push(("remove", 0, 0)));

        let events = received.lock();
        assert_eq!(
            *events,
            vec![("about", 1, 2), ("remove", 0, 0), ("done", 1, 2)]
        );
    }

    #[test]
    fn test_emit_reset() {
        let signals = ModelSignals::new();
        let counter = Arc::new(Mutex::new(0));

        let c1 = counter.clone();
        signals.model_about_to_reset.connect(move |_| {
            *c1.lock() += 1;
        });

        let c2 = counter.clone();
        signals.model_reset.connect(move |_| {
            *c2.lock() += 10;
        });

        signals.emit_reset(|| {});
        assert_eq!(*counter.lock(), 11);
    }
}
