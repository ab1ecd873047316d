//! Single-choice selection over a list of rich radio options.
//!
//! [`RadioOptionsModel`] backs a list of radio buttons that each carry a
//! title and an optional description (search engine choice, cookie
//! controls, theme picker). At most one option is selected at a time.
//!
//! # Example
//!
//! ```
//! use browser_widgets::model::{RadioOption, RadioOptionsModel};
//!
//! let mut engines = RadioOptionsModel::new(vec![
//!     RadioOption::new("ddg", "DuckDuckGo"),
//!     RadioOption::new("kagi", "Kagi").with_description("Paid, no ads"),
//! ]);
//!
//! engines.selection_changed.connect(|(new, old)| {
//!     println!("Engine changed from {old:?} to {new:?}");
//! });
//!
//! engines.select("kagi").unwrap();
//! assert_eq!(engines.selected_id(), Some("kagi"));
//! ```

use std::collections::HashSet;

use browser_widgets_core::Signal;
use browser_widgets_core::logging::targets;

use super::traits::{ModelSignals, RowModel};
use crate::error::{Error, Result};

/// One option in a radio list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RadioOption {
    /// Identifier, unique within the list.
    pub id: String,
    /// Primary text.
    pub title: String,
    /// Secondary text under the title.
    pub description: Option<String>,
}

impl RadioOption {
    /// Creates an option without a description.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: None,
        }
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Selection state for a list of radio options.
///
/// # Signals
///
/// - `selection_changed`: (new id, old id), emitted only when the selected
///   option actually changes
/// - the [`ModelSignals`] of [`RowModel`]: `data_changed` for the rows whose
///   checked state flipped, a reset when the options are replaced
pub struct RadioOptionsModel {
    options: Vec<RadioOption>,
    selected: Option<usize>,
    signals: ModelSignals,

    /// Emitted when the selection changes, with (new, old) option ids.
    pub selection_changed: Signal<(Option<String>, Option<String>)>,
}

impl std::fmt::Debug for RadioOptionsModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RadioOptionsModel")
            .field("options", &self.options)
            .field("selected", &self.selected_id())
            .finish_non_exhaustive()
    }
}

impl RadioOptionsModel {
    /// Creates a model with nothing selected.
    ///
    /// Option ids must be unique; an option repeating an earlier id is
    /// dropped with a warning.
    pub fn new(options: Vec<RadioOption>) -> Self {
        Self {
            options: unique_options(options),
            selected: None,
            signals: ModelSignals::new(),
            selection_changed: Signal::new(),
        }
    }

    /// The options, in display order.
    pub fn options(&self) -> &[RadioOption] {
        &self.options
    }

    /// The option shown at `row`.
    pub fn option_at(&self, row: usize) -> Result<&RadioOption> {
        self.options
            .get(row)
            .ok_or_else(|| Error::invalid_position(row, self.options.len()))
    }

    /// Replaces the options.
    ///
    /// The selection survives if an option with the selected id is still
    /// present; otherwise it is cleared and `selection_changed` fires.
    /// Repeated ids are dropped as in [`new`](Self::new).
    pub fn set_options(&mut self, options: Vec<RadioOption>) {
        let options = unique_options(options);
        let old_id = self.selected_id().map(str::to_owned);
        let new_selected = old_id
            .as_deref()
            .and_then(|id| options.iter().position(|o| o.id == id));

        let (stored, selected) = (&mut self.options, &mut self.selected);
        self.signals.emit_reset(|| {
            *stored = options;
            *selected = new_selected;
        });

        if old_id.is_some() && new_selected.is_none() {
            tracing::debug!(target: targets::SELECTION, old = ?old_id, "selected option removed");
            self.selection_changed.emit((None, old_id));
        }
    }

    /// Selects the option with this id.
    pub fn select(&mut self, id: &str) -> Result<()> {
        let row = self
            .row_of(id)
            .ok_or_else(|| Error::unknown_option(id))?;
        self.set_selected(Some(row));
        Ok(())
    }

    /// Selects the option at `row`.
    pub fn select_row(&mut self, row: usize) -> Result<()> {
        self.check_row(row)?;
        self.set_selected(Some(row));
        Ok(())
    }

    /// Deselects whatever is selected.
    pub fn clear_selection(&mut self) {
        self.set_selected(None);
    }

    /// Id of the selected option.
    pub fn selected_id(&self) -> Option<&str> {
        self.selected.map(|row| self.options[row].id.as_str())
    }

    /// Row of the selected option.
    pub fn selected_row(&self) -> Option<usize> {
        self.selected
    }

    /// Returns `true` if the option with this id is the selected one.
    pub fn is_selected(&self, id: &str) -> bool {
        self.selected_id() == Some(id)
    }

    /// Row of the option with this id.
    pub fn row_of(&self, id: &str) -> Option<usize> {
        self.options.iter().position(|o| o.id == id)
    }

    fn set_selected(&mut self, row: Option<usize>) {
        if self.selected == row {
            return;
        }

        let old = self.selected;
        let old_id = self.selected_id().map(str::to_owned);
        self.selected = row;
        let new_id = self.selected_id().map(str::to_owned);
        tracing::debug!(target: targets::SELECTION, new = ?new_id, old = ?old_id, "selection changed");

        for changed in [old, row].into_iter().flatten() {
            self.signals.data_changed.emit((changed, changed));
        }
        self.selection_changed.emit((new_id, old_id));
    }
}

fn unique_options(mut options: Vec<RadioOption>) -> Vec<RadioOption> {
    let mut seen = HashSet::new();
    options.retain(|option| {
        let fresh = seen.insert(option.id.clone());
        if !fresh {
            tracing::warn!(target: targets::SELECTION, id = %option.id, "skipping radio option with duplicate id");
        }
        fresh
    });
    options
}

impl RowModel for RadioOptionsModel {
    fn row_count(&self) -> usize {
        self.options.len()
    }

    fn signals(&self) -> &ModelSignals {
        &self.signals
    }
}

static_assertions::assert_impl_all!(RadioOptionsModel: Send, Sync);
