//! Error types for the widget models.

/// Result type alias for model operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by the widget models.
///
/// All of these are caller misuse: an adapter asking for a row the model does
/// not have, or removing an item it never loaded. They are reported instead
/// of clamped so that a desynchronized view fails loudly.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// No group holds an item with this stable id.
    #[error("No item with stable id {stable_id} in the model")]
    ItemNotFound { stable_id: u64 },

    /// A flattened position at or past the end of the row sequence.
    #[error("Row {position} is out of range (row count is {row_count})")]
    InvalidPosition { position: usize, row_count: usize },

    /// A radio option id that is not in the option list.
    #[error("No radio option with id '{id}'")]
    UnknownOption { id: String },

    /// A configuration value that cannot be used.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl Error {
    /// Create an item-not-found error.
    pub fn item_not_found(stable_id: u64) -> Self {
        Self::ItemNotFound { stable_id }
    }

    /// Create an invalid-position error.
    pub fn invalid_position(position: usize, row_count: usize) -> Self {
        Self::InvalidPosition {
            position,
            row_count,
        }
    }

    /// Create an unknown-option error.
    pub fn unknown_option(id: impl Into<String>) -> Self {
        Self::UnknownOption { id: id.into() }
    }
}
