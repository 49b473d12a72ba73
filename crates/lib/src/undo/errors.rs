//! Error types for undo history.
use thiserror::Error;

use crate::catalog::RecordKey;

#[non_exhaustive]
#[derive(Error, Debug)]
pub enum UndoError {
    #[error("Nothing to undo")]
    EmptyHistory,

    #[error("Record {key} recorded in history is no longer in the catalog")]
    StaleEntry { key: RecordKey },
}

impl UndoError {
    /// Check if this error means the history was empty.
    pub fn is_empty_history(&self) -> bool {
        matches!(self, UndoError::EmptyHistory)
    }
}

impl From<UndoError> for crate::Error {
    fn from(err: UndoError) -> Self {
        crate::Error::Undo(err)
    }
}
