//! Undo history for catalog mutations.
//!
//! Every successful insert or delete pushes an [`UndoEntry`] tagged with the
//! kind of mutation it reverses. Popping the most recent entry tells the
//! caller exactly what to do: remove the inserted record, or relink the
//! deleted one at its former position. There is a single level of history per
//! mutation and no redo.

pub mod errors;

pub use errors::UndoError;

use std::collections::VecDeque;

use crate::{
    catalog::{RecordKey, Removed},
    product::Product,
};

/// Which mutation an [`UndoEntry`] reverses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OperationKind {
    Insert,
    Delete,
}

/// One reversible mutation.
#[derive(Clone, Debug, PartialEq)]
pub enum UndoEntry {
    /// A product was appended. Undo removes the record under `key`.
    Insert { key: RecordKey, product: Product },
    /// A product was unlinked. Undo restores it at `removed.position`.
    Delete(Removed),
}

impl UndoEntry {
    /// The mutation this entry reverses.
    pub fn kind(&self) -> OperationKind {
        match self {
            UndoEntry::Insert { .. } => OperationKind::Insert,
            UndoEntry::Delete(_) => OperationKind::Delete,
        }
    }

    /// Snapshot of the product taken when the mutation happened.
    pub fn product(&self) -> &Product {
        match self {
            UndoEntry::Insert { product, .. } => product,
            UndoEntry::Delete(removed) => &removed.product,
        }
    }

    /// Handle of the affected record.
    pub fn key(&self) -> RecordKey {
        match self {
            UndoEntry::Insert { key, .. } => *key,
            UndoEntry::Delete(removed) => removed.key,
        }
    }
}

/// Stack of reversible mutations, most recent on top.
///
/// With a depth limit, pushing onto a full log discards the oldest entry.
#[derive(Debug, Clone, Default)]
pub struct UndoLog {
    entries: VecDeque<UndoEntry>,
    depth: Option<usize>,
}

impl UndoLog {
    /// Creates an unbounded log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a log retaining at most `depth` entries (`None` for unbounded).
    pub fn with_depth(depth: Option<usize>) -> Self {
        Self {
            entries: VecDeque::new(),
            depth,
        }
    }

    /// Pushes an entry, evicting the oldest one if the log is full.
    pub fn push(&mut self, entry: UndoEntry) {
        if let Some(depth) = self.depth {
            if depth == 0 {
                return;
            }
            while self.entries.len() >= depth {
                if let Some(evicted) = self.entries.pop_front() {
                    tracing::debug!(
                        key = %evicted.key(),
                        id = evicted.product().id,
                        "Undo history full, dropping oldest entry"
                    );
                }
            }
        }
        self.entries.push_back(entry);
    }

    /// Records an insert of `product` under `key`.
    pub fn record_insert(&mut self, key: RecordKey, product: Product) {
        self.push(UndoEntry::Insert { key, product });
    }

    /// Records a delete.
    pub fn record_delete(&mut self, removed: Removed) {
        self.push(UndoEntry::Delete(removed));
    }

    /// Pops the most recent entry.
    pub fn pop(&mut self) -> Result<UndoEntry, UndoError> {
        self.entries.pop_back().ok_or(UndoError::EmptyHistory)
    }

    /// The entry the next [`pop`](Self::pop) would return.
    pub fn peek(&self) -> Option<&UndoEntry> {
        self.entries.back()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of retained entries, if bounded.
    pub fn depth(&self) -> Option<usize> {
        self.depth
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
