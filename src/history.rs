use serde::{Deserialize, Serialize};
use crate::error::DocumentError;
use crate::shape::Shape;

/// The full shape sequence at one point in history. Later shapes draw on top.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub shapes: Vec<Shape>,
}

impl Snapshot {
    pub fn new(shapes: Vec<Shape>) -> Self {
        Self { shapes }
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

/// Linear undo/redo history of snapshots.
///
/// Index 0 is the initial snapshot and is never removed. The cursor always
/// points at an existing snapshot. Appending a snapshot discards everything
/// after the cursor first, so redo is lost on any new edit.
#[derive(Debug, Clone, PartialEq)]
pub struct History {
    snapshots: Vec<Snapshot>,
    cursor: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl History {
    /// A history holding a single empty snapshot
    pub fn new() -> Self {
        Self {
            snapshots: vec![Snapshot::default()],
            cursor: 0,
        }
    }

    /// Rebuilds a history, returning `None` if it would break the cursor invariant
    pub fn from_parts(snapshots: Vec<Snapshot>, cursor: usize) -> Option<Self> {
        if cursor >= snapshots.len() {
            return None;
        }
        Some(Self { snapshots, cursor })
    }

    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn current(&self) -> &Snapshot {
        &self.snapshots[self.cursor]
    }

    /// In-place access to the current snapshot, bypassing history
    pub(crate) fn current_mut(&mut self) -> &mut Snapshot {
        &mut self.snapshots[self.cursor]
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.snapshots.len()
    }

    /// Moves the cursor back one snapshot and returns the new cursor
    pub fn undo(&mut self) -> Result<usize, DocumentError> {
        if !self.can_undo() {
            return Err(DocumentError::NothingToUndo);
        }
        self.cursor -= 1;
        Ok(self.cursor)
    }

    /// Moves the cursor forward one snapshot and returns the new cursor
    pub fn redo(&mut self) -> Result<usize, DocumentError> {
        if !self.can_redo() {
            return Err(DocumentError::NothingToRedo);
        }
        self.cursor += 1;
        Ok(self.cursor)
    }

    /// Truncates redo history, appends a copy of the current snapshot and
    /// makes it current. Returns the new snapshot for editing.
    pub(crate) fn branch(&mut self) -> &mut Snapshot {
        self.snapshots.truncate(self.cursor + 1);
        let next = self.current().clone();
        self.snapshots.push(next);
        self.cursor += 1;
        log::debug!(
            "History advanced to snapshot {} of {}",
            self.cursor,
            self.snapshots.len()
        );
        self.current_mut()
    }
}
