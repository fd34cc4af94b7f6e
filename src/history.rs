use crate::board::Board;

/// Undo/redo stacks of board snapshots.
///
/// `Board` is `Copy`, so a snapshot is the board itself; recording and
/// restoring are O(1) and never alias the live board.
#[derive(Debug, Default, Clone)]
pub struct History {
    undo: Vec<Board>,
    redo: Vec<Board>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the board as it stands before a committed move. Any pending
    /// redo chain is invalidated.
    pub fn record(&mut self, board: Board) {
        self.undo.push(board);
        self.redo.clear();
    }

    /// Pops the most recent snapshot, parking `current` for redo.
    /// `None` on an empty stack: a no-op, not an error.
    pub fn undo(&mut self, current: Board) -> Option<Board> {
        let snapshot = self.undo.pop()?;
        self.redo.push(current);
        Some(snapshot)
    }

    /// Restores the most recently undone snapshot, parking `current` for
    /// undo. `None` on an empty stack.
    pub fn redo(&mut self, current: Board) -> Option<Board> {
        let snapshot = self.redo.pop()?;
        self.undo.push(current);
        Some(snapshot)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }
}
