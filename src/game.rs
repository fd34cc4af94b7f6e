use log::debug;

use crate::ai::evaluate;
use crate::ai::search;
use crate::board::{BOARD_SIZE, Board, mask_to_positions};
use crate::history::History;
use crate::types::{GameError, GameOutcome, GameResult, GameState, Position, Side};

/// Seam for picking the engine reply. The default is the alpha-beta search;
/// tests substitute simpler selectors.
pub trait MoveSelector: Send + Sync {
    fn select_move(&self, board: &Board, side: Side, depth: u8) -> Option<usize>;
}

/// Baseline selector: first legal move in row-major order.
#[derive(Debug, Default, Clone, Copy)]
pub struct FirstLegalMoveSelector;

impl MoveSelector for FirstLegalMoveSelector {
    fn select_move(&self, board: &Board, side: Side, _depth: u8) -> Option<usize> {
        let legal = board.legal_moves(side);
        if legal == 0 {
            None
        } else {
            Some(legal.trailing_zeros() as usize)
        }
    }
}

/// Depth-limited alpha-beta selector.
#[derive(Debug, Default, Clone, Copy)]
pub struct MinimaxSelector;

impl MoveSelector for MinimaxSelector {
    fn select_move(&self, board: &Board, side: Side, depth: u8) -> Option<usize> {
        search::best_move(board, side, depth)
            .map(|mv| mv.row as usize * BOARD_SIZE + mv.col as usize)
    }
}

/// Returns the canonical initial board.
pub fn new_game() -> Board {
    Board::new()
}

/// Applies a move to a copy of `board`, leaving the original untouched.
/// Rejects out-of-range coordinates and illegal placements.
pub fn attempt_move(
    board: &Board,
    row: u8,
    col: u8,
    side: Side,
) -> Result<(Board, Vec<Position>), GameError> {
    let pos = row_col_to_pos(row, col)?;
    let mut next = *board;
    let flips = next.place(pos, side);
    if flips == 0 {
        return Err(GameError::IllegalMove);
    }
    Ok((next, mask_to_positions(flips)))
}

/// Synchronous engine reply: wraps the search. `None` when `side` cannot
/// move. Runtime grows with the branching factor raised to `depth`; pacing
/// and off-thread staging are the caller's concern.
pub fn compute_reply(board: &Board, side: Side, depth: u8) -> Option<Position> {
    search::best_move(board, side, depth)
}

/// One live game: the board, the side to move, the configured search depth,
/// and the undo/redo history. The board is mutated only by committed moves;
/// search always works on copies.
pub struct Game {
    board: Board,
    pub current_side: Side,
    pub depth: u8,
    pub is_pass: bool,
    pub flipped: Vec<Position>,
    history: History,
    selector: Box<dyn MoveSelector>,
}

impl Game {
    pub fn new(depth: u8, selector: Box<dyn MoveSelector>) -> Self {
        debug_assert!(depth >= 1, "search depth must be at least 1");
        Self {
            board: Board::new(),
            current_side: Side::Player,
            depth,
            is_pass: false,
            flipped: Vec::new(),
            history: History::new(),
            selector,
        }
    }

    pub fn with_default_selector(depth: u8) -> Self {
        Self::new(depth, Box::new(MinimaxSelector))
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Commits a player move at (row, col).
    pub fn place(&mut self, row: u8, col: u8) -> Result<(), GameError> {
        if self.outcome() != GameOutcome::InProgress {
            return Err(GameError::GameOver);
        }
        if self.current_side != Side::Player {
            return Err(GameError::OutOfTurn);
        }

        let pos = row_col_to_pos(row, col)?;
        self.apply_move(pos, Side::Player)
    }

    /// Commits the engine reply chosen by the selector.
    pub fn do_ai_move(&mut self) -> Result<Position, GameError> {
        if self.outcome() != GameOutcome::InProgress {
            return Err(GameError::GameOver);
        }
        if self.current_side != Side::Ai {
            return Err(GameError::OutOfTurn);
        }

        let legal = self.board.legal_moves(Side::Ai);
        if legal == 0 {
            return Err(GameError::NoLegalMove);
        }

        let selected = self
            .selector
            .select_move(&self.board, Side::Ai, self.depth)
            .ok_or(GameError::NoLegalMove)?;

        if selected >= BOARD_SIZE * BOARD_SIZE || (legal & (1u64 << selected)) == 0 {
            return Err(GameError::IllegalMove);
        }

        self.apply_move(selected, Side::Ai)?;
        Ok(Position {
            row: (selected / BOARD_SIZE) as u8,
            col: (selected % BOARD_SIZE) as u8,
        })
    }

    pub fn has_legal_moves_for_current(&self) -> bool {
        self.board.has_legal_move(self.current_side)
    }

    /// Forced pass: the side to move has no legal move, the turn flips.
    pub fn pass(&mut self) {
        debug!("pass: {:?} has no move", self.current_side);
        self.is_pass = true;
        self.flipped.clear();
        self.current_side = self.current_side.opponent();
    }

    /// Legal moves of the side to move, row-major, for UI highlighting.
    pub fn legal_moves(&self) -> Vec<Position> {
        mask_to_positions(self.board.legal_moves(self.current_side))
    }

    pub fn outcome(&self) -> GameOutcome {
        evaluate::outcome(&self.board)
    }

    /// Returns `(player_count, ai_count)`.
    pub fn piece_counts(&self) -> (u8, u8) {
        self.board.count()
    }

    /// Reverts the last committed move. The turn always goes back to the
    /// player side. Returns false when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.history.undo(self.board) {
            Some(snapshot) => {
                self.restore(snapshot);
                true
            }
            None => false,
        }
    }

    /// Re-applies the most recently undone move. The turn always goes back
    /// to the player side. Returns false when there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        match self.history.redo(self.board) {
            Some(snapshot) => {
                self.restore(snapshot);
                true
            }
            None => false,
        }
    }

    pub fn to_game_state(&self) -> GameState {
        let (player_count, ai_count) = self.board.count();
        GameState {
            board: self.board.to_array().to_vec(),
            current_side: self.current_side,
            player_count,
            ai_count,
            outcome: self.outcome(),
            is_pass: self.is_pass,
            flipped: self.flipped.clone(),
        }
    }

    pub fn to_game_result(&self) -> GameResult {
        let (player_count, ai_count) = self.board.count();
        GameResult {
            winner: match self.outcome() {
                GameOutcome::Decided(side) => Some(side),
                _ => None,
            },
            player_count,
            ai_count,
        }
    }

    fn apply_move(&mut self, pos: usize, side: Side) -> Result<(), GameError> {
        let legal = self.board.legal_moves(side);
        if (legal & (1u64 << pos)) == 0 {
            return Err(GameError::IllegalMove);
        }

        self.history.record(self.board);
        let flips = self.board.place(pos, side);
        debug_assert_ne!(flips, 0);

        self.is_pass = false;
        self.flipped = mask_to_positions(flips);
        self.current_side = side.opponent();
        debug!(
            "move: {side:?} at ({}, {}) flipped {} discs",
            pos / BOARD_SIZE,
            pos % BOARD_SIZE,
            self.flipped.len()
        );

        Ok(())
    }

    fn restore(&mut self, snapshot: Board) {
        self.board = snapshot;
        self.current_side = Side::Player;
        self.is_pass = false;
        self.flipped.clear();
    }

    #[cfg(test)]
    fn set_board_for_test(&mut self, board: Board, current_side: Side) {
        self.board = board;
        self.current_side = current_side;
        self.is_pass = false;
        self.flipped.clear();
        self.history.clear();
    }
}

fn row_col_to_pos(row: u8, col: u8) -> Result<usize, GameError> {
    if row >= BOARD_SIZE as u8 || col >= BOARD_SIZE as u8 {
        return Err(GameError::OutOfRange);
    }
    Ok((row as usize) * BOARD_SIZE + col as usize)
}
