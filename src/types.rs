use serde::Serialize;
use thiserror::Error;

/// One of the two disc colors contesting the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Side {
    /// The human side (black discs in the classic layout).
    Player,
    /// The engine side (white discs).
    Ai,
}

impl Side {
    pub fn opponent(self) -> Self {
        match self {
            Self::Player => Self::Ai,
            Self::Ai => Self::Player,
        }
    }
}

/// State of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Cell {
    Empty,
    Player,
    Ai,
}

impl Cell {
    pub fn side(self) -> Option<Side> {
        match self {
            Self::Empty => None,
            Self::Player => Some(Side::Player),
            Self::Ai => Some(Side::Ai),
        }
    }
}

impl From<Side> for Cell {
    fn from(side: Side) -> Self {
        match side {
            Side::Player => Self::Player,
            Side::Ai => Self::Ai,
        }
    }
}

/// A board coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Position {
    pub row: u8,
    pub col: u8,
}

/// Result of terminal detection over a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GameOutcome {
    InProgress,
    Decided(Side),
    Draw,
}

/// Public game state returned from the boundary API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    pub board: Vec<Cell>,
    pub current_side: Side,
    pub player_count: u8,
    pub ai_count: u8,
    pub outcome: GameOutcome,
    /// Contract:
    /// - `true` when the previous action was a pass.
    /// - `false` when the previous action was a normal move.
    pub is_pass: bool,
    /// Contract:
    /// - Normal move: list of flipped positions in row-major order.
    /// - Pass: must be an empty list.
    pub flipped: Vec<Position>,
}

/// Final score after game over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameResult {
    pub winner: Option<Side>,
    pub player_count: u8,
    pub ai_count: u8,
}

/// Recoverable rejections surfaced by the game boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("game is already over")]
    GameOver,
    #[error("it is not that side's turn")]
    OutOfTurn,
    #[error("illegal move")]
    IllegalMove,
    #[error("row/col out of range")]
    OutOfRange,
    #[error("no legal moves available")]
    NoLegalMove,
}
