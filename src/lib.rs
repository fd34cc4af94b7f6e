//! Othello rule engine and adversarial search core.
//!
//! Board representation, legal-move generation, disc flipping, heuristic
//! evaluation, depth-limited alpha-beta minimax, and snapshot-based
//! undo/redo. Rendering, input handling, and pacing belong to the caller;
//! this crate only exposes the game-state contracts.

pub mod ai;
pub mod board;
pub mod game;
pub mod history;
pub mod types;

pub use ai::evaluate::{evaluate, outcome};
pub use ai::search::best_move;
pub use board::Board;
pub use game::{Game, MoveSelector, attempt_move, compute_reply, new_game};
pub use types::{Cell, GameError, GameOutcome, GameResult, GameState, Position, Side};
