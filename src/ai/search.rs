use log::debug;

use crate::ai::evaluate::evaluate;
use crate::ai::evaluate::outcome;
use crate::board::{Board, mask_to_positions};
use crate::types::{GameOutcome, Position, Side};

/// Score of a decided game, positive for the engine side.
const WIN_SCORE: i32 = 100;
/// Fold sentinels for the minimax accumulator. Real scores always stay
/// strictly inside this range.
const MIN_SCORE: i32 = -1000;
const MAX_SCORE: i32 = 1000;

/// Searches the best move for `side` with a depth-limited alpha-beta
/// minimax. Returns `None` when the side has no legal move.
///
/// Candidates are scanned in row-major order and ties go to the move found
/// first; each candidate gets a fresh full pruning window.
pub fn best_move(board: &Board, side: Side, depth: u8) -> Option<Position> {
    debug_assert!(depth >= 1, "search depth must be at least 1");

    let legal = board.legal_moves(side);
    if legal == 0 {
        return None;
    }

    let maximizing = side == Side::Ai;
    let moves = mask_to_positions(legal);
    let mut best = moves[0];
    let mut best_score = if maximizing { MIN_SCORE } else { MAX_SCORE };

    for mv in moves {
        let mut next = *board;
        let flips = next.place(position_to_pos(mv), side);
        debug_assert_ne!(flips, 0);

        let score = minimax(
            &next,
            !maximizing,
            i32::MIN,
            i32::MAX,
            depth.saturating_sub(1),
        );
        let better = if maximizing {
            score > best_score
        } else {
            score < best_score
        };
        if better {
            best_score = score;
            best = mv;
        }
    }

    debug!(
        "search: side {side:?} depth {depth} chose ({}, {}) score {best_score}",
        best.row, best.col
    );
    Some(best)
}

/// Depth-limited minimax over hypothetical boards. `maximizing` means the
/// engine side is to move. A branch board is a copy of its parent, so
/// backtracking is implicit.
///
/// A mover with no legal move but a live opponent passes: the turn flips
/// without spending depth. The fold sentinels only seed the accumulator
/// and are never returned from a reachable node.
pub fn minimax(board: &Board, maximizing: bool, mut alpha: i32, mut beta: i32, depth: u8) -> i32 {
    if depth == 0 {
        return evaluate(board);
    }

    match outcome(board) {
        GameOutcome::Decided(Side::Ai) => return WIN_SCORE,
        GameOutcome::Decided(Side::Player) => return -WIN_SCORE,
        GameOutcome::Draw => return evaluate(board),
        GameOutcome::InProgress => {}
    }

    let side = if maximizing { Side::Ai } else { Side::Player };
    let legal = board.legal_moves(side);
    if legal == 0 {
        return minimax(board, !maximizing, alpha, beta, depth);
    }

    let mut best = if maximizing { MIN_SCORE } else { MAX_SCORE };
    let mut bits = legal;

    while bits != 0 {
        let pos = bits.trailing_zeros() as usize;
        bits &= bits - 1;

        let mut next = *board;
        let _ = next.place(pos, side);
        let value = minimax(&next, !maximizing, alpha, beta, depth - 1);

        if maximizing {
            best = best.max(value);
            alpha = alpha.max(best);
        } else {
            best = best.min(value);
            beta = beta.min(best);
        }
        if beta <= alpha {
            return best;
        }
    }

    best
}

fn position_to_pos(position: Position) -> usize {
    position.row as usize * crate::board::BOARD_SIZE + position.col as usize
}
