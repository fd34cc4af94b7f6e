use std::cmp::Ordering;

use crate::board::{BOARD_SIZE, Board};
use crate::types::{Cell, GameOutcome, Side};

/// Static positional value per cell. Corners are the strongest squares;
/// squares adjacent to a corner hand the corner to the opponent and are
/// penalized, diagonal neighbours of a corner most of all. Only valid for
/// the 8x8 board.
const POSITION_WEIGHTS: [[i32; BOARD_SIZE]; BOARD_SIZE] = [
    [100, -20, 10, 5, 5, 10, -20, 100],
    [-20, -50, -2, -2, -2, -2, -50, -20],
    [10, -2, 2, 1, 1, 2, -2, 10],
    [5, -2, 1, 0, 0, 1, -2, 5],
    [5, -2, 1, 0, 0, 1, -2, 5],
    [10, -2, 2, 1, 1, 2, -2, 10],
    [-20, -50, -2, -2, -2, -2, -50, -20],
    [100, -20, 10, 5, 5, 10, -20, 100],
];

/// Heuristic score of a position, positive in favor of the engine side:
/// weighted material difference, positional weight sum, and mobility.
pub fn evaluate(board: &Board) -> i32 {
    let mut material = 0;
    let mut position = 0;

    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            match board.cell_at(row, col) {
                Cell::Ai => {
                    material += 1;
                    position += POSITION_WEIGHTS[row][col];
                }
                Cell::Player => {
                    material -= 1;
                    position -= POSITION_WEIGHTS[row][col];
                }
                Cell::Empty => {}
            }
        }
    }

    let mobility = legal_move_count(board, Side::Ai) - legal_move_count(board, Side::Player);
    10 * material + position + 5 * mobility
}

pub fn legal_move_count(board: &Board, side: Side) -> i32 {
    board.legal_moves(side).count_ones() as i32
}

/// Terminal detection. The game is over when the board is full or when
/// neither side has a legal move; a full board is not required for the
/// stalled case. Anything else is still in progress.
pub fn outcome(board: &Board) -> GameOutcome {
    let stalled = !board.has_legal_move(Side::Player) && !board.has_legal_move(Side::Ai);
    if !board.is_full() && !stalled {
        return GameOutcome::InProgress;
    }

    let (player_count, ai_count) = board.count();
    match ai_count.cmp(&player_count) {
        Ordering::Greater => GameOutcome::Decided(Side::Ai),
        Ordering::Less => GameOutcome::Decided(Side::Player),
        Ordering::Equal => GameOutcome::Draw,
    }
}
