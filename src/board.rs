use crate::types::{Cell, Position, Side};

pub const BOARD_SIZE: usize = 8;
pub const NUM_SQUARES: usize = BOARD_SIZE * BOARD_SIZE;
const DIRECTIONS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Othello board state represented by two bitboards, one per side.
/// Bit `row * 8 + col` is set in at most one of the two masks.
///
/// `Board` is `Copy`; a snapshot for history or search backtracking is a
/// plain 16-byte copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    player: u64,
    ai: u64,
}

impl Board {
    /// Creates the canonical initial board:
    /// (3,3)=ai, (3,4)=player, (4,3)=player, (4,4)=ai.
    pub fn new() -> Self {
        Self {
            player: bit(28) | bit(35),
            ai: bit(27) | bit(36),
        }
    }

    /// Builds a board directly from raw bitboards. The masks must not overlap.
    pub fn from_bitboards(player: u64, ai: u64) -> Self {
        assert_eq!(player & ai, 0, "bitboards overlap");
        Self { player, ai }
    }

    /// Returns the state of one cell. Coordinates out of [0,8) are a
    /// programming error and fail fast.
    pub fn cell_at(&self, row: usize, col: usize) -> Cell {
        let square = bit(index_of(row, col));
        if (self.player & square) != 0 {
            Cell::Player
        } else if (self.ai & square) != 0 {
            Cell::Ai
        } else {
            Cell::Empty
        }
    }

    /// Overwrites one cell unconditionally. No rule validation happens here;
    /// legality is the move generator's concern.
    pub fn set_cell(&mut self, row: usize, col: usize, cell: Cell) {
        let square = bit(index_of(row, col));
        self.player &= !square;
        self.ai &= !square;
        match cell {
            Cell::Empty => {}
            Cell::Player => self.player |= square,
            Cell::Ai => self.ai |= square,
        }
    }

    /// Returns legal move mask for the given side. Ascending bit order is
    /// row-major order, which fixes the search tie-break.
    pub fn legal_moves(&self, side: Side) -> u64 {
        let (me, opp) = self.masks(side);
        let occupied = me | opp;
        let mut legal = 0u64;

        for pos in 0..NUM_SQUARES {
            let move_bit = bit(pos);
            if (occupied & move_bit) != 0 {
                continue;
            }
            if Self::collect_flips(pos, me, opp) != 0 {
                legal |= move_bit;
            }
        }

        legal
    }

    /// True iff placing at (row, col) would flip at least one opposing disc.
    pub fn is_legal(&self, row: usize, col: usize, side: Side) -> bool {
        let (me, opp) = self.masks(side);
        Self::collect_flips(index_of(row, col), me, opp) != 0
    }

    /// Short-circuits on the first cell with a non-empty flip set.
    pub fn has_legal_move(&self, side: Side) -> bool {
        let (me, opp) = self.masks(side);
        let occupied = me | opp;
        for pos in 0..NUM_SQUARES {
            if (occupied & bit(pos)) != 0 {
                continue;
            }
            if Self::collect_flips(pos, me, opp) != 0 {
                return true;
            }
        }
        false
    }

    /// Places one disc and flips captured discs.
    /// Returns flipped bit mask. Returns 0 and leaves the board unchanged
    /// when the move is illegal.
    pub fn place(&mut self, pos: usize, side: Side) -> u64 {
        let (me, opp) = self.masks(side);

        let flips = Self::collect_flips(pos, me, opp);
        if flips == 0 {
            return 0;
        }

        let move_bit = bit(pos);
        let next_me = me | move_bit | flips;
        let next_opp = opp & !flips;

        match side {
            Side::Player => {
                self.player = next_me;
                self.ai = next_opp;
            }
            Side::Ai => {
                self.ai = next_me;
                self.player = next_opp;
            }
        }

        flips
    }

    /// Returns `(player_count, ai_count)`.
    pub fn count(&self) -> (u8, u8) {
        (self.player.count_ones() as u8, self.ai.count_ones() as u8)
    }

    /// Returns the number of empty squares.
    pub fn empty_count(&self) -> u8 {
        let (player_count, ai_count) = self.count();
        NUM_SQUARES as u8 - player_count - ai_count
    }

    pub fn is_full(&self) -> bool {
        (self.player | self.ai) == u64::MAX
    }

    /// Converts the board to a row-major cell array.
    pub fn to_array(&self) -> [Cell; NUM_SQUARES] {
        let mut board = [Cell::Empty; NUM_SQUARES];
        for (pos, cell) in board.iter_mut().enumerate() {
            let square = bit(pos);
            *cell = if (self.player & square) != 0 {
                Cell::Player
            } else if (self.ai & square) != 0 {
                Cell::Ai
            } else {
                Cell::Empty
            };
        }
        board
    }

    fn masks(&self, side: Side) -> (u64, u64) {
        match side {
            Side::Player => (self.player, self.ai),
            Side::Ai => (self.ai, self.player),
        }
    }

    fn collect_flips(pos: usize, me: u64, opp: u64) -> u64 {
        if pos >= NUM_SQUARES {
            return 0;
        }

        let move_bit = bit(pos);
        if ((me | opp) & move_bit) != 0 {
            return 0;
        }

        let (row, col) = pos_to_row_col(pos);
        let mut flips = 0u64;

        for (dr, dc) in DIRECTIONS {
            let mut r = row + dr;
            let mut c = col + dc;
            let mut line = 0u64;
            let mut has_opponent = false;

            while in_bounds(r, c) {
                let square = bit((r as usize) * BOARD_SIZE + c as usize);
                if (opp & square) != 0 {
                    has_opponent = true;
                    line |= square;
                } else if (me & square) != 0 {
                    if has_opponent {
                        flips |= line;
                    }
                    break;
                } else {
                    break;
                }

                r += dr;
                c += dc;
            }
        }

        flips
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

fn index_of(row: usize, col: usize) -> usize {
    assert!(
        row < BOARD_SIZE && col < BOARD_SIZE,
        "coordinates out of range: ({row}, {col})"
    );
    row * BOARD_SIZE + col
}

fn bit(pos: usize) -> u64 {
    if pos < NUM_SQUARES { 1u64 << pos } else { 0 }
}

fn pos_to_row_col(pos: usize) -> (i32, i32) {
    ((pos / BOARD_SIZE) as i32, (pos % BOARD_SIZE) as i32)
}

fn in_bounds(row: i32, col: i32) -> bool {
    (0..BOARD_SIZE as i32).contains(&row) && (0..BOARD_SIZE as i32).contains(&col)
}

/// Expands a bit mask into row-major board coordinates.
pub fn mask_to_positions(mask: u64) -> Vec<Position> {
    let mut bits = mask;
    let mut out = Vec::new();

    while bits != 0 {
        let pos = bits.trailing_zeros() as usize;
        out.push(Position {
            row: (pos / BOARD_SIZE) as u8,
            col: (pos % BOARD_SIZE) as u8,
        });
        bits &= bits - 1;
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn idx(row: usize, col: usize) -> usize {
        row * BOARD_SIZE + col
    }

    #[test]
    fn initial_board_has_canonical_layout() {
        let board = Board::new();

        assert_eq!(board.cell_at(3, 3), Cell::Ai);
        assert_eq!(board.cell_at(3, 4), Cell::Player);
        assert_eq!(board.cell_at(4, 3), Cell::Player);
        assert_eq!(board.cell_at(4, 4), Cell::Ai);
        assert_eq!(board.count(), (2, 2));
        assert_eq!(board.empty_count(), 60);
        assert!(!board.is_full());
    }

    #[test]
    fn t01_initial_player_legal_moves_are_four_expected_squares() {
        let board = Board::new();

        let expected = bit(idx(2, 3)) | bit(idx(3, 2)) | bit(idx(4, 5)) | bit(idx(5, 4)); // d3,c4,f5,e6

        assert_eq!(board.legal_moves(Side::Player), expected);
    }

    #[test]
    fn place_flips_opponent_discs_and_updates_counts() {
        let mut board = Board::new();

        let flips = board.place(idx(2, 3), Side::Player); // d3

        assert_eq!(flips, bit(idx(3, 3))); // d4
        assert_eq!(board.count(), (4, 1));
        assert_eq!(board.empty_count(), 59);

        let cells = board.to_array();
        assert_eq!(cells[idx(2, 3)], Cell::Player);
        assert_eq!(cells[idx(3, 3)], Cell::Player);
        assert_eq!(cells[idx(3, 4)], Cell::Player);
        assert_eq!(cells[idx(4, 3)], Cell::Player);
        assert_eq!(cells[idx(4, 4)], Cell::Ai);
    }

    #[test]
    fn place_grows_occupied_count_by_exactly_one() {
        let mut board = Board::new();
        let occupied_before = NUM_SQUARES as u8 - board.empty_count();

        let flips = board.place(idx(2, 3), Side::Player);

        assert_ne!(flips, 0);
        assert_eq!(NUM_SQUARES as u8 - board.empty_count(), occupied_before + 1);
    }

    #[test]
    fn illegal_place_returns_zero_and_keeps_board_unchanged() {
        let mut board = Board::new();
        let before = board;

        let flips = board.place(idx(0, 0), Side::Player);

        assert_eq!(flips, 0);
        assert_eq!(board, before);
    }

    #[test]
    fn is_legal_matches_legal_move_mask() {
        let board = Board::new();

        for side in [Side::Player, Side::Ai] {
            let mask = board.legal_moves(side);
            for row in 0..BOARD_SIZE {
                for col in 0..BOARD_SIZE {
                    let expected = (mask & bit(idx(row, col))) != 0;
                    assert_eq!(board.is_legal(row, col, side), expected);
                }
            }
        }
    }

    #[test]
    fn bracketing_without_any_opposing_disc_is_not_legal() {
        // Player at (0,1) and (0,2): placing at (0,0) reaches an own disc
        // directly, with no opposing disc in between.
        let board = Board::from_bitboards(bit(idx(0, 1)) | bit(idx(0, 2)), 0);

        assert!(!board.is_legal(0, 0, Side::Player));
    }

    #[test]
    fn has_legal_move_agrees_with_mask() {
        let board = Board::new();
        assert!(board.has_legal_move(Side::Player));
        assert!(board.has_legal_move(Side::Ai));

        // A lone disc: nobody can bracket anything.
        let lone = Board::from_bitboards(bit(idx(0, 0)), 0);
        assert!(!lone.has_legal_move(Side::Player));
        assert!(!lone.has_legal_move(Side::Ai));
    }

    #[test]
    fn set_cell_overwrites_and_clears() {
        let mut board = Board::new();

        board.set_cell(0, 0, Cell::Ai);
        assert_eq!(board.cell_at(0, 0), Cell::Ai);

        board.set_cell(0, 0, Cell::Player);
        assert_eq!(board.cell_at(0, 0), Cell::Player);

        board.set_cell(0, 0, Cell::Empty);
        assert_eq!(board.cell_at(0, 0), Cell::Empty);
        assert_eq!(board.count(), (2, 2));
    }

    #[test]
    fn full_board_is_detected() {
        let board = Board::from_bitboards(u64::MAX, 0);
        assert!(board.is_full());
        assert_eq!(board.empty_count(), 0);
    }

    #[test]
    fn mask_to_positions_is_row_major() {
        let mask = bit(idx(0, 7)) | bit(idx(1, 0)) | bit(idx(0, 2));
        let positions = mask_to_positions(mask);

        assert_eq!(
            positions,
            vec![
                Position { row: 0, col: 2 },
                Position { row: 0, col: 7 },
                Position { row: 1, col: 0 },
            ]
        );
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn out_of_range_cell_access_fails_fast() {
        let board = Board::new();
        let _ = board.cell_at(8, 0);
    }
}
