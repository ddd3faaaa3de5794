use super::*;

// ==================== HELPER FUNCTIONS ====================

/// Helper function to build a board from its row form
pub fn board(rows: &str) -> BoardState {
    BoardState::from_rows(rows).expect("test board should parse")
}

/// Helper function to play a sequence of moves, alternating sides from PlayerOne
pub fn play(size: usize, moves: &[(usize, usize)]) -> BoardState {
    let mut pos = BoardState::new(size).unwrap();
    for &(row, col) in moves {
        let side = pos.side_to_move();
        pos.place_mark(row, col, side).unwrap();
    }
    pos
}

/// Helper function to count non-empty cells the slow way
pub fn count_marks(pos: &BoardState) -> usize {
    let mut count = 0;
    for row in 0..pos.size() {
        for col in 0..pos.size() {
            if !pos.is_empty_cell(row, col) {
                count += 1;
            }
        }
    }
    count
}

// ==================== TEST MODULES ====================

mod place_mark;
