use std::fmt;

/// A cell coordinate: the only kind of move in this game is "mark this cell".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Move {
    pub row: usize,
    pub col: usize,
}

impl Move {
    pub const fn new(row: usize, col: usize) -> Move {
        Self { row, col }
    }

    /// Row-major index on a board of side `size`.
    pub fn index(&self, size: usize) -> usize {
        self.row * size + self.col
    }

    pub fn from_index(idx: usize, size: usize) -> Move {
        Self {
            row: idx / size,
            col: idx % size,
        }
    }
}

impl From<(usize, usize)> for Move {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
