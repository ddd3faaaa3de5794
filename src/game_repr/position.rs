use super::*;
use crate::error::{GameError, Result};
use smallvec::SmallVec;
use std::fmt;
use std::str::FromStr;

/*
 * MODULE IS RESPONSIBLE FOR
 * BOARD REPRESENTATION AND TERMINAL DETECTION
 */

pub const MIN_SIZE: usize = 3;
pub const MAX_SIZE: usize = 5;
pub const MAX_CELLS: usize = MAX_SIZE * MAX_SIZE;

/// Move list that never spills to the heap for supported board sizes.
pub type MoveList = SmallVec<[Move; MAX_CELLS]>;

/// One position of an N-in-a-row game on a square board of side 3, 4 or 5.
///
/// Cells are stored row-major in a fixed array so a clone is a plain memcpy;
/// the search takes one per explored branch.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BoardState {
    size: usize,
    cells: [Mark; MAX_CELLS],
    /// Number of non-empty cells, kept in sync by `place_mark`.
    marked_count: usize,
}

impl BoardState {
    /// Create an empty board of side `size`.
    pub fn new(size: usize) -> Result<BoardState> {
        if !(MIN_SIZE..=MAX_SIZE).contains(&size) {
            return Err(GameError::InvalidBoardSize(size));
        }
        Ok(Self {
            size,
            cells: [Mark::Empty; MAX_CELLS],
            marked_count: 0,
        })
    }

    /// Parse a board from `/`-separated rows, e.g. `"XO./.X./..O"`.
    ///
    /// `X` is PlayerOne, `O` is PlayerTwo and `.` an empty cell. The row count
    /// decides the board size, every row must be exactly that long.
    pub fn from_rows(rows: &str) -> Result<BoardState> {
        let rows: Vec<&str> = rows.trim().split('/').map(str::trim).collect();
        let size = rows.len();
        let mut board = BoardState::new(size)?;

        for (r, row) in rows.iter().enumerate() {
            if row.chars().count() != size {
                return Err(GameError::InvalidBoardSize(row.chars().count()));
            }
            for (c, ch) in row.chars().enumerate() {
                let mark = Mark::from_char(ch)
                    .ok_or(GameError::InvalidCell { character: ch, row: r })?;
                if let Some(side) = mark.side() {
                    board.place_mark(r, c, side)?;
                }
            }
        }

        Ok(board)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn marked_count(&self) -> usize {
        self.marked_count
    }

    pub fn cell_count(&self) -> usize {
        self.size * self.size
    }

    /// Content of a cell, `None` when the coordinate is off the board.
    pub fn mark_at(&self, row: usize, col: usize) -> Option<Mark> {
        if row < self.size && col < self.size {
            Some(self.cells[row * self.size + col])
        } else {
            None
        }
    }

    /// Mark an empty cell for `side`.
    ///
    /// Fails with `OutOfBounds` for a coordinate off the board and with
    /// `InvalidMove` if the cell already holds a mark; the board is left
    /// untouched in both cases.
    pub fn place_mark(&mut self, row: usize, col: usize, side: Side) -> Result<()> {
        match self.mark_at(row, col) {
            None => Err(GameError::OutOfBounds {
                row,
                col,
                size: self.size,
            }),
            Some(Mark::Empty) => {
                self.set(row * self.size + col, side);
                Ok(())
            }
            Some(_) => Err(GameError::InvalidMove { row, col }),
        }
    }

    /// Copy of this board with `mv` applied for `side`.
    ///
    /// Used by the search on moves taken from `legal_moves`, so the target
    /// cell is known to be empty.
    pub(crate) fn with_mark(&self, mv: Move, side: Side) -> BoardState {
        let mut next = self.clone();
        let idx = mv.index(self.size);
        debug_assert!(next.cells[idx].is_empty(), "search marked occupied cell {mv}");
        next.set(idx, side);
        next
    }

    fn set(&mut self, idx: usize, side: Side) {
        self.cells[idx] = Mark::from(side);
        self.marked_count += 1;
    }

    pub fn is_empty_cell(&self, row: usize, col: usize) -> bool {
        self.mark_at(row, col) == Some(Mark::Empty)
    }

    /// All empty cells in row-major order.
    ///
    /// The order matters: the search keeps the first move it finds among
    /// equally scored ones.
    pub fn legal_moves(&self) -> MoveList {
        (0..self.cell_count())
            .filter(|&idx| self.cells[idx].is_empty())
            .map(|idx| Move::from_index(idx, self.size))
            .collect()
    }

    pub fn is_full(&self) -> bool {
        self.marked_count == self.cell_count()
    }

    pub fn is_empty(&self) -> bool {
        self.marked_count == 0
    }

    /// Side that has filled a whole row, column or diagonal, if any.
    pub fn winner(&self) -> Option<Side> {
        self.winning_line().map(|(side, _)| side)
    }

    /// Winner together with the first completed line, scanning rows, then
    /// columns, then the main and anti diagonals.
    pub fn winning_line(&self) -> Option<(Side, Line)> {
        Line::all(self.size).find_map(|line| {
            let mut cells = line.cells(self.size).map(|mv| self.cells[mv.index(self.size)]);
            let side = cells.next()?.side()?;
            let owner = Mark::from(side);
            cells.all(|mark| mark == owner).then_some((side, line))
        })
    }

    /// Win or draw.
    pub fn is_terminal(&self) -> bool {
        self.is_full() || self.winner().is_some()
    }

    pub fn is_draw(&self) -> bool {
        self.is_full() && self.winner().is_none()
    }

    /// Sides alternate strictly and PlayerOne opens, so the parity of the mark
    /// count tells whose turn it is.
    pub fn side_to_move(&self) -> Side {
        if self.marked_count % 2 == 0 {
            Side::PlayerOne
        } else {
            Side::PlayerTwo
        }
    }

    /// Compact `/`-separated form accepted by `from_rows`.
    pub fn to_rows(&self) -> String {
        self.cells[..self.cell_count()]
            .chunks(self.size)
            .map(|row| row.iter().map(|m| m.to_char()).collect::<String>())
            .collect::<Vec<_>>()
            .join("/")
    }
}

impl FromStr for BoardState {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        BoardState::from_rows(s)
    }
}

impl fmt::Display for BoardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, " ")?;
        for col in 0..self.size {
            write!(f, " {col}")?;
        }
        writeln!(f)?;
        for (row, cells) in self.cells[..self.cell_count()].chunks(self.size).enumerate() {
            write!(f, "{row}")?;
            for mark in cells {
                write!(f, " {}", mark.to_char())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
