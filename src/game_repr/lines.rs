use super::Move;

/// A full-length line of the board. Winning requires filling one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Line {
    Row(usize),
    Column(usize),
    /// Top-left to bottom-right.
    MainDiagonal,
    /// Bottom-left to top-right.
    AntiDiagonal,
}

impl Line {
    /// Every line of a `size`x`size` board in the order the win scan visits
    /// them: rows, columns, main diagonal, anti diagonal.
    pub fn all(size: usize) -> impl Iterator<Item = Line> {
        (0..size)
            .map(Line::Row)
            .chain((0..size).map(Line::Column))
            .chain([Line::MainDiagonal, Line::AntiDiagonal])
    }

    /// Cells of the line, from its first end to its last.
    pub fn cells(self, size: usize) -> impl Iterator<Item = Move> {
        (0..size).map(move |i| match self {
            Line::Row(r) => Move::new(r, i),
            Line::Column(c) => Move::new(i, c),
            Line::MainDiagonal => Move::new(i, i),
            Line::AntiDiagonal => Move::new(size - 1 - i, i),
        })
    }
}
