//! Console player: reads `row col` coordinates line by line.
//!
//! Input and output are generic so the same player drives stdin/stdout in the
//! binary and in-memory buffers in tests.

use super::player::{GameResult, Player};
use crate::game_repr::{BoardState, Move, Side};
use std::io::{self, BufRead, StdinLock, Stdout, Write};

pub struct HumanPlayer<R, W> {
    input: R,
    output: W,
    name: String,
}

impl HumanPlayer<StdinLock<'static>, Stdout> {
    /// Player bound to the process's stdin and stdout.
    pub fn stdio(name: String) -> Self {
        Self::new(io::stdin().lock(), io::stdout(), name)
    }
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    pub fn new(input: R, output: W, name: String) -> Self {
        Self {
            input,
            output,
            name,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Prompt until a usable move, a quit command or end of input.
    fn prompt(&mut self, board: &BoardState, side: Side) -> io::Result<Option<Move>> {
        write!(self.output, "\n{board}")?;
        loop {
            write!(self.output, "{side}, enter row and column (q to quit): ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            let line = line.trim();
            if line.eq_ignore_ascii_case("q") || line.eq_ignore_ascii_case("quit") {
                return Ok(None);
            }

            match parse_coordinates(line) {
                Some(mv) if board.is_empty_cell(mv.row, mv.col) => return Ok(Some(mv)),
                Some(mv) => writeln!(self.output, "Cell {mv} is not available")?,
                None => writeln!(self.output, "Expected two numbers, e.g. \"1 2\"")?,
            }
        }
    }
}

/// Parse `"row col"`, `"row,col"` or `"(row, col)"`.
pub fn parse_coordinates(line: &str) -> Option<Move> {
    let mut parts = line
        .split(|c: char| c.is_whitespace() || c == ',' || c == '(' || c == ')')
        .filter(|part| !part.is_empty());
    let row = parts.next()?.parse().ok()?;
    let col = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(Move::new(row, col))
}

impl<R: BufRead, W: Write> Player for HumanPlayer<R, W> {
    fn get_move(&mut self, board: &BoardState, side: Side) -> Option<Move> {
        match self.prompt(board, side) {
            Ok(mv) => mv,
            Err(err) => {
                log::warn!("[{}] console error: {}", self.name, err);
                None
            }
        }
    }

    fn opponent_moved(&mut self, mv: Move) {
        let _ = writeln!(self.output, "Opponent marked {mv}");
    }

    fn game_ended(&mut self, result: GameResult) {
        let _ = writeln!(self.output, "*** {result} ***");
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn player(input: &str) -> HumanPlayer<Cursor<Vec<u8>>, Vec<u8>> {
        HumanPlayer::new(Cursor::new(input.as_bytes().to_vec()), Vec::new(), "Tester".to_string())
    }

    #[test]
    fn test_parse_coordinates() {
        assert_eq!(parse_coordinates("1 2"), Some(Move::new(1, 2)));
        assert_eq!(parse_coordinates(" 0,4 "), Some(Move::new(0, 4)));
        assert_eq!(parse_coordinates("(2, 0)"), Some(Move::new(2, 0)));
        assert_eq!(parse_coordinates("1"), None);
        assert_eq!(parse_coordinates("a b"), None);
        assert_eq!(parse_coordinates("1 2 3"), None);
    }

    #[test]
    fn test_reads_move() {
        let board = BoardState::new(3).unwrap();
        let mut human = player("1 1\n");
        assert_eq!(human.get_move(&board, Side::PlayerOne), Some(Move::new(1, 1)));
    }

    #[test]
    fn test_reprompts_on_bad_input() {
        let board = BoardState::from_rows("X../.../...").unwrap();
        let mut human = player("hello\n0 0\n7 7\n2 2\n");
        assert_eq!(human.get_move(&board, Side::PlayerTwo), Some(Move::new(2, 2)));

        let output = String::from_utf8(human.into_output()).unwrap();
        assert!(output.contains("Expected two numbers"));
        assert!(output.contains("Cell (0, 0) is not available"));
        assert!(output.contains("Cell (7, 7) is not available"));
    }

    #[test]
    fn test_quit_and_eof_resign() {
        let board = BoardState::new(3).unwrap();
        assert_eq!(player("q\n").get_move(&board, Side::PlayerOne), None);
        assert_eq!(player("").get_move(&board, Side::PlayerOne), None);
    }
}
