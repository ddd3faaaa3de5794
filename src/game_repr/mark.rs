use std::fmt;

/// One of the two sides of the game. PlayerOne always moves first and is the
/// maximizing side of the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    PlayerOne,
    PlayerTwo,
}

impl Side {
    pub fn opposite(&self) -> Self {
        match self {
            Self::PlayerOne => Self::PlayerTwo,
            Self::PlayerTwo => Self::PlayerOne,
        }
    }

    /// True for the side whose score the search tries to increase.
    pub fn is_maximizing(&self) -> bool {
        matches!(self, Self::PlayerOne)
    }

    pub fn to_char(self) -> char {
        Mark::from(self).to_char()
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::PlayerOne => write!(f, "Player 1 (X)"),
            Side::PlayerTwo => write!(f, "Player 2 (O)"),
        }
    }
}

/// Content of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mark {
    #[default]
    Empty,
    PlayerOne,
    PlayerTwo,
}

impl Mark {
    pub fn is_empty(&self) -> bool {
        *self == Mark::Empty
    }

    /// The side owning this mark, `None` for an empty cell.
    pub fn side(&self) -> Option<Side> {
        match self {
            Mark::Empty => None,
            Mark::PlayerOne => Some(Side::PlayerOne),
            Mark::PlayerTwo => Some(Side::PlayerTwo),
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Mark::Empty => '.',
            Mark::PlayerOne => 'X',
            Mark::PlayerTwo => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '.' | ' ' | '_' => Some(Mark::Empty),
            'X' | 'x' => Some(Mark::PlayerOne),
            'O' | 'o' => Some(Mark::PlayerTwo),
            _ => None,
        }
    }
}

impl From<Side> for Mark {
    fn from(side: Side) -> Self {
        match side {
            Side::PlayerOne => Mark::PlayerOne,
            Side::PlayerTwo => Mark::PlayerTwo,
        }
    }
}
