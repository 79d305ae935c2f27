use crate::position::Position;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Move {
    /// Take an empty cell.
    Place { x: u32, y: u32 },
    /// Take an opponent's cell with the once-per-game golden move.
    Golden { x: u32, y: u32 },
}

impl Move {
    pub fn place(x: u32, y: u32) -> Self {
        Move::Place { x, y }
    }

    pub fn golden(x: u32, y: u32) -> Self {
        Move::Golden { x, y }
    }

    pub fn is_golden(&self) -> bool {
        matches!(self, Move::Golden { .. })
    }

    pub fn position(&self) -> Position {
        match *self {
            Move::Place { x, y } | Move::Golden { x, y } => Position::new(x, y),
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Move::Place { x, y } => write!(f, "Place({}, {})", x, y),
            Move::Golden { x, y } => write!(f, "Golden({}, {})", x, y),
        }
    }
}
