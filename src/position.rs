#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    West,
    South,
    East,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::West,
        Direction::South,
        Direction::East,
    ];
}

/// A cell coordinate. `x` is the column, `y` the row; row 0 is the bottom row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: u32,
    pub y: u32,
}

impl Position {
    pub fn new(x: u32, y: u32) -> Self {
        Position { x, y }
    }

    pub fn from_index(index: usize, width: u32) -> Self {
        let w = width as usize;
        Position {
            x: (index % w) as u32,
            y: (index / w) as u32,
        }
    }

    pub fn to_index(&self, width: u32) -> usize {
        self.y as usize * width as usize + self.x as usize
    }

    pub fn is_valid(&self, width: u32, height: u32) -> bool {
        self.x < width && self.y < height
    }

    /// The cell one step away in `dir`, or `None` if it falls off the board.
    pub fn step(&self, dir: Direction, width: u32, height: u32) -> Option<Position> {
        let next = match dir {
            Direction::North => Position::new(self.x, self.y.checked_add(1)?),
            Direction::South => Position::new(self.x, self.y.checked_sub(1)?),
            Direction::East => Position::new(self.x.checked_add(1)?, self.y),
            Direction::West => Position::new(self.x.checked_sub(1)?, self.y),
        };
        next.is_valid(width, height).then_some(next)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
