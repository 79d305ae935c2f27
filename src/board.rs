use std::collections::TryReserveError;

use crate::player::Player;
use crate::position::{Direction, Position};

/// Width x height grid of cell owners.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    cells: Vec<Option<Player>>,
    width: u32,
    height: u32,
}

impl Board {
    /// An empty board. `len` must equal `width * height`.
    pub(crate) fn try_new(width: u32, height: u32, len: usize) -> Result<Self, TryReserveError> {
        let mut cells = Vec::new();
        cells.try_reserve_exact(len)?;
        cells.resize(len, None);
        Ok(Board {
            cells,
            width,
            height,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, pos: &Position) -> bool {
        pos.is_valid(self.width, self.height)
    }

    pub fn index(&self, pos: &Position) -> usize {
        pos.to_index(self.width)
    }

    pub fn position(&self, index: usize) -> Position {
        Position::from_index(index, self.width)
    }

    pub fn get_piece(&self, pos: &Position) -> Option<Player> {
        if self.contains(pos) {
            self.cells[self.index(pos)]
        } else {
            None
        }
    }

    pub(crate) fn set_piece(&mut self, pos: &Position, player: Option<Player>) {
        if self.contains(pos) {
            let idx = self.index(pos);
            self.cells[idx] = player;
        }
    }

    pub fn get_at(&self, index: usize) -> Option<Player> {
        self.cells[index]
    }

    /// Cells in index order, paired with their index.
    pub fn cells(&self) -> impl Iterator<Item = (usize, Option<Player>)> + '_ {
        self.cells.iter().copied().enumerate()
    }

    /// Orthogonal neighbours of `pos` that lie on the board.
    pub fn neighbors(&self, pos: Position) -> impl Iterator<Item = Position> {
        let (width, height) = (self.width, self.height);
        Direction::ALL
            .into_iter()
            .filter_map(move |dir| pos.step(dir, width, height))
    }

    /// True if any orthogonal neighbour of `pos` belongs to `player`.
    pub fn touches(&self, pos: Position, player: Player) -> bool {
        self.neighbors(pos)
            .any(|n| self.get_piece(&n) == Some(player))
    }
}
