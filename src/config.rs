use crate::error::GameError;

/// Fixed parameters of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GameConfig {
    pub width: u32,
    pub height: u32,
    pub players: u32,
    /// Maximum number of areas a single player may hold at once.
    pub areas: u32,
}

impl GameConfig {
    pub fn new(width: u32, height: u32, players: u32, areas: u32) -> Self {
        GameConfig {
            width,
            height,
            players,
            areas,
        }
    }

    /// Checks every field and returns the number of cells on the board.
    pub fn validate(&self) -> Result<usize, GameError> {
        if self.width == 0 {
            return Err(GameError::ZeroWidth);
        }
        if self.height == 0 {
            return Err(GameError::ZeroHeight);
        }
        if self.players == 0 {
            return Err(GameError::ZeroPlayers);
        }
        if self.areas == 0 {
            return Err(GameError::ZeroAreas);
        }
        (self.width as usize)
            .checked_mul(self.height as usize)
            .ok_or(GameError::BoardTooLarge {
                width: self.width,
                height: self.height,
            })
    }
}
