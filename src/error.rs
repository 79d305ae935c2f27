use std::collections::TryReserveError;

use thiserror::Error;

/// Why a game could not be created.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("board width must be positive")]
    ZeroWidth,
    #[error("board height must be positive")]
    ZeroHeight,
    #[error("player count must be positive")]
    ZeroPlayers,
    #[error("area limit must be positive")]
    ZeroAreas,
    #[error("board {width}x{height} is too large to address")]
    BoardTooLarge { width: u32, height: u32 },
    #[error("failed to allocate game state: {0}")]
    Allocation(#[from] TryReserveError),
}

/// Why a move was rejected. A rejected move leaves the game untouched.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    #[error("player {0} is not in this game")]
    InvalidPlayer(u32),
    #[error("cell ({x}, {y}) is outside the board")]
    OutOfBounds { x: u32, y: u32 },
    #[error("cell is already taken")]
    Occupied,
    #[error("cell is empty")]
    Empty,
    #[error("cell already belongs to the player")]
    OwnCell,
    #[error("golden move already used")]
    GoldenUsed,
    #[error("move would start an area beyond the limit")]
    AreaLimit,
    #[error("capture would leave a player above the area limit")]
    CapExceeded,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            MoveError::OutOfBounds { x: 4, y: 1 }.to_string(),
            "cell (4, 1) is outside the board"
        );
        assert_eq!(
            GameError::BoardTooLarge {
                width: 7,
                height: 9
            }
            .to_string(),
            "board 7x9 is too large to address"
        );
    }
}
