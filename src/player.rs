use std::num::NonZeroU32;

/// A player id. Ids start at 1; 0 is reserved for an empty cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Player(NonZeroU32);

impl Player {
    pub fn new(id: u32) -> Option<Player> {
        NonZeroU32::new(id).map(Player)
    }

    pub fn id(&self) -> u32 {
        self.0.get()
    }

    /// Zero-based slot in per-player tables.
    pub fn index(&self) -> usize {
        self.0.get() as usize - 1
    }

    pub fn from_index(index: usize) -> Option<Player> {
        u32::try_from(index + 1).ok().and_then(Player::new)
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Mutable per-player bookkeeping.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlayerStats {
    /// Cells owned.
    pub fields: u64,
    /// Maximal connected components owned. Never above the game's area cap
    /// once a move has committed.
    pub areas: u64,
    /// Distinct empty cells touching at least one owned cell.
    pub free_adjacent: u64,
    pub golden_used: bool,
}

impl PlayerStats {
    pub(crate) fn adjust_free_adjacent(&mut self, delta: i64) {
        self.free_adjacent = self.free_adjacent.saturating_add_signed(delta);
    }
}
