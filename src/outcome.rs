use crate::player::Player;

/// Final standings: the players holding the most cells.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameOutcome {
    winners: Vec<Player>,
    fields: u64,
}

impl GameOutcome {
    /// Standings from `(player, fields owned)` pairs.
    pub fn from_fields(fields: impl IntoIterator<Item = (Player, u64)>) -> Self {
        let mut winners = Vec::new();
        let mut best = 0;

        for (player, owned) in fields {
            if owned > best || winners.is_empty() {
                winners.clear();
                best = owned;
            }
            if owned == best {
                winners.push(player);
            }
        }

        GameOutcome {
            winners,
            fields: best,
        }
    }

    /// Every player tied for the lead.
    pub fn winners(&self) -> &[Player] {
        &self.winners
    }

    /// Cells held by each winner.
    pub fn winning_fields(&self) -> u64 {
        self.fields
    }

    pub fn is_winner(&self, player: Player) -> bool {
        self.winners.contains(&player)
    }

    pub fn is_draw(&self) -> bool {
        self.winners.len() > 1
    }
}

impl std::fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.winners.as_slice() {
            [winner] => write!(f, "Player {} wins with {} fields", winner, self.fields),
            winners => {
                let names: Vec<String> = winners.iter().map(|p| p.to_string()).collect();
                write!(f, "Draw between players {} with {} fields", names.join(", "), self.fields)
            }
        }
    }
}
