use tracing::{debug, trace};

use crate::adjacency::free_adjacent_delta;
use crate::board::Board;
use crate::config::GameConfig;
use crate::disjoint_set::DisjointSet;
use crate::error::{GameError, MoveError};
use crate::outcome::GameOutcome;
use crate::player::{Player, PlayerStats};
use crate::position::Position;
use crate::r#move::Move;

#[derive(Clone, Debug)]
pub struct Game {
    pub(crate) config: GameConfig,
    pub(crate) board: Board,
    pub(crate) stats: Vec<PlayerStats>,
    free_fields: u64,
    pub(crate) forest: DisjointSet,
    /// Copy of `forest` taken before a golden-move trial.
    pub(crate) snapshot: DisjointSet,
}

impl Game {
    pub fn new(width: u32, height: u32, players: u32, areas: u32) -> Result<Self, GameError> {
        Self::with_config(GameConfig::new(width, height, players, areas))
    }

    /// Allocates every structure up front. On failure everything acquired so
    /// far is dropped before the error is returned.
    pub fn with_config(config: GameConfig) -> Result<Self, GameError> {
        let cells = config.validate()?;

        let board = Board::try_new(config.width, config.height, cells)?;
        let forest = DisjointSet::try_new(cells)?;
        let snapshot = DisjointSet::try_new(cells)?;

        let mut stats = Vec::new();
        stats.try_reserve_exact(config.players as usize)?;
        stats.resize(config.players as usize, PlayerStats::default());

        debug!(
            width = config.width,
            height = config.height,
            players = config.players,
            areas = config.areas,
            "created game"
        );

        Ok(Game {
            config,
            board,
            stats,
            free_fields: cells as u64,
            forest,
            snapshot,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn width(&self) -> u32 {
        self.config.width
    }

    pub fn height(&self) -> u32 {
        self.config.height
    }

    pub fn players(&self) -> u32 {
        self.config.players
    }

    pub fn max_areas(&self) -> u32 {
        self.config.areas
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The player with this id, if it takes part in the game.
    pub fn player(&self, id: u32) -> Option<Player> {
        Player::new(id).filter(|p| p.id() <= self.config.players)
    }

    pub fn owner(&self, x: u32, y: u32) -> Option<Player> {
        self.board.get_piece(&Position::new(x, y))
    }

    pub fn stats(&self, player: u32) -> Option<&PlayerStats> {
        self.player(player).map(|p| &self.stats[p.index()])
    }

    /// Cells owned by `player`; 0 for an unknown player.
    pub fn fields_owned(&self, player: u32) -> u64 {
        self.stats(player).map_or(0, |s| s.fields)
    }

    pub fn areas_owned(&self, player: u32) -> u64 {
        self.stats(player).map_or(0, |s| s.areas)
    }

    pub fn free_adjacent(&self, player: u32) -> u64 {
        self.stats(player).map_or(0, |s| s.free_adjacent)
    }

    pub fn golden_used(&self, player: u32) -> bool {
        self.stats(player).is_some_and(|s| s.golden_used)
    }

    /// Empty cells on the whole board.
    pub fn free_fields(&self) -> u64 {
        self.free_fields
    }

    /// Cells `player` could take with an ordinary move: every empty cell while
    /// below the area limit, otherwise only the empty cells next to their areas.
    pub fn free_cells_for(&self, player: u32) -> u64 {
        match self.stats(player) {
            Some(s) if s.areas < u64::from(self.config.areas) => self.free_fields,
            Some(s) => s.free_adjacent,
            None => 0,
        }
    }

    /// True if `player` holds the maximum number of areas and `pos` touches
    /// none of them, i.e. taking `pos` would need one area too many.
    pub(crate) fn opens_area_beyond_limit(&self, player: Player, pos: Position) -> bool {
        self.stats[player.index()].areas >= u64::from(self.config.areas)
            && !self.board.touches(pos, player)
    }

    /// Unions the cell at `pos` with every same-owner neighbour in a different
    /// set. Returns the number of merges.
    pub(crate) fn merge_with_neighbors(&mut self, pos: Position, player: Player) -> u64 {
        let idx = self.board.index(&pos);
        let mut merges = 0;
        for neighbor in self.board.neighbors(pos) {
            if self.board.get_piece(&neighbor) == Some(player)
                && self.forest.union(idx, self.board.index(&neighbor))
            {
                merges += 1;
            }
        }
        merges
    }

    fn check_place(&self, id: u32, x: u32, y: u32) -> Result<(Player, Position), MoveError> {
        let player = self.player(id).ok_or(MoveError::InvalidPlayer(id))?;
        let pos = Position::new(x, y);
        if !self.board.contains(&pos) {
            return Err(MoveError::OutOfBounds { x, y });
        }
        if self.board.get_piece(&pos).is_some() {
            return Err(MoveError::Occupied);
        }
        if self.opens_area_beyond_limit(player, pos) {
            return Err(MoveError::AreaLimit);
        }
        Ok((player, pos))
    }

    fn apply_place(&mut self, player: Player, pos: Position) {
        let delta = free_adjacent_delta(&self.board, pos, player, false);
        self.board.set_piece(&pos, Some(player));
        self.free_fields -= 1;

        let stats = &mut self.stats[player.index()];
        stats.fields += 1;
        stats.areas += 1;
        stats.adjust_free_adjacent(delta);

        // The cell was free-adjacent for every opponent touching it; charge
        // each of them once.
        let mut charged: [Option<Player>; 4] = [None; 4];
        for (slot, neighbor) in self.board.neighbors(pos).enumerate() {
            let Some(owner) = self.board.get_piece(&neighbor) else {
                continue;
            };
            if owner == player || charged.contains(&Some(owner)) {
                continue;
            }
            charged[slot] = Some(owner);
            self.stats[owner.index()].adjust_free_adjacent(-1);
        }

        let merges = self.merge_with_neighbors(pos, player);
        self.stats[player.index()].areas -= merges;
    }

    /// Places a piece of `player` on the empty cell `(x, y)`.
    #[hotpath::measure]
    pub fn try_place(&mut self, player: u32, x: u32, y: u32) -> Result<(), MoveError> {
        match self.check_place(player, x, y) {
            Ok((p, pos)) => {
                self.apply_place(p, pos);
                trace!(player, x, y, "placed");
                Ok(())
            }
            Err(err) => {
                debug!(player, x, y, %err, "placement rejected");
                Err(err)
            }
        }
    }

    pub fn place(&mut self, player: u32, x: u32, y: u32) -> bool {
        self.try_place(player, x, y).is_ok()
    }

    /// Whether `player` may play `move_` now. Golden moves are decided by a
    /// trial that is always rolled back, hence `&mut self`.
    pub fn is_legal_move(&mut self, player: u32, move_: &Move) -> bool {
        match *move_ {
            Move::Place { x, y } => self.check_place(player, x, y).is_ok(),
            Move::Golden { x, y } => match self.check_capture(player, x, y) {
                Ok((p, _, pos)) => self.golden_trial_succeeds(p, pos),
                Err(_) => false,
            },
        }
    }

    pub fn make_move(&mut self, player: u32, move_: &Move) -> bool {
        match *move_ {
            Move::Place { x, y } => self.place(player, x, y),
            Move::Golden { x, y } => self.capture(player, x, y),
        }
    }

    /// Every ordinary placement and golden capture `player` may make.
    pub fn legal_moves(&mut self, player: u32) -> Vec<Move> {
        let Some(p) = self.player(player) else {
            return Vec::new();
        };
        let golden_available = !self.stats[p.index()].golden_used;

        let mut moves = Vec::new();
        for idx in 0..self.board.len() {
            let pos = self.board.position(idx);
            match self.board.get_at(idx) {
                None => {
                    if !self.opens_area_beyond_limit(p, pos) {
                        moves.push(Move::place(pos.x, pos.y));
                    }
                }
                Some(owner) if owner != p && golden_available => {
                    if self.golden_trial_succeeds(p, pos) {
                        moves.push(Move::golden(pos.x, pos.y));
                    }
                }
                Some(_) => {}
            }
        }
        moves
    }

    /// A player can act if some cell is open to them or a golden move exists.
    pub fn can_move(&mut self, player: u32) -> bool {
        self.free_cells_for(player) > 0 || self.golden_move_possible(player)
    }

    /// The game ends once no player can act.
    pub fn is_over(&mut self) -> bool {
        !(1..=self.config.players).any(|p| self.can_move(p))
    }

    pub fn outcome(&self) -> GameOutcome {
        GameOutcome::from_fields(
            self.stats
                .iter()
                .enumerate()
                .filter_map(|(i, s)| Player::from_index(i).map(|p| (p, s.fields))),
        )
    }

    /// Text board, top row first.
    pub fn render(&self) -> String {
        self.to_string()
    }
}
