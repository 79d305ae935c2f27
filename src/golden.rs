//! Golden moves: taking one opponent cell, once per game.
//!
//! A capture can split the robbed player's area into several pieces, which
//! the incremental union-find cannot detect. Every attempt therefore runs as a
//! trial: the forest is snapshotted, both players' sets are rebuilt from the
//! board, and the whole change is rolled back if either player ends up above
//! the area limit.

use tracing::{debug, trace};

use crate::adjacency::free_adjacent_delta;
use crate::error::MoveError;
use crate::game::Game;
use crate::player::Player;
use crate::position::Position;

/// State needed to undo a trial.
#[derive(Debug)]
struct Trial {
    player: Player,
    robbed: Player,
    pos: Position,
    player_areas: u64,
    robbed_areas: u64,
}

impl Game {
    pub(crate) fn check_capture(
        &self,
        id: u32,
        x: u32,
        y: u32,
    ) -> Result<(Player, Player, Position), MoveError> {
        let player = self.player(id).ok_or(MoveError::InvalidPlayer(id))?;
        let pos = Position::new(x, y);
        if !self.board.contains(&pos) {
            return Err(MoveError::OutOfBounds { x, y });
        }
        let robbed = self.board.get_piece(&pos).ok_or(MoveError::Empty)?;
        if robbed == player {
            return Err(MoveError::OwnCell);
        }
        if self.stats[player.index()].golden_used {
            return Err(MoveError::GoldenUsed);
        }
        if self.opens_area_beyond_limit(player, pos) {
            return Err(MoveError::AreaLimit);
        }
        Ok((player, robbed, pos))
    }

    /// Hands `pos` to `player` and recounts the areas of both players from
    /// scratch. Must be followed by exactly one of `rollback` or `commit`.
    fn begin_trial(&mut self, player: Player, robbed: Player, pos: Position) -> Trial {
        self.snapshot.clone_from(&self.forest);
        let trial = Trial {
            player,
            robbed,
            pos,
            player_areas: self.stats[player.index()].areas,
            robbed_areas: self.stats[robbed.index()].areas,
        };

        self.board.set_piece(&pos, Some(player));

        // Every cell starts as its own area and each merge removes one.
        let p = &mut self.stats[player.index()];
        p.areas = p.fields + 1;
        let r = &mut self.stats[robbed.index()];
        r.areas = r.fields - 1;

        let involved = |owner: Option<Player>| owner == Some(player) || owner == Some(robbed);

        for idx in 0..self.board.len() {
            if involved(self.board.get_at(idx)) {
                self.forest.reset(idx);
            }
        }

        for idx in 0..self.board.len() {
            let Some(owner) = self.board.get_at(idx) else {
                continue;
            };
            if owner == player || owner == robbed {
                let merges = self.merge_with_neighbors(self.board.position(idx), owner);
                self.stats[owner.index()].areas -= merges;
            }
        }

        trial
    }

    fn trial_fits(&self, trial: &Trial) -> bool {
        let limit = u64::from(self.config.areas);
        self.stats[trial.player.index()].areas <= limit
            && self.stats[trial.robbed.index()].areas <= limit
    }

    fn rollback(&mut self, trial: Trial) {
        self.forest.clone_from(&self.snapshot);
        self.stats[trial.player.index()].areas = trial.player_areas;
        self.stats[trial.robbed.index()].areas = trial.robbed_areas;
        self.board.set_piece(&trial.pos, Some(trial.robbed));
    }

    fn commit(&mut self, trial: Trial) {
        let Trial {
            player,
            robbed,
            pos,
            ..
        } = trial;

        let lost = free_adjacent_delta(&self.board, pos, robbed, true);
        let gained = free_adjacent_delta(&self.board, pos, player, true);

        let p = &mut self.stats[player.index()];
        p.golden_used = true;
        p.fields += 1;
        p.adjust_free_adjacent(gained);

        let r = &mut self.stats[robbed.index()];
        r.fields -= 1;
        r.adjust_free_adjacent(-lost);
    }

    /// Runs a full trial of `player` taking `pos` and always rolls it back.
    pub(crate) fn golden_trial_succeeds(&mut self, player: Player, pos: Position) -> bool {
        let Some(robbed) = self.board.get_piece(&pos) else {
            return false;
        };
        if robbed == player || self.opens_area_beyond_limit(player, pos) {
            return false;
        }

        let trial = self.begin_trial(player, robbed, pos);
        let fits = self.trial_fits(&trial);
        self.rollback(trial);
        fits
    }

    /// Takes the opponent cell `(x, y)` for `player` with their golden move.
    #[hotpath::measure]
    pub fn try_capture(&mut self, player: u32, x: u32, y: u32) -> Result<(), MoveError> {
        let (p, robbed, pos) = match self.check_capture(player, x, y) {
            Ok(checked) => checked,
            Err(err) => {
                debug!(player, x, y, %err, "golden move rejected");
                return Err(err);
            }
        };

        let trial = self.begin_trial(p, robbed, pos);
        if !self.trial_fits(&trial) {
            debug!(
                player,
                robbed = robbed.id(),
                x,
                y,
                "golden move exceeds area limit, rolling back"
            );
            self.rollback(trial);
            return Err(MoveError::CapExceeded);
        }

        self.commit(trial);
        trace!(player, robbed = robbed.id(), x, y, "golden move");
        Ok(())
    }

    pub fn capture(&mut self, player: u32, x: u32, y: u32) -> bool {
        self.try_capture(player, x, y).is_ok()
    }

    /// Whether `player` has any golden move that would succeed right now.
    ///
    /// Each candidate is tried for real and then rolled back, whatever the
    /// result; the game is left exactly as it was.
    #[hotpath::measure]
    pub fn golden_move_possible(&mut self, player: u32) -> bool {
        let Some(p) = self.player(player) else {
            return false;
        };
        if self.stats[p.index()].golden_used {
            return false;
        }

        for idx in 0..self.board.len() {
            let pos = self.board.position(idx);
            if self.golden_trial_succeeds(p, pos) {
                return true;
            }
        }
        false
    }
}
