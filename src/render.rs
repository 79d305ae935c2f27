use std::fmt;

use crate::board::Board;
use crate::game::Game;
use crate::player::Player;
use crate::position::Position;

const RESET: &str = "\x1b[0m";
const ACTIVE: &str = "\x1b[1;36m";
const CURSOR: &str = "\x1b[1;45m";
const ACTIVE_CURSOR: &str = "\x1b[1;36;45m";
const STATUS: &str = "\x1b[0;36m";
const FREE: &str = "\x1b[1;32m";
const GOLDEN: &str = "\x1b[1;33m";
const LOSER: &str = "\x1b[0;31m";

fn digits(n: u32) -> usize {
    n.checked_ilog10().map_or(1, |d| d as usize + 1)
}

/// Width of one cell: `None` for single characters, otherwise the number of
/// digits in the largest player id (each cell is then followed by a space).
fn cell_width(players: u32) -> Option<usize> {
    (players >= 10).then(|| digits(players))
}

fn write_cell(
    f: &mut fmt::Formatter<'_>,
    owner: Option<Player>,
    width: Option<usize>,
    highlight: Option<&str>,
) -> fmt::Result {
    let label = match owner {
        Some(player) => player.to_string(),
        None => ".".to_string(),
    };
    if let Some(w) = width {
        write!(f, "{}", " ".repeat(w.saturating_sub(label.len())))?;
    }
    match highlight {
        Some(style) => write!(f, "{}{}{}", style, label, RESET)?,
        None => write!(f, "{}", label)?,
    }
    if width.is_some() {
        write!(f, " ")?;
    }
    Ok(())
}

fn write_board(
    f: &mut fmt::Formatter<'_>,
    board: &Board,
    players: u32,
    style: impl Fn(Position, Option<Player>) -> Option<&'static str>,
) -> fmt::Result {
    let width = cell_width(players);
    for y in (0..board.height()).rev() {
        for x in 0..board.width() {
            let pos = Position::new(x, y);
            let owner = board.get_piece(&pos);
            write_cell(f, owner, width, style(pos, owner))?;
        }
        writeln!(f)?;
    }
    Ok(())
}

/// One line per row, top row first: `.` for an empty cell, otherwise the
/// owner's id. With ten or more players every cell is right-aligned to the
/// width of the largest id and followed by a space.
impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_board(f, self.board(), self.players(), |_, _| None)
    }
}

/// Interactive view of the board for one player's turn.
#[derive(Clone, Copy, Debug)]
pub struct Frame<'a> {
    game: &'a Game,
    cursor: Position,
    active: Option<Player>,
    golden_possible: bool,
}

impl fmt::Display for Frame<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let game = self.game;
        write_board(f, game.board(), game.players(), |pos, owner| {
            let own = owner.is_some() && owner == self.active;
            match (own, pos == self.cursor) {
                (true, true) => Some(ACTIVE_CURSOR),
                (true, false) => Some(ACTIVE),
                (false, true) => Some(CURSOR),
                (false, false) => None,
            }
        })?;

        let Some(player) = self.active else {
            return Ok(());
        };
        write!(
            f,
            "{}PLAYER {} {}{} {}{}",
            STATUS,
            player,
            ACTIVE,
            game.fields_owned(player.id()),
            FREE,
            game.free_cells_for(player.id())
        )?;
        if self.golden_possible {
            write!(f, "{} G", GOLDEN)?;
        }
        writeln!(f, "{}", RESET)
    }
}

/// Renders the board for `active`'s turn: their cells in bold cyan, the
/// cursor cell on a magenta background, then a status line with their field
/// count, open cells and a `G` if a golden move is available.
///
/// Deciding the `G` runs the golden-move probe, hence `&mut`; the game is
/// left unchanged.
pub fn render_frame(game: &mut Game, cursor: Position, active: u32) -> String {
    let golden_possible = game.golden_move_possible(active);
    let game: &Game = game;
    Frame {
        game,
        cursor,
        active: game.player(active),
        golden_possible,
    }
    .to_string()
}

/// Final summary, one line per player; the leaders are marked `VICTORY`.
pub fn render_standings(game: &Game) -> String {
    let outcome = game.outcome();
    let mut out = String::new();
    for id in 1..=game.players() {
        let fields = game.fields_owned(id);
        let line = match game.player(id) {
            Some(p) if outcome.is_winner(p) => {
                format!("{}PLAYER {} {}{} VICTORY{}\n", FREE, id, fields, GOLDEN, RESET)
            }
            _ => format!("{}PLAYER {} {}{}\n", LOSER, id, fields, RESET),
        };
        out.push_str(&line);
    }
    out
}
