pub mod adjacency;
pub mod board;
pub mod config;
pub mod disjoint_set;
pub mod error;
pub mod game;
pub mod golden;
pub mod r#move;
pub mod outcome;
pub mod player;
pub mod position;
pub mod render;

#[cfg(feature = "python")]
extern crate pyo3;

#[cfg(feature = "python")]
use pyo3::prelude::*;

#[cfg(feature = "python")]
#[pymodule(gil_used = false)]
fn gamma(m: &Bound<'_, PyModule>) -> PyResult<()> {
    use python_bindings::*;
    m.add_class::<PyGame>()?;
    m.add_class::<PyMove>()?;
    Ok(())
}

#[cfg(feature = "python")]
mod python_bindings {
    use super::*;
    use crate::game::Game;
    use crate::position::Position;
    use crate::r#move::Move;
    use crate::render;

    #[pyclass(name = "Game")]
    pub struct PyGame {
        game: Game,
    }

    #[pymethods]
    impl PyGame {
        #[new]
        pub fn new(width: u32, height: u32, players: u32, areas: u32) -> PyResult<Self> {
            Game::new(width, height, players, areas)
                .map(|game| PyGame { game })
                .map_err(|e| PyErr::new::<pyo3::exceptions::PyValueError, _>(e.to_string()))
        }

        pub fn width(&self) -> u32 {
            self.game.width()
        }

        pub fn height(&self) -> u32 {
            self.game.height()
        }

        pub fn players(&self) -> u32 {
            self.game.players()
        }

        pub fn max_areas(&self) -> u32 {
            self.game.max_areas()
        }

        pub fn owner(&self, x: u32, y: u32) -> Option<u32> {
            self.game.owner(x, y).map(|p| p.id())
        }

        pub fn place(&mut self, player: u32, x: u32, y: u32) -> bool {
            self.game.place(player, x, y)
        }

        pub fn capture(&mut self, player: u32, x: u32, y: u32) -> bool {
            self.game.capture(player, x, y)
        }

        pub fn fields_owned(&self, player: u32) -> u64 {
            self.game.fields_owned(player)
        }

        pub fn areas_owned(&self, player: u32) -> u64 {
            self.game.areas_owned(player)
        }

        pub fn golden_used(&self, player: u32) -> bool {
            self.game.golden_used(player)
        }

        pub fn free_fields(&self) -> u64 {
            self.game.free_fields()
        }

        pub fn free_cells_for(&self, player: u32) -> u64 {
            self.game.free_cells_for(player)
        }

        pub fn golden_move_possible(&mut self, player: u32) -> bool {
            self.game.golden_move_possible(player)
        }

        pub fn legal_moves(&mut self, player: u32) -> Vec<PyMove> {
            self.game
                .legal_moves(player)
                .into_iter()
                .map(|m| PyMove { move_: m })
                .collect()
        }

        pub fn is_legal_move(&mut self, player: u32, move_: &PyMove) -> bool {
            self.game.is_legal_move(player, &move_.move_)
        }

        pub fn make_move(&mut self, player: u32, move_: &PyMove) -> bool {
            self.game.make_move(player, &move_.move_)
        }

        pub fn is_over(&mut self) -> bool {
            self.game.is_over()
        }

        pub fn winners(&self) -> Vec<u32> {
            self.game.outcome().winners().iter().map(|p| p.id()).collect()
        }

        pub fn render(&self) -> String {
            self.game.render()
        }

        pub fn render_frame(&mut self, cursor_x: u32, cursor_y: u32, player: u32) -> String {
            render::render_frame(&mut self.game, Position::new(cursor_x, cursor_y), player)
        }

        pub fn clone(&self) -> PyGame {
            PyGame {
                game: self.game.clone(),
            }
        }

        pub fn __str__(&self) -> String {
            self.game.to_string()
        }

        pub fn __repr__(&self) -> String {
            format!(
                "Game(width={}, height={}, players={}, areas={})",
                self.game.width(),
                self.game.height(),
                self.game.players(),
                self.game.max_areas()
            )
        }
    }

    #[pyclass(name = "Move")]
    #[derive(Clone, Debug)]
    pub struct PyMove {
        move_: Move,
    }

    #[pymethods]
    impl PyMove {
        #[staticmethod]
        pub fn place(x: u32, y: u32) -> Self {
            PyMove {
                move_: Move::place(x, y),
            }
        }

        #[staticmethod]
        pub fn golden(x: u32, y: u32) -> Self {
            PyMove {
                move_: Move::golden(x, y),
            }
        }

        pub fn is_golden(&self) -> bool {
            self.move_.is_golden()
        }

        pub fn x(&self) -> u32 {
            self.move_.position().x
        }

        pub fn y(&self) -> u32 {
            self.move_.position().y
        }

        pub fn __str__(&self) -> String {
            self.move_.to_string()
        }

        pub fn __repr__(&self) -> String {
            match &self.move_ {
                Move::Place { x, y } => format!("Move.place({}, {})", x, y),
                Move::Golden { x, y } => format!("Move.golden({}, {})", x, y),
            }
        }

        pub fn __eq__(&self, other: &PyMove) -> bool {
            self.move_ == other.move_
        }

        pub fn __hash__(&self) -> u64 {
            use std::hash::{Hash, Hasher};
            let mut hasher = std::collections::hash_map::DefaultHasher::new();
            self.move_.hash(&mut hasher);
            hasher.finish()
        }
    }
}
