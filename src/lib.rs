// Opt in to warnings about new 2018 idioms
#![warn(rust_2018_idioms)]
// Additional warnings that are allow by default (`rustc -W help`)
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unused)]

pub mod config;
pub mod data;
pub mod grid;
pub mod handler;
pub mod moves;
pub mod solver;
pub mod state;
pub mod wire;

mod map_formatter;
mod parser;

pub use crate::parser::ParserErr;
pub use crate::state::{GameErr, GameState, StateKey};

use crate::solver::SolverOk;

pub trait Solve {
    fn solve(&self) -> Result<SolverOk, GameErr>;
}
