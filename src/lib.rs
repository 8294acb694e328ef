//! Conway's Game of Life on an unbounded grid, stored sparsely.
//!
//! Only alive cells are kept between generations. During a step the dead
//! neighbors of alive cells are added as a transient frontier so births can
//! be detected, and the next generation is built into a fresh board.

pub mod coord;
pub mod rule;
pub mod board;
pub mod engine;
pub mod render;
pub mod pattern;
pub mod config;
pub mod simulation;
mod error;

pub use coord::Coord;
pub use rule::{Rule, GAME_OF_LIFE};
pub use board::{Bounds, CellState, SparseBoard};
pub use engine::StepEngine;
pub use render::Frame;
pub use pattern::Pattern;
pub use config::Config;
pub use simulation::{Outcome, Simulation};
pub use error::{Error, Result};
