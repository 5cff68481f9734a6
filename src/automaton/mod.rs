//! Core automaton logic: grid storage, geometry and stepping.
//!
//! `Grid` owns a dense cell buffer and its geometric operations; `World`
//! pairs two grids and steps the Game of Life rule between them.

pub mod grid;
pub mod region;
pub mod stepping;
pub mod world;

pub use grid::Grid;
pub use stepping::{count_neighbours, step_into};
pub use world::World;
