//! Life Grid - Conway's Game of Life on finite grids
//!
//! This library provides a dense 2D [`Grid`] with resize, crop, merge and
//! rotate operations, a double-buffered [`World`] that steps the B3/S23 rule
//! with optional toroidal wrapping, and ASCII/binary persistence in [`zoo`].
//!
//! ```
//! use life_grid::{zoo, World};
//!
//! let mut world = World::from_grid(&zoo::glider());
//! world.resize(8, 8);
//! world.advance(4, true);
//! assert_eq!(world.alive_cells(), 5);
//! ```

pub mod automaton;
pub mod cell;
pub mod error;
pub mod zoo;


pub use automaton::{Grid, World};
pub use cell::Cell;
pub use error::{LifeError, Result};
