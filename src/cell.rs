//! The two-state cell value.

use std::fmt;

use crate::error::{LifeError, Result};

/// A single cell: dead or alive. No other states exist.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Dead,
    Alive,
}

impl Cell {
    /// Character used for this cell in the ASCII encoding and text rendering.
    #[inline]
    pub fn as_char(self) -> char {
        match self {
            Cell::Dead => ' ',
            Cell::Alive => '#',
        }
    }

    /// Parse a cell from its ASCII character, rejecting anything but `' '` or `'#'`.
    pub fn from_char(c: char) -> Result<Self> {
        match c {
            ' ' => Ok(Cell::Dead),
            '#' => Ok(Cell::Alive),
            other => Err(LifeError::format(
                "ascii",
                format!("illegal cell character {other:?}"),
            )),
        }
    }

    #[inline]
    pub fn is_alive(self) -> bool {
        self == Cell::Alive
    }

    /// Apply the B3/S23 rule to this cell given its live neighbour count.
    ///
    /// - Birth: a dead cell with exactly 3 neighbours becomes alive
    /// - Survival: an alive cell with 2 or 3 neighbours stays alive
    #[inline]
    pub fn next_generation(self, neighbours: u32) -> Cell {
        match (self, neighbours) {
            (Cell::Alive, 2) | (_, 3) => Cell::Alive,
            _ => Cell::Dead,
        }
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive {
            Cell::Alive
        } else {
            Cell::Dead
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
