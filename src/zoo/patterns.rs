//! Preset patterns, each sized to its bounding box.

use crate::automaton::Grid;
use crate::cell::Cell;

fn pattern(width: u32, height: u32, alive: &[(u32, u32)]) -> Grid {
    let mut grid = Grid::with_size(width, height);
    for &(x, y) in alive {
        let idx = grid.index_of(x, y);
        grid.cells[idx] = Cell::Alive;
    }
    grid
}

/// The 3x3 glider.
///
/// ```text
/// +---+
/// | # |
/// |  #|
/// |###|
/// +---+
/// ```
pub fn glider() -> Grid {
    pattern(3, 3, &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)])
}

/// The 3x3 R-pentomino.
///
/// ```text
/// +---+
/// | ##|
/// |## |
/// | # |
/// +---+
/// ```
pub fn r_pentomino() -> Grid {
    pattern(3, 3, &[(1, 0), (2, 0), (0, 1), (1, 1), (1, 2)])
}

/// The 5x4 lightweight spaceship.
///
/// ```text
/// +-----+
/// | #  #|
/// |#    |
/// |#   #|
/// |#### |
/// +-----+
/// ```
pub fn light_weight_spaceship() -> Grid {
    pattern(
        5,
        4,
        &[
            (1, 0),
            (4, 0),
            (0, 1),
            (0, 2),
            (4, 2),
            (0, 3),
            (1, 3),
            (2, 3),
            (3, 3),
        ],
    )
}
