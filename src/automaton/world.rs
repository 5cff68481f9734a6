//! Double-buffered Game of Life world.

use log::{debug, trace};

use super::grid::Grid;
use super::stepping::{count_neighbours, step_into};

/// A world holding the current generation and a scratch buffer for the next one.
///
/// Both buffers always share the same dimensions. Each [`World::step`]
/// computes the whole next generation from `current` and then swaps the two
/// buffers.
#[derive(Clone, Debug, Default)]
pub struct World {
    current: Grid,
    next: Grid,
    generation: u64,
}

impl World {
    /// Create an empty 0x0 world.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a `size x size` world of dead cells.
    pub fn square(size: u32) -> Self {
        Self::with_size(size, size)
    }

    /// Create a `width x height` world of dead cells.
    pub fn with_size(width: u32, height: u32) -> Self {
        debug!("creating {}x{} world", width, height);
        World {
            current: Grid::with_size(width, height),
            next: Grid::with_size(width, height),
            generation: 0,
        }
    }

    /// Create a world whose first generation is a copy of `initial_state`.
    pub fn from_grid(initial_state: &Grid) -> Self {
        debug!(
            "creating world from {}x{} grid with {} alive cells",
            initial_state.width(),
            initial_state.height(),
            initial_state.alive_cells()
        );
        World {
            current: initial_state.clone(),
            next: Grid::with_size(initial_state.width(), initial_state.height()),
            generation: 0,
        }
    }

    pub fn width(&self) -> u32 {
        self.current.width()
    }

    pub fn height(&self) -> u32 {
        self.current.height()
    }

    pub fn total_cells(&self) -> usize {
        self.current.total_cells()
    }

    pub fn alive_cells(&self) -> usize {
        self.current.alive_cells()
    }

    pub fn dead_cells(&self) -> usize {
        self.current.dead_cells()
    }

    /// Number of generations stepped since construction.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// A copy of the current generation.
    pub fn state(&self) -> Grid {
        self.current.clone()
    }

    /// Resize to `size x size`, see [`World::resize`].
    pub fn resize_square(&mut self, size: u32) {
        self.resize(size, size);
    }

    /// Resize both buffers. The current generation keeps the cells inside
    /// the overlap of the old and new extents; new cells are dead.
    pub fn resize(&mut self, width: u32, height: u32) {
        debug!(
            "resizing world {}x{} -> {}x{}",
            self.width(),
            self.height(),
            width,
            height
        );
        self.current.resize(width, height);
        self.next = Grid::with_size(width, height);
    }

    /// Count alive neighbours of `(x, y)` in the current generation.
    ///
    /// See [`count_neighbours`] for the wrap rule on grids smaller than 3x3.
    ///
    /// # Panics
    /// If `(x, y)` is outside the world.
    pub fn count_neighbours(&self, x: u32, y: u32, toroidal: bool) -> u32 {
        assert!(
            x < self.width() && y < self.height(),
            "({x}, {y}) is outside a {}x{} world",
            self.width(),
            self.height()
        );
        count_neighbours(&self.current, x, y, toroidal)
    }

    /// Advance by one generation.
    ///
    /// B3/S23 rules:
    /// - Birth: a dead cell with exactly 3 neighbours becomes alive
    /// - Survival: an alive cell with 2 or 3 neighbours survives
    /// - Moore neighbourhood: 8 neighbours, wrapping at the edges when `toroidal`
    pub fn step(&mut self, toroidal: bool) {
        step_into(&self.current, &mut self.next, toroidal);
        std::mem::swap(&mut self.current, &mut self.next);
        self.generation += 1;
        trace!("stepped to generation {}", self.generation);
    }

    /// Advance by `steps` generations.
    pub fn advance(&mut self, steps: u32, toroidal: bool) {
        debug!(
            "advancing {} steps from generation {} (toroidal: {})",
            steps, self.generation, toroidal
        );
        for _ in 0..steps {
            self.step(toroidal);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::Cell;

    fn world_with(width: u32, height: u32, alive: &[(i32, i32)]) -> World {
        let mut grid = Grid::with_size(width, height);
        for &(x, y) in alive {
            grid.set(x, y, Cell::Alive).unwrap();
        }
        World::from_grid(&grid)
    }

    #[test]
    fn test_constructors() {
        let empty = World::new();
        assert_eq!((empty.width(), empty.height()), (0, 0));

        let square = World::square(8);
        assert_eq!(square.total_cells(), 64);
        assert_eq!(square.dead_cells(), 64);

        let rect = World::with_size(6, 3);
        assert_eq!((rect.width(), rect.height()), (6, 3));
        assert_eq!(rect.generation(), 0);
    }

    #[test]
    fn test_from_grid_copies_state() {
        let mut grid = Grid::square(4);
        grid.set(1, 1, Cell::Alive).unwrap();
        let world = World::from_grid(&grid);

        grid.set(2, 2, Cell::Alive).unwrap();
        assert_eq!(world.alive_cells(), 1);
        assert_eq!(world.state().get(1, 1).unwrap(), Cell::Alive);
        assert!(world.state().get(4, 0).is_err());
    }

    #[test]
    fn test_state_is_a_copy() {
        let world = world_with(3, 3, &[(0, 0)]);
        let mut state = world.state();
        state.set(2, 2, Cell::Alive).unwrap();
        assert_eq!(world.alive_cells(), 1);
    }

    #[test]
    fn test_step_isolated_cell_dies() {
        let mut world = world_with(3, 3, &[(1, 1)]);
        world.step(false);
        assert_eq!(world.alive_cells(), 0);
        assert_eq!(world.generation(), 1);
    }

    #[test]
    fn test_blinker_oscillates() {
        let mut world = world_with(5, 5, &[(1, 2), (2, 2), (3, 2)]);
        let horizontal = world.state();

        world.step(false);
        let vertical = world.state();
        assert_eq!(vertical.get(2, 1).unwrap(), Cell::Alive);
        assert_eq!(vertical.get(2, 3).unwrap(), Cell::Alive);
        assert_eq!(vertical.get(1, 2).unwrap(), Cell::Dead);
        assert_eq!(vertical.alive_cells(), 3);

        world.step(false);
        assert_eq!(world.state(), horizontal);
    }

    #[test]
    fn test_toroidal_wraps_blinker() {
        // A vertical blinker on the left edge sees cells across the wrap.
        let mut world = world_with(5, 5, &[(0, 1), (0, 2), (0, 3)]);
        world.step(true);
        let state = world.state();
        assert_eq!(state.get(4, 2).unwrap(), Cell::Alive);
        assert_eq!(state.get(1, 2).unwrap(), Cell::Alive);
        assert_eq!(state.get(0, 2).unwrap(), Cell::Alive);
        assert_eq!(state.alive_cells(), 3);

        let mut flat = world_with(5, 5, &[(0, 1), (0, 2), (0, 3)]);
        flat.step(false);
        assert_eq!(flat.alive_cells(), 2);
    }

    #[test]
    fn test_count_neighbours_reads_current() {
        let world = world_with(3, 3, &[(0, 0), (2, 2)]);
        assert_eq!(world.count_neighbours(1, 1, false), 2);
        assert_eq!(world.count_neighbours(0, 0, false), 0);
        assert_eq!(world.count_neighbours(0, 0, true), 1);
    }

    #[test]
    #[should_panic(expected = "outside a 3x3 world")]
    fn test_count_neighbours_out_of_range_panics() {
        World::square(3).count_neighbours(3, 0, false);
    }

    #[test]
    fn test_resize_keeps_both_buffers_matched() {
        let mut world = world_with(4, 4, &[(0, 0), (3, 3)]);
        world.resize(2, 6);
        assert_eq!((world.width(), world.height()), (2, 6));
        assert_eq!(world.alive_cells(), 1);
        world.step(true);
        assert_eq!(world.total_cells(), 12);

        world.resize_square(3);
        assert_eq!(world.total_cells(), 9);
        world.step(false);
    }

    #[test]
    fn test_advance() {
        let mut world = world_with(5, 5, &[(1, 2), (2, 2), (3, 2)]);
        let start = world.state();

        world.advance(0, false);
        assert_eq!(world.state(), start);
        assert_eq!(world.generation(), 0);

        world.advance(4, false);
        assert_eq!(world.state(), start);
        assert_eq!(world.generation(), 4);

        world.advance(1, false);
        assert_ne!(world.state(), start);
    }
}
