//! Region extraction (crop) and overlay (merge) operations.

use super::grid::Grid;
use crate::cell::Cell;
use crate::error::{LifeError, Result};

impl Grid {
    /// Extract the rectangle `[x0, x1) x [y0, y1)` into a new grid.
    ///
    /// A zero-area rectangle is allowed and yields an empty grid.
    ///
    /// # Errors
    /// [`LifeError::InvalidRegion`] if any coordinate is negative, the
    /// rectangle is inverted, or it extends past the grid.
    pub fn crop(&self, x0: i32, y0: i32, x1: i32, y1: i32) -> Result<Grid> {
        if x0 < 0 || y0 < 0 || x1 < 0 || y1 < 0 {
            return Err(LifeError::region(format!(
                "crop ({x0}, {y0})..({x1}, {y1}) has a negative coordinate"
            )));
        }

        // Negatives are ruled out above, so widening to i64 keeps the
        // subtraction exact.
        let (x0, y0, x1, y1) = (x0 as i64, y0 as i64, x1 as i64, y1 as i64);
        let (width, height) = (self.width as i64, self.height as i64);

        if x0 > width || x1 > width || x1 - x0 > width {
            return Err(LifeError::region(format!(
                "crop columns {x0}..{x1} exceed width {width}"
            )));
        }
        if y0 > height || y1 > height || y1 - y0 > height {
            return Err(LifeError::region(format!(
                "crop rows {y0}..{y1} exceed height {height}"
            )));
        }
        if x0 > x1 {
            return Err(LifeError::region(format!("crop x0 {x0} > x1 {x1}")));
        }
        if y0 > y1 {
            return Err(LifeError::region(format!("crop y0 {y0} > y1 {y1}")));
        }

        let mut cropped = Grid::with_size((x1 - x0) as u32, (y1 - y0) as u32);
        let (x0, y0) = (x0 as u32, y0 as u32);
        let row_len = cropped.width as usize;

        for j in 0..cropped.height {
            let src = self.index_of(x0, y0 + j);
            let dst = cropped.index_of(0, j);
            cropped.cells[dst..dst + row_len].copy_from_slice(&self.cells[src..src + row_len]);
        }

        Ok(cropped)
    }

    /// Overlay `other` onto this grid with its top-left corner at `(x0, y0)`.
    ///
    /// With `alive_only` set, cells that are already alive are never
    /// overwritten; every other covered cell takes the value from `other`.
    ///
    /// # Errors
    /// [`LifeError::InvalidRegion`] if `other` is larger than this grid, the
    /// origin is negative, or the placement does not fit. Nothing is written
    /// on error.
    pub fn merge(&mut self, other: &Grid, x0: i32, y0: i32, alive_only: bool) -> Result<()> {
        if other.width > self.width || other.height > self.height {
            return Err(LifeError::region(format!(
                "overlay {}x{} is larger than grid {}x{}",
                other.width, other.height, self.width, self.height
            )));
        }
        if other.total_cells() > self.total_cells() {
            return Err(LifeError::region(format!(
                "overlay area {} exceeds grid area {}",
                other.total_cells(),
                self.total_cells()
            )));
        }
        if x0 < 0 || y0 < 0 {
            return Err(LifeError::region(format!(
                "overlay origin ({x0}, {y0}) is negative"
            )));
        }
        if x0 as u64 + other.width as u64 > self.width as u64
            || y0 as u64 + other.height as u64 > self.height as u64
        {
            return Err(LifeError::region(format!(
                "overlay {}x{} at ({x0}, {y0}) does not fit in grid {}x{}",
                other.width, other.height, self.width, self.height
            )));
        }

        let (x0, y0) = (x0 as u32, y0 as u32);
        for j in 0..other.height {
            for i in 0..other.width {
                let idx = self.index_of(x0 + i, y0 + j);
                if alive_only && self.cells[idx] == Cell::Alive {
                    continue;
                }
                self.cells[idx] = other.cells[other.index_of(i, j)];
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checkerboard(width: u32, height: u32) -> Grid {
        let mut grid = Grid::with_size(width, height);
        for y in 0..height as i32 {
            for x in 0..width as i32 {
                grid.set(x, y, Cell::from((x + y) % 2 == 0)).unwrap();
            }
        }
        grid
    }

    #[test]
    fn test_crop_basic() {
        let grid = checkerboard(6, 5);
        let cropped = grid.crop(1, 2, 4, 5).unwrap();

        assert_eq!((cropped.width(), cropped.height()), (3, 3));
        for y in 0..3 {
            for x in 0..3 {
                assert_eq!(cropped.get(x, y).unwrap(), grid.get(x + 1, y + 2).unwrap());
            }
        }
    }

    #[test]
    fn test_crop_full_and_empty() {
        let grid = checkerboard(4, 4);
        assert_eq!(grid.crop(0, 0, 4, 4).unwrap(), grid);

        let empty = grid.crop(2, 1, 2, 3).unwrap();
        assert_eq!((empty.width(), empty.height()), (0, 2));
        assert_eq!(empty.total_cells(), 0);

        let edge = grid.crop(4, 4, 4, 4).unwrap();
        assert_eq!(edge.total_cells(), 0);
    }

    #[test]
    fn test_crop_invalid_regions() {
        let grid = checkerboard(4, 3);
        let bad = [
            (-1, 0, 2, 2),
            (0, -1, 2, 2),
            (0, 0, 5, 2),
            (5, 0, 5, 2),
            (0, 0, 2, 4),
            (3, 0, 1, 2),
            (0, 2, 2, 1),
        ];
        for (x0, y0, x1, y1) in bad {
            let result = grid.crop(x0, y0, x1, y1);
            assert!(
                matches!(result, Err(LifeError::InvalidRegion(_))),
                "crop({x0}, {y0}, {x1}, {y1}) should fail"
            );
        }
    }

    #[test]
    fn test_merge_overwrites() {
        let mut grid = Grid::with_size(5, 5);
        grid.set(1, 1, Cell::Alive).unwrap();

        let mut overlay = Grid::square(2);
        overlay.set(1, 1, Cell::Alive).unwrap();

        grid.merge(&overlay, 1, 1, false).unwrap();
        assert_eq!(grid.get(1, 1).unwrap(), Cell::Dead);
        assert_eq!(grid.get(2, 2).unwrap(), Cell::Alive);
        assert_eq!(grid.alive_cells(), 1);
    }

    #[test]
    fn test_merge_alive_only_keeps_alive() {
        let mut grid = Grid::with_size(5, 5);
        grid.set(1, 1, Cell::Alive).unwrap();

        let mut overlay = Grid::square(2);
        overlay.set(1, 1, Cell::Alive).unwrap();

        grid.merge(&overlay, 1, 1, true).unwrap();
        assert_eq!(grid.get(1, 1).unwrap(), Cell::Alive);
        assert_eq!(grid.get(2, 2).unwrap(), Cell::Alive);
        assert_eq!(grid.alive_cells(), 2);
    }

    #[test]
    fn test_merge_at_far_corner() {
        let mut grid = Grid::with_size(4, 3);
        let overlay = checkerboard(2, 2);
        grid.merge(&overlay, 2, 1, false).unwrap();
        assert_eq!(grid.get(2, 1).unwrap(), Cell::Alive);
        assert_eq!(grid.get(3, 2).unwrap(), Cell::Alive);
        assert_eq!(grid.alive_cells(), 2);
    }

    #[test]
    fn test_merge_invalid_leaves_grid_untouched() {
        let original = checkerboard(4, 4);
        let cases: [(Grid, i32, i32); 5] = [
            (Grid::with_size(5, 1), 0, 0),
            (Grid::with_size(1, 5), 0, 0),
            (Grid::square(2), -1, 0),
            (Grid::square(2), 0, -1),
            (Grid::square(2), 3, 0),
        ];

        for (overlay, x0, y0) in cases {
            let mut grid = original.clone();
            let result = grid.merge(&overlay, x0, y0, false);
            assert!(matches!(result, Err(LifeError::InvalidRegion(_))));
            assert_eq!(grid, original);
        }
    }

    #[test]
    fn test_crop_then_merge_restores_region() {
        let original = checkerboard(7, 6);
        let region = original.crop(2, 1, 6, 4).unwrap();

        let mut target = original.clone();
        target.merge(&Grid::with_size(4, 3), 2, 1, false).unwrap();
        assert_ne!(target, original);

        target.merge(&region, 2, 1, false).unwrap();
        assert_eq!(target, original);
    }
}
