//! Dense 2D cell grid: construction, cell access, resizing and rotation.

use std::fmt;
use std::ops::{Index, IndexMut};

use crate::cell::Cell;
use crate::error::{LifeError, Result};

/// A dense `width x height` grid of cells stored in row-major order.
///
/// Invariant: `cells.len() == width * height` at all times.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Grid {
    pub(crate) width: u32,
    pub(crate) height: u32,
    pub(crate) cells: Vec<Cell>, // index = y * width + x
}

impl Grid {
    /// Create an empty 0x0 grid.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a `size x size` grid of dead cells.
    pub fn square(size: u32) -> Self {
        Self::with_size(size, size)
    }

    /// Create a `width x height` grid of dead cells.
    pub fn with_size(width: u32, height: u32) -> Self {
        Grid {
            width,
            height,
            cells: vec![Cell::Dead; area(width, height)],
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn total_cells(&self) -> usize {
        self.cells.len()
    }

    /// Count cells that are alive.
    pub fn alive_cells(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    /// Count cells that are dead.
    pub fn dead_cells(&self) -> usize {
        self.total_cells() - self.alive_cells()
    }

    /// Row-major view of every cell.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Calculate the linear index for an in-bounds coordinate.
    #[inline]
    pub(crate) fn index_of(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Check if coordinates are within grid bounds.
    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && (x as u32) < self.width && y >= 0 && (y as u32) < self.height
    }

    fn checked_index(&self, x: i32, y: i32) -> Result<usize> {
        if self.in_bounds(x, y) {
            Ok(self.index_of(x as u32, y as u32))
        } else {
            Err(LifeError::OutOfRange {
                x,
                y,
                width: self.width,
                height: self.height,
            })
        }
    }

    /// Read the cell at `(x, y)`.
    pub fn get(&self, x: i32, y: i32) -> Result<Cell> {
        let idx = self.checked_index(x, y)?;
        Ok(self.cells[idx])
    }

    /// Mutable access to the cell at `(x, y)`.
    pub fn get_mut(&mut self, x: i32, y: i32) -> Result<&mut Cell> {
        let idx = self.checked_index(x, y)?;
        Ok(&mut self.cells[idx])
    }

    /// Overwrite the cell at `(x, y)`.
    pub fn set(&mut self, x: i32, y: i32, value: Cell) -> Result<()> {
        *self.get_mut(x, y)? = value;
        Ok(())
    }

    /// Resize to `size x size`, see [`Grid::resize`].
    pub fn resize_square(&mut self, size: u32) {
        self.resize(size, size);
    }

    /// Resize in place, keeping the cells in the overlap of the old and new
    /// extents and filling newly exposed cells with [`Cell::Dead`].
    pub fn resize(&mut self, new_width: u32, new_height: u32) {
        let mut cells = vec![Cell::Dead; area(new_width, new_height)];

        let keep_w = self.width.min(new_width) as usize;
        let keep_h = self.height.min(new_height) as usize;
        let (old_w, new_w) = (self.width as usize, new_width as usize);

        for y in 0..keep_h {
            cells[y * new_w..y * new_w + keep_w]
                .copy_from_slice(&self.cells[y * old_w..y * old_w + keep_w]);
        }

        self.width = new_width;
        self.height = new_height;
        self.cells = cells;
    }

    /// Return a copy rotated by `90 * rotation` degrees clockwise.
    ///
    /// Any integer is accepted; the rotation is reduced modulo 4 first, so
    /// `rotate(-1)` and `rotate(3)` are the same quarter turn anti-clockwise.
    pub fn rotate(&self, rotation: i32) -> Grid {
        let (w, h) = (self.width, self.height);
        let quarter_turns = rotation.rem_euclid(4);

        let (new_w, new_h) = match quarter_turns {
            1 | 3 => (h, w),
            _ => (w, h),
        };
        let mut rotated = Grid::with_size(new_w, new_h);

        for j in 0..new_h {
            for i in 0..new_w {
                let (sx, sy) = match quarter_turns {
                    1 => (j, h - 1 - i),
                    2 => (w - 1 - i, h - 1 - j),
                    3 => (w - 1 - j, i),
                    _ => (i, j),
                };
                let dst = rotated.index_of(i, j);
                rotated.cells[dst] = self.cells[self.index_of(sx, sy)];
            }
        }

        rotated
    }
}

#[inline]
fn area(width: u32, height: u32) -> usize {
    width as usize * height as usize
}

impl Index<(i32, i32)> for Grid {
    type Output = Cell;

    /// Panics when the coordinate is out of range; use [`Grid::get`] to handle that case.
    fn index(&self, (x, y): (i32, i32)) -> &Cell {
        match self.checked_index(x, y) {
            Ok(idx) => &self.cells[idx],
            Err(err) => panic!("{err}"),
        }
    }
}

impl IndexMut<(i32, i32)> for Grid {
    fn index_mut(&mut self, (x, y): (i32, i32)) -> &mut Cell {
        match self.checked_index(x, y) {
            Ok(idx) => &mut self.cells[idx],
            Err(err) => panic!("{err}"),
        }
    }
}

/// Bordered text rendering:
///
/// ```text
/// +---+
/// | # |
/// |## |
/// +---+
/// ```
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let border = "-".repeat(self.width as usize);
        writeln!(f, "+{border}+")?;
        let width = self.width as usize;
        for y in 0..self.height as usize {
            let row = &self.cells[y * width..(y + 1) * width];
            f.write_str("|")?;
            for cell in row {
                write!(f, "{}", cell.as_char())?;
            }
            f.write_str("|\n")?;
        }
        writeln!(f, "+{border}+")
    }
}
