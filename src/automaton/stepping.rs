//! Game of Life stepping with B3/S23 rules.
//!
//! Neighbour counts for generation N are read from the generation-N grid
//! only; results are written into a separate buffer of the same size.

use super::grid::Grid;
use crate::cell::Cell;

/// Distinct positions along one axis adjacent to (and including) `c`.
///
/// When wrapping, positions are taken modulo `len` and duplicates are
/// dropped, so an axis of length 1 or 2 never yields the same position twice.
/// Without wrapping, positions outside `[0, len)` are dropped.
fn axis_neighbours(c: u32, len: u32, wrap: bool) -> ([u32; 3], usize) {
    let mut out = [0u32; 3];
    let mut n = 0;

    for d in [-1i64, 0, 1] {
        let mut p = c as i64 + d;
        if wrap {
            p = p.rem_euclid(len as i64);
        } else if p < 0 || p >= len as i64 {
            continue;
        }
        let p = p as u32;

        if !out[..n].contains(&p) {
            out[n] = p;
            n += 1;
        }
    }

    (out, n)
}

/// Count alive neighbours of `(x, y)` using the Moore neighbourhood (8 neighbours).
///
/// With `toroidal` set the grid wraps at every edge. On grids narrower or
/// shorter than 3 cells a wrapped position that coincides with the cell
/// itself or with another neighbour is counted once at most, so a cell on a
/// 2x2 torus has 3 neighbours and a cell on a 1x1 torus has none.
///
/// `(x, y)` must be inside the grid.
pub fn count_neighbours(grid: &Grid, x: u32, y: u32, toroidal: bool) -> u32 {
    debug_assert!(x < grid.width && y < grid.height);

    let (cols, n_cols) = axis_neighbours(x, grid.width, toroidal);
    let (rows, n_rows) = axis_neighbours(y, grid.height, toroidal);

    let mut count = 0;
    for &ny in &rows[..n_rows] {
        for &nx in &cols[..n_cols] {
            // Skip the center cell
            if nx == x && ny == y {
                continue;
            }
            if grid.cells[grid.index_of(nx, ny)].is_alive() {
                count += 1;
            }
        }
    }

    count
}

/// Compute the generation after `current` into `next`.
///
/// `next` must already have the same dimensions as `current`; every one of
/// its cells is overwritten.
pub fn step_into(current: &Grid, next: &mut Grid, toroidal: bool) {
    debug_assert_eq!(
        (current.width, current.height),
        (next.width, next.height),
        "step buffers must match"
    );

    if current.cells.is_empty() {
        return;
    }

    fill_next(current, next, toroidal);
}

/// Fill each row of `next` on the rayon pool.
#[cfg(feature = "parallel")]
fn fill_next(current: &Grid, next: &mut Grid, toroidal: bool) {
    use rayon::prelude::*;

    next.cells
        .par_chunks_mut(current.width as usize)
        .enumerate()
        .for_each(|(y, row)| {
            for (x, cell) in row.iter_mut().enumerate() {
                *cell = next_cell(current, x as u32, y as u32, toroidal);
            }
        });
}

#[cfg(not(feature = "parallel"))]
fn fill_next(current: &Grid, next: &mut Grid, toroidal: bool) {
    for y in 0..current.height {
        for x in 0..current.width {
            let idx = current.index_of(x, y);
            next.cells[idx] = next_cell(current, x, y, toroidal);
        }
    }
}

#[inline]
fn next_cell(current: &Grid, x: u32, y: u32, toroidal: bool) -> Cell {
    let neighbours = count_neighbours(current, x, y, toroidal);
    current.cells[current.index_of(x, y)].next_generation(neighbours)
}
