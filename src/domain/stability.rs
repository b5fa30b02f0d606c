//! Render-only classification of cells.
//!
//! Shading looks at the grid after `step` has swapped the buffers, so a
//! live cell is `Stable` when it held the same value before the most
//! recent step. Nothing here feeds back into the simulation.

use super::{Cell, Grid};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shade {
    Dead,
    /// Alive and changed during the last step (born, or painted since)
    Alive,
    /// Alive and unchanged during the last step
    Stable,
}

const fn classify(now: Cell, before: Cell) -> Shade {
    match (now, before) {
        (Cell::Dead, _) => Shade::Dead,
        (Cell::Alive, Cell::Alive) => Shade::Stable,
        (Cell::Alive, Cell::Dead) => Shade::Alive,
    }
}

/// Shade of the cell at (x, y), `None` outside the grid
pub fn shade_at(grid: &Grid, x: usize, y: usize) -> Option<Shade> {
    Some(classify(grid.get(x, y)?, grid.previous(x, y)?))
}

/// Shades of every cell in row-major order
pub fn shades(grid: &Grid) -> impl Iterator<Item = (usize, usize, Shade)> + '_ {
    grid.iter_cells()
        .filter_map(move |(x, y, cell)| Some((x, y, classify(cell, grid.previous(x, y)?))))
}
