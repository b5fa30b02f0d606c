use rand::Rng;
use rayon::prelude::*;

use super::{Cell, GridError, Pattern};

/// Fraction of cells brought to life by a plain `randomize`
pub const DEFAULT_DENSITY: f64 = 0.3;

/// Grid is the double-buffered toroidal board.
///
/// `current` always holds the latest generation. `next` is scratch space
/// that `step` fills from `current` before the two are swapped, so right
/// after a step it holds the generation that was just replaced.
/// Both buffers are row-major and always distinct allocations.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    columns: usize,
    rows: usize,
    current: Vec<Cell>,
    next: Vec<Cell>,
}

/// Count live neighbors of (x, y) in `cells`, wrapping around both edges
fn count_live_neighbors(cells: &[Cell], columns: usize, rows: usize, x: usize, y: usize) -> u8 {
    let w = columns as isize;
    let h = rows as isize;

    (-1..=1)
        .flat_map(|dy| (-1..=1).map(move |dx| (dx, dy)))
        .filter(|&(dx, dy)| dx != 0 || dy != 0)
        .map(|(dx, dy)| {
            let nx = (x as isize + dx).rem_euclid(w) as usize;
            let ny = (y as isize + dy).rem_euclid(h) as usize;
            cells[ny * columns + nx].weight()
        })
        .sum()
}

fn next_cell(cells: &[Cell], columns: usize, rows: usize, x: usize, y: usize) -> Cell {
    let neighbors = count_live_neighbors(cells, columns, rows, x, y);
    cells[y * columns + x].evolve(neighbors)
}

impl Grid {
    /// Allocate both buffers with every cell dead.
    /// Dimensions whose cell count does not fit in a buffer are rejected.
    pub fn create(columns: usize, rows: usize) -> Result<Self, GridError> {
        let len = columns
            .checked_mul(rows)
            .filter(|&len| len > 0 && len <= isize::MAX as usize)
            .ok_or(GridError::InvalidDimension { columns, rows })?;
        log::debug!("allocating {columns}x{rows} grid");
        Ok(Self {
            columns,
            rows,
            current: vec![Cell::Dead; len],
            next: vec![Cell::Dead; len],
        })
    }

    pub const fn columns(&self) -> usize {
        self.columns
    }

    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Get grid dimensions as (columns, rows)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.columns, self.rows)
    }

    const fn contains(&self, x: usize, y: usize) -> bool {
        x < self.columns && y < self.rows
    }

    const fn index(&self, x: usize, y: usize) -> usize {
        y * self.columns + x
    }

    /// Current state of the cell at (x, y), `None` outside the grid
    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        self.contains(x, y).then(|| self.current[self.index(x, y)])
    }

    /// State the cell held before the most recent step.
    /// Until the first step this is whatever `next` was last cleared to.
    pub fn previous(&self, x: usize, y: usize) -> Option<Cell> {
        self.contains(x, y).then(|| self.next[self.index(x, y)])
    }

    /// Number of live cells in the current generation
    pub fn population(&self) -> usize {
        self.current.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Iterate over all cells of the current generation with their positions
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.current
            .iter()
            .enumerate()
            .map(move |(i, &cell)| (i % self.columns, i / self.columns, cell))
    }

    /// Kill every cell in both buffers without reallocating
    pub fn reset(&mut self) {
        self.current.fill(Cell::Dead);
        self.next.fill(Cell::Dead);
    }

    /// Randomize `current` using the thread-local generator
    pub fn randomize(&mut self, density: f64) -> Result<(), GridError> {
        self.randomize_with(density, &mut rand::rng())
    }

    /// Bring each cell to life independently with probability `density`.
    /// `next` is left alone until the following step.
    pub fn randomize_with<R: Rng + ?Sized>(&mut self, density: f64, rng: &mut R) -> Result<(), GridError> {
        if !(0.0..=1.0).contains(&density) {
            return Err(GridError::InvalidDensity(density));
        }
        self.current
            .iter_mut()
            .for_each(|cell| *cell = Cell::from(rng.random::<f64>() < density));
        Ok(())
    }

    /// Set a single cell of the current generation
    pub fn set_cell(&mut self, x: usize, y: usize, cell: Cell) -> Result<(), GridError> {
        if !self.contains(x, y) {
            return Err(GridError::OutOfBounds { x, y, columns: self.columns, rows: self.rows });
        }
        let idx = self.index(x, y);
        self.current[idx] = cell;
        Ok(())
    }

    /// Stamp a named pattern on top of the existing cells
    pub fn stamp_pattern(&mut self, name: &str) -> Result<usize, GridError> {
        let pattern = Pattern::named(name)?;
        Ok(self.stamp(pattern))
    }

    /// Bring the pattern's cells to life, skipping any that fall off the board.
    /// Returns how many cells were placed.
    pub fn stamp(&mut self, pattern: &Pattern) -> usize {
        let placed = pattern
            .cells
            .iter()
            .filter(|&&(x, y)| self.set_cell(x, y, Cell::Alive).is_ok())
            .count();
        if placed < pattern.cells.len() {
            log::debug!(
                "{}: clipped {} of {} cells on {}x{} grid",
                pattern.name,
                pattern.cells.len() - placed,
                pattern.cells.len(),
                self.columns,
                self.rows
            );
        }
        placed
    }

    /// Live neighbors of (x, y) in the current generation, with wraparound
    pub fn live_neighbors(&self, x: usize, y: usize) -> Option<u8> {
        self.contains(x, y)
            .then(|| count_live_neighbors(&self.current, self.columns, self.rows, x, y))
    }

    /// What (x, y) will become on the next step. Read-only lookahead.
    pub fn next_state(&self, x: usize, y: usize) -> Option<Cell> {
        self.contains(x, y)
            .then(|| next_cell(&self.current, self.columns, self.rows, x, y))
    }

    /// Compute the next generation into `next` row by row, then swap
    pub fn step(&mut self) {
        let (columns, rows) = self.dimensions();
        let current = &self.current;

        self.next
            .chunks_mut(columns)
            .enumerate()
            .for_each(|(y, row)| {
                row.iter_mut()
                    .enumerate()
                    .for_each(|(x, cell)| *cell = next_cell(current, columns, rows, x, y));
            });

        std::mem::swap(&mut self.current, &mut self.next);
    }

    /// Same as `step` but rows are computed on the rayon pool
    pub fn step_parallel(&mut self) {
        let (columns, rows) = self.dimensions();
        let current = &self.current;

        self.next
            .par_chunks_mut(columns)
            .enumerate()
            .for_each(|(y, row)| {
                row.iter_mut()
                    .enumerate()
                    .for_each(|(x, cell)| *cell = next_cell(current, columns, rows, x, y));
            });

        std::mem::swap(&mut self.current, &mut self.next);
    }

    /// Advance one generation and hand the grid back
    pub fn advance(mut self) -> Self {
        self.step();
        self
    }
}
