use log::debug;
use rand::Rng;
use rayon::prelude::*;

use super::cell::{Cell, CellState, NeighborTally};
use super::error::GridError;

/// Moore-neighborhood offsets, fixed in row-major order.
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Grid owns the two-dimensional cell arrangement and drives every state
/// change: generation transitions, randomization, clearing.
///
/// Indexing is toroidal. Row and column indices wrap modulo the grid
/// dimensions, so any signed index lands on a cell and every cell has
/// exactly eight neighbors regardless of position.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Grid {
    rows: usize,
    columns: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a grid with all cells dead.
    ///
    /// Rejects zero-sized dimensions before any cell is allocated.
    pub fn new(rows: usize, columns: usize) -> Result<Self, GridError> {
        if rows == 0 || columns == 0 {
            return Err(GridError::InvalidDimensions { rows, columns });
        }
        debug!("creating {rows}x{columns} grid");
        Ok(Self {
            rows,
            columns,
            cells: vec![Cell::new(); rows * columns],
        })
    }

    pub const fn rows(&self) -> usize {
        self.rows
    }

    pub const fn columns(&self) -> usize {
        self.columns
    }

    /// Wrap a signed index into `[0, len)`.
    const fn wrap(index: isize, len: usize) -> usize {
        index.rem_euclid(len as isize) as usize
    }

    /// Flat index of the wrapped (row, column) position.
    const fn index_of(&self, row: isize, column: isize) -> usize {
        Self::wrap(row, self.rows) * self.columns + Self::wrap(column, self.columns)
    }

    /// Cell at the wrapped position.
    pub fn get_cell(&self, row: isize, column: isize) -> &Cell {
        &self.cells[self.index_of(row, column)]
    }

    /// State at the wrapped position.
    pub fn state(&self, row: isize, column: isize) -> CellState {
        self.cells[self.index_of(row, column)].state()
    }

    /// Overwrite one cell, wrapping the position like every other access.
    pub fn set_state(&mut self, row: isize, column: isize, state: CellState) {
        let idx = self.index_of(row, column);
        self.cells[idx].set_state(state);
    }

    /// Count alive neighbors of (row, column) by color, reading only the
    /// current-generation snapshot.
    fn neighbor_tally(&self, row: isize, column: isize) -> NeighborTally {
        let mut tally = NeighborTally::default();
        for (dr, dc) in NEIGHBOR_OFFSETS {
            match self.state(row + dr, column + dc) {
                CellState::AliveRed => tally.red += 1,
                CellState::AliveBlue => tally.blue += 1,
                CellState::Dead => {}
            }
        }
        tally
    }

    fn next_state_of(&self, idx: usize) -> CellState {
        let row = (idx / self.columns) as isize;
        let column = (idx % self.columns) as isize;
        self.state(row, column)
            .evolve(self.neighbor_tally(row, column))
    }

    /// Write a fully computed next generation over the current one.
    fn commit(&mut self, next: Vec<CellState>) {
        for (cell, state) in self.cells.iter_mut().zip(next) {
            cell.set_state(state);
        }
    }

    /// Transition every cell to the next generation in one atomic sweep.
    ///
    /// The full next-state vector is a pure function of the current
    /// snapshot and is computed before any cell is written, so no cell
    /// ever observes a partially updated neighbor.
    pub fn advance_generation(&mut self) {
        let next: Vec<CellState> = (0..self.cells.len())
            .map(|idx| self.next_state_of(idx))
            .collect();
        self.commit(next);
    }

    /// Same transition as `advance_generation`, with the next-state vector
    /// computed in parallel. The snapshot discipline is unchanged, so the
    /// result is bit-for-bit identical to the serial sweep.
    pub fn advance_generation_parallel(&mut self) {
        let next: Vec<CellState> = (0..self.cells.len())
            .into_par_iter()
            .map(|idx| self.next_state_of(idx))
            .collect();
        self.commit(next);
    }

    /// Randomly seed the grid from the supplied generator: each cell flips
    /// a coin, and winners flip a second coin for red vs blue.
    ///
    /// Cells losing the first flip keep their prior state, so a populated
    /// grid is not wiped first. Callers wanting a clean board call
    /// [`Grid::clear`] before this.
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for cell in &mut self.cells {
            if rng.random_bool(0.5) {
                let state = if rng.random_bool(0.5) {
                    CellState::AliveRed
                } else {
                    CellState::AliveBlue
                };
                cell.set_state(state);
            }
        }
        debug!("randomized {}x{} grid", self.rows, self.columns);
    }

    /// Kill every cell.
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            cell.set_state(CellState::Dead);
        }
        debug!("cleared {}x{} grid", self.rows, self.columns);
    }

    /// Iterate over all cells in row-major order with their positions.
    /// Borrowing and restartable; iterating never mutates the grid.
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, CellState)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, cell)| (idx / self.columns, idx % self.columns, cell.state()))
    }
}
