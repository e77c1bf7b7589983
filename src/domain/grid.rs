use super::Cell;
use rayon::prelude::*;

/// Fraction of cells seeded alive when a grid is randomized.
const SEED_PROBABILITY: f32 = 0.2;

/// Grid manages the 2D cellular automaton grid, row-major.
/// Uses functional, immutable updates for predictable state transitions.
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with all cells initially dead
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![Cell::DEAD; rows * cols],
        }
    }

    /// Get grid dimensions as (rows, cols)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Convert 2D coordinates to 1D index
    const fn get_index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// Get cell at position (with bounds checking)
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        (row < self.rows && col < self.cols)
            .then(|| self.cells[self.get_index(row, col)])
    }

    /// Set cell at position (out-of-bounds writes are ignored)
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        if row < self.rows && col < self.cols {
            let idx = self.get_index(row, col);
            self.cells[idx] = cell;
        }
    }

    /// Count live neighbors among the up-to-8 adjacent cells. The grid does
    /// not wrap: offsets falling outside the bounds are skipped, so edge and
    /// corner cells simply have fewer neighbors. Any value > 0 counts as
    /// alive regardless of magnitude.
    fn count_live_neighbors(&self, row: usize, col: usize) -> u8 {
        (-1i32..=1)
            .flat_map(|dr| (-1i32..=1).map(move |dc| (dr, dc)))
            .filter(|&(dr, dc)| dr != 0 || dc != 0)
            .map(|(dr, dc)| (row as i32 + dr, col as i32 + dc))
            .filter(|&(r, c)| r >= 0 && c >= 0)
            .filter_map(|(r, c)| self.get(r as usize, c as usize))
            .filter(|cell| cell.is_alive())
            .count() as u8
    }

    /// Pure functional step - returns the next generation (serial).
    /// Every cell is evaluated against this grid, never the one being built.
    pub fn step(&self) -> Self {
        let cells = (0..self.rows)
            .flat_map(|row| (0..self.cols).map(move |col| (row, col)))
            .map(|(row, col)| {
                let current = self.get(row, col).unwrap();
                let neighbors = self.count_live_neighbors(row, col);
                current.evolve(neighbors)
            })
            .collect();

        Self {
            rows: self.rows,
            cols: self.cols,
            cells,
        }
    }

    /// Parallel step using rayon, identical output to `step`.
    /// Worth it once the banner spans enough cells.
    pub fn step_parallel(&self) -> Self {
        let cells: Vec<Cell> = (0..self.rows)
            .into_par_iter()
            .flat_map(|row| {
                (0..self.cols).into_par_iter().map(move |col| (row, col))
            })
            .map(|(row, col)| {
                let current = self.get(row, col).unwrap();
                let neighbors = self.count_live_neighbors(row, col);
                current.evolve(neighbors)
            })
            .collect();

        Self {
            rows: self.rows,
            cols: self.cols,
            cells,
        }
    }

    /// Randomize grid: each cell independently alive at value 1 with
    /// probability `SEED_PROBABILITY`, dead otherwise
    pub fn randomize(mut self) -> Self {
        use rand::Rng;
        let mut rng = rand::rng();

        self.cells.iter_mut().for_each(|cell| {
            *cell = if rng.random::<f32>() < SEED_PROBABILITY {
                Cell(1)
            } else {
                Cell::DEAD
            };
        });
        self
    }

    /// Count live cells
    pub fn count_alive(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Iterate over all cells with their positions
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        (0..self.rows)
            .flat_map(move |row| (0..self.cols).map(move |col| (row, col)))
            .map(|(row, col)| (row, col, self.get(row, col).unwrap()))
    }
}
