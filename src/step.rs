use crate::cell::Cell;
use crate::grid::Grid;

/// Number of live cells surrounding `(x, y)`. Coordinates past the grid edge are skipped.
pub fn live_neighbors(grid: &Grid, x: usize, y: usize) -> u8 {
    let mut n = 0;

    for (nx, ny) in grid.neighbors(x, y) {
        if grid.get(nx, ny).is_live() {
            n += 1;
        }
    }

    n
}

/// The next state of a cell given its current state and live neighbor count.
///
/// A live cell dies with at most one neighbor, survives with two or three, and dies from
/// overcrowding past that. A dead cell comes alive with exactly three neighbors.
pub fn next_cell(cell: Cell, live_neighbors: u8) -> Cell {
    match cell {
        Cell::Live => {
            if live_neighbors <= 1 {
                Cell::Dead
            } else if live_neighbors <= 3 {
                Cell::Live
            } else {
                Cell::Dead
            }
        }
        Cell::Dead => {
            if live_neighbors == 3 {
                Cell::Live
            } else {
                Cell::Dead
            }
        }
    }
}

/// Compute the next generation.
///
/// Every cell of the result depends only on `grid`, which is left untouched.
pub fn advance(grid: &Grid) -> Grid {
    grid.with_same_dimensions(|x, y| next_cell(grid.get(x, y), live_neighbors(grid, x, y)))
}
