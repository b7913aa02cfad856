use thiserror::Error;

use crate::cell::Cell;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("Grid dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("Grid of {width}x{height} cells does not fit in memory")]
    TooLarge { width: usize, height: usize },
}

/// One generation of the automaton.
///
/// Cells are stored in a single buffer in x-major order, so the cell at `(x, y)` lives at index
/// `x * height + y`. The dimensions never change after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    /// The cell buffer
    cells: Vec<Cell>,

    /// Extent of the first axis
    width: usize,

    /// Extent of the second axis
    height: usize,
}

impl Grid {
    /// Create a grid with every cell dead
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        let len = Self::check_dimensions(width, height)?;

        Ok(Self {
            cells: vec![Cell::Dead; len],
            width,
            height,
        })
    }

    /// Create a grid by evaluating `f(x, y)` for every cell.
    pub fn from_fn<F>(width: usize, height: usize, f: F) -> Result<Self, GridError>
    where
        F: FnMut(usize, usize) -> Cell,
    {
        let len = Self::check_dimensions(width, height)?;

        Ok(Self::fill(width, height, len, f))
    }

    /// Like [`Grid::from_fn`], with the dimensions of `self`. These were checked when `self` was
    /// built, so this cannot fail.
    pub(crate) fn with_same_dimensions<F>(&self, f: F) -> Self
    where
        F: FnMut(usize, usize) -> Cell,
    {
        Self::fill(self.width, self.height, self.cells.len(), f)
    }

    fn fill<F>(width: usize, height: usize, len: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> Cell,
    {
        let mut cells = Vec::with_capacity(len);

        for x in 0..width {
            for y in 0..height {
                cells.push(f(x, y));
            }
        }

        Self {
            cells,
            width,
            height,
        }
    }

    /// Returns the number of cells a `width` by `height` grid holds
    fn check_dimensions(width: usize, height: usize) -> Result<usize, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::InvalidDimensions { width, height });
        }

        width
            .checked_mul(height)
            .ok_or(GridError::TooLarge { width, height })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the cell at `(x, y)`. Panics when out of bounds.
    pub fn get(&self, x: usize, y: usize) -> Cell {
        self.cells[self.index(x, y)]
    }

    /// Overwrites the cell at `(x, y)`. Panics when out of bounds.
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) {
        let i = self.index(x, y);

        self.cells[i] = cell;
    }

    /// Coordinates of the cells surrounding `(x, y)`, clipped at the grid edges.
    ///
    /// There is no wraparound: a corner has 3 neighbors, an edge 5, and an interior cell 8.
    pub fn neighbors(&self, x: usize, y: usize) -> impl Iterator<Item = (usize, usize)> {
        assert!(x < self.width, "x is out of bounds");
        assert!(y < self.height, "y is out of bounds");

        let xs = x.saturating_sub(1)..=(x + 1).min(self.width - 1);
        let ys = y.saturating_sub(1)..=(y + 1).min(self.height - 1);

        xs.flat_map(move |nx| ys.clone().map(move |ny| (nx, ny)))
            .filter(move |&n| n != (x, y))
    }

    /// Every cell along with its coordinates, in storage order
    pub fn cells(&self) -> impl Iterator<Item = ((usize, usize), Cell)> {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, &c)| ((i / self.height, i % self.height), c))
    }

    /// Number of live cells in the grid
    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_live()).count()
    }

    fn index(&self, x: usize, y: usize) -> usize {
        assert!(x < self.width, "x is out of bounds");
        assert!(y < self.height, "y is out of bounds");

        x * self.height + y
    }
}
