use std::fs;
use std::io;
use std::path::Path;
use std::path::PathBuf;

use thiserror::Error;
use tracing::debug;

use crate::cell::Cell;
use crate::grid::Grid;
use crate::grid::GridError;
use crate::parse_util;

#[derive(Debug, Error)]
pub enum PatternError {
    #[error("Failed to read pattern file {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Pattern is empty")]
    Empty,

    #[error("Line {line}, column {column}: expected '0' or '1', but got {found:?}")]
    InvalidCell {
        line: usize,
        column: usize,
        found: char,
    },

    #[error("Line {line} has {found} cells, but the first line has {expected}")]
    RaggedLine {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error(transparent)]
    Grid(#[from] GridError),
}

/// Read a pattern file from disk. See [`read_pattern`] for the format.
pub fn load_pattern<P: AsRef<Path>>(path: P) -> Result<Grid, PatternError> {
    let path = path.as_ref();

    let bytes = fs::read(path).map_err(|source| PatternError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let grid = read_pattern(&bytes)?;
    debug!(
        path = %path.display(),
        width = grid.width(),
        height = grid.height(),
        "Loaded pattern"
    );

    Ok(grid)
}

/// Parse the plain pattern format: one line per row, `0` for a dead cell and `1` for a live one.
///
/// Line `l` becomes `x = l` and character `c` of that line becomes `y = c`, so the number of
/// lines sets the grid's width and the length of the first line its height. Trailing whitespace
/// on a line and blank lines at the end of the input are ignored.
pub fn read_pattern(bytes: &[u8]) -> Result<Grid, PatternError> {
    let mut lines = parse_util::lines(bytes);

    while lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }

    if lines.is_empty() {
        return Err(PatternError::Empty);
    }

    let mut rows: Vec<Vec<Cell>> = Vec::with_capacity(lines.len());

    for (x, line) in lines.iter().enumerate() {
        let row = read_row(line, x + 1)?;

        if let Some(first) = rows.first() {
            if row.len() != first.len() {
                return Err(PatternError::RaggedLine {
                    line: x + 1,
                    expected: first.len(),
                    found: row.len(),
                });
            }
        }

        rows.push(row);
    }

    let grid = Grid::from_fn(rows.len(), rows[0].len(), |x, y| rows[x][y])?;

    Ok(grid)
}

/// Decode one line into cells. Columns count characters, not bytes.
fn read_row(line: &[u8], line_no: usize) -> Result<Vec<Cell>, PatternError> {
    String::from_utf8_lossy(line)
        .chars()
        .enumerate()
        .map(|(y, c)| {
            u8::try_from(c)
                .ok()
                .and_then(Cell::from_digit)
                .ok_or(PatternError::InvalidCell {
                    line: line_no,
                    column: y + 1,
                    found: c,
                })
        })
        .collect()
}

/// Inverse of [`read_pattern`]: one line per `x`, one digit per `y`.
pub fn write_pattern(grid: &Grid) -> String {
    let mut s = String::with_capacity((grid.height() + 1) * grid.width());

    for x in 0..grid.width() {
        for y in 0..grid.height() {
            s.push(grid.get(x, y).digit() as char);
        }
        s.push('\n');
    }

    s
}

/// Write `grid` to `path` in the format read by [`load_pattern`].
pub fn save_pattern<P: AsRef<Path>>(grid: &Grid, path: P) -> Result<(), PatternError> {
    let path = path.as_ref();

    fs::write(path, write_pattern(grid)).map_err(|source| PatternError::Io {
        path: path.to_path_buf(),
        source,
    })
}
