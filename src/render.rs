use std::io;
use std::io::Write;

use crossterm::cursor;
use crossterm::queue;
use crossterm::style;
use crossterm::terminal;

use crate::grid::Grid;

/// Each cell is drawn this many glyphs wide so that cells look roughly square in most terminal
/// fonts.
pub const GLYPHS_PER_CELL: usize = 2;

/// Builds the frame for `grid`: one line per `y`, one pair of glyphs per `x`.
pub fn render(grid: &Grid) -> String {
    // The live glyph is 3 bytes of UTF-8, plus one byte per newline
    let mut fb = String::with_capacity(grid.height() * (3 * GLYPHS_PER_CELL * grid.width() + 1));

    for y in 0..grid.height() {
        if y > 0 {
            fb.push('\n');
        }

        for x in 0..grid.width() {
            let glyph = grid.get(x, y).glyph();

            for _ in 0..GLYPHS_PER_CELL {
                fb.push(glyph);
            }
        }
    }

    fb
}

/// Clears the terminal and draws `frame` from the top left corner.
///
/// Lines are placed with cursor movements instead of newlines so that the output is laid out the
/// same in raw mode.
pub fn draw<W: Write>(out: &mut W, frame: &str) -> io::Result<()> {
    queue!(
        out,
        terminal::Clear(terminal::ClearType::All),
        cursor::MoveTo(0, 0),
    )?;

    for line in frame.lines() {
        queue!(out, style::Print(line), cursor::MoveToNextLine(1))?;
    }

    out.flush()
}
