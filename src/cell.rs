/// Glyph drawn for a live cell. Dead cells are drawn as a space.
pub const LIVE_GLYPH: char = '\u{2588}';
pub const DEAD_GLYPH: char = ' ';

/// State of a single grid position.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Cell {
    #[default]
    Dead,
    Live,
}

impl Cell {
    pub const fn is_live(self) -> bool {
        matches!(self, Cell::Live)
    }

    /// The character used by the terminal renderer
    pub const fn glyph(self) -> char {
        match self {
            Cell::Dead => DEAD_GLYPH,
            Cell::Live => LIVE_GLYPH,
        }
    }

    /// Pattern file digit: `0` for dead, `1` for live
    pub const fn digit(self) -> u8 {
        match self {
            Cell::Dead => b'0',
            Cell::Live => b'1',
        }
    }

    /// Inverse of [`Cell::digit`]. Anything other than `0` or `1` yields `None`.
    pub const fn from_digit(b: u8) -> Option<Self> {
        match b {
            b'0' => Some(Cell::Dead),
            b'1' => Some(Cell::Live),
            _ => None,
        }
    }
}

impl From<bool> for Cell {
    fn from(live: bool) -> Self {
        if live { Cell::Live } else { Cell::Dead }
    }
}
