pub mod cell;
pub mod config;
pub mod driver;
pub mod grid;
pub mod pattern;
pub mod render;
pub mod seed;
pub mod step;

mod parse_util;

pub use cell::Cell;
pub use grid::Grid;
