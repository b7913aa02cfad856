use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::cell::Cell;
use crate::grid::Grid;
use crate::grid::GridError;

/// A cell is seeded alive when a uniform draw in `[0, 1)` lands above this threshold, so roughly
/// 15% of cells start out alive.
pub const DEAD_THRESHOLD: f64 = 0.85;

/// Seed a grid from `rng`, one independent draw per cell in x-major order.
pub fn random_grid<R: Rng + ?Sized>(
    width: usize,
    height: usize,
    rng: &mut R,
) -> Result<Grid, GridError> {
    Grid::from_fn(width, height, |_, _| {
        let draw: f64 = rng.r#gen();

        Cell::from(draw > DEAD_THRESHOLD)
    })
}

/// Like [`random_grid`], but reproducible for a given `seed`.
pub fn seeded_grid(width: usize, height: usize, seed: u64) -> Result<Grid, GridError> {
    let mut rng = StdRng::seed_from_u64(seed);

    random_grid(width, height, &mut rng)
}
