use std::io;
use std::io::Write;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering;
use std::thread;
use std::time::Duration;

use tracing::debug;
use tracing::trace;

use crate::grid::Grid;
use crate::render;
use crate::step;

/// Shared flag telling a running [`run`] loop to return. Clones refer to the same flag.
#[derive(Debug, Clone, Default)]
pub struct StopSignal(Arc<AtomicBool>);

impl StopSignal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stop(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_stopped(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Draw a generation, advance, wait `delay`, repeat until `stop` is raised.
///
/// The signal is checked once per generation, before drawing. Returns the generation that would
/// have been drawn next.
pub fn run<W: Write>(
    init: Grid,
    out: &mut W,
    delay: Duration,
    stop: &StopSignal,
) -> io::Result<Grid> {
    let mut grid = init;
    let mut generation: u64 = 0;

    while !stop.is_stopped() {
        render::draw(out, &render::render(&grid))?;

        grid = step::advance(&grid);
        generation += 1;
        trace!(generation, live = grid.live_count(), "Advanced");

        thread::sleep(delay);
    }

    debug!(generation, "Stopped");

    Ok(grid)
}

#[cfg(test)]
mod test {
    use std::io;
    use std::io::Write;
    use std::thread;
    use std::time::Duration;

    use super::StopSignal;
    use super::run;
    use crate::cell::Cell;
    use crate::grid::Grid;
    use crate::step::advance;

    /// Raises the stop signal once `frames` frames have been flushed
    struct StopAfter {
        frames: usize,
        stop: StopSignal,
        buf: Vec<u8>,
    }

    impl Write for StopAfter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.buf.extend_from_slice(buf);

            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            self.frames = self.frames.saturating_sub(1);

            if self.frames == 0 {
                self.stop.stop();
            }

            Ok(())
        }
    }

    fn glider() -> Grid {
        let live = [(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)];

        Grid::from_fn(8, 8, |x, y| Cell::from(live.contains(&(x, y)))).unwrap()
    }

    #[test]
    fn stopped_before_start() {
        let stop = StopSignal::new();
        stop.stop();

        let mut out = Vec::new();
        let grid = run(glider(), &mut out, Duration::ZERO, &stop).unwrap();

        assert_eq!(grid, glider());
        assert!(out.is_empty());
    }

    #[test]
    fn advances_once_per_frame() {
        let stop = StopSignal::new();
        let mut out = StopAfter {
            frames: 3,
            stop: stop.clone(),
            buf: Vec::new(),
        };

        let grid = run(glider(), &mut out, Duration::ZERO, &stop).unwrap();

        let expected = advance(&advance(&advance(&glider())));
        assert_eq!(grid, expected);
        assert!(!out.buf.is_empty());
    }

    #[test]
    fn stop_from_another_thread() {
        let stop = StopSignal::new();
        let remote = stop.clone();

        let handle = thread::spawn(move || {
            thread::sleep(Duration::from_millis(20));
            remote.stop();
        });

        let grid = run(glider(), &mut io::sink(), Duration::from_millis(1), &stop).unwrap();
        handle.join().unwrap();

        assert!(stop.is_stopped());
        assert_eq!(grid.width(), 8);
    }
}
