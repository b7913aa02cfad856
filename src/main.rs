use std::io;
use std::io::Write;
use std::thread;
use std::time::Duration;

use anyhow::Context;
use crossterm::cursor;
use crossterm::event;
use crossterm::event::Event as CtEvent;
use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use crossterm::event::KeyModifiers;
use crossterm::execute;
use crossterm::terminal;
use tracing::info;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use lifegrid::config::Config;
use lifegrid::driver;
use lifegrid::driver::StopSignal;
use lifegrid::grid::Grid;
use lifegrid::pattern;
use lifegrid::seed;

/// How long the input thread waits for an event before checking the stop signal again
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Returns true if the app should exit
fn is_exit(event: &CtEvent) -> bool {
    matches!(
        event,
        CtEvent::Key(
            KeyEvent {
                code: KeyCode::Char('q') | KeyCode::Esc,
                ..
            } | KeyEvent {
                code: KeyCode::Char('c'),
                modifiers: KeyModifiers::CONTROL,
                ..
            }
        )
    )
}

/// Raises the stop signal when dropped, so the driver winds down even if the input thread
/// fails or panics
struct StopOnDrop(StopSignal);

impl Drop for StopOnDrop {
    fn drop(&mut self) {
        self.0.stop();
    }
}

/// Shows the cursor and leaves raw mode when dropped
struct TerminalGuard<W: Write>(W);

impl<W: Write> TerminalGuard<W> {
    fn enter(out: W) -> anyhow::Result<Self> {
        terminal::enable_raw_mode().context("Failed to enable raw mode")?;
        let mut guard = Self(out);

        execute!(guard.0, cursor::Hide).context("Failed to hide cursor")?;

        Ok(guard)
    }
}

impl<W: Write> Drop for TerminalGuard<W> {
    fn drop(&mut self) {
        if let Err(e) = execute!(self.0, cursor::Show) {
            warn!("Failed to show cursor: {e}");
        }

        if let Err(e) = terminal::disable_raw_mode() {
            warn!("Failed to disable raw mode: {e}");
        }
    }
}

/// Waits for the next terminal event, giving up after `POLL_INTERVAL`
fn next_event() -> io::Result<Option<CtEvent>> {
    if event::poll(POLL_INTERVAL)? {
        event::read().map(Some)
    } else {
        Ok(None)
    }
}

/// Raise `stop` once the user asks to exit, or return when it is raised elsewhere. The signal is
/// raised on every way out, including errors from `next`.
fn watch_input<F>(stop: StopSignal, mut next: F) -> io::Result<()>
where
    F: FnMut() -> io::Result<Option<CtEvent>>,
{
    let _guard = StopOnDrop(stop.clone());

    while !stop.is_stopped() {
        if next()?.as_ref().is_some_and(is_exit) {
            stop.stop();
        }
    }

    Ok(())
}

fn initial_grid(config: &Config) -> anyhow::Result<Grid> {
    if let Some(path) = &config.pattern {
        return pattern::load_pattern(path).context("Failed to load starting pattern");
    }

    let grid = match config.seed {
        Some(s) => seed::seeded_grid(config.width, config.height, s),
        None => seed::random_grid(config.width, config.height, &mut rand::thread_rng()),
    };

    grid.context("Failed to seed starting grid")
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let config = Config::from_args(std::env::args().skip(1)).context("Invalid arguments")?;
    let grid = initial_grid(&config)?;

    info!(
        width = grid.width(),
        height = grid.height(),
        live = grid.live_count(),
        "Starting"
    );

    let stop = StopSignal::new();

    let term_guard = TerminalGuard::enter(io::stdout())?;

    let input = {
        let stop = stop.clone();
        thread::spawn(move || watch_input(stop, next_event))
    };

    let res = driver::run(grid, &mut io::stdout(), config.delay, &stop);

    // Make sure the input thread winds down even if drawing failed
    stop.stop();
    drop(term_guard);

    let watched = input
        .join()
        .map_err(|_| anyhow::anyhow!("Input thread panicked"))?;

    let last = res.context("Failed to draw frame")?;
    watched.context("Failed to read terminal input")?;

    info!(live = last.live_count(), "Exiting");

    Ok(())
}
