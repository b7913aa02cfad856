use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// Width of the random starting grid
pub const DEFAULT_WIDTH: usize = 100;

/// Height of the random starting grid
pub const DEFAULT_HEIGHT: usize = 50;

/// Pause between generations
pub const FRAMETIME: Duration = Duration::from_millis(30);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Seed must be an unsigned integer, got \"{0}\"")]
    InvalidSeed(String),

    #[error("Unexpected argument \"{0}\"")]
    UnexpectedArgument(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Dimensions of the random starting grid. Ignored when a pattern is loaded.
    pub width: usize,
    pub height: usize,

    /// Delay between generations
    pub delay: Duration,

    /// Start from this pattern file instead of a random grid
    pub pattern: Option<PathBuf>,

    /// Seed for the random starting grid. Entropy is used when unset.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            delay: FRAMETIME,
            pattern: None,
            seed: None,
        }
    }
}

impl Config {
    /// Build a config from the positional arguments `[PATTERN] [SEED]`, excluding the program name.
    ///
    /// A pattern of `-` means no pattern, which allows passing a seed on its own.
    pub fn from_args<I>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = Self::default();
        let mut args = args.into_iter();

        if let Some(pattern) = args.next() {
            if pattern != "-" {
                config.pattern = Some(PathBuf::from(pattern));
            }
        }

        if let Some(seed) = args.next() {
            let seed = seed.parse::<u64>().map_err(|_| ConfigError::InvalidSeed(seed))?;
            config.seed = Some(seed);
        }

        if let Some(extra) = args.next() {
            return Err(ConfigError::UnexpectedArgument(extra));
        }

        Ok(config)
    }
}
