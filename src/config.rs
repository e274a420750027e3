//! Recognized ranges, the speed-to-delay mapping, and command-line options.

use crate::generator::Algorithm;
use crate::model::{elements_from_values, Element};
use crate::randomizer::Randomizer;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Smallest array the size control accepts
pub const MIN_ARRAY_SIZE: usize = 5;
/// Largest array the size control accepts
pub const MAX_ARRAY_SIZE: usize = 50;
pub const DEFAULT_ARRAY_SIZE: usize = 20;

pub const MIN_SPEED: u8 = 1;
pub const MAX_SPEED: u8 = 100;
pub const DEFAULT_SPEED: u8 = 50;

/// Randomized values are drawn from `MIN_VALUE..=MAX_VALUE`
pub const MIN_VALUE: u32 = 5;
pub const MAX_VALUE: u32 = 104;

/// Values are drawn against this ceiling when scaling bar heights
pub const BAR_CEILING: u32 = 105;

/// Delay floor in milliseconds; auto-play never ticks faster than this
pub const MIN_DELAY_MS: u64 = 10;
const BASE_DELAY_MS: u64 = 200;

/// Clamp an array size into the recognized range
pub fn clamp_size(size: usize) -> usize {
    size.clamp(MIN_ARRAY_SIZE, MAX_ARRAY_SIZE)
}

/// Auto-play speed, always within `MIN_SPEED..=MAX_SPEED`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Speed(u8);

impl Speed {
    /// Out-of-range values are clamped rather than rejected
    pub fn new(value: u8) -> Self {
        Speed(value.clamp(MIN_SPEED, MAX_SPEED))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// `max(10, 200 - 2 * speed)` milliseconds per auto-advanced frame
    pub fn delay(self) -> Duration {
        let ms = BASE_DELAY_MS
            .saturating_sub(2 * u64::from(self.0))
            .max(MIN_DELAY_MS);
        Duration::from_millis(ms)
    }

    pub fn faster(self, by: u8) -> Self {
        Speed::new(self.0.saturating_add(by))
    }

    pub fn slower(self, by: u8) -> Self {
        Speed::new(self.0.saturating_sub(by))
    }
}

impl Default for Speed {
    fn default() -> Self {
        Speed(DEFAULT_SPEED)
    }
}

/// Errors raised while turning command-line options into a session
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value '{0}' in --values (expected a non-negative integer)")]
    InvalidValue(String),

    #[error("--values lists {0} entries; at most {MAX_ARRAY_SIZE} are accepted")]
    TooManyValues(usize),

    #[error("could not open log file {path}: {source}")]
    LogFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Step through sorting algorithms in the terminal
#[derive(Debug, Parser)]
#[command(name = "sortty", version, about)]
pub struct Cli {
    /// Algorithm to visualize (bubble-sort, selection-sort, insertion-sort, quick-sort, merge-sort)
    #[arg(short, long, default_value = "bubble-sort")]
    pub algorithm: Algorithm,

    /// Number of bars to generate (clamped to 5..=50)
    #[arg(short = 'n', long, default_value_t = DEFAULT_ARRAY_SIZE)]
    pub size: usize,

    /// Playback speed (clamped to 1..=100)
    #[arg(short, long, default_value_t = u16::from(DEFAULT_SPEED))]
    pub speed: u16,

    /// Seed for the array randomizer
    #[arg(long)]
    pub seed: Option<u64>,

    /// Explicit comma-separated input, e.g. "5,3,4,1,2"
    #[arg(long)]
    pub values: Option<String>,

    /// Print the compiled run's statistics and exit instead of opening the TUI
    #[arg(long)]
    pub summary: bool,

    /// Write log output to this file
    #[arg(long = "log-file")]
    pub log_file: Option<PathBuf>,
}

/// Session settings after validation and clamping
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub algorithm: Algorithm,
    pub size: usize,
    pub speed: Speed,
    pub seed: Option<u64>,
    pub values: Option<Vec<u32>>,
}

impl Settings {
    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        let values = cli.values.as_deref().map(parse_values).transpose()?;
        if let Some(values) = &values {
            if values.len() > MAX_ARRAY_SIZE {
                return Err(ConfigError::TooManyValues(values.len()));
            }
        }
        let speed = u8::try_from(cli.speed).unwrap_or(MAX_SPEED);
        Ok(Settings {
            algorithm: cli.algorithm,
            size: clamp_size(cli.size),
            speed: Speed::new(speed),
            seed: cli.seed,
            values,
        })
    }

    /// Explicit values when given, otherwise a random array of `size`
    pub fn initial_input(&self, randomizer: &mut Randomizer) -> Vec<Element> {
        match &self.values {
            Some(values) => elements_from_values(values),
            None => randomizer.generate(self.size),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            algorithm: Algorithm::BubbleSort,
            size: DEFAULT_ARRAY_SIZE,
            speed: Speed::default(),
            seed: None,
            values: None,
        }
    }
}

/// Parse a comma- or whitespace-separated list of values
pub fn parse_values(raw: &str) -> Result<Vec<u32>, ConfigError> {
    raw.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<u32>()
                .map_err(|_| ConfigError::InvalidValue(s.to_string()))
        })
        .collect()
}
