//! # Introduction
//!
//! sortty simulates a sorting algorithm over an array once, recording a
//! [`model::Frame`] after every comparison, swap, and finalization. The
//! recorded [`run::Run`] is then replayed forward and backward, or
//! auto-played at a chosen speed, through a terminal UI built with
//! [ratatui](https://docs.rs/ratatui).
//!
//! ## Pipeline
//!
//! ```text
//! Randomizer → Input → Generator → Run → Player → TUI
//! ```
//!
//! 1. [`randomizer`]: produces fresh unsorted input arrays.
//! 2. [`generator`]: instrumented simulations of the supported sorts,
//!    compiled into a [`run::Run`].
//! 3. [`playback`]: the [`playback::Player`] state machine that steps
//!    through a run and schedules auto-play ticks.
//! 4. [`config`]: recognized ranges, speed/delay mapping, command-line options.
//! 5. [`ui`]: ratatui-based TUI; not part of the stable library API.
//!
//! ## Supported algorithms
//!
//! `bubble-sort`, `selection-sort`, `insertion-sort`, `quick-sort` (Lomuto),
//! `merge-sort` (top-down).

pub mod config;
pub mod generator;
pub mod model;
pub mod playback;
pub mod randomizer;
pub mod run;
pub mod ui;
