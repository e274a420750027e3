//! TUI pane rendering modules
//!
//! Each pane is a stateless `render_*` function that reads from the current
//! [`Player`](crate::playback::Player) and paints one region of the screen.
//!
//! # Pane Modules
//!
//! - [`bars`]: bar chart of the current frame, colored by element state
//! - [`stats`]: step position, comparison and swap counters, speed, size
//! - [`legend`]: color key for element states
//! - [`status`]: status bar with keybindings and playback state

pub mod bars;
pub mod legend;
pub mod stats;
pub mod status;

pub use bars::render_bars_pane;
pub use legend::render_legend_pane;
pub use stats::render_stats_pane;
pub use status::render_status_bar;
