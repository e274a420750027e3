//! Main TUI application state and logic

use crate::config::{clamp_size, Settings};
use crate::generator::{compile, Algorithm};
use crate::model::Element;
use crate::playback::Player;
use crate::randomizer::Randomizer;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};
use tracing::info;

/// Longest the event loop sleeps when no tick is pending
const IDLE_POLL: Duration = Duration::from_millis(50);

/// Minimum gap between two accepted space presses
const SPACE_DEBOUNCE: Duration = Duration::from_millis(200);

/// Speed change per arrow key press
const SPEED_STEP: u8 = 5;

/// The main application state
pub struct App {
    /// Selected algorithm
    pub algorithm: Algorithm,

    /// The input every run is compiled from
    pub base: Vec<Element>,

    /// Playback over the run compiled from `base`
    pub player: Player,

    /// Source of fresh arrays
    randomizer: Randomizer,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,
}

impl App {
    pub fn new(settings: Settings) -> Self {
        let mut randomizer = Randomizer::new(settings.seed);
        let base = settings.initial_input(&mut randomizer);
        let run = compile(&base, settings.algorithm);
        let player = Player::new(&base, run, settings.speed);

        App {
            algorithm: settings.algorithm,
            base,
            player,
            randomizer,
            should_quit: false,
            status_message: String::from("Ready!"),
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or(Instant::now()),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            self.tick(Instant::now());

            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Sleep until the next auto-play tick or a key press
            let timeout = self
                .player
                .next_deadline()
                .map(|due| due.saturating_duration_since(Instant::now()))
                .unwrap_or(IDLE_POLL)
                .min(IDLE_POLL);

            if event::poll(timeout)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key, Instant::now());
                    }
                }
            }
        }

        Ok(())
    }

    /// Fire any due auto-play tick
    pub fn tick(&mut self, now: Instant) {
        if self.player.poll(now) {
            if self.player.is_playing() {
                self.status_message = "Playing...".to_string();
            } else {
                self.status_message = "Playback complete".to_string();
            }
        }
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Panes on top, status bar at bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        // Sidebar | Bars
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(30), Constraint::Min(0)])
            .split(main_chunks[0]);

        // Sidebar: Stats (top) | Legend (bottom)
        let sidebar = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(7)])
            .split(columns[0]);

        super::panes::render_stats_pane(frame, sidebar[0], &self.player, self.base.len());
        super::panes::render_legend_pane(frame, sidebar[1]);
        super::panes::render_bars_pane(frame, columns[1], self.algorithm, self.player.current());
        super::panes::render_status_bar(
            frame,
            main_chunks[1],
            &self.status_message,
            self.player.status(),
            self.player.progress(),
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent, now: Instant) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char(' ') => {
                // Toggle auto-play (debounced to ignore key repeat)
                if now.saturating_duration_since(self.last_space_press) >= SPACE_DEBOUNCE {
                    self.last_space_press = now;
                    self.toggle_play(now);
                }
            }
            // Number keys step forward N times directly
            KeyCode::Char(c @ '1'..='9') => {
                self.player.pause();
                let n = c.to_digit(10).unwrap_or(1) as usize;
                let stepped = (0..n).take_while(|_| self.player.step_forward()).count();
                self.status_message = format!("Stepped forward {} step(s)", stepped);
            }
            KeyCode::Right => {
                self.player.pause();
                self.step_forward();
            }
            KeyCode::Left => {
                self.player.pause();
                self.step_backward();
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                self.player.reset();
                self.status_message = "Reset".to_string();
            }
            KeyCode::Char('s') | KeyCode::Char('S') => {
                self.shuffle();
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                self.resize(self.base.len().saturating_add(1));
            }
            KeyCode::Char('-') | KeyCode::Char('_') => {
                self.resize(self.base.len().saturating_sub(1));
            }
            KeyCode::Up => {
                let speed = self.player.speed().faster(SPEED_STEP);
                self.player.set_speed(speed);
                self.status_message = format!("Speed {}%", speed.get());
            }
            KeyCode::Down => {
                let speed = self.player.speed().slower(SPEED_STEP);
                self.player.set_speed(speed);
                self.status_message = format!("Speed {}%", speed.get());
            }
            KeyCode::Tab => {
                self.select_algorithm(self.algorithm.next());
            }
            KeyCode::BackTab => {
                self.select_algorithm(self.algorithm.prev());
            }
            KeyCode::Enter => {
                // Jump to end of the run
                self.player.pause();
                self.player.seek(self.player.total_frames());
                self.status_message = "Jumped to end".to_string();
            }
            KeyCode::Backspace => {
                // Jump to start of the run
                self.player.pause();
                self.player.seek(0);
                self.status_message = "Jumped to start".to_string();
            }
            _ => {}
        }
    }

    fn toggle_play(&mut self, now: Instant) {
        if self.player.is_playing() {
            self.player.pause();
            self.status_message = "Paused".to_string();
        } else if self.player.play(now) {
            self.status_message = "Playing...".to_string();
        } else {
            self.status_message = "Nothing to play".to_string();
        }
    }

    /// Step forward in the run
    fn step_forward(&mut self) {
        if self.player.step_forward() {
            self.status_message = "Stepped forward".to_string();
        } else {
            self.status_message = "Cannot step forward: already at the end".to_string();
        }
    }

    /// Step backward in the run
    fn step_backward(&mut self) {
        if self.player.step_back() {
            self.status_message = "Stepped backward".to_string();
        } else {
            self.status_message = "Cannot step backward: already at the start".to_string();
        }
    }

    /// Replace the input with a fresh random array of the same size
    pub fn shuffle(&mut self) {
        let size = clamp_size(self.base.len());
        self.base = self.randomizer.generate(size);
        self.rebuild();
        self.status_message = "New array".to_string();
    }

    /// Replace the input with a fresh random array of `size` (clamped)
    pub fn resize(&mut self, size: usize) {
        let size = clamp_size(size);
        self.base = self.randomizer.generate(size);
        self.rebuild();
        self.status_message = format!("Array size {}", size);
    }

    pub fn select_algorithm(&mut self, algorithm: Algorithm) {
        self.algorithm = algorithm;
        self.rebuild();
        self.status_message = format!("Selected {}", algorithm.name());
    }

    /// Discard the current run and compile a new one; playback restarts at Idle
    fn rebuild(&mut self) {
        let speed = self.player.speed();
        let run = compile(&self.base, self.algorithm);
        info!(
            algorithm = self.algorithm.id(),
            size = self.base.len(),
            frames = run.len(),
            "recompiled run"
        );
        self.player = Player::new(&self.base, run, speed);
    }
}
