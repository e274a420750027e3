//! Playback controller for a compiled [`Run`].
//!
//! The controller owns a position into the run and exposes the frame to
//! display. Position `0` shows the untouched input; position `len` shows the
//! last recorded frame.
//!
//! Auto-play is driven by [`Tick`]s. Each tick carries the epoch it was
//! scheduled in; cancelling (pause, reset, seek, reaching the end) bumps the
//! epoch, so a tick that was already handed out can never apply a frame
//! afterwards.

use crate::config::Speed;
use crate::model::{Element, Frame};
use crate::run::Run;
use std::time::{Duration, Instant};
use tracing::debug;

/// Current state of playback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackStatus {
    /// At the untouched input, not playing
    Idle,
    /// Auto-advancing
    Playing,
    /// Stopped somewhere inside the run
    Paused,
    /// Showing the last frame
    Finished,
}

/// A scheduled auto-advance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    epoch: u64,
    due: Instant,
}

impl Tick {
    pub fn due(&self) -> Instant {
        self.due
    }
}

/// Steps through a run forward and backward, or auto-advances over time
#[derive(Debug)]
pub struct Player {
    initial: Frame,
    run: Run,
    position: usize,
    playing: bool,
    speed: Speed,
    epoch: u64,
    pending: Option<Tick>,
}

impl Player {
    pub fn new(input: &[Element], run: Run, speed: Speed) -> Self {
        Player {
            initial: Frame::initial(input),
            run,
            position: 0,
            playing: false,
            speed,
            epoch: 0,
            pending: None,
        }
    }

    pub fn status(&self) -> PlaybackStatus {
        if self.playing {
            PlaybackStatus::Playing
        } else if self.position == 0 {
            PlaybackStatus::Idle
        } else if self.position >= self.run.len() {
            PlaybackStatus::Finished
        } else {
            PlaybackStatus::Paused
        }
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn total_frames(&self) -> usize {
        self.run.len()
    }

    pub fn speed(&self) -> Speed {
        self.speed
    }

    pub fn run(&self) -> &Run {
        &self.run
    }

    /// The frame to render at the current position
    pub fn current(&self) -> &Frame {
        match self.position {
            0 => &self.initial,
            p => self.run.get(p - 1).unwrap_or(&self.initial),
        }
    }

    /// Fraction of the run displayed so far, `0.0` for an empty run
    pub fn progress(&self) -> f64 {
        if self.run.is_empty() {
            0.0
        } else {
            self.position as f64 / self.run.len() as f64
        }
    }

    /// Start auto-play, rewinding first if already finished.
    ///
    /// Returns `false` when there is nothing to play.
    pub fn play(&mut self, now: Instant) -> bool {
        if self.run.is_empty() {
            return false;
        }
        if self.playing {
            return true;
        }
        if self.position >= self.run.len() {
            self.position = 0;
        }
        self.playing = true;
        self.schedule(now);
        debug!(position = self.position, "playback started");
        true
    }

    /// Stop auto-play, keeping the current position
    pub fn pause(&mut self) {
        if self.playing {
            self.playing = false;
            self.cancel();
            debug!(position = self.position, "playback paused");
        }
    }

    pub fn toggle(&mut self, now: Instant) -> bool {
        if self.playing {
            self.pause();
            true
        } else {
            self.play(now)
        }
    }

    /// Back to the untouched input, not playing
    pub fn reset(&mut self) {
        self.playing = false;
        self.cancel();
        self.position = 0;
        debug!("playback reset");
    }

    /// Advance one frame; ignored while playing and clamped at the end
    pub fn step_forward(&mut self) -> bool {
        if self.playing || self.position >= self.run.len() {
            return false;
        }
        self.position += 1;
        true
    }

    /// Go back one frame; ignored while playing and clamped at the start
    pub fn step_back(&mut self) -> bool {
        if self.playing || self.position == 0 {
            return false;
        }
        self.position -= 1;
        true
    }

    /// Jump to `position` (clamped to `0..=len`); ignored while playing
    pub fn seek(&mut self, position: usize) -> bool {
        if self.playing {
            return false;
        }
        self.cancel();
        self.position = position.min(self.run.len());
        true
    }

    /// Applies from the next scheduled advance on; a pending tick keeps its deadline
    pub fn set_speed(&mut self, speed: Speed) {
        self.speed = speed;
    }

    /// Delay between auto-advanced frames at the current speed
    pub fn delay(&self) -> Duration {
        self.speed.delay()
    }

    /// The tick waiting to fire, if auto-play is active
    pub fn pending(&self) -> Option<Tick> {
        self.pending
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.map(|t| t.due)
    }

    /// Fire the pending tick if it is due. Returns whether a frame was applied.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.pending {
            Some(tick) if now >= tick.due => self.fire(tick, now),
            _ => false,
        }
    }

    /// Apply one frame for `tick` and schedule the next one.
    ///
    /// Ticks from a cancelled epoch are rejected.
    pub fn fire(&mut self, tick: Tick, now: Instant) -> bool {
        if !self.playing || tick.epoch != self.epoch {
            return false;
        }
        self.pending = None;

        if self.position < self.run.len() {
            self.position += 1;
        }

        if self.position >= self.run.len() {
            self.playing = false;
            self.cancel();
            debug!(frames = self.run.len(), "playback finished");
        } else {
            self.schedule(now);
        }
        true
    }

    fn schedule(&mut self, now: Instant) {
        self.pending = Some(Tick {
            epoch: self.epoch,
            due: now + self.speed.delay(),
        });
    }

    fn cancel(&mut self) {
        self.epoch = self.epoch.wrapping_add(1);
        self.pending = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::{compile, compile_id, Algorithm};
    use crate::model::{elements_from_values, ElementState};

    fn player(values: &[u32]) -> Player {
        let input = elements_from_values(values);
        let run = compile(&input, Algorithm::BubbleSort);
        Player::new(&input, run, Speed::new(50))
    }

    #[test]
    fn test_initial_state() {
        let p = player(&[3, 1, 2]);
        assert_eq!(p.status(), PlaybackStatus::Idle);
        assert_eq!(p.current().values(), vec![3, 1, 2]);
        assert_eq!(p.progress(), 0.0);
        assert!(p.pending().is_none());
    }

    #[test]
    fn test_step_forward_applies_recorded_frame() {
        let mut p = player(&[3, 1, 2]);
        assert!(p.step_forward());
        assert_eq!(p.status(), PlaybackStatus::Paused);
        assert_eq!(p.current(), p.run().get(0).unwrap());
    }

    #[test]
    fn test_step_back_to_start_shows_input() {
        let mut p = player(&[3, 1, 2]);
        p.step_forward();
        p.step_forward();
        assert!(p.step_back());
        assert_eq!(p.current(), p.run().get(0).unwrap());
        assert!(p.step_back());
        assert_eq!(p.current().values(), vec![3, 1, 2]);
        assert_eq!((p.current().comparisons, p.current().swaps), (0, 0));
        assert!(!p.step_back());
        assert_eq!(p.position(), 0);
    }

    #[test]
    fn test_steps_ignored_while_playing() {
        let mut p = player(&[3, 1, 2]);
        let now = Instant::now();
        assert!(p.play(now));
        assert!(!p.step_forward());
        assert!(!p.step_back());
        assert!(!p.seek(3));
        assert_eq!(p.position(), 0);
    }

    #[test]
    fn test_tick_waits_for_delay() {
        let mut p = player(&[3, 1, 2]);
        let now = Instant::now();
        p.play(now);
        assert!(!p.poll(now));
        assert!(!p.poll(now + Duration::from_millis(99)));
        assert!(p.poll(now + Duration::from_millis(100)));
        assert_eq!(p.position(), 1);
        assert_eq!(
            p.next_deadline(),
            Some(now + Duration::from_millis(200))
        );
    }

    #[test]
    fn test_stale_tick_is_rejected() {
        let mut p = player(&[3, 1, 2]);
        let now = Instant::now();
        p.play(now);
        let stale = p.pending().unwrap();

        p.pause();
        assert!(!p.fire(stale, now + Duration::from_secs(1)));
        assert_eq!(p.position(), 0);

        p.play(now);
        assert!(!p.fire(stale, now + Duration::from_secs(1)));
        assert_eq!(p.position(), 0);

        let fresh = p.pending().unwrap();
        assert!(p.fire(fresh, now + Duration::from_secs(1)));
        assert_eq!(p.position(), 1);
    }

    #[test]
    fn test_play_runs_to_finished() {
        let mut p = player(&[4, 2, 3, 1]);
        let mut now = Instant::now();
        p.play(now);
        while p.is_playing() {
            now += p.delay();
            assert!(p.poll(now));
        }
        assert_eq!(p.status(), PlaybackStatus::Finished);
        assert_eq!(p.position(), p.total_frames());
        assert!(p.pending().is_none());
        assert!(p.current().all_in_state(ElementState::Sorted));
        assert_eq!(p.progress(), 1.0);
    }

    #[test]
    fn test_play_from_finished_rewinds() {
        let mut p = player(&[2, 1]);
        p.seek(usize::MAX);
        assert_eq!(p.status(), PlaybackStatus::Finished);

        let now = Instant::now();
        assert!(p.play(now));
        assert_eq!(p.position(), 0);
        assert_eq!(p.current().values(), vec![2, 1]);
        assert_eq!(p.status(), PlaybackStatus::Playing);
    }

    #[test]
    fn test_speed_change_applies_to_next_tick_only() {
        let mut p = player(&[5, 4, 3, 2, 1]);
        let now = Instant::now();
        p.play(now);
        let first_due = p.next_deadline().unwrap();

        p.set_speed(Speed::new(100));
        assert_eq!(p.next_deadline(), Some(first_due));
        assert_eq!(p.position(), 0);
        assert_eq!(p.current().comparisons, 0);

        assert!(p.poll(first_due));
        assert_eq!(
            p.next_deadline(),
            Some(first_due + Duration::from_millis(10))
        );
    }

    #[test]
    fn test_reset_from_anywhere() {
        let mut p = player(&[3, 1, 2]);
        p.step_forward();
        p.step_forward();
        p.reset();
        assert_eq!(p.status(), PlaybackStatus::Idle);
        assert!(p.current().all_in_state(ElementState::Default));

        p.play(Instant::now());
        p.reset();
        assert_eq!(p.status(), PlaybackStatus::Idle);
        assert!(p.pending().is_none());
    }

    #[test]
    fn test_empty_run_has_nothing_to_play() {
        let input = elements_from_values(&[3, 1, 2]);
        let run = compile_id(&input, "bogo-sort");
        let mut p = Player::new(&input, run, Speed::default());

        assert!(!p.play(Instant::now()));
        assert_eq!(p.status(), PlaybackStatus::Idle);
        assert!(!p.step_forward());
        assert_eq!(p.position(), 0);
        assert_eq!(p.current().values(), vec![3, 1, 2]);
    }

    #[test]
    fn test_toggle() {
        let mut p = player(&[3, 1, 2]);
        let now = Instant::now();
        assert!(p.toggle(now));
        assert!(p.is_playing());
        assert!(p.toggle(now));
        assert_eq!(p.status(), PlaybackStatus::Idle);
    }
}
