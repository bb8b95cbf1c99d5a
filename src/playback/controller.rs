//! Step playback over a precomputed sort timeline
//!
//! The controller owns the step sequence read-only and a cursor into it.
//! While playing, each tick displays `steps[cursor]` and schedules the next
//! advance after the step's delay divided by the speed multiplier. Pausing
//! and stepping cancel the pending advance; resuming continues past the step
//! that was on screen when playback paused.
//!
//! # Cursor
//!
//! `None` means "not started"; otherwise the cursor is always a valid index.
//! It moves by exactly one per transition and never wraps.

use super::display::DisplayState;
use super::scheduler::TickScheduler;
use crate::config::{clamp_speed, AnimationConfig, DEFAULT_SPEED};
use crate::snapshot::Step;
use std::fmt;
use std::time::{Duration, Instant};

/// Observable playback state
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackState {
    pub cursor: Option<usize>,
    pub total_steps: usize,
    pub is_playing: bool,
    pub is_paused: bool,
    /// The `complete` step was reached
    pub is_finished: bool,
    pub speed: f64,
    pub display: DisplayState,
}

impl Default for PlaybackState {
    fn default() -> Self {
        PlaybackState {
            cursor: None,
            total_steps: 0,
            is_playing: false,
            is_paused: false,
            is_finished: false,
            speed: DEFAULT_SPEED,
            display: DisplayState::default(),
        }
    }
}

type Observer = Box<dyn FnMut(&PlaybackState)>;

/// Transport controls over a step sequence
pub struct PlaybackController {
    steps: Vec<Step>,
    state: PlaybackState,
    scheduler: TickScheduler,
    config: AnimationConfig,
    observers: Vec<Observer>,
}

impl fmt::Debug for PlaybackController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlaybackController")
            .field("steps", &self.steps.len())
            .field("state", &self.state)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl PlaybackController {
    pub fn new(config: AnimationConfig, speed: f64) -> Self {
        PlaybackController {
            steps: Vec::new(),
            state: PlaybackState {
                speed: clamp_speed(speed),
                ..Default::default()
            },
            scheduler: TickScheduler::new(),
            config,
            observers: Vec::new(),
        }
    }

    /// Register a callback run after every state change
    pub fn subscribe<F>(&mut self, observer: F)
    where
        F: FnMut(&PlaybackState) + 'static,
    {
        self.observers.push(Box::new(observer));
    }

    fn notify(&mut self) {
        for observer in &mut self.observers {
            observer(&self.state);
        }
    }

    /// Install a step sequence and start playing from the first step
    pub fn start(&mut self, steps: Vec<Step>, now: Instant) {
        self.scheduler.cancel();
        self.steps = steps;
        self.state.total_steps = self.steps.len();
        self.state.is_finished = false;
        self.state.is_paused = false;

        if self.steps.is_empty() {
            self.state.cursor = None;
            self.state.is_playing = false;
            self.notify();
            return;
        }

        self.state.cursor = Some(0);
        self.state.is_playing = true;
        tracing::debug!(steps = self.steps.len(), "playback started");
        self.display_current(now);
    }

    /// Drop the sequence and return to the not-started state
    pub fn clear(&mut self) {
        self.scheduler.cancel();
        self.steps.clear();
        self.state = PlaybackState {
            speed: self.state.speed,
            ..Default::default()
        };
        self.notify();
    }

    /// Show `steps[cursor]`; while playing, schedule the next advance.
    /// Reaching the `complete` step halts play.
    fn display_current(&mut self, now: Instant) {
        let Some(step) = self.state.cursor.and_then(|c| self.steps.get(c)) else {
            return;
        };
        self.state.display.apply(step);
        let complete = step.is_complete();
        let delay = self.delay_for(step);

        if complete {
            self.finish();
        } else if self.state.is_playing {
            self.scheduler.schedule(now + delay);
        }
        self.notify();
    }

    fn finish(&mut self) {
        self.scheduler.cancel();
        self.state.is_playing = false;
        self.state.is_paused = false;
        self.state.is_finished = true;
        tracing::debug!("playback finished");
    }

    fn delay_for(&self, step: &Step) -> Duration {
        self.config.step_delay(step.kind).div_f64(self.state.speed)
    }

    /// Fire the pending advance if it is due. Returns whether state changed.
    pub fn poll(&mut self, now: Instant) -> bool {
        if !self.state.is_playing || self.scheduler.fire(now).is_none() {
            return false;
        }

        match self.state.cursor {
            Some(c) if c + 1 < self.steps.len() => {
                self.state.cursor = Some(c + 1);
                self.display_current(now);
            }
            _ => {
                self.finish();
                self.notify();
            }
        }
        true
    }

    /// Freeze auto-play, keeping the displayed step
    pub fn pause(&mut self) -> bool {
        if !self.state.is_playing {
            return false;
        }
        self.scheduler.cancel();
        self.state.is_playing = false;
        self.state.is_paused = true;
        self.notify();
        true
    }

    /// Continue auto-play past the step shown when playback paused
    pub fn resume(&mut self, now: Instant) -> bool {
        if !self.state.is_paused {
            return false;
        }
        self.state.is_paused = false;
        self.state.is_playing = true;
        if let Some(c) = self.state.cursor {
            if c + 1 < self.steps.len() {
                self.state.cursor = Some(c + 1);
            }
        }
        self.display_current(now);
        true
    }

    /// Pause when playing, resume when paused. No-op without an active run.
    pub fn play_pause(&mut self, now: Instant) -> bool {
        if !self.is_active() {
            return false;
        }
        if self.state.is_paused {
            self.resume(now)
        } else {
            self.pause()
        }
    }

    /// Freeze auto-play and show the next step immediately
    pub fn step_forward(&mut self) -> bool {
        let Some(c) = self.state.cursor else {
            return false;
        };
        if c + 1 >= self.steps.len() {
            return false;
        }
        self.freeze();
        self.state.cursor = Some(c + 1);
        self.apply_without_scheduling();
        true
    }

    /// Freeze auto-play and show the previous step immediately
    pub fn step_backward(&mut self) -> bool {
        let Some(c) = self.state.cursor else {
            return false;
        };
        if c == 0 {
            return false;
        }
        self.freeze();
        self.state.cursor = Some(c - 1);
        self.state.is_finished = false;
        self.apply_without_scheduling();
        true
    }

    fn freeze(&mut self) {
        self.scheduler.cancel();
        self.state.is_playing = false;
        self.state.is_paused = true;
    }

    fn apply_without_scheduling(&mut self) {
        if let Some(step) = self.state.cursor.and_then(|c| self.steps.get(c)) {
            self.state.display.apply(step);
            if step.is_complete() {
                self.state.is_paused = false;
                self.state.is_finished = true;
            }
        }
        self.notify();
    }

    /// Set the speed multiplier (clamped); affects only future delays
    pub fn set_speed(&mut self, speed: f64) -> f64 {
        self.state.speed = clamp_speed(speed);
        self.notify();
        self.state.speed
    }

    pub fn speed(&self) -> f64 {
        self.state.speed
    }

    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    pub fn display(&self) -> &DisplayState {
        &self.state.display
    }

    pub fn cursor(&self) -> Option<usize> {
        self.state.cursor
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn current_step(&self) -> Option<&Step> {
        self.state.cursor.and_then(|c| self.steps.get(c))
    }

    /// A sequence is installed (finished or not)
    pub fn is_loaded(&self) -> bool {
        self.state.cursor.is_some()
    }

    /// A sequence is installed and its `complete` step is not on screen
    pub fn is_active(&self) -> bool {
        self.is_loaded() && !self.state.is_finished
    }

    /// When the next automatic advance is due
    pub fn next_tick(&self) -> Option<Instant> {
        self.scheduler.due()
    }
}
