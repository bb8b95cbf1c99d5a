//! Transport surface driven by the UI
//!
//! [`Visualizer`] ties the pieces together: it owns the live [`MaxHeap`], the
//! in-flight insert animation (if any) and the [`PlaybackController`] for sort
//! runs. The UI calls one method per user action and [`Visualizer::poll`] on
//! every loop iteration; everything it renders comes from
//! [`Visualizer::display`].
//!
//! A sort run simulates on a clone of the live heap. The live heap itself is
//! only replaced when an insert animation commits, or on reset.

use crate::config::{initial_people, AnimationConfig, DEFAULT_SPEED};
use crate::errors::VisualizerError;
use crate::export::ExportSnapshot;
use crate::heap::{node_details, MaxHeap, NodeDetails, Person};
use crate::playback::{
    DisplayState, InsertAnimation, InsertProgress, LiveFlag, PlaybackController, PlaybackState,
};
use crate::snapshot::generate_sort_steps;
use crate::validation::{parse_weight, validate_weight};
use std::time::Instant;

/// The visualizer state behind the UI
#[derive(Debug)]
pub struct Visualizer {
    initial: Vec<Person>,
    engine: MaxHeap,
    next_id: u32,
    live_display: DisplayState,
    playback: PlaybackController,
    insert: Option<InsertAnimation>,
    live: LiveFlag,
    config: AnimationConfig,
}

fn next_id_after(people: &[Person]) -> u32 {
    people.iter().map(|p| p.person_id).max().map_or(1, |id| id + 1)
}

impl Visualizer {
    /// Create a visualizer whose heap (and reset target) is built from `initial`
    pub fn new(initial: Vec<Person>, config: AnimationConfig, speed: f64) -> Self {
        let engine = MaxHeap::new(&initial);
        Visualizer {
            next_id: next_id_after(&initial),
            live_display: DisplayState::from_heap(engine.snapshot()),
            engine,
            initial,
            playback: PlaybackController::new(config, speed),
            insert: None,
            live: LiveFlag::new(),
            config,
        }
    }

    /// Built-in data set, default timing and speed
    pub fn with_defaults() -> Self {
        Self::new(initial_people(), AnimationConfig::default(), DEFAULT_SPEED)
    }

    /// Insert a person with the next id and start the insert animation
    pub fn add_person(&mut self, weight: u32, now: Instant) -> Result<Person, VisualizerError> {
        let weight = validate_weight(weight)?;
        if self.playback.is_active() {
            tracing::warn!(weight, "insert rejected: sort in progress");
            return Err(VisualizerError::SortInProgress);
        }
        if self.insert.is_some() {
            tracing::warn!(weight, "insert rejected: insert still animating");
            return Err(VisualizerError::InsertInProgress);
        }

        // A finished run is dropped; the live heap comes back on screen
        if self.playback.is_loaded() {
            self.playback.clear();
        }

        let person = Person::new(self.next_id, weight);
        let animation = InsertAnimation::start(
            &self.engine,
            person,
            self.config,
            self.live.clone(),
            &mut self.live_display,
            now,
        );
        self.insert = Some(animation);
        Ok(person)
    }

    /// Validate raw user input, then [`Visualizer::add_person`]
    pub fn add_person_input(&mut self, input: &str, now: Instant) -> Result<Person, VisualizerError> {
        let weight = parse_weight(input)?;
        self.add_person(weight, now)
    }

    /// Precompute the whole heap sort and start playing it.
    /// Returns the number of steps.
    pub fn run_sort(&mut self, now: Instant) -> Result<usize, VisualizerError> {
        if self.playback.is_active() {
            return Err(VisualizerError::SortInProgress);
        }
        if self.insert.is_some() {
            return Err(VisualizerError::InsertInProgress);
        }
        if self.engine.is_empty() {
            return Err(VisualizerError::EmptyHeap);
        }

        let steps = generate_sort_steps(self.engine.clone());
        let count = steps.len();
        tracing::info!(size = self.engine.size(), steps = count, "starting heap sort");
        self.playback.start(steps, now);
        Ok(count)
    }

    /// Restore the initial data set, cancelling any animation or sort run.
    /// Refused while a sort is auto-playing; pause it first.
    pub fn reset(&mut self) -> Result<(), VisualizerError> {
        if self.playback.state().is_playing {
            tracing::warn!("reset rejected: sort playing");
            return Err(VisualizerError::SortInProgress);
        }
        self.live.revoke();
        self.live = LiveFlag::new();
        self.insert = None;
        self.playback.clear();
        self.engine = MaxHeap::new(&self.initial);
        self.next_id = next_id_after(&self.initial);
        self.live_display = DisplayState::from_heap(self.engine.snapshot());
        tracing::info!(size = self.engine.size(), "reset to initial data");
        Ok(())
    }

    pub fn play_pause(&mut self, now: Instant) -> bool {
        let changed = self.playback.play_pause(now);
        tracing::debug!(changed, playing = self.playback.state().is_playing, "play/pause");
        changed
    }

    pub fn step_forward(&mut self) -> bool {
        let moved = self.playback.step_forward();
        tracing::debug!(moved, cursor = ?self.playback.cursor(), "step forward");
        moved
    }

    pub fn step_backward(&mut self) -> bool {
        let moved = self.playback.step_backward();
        tracing::debug!(moved, cursor = ?self.playback.cursor(), "step backward");
        moved
    }

    /// Set the playback speed (clamped) and return the value applied
    pub fn set_speed(&mut self, speed: f64) -> f64 {
        let applied = self.playback.set_speed(speed);
        tracing::debug!(requested = speed, applied, "speed changed");
        applied
    }

    /// Fire due timers. Returns whether anything on screen changed.
    pub fn poll(&mut self, now: Instant) -> bool {
        let mut changed = self.playback.poll(now);

        if let Some(animation) = self.insert.as_mut() {
            match animation.poll(now, &mut self.live_display) {
                InsertProgress::Pending => {}
                InsertProgress::Advanced => changed = true,
                InsertProgress::Finished => {
                    if let Some(animation) = self.insert.take() {
                        let person = animation.person();
                        if let Some(engine) = animation.finish(&mut self.live_display) {
                            self.engine = engine;
                            self.next_id = person.person_id + 1;
                            tracing::debug!(person_id = person.person_id, "insert committed");
                        }
                    }
                    changed = true;
                }
                InsertProgress::Abandoned => {
                    self.insert = None;
                }
            }
        }

        changed
    }

    /// What should be on screen right now
    pub fn display(&self) -> &DisplayState {
        if self.playback.is_loaded() {
            self.playback.display()
        } else {
            &self.live_display
        }
    }

    /// Snapshot of the displayed heap and sorted list for export
    pub fn export(&self) -> ExportSnapshot {
        let display = self.display();
        ExportSnapshot::new(display.heap.clone(), display.sorted.clone())
    }

    /// Details of a node in the displayed heap
    pub fn node_details(&self, index: usize) -> Option<NodeDetails> {
        node_details(&self.display().heap, index)
    }

    /// Stop all deferred writes; the visualizer should not be polled afterwards
    pub fn teardown(&mut self) {
        self.live.revoke();
        self.playback.pause();
    }

    pub fn engine(&self) -> &MaxHeap {
        &self.engine
    }

    pub fn playback(&self) -> &PlaybackState {
        self.playback.state()
    }

    pub fn speed(&self) -> f64 {
        self.playback.speed()
    }

    pub fn next_id(&self) -> u32 {
        self.next_id
    }

    /// A sort run is loaded and not finished
    pub fn is_sorting(&self) -> bool {
        self.playback.is_active()
    }

    pub fn is_inserting(&self) -> bool {
        self.insert.is_some()
    }
}

impl Drop for Visualizer {
    fn drop(&mut self) {
        self.live.revoke();
    }
}
