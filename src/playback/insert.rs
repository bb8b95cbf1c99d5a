//! Live insert animation
//!
//! Unlike a sort run, an insert is animated straight from its trace as time
//! passes: first the appended node is highlighted, then each compare and swap
//! is shown for its configured delay. Swaps are applied to the animation's own
//! copy of the heap, never to the engine. When the trace is exhausted the
//! already-mutated engine is handed back for the caller to commit.
//!
//! Every state write first checks a [`LiveFlag`]. Once the owning view revokes
//! it, the animation stops writing and reports [`InsertProgress::Abandoned`].

use super::display::DisplayState;
use super::scheduler::TickScheduler;
use crate::config::AnimationConfig;
use crate::heap::{MaxHeap, OpKind, Operation, Person};
use std::cell::Cell;
use std::rc::Rc;
use std::time::Instant;

/// Shared liveness flag for deferred continuations
#[derive(Debug, Clone)]
pub struct LiveFlag(Rc<Cell<bool>>);

impl LiveFlag {
    pub fn new() -> Self {
        LiveFlag(Rc::new(Cell::new(true)))
    }

    pub fn is_live(&self) -> bool {
        self.0.get()
    }

    /// Mark the consumer as gone; every clone observes it
    pub fn revoke(&self) {
        self.0.set(false);
    }
}

impl Default for LiveFlag {
    fn default() -> Self {
        Self::new()
    }
}

/// Outcome of polling an insert animation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertProgress {
    /// Current frame still on screen
    Pending,
    /// Moved to the next frame
    Advanced,
    /// All frames shown; call [`InsertAnimation::finish`]
    Finished,
    /// The live flag was revoked; nothing was written
    Abandoned,
}

/// An in-flight insert animation
#[derive(Debug)]
pub struct InsertAnimation {
    person: Person,
    engine: MaxHeap,
    frame: Vec<Person>,
    path: Vec<Operation>,
    next_op: usize,
    scheduler: TickScheduler,
    config: AnimationConfig,
    live: LiveFlag,
}

impl InsertAnimation {
    /// Insert `person` into a copy of `live_heap` and start animating it.
    ///
    /// Writes the first frame (new node appended and highlighted) to
    /// `display`, unless `live` is already revoked.
    pub fn start(
        live_heap: &MaxHeap,
        person: Person,
        config: AnimationConfig,
        live: LiveFlag,
        display: &mut DisplayState,
        now: Instant,
    ) -> Self {
        let mut frame = live_heap.snapshot();
        frame.push(person);

        let mut engine = live_heap.clone();
        let path = engine.insert(person);
        tracing::info!(
            person_id = person.person_id,
            weight = person.weight,
            operations = path.len(),
            "inserting person"
        );

        let mut animation = InsertAnimation {
            person,
            engine,
            frame,
            path,
            next_op: 0,
            scheduler: TickScheduler::new(),
            config,
            live,
        };

        if animation.live.is_live() {
            display.heap.clone_from(&animation.frame);
            display.clear_marks();
            display.highlighted.insert(animation.frame.len() - 1);
            animation
                .scheduler
                .schedule(now + animation.config.insert_highlight);
        }
        animation
    }

    /// Advance to the next frame once the current frame's delay has elapsed
    pub fn poll(&mut self, now: Instant, display: &mut DisplayState) -> InsertProgress {
        if !self.live.is_live() {
            self.scheduler.cancel();
            return InsertProgress::Abandoned;
        }
        if self.scheduler.fire(now).is_none() {
            return if self.is_done() {
                InsertProgress::Finished
            } else {
                InsertProgress::Pending
            };
        }

        let Some(op) = self.path.get(self.next_op).copied() else {
            self.next_op = self.path.len() + 1;
            return InsertProgress::Finished;
        };
        self.next_op += 1;
        if !op.apply(&mut self.frame) {
            tracing::warn!(
                indices = ?op.indices,
                "insert trace out of range, showing committed heap"
            );
            self.frame = self.engine.snapshot();
        }

        display.heap.clone_from(&self.frame);
        display.clear_marks();
        display.highlighted.extend(op.indices);
        let delay = match op.kind {
            OpKind::Compare => {
                display.comparing = Some(op.pair());
                self.config.insert_compare
            }
            OpKind::Swap => {
                display.swapping = Some(op.pair());
                self.config.insert_swap
            }
        };
        self.scheduler.schedule(now + delay);
        InsertProgress::Advanced
    }

    /// Every frame has been shown for its full delay
    pub fn is_done(&self) -> bool {
        self.next_op > self.path.len()
    }

    /// Clear the marks and hand back the engine with the person inserted.
    /// Returns `None` (writing nothing) if the live flag was revoked.
    pub fn finish(self, display: &mut DisplayState) -> Option<MaxHeap> {
        if !self.live.is_live() {
            return None;
        }
        display.heap = self.engine.snapshot();
        display.clear_marks();
        Some(self.engine)
    }

    pub fn person(&self) -> Person {
        self.person
    }

    pub fn path(&self) -> &[Operation] {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn base_heap() -> MaxHeap {
        MaxHeap::new(&[Person::new(1, 80), Person::new(2, 50), Person::new(3, 60)])
    }

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_first_frame_highlights_new_node() {
        let t0 = Instant::now();
        let mut display = DisplayState::default();
        let animation = InsertAnimation::start(
            &base_heap(),
            Person::new(99, 95),
            AnimationConfig::default(),
            LiveFlag::new(),
            &mut display,
            t0,
        );

        assert_eq!(display.heap.len(), 4);
        assert_eq!(display.heap[3], Person::new(99, 95));
        assert!(display.is_highlighted(3));
        assert_eq!(animation.path().len(), 4);
    }

    #[test]
    fn test_full_animation_commits_engine() {
        let mut now = Instant::now();
        let mut display = DisplayState::default();
        let mut animation = InsertAnimation::start(
            &base_heap(),
            Person::new(99, 95),
            AnimationConfig::default(),
            LiveFlag::new(),
            &mut display,
            now,
        );

        // highlight, compare(3,1), swap(3,1), compare(1,0), swap(1,0)
        now += ms(500);
        assert_eq!(animation.poll(now, &mut display), InsertProgress::Advanced);
        assert_eq!(display.comparing, Some((3, 1)));
        assert_eq!(display.heap[3].person_id, 99);

        now += ms(600);
        assert_eq!(animation.poll(now, &mut display), InsertProgress::Advanced);
        assert_eq!(display.swapping, Some((3, 1)));
        assert_eq!(display.heap[1].person_id, 99);

        now += ms(800);
        assert_eq!(animation.poll(now, &mut display), InsertProgress::Advanced);
        now += ms(600);
        assert_eq!(animation.poll(now, &mut display), InsertProgress::Advanced);
        assert_eq!(display.heap[0].person_id, 99);

        assert_eq!(animation.poll(now, &mut display), InsertProgress::Pending);
        now += ms(800);
        assert_eq!(animation.poll(now, &mut display), InsertProgress::Finished);
        assert!(animation.is_done());

        let engine = animation.finish(&mut display).unwrap();
        assert_eq!(engine.peek(), Some(&Person::new(99, 95)));
        assert_eq!(display.heap, engine.snapshot());
        assert!(display.highlighted.is_empty());
    }

    #[test]
    fn test_revoked_flag_stops_writes() {
        let t0 = Instant::now();
        let live = LiveFlag::new();
        let mut display = DisplayState::default();
        let mut animation = InsertAnimation::start(
            &base_heap(),
            Person::new(99, 95),
            AnimationConfig::default(),
            live.clone(),
            &mut display,
            t0,
        );
        let before = display.clone();

        live.revoke();
        assert_eq!(
            animation.poll(t0 + ms(5_000), &mut display),
            InsertProgress::Abandoned
        );
        assert_eq!(display, before);
        assert!(animation.finish(&mut display).is_none());
        assert_eq!(display, before);
    }

    #[test]
    fn test_start_with_revoked_flag_writes_nothing() {
        let live = LiveFlag::new();
        live.revoke();
        let mut display = DisplayState::default();
        InsertAnimation::start(
            &base_heap(),
            Person::new(4, 10),
            AnimationConfig::default(),
            live,
            &mut display,
            Instant::now(),
        );
        assert_eq!(display, DisplayState::default());
    }

    #[test]
    fn test_out_of_range_swap_shows_committed_heap() {
        let t0 = Instant::now();
        let mut display = DisplayState::default();
        let mut animation = InsertAnimation::start(
            &base_heap(),
            Person::new(99, 95),
            AnimationConfig::default(),
            LiveFlag::new(),
            &mut display,
            t0,
        );
        animation.path = vec![Operation::swap(0, 9)];

        assert_eq!(animation.poll(t0 + ms(500), &mut display), InsertProgress::Advanced);
        assert_eq!(display.heap, animation.engine.snapshot());
        assert_eq!(display.swapping, Some((0, 9)));
    }
}
