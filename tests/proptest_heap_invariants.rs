//! Property-based invariant tests for the heap engine and playback.
//!
//! 1. The max-heap property holds after every insert and after construction
//! 2. Repeated extraction yields non-increasing weights, one per element
//! 3. Every insert swap is immediately preceded by a compare on the same pair
//! 4. Sort steps contain one extract_start/extract_end pair per element and
//!    end with exactly one complete step; every extract_end, compare and swap
//!    step carries the working copy as it stands after that extraction
//! 5. The playback cursor stays in range under arbitrary transport sequences,
//!    and stepping back then forward restores the displayed step

use heapviz::config::{people_from_weights, AnimationConfig, MAX_WEIGHT, MIN_WEIGHT};
use heapviz::heap::{is_max_heap, MaxHeap, OpKind, Person};
use heapviz::playback::PlaybackController;
use heapviz::snapshot::{generate_sort_steps, StepKind};
use proptest::prelude::*;
use std::time::{Duration, Instant};

// ── Strategies ──────────────────────────────────────────────────────────

fn weights_strategy() -> impl Strategy<Value = Vec<u32>> {
    prop::collection::vec(MIN_WEIGHT..=MAX_WEIGHT, 0..40)
}

/// Transport actions applied to a playback controller
#[derive(Debug, Clone)]
enum Action {
    PlayPause,
    StepForward,
    StepBackward,
    SetSpeed(f64),
    Wait(u64),
}

fn action_strategy() -> impl Strategy<Value = Action> {
    prop_oneof![
        Just(Action::PlayPause),
        Just(Action::StepForward),
        Just(Action::StepBackward),
        (0.0f64..5.0).prop_map(Action::SetSpeed),
        (0u64..2_000).prop_map(Action::Wait),
    ]
}

// ── Heap engine ─────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn insert_preserves_heap_property(weights in weights_strategy()) {
        let mut heap = MaxHeap::default();
        for person in people_from_weights(&weights) {
            heap.insert(person);
            prop_assert!(is_max_heap(heap.as_slice()));
        }
        prop_assert_eq!(heap.size(), weights.len());
    }

    #[test]
    fn construction_produces_heap(weights in weights_strategy()) {
        let heap = MaxHeap::new(&people_from_weights(&weights));
        prop_assert!(is_max_heap(heap.as_slice()));
        prop_assert_eq!(heap.size(), weights.len());
    }

    #[test]
    fn extraction_is_non_increasing(weights in weights_strategy()) {
        let mut heap = MaxHeap::new(&people_from_weights(&weights));
        let mut extracted: Vec<Person> = Vec::new();
        while let Some(person) = heap.extract_max().max {
            prop_assert!(is_max_heap(heap.as_slice()));
            extracted.push(person);
        }

        prop_assert_eq!(extracted.len(), weights.len());
        prop_assert!(extracted.windows(2).all(|w| w[0].weight >= w[1].weight));
    }

    #[test]
    fn insert_swaps_follow_matching_compare(
        initial in weights_strategy(),
        weight in MIN_WEIGHT..=MAX_WEIGHT,
    ) {
        let mut heap = MaxHeap::new(&people_from_weights(&initial));
        let path = heap.insert(Person::new(10_000, weight));

        for (i, op) in path.iter().enumerate() {
            if op.kind == OpKind::Swap {
                prop_assert!(i > 0);
                prop_assert_eq!(path[i - 1].kind, OpKind::Compare);
                prop_assert_eq!(path[i - 1].indices, op.indices);
            }
        }
    }

    #[test]
    fn sort_steps_have_one_pair_per_element(weights in weights_strategy()) {
        let steps = generate_sort_steps(MaxHeap::new(&people_from_weights(&weights)));
        let count = |kind: StepKind| steps.iter().filter(|s| s.kind == kind).count();

        prop_assert_eq!(count(StepKind::ExtractStart), weights.len());
        prop_assert_eq!(count(StepKind::ExtractEnd), weights.len());
        prop_assert_eq!(count(StepKind::Complete), 1);
        prop_assert_eq!(steps.last().map(|s| s.kind), Some(StepKind::Complete));
    }

    #[test]
    fn sort_steps_capture_working_copy(weights in weights_strategy()) {
        let mut working = MaxHeap::new(&people_from_weights(&weights));
        let steps = generate_sort_steps(working.clone());

        let mut i = 0;
        while !working.is_empty() {
            prop_assert_eq!(steps[i].kind, StepKind::ExtractStart);
            prop_assert_eq!(&steps[i].heap, &working.snapshot());

            let extraction = working.extract_max();
            let after = working.snapshot();
            for step in &steps[i + 1..i + 2 + extraction.path.len()] {
                prop_assert!(matches!(
                    step.kind,
                    StepKind::ExtractEnd | StepKind::Compare | StepKind::Swap
                ));
                prop_assert_eq!(&step.heap, &after);
            }
            i += 2 + extraction.path.len();
        }
        prop_assert_eq!(steps.len(), i + 1);
    }
}

// ── Playback ────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn cursor_stays_in_range(
        weights in prop::collection::vec(MIN_WEIGHT..=MAX_WEIGHT, 1..12),
        actions in prop::collection::vec(action_strategy(), 0..60),
    ) {
        let steps = generate_sort_steps(MaxHeap::new(&people_from_weights(&weights)));
        let total = steps.len();
        let mut now = Instant::now();
        let mut controller = PlaybackController::new(AnimationConfig::default(), 1.0);
        controller.start(steps.clone(), now);

        for action in actions {
            match action {
                Action::PlayPause => {
                    controller.play_pause(now);
                }
                Action::StepForward => {
                    controller.step_forward();
                }
                Action::StepBackward => {
                    controller.step_backward();
                }
                Action::SetSpeed(speed) => {
                    let applied = controller.set_speed(speed);
                    prop_assert!((0.25..=3.0).contains(&applied));
                }
                Action::Wait(ms) => {
                    now += Duration::from_millis(ms);
                    controller.poll(now);
                }
            }

            let cursor = controller.cursor();
            prop_assert!(cursor.is_some_and(|c| c < total));
            let c = cursor.unwrap_or(0);
            prop_assert_eq!(&controller.display().heap, &steps[c].heap);
            prop_assert_eq!(&controller.display().sorted, &steps[c].sorted);
        }
    }

    #[test]
    fn step_back_then_forward_round_trips(
        weights in prop::collection::vec(MIN_WEIGHT..=MAX_WEIGHT, 1..12),
        forward in 1usize..40,
    ) {
        let steps = generate_sort_steps(MaxHeap::new(&people_from_weights(&weights)));
        let mut controller = PlaybackController::new(AnimationConfig::default(), 1.0);
        controller.start(steps, Instant::now());

        for _ in 0..forward {
            controller.step_forward();
        }
        let before = controller.display().clone();
        let cursor = controller.cursor();

        if controller.step_backward() {
            prop_assert!(controller.step_forward());
            prop_assert_eq!(controller.display(), &before);
            prop_assert_eq!(controller.cursor(), cursor);
        }
    }
}
