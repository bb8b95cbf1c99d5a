//! Heap-sort step generation
//!
//! The generator takes an owned copy of the heap and runs the whole sort up
//! front, so the live engine shown on screen is never touched and playback
//! never re-runs the algorithm.
//!
//! For each extraction the timeline is:
//!
//! ```text
//! extract_start   root highlighted, heap before removal
//! extract_end     working copy right after extract_max returned
//! compare / swap  one step per traced operation, highlighting its pair
//! ```
//!
//! Every step is captured from the working copy at the moment it is emitted.
//! The trace runs inside `extract_max`, so `extract_end` and the compare and
//! swap steps after it all carry the already sifted heap; only the highlighted
//! indices move. A single `complete` step ends the sequence.

use super::Step;
use crate::heap::MaxHeap;

/// Simulate a full heap sort and return every animation step
pub fn generate_sort_steps(mut working: MaxHeap) -> Vec<Step> {
    let mut steps = Vec::new();
    let mut sorted = Vec::with_capacity(working.size());

    while !working.is_empty() {
        steps.push(Step::extract_start(working.snapshot(), sorted.clone()));

        let extraction = working.extract_max();
        if let Some(max) = extraction.max {
            sorted.push(max);
        }

        let current = working.snapshot();
        steps.push(Step::extract_end(current.clone(), sorted.clone()));
        for op in &extraction.path {
            steps.push(Step::from_operation(op, current.clone(), sorted.clone()));
        }
    }

    steps.push(Step::complete(sorted));
    tracing::debug!(steps = steps.len(), "generated heap sort steps");
    steps
}
