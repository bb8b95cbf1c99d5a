// Precomputed animation steps for heap sort playback

pub mod generator;

pub use generator::generate_sort_steps;

use crate::heap::{OpKind, Operation, Person};

/// Kind of an animation step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepKind {
    ExtractStart,
    ExtractEnd,
    Compare,
    Swap,
    Complete,
}

impl StepKind {
    pub fn label(self) -> &'static str {
        match self {
            StepKind::ExtractStart => "extract start",
            StepKind::ExtractEnd => "extract end",
            StepKind::Compare => "compare",
            StepKind::Swap => "swap",
            StepKind::Complete => "complete",
        }
    }
}

/// One immutable frame of the sort timeline
///
/// Created once by the generator before playback starts and never mutated
/// afterwards, so any step can be re-applied in any order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub kind: StepKind,
    pub heap: Vec<Person>,
    pub sorted: Vec<Person>,
    pub highlighted: Vec<usize>,
    pub comparing: Option<(usize, usize)>,
    pub swapping: Option<(usize, usize)>,
    pub extracting: Option<usize>,
}

impl Step {
    fn plain(kind: StepKind, heap: Vec<Person>, sorted: Vec<Person>) -> Self {
        Step {
            kind,
            heap,
            sorted,
            highlighted: Vec::new(),
            comparing: None,
            swapping: None,
            extracting: None,
        }
    }

    /// Root highlighted and marked as being extracted
    pub fn extract_start(heap: Vec<Person>, sorted: Vec<Person>) -> Self {
        Step {
            highlighted: vec![0],
            extracting: Some(0),
            ..Step::plain(StepKind::ExtractStart, heap, sorted)
        }
    }

    pub fn extract_end(heap: Vec<Person>, sorted: Vec<Person>) -> Self {
        Step::plain(StepKind::ExtractEnd, heap, sorted)
    }

    pub fn complete(sorted: Vec<Person>) -> Self {
        Step::plain(StepKind::Complete, Vec::new(), sorted)
    }

    /// Step for one traced operation, highlighting its index pair
    pub fn from_operation(op: &Operation, heap: Vec<Person>, sorted: Vec<Person>) -> Self {
        let pair = op.pair();
        let highlighted = op.indices.to_vec();
        match op.kind {
            OpKind::Compare => Step {
                highlighted,
                comparing: Some(pair),
                ..Step::plain(StepKind::Compare, heap, sorted)
            },
            OpKind::Swap => Step {
                highlighted,
                swapping: Some(pair),
                ..Step::plain(StepKind::Swap, heap, sorted)
            },
        }
    }

    pub fn is_complete(&self) -> bool {
        self.kind == StepKind::Complete
    }
}
