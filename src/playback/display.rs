use crate::heap::Person;
use crate::snapshot::Step;
use rustc_hash::FxHashSet;

/// What the display collaborators render
///
/// Written by the playback controller (from precomputed steps) or by the
/// live insert animation. Renderers only read it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayState {
    pub heap: Vec<Person>,
    pub sorted: Vec<Person>,
    pub highlighted: FxHashSet<usize>,
    pub comparing: Option<(usize, usize)>,
    pub swapping: Option<(usize, usize)>,
    pub extracting: Option<usize>,
}

impl DisplayState {
    /// Plain view of a heap with no marks
    pub fn from_heap(heap: Vec<Person>) -> Self {
        DisplayState {
            heap,
            ..Default::default()
        }
    }

    /// Replace everything with the recorded contents of `step`
    pub fn apply(&mut self, step: &Step) {
        self.heap.clone_from(&step.heap);
        self.sorted.clone_from(&step.sorted);
        self.highlighted = step.highlighted.iter().copied().collect();
        self.comparing = step.comparing;
        self.swapping = step.swapping;
        self.extracting = step.extracting;
    }

    /// Drop highlight, compare, swap and extract marks
    pub fn clear_marks(&mut self) {
        self.highlighted.clear();
        self.comparing = None;
        self.swapping = None;
        self.extracting = None;
    }

    pub fn is_highlighted(&self, index: usize) -> bool {
        self.highlighted.contains(&index)
    }

    pub fn is_comparing(&self, index: usize) -> bool {
        self.comparing.is_some_and(|(a, b)| a == index || b == index)
    }

    pub fn is_swapping(&self, index: usize) -> bool {
        self.swapping.is_some_and(|(a, b)| a == index || b == index)
    }

    pub fn is_extracting(&self, index: usize) -> bool {
        self.extracting == Some(index)
    }
}
