//! Operation trace emitted by mutating heap calls

use super::person::Person;

/// Kind of a traced heap operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpKind {
    Compare,
    Swap,
}

/// One compare or swap between two heap-array positions.
///
/// A trace is purely descriptive: replaying it against a copy of the heap
/// ([`Operation::apply`]) reproduces the engine's moves without reading the
/// engine's own array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Operation {
    pub kind: OpKind,
    pub indices: [usize; 2],
}

impl Operation {
    pub fn compare(i: usize, j: usize) -> Self {
        Operation {
            kind: OpKind::Compare,
            indices: [i, j],
        }
    }

    pub fn swap(i: usize, j: usize) -> Self {
        Operation {
            kind: OpKind::Swap,
            indices: [i, j],
        }
    }

    pub fn is_swap(&self) -> bool {
        self.kind == OpKind::Swap
    }

    /// The index pair as a tuple
    pub fn pair(&self) -> (usize, usize) {
        (self.indices[0], self.indices[1])
    }

    /// Apply this operation to a heap copy. Compares are no-ops.
    ///
    /// Returns `false` (leaving the heap untouched) if a swap index is out
    /// of range for `heap`.
    pub fn apply(&self, heap: &mut [Person]) -> bool {
        let [i, j] = self.indices;
        if i >= heap.len() || j >= heap.len() {
            return false;
        }
        if self.is_swap() {
            heap.swap(i, j);
        }
        true
    }
}
