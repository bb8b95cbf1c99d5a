//! Instrumented max-heap
//!
//! This module provides the heap engine that every other component reads from:
//! - [`person`]: the [`Person`] record stored in the heap, ordered by weight
//! - [`trace`]: [`Operation`] records emitted while the heap mutates itself
//! - [`engine`]: the array-backed [`MaxHeap`] with traced insert/extract
//! - [`details`]: per-node structural details for the detail pane
//!
//! # Index Arithmetic
//!
//! The heap is a complete binary tree stored in a flat array:
//! ```text
//! parent(i) = (i - 1) / 2
//! left(i)   = 2i + 1
//! right(i)  = 2i + 2
//! ```
//!
//! Every read handed out for display or simulation is a structural copy
//! ([`MaxHeap::snapshot`]), since the engine keeps mutating its array in place.

pub mod details;
pub mod engine;
pub mod person;
pub mod trace;

pub use details::{node_details, NodeDetails};
pub use engine::{Extraction, MaxHeap};
pub use person::Person;
pub use trace::{OpKind, Operation};

/// Parent index, or `None` for the root
pub fn parent(index: usize) -> Option<usize> {
    if index == 0 {
        None
    } else {
        Some((index - 1) / 2)
    }
}

/// Left child index (may be out of range)
pub fn left(index: usize) -> usize {
    2 * index + 1
}

/// Right child index (may be out of range)
pub fn right(index: usize) -> usize {
    2 * index + 2
}

/// Depth of an index in the tree (root is level 0)
pub fn level(index: usize) -> usize {
    (usize::BITS - (index + 1).leading_zeros() - 1) as usize
}

/// Check the max-heap property over an array-encoded tree
pub fn is_max_heap(heap: &[Person]) -> bool {
    (1..heap.len()).all(|i| match parent(i) {
        Some(p) => heap[p].weight >= heap[i].weight,
        None => true,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_arithmetic() {
        assert_eq!(parent(0), None);
        assert_eq!(parent(1), Some(0));
        assert_eq!(parent(2), Some(0));
        assert_eq!(parent(5), Some(2));
        assert_eq!(left(0), 1);
        assert_eq!(right(0), 2);
        assert_eq!(left(3), 7);
        assert_eq!(right(3), 8);
    }

    #[test]
    fn test_level() {
        assert_eq!(level(0), 0);
        assert_eq!(level(1), 1);
        assert_eq!(level(2), 1);
        assert_eq!(level(3), 2);
        assert_eq!(level(6), 2);
        assert_eq!(level(7), 3);
        assert_eq!(level(14), 3);
        assert_eq!(level(15), 4);
    }

    #[test]
    fn test_is_max_heap() {
        let valid = [Person::new(1, 80), Person::new(2, 50), Person::new(3, 60)];
        let invalid = [Person::new(1, 50), Person::new(2, 80), Person::new(3, 60)];
        assert!(is_max_heap(&valid));
        assert!(!is_max_heap(&invalid));
        assert!(is_max_heap(&[]));
    }
}
