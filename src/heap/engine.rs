//! Array-backed max-heap with operation tracing
//!
//! This module provides the heap engine with:
//! - O(n) bottom-up construction (untraced)
//! - Traced sift-up on insert
//! - Traced sift-down on extract-max
//!
//! # Trace Order
//!
//! Sift-up emits `compare(current, parent)` and, when the child is strictly
//! heavier, `swap(current, parent)` right after it. Sift-down emits
//! `compare(current, left)` then `compare(current, right)` for every child
//! index in range, even when the second comparison cannot change the outcome,
//! then `swap(current, largest)` if a child won. Ties never swap.

use super::person::Person;
use super::trace::Operation;
use super::{left, parent, right};

/// Result of [`MaxHeap::extract_max`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    /// The removed root, `None` if the heap was empty
    pub max: Option<Person>,
    /// Sift-down trace; empty for heaps of size 0 or 1
    pub path: Vec<Operation>,
}

/// The heap
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MaxHeap {
    items: Vec<Person>,
}

impl MaxHeap {
    /// Build a heap from a copy of `initial`
    pub fn new(initial: &[Person]) -> Self {
        Self::from_vec(initial.to_vec())
    }

    /// Build a heap, taking ownership of `items`
    pub fn from_vec(items: Vec<Person>) -> Self {
        let mut heap = MaxHeap { items };
        if heap.items.len() > 1 {
            heap.build_heap();
        }
        heap
    }

    /// Bottom-up heapify from the last internal node down to the root
    fn build_heap(&mut self) {
        let start = self.items.len() / 2;
        for i in (0..start).rev() {
            self.sift_down(i, None);
        }
    }

    /// Append a person and sift it up, returning the trace
    pub fn insert(&mut self, person: Person) -> Vec<Operation> {
        self.items.push(person);
        self.sift_up(self.items.len() - 1)
    }

    fn sift_up(&mut self, index: usize) -> Vec<Operation> {
        let mut path = Vec::new();
        let mut current = index;

        while let Some(p) = parent(current) {
            path.push(Operation::compare(current, p));

            if self.items[current].weight > self.items[p].weight {
                path.push(Operation::swap(current, p));
                self.items.swap(current, p);
                current = p;
            } else {
                break;
            }
        }

        path
    }

    /// Remove and return the heaviest person along with the sift-down trace
    pub fn extract_max(&mut self) -> Extraction {
        match self.items.len() {
            0 => Extraction {
                max: None,
                path: Vec::new(),
            },
            1 => Extraction {
                max: self.items.pop(),
                path: Vec::new(),
            },
            _ => {
                // Moves the last element into the root slot
                let max = self.items.swap_remove(0);
                let mut path = Vec::new();
                self.sift_down(0, Some(&mut path));
                Extraction {
                    max: Some(max),
                    path,
                }
            }
        }
    }

    /// Sift the element at `index` down. Comparisons and swaps are recorded
    /// into `trace` when one is given.
    fn sift_down(&mut self, index: usize, mut trace: Option<&mut Vec<Operation>>) {
        let len = self.items.len();
        let mut current = index;

        loop {
            let l = left(current);
            let r = right(current);
            let mut largest = current;

            if l < len {
                if let Some(path) = trace.as_deref_mut() {
                    path.push(Operation::compare(current, l));
                }
                if self.items[l].weight > self.items[largest].weight {
                    largest = l;
                }
            }

            if r < len {
                if let Some(path) = trace.as_deref_mut() {
                    path.push(Operation::compare(current, r));
                }
                if self.items[r].weight > self.items[largest].weight {
                    largest = r;
                }
            }

            if largest == current {
                break;
            }

            if let Some(path) = trace.as_deref_mut() {
                path.push(Operation::swap(current, largest));
            }
            self.items.swap(current, largest);
            current = largest;
        }
    }

    /// Structural copy of the current contents
    pub fn snapshot(&self) -> Vec<Person> {
        self.items.clone()
    }

    /// Borrow the current contents
    pub fn as_slice(&self) -> &[Person] {
        &self.items
    }

    /// The heaviest person without removing it
    pub fn peek(&self) -> Option<&Person> {
        self.items.first()
    }

    pub fn size(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::heap::{is_max_heap, OpKind};

    fn people(weights: &[u32]) -> Vec<Person> {
        weights
            .iter()
            .enumerate()
            .map(|(i, &w)| Person::new(i as u32 + 1, w))
            .collect()
    }

    #[test]
    fn test_build_heap_on_valid_input_is_noop() {
        let initial = people(&[80, 50, 60]);
        let heap = MaxHeap::new(&initial);
        assert_eq!(heap.snapshot(), initial);
    }

    #[test]
    fn test_build_heap_orders_input() {
        let heap = MaxHeap::new(&people(&[10, 30, 20, 70, 5, 90, 40]));
        assert!(is_max_heap(heap.as_slice()));
        assert_eq!(heap.peek().map(|p| p.weight), Some(90));
    }

    #[test]
    fn test_insert_bubbles_to_root() {
        let mut heap = MaxHeap::new(&people(&[80, 50, 60]));
        let path = heap.insert(Person::new(99, 95));

        assert_eq!(heap.as_slice()[0], Person::new(99, 95));
        assert_eq!(
            path,
            vec![
                Operation::compare(3, 1),
                Operation::swap(3, 1),
                Operation::compare(1, 0),
                Operation::swap(1, 0),
            ]
        );
        assert!(is_max_heap(heap.as_slice()));
    }

    #[test]
    fn test_insert_stops_on_equal_weight() {
        let mut heap = MaxHeap::new(&people(&[80, 50, 60]));
        let path = heap.insert(Person::new(4, 50));
        assert_eq!(path, vec![Operation::compare(3, 1)]);
        assert_eq!(heap.as_slice()[3].person_id, 4);
    }

    #[test]
    fn test_insert_into_empty_heap() {
        let mut heap = MaxHeap::default();
        let path = heap.insert(Person::new(1, 42));
        assert!(path.is_empty());
        assert_eq!(heap.size(), 1);
    }

    #[test]
    fn test_extract_from_empty() {
        let mut heap = MaxHeap::default();
        let extraction = heap.extract_max();
        assert_eq!(extraction.max, None);
        assert!(extraction.path.is_empty());
    }

    #[test]
    fn test_extract_singleton() {
        let mut heap = MaxHeap::default();
        heap.insert(Person::new(7, 70));
        let extraction = heap.extract_max();
        assert_eq!(extraction.max, Some(Person::new(7, 70)));
        assert!(extraction.path.is_empty());
        assert!(heap.is_empty());
    }

    #[test]
    fn test_extract_emits_both_comparisons() {
        // After removing 80, 60 moves to the root; both children are compared
        // before the swap with the heavier left child.
        let mut heap = MaxHeap::new(&people(&[80, 70, 50, 60]));
        let extraction = heap.extract_max();

        assert_eq!(extraction.max.map(|p| p.weight), Some(80));
        assert_eq!(
            extraction.path,
            vec![
                Operation::compare(0, 1),
                Operation::compare(0, 2),
                Operation::swap(0, 1),
            ]
        );
        assert_eq!(
            heap.as_slice().iter().map(|p| p.weight).collect::<Vec<_>>(),
            vec![70, 60, 50]
        );
    }

    #[test]
    fn test_extract_tie_prefers_current() {
        let mut heap = MaxHeap::new(&people(&[90, 50, 50, 50]));
        let extraction = heap.extract_max();
        assert!(extraction.path.iter().all(|op| op.kind == OpKind::Compare));
        assert_eq!(heap.as_slice()[0].person_id, 4);
    }

    #[test]
    fn test_extract_tie_prefers_left_child() {
        let mut heap = MaxHeap::new(&people(&[90, 60, 60, 10]));
        let extraction = heap.extract_max();
        assert_eq!(extraction.path.last(), Some(&Operation::swap(0, 1)));
    }

    #[test]
    fn test_extraction_order_is_descending() {
        let mut heap = MaxHeap::new(&people(&[10, 30, 20, 70, 5, 90, 40, 40]));
        let mut weights = Vec::new();
        while let Some(p) = heap.extract_max().max {
            weights.push(p.weight);
        }
        assert_eq!(weights, vec![90, 70, 40, 40, 30, 20, 10, 5]);
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut heap = MaxHeap::new(&people(&[80, 50, 60]));
        let snapshot = heap.snapshot();
        heap.insert(Person::new(4, 100));
        assert_eq!(snapshot.len(), 3);
        assert_eq!(snapshot[0].weight, 80);
    }
}
