//! Structural details of a single heap node, for the detail pane

use super::person::Person;
use super::{left, level, parent, right};

/// Position and neighbourhood of one node in a heap snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeDetails {
    pub index: usize,
    pub person: Person,
    pub level: usize,
    pub parent: Option<Person>,
    pub left: Option<Person>,
    pub right: Option<Person>,
    pub is_root: bool,
    pub is_leaf: bool,
    /// Node weight is at least each existing child's weight
    pub heap_property_valid: bool,
    /// Size of the subtree below this node, excluding the node itself
    pub descendants: usize,
}

/// Compute details for `heap[index]`, or `None` if out of range
pub fn node_details(heap: &[Person], index: usize) -> Option<NodeDetails> {
    let person = *heap.get(index)?;
    let left_child = heap.get(left(index)).copied();
    let right_child = heap.get(right(index)).copied();

    let heap_property_valid = [left_child, right_child]
        .iter()
        .flatten()
        .all(|child| person.weight >= child.weight);

    Some(NodeDetails {
        index,
        person,
        level: level(index),
        parent: parent(index).and_then(|p| heap.get(p).copied()),
        left: left_child,
        right: right_child,
        is_root: index == 0,
        is_leaf: left_child.is_none() && right_child.is_none(),
        heap_property_valid,
        descendants: subtree_size(heap.len(), index).saturating_sub(1),
    })
}

fn subtree_size(len: usize, index: usize) -> usize {
    if index >= len {
        return 0;
    }
    1 + subtree_size(len, left(index)) + subtree_size(len, right(index))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Person> {
        [90, 70, 80, 30, 60, 20]
            .iter()
            .enumerate()
            .map(|(i, &w)| Person::new(i as u32 + 1, w))
            .collect()
    }

    #[test]
    fn test_root_details() {
        let details = node_details(&sample(), 0).unwrap();
        assert!(details.is_root);
        assert!(!details.is_leaf);
        assert_eq!(details.level, 0);
        assert_eq!(details.parent, None);
        assert_eq!(details.left.map(|p| p.weight), Some(70));
        assert_eq!(details.right.map(|p| p.weight), Some(80));
        assert_eq!(details.descendants, 5);
        assert!(details.heap_property_valid);
    }

    #[test]
    fn test_leaf_details() {
        let details = node_details(&sample(), 5).unwrap();
        assert!(details.is_leaf);
        assert_eq!(details.level, 2);
        assert_eq!(details.parent.map(|p| p.weight), Some(80));
        assert_eq!(details.descendants, 0);
    }

    #[test]
    fn test_invalid_node_detected() {
        let mut heap = sample();
        heap[1].weight = 10;
        let details = node_details(&heap, 1).unwrap();
        assert!(!details.heap_property_valid);
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(node_details(&sample(), 6), None);
    }
}
