// src/pqueue.rs
//! Binary min-heap ordered by a caller-supplied comparator.
//!
//! The element type carries no ordering of its own; whoever builds the heap
//! decides what "smallest" means.

use std::cmp::Ordering;
use std::fmt;

/// A min-heap that pops the element the comparator ranks lowest.
///
/// Uses 0-indexed storage with parent = (i-1)/2, children = 2i+1, 2i+2.
pub struct MinHeap<T, F> {
    nodes: Vec<T>,
    cmp:   F,
}

impl<T, F> MinHeap<T, F>
where
    F: Fn(&T, &T) -> Ordering,
{
    /// Create an empty heap ordered by `cmp`.
    pub fn with_comparator(cmp: F) -> Self {
        MinHeap { nodes: Vec::new(), cmp }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn push(&mut self, item: T) {
        self.nodes.push(item);
        self.sift_up(self.nodes.len() - 1);
    }

    /// Remove and return the minimum element.
    pub fn pop(&mut self) -> Option<T> {
        if self.nodes.is_empty() {
            return None;
        }
        let last = self.nodes.len() - 1;
        self.nodes.swap(0, last);
        let result = self.nodes.pop();
        if !self.nodes.is_empty() {
            self.sift_down(0);
        }
        result
    }

    fn less(&self, a: usize, b: usize) -> bool {
        (self.cmp)(&self.nodes[a], &self.nodes[b]) == Ordering::Less
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.less(index, parent) {
                self.nodes.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let len = self.nodes.len();
        loop {
            let left  = 2 * index + 1;
            let right = 2 * index + 2;
            let mut smallest = index;

            if left < len && self.less(left, smallest) {
                smallest = left;
            }
            if right < len && self.less(right, smallest) {
                smallest = right;
            }
            if smallest == index {
                break;
            }

            self.nodes.swap(index, smallest);
            index = smallest;
        }
    }
}

#[cfg(test)]
impl<T, F> MinHeap<T, F> {
    /// The current minimum, if any.
    fn peek(&self) -> Option<&T> {
        self.nodes.first()
    }
}

impl<T, F> Extend<T> for MinHeap<T, F>
where
    F: Fn(&T, &T) -> Ordering,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<T: fmt::Debug, F> fmt::Debug for MinHeap<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MinHeap").field("nodes", &self.nodes).finish()
    }
}
