// src/tree.rs
//! Huffman tree construction.
//!
//! Leaves are seeded one per present symbol, then the two lightest nodes are
//! merged until a single root remains. The first node taken becomes the left
//! child. Equal weights are broken by insertion order: leaves in ascending
//! symbol order, merged nodes in the order they were created.

use std::cmp::Ordering;

use crate::frequency::FrequencyTable;
use crate::pqueue::MinHeap;

/// A node of the prefix-code tree. Children are owned by their parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Leaf {
        symbol: u8,
        weight: u64,
    },
    Internal {
        weight: u64,
        left:   Box<Node>,
        right:  Box<Node>,
    },
}

impl Node {
    /// Frequency of a leaf, or the summed weight of a subtree.
    pub fn weight(&self) -> u64 {
        match self {
            Node::Leaf { weight, .. } | Node::Internal { weight, .. } => *weight,
        }
    }
}

#[cfg(test)]
impl Node {
    fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    /// Number of leaves below (and including) this node.
    fn leaf_count(&self) -> usize {
        match self {
            Node::Leaf { .. } => 1,
            Node::Internal { left, right, .. } => left.leaf_count() + right.leaf_count(),
        }
    }

    /// Length of the longest root-to-leaf path; 0 for a lone leaf.
    fn depth(&self) -> usize {
        match self {
            Node::Leaf { .. } => 0,
            Node::Internal { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }
}

/// A node waiting in the queue, tagged with its insertion sequence.
struct Pending {
    seq:  usize,
    node: Node,
}

fn lighter_first(a: &Pending, b: &Pending) -> Ordering {
    a.node
        .weight()
        .cmp(&b.node.weight())
        .then(a.seq.cmp(&b.seq))
}

/// Build the tree for `freq`.
///
/// Returns `None` for an empty table; callers check the input length first.
/// A table with one symbol yields a lone leaf.
pub fn build(freq: &FrequencyTable) -> Option<Node> {
    let mut heap = MinHeap::with_comparator(lighter_first);
    heap.extend(freq.iter().enumerate().map(|(seq, (symbol, weight))| Pending {
        seq,
        node: Node::Leaf { symbol, weight },
    }));

    let mut seq = heap.len();
    while heap.len() > 1 {
        let (Some(first), Some(second)) = (heap.pop(), heap.pop()) else {
            break;
        };
        let weight = first.node.weight() + second.node.weight();
        heap.push(Pending {
            seq,
            node: Node::Internal {
                weight,
                left:  Box::new(first.node),
                right: Box::new(second.node),
            },
        });
        seq += 1;
    }

    heap.pop().map(|pending| pending.node)
}
