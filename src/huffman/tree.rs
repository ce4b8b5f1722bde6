use std::cmp::{Eq, Ord, Ordering, PartialEq, PartialOrd, Reverse};
use std::collections::BinaryHeap;
use std::fmt;

use super::{FrequencyTable, Symbol};
use crate::error::Error;
use crate::Result;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum NodeKind {
    Leaf { symbol: Symbol },
    // inner node with a single (left) child, root of a one-symbol tree
    Stem { child: usize },
    Inner { left: usize, right: usize },
}

#[derive(Clone, Copy, Debug)]
pub(super) struct Node {
    pub(super) frequency: usize,
    pub(super) index: usize,
    pub(super) kind: NodeKind,
}

/// Huffman tree stored as an arena of nodes.
///
/// Leaves occupy the first indices in order of first occurrence of their
/// symbol, merged nodes follow in creation order. Every node apart from
/// the root has exactly one parent.
pub struct HuffmanTree {
    nodes: Vec<Node>,
    root_index: usize,
}

// lower frequency first, ties resolved by creation order
impl Ord for Node {
    fn cmp(&self, other: &Self) -> Ordering {
        self.frequency
            .cmp(&other.frequency)
            .then(self.index.cmp(&other.index))
    }
}

impl PartialOrd for Node {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.frequency == other.frequency && self.index == other.index
    }
}

impl Eq for Node {}

impl HuffmanTree {
    pub fn new(frequencies: &FrequencyTable) -> Result<HuffmanTree> {
        if frequencies.is_empty() {
            return Err(Error::InvalidInput);
        }
        let mut nodes: Vec<Node> = frequencies
            .iter()
            .enumerate()
            .map(|(index, entry)| Node {
                frequency: entry.frequency,
                index,
                kind: NodeKind::Leaf {
                    symbol: entry.symbol,
                },
            })
            .collect();

        if nodes.len() == 1 {
            let leaf = nodes[0];
            let stem = Node {
                frequency: leaf.frequency,
                index: 1,
                kind: NodeKind::Stem { child: leaf.index },
            };
            nodes.push(stem);
            return Ok(HuffmanTree {
                nodes,
                root_index: stem.index,
            });
        }

        let mut heap: BinaryHeap<Reverse<Node>> = nodes.iter().copied().map(Reverse).collect();
        while let Some(Reverse(first)) = heap.pop() {
            let Some(Reverse(second)) = heap.pop() else {
                log::debug!(
                    "Huffman tree built with {} nodes over {} symbols",
                    nodes.len(),
                    frequencies.len()
                );
                return Ok(HuffmanTree {
                    nodes,
                    root_index: first.index,
                });
            };
            let node = Node {
                frequency: first.frequency + second.frequency,
                index: nodes.len(),
                kind: NodeKind::Inner {
                    left: first.index,
                    right: second.index,
                },
            };
            heap.push(Reverse(node));
            nodes.push(node);
        }
        Err(Error::InvalidInput)
    }

    pub(super) fn root(&self) -> Node {
        self.nodes[self.root_index]
    }

    pub(super) fn node(&self, index: usize) -> Node {
        self.nodes[index]
    }

    pub fn leaf_count(&self) -> usize {
        self.nodes
            .iter()
            .filter(|node| matches!(node.kind, NodeKind::Leaf { .. }))
            .count()
    }

    /// summed frequency of all symbols
    pub fn weight(&self) -> usize {
        self.root().frequency
    }

    pub fn depth_of(&self, symbol: Symbol) -> Option<usize> {
        self.leaf_depths()
            .into_iter()
            .find(|&(leaf_symbol, _, _)| leaf_symbol == symbol)
            .map(|(_, _, depth)| depth)
    }

    /// sum of frequency times depth over all leaves
    pub fn weighted_path_length(&self) -> usize {
        self.leaf_depths()
            .into_iter()
            .map(|(_, frequency, depth)| frequency * depth)
            .sum()
    }

    fn leaf_depths(&self) -> Vec<(Symbol, usize, usize)> {
        let mut leaves = Vec::with_capacity(self.nodes.len() / 2 + 1);
        let mut stack = vec![(self.root_index, 0)];
        while let Some((index, depth)) = stack.pop() {
            let node = self.nodes[index];
            match node.kind {
                NodeKind::Leaf { symbol } => leaves.push((symbol, node.frequency, depth)),
                NodeKind::Stem { child } => stack.push((child, depth + 1)),
                NodeKind::Inner { left, right } => {
                    stack.push((right, depth + 1));
                    stack.push((left, depth + 1));
                }
            }
        }
        leaves
    }

    /// Decodes by walking the tree, `false` selects the left and `true`
    /// the right child.
    pub fn decode<I: IntoIterator<Item = bool>>(&self, bits: I) -> Result<String> {
        let mut decoded = String::new();
        let mut pending_bits = String::new();
        let mut current_index = self.root_index;
        for bit in bits {
            pending_bits.push(if bit { '1' } else { '0' });
            current_index = match (self.nodes[current_index].kind, bit) {
                (NodeKind::Inner { left, .. }, false) => left,
                (NodeKind::Inner { right, .. }, true) => right,
                (NodeKind::Stem { child }, false) => child,
                (NodeKind::Stem { .. }, true) => return Err(Error::MalformedStream(pending_bits)),
                (NodeKind::Leaf { .. }, _) => unreachable!("walk restarts at the root after a leaf"),
            };
            if let NodeKind::Leaf { symbol } = self.nodes[current_index].kind {
                decoded.push(symbol);
                pending_bits.clear();
                current_index = self.root_index;
            }
        }
        if !pending_bits.is_empty() {
            return Err(Error::MalformedStream(pending_bits));
        }
        Ok(decoded)
    }

    fn fmt_subtree(&self, f: &mut fmt::Formatter<'_>, index: usize, indent: &str) -> fmt::Result {
        let node = self.nodes[index];
        match node.kind {
            NodeKind::Leaf { symbol } => writeln!(f, "{:?} (f:{})", symbol, node.frequency),
            NodeKind::Stem { child } => {
                writeln!(f, "• (f:{})", node.frequency)?;
                self.fmt_branch(f, child, indent, "└─0─ ", "     ")
            }
            NodeKind::Inner { left, right } => {
                writeln!(f, "• (f:{})", node.frequency)?;
                self.fmt_branch(f, left, indent, "├─0─ ", "│    ")?;
                self.fmt_branch(f, right, indent, "└─1─ ", "     ")
            }
        }
    }

    fn fmt_branch(
        &self,
        f: &mut fmt::Formatter<'_>,
        index: usize,
        indent: &str,
        connector: &str,
        continuation: &str,
    ) -> fmt::Result {
        write!(f, "{}{}", indent, connector)?;
        self.fmt_subtree(f, index, &format!("{}{}", indent, continuation))
    }
}

impl fmt::Display for HuffmanTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_subtree(f, self.root_index, "")
    }
}
