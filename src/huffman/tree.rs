use std::cmp::{Eq, Ord, Ordering, PartialEq, PartialOrd, Reverse};
use std::collections::BinaryHeap;
use std::fmt;

use super::bits::BitString;
use super::frequency::FrequencyTable;
use super::Symbol;
use crate::error::Error;
use crate::Result;

#[derive(Clone, Copy, Debug)]
enum NodeKind {
    Leaf { symbol: usize },
    Inner { left: usize, right: usize },
}

#[derive(Clone, Copy, Debug)]
struct Node {
    frequency: usize,
    index: usize,
    kind: NodeKind,
}

/// Huffman tree stored as an arena of nodes.
///
/// Leaves occupy the first indices in order of first appearance of their symbol, inner
/// nodes follow in creation order. The index doubles as the tie-breaking sequence number.
#[derive(Clone, Debug)]
pub struct HuffmanTree<S> {
    symbols: Vec<S>,
    nodes: Vec<Node>,
    root_index: usize,
}

// Equal weights are resolved first-in first-out.
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

impl<S: Symbol> HuffmanTree<S> {
    pub fn new(frequencies: &FrequencyTable<S>) -> Result<HuffmanTree<S>> {
        let mut heap = BinaryHeap::with_capacity(frequencies.len());
        let mut nodes: Vec<Node> = Vec::with_capacity(2 * frequencies.len());
        let mut symbols = Vec::with_capacity(frequencies.len());
        // create the initial nodeset
        for entry in frequencies.iter() {
            let node = Node {
                frequency: entry.frequency,
                index: nodes.len(),
                kind: NodeKind::Leaf {
                    symbol: symbols.len(),
                },
            };
            symbols.push(entry.symbol.clone());
            heap.push(Reverse(node));
            nodes.push(node);
        }
        // merge nodes until one is left
        while heap.len() > 1 {
            let (Some(Reverse(left)), Some(Reverse(right))) = (heap.pop(), heap.pop()) else {
                break;
            };
            let node = Node {
                frequency: left.frequency + right.frequency,
                index: nodes.len(),
                kind: NodeKind::Inner {
                    left: left.index,
                    right: right.index,
                },
            };
            heap.push(Reverse(node));
            nodes.push(node);
        }
        let root_index = heap.pop().ok_or(Error::EmptyInput)?.0.index;
        Ok(HuffmanTree {
            symbols,
            nodes,
            root_index,
        })
    }

    pub fn from_symbols(symbols: &[S]) -> Result<HuffmanTree<S>> {
        Self::new(&FrequencyTable::from_symbols(symbols)?)
    }
}

impl<S> HuffmanTree<S> {
    pub fn leaf_count(&self) -> usize {
        self.symbols.len()
    }

    pub fn inner_count(&self) -> usize {
        self.nodes.len() - self.symbols.len()
    }

    /// Weight of the root, the length of the sequence the tree was built from.
    pub fn weight(&self) -> usize {
        self.nodes[self.root_index].frequency
    }

    /// The symbol at the root when the tree degenerated to a single leaf.
    pub fn root_symbol(&self) -> Option<&S> {
        match self.nodes[self.root_index].kind {
            NodeKind::Leaf { symbol } => Some(&self.symbols[symbol]),
            NodeKind::Inner { .. } => None,
        }
    }

    pub fn is_single_leaf(&self) -> bool {
        self.root_symbol().is_some()
    }

    /// Number of edges on the longest path from the root to a leaf.
    pub fn depth(&self) -> usize {
        self.leaf_paths()
            .map(|(_, path)| path.len())
            .max()
            .unwrap_or_default()
    }

    /// Depth-first walk over all leaves, left before right. Descending left appends a 0
    /// to the path, descending right a 1. A root leaf is reported with an empty path.
    pub fn leaf_paths(&self) -> LeafPaths<'_, S> {
        LeafPaths {
            tree: self,
            stack: vec![(self.root_index, BitString::new())],
        }
    }
}

pub struct LeafPaths<'a, S> {
    tree: &'a HuffmanTree<S>,
    stack: Vec<(usize, BitString)>,
}

impl<'a, S> Iterator for LeafPaths<'a, S> {
    type Item = (&'a S, BitString);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((index, path)) = self.stack.pop() {
            match self.tree.nodes[index].kind {
                NodeKind::Leaf { symbol } => return Some((&self.tree.symbols[symbol], path)),
                NodeKind::Inner { left, right } => {
                    let mut right_path = path.clone();
                    right_path.push(true);
                    let mut left_path = path;
                    left_path.push(false);
                    self.stack.push((right, right_path));
                    self.stack.push((left, left_path));
                }
            }
        }
        None
    }
}

const BOX_DRAWINGS_DOUBLE_HORIZONTAL: &str = "═";
const SPACE: &str = " ";

fn label_center(line: &str) -> usize {
    let offset = line.chars().position(|c| c != ' ').unwrap_or(0);
    (offset * 2 + line.trim().chars().count()) / 2
}

// Node & Tree visualization
impl Node {
    fn get_string<S: fmt::Debug>(&self, tree: &HuffmanTree<S>) -> Vec<String> {
        match self.kind {
            NodeKind::Leaf { symbol } => {
                vec![format!("({:?}:{})", tree.symbols[symbol], self.frequency)]
            }
            NodeKind::Inner { left, right } => {
                let left_box = tree.nodes[left].get_string(tree);
                let right_box = tree.nodes[right].get_string(tree);
                let left_width = left_box[0].chars().count();
                let right_width = right_box[0].chars().count();
                let mut result: Vec<String> = Vec::new();

                result.push(format!(
                    "{}•{}",
                    SPACE.repeat(left_width),
                    SPACE.repeat(right_width)
                ));
                result.push(format!(
                    "{}║{}",
                    SPACE.repeat(left_width),
                    SPACE.repeat(right_width)
                ));

                let left_pos = label_center(&left_box[0]);
                let right_pos = label_center(&right_box[0]);
                result.push(format!(
                    "{}╔{}╩{}╗{}",
                    SPACE.repeat(left_pos),
                    BOX_DRAWINGS_DOUBLE_HORIZONTAL.repeat(left_width - left_pos - 1),
                    BOX_DRAWINGS_DOUBLE_HORIZONTAL.repeat(right_pos),
                    SPACE.repeat(right_width - right_pos - 1)
                ));

                for i in 0..std::cmp::max(left_box.len(), right_box.len()) {
                    let left_str = left_box
                        .get(i)
                        .cloned()
                        .unwrap_or_else(|| SPACE.repeat(left_width));
                    let right_str = right_box
                        .get(i)
                        .cloned()
                        .unwrap_or_else(|| SPACE.repeat(right_width));
                    result.push(format!("{} {}", left_str, right_str));
                }
                result
            }
        }
    }
}

impl<S: fmt::Debug> fmt::Display for HuffmanTree<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let strs = self.nodes[self.root_index].get_string(self);
        for s in strs.iter() {
            writeln!(f, "{}", s.trim_end())?;
        }
        Ok(())
    }
}
