use super::node::{Node, TreeError};
use std::cmp::Ordering;
use std::sync::Arc;
use tracing::{instrument, trace};

pub const DEFAULT_COLLAPSE_HEIGHT: usize = 3;

/// Flattens deep constituency trees into trees at most three levels tall.
///
/// Every subtree of exactly `collapse_height` becomes a single labeled group
/// holding its tagged frontier. Shallower subtrees dissolve into tagged leaves
/// and taller ones are recursed through, their own labels dropped. The
/// structure lost this way is not recoverable from the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Flattener {
    collapse_height: usize,
}

impl Default for Flattener {
    fn default() -> Self { Self { collapse_height: DEFAULT_COLLAPSE_HEIGHT } }
}

impl Flattener {
    pub fn new(collapse_height: usize) -> Result<Self, TreeError> {
        if collapse_height < 2 {
            return Err(TreeError::InvalidInput(format!(
                "collapse height must be at least 2, got {collapse_height}"
            )));
        }
        Ok(Self { collapse_height })
    }

    pub fn collapse_height(&self) -> usize { self.collapse_height }

    /// Returns a new tree with `root`'s label and its children flattened.
    ///
    /// Fails with [TreeError::InvalidInput] if `root` is a leaf or unlabeled.
    #[instrument(level = "trace", skip_all, fields(root = root.label()))]
    pub fn flatten(&self, root: &Node) -> Result<Node, TreeError> {
        let label = root.require_label()?;
        let children = self.flatten_children(root.children())?;
        trace!(children = children.len(), "flattened");
        Ok(Node::Internal { label: label.clone(), children })
    }

    pub fn flatten_children(&self, nodes: &[Node]) -> Result<Vec<Node>, TreeError> {
        let mut flattened: Vec<Node> = Vec::new();
        self._flatten_children(nodes, None, &mut flattened)?;
        Ok(flattened)
    }

    /// Bare leaves met while recursing through a node are tagged with that
    /// node's label, the same tag [Node::pos] gives them in the input tree.
    fn _flatten_children(
        &self, nodes: &[Node], parent_label: Option<&Arc<str>>, flattened: &mut Vec<Node>,
    ) -> Result<(), TreeError> {
        for node in nodes {
            match node.height().cmp(&self.collapse_height) {
                Ordering::Less => flattened.extend(node.pos_under(parent_label).into_iter().map(Node::Leaf)),
                Ordering::Equal => {
                    let label = node.require_label()?;
                    let leaves: Vec<Node> = node.pos().into_iter().map(Node::Leaf).collect();
                    flattened.push(Node::Internal { label: label.clone(), children: leaves });
                }
                Ordering::Greater => {
                    // Only internal nodes can be taller than a leaf.
                    if let Node::Internal { label, children } = node {
                        self._flatten_children(children, Some(label), flattened)?;
                    }
                }
            }
        }
        Ok(())
    }
}

/// [Flattener::flatten] with the default collapse height of 3.
pub fn flatten(root: &Node) -> Result<Node, TreeError> { Flattener::default().flatten(root) }

/// [Flattener::flatten_children] with the default collapse height of 3.
pub fn flatten_children(nodes: &[Node]) -> Result<Vec<Node>, TreeError> {
    Flattener::default().flatten_children(nodes)
}
