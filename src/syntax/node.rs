use std::{fmt::Display, sync::Arc};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    #[error("Invalid input: {0}.")]
    InvalidInput(String),
}

/// A terminal token, optionally paired with the part-of-speech tag of the
/// pre-terminal it was lifted out of.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Leaf {
    token: Arc<str>,
    tag: Option<Arc<str>>,
}

impl Leaf {
    pub fn new(token: impl Into<Arc<str>>) -> Self { Self { token: token.into(), tag: None } }

    pub fn tagged(token: impl Into<Arc<str>>, tag: impl Into<Arc<str>>) -> Self {
        Self { token: token.into(), tag: Some(tag.into()) }
    }

    pub fn token(&self) -> &str { &self.token }
    pub fn tag(&self) -> Option<&str> { self.tag.as_deref() }
    pub fn is_tagged(&self) -> bool { self.tag.is_some() }

    /// Returns a copy carrying `tag` unless this leaf already has one.
    fn tagged_by(&self, tag: &Arc<str>) -> Self {
        match &self.tag {
            Some(_) => self.clone(),
            None => Self { token: self.token.clone(), tag: Some(tag.clone()) },
        }
    }
}

/// A node of a constituency tree.
///
/// Children are owned by their parent and there are no back references, so a
/// [Node] is always a finite, acyclic tree. An `Internal` node whose label is
/// the empty string is considered unlabeled.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Node {
    Leaf(Leaf),
    Internal { label: Arc<str>, children: Vec<Node> },
}

impl Node {
    pub fn leaf(token: impl Into<Arc<str>>) -> Self { Node::Leaf(Leaf::new(token)) }

    pub fn tagged_leaf(token: impl Into<Arc<str>>, tag: impl Into<Arc<str>>) -> Self {
        Node::Leaf(Leaf::tagged(token, tag))
    }

    pub fn internal(label: impl Into<Arc<str>>, children: Vec<Node>) -> Self {
        Node::Internal { label: label.into(), children }
    }

    /// Pre-terminal shorthand: `Node::preterminal("NNP", "Pierre")` is `(NNP Pierre)`.
    pub fn preterminal(tag: impl Into<Arc<str>>, token: impl Into<Arc<str>>) -> Self {
        Node::internal(tag, vec![Node::leaf(token)])
    }

    pub fn is_leaf(&self) -> bool { matches!(self, Node::Leaf(_)) }
    pub fn is_internal(&self) -> bool { matches!(self, Node::Internal { .. }) }

    /// Label of an `Internal` node, `None` for leaves and unlabeled nodes.
    pub fn label(&self) -> Option<&str> {
        match self {
            Node::Internal { label, .. } if !label.is_empty() => Some(label),
            _ => None,
        }
    }

    pub fn children(&self) -> &[Node] {
        match self {
            Node::Leaf(_) => &[],
            Node::Internal { children, .. } => children,
        }
    }

    pub fn child_count(&self) -> usize { self.children().len() }

    /// Length of the longest path down to a leaf, counting the leaf itself.
    ///
    /// A leaf has height 1, a pre-terminal such as `(NNP Pierre)` height 2.
    /// A childless `Internal` node also has height 1.
    pub fn height(&self) -> usize {
        match self {
            Node::Leaf(_) => 1,
            Node::Internal { children, .. } => 1 + children.iter().map(Node::height).max().unwrap_or(0),
        }
    }

    /// The frontier: every leaf below this node, left to right.
    pub fn leaves(&self) -> Vec<&Leaf> {
        let mut leaves: Vec<&Leaf> = Vec::new();
        collect_leaves(self, &mut leaves);
        leaves
    }

    pub fn tokens(&self) -> Vec<&str> { self.leaves().into_iter().map(Leaf::token).collect() }

    /// The tagged frontier.
    ///
    /// Untagged leaves take the label of their immediate parent as their tag;
    /// leaves that already carry a tag keep it.
    pub fn pos(&self) -> Vec<Leaf> { self.pos_under(None) }

    /// [Node::pos] for a node sitting below a parent labeled `parent_label`,
    /// which tags the node itself when it is a bare leaf.
    pub(crate) fn pos_under(&self, parent_label: Option<&Arc<str>>) -> Vec<Leaf> {
        let mut tagged: Vec<Leaf> = Vec::new();
        collect_pos(self, parent_label, &mut tagged);
        tagged
    }

    pub(crate) fn require_label(&self) -> Result<&Arc<str>, TreeError> {
        match self {
            Node::Internal { label, .. } if !label.is_empty() => Ok(label),
            Node::Internal { children, .. } => Err(TreeError::InvalidInput(format!(
                "unlabeled node with {} children where a labeled node is required",
                children.len()
            ))),
            Node::Leaf(leaf) => Err(TreeError::InvalidInput(format!(
                "leaf '{}' where a labeled internal node is required",
                leaf.token()
            ))),
        }
    }
}

fn collect_leaves<'a>(node: &'a Node, leaves: &mut Vec<&'a Leaf>) {
    match node {
        Node::Leaf(leaf) => leaves.push(leaf),
        Node::Internal { children, .. } => {
            for child in children {
                collect_leaves(child, leaves);
            }
        }
    }
}

fn collect_pos(node: &Node, parent_label: Option<&Arc<str>>, tagged: &mut Vec<Leaf>) {
    match node {
        Node::Leaf(leaf) => match parent_label {
            Some(label) if !label.is_empty() => tagged.push(leaf.tagged_by(label)),
            _ => tagged.push(leaf.clone()),
        },
        Node::Internal { label, children } => {
            for child in children {
                collect_pos(child, Some(label), tagged);
            }
        }
    }
}

impl From<Leaf> for Node {
    fn from(leaf: Leaf) -> Self { Node::Leaf(leaf) }
}

impl<'a> From<&'a str> for Node {
    fn from(value: &'a str) -> Self { Node::leaf(value) }
}

impl From<String> for Node {
    fn from(value: String) -> Self { Node::leaf(value) }
}

impl Display for Leaf {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.tag {
            Some(tag) => write!(f, "{}/{}", self.token, tag),
            None => write!(f, "{}", self.token),
        }
    }
}
