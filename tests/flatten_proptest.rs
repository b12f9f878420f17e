//! Property-based tests for tree flattening
//!
//! Random labeled trees are flattened and checked for bounded height, an
//! unchanged frontier and a preserved root label.

use proptest::prelude::*;
use treeflat::{Node, flatten, parse_bracketed, write_bracketed};

/// Generate constituent labels such as `NP` or `VBZ`
fn label_strategy() -> impl Strategy<Value = String> { "[A-Z]{1,3}(-[A-Z]{1,3})?" }

/// Generate terminal tokens
fn token_strategy() -> impl Strategy<Value = String> { "[a-z0-9.,]{1,6}" }

/// Generate a subtree of bounded depth
fn subtree_strategy() -> impl Strategy<Value = Node> {
    let leaf = token_strategy().prop_map(Node::leaf);
    leaf.prop_recursive(7, 96, 4, |inner| {
        (label_strategy(), prop::collection::vec(inner, 0..4)).prop_map(|(label, children)| Node::internal(label, children))
    })
}

/// Generate a labeled root
fn tree_strategy() -> impl Strategy<Value = Node> {
    (label_strategy(), prop::collection::vec(subtree_strategy(), 0..5))
        .prop_map(|(label, children)| Node::internal(label, children))
}

proptest! {
    #[test]
    fn test_flattened_height_is_bounded(tree in tree_strategy()) {
        let flat = flatten(&tree).unwrap();
        prop_assert!(flat.height() <= 3, "height {} for {}", flat.height(), flat.to_bracketed());
    }

    #[test]
    fn test_frontier_is_preserved(tree in tree_strategy()) {
        let flat = flatten(&tree).unwrap();
        prop_assert_eq!(flat.tokens(), tree.tokens());
        prop_assert_eq!(flat.pos(), tree.pos());
    }

    #[test]
    fn test_root_label_is_preserved(tree in tree_strategy()) {
        let flat = flatten(&tree).unwrap();
        prop_assert_eq!(flat.label(), tree.label());
    }

    #[test]
    fn test_leaf_only_tree_is_unchanged(
        label in label_strategy(),
        tokens in prop::collection::vec(token_strategy(), 0..8),
    ) {
        let tree = Node::internal(label, tokens.into_iter().map(Node::leaf).collect::<Vec<Node>>());
        prop_assert_eq!(flatten(&tree).unwrap(), tree);
    }

    #[test]
    fn test_written_trees_parse_back(tree in tree_strategy()) {
        let written = write_bracketed(std::slice::from_ref(&tree));
        let parsed = parse_bracketed(&written).unwrap();
        prop_assert_eq!(parsed, vec![tree]);
    }
}
