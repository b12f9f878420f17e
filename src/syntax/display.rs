use super::node::Node;
use std::fmt::Display;

pub const DEFAULT_MARGIN: usize = 70;

impl Node {
    /// Single-line bracketed form, e.g. `(NP Pierre/NNP Vinken/NNP)`.
    pub fn to_bracketed(&self) -> String {
        let mut s = String::new();
        write_flat(self, &mut s);
        s
    }

    /// Bracketed form wrapped to `margin` columns.
    ///
    /// A subtree is written on one line when it fits after the current
    /// indentation, otherwise its children go one per line, indented by two
    /// more spaces than the parent.
    pub fn pformat(&self, margin: usize) -> String { pformat_indented(self, margin, 0) }
}

fn write_flat(node: &Node, s: &mut String) {
    match node {
        Node::Leaf(leaf) => s.push_str(&leaf.to_string()),
        Node::Internal { label, children } => {
            s.push('(');
            s.push_str(label);
            for child in children {
                s.push(' ');
                write_flat(child, s);
            }
            s.push(')');
        }
    }
}

fn pformat_indented(node: &Node, margin: usize, indent: usize) -> String {
    let flat = node.to_bracketed();
    if flat.len() + indent < margin {
        return flat;
    }

    match node {
        Node::Leaf(leaf) => leaf.to_string(),
        Node::Internal { label, children } => {
            let mut s = format!("({label}");
            for child in children {
                s.push('\n');
                s.push_str(&" ".repeat(indent + 2));
                s.push_str(&pformat_indented(child, margin, indent + 2));
            }
            s.push(')');
            s
        }
    }
}

impl Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.pformat(DEFAULT_MARGIN))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pierre_vinken() -> Node {
        Node::internal("NP", vec![Node::preterminal("NNP", "Pierre"), Node::preterminal("NNP", "Vinken")])
    }

    #[test]
    fn test_flat_form() {
        assert_eq!(pierre_vinken().to_bracketed(), "(NP (NNP Pierre) (NNP Vinken))");
        assert_eq!(Node::tagged_leaf("old", "JJ").to_bracketed(), "old/JJ");
        assert_eq!(Node::internal("X", Vec::new()).to_bracketed(), "(X)");
    }

    #[test]
    fn test_short_tree_stays_on_one_line() {
        assert_eq!(pierre_vinken().to_string(), "(NP (NNP Pierre) (NNP Vinken))");
    }

    #[test]
    fn test_wrapping() {
        let wrapped = pierre_vinken().pformat(20);
        assert_eq!(wrapped, "(NP\n  (NNP Pierre)\n  (NNP Vinken))");
    }
}
