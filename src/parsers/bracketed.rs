use crate::TreeParseError;

use super::super::syntax::node::Node;

use std::sync::Arc;
use tracing::debug;

/// Lexical units of the bracketed treebank format, each with its byte offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token<'a> {
    Open(usize),
    Close(usize),
    Word(&'a str, usize),
}

/// Checks if a character ends a label or a token.
fn is_delimiter(character: char) -> bool { character.is_whitespace() || matches!(character, '(' | ')') }

/// Splits bracketed text into tokens.
///
/// A `#` met outside of any tree starts a comment that runs to the end of the
/// line.
fn tokenize(s: &str) -> Vec<Token<'_>> {
    let mut tokens: Vec<Token> = Vec::new();
    let mut depth: usize = 0;
    let mut char_iterator = s.char_indices().peekable();

    while let Some((position, character)) = char_iterator.next() {
        match character {
            '(' => {
                depth += 1;
                tokens.push(Token::Open(position));
            }
            ')' => {
                depth = depth.saturating_sub(1);
                tokens.push(Token::Close(position));
            }
            '#' if depth == 0 => {
                while let Some((_, c)) = char_iterator.peek() {
                    if *c == '\n' {
                        break;
                    }
                    _ = char_iterator.next();
                }
            }
            c if c.is_whitespace() => {}
            _ => {
                let mut end = position + character.len_utf8();
                while let Some((next_position, c)) = char_iterator.peek() {
                    if is_delimiter(*c) {
                        break;
                    }
                    end = next_position + c.len_utf8();
                    _ = char_iterator.next();
                }
                tokens.push(Token::Word(&s[position..end], position));
            }
        }
    }

    tokens
}

/// A node whose closing parenthesis has not been seen yet.
#[derive(Debug)]
struct OpenNode {
    label: Option<Arc<str>>,
    children: Vec<Node>,
    offset: usize,
}

impl OpenNode {
    fn new(offset: usize) -> Self { Self { label: None, children: Vec::new(), offset } }

    /// The first word after an opening parenthesis is the label.
    fn expects_label(&self) -> bool { self.label.is_none() && self.children.is_empty() }

    fn close(self) -> Node { Node::Internal { label: self.label.unwrap_or_else(|| "".into()), children: self.children } }
}

/// Removes the unlabeled wrapper that `.mrg` files put around every sentence.
fn strip_empty_wrapper(node: Node) -> Node {
    match node {
        Node::Internal { label, mut children }
            if label.is_empty() && children.len() == 1 && children[0].is_internal() =>
        {
            children.remove(0)
        }
        node => node,
    }
}

/// Converts multiple trees to bracketed strings, one tree per line.
///
/// Returns an empty string if `trees` is empty.
pub fn write_bracketed(trees: &[Node]) -> String {
    trees
        .iter()
        .map(Node::to_bracketed)
        .reduce(|mut a, b| {
            a.push('\n');
            a.push_str(&b);
            a
        })
        .unwrap_or_default()
}

/// Parses bracketed treebank text into trees.
///
/// **Input format examples:**
/// - Single tree: `"(NP (NNP Pierre) (NNP Vinken))"`
/// - WSJ style, wrapped in an unlabeled node: `"( (S (NP-SBJ (NNP Mr.)) (. .)) )"`
/// - Several trees in a row, separated by any whitespace.
///
/// **Returns:**
/// - `Ok(Vec<Node>)` - Trees in input order
/// - `Err(TreeParseError::Empty)` - No tree in the input
/// - `Err(TreeParseError::Unbalanced)` - A parenthesis without its partner
/// - `Err(TreeParseError::UnexpectedToken)` - A word outside of any tree
pub fn parse_bracketed(s: &str) -> Result<Vec<Node>, TreeParseError> {
    let mut trees: Vec<Node> = Vec::new();
    let mut stack: Vec<OpenNode> = Vec::new();

    for token in tokenize(s) {
        match token {
            Token::Open(offset) => stack.push(OpenNode::new(offset)),
            Token::Word(word, offset) => match stack.last_mut() {
                Some(open) if open.expects_label() => open.label = Some(word.into()),
                Some(open) => open.children.push(Node::leaf(word)),
                None => {
                    return Err(TreeParseError::UnexpectedToken { token: word.to_string(), offset });
                }
            },
            Token::Close(offset) => {
                let node = stack.pop().ok_or(TreeParseError::Unbalanced { offset })?.close();
                match stack.last_mut() {
                    Some(parent) => parent.children.push(node),
                    None => trees.push(strip_empty_wrapper(node)),
                }
            }
        }
    }

    if let Some(open) = stack.first() {
        return Err(TreeParseError::Unbalanced { offset: open.offset });
    }

    if trees.is_empty() {
        return Err(TreeParseError::Empty);
    }

    debug!("Parsed {} bracketed trees.", trees.len());
    Ok(trees)
}
