pub(crate) mod bracketed;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeParseError {
    #[error("No trees found in input.")]
    Empty,
    #[error("Unbalanced parentheses at byte {offset}.")]
    Unbalanced { offset: usize },
    #[error("Unexpected token '{token}' outside of a tree at byte {offset}.")]
    UnexpectedToken { token: String, offset: usize },
}
