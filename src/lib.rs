// -------------------------------------
// #![allow(dead_code)]
// #![allow(unused_variables)]
// #![allow(clippy::collapsible_if)]
// #![allow(clippy::needless_range_loop)]
// -------------------------------------

mod corpus;
mod parsers;
mod syntax;

pub use corpus::Corpus;
pub use corpus::CorpusError;
pub use corpus::SAMPLE_WSJ_0001;
pub use parsers::TreeParseError;
pub use parsers::bracketed::parse_bracketed;
pub use parsers::bracketed::write_bracketed;
pub use syntax::display::DEFAULT_MARGIN;
pub use syntax::flatten::DEFAULT_COLLAPSE_HEIGHT;
pub use syntax::flatten::Flattener;
pub use syntax::flatten::flatten;
pub use syntax::flatten::flatten_children;
pub use syntax::node::Leaf;
pub use syntax::node::Node;
pub use syntax::node::TreeError;
