pub(crate) mod display;
pub(crate) mod flatten;
pub(crate) mod node;
