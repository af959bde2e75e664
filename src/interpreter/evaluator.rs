/// The operator decision table over value-kind pairs.
pub mod binary;
/// The evaluation context and the tree-walking dispatch.
pub mod core;
