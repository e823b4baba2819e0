pub mod branch;
pub mod tags;

pub use branch::{BranchLabeler, MessageHeuristic};
pub use tags::extract_tags;
