pub mod commit;
pub mod node;
pub mod edge;
pub mod branch;
pub mod dag;

pub use commit::{Author, CommitRecord, CommitStats};
pub use node::{GraphNode, Tag, Tags};
pub use edge::{Edge, EdgeShape};
pub use branch::Branch;
pub use dag::{CommitGraph, GraphStats};
