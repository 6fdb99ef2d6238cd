//! Namespace tree primitives: node variants and the owning arena.

pub mod arena;
pub mod node;

pub use arena::NodeArena;
pub use node::{DirectoryNode, FileNode, Node};
