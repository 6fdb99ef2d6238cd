//! Core types for the namespace simulator.

use std::fmt;

/// Stable index of a node slot inside the arena.
///
/// Ids stay valid across moves; a removed node's id must not be dereferenced
/// again (the slot may be reused).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Raw slot index.
    pub fn index(self) -> usize {
        self.0
    }
}

/// Kind tag for a located or listed entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryKind::File => f.write_str("File"),
            EntryKind::Directory => f.write_str("Directory"),
        }
    }
}

/// Outcome of re-pointing the cursor at a named directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Resolved,
    Unresolved,
}
