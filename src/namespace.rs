//! Namespace: the owning tree plus the current-location cursor.

use crate::error::NamespaceError;
use crate::resolve;
use crate::tree::{DirectoryNode, Node, NodeArena};
use crate::types::{NodeId, Resolution};
use tracing::debug;

/// Name the root directory is created with.
pub const ROOT_NAME: &str = "/";

/// The in-memory tree of directories and files plus current-location state.
///
/// The cursor is explicit state: `None` is the unresolved sentinel set by a
/// failed cd/load or by removing the directory it pointed at. Relative
/// operations error on the sentinel instead of crashing.
#[derive(Debug)]
pub struct Namespace {
    arena: NodeArena,
    root: NodeId,
    current: Option<NodeId>,
}

impl Default for Namespace {
    fn default() -> Self {
        Self::new()
    }
}

impl Namespace {
    /// Create a namespace holding only the root directory, with the cursor
    /// on it.
    pub fn new() -> Self {
        let mut arena = NodeArena::new();
        let root = arena.insert(Node::Directory(DirectoryNode::new(ROOT_NAME)));
        Namespace {
            arena,
            root,
            current: Some(root),
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    /// The cursor; `None` is the unresolved sentinel.
    pub fn current(&self) -> Option<NodeId> {
        self.current
    }

    /// The cursor as an error-carrying lookup, for relative operations.
    pub fn current_dir(&self) -> Result<NodeId, NamespaceError> {
        self.current.ok_or(NamespaceError::UnresolvedLocation)
    }

    pub(crate) fn set_current(&mut self, id: Option<NodeId>) {
        self.current = id;
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.arena[id]
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.arena[id]
    }

    /// Directory view of `id`. Panics if `id` is a file; the cursor and the
    /// resolver only ever yield directories.
    pub fn dir(&self, id: NodeId) -> &DirectoryNode {
        match &self.arena[id] {
            Node::Directory(dir) => dir,
            Node::File(file) => panic!("node {:?} is a file: {}", id, file.name),
        }
    }

    pub(crate) fn dir_mut(&mut self, id: NodeId) -> &mut DirectoryNode {
        match &mut self.arena[id] {
            Node::Directory(dir) => dir,
            Node::File(file) => panic!("node {:?} is a file: {}", id, file.name),
        }
    }

    pub(crate) fn insert(&mut self, node: Node) -> NodeId {
        self.arena.insert(node)
    }

    /// Live node count, root included.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Ids of the subtree rooted at `id`, the node itself included.
    /// Work-stack walk; no recursion on tree depth.
    pub fn subtree_ids(&self, id: NodeId) -> Vec<NodeId> {
        let mut ids = Vec::new();
        let mut work = vec![id];
        while let Some(next) = work.pop() {
            ids.push(next);
            if let Node::Directory(dir) = &self.arena[next] {
                work.extend(dir.entries());
            }
        }
        ids
    }

    /// Whether `needle` lies inside the subtree rooted at `root_id`, the
    /// root itself included.
    pub fn subtree_contains(&self, root_id: NodeId, needle: NodeId) -> bool {
        let mut work = vec![root_id];
        while let Some(next) = work.pop() {
            if next == needle {
                return true;
            }
            if let Node::Directory(dir) = &self.arena[next] {
                work.extend(dir.entries());
            }
        }
        false
    }

    /// Discard an already-detached subtree from the arena, returning the
    /// number of nodes freed. Downgrades the cursor to unresolved when it
    /// pointed into the discarded region.
    pub(crate) fn discard_subtree(&mut self, id: NodeId) -> usize {
        let ids = self.subtree_ids(id);
        if let Some(cursor) = self.current {
            if ids.contains(&cursor) {
                debug!("cursor was inside a removed subtree; now unresolved");
                self.current = None;
            }
        }
        let freed = ids.len();
        for node_id in ids {
            self.arena.remove(node_id);
        }
        freed
    }

    /// Name of the directory the cursor points at, for persistence.
    pub fn current_location_name(&self) -> Option<&str> {
        self.current.map(|id| self.arena[id].name())
    }

    /// Re-point the cursor at the first directory named `name`, searching
    /// the whole tree. A miss leaves the cursor unresolved.
    pub fn set_current_location_by_name(&mut self, name: &str) -> Resolution {
        match resolve::find_directory(self, self.root, name) {
            Some(id) => {
                self.current = Some(id);
                Resolution::Resolved
            }
            None => {
                debug!(name, "no directory with saved name; cursor unresolved");
                self.current = None;
                Resolution::Unresolved
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::FileNode;

    #[test]
    fn new_namespace_has_root_cursor() {
        let ns = Namespace::new();
        assert_eq!(ns.len(), 1);
        assert_eq!(ns.current(), Some(ns.root()));
        assert_eq!(ns.current_location_name(), Some(ROOT_NAME));
    }

    #[test]
    fn subtree_ids_cover_nested_entries() {
        let mut ns = Namespace::new();
        let root = ns.root();
        let dir = ns.insert(Node::Directory(DirectoryNode::new("a")));
        ns.dir_mut(root).subdirectories.push(dir);
        let file = ns.insert(Node::File(FileNode::new("f.txt", "")));
        ns.dir_mut(dir).files.push(file);

        let ids = ns.subtree_ids(dir);
        assert_eq!(ids.len(), 2);
        assert!(ids.contains(&dir));
        assert!(ids.contains(&file));
        assert!(ns.subtree_contains(dir, file));
        assert!(!ns.subtree_contains(dir, root));
    }

    #[test]
    fn discarding_cursor_directory_unresolves() {
        let mut ns = Namespace::new();
        let root = ns.root();
        let dir = ns.insert(Node::Directory(DirectoryNode::new("a")));
        ns.dir_mut(root).subdirectories.push(dir);
        ns.set_current(Some(dir));

        ns.dir_mut(root).detach(dir);
        let freed = ns.discard_subtree(dir);
        assert_eq!(freed, 1);
        assert_eq!(ns.current(), None);
        assert!(ns.current_dir().is_err());
    }

    #[test]
    fn set_current_location_by_name_round_trips() {
        let mut ns = Namespace::new();
        let root = ns.root();
        let dir = ns.insert(Node::Directory(DirectoryNode::new("work")));
        ns.dir_mut(root).subdirectories.push(dir);

        assert_eq!(
            ns.set_current_location_by_name("work"),
            Resolution::Resolved
        );
        assert_eq!(ns.current(), Some(dir));
        assert_eq!(
            ns.set_current_location_by_name("missing"),
            Resolution::Unresolved
        );
        assert_eq!(ns.current(), None);
    }
}
