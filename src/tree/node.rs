//! Namespace node types.

use crate::types::{EntryKind, NodeId};

/// File node: a name and an editable content string.
#[derive(Debug, Clone)]
pub struct FileNode {
    pub name: String,
    pub content: String,
}

impl FileNode {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        FileNode {
            name: name.into(),
            content: content.into(),
        }
    }
}

/// Directory node: a name and two ordered child sequences.
///
/// Children are referenced by arena id, in insertion order. Names need not
/// be unique within a sequence; scans take the first match.
#[derive(Debug, Clone)]
pub struct DirectoryNode {
    pub name: String,
    pub files: Vec<NodeId>,
    pub subdirectories: Vec<NodeId>,
}

impl DirectoryNode {
    pub fn new(name: impl Into<String>) -> Self {
        DirectoryNode {
            name: name.into(),
            files: Vec::new(),
            subdirectories: Vec::new(),
        }
    }

    /// Child ids in scan order: files first, then subdirectories.
    pub fn entries(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.files.iter().chain(&self.subdirectories).copied()
    }

    /// Detach `id` from both sequences by identity. Entries sharing a name
    /// with `id` are left alone.
    pub fn detach(&mut self, id: NodeId) {
        self.files.retain(|&child| child != id);
        self.subdirectories.retain(|&child| child != id);
    }
}

/// A namespace node: either a file or a directory.
#[derive(Debug, Clone)]
pub enum Node {
    File(FileNode),
    Directory(DirectoryNode),
}

impl Node {
    pub fn name(&self) -> &str {
        match self {
            Node::File(file) => &file.name,
            Node::Directory(dir) => &dir.name,
        }
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        match self {
            Node::File(file) => file.name = name.into(),
            Node::Directory(dir) => dir.name = name.into(),
        }
    }

    pub fn kind(&self) -> EntryKind {
        match self {
            Node::File(_) => EntryKind::File,
            Node::Directory(_) => EntryKind::Directory,
        }
    }

    pub fn is_directory(&self) -> bool {
        matches!(self, Node::Directory(_))
    }

    pub fn as_file(&self) -> Option<&FileNode> {
        match self {
            Node::File(file) => Some(file),
            Node::Directory(_) => None,
        }
    }

    pub fn as_file_mut(&mut self) -> Option<&mut FileNode> {
        match self {
            Node::File(file) => Some(file),
            Node::Directory(_) => None,
        }
    }

    pub fn as_directory(&self) -> Option<&DirectoryNode> {
        match self {
            Node::Directory(dir) => Some(dir),
            Node::File(_) => None,
        }
    }

    pub fn as_directory_mut(&mut self) -> Option<&mut DirectoryNode> {
        match self {
            Node::Directory(dir) => Some(dir),
            Node::File(_) => None,
        }
    }
}
