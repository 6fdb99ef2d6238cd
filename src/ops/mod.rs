//! Namespace operations: creation, navigation, editing, and listing.
//!
//! Structural mutations (move, copy, delete) live in [`transfer`]. Every
//! operation runs to completion before the next command is accepted; there
//! is exactly one mutator at a time.

pub mod transfer;

pub use transfer::{cp, mv, rm};

use crate::error::NamespaceError;
use crate::namespace::{Namespace, ROOT_NAME};
use crate::resolve;
use crate::tree::{DirectoryNode, FileNode, Node};
use crate::types::{EntryKind, NodeId, Resolution};
use std::fmt;
use tracing::debug;

/// One line of `ls` output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListEntry {
    pub kind: EntryKind,
    pub name: String,
}

impl fmt::Display for ListEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.name)
    }
}

/// Create an empty directory under the current location.
///
/// No uniqueness check: a second `mkdir` with the same name yields a second,
/// independently addressable entry.
pub fn mkdir(ns: &mut Namespace, name: &str) -> Result<NodeId, NamespaceError> {
    let parent = ns.current_dir()?;
    let id = ns.insert(Node::Directory(DirectoryNode::new(name)));
    ns.dir_mut(parent).subdirectories.push(id);
    debug!(name, "created directory");
    Ok(id)
}

/// Re-point the cursor at `path`.
///
/// `/` selects the root; anything else is resolved by bare name against the
/// whole tree. A miss downgrades the cursor to unresolved rather than
/// erroring.
pub fn cd(ns: &mut Namespace, path: &str) -> Resolution {
    if path == ROOT_NAME {
        let root = ns.root();
        ns.set_current(Some(root));
        return Resolution::Resolved;
    }
    let found = resolve::find_directory(ns, ns.root(), path);
    ns.set_current(found);
    match found {
        Some(_) => Resolution::Resolved,
        None => {
            debug!(path, "cd target not found; cursor unresolved");
            Resolution::Unresolved
        }
    }
}

/// List the current location: files first, then directories, each in
/// insertion order. No recursion.
pub fn ls(ns: &Namespace) -> Result<impl Iterator<Item = ListEntry> + '_, NamespaceError> {
    let dir = ns.dir(ns.current_dir()?);
    let files = dir.files.iter().map(move |&id| ListEntry {
        kind: EntryKind::File,
        name: ns.node(id).name().to_string(),
    });
    let subdirectories = dir.subdirectories.iter().map(move |&id| ListEntry {
        kind: EntryKind::Directory,
        name: ns.node(id).name().to_string(),
    });
    Ok(files.chain(subdirectories))
}

/// Create an empty file under the current location. Same no-uniqueness-check
/// behavior as [`mkdir`].
pub fn touch(ns: &mut Namespace, name: &str) -> Result<NodeId, NamespaceError> {
    let parent = ns.current_dir()?;
    let id = ns.insert(Node::File(FileNode::new(name, "")));
    ns.dir_mut(parent).files.push(id);
    debug!(name, "created file");
    Ok(id)
}

/// Overwrite the first file named `name` in the current location, or create
/// it with `content` when absent. Directories are never considered.
pub fn echo(ns: &mut Namespace, name: &str, content: &str) -> Result<NodeId, NamespaceError> {
    let parent = ns.current_dir()?;
    let existing = ns
        .dir(parent)
        .files
        .iter()
        .copied()
        .find(|&id| ns.node(id).name() == name);
    match existing {
        Some(id) => {
            if let Some(file) = ns.node_mut(id).as_file_mut() {
                file.content = content.to_string();
            }
            debug!(name, "overwrote file content");
            Ok(id)
        }
        None => {
            let id = ns.insert(Node::File(FileNode::new(name, content)));
            ns.dir_mut(parent).files.push(id);
            debug!(name, "created file with content");
            Ok(id)
        }
    }
}
