//! Structural mutations: move, copy, and delete.
//!
//! All three split their path arguments into a parent part and a leaf name,
//! resolve the parent part by bare name against the whole tree, and locate
//! the leaf among the parent's files and subdirectories by name, first match
//! wins regardless of kind. Failures abort with no mutation.

use crate::error::NamespaceError;
use crate::namespace::Namespace;
use crate::resolve;
use crate::tree::{DirectoryNode, FileNode, Node};
use crate::types::{EntryKind, NodeId};
use tracing::debug;

/// First entry named `name` under `parent`, scanning files before
/// subdirectories, each in insertion order.
fn locate_entry(ns: &Namespace, parent: NodeId, name: &str) -> Option<NodeId> {
    ns.dir(parent).entries().find(|&id| ns.node(id).name() == name)
}

/// Move the entry at `source_path` under `destination_path`'s parent,
/// renaming it to the destination leaf name.
///
/// Ownership transfer is an id re-link: the entry is detached from the
/// source parent by identity and appended to the destination sequence
/// matching its kind. Moving a directory into its own subtree is rejected.
pub fn mv(
    ns: &mut Namespace,
    source_path: &str,
    destination_path: &str,
) -> Result<String, NamespaceError> {
    let (source_parent, source_name) = resolve::resolve_parent(ns, source_path)?;
    let (dest_parent, dest_name) = resolve::resolve_parent(ns, destination_path)?;
    let entry = locate_entry(ns, source_parent, source_name)
        .ok_or_else(|| NamespaceError::NotFound(source_path.to_string()))?;
    let kind = ns.node(entry).kind();

    if kind == EntryKind::Directory && ns.subtree_contains(entry, dest_parent) {
        return Err(NamespaceError::MoveIntoSelf(source_path.to_string()));
    }

    ns.dir_mut(source_parent).detach(entry);
    ns.node_mut(entry).set_name(dest_name);
    let dest = ns.dir_mut(dest_parent);
    match kind {
        EntryKind::File => dest.files.push(entry),
        EntryKind::Directory => dest.subdirectories.push(entry),
    }
    debug!(source = source_path, destination = destination_path, "moved entry");
    Ok(format!("Moved {source_path} to {destination_path}"))
}

/// Copy the entry at `source_path` under `destination_path`'s parent as a
/// new entry named with the destination leaf name.
///
/// Directory copies are deep: identical shape, file contents, and child
/// order as the source subtree at copy time. The source is untouched.
pub fn cp(
    ns: &mut Namespace,
    source_path: &str,
    destination_path: &str,
) -> Result<String, NamespaceError> {
    let (source_parent, source_name) = resolve::resolve_parent(ns, source_path)?;
    let (dest_parent, dest_name) = resolve::resolve_parent(ns, destination_path)?;
    let entry = locate_entry(ns, source_parent, source_name)
        .ok_or_else(|| NamespaceError::NotFound(source_path.to_string()))?;

    let copy = copy_subtree(ns, entry, dest_name);
    match ns.node(copy).kind() {
        EntryKind::File => ns.dir_mut(dest_parent).files.push(copy),
        EntryKind::Directory => ns.dir_mut(dest_parent).subdirectories.push(copy),
    }
    debug!(source = source_path, destination = destination_path, "copied entry");
    Ok(format!("Copied {source_path} to {destination_path}"))
}

/// Duplicate `source` into fresh arena nodes named `name`; for directories
/// the whole subtree is rebuilt in pre-order over an explicit work stack.
/// The returned node is not attached to any parent.
fn copy_subtree(ns: &mut Namespace, source: NodeId, name: &str) -> NodeId {
    let snapshot = ns.node(source).clone();
    match snapshot {
        Node::File(file) => ns.insert(Node::File(FileNode::new(name, file.content))),
        Node::Directory(dir) => {
            let copy_root = ns.insert(Node::Directory(DirectoryNode::new(name)));
            let mut work = vec![(dir, copy_root)];
            while let Some((source_dir, copy_id)) = work.pop() {
                for file_id in source_dir.files {
                    let (file_name, content) = match ns.node(file_id) {
                        Node::File(file) => (file.name.clone(), file.content.clone()),
                        Node::Directory(_) => continue,
                    };
                    let file_copy = ns.insert(Node::File(FileNode::new(file_name, content)));
                    ns.dir_mut(copy_id).files.push(file_copy);
                }
                for sub_id in source_dir.subdirectories {
                    let sub_snapshot = match ns.node(sub_id) {
                        Node::Directory(sub) => sub.clone(),
                        Node::File(_) => continue,
                    };
                    let sub_copy =
                        ns.insert(Node::Directory(DirectoryNode::new(sub_snapshot.name.clone())));
                    ns.dir_mut(copy_id).subdirectories.push(sub_copy);
                    work.push((sub_snapshot, sub_copy));
                }
            }
            copy_root
        }
    }
}

/// Remove the entry at `target_path` and everything only reachable through
/// it. The discard is structural: descendants go with their directory.
pub fn rm(ns: &mut Namespace, target_path: &str) -> Result<String, NamespaceError> {
    let (parent, name) = resolve::resolve_parent(ns, target_path)?;
    let entry = locate_entry(ns, parent, name)
        .ok_or_else(|| NamespaceError::NotFound(target_path.to_string()))?;

    ns.dir_mut(parent).detach(entry);
    let discarded = ns.discard_subtree(entry);
    debug!(path = target_path, discarded, "removed entry");
    Ok(format!("Removed {target_path}"))
}
