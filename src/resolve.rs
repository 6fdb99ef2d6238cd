//! Bare-name directory resolution and path splitting.
//!
//! Lookup is by a directory's `name` field, never by walking path
//! components: a query matches only when some directory is literally named
//! the full query string, and the first match in depth-first pre-order wins.
//! Operations split a path into a parent part and a leaf name and resolve
//! only the parent part through this search, so the parent-part string must
//! exactly equal some directory's name. Files are never resolvable here.

use crate::error::NamespaceError;
use crate::namespace::Namespace;
use crate::tree::Node;
use crate::types::NodeId;

/// Depth-first pre-order search for the first directory named `name` in the
/// subtree rooted at `start`. Runs over an explicit work stack.
pub fn find_directory(ns: &Namespace, start: NodeId, name: &str) -> Option<NodeId> {
    let mut work = vec![start];
    while let Some(id) = work.pop() {
        if let Node::Directory(dir) = ns.node(id) {
            if dir.name == name {
                return Some(id);
            }
            // reversed so the leftmost subdirectory is visited first
            work.extend(dir.subdirectories.iter().rev().copied());
        }
    }
    None
}

/// Split `path` at the last `/` into (parent part, leaf name).
///
/// A pure-slash head survives intact (`/a` -> `("/", "a")`); otherwise the
/// head loses trailing slashes (`a//b` -> `("a", "b")`). A path with no
/// separator yields an empty parent part, which never resolves since no
/// directory is named `""`.
pub fn split_path(path: &str) -> (&str, &str) {
    let cut = path.rfind('/').map_or(0, |i| i + 1);
    let (head, tail) = path.split_at(cut);
    if head.bytes().all(|b| b == b'/') {
        (head, tail)
    } else {
        (head.trim_end_matches('/'), tail)
    }
}

/// Resolve the parent part of `path` against the whole tree.
///
/// Errors with the full original path when the parent part does not name
/// any directory.
pub fn resolve_parent<'p>(
    ns: &Namespace,
    path: &'p str,
) -> Result<(NodeId, &'p str), NamespaceError> {
    let (parent_part, leaf) = split_path(path);
    let parent = find_directory(ns, ns.root(), parent_part)
        .ok_or_else(|| NamespaceError::NotFound(path.to_string()))?;
    Ok((parent, leaf))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops;

    #[test]
    fn split_path_cases() {
        assert_eq!(split_path("/documents"), ("/", "documents"));
        assert_eq!(split_path("documents/resume.txt"), ("documents", "resume.txt"));
        assert_eq!(split_path("resume.txt"), ("", "resume.txt"));
        assert_eq!(split_path("a//b"), ("a", "b"));
        assert_eq!(split_path("//a"), ("//", "a"));
        assert_eq!(split_path("a/"), ("a", ""));
        assert_eq!(split_path("/"), ("/", ""));
    }

    #[test]
    fn lookup_is_by_bare_name_not_path() {
        let mut ns = Namespace::new();
        ops::mkdir(&mut ns, "documents").unwrap();
        ops::cd(&mut ns, "documents");
        ops::mkdir(&mut ns, "work").unwrap();

        assert!(find_directory(&ns, ns.root(), "work").is_some());
        // a path-shaped query only matches a directory literally so named
        assert!(find_directory(&ns, ns.root(), "/documents/work").is_none());
        ops::cd(&mut ns, "/");
        ops::mkdir(&mut ns, "/documents/work").unwrap();
        assert!(find_directory(&ns, ns.root(), "/documents/work").is_some());
    }

    #[test]
    fn duplicate_names_resolve_to_preorder_first() {
        let mut ns = Namespace::new();
        ops::mkdir(&mut ns, "a").unwrap();
        ops::mkdir(&mut ns, "b").unwrap();
        ops::cd(&mut ns, "a");
        let nested = ops::mkdir(&mut ns, "target").unwrap();
        ops::cd(&mut ns, "b");
        ops::mkdir(&mut ns, "target").unwrap();

        // `a` precedes `b` in pre-order, so its `target` wins
        assert_eq!(find_directory(&ns, ns.root(), "target"), Some(nested));
    }

    #[test]
    fn files_are_never_resolved() {
        let mut ns = Namespace::new();
        ops::touch(&mut ns, "notes").unwrap();
        assert!(find_directory(&ns, ns.root(), "notes").is_none());
    }
}
