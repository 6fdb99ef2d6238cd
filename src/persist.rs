//! Navigational-state persistence.
//!
//! A saved state records exactly one thing: the name of the directory that
//! was current at save time. Loading re-resolves that name against the
//! current in-memory root. It restores position, never tree contents, so
//! loading into a tree that lacks a directory with that name leaves the
//! cursor unresolved.

use crate::error::{NamespaceError, ShellError};
use crate::namespace::Namespace;
use crate::types::Resolution;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

/// On-disk record, serialized as JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedState {
    pub current_directory: String,
}

/// Write the current-location name to `path`. Errors when the cursor is
/// unresolved, since there is no name to record.
pub fn save_state(ns: &Namespace, path: &Path) -> Result<(), ShellError> {
    let name = ns
        .current_location_name()
        .ok_or(NamespaceError::UnresolvedLocation)?;
    let state = SavedState {
        current_directory: name.to_string(),
    };
    fs::write(path, serde_json::to_string(&state)?)?;
    debug!(path = %path.display(), name, "saved state");
    Ok(())
}

/// Restore the cursor from the record at `path` by re-resolving the saved
/// name against the in-memory tree.
pub fn load_state(ns: &mut Namespace, path: &Path) -> Result<Resolution, ShellError> {
    let raw = fs::read_to_string(path)?;
    let state: SavedState = serde_json::from_str(&raw)?;
    let resolution = ns.set_current_location_by_name(&state.current_directory);
    debug!(path = %path.display(), ?resolution, "loaded state");
    Ok(resolution)
}
