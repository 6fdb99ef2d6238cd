//! Error types for namespace operations and the outer shell layers.

use thiserror::Error;

/// Failures of the core namespace operations.
///
/// All failures are local: an erroring operation aborts with no mutation and
/// the session carries on.
#[derive(Debug, Error)]
pub enum NamespaceError {
    /// Path or name did not resolve to any entry. Carries the path string as
    /// the caller wrote it.
    #[error("{0} not found")]
    NotFound(String),

    /// A relative operation ran while the cursor points at nothing. Only a
    /// successful cd or load clears this state.
    #[error("current location is unresolved")]
    UnresolvedLocation,

    /// The mv destination parent lies inside the moved directory's subtree.
    #[error("cannot move {0} into its own subtree")]
    MoveIntoSelf(String),
}

/// Failures of the layers around the core: configuration, logging,
/// persistence, and session I/O.
#[derive(Debug, Error)]
pub enum ShellError {
    #[error("config error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("state file error: {0}")]
    State(#[from] serde_json::Error),

    #[error(transparent)]
    Namespace(#[from] NamespaceError),
}
