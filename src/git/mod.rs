//! Git operations abstraction layer
//!
//! This module provides a trait-based abstraction over the read-only Git
//! operations next-version resolution needs, allowing for multiple
//! implementations including real repositories and mocks for testing.
//!
//! # Overview
//!
//! The primary abstraction is the [Repository] trait. The concrete
//! implementations include:
//!
//! - [repository::Git2Repository]: A real implementation using the `git2` crate
//! - [mock::MockRepository]: A mock implementation for testing
//!
//! Most code should depend on the [Repository] trait rather than concrete
//! implementations to enable easy testing and flexibility.

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::domain::PathFilter;
use crate::error::Result;
use git2::Oid;

/// A tag reference: its short name and the commit it ultimately points at
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagRef {
    /// The tag's short name (e.g. "v1.2.3")
    pub name: String,
    /// The commit the tag points at, with annotated tags dereferenced
    pub target: Oid,
}

/// Commit information yielded by a history walk
#[derive(Debug, Clone, PartialEq)]
pub struct CommitInfo {
    /// The commit's object id
    pub id: Oid,
    /// The full commit message
    pub message: String,
}

/// Read-only git operations needed for next-version resolution
///
/// ## Thread Safety
///
/// All implementors must be `Send + Sync` to allow safe sharing across threads.
///
/// ## Error Handling
///
/// All methods return [crate::error::Result<T>]. Implementations should map
/// underlying errors (like `git2::Error`) to the appropriate
/// [crate::error::NextVersionError] variants; in particular, an empty
/// repository must surface as [crate::error::NextVersionError::NoCommitsFound]
/// rather than a generic git error.
pub trait Repository: Send + Sync {
    /// Get the OID of the current HEAD commit
    ///
    /// # Returns
    /// * `Ok(Oid)` - Object ID of the HEAD commit
    /// * `Err(NextVersionError::NoCommitsFound)` - If the repository has no commits
    /// * `Err` - On any other Git error
    fn head_oid(&self) -> Result<Oid>;

    /// Enumerate all tags in the repository
    ///
    /// Annotated tag objects are dereferenced to the commit they ultimately
    /// point at; the returned [TagRef::target] is always a commit id.
    ///
    /// # Returns
    /// * `Ok(Vec<TagRef>)` - All tags, in reference-enumeration order
    /// * `Err` - If tag enumeration fails
    fn tags(&self) -> Result<Vec<TagRef>>;

    /// Walk commit history from `from` backward in commit-time order
    ///
    /// The traversal is one-shot and finite. When `path_filter` is supplied,
    /// only commits that touched at least one matching path are yielded;
    /// other commits are skipped entirely.
    ///
    /// # Arguments
    /// * `from` - Commit to start walking from (inclusive)
    /// * `path_filter` - Optional predicate restricting which commits are yielded
    ///
    /// # Returns
    /// * `Ok(iterator)` - Yields `Result<CommitInfo>`; advancement errors are
    ///   yielded in-stream and abort the walk
    /// * `Err` - If the walk cannot be constructed
    fn walk_commits<'a>(
        &'a self,
        from: Oid,
        path_filter: Option<&'a PathFilter>,
    ) -> Result<Box<dyn Iterator<Item = Result<CommitInfo>> + 'a>>;
}
