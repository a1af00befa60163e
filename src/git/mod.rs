//! Repository access abstraction layer
//!
//! This module provides a trait-based abstraction over the read-only
//! repository operations version derivation needs, allowing for a real
//! `git2`-backed implementation and an in-memory one for testing.
//!
//! # Overview
//!
//! - [repository::Git2Repository]: A real implementation using the `git2` crate
//! - [mock::MockRepository]: An in-memory implementation for testing
//!
//! Code in [crate::describe] depends only on the [Repository] trait.

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::domain::{ObjectId, TagReference};
use crate::error::Result;

/// Lazy, forward-only sequence of commit identifiers
///
/// Exhausted once consumed; walking again requires a fresh sequence from
/// [Repository::walk_commits].
pub type CommitWalk<'a> = Box<dyn Iterator<Item = Result<ObjectId>> + 'a>;

/// Read-only repository operations used by version derivation
///
/// ## Error Handling
///
/// Implementations map underlying errors to the
/// [crate::error::GitverError] variant naming the failed stage:
/// `RepositoryAccess` for HEAD resolution and `Enumeration` for listing
/// tags or walking commits.
pub trait Repository {
    /// Resolve the commit at the tip of the currently checked-out branch
    ///
    /// # Returns
    /// * `Ok(ObjectId)` - The branch tip commit
    /// * `Err` - If HEAD cannot be resolved (e.g. a repository without commits)
    fn current_branch_tip(&self) -> Result<ObjectId>;

    /// Walk commits reachable from `from`, most recent committer time first
    ///
    /// The first item is `from` itself. The sequence ends at the root
    /// commit(s).
    fn walk_commits(&self, from: ObjectId) -> Result<CommitWalk<'_>>;

    /// List all tag references
    ///
    /// # Returns
    /// * `Ok(Vec<TagReference>)` - Every tag, annotated or lightweight
    /// * `Err` - If the tag namespace cannot be enumerated
    fn tag_references(&self) -> Result<Vec<TagReference>>;

    /// Resolve a tag reference as an annotated tag object
    ///
    /// # Returns
    /// * `Ok(Some(commit))` - The tag is annotated and targets `commit`
    /// * `Ok(None)` - The tag is lightweight
    /// * `Err` - If the tag's object cannot be read
    fn annotated_tag_target(&self, tag: &TagReference) -> Result<Option<ObjectId>>;
}
