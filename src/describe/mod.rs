//! Version derivation from the nearest annotated semantic-version tag
//!
//! Emulates `git describe` on top of [crate::git::Repository]:
//!
//! 1. [tag_index::TagIndex] maps commits to their semantic-version tags.
//! 2. [candidate::CandidateSearch] walks history from the branch tip, newest
//!    committer time first, and yields annotated tag candidates nearest first.
//! 3. [composer::compose] turns the nearest candidate, or the default version,
//!    into a [Version], appending `<distance>.<hash8>` build metadata when the
//!    tip is ahead of the tag.
//!
//! Every call is a fresh computation over the live repository state.

pub mod candidate;
pub mod composer;
pub mod tag_index;

pub use candidate::{CandidateSearch, TagCandidate, MAX_SUITABLE_TAG_CANDIDATES};
pub use composer::{compose, parse_default_version};
pub use tag_index::TagIndex;

use crate::config::DescribeOptions;
use crate::domain::{ObjectId, Version};
use crate::error::Result;
use crate::git::{Git2Repository, Repository};
use std::path::Path;
use tracing::debug;

/// Derive version information from the repository at `repository_path`
///
/// Searches the current branch for the nearest annotated tag whose name is a
/// semantic version and falls back to `default_version` when there is none.
/// The default version is validated before the repository is opened.
///
/// # Example
/// ```no_run
/// let version = gitver::describe::derive_version("0.1.0", ".")?;
/// println!("{}", version);
/// # Ok::<(), gitver::GitverError>(())
/// ```
pub fn derive_version<P: AsRef<Path>>(default_version: &str, repository_path: P) -> Result<Version> {
    derive_version_at(default_version, repository_path, &DescribeOptions::default())
}

/// Same as [derive_version] with explicit search options
pub fn derive_version_at<P: AsRef<Path>>(
    default_version: &str,
    repository_path: P,
    options: &DescribeOptions,
) -> Result<Version> {
    let default = parse_default_version(default_version)?;
    let repo = Git2Repository::open(repository_path)?;
    derive_from(&repo, default, options)
}

/// Derive version information from any [Repository] implementation
pub fn derive_version_with<R: Repository + ?Sized>(
    repo: &R,
    default_version: &str,
    options: &DescribeOptions,
) -> Result<Version> {
    let default = parse_default_version(default_version)?;
    derive_from(repo, default, options)
}

fn derive_from<R: Repository + ?Sized>(
    repo: &R,
    default: semver::Version,
    options: &DescribeOptions,
) -> Result<Version> {
    let tip = repo.current_branch_tip()?;
    let candidate = nearest_candidate(repo, tip, options)?;
    compose(default, candidate.as_ref(), tip)
}

/// Find the nearest annotated semantic-version tag reachable from `tip`
pub fn nearest_candidate<R: Repository + ?Sized>(
    repo: &R,
    tip: ObjectId,
    options: &DescribeOptions,
) -> Result<Option<TagCandidate>> {
    let index = TagIndex::build(repo)?;
    let walk = repo.walk_commits(tip)?;
    let mut search = CandidateSearch::new(walk, index, options.max_candidates);

    let candidate = search.next().transpose()?;
    debug!(
        commits_walked = search.commits_walked(),
        found = candidate.is_some(),
        "finished tag candidate search"
    );
    Ok(candidate)
}
