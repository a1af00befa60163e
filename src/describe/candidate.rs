use crate::describe::tag_index::TagIndex;
use crate::domain::{ObjectId, TagReference};
use crate::error::Result;
use crate::git::CommitWalk;
use tracing::{debug, trace};

/// Maximum number of suitable tag candidates searched for, same as git's default
pub const MAX_SUITABLE_TAG_CANDIDATES: usize = 10;

/// A tag found while walking history from the branch tip
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagCandidate {
    pub reference: TagReference,
    pub annotated: bool,
    /// Position of the tagged commit in the walk; the tip is 0
    pub distance: u64,
}

/// Single forward pass over a commit walk yielding annotated tag candidates
///
/// Candidates come out nearest first. Each indexed commit is matched at most
/// once, since it is removed from the index when visited. Lightweight tags
/// consume their index entry but never qualify. The search ends when the walk
/// or the index is exhausted, or after `max_candidates` candidates.
pub struct CandidateSearch<'a> {
    walk: CommitWalk<'a>,
    index: TagIndex,
    walked: u64,
    found: usize,
    max_candidates: usize,
    finished: bool,
}

impl<'a> CandidateSearch<'a> {
    pub fn new(walk: CommitWalk<'a>, index: TagIndex, max_candidates: usize) -> Self {
        CandidateSearch {
            walk,
            index,
            walked: 0,
            found: 0,
            max_candidates,
            finished: false,
        }
    }

    /// Number of commits consumed from the walk so far
    pub fn commits_walked(&self) -> u64 {
        self.walked
    }

    /// Tags not yet matched by the walk
    pub fn remaining_tags(&self) -> usize {
        self.index.len()
    }

    fn next_commit(&mut self) -> Option<Result<ObjectId>> {
        if self.index.is_empty() {
            return None;
        }
        let commit = self.walk.next()?;
        self.walked += 1;
        Some(commit)
    }
}

impl Iterator for CandidateSearch<'_> {
    type Item = Result<TagCandidate>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished || self.found >= self.max_candidates {
            return None;
        }

        loop {
            let commit = match self.next_commit() {
                Some(Ok(commit)) => commit,
                Some(Err(e)) => {
                    self.finished = true;
                    return Some(Err(e));
                }
                None => {
                    self.finished = true;
                    return None;
                }
            };
            let distance = self.walked - 1;

            let Some(tag) = self.index.take(&commit) else {
                continue;
            };

            if !tag.annotated {
                trace!(tag = %tag.reference, distance, "ignoring lightweight tag");
                continue;
            }

            self.found += 1;
            debug!(tag = %tag.reference, distance, "found tag candidate");
            return Some(Ok(TagCandidate {
                reference: tag.reference,
                annotated: true,
                distance,
            }));
        }
    }
}
