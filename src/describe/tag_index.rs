use crate::domain::{is_semantic_version, ObjectId, TagReference};
use crate::error::Result;
use crate::git::Repository;
use std::collections::HashMap;
use tracing::{debug, trace};

/// A tag as recorded in the index
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedTag {
    pub reference: TagReference,
    pub annotated: bool,
}

/// Mapping from commit to the semantic-version tag pointing at it
///
/// Only tags whose short name is a semantic version are indexed. When several
/// tags share a commit, the last one enumerated wins.
#[derive(Debug, Clone, Default)]
pub struct TagIndex {
    tags: HashMap<ObjectId, IndexedTag>,
}

impl TagIndex {
    /// Create an empty index
    pub fn new() -> Self {
        TagIndex::default()
    }

    /// Build the index from every tag reference in the repository
    ///
    /// Failing to enumerate tags is fatal; a tag whose object cannot be read
    /// is skipped.
    pub fn build<R: Repository + ?Sized>(repo: &R) -> Result<Self> {
        let mut index = TagIndex::new();

        for reference in repo.tag_references()? {
            if !is_semantic_version(&reference.name) {
                trace!(tag = %reference.full_name(), "skipping tag without semantic version name");
                continue;
            }

            match repo.annotated_tag_target(&reference) {
                Ok(Some(commit)) => index.insert(commit, reference, true),
                Ok(None) => {
                    let commit = reference.id;
                    index.insert(commit, reference, false);
                }
                Err(e) => {
                    debug!(tag = %reference.full_name(), error = %e, "skipping unresolvable tag");
                }
            }
        }

        debug!(tags = index.len(), "built tag index");
        Ok(index)
    }

    /// Record a tag for a commit, replacing any tag already recorded for it
    pub fn insert(&mut self, commit: ObjectId, reference: TagReference, annotated: bool) {
        self.tags.insert(
            commit,
            IndexedTag {
                reference,
                annotated,
            },
        );
    }

    /// Remove and return the tag recorded for a commit
    pub fn take(&mut self, commit: &ObjectId) -> Option<IndexedTag> {
        self.tags.remove(commit)
    }

    pub fn get(&self, commit: &ObjectId) -> Option<&IndexedTag> {
        self.tags.get(commit)
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}
