use crate::domain::{ObjectId, TagReference};
use crate::error::{GitverError, Result};
use crate::git::{CommitWalk, Repository};
use std::collections::{HashMap, HashSet};

/// Mock repository with a hand-ordered, linear history
///
/// Commits are recorded oldest first; walks yield them newest first.
pub struct MockRepository {
    history: Vec<ObjectId>,
    tags: Vec<TagReference>,
    annotated: HashMap<ObjectId, ObjectId>,
    unreadable: HashSet<ObjectId>,
    tag_listing_fails: bool,
}

/// Deterministic identifier for tests: every byte is `seed`
pub fn object_id(seed: u8) -> ObjectId {
    ObjectId::new([seed; 20])
}

impl MockRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        MockRepository {
            history: Vec::new(),
            tags: Vec::new(),
            annotated: HashMap::new(),
            unreadable: HashSet::new(),
            tag_listing_fails: false,
        }
    }

    /// Create a linear history of `count` commits with ids `object_id(1)..=object_id(count)`
    pub fn linear(count: u8) -> Self {
        let mut repo = MockRepository::new();
        for seed in 1..=count {
            repo.add_commit(object_id(seed));
        }
        repo
    }

    /// Append a commit on top of the current tip
    pub fn add_commit(&mut self, id: ObjectId) {
        self.history.push(id);
    }

    /// Add a lightweight tag pointing directly at a commit
    pub fn add_lightweight_tag(&mut self, name: impl Into<String>, commit: ObjectId) {
        self.tags.push(TagReference::new(name, commit));
    }

    /// Add an annotated tag: the reference points at `tag_object`, which targets `commit`
    pub fn add_annotated_tag(
        &mut self,
        name: impl Into<String>,
        tag_object: ObjectId,
        commit: ObjectId,
    ) {
        self.tags.push(TagReference::new(name, tag_object));
        self.annotated.insert(tag_object, commit);
    }

    /// Make the object behind a tag reference unreadable
    pub fn make_unreadable(&mut self, id: ObjectId) {
        self.unreadable.insert(id);
    }

    /// Make tag enumeration fail
    pub fn fail_tag_listing(&mut self) {
        self.tag_listing_fails = true;
    }
}

impl Default for MockRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl Repository for MockRepository {
    fn current_branch_tip(&self) -> Result<ObjectId> {
        self.history
            .last()
            .copied()
            .ok_or_else(|| GitverError::repository("repository has no commits"))
    }

    fn walk_commits(&self, from: ObjectId) -> Result<CommitWalk<'_>> {
        let position = self
            .history
            .iter()
            .position(|id| *id == from)
            .ok_or_else(|| GitverError::enumeration(format!("commit {} not found", from)))?;

        Ok(Box::new(self.history[..=position].iter().rev().copied().map(Ok)))
    }

    fn tag_references(&self) -> Result<Vec<TagReference>> {
        if self.tag_listing_fails {
            return Err(GitverError::enumeration("failed to get all tag references"));
        }
        Ok(self.tags.clone())
    }

    fn annotated_tag_target(&self, tag: &TagReference) -> Result<Option<ObjectId>> {
        if self.unreadable.contains(&tag.id) {
            return Err(GitverError::enumeration(format!(
                "failed to read object of tag {}",
                tag
            )));
        }
        Ok(self.annotated.get(&tag.id).copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_repository_tip() {
        let repo = MockRepository::linear(3);
        assert_eq!(repo.current_branch_tip().unwrap(), object_id(3));
    }

    #[test]
    fn test_mock_repository_empty_has_no_tip() {
        let repo = MockRepository::default();
        assert!(repo.current_branch_tip().is_err());
    }

    #[test]
    fn test_mock_repository_walk_newest_first() {
        let repo = MockRepository::linear(3);
        let walk: Vec<_> = repo
            .walk_commits(object_id(3))
            .unwrap()
            .collect::<Result<_>>()
            .unwrap();
        assert_eq!(walk, vec![object_id(3), object_id(2), object_id(1)]);
    }

    #[test]
    fn test_mock_repository_walk_from_middle() {
        let repo = MockRepository::linear(3);
        let walk: Vec<_> = repo
            .walk_commits(object_id(2))
            .unwrap()
            .collect::<Result<_>>()
            .unwrap();
        assert_eq!(walk, vec![object_id(2), object_id(1)]);
    }

    #[test]
    fn test_mock_repository_tags() {
        let mut repo = MockRepository::linear(2);
        repo.add_lightweight_tag("v1.0.0", object_id(1));
        repo.add_annotated_tag("v2.0.0", object_id(200), object_id(2));

        let tags = repo.tag_references().unwrap();
        assert_eq!(tags.len(), 2);
        assert_eq!(repo.annotated_tag_target(&tags[0]).unwrap(), None);
        assert_eq!(
            repo.annotated_tag_target(&tags[1]).unwrap(),
            Some(object_id(2))
        );
    }

    #[test]
    fn test_mock_repository_failures() {
        let mut repo = MockRepository::linear(1);
        repo.add_annotated_tag("v1.0.0", object_id(100), object_id(1));
        repo.make_unreadable(object_id(100));
        let tags = repo.tag_references().unwrap();
        assert!(repo.annotated_tag_target(&tags[0]).is_err());

        repo.fail_tag_listing();
        assert!(repo.tag_references().is_err());
    }
}
