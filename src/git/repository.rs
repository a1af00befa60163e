use crate::domain::{ObjectId, TagReference};
use crate::error::{GitverError, Result};
use crate::fs;
use crate::git::CommitWalk;
use git2::{ObjectType, Oid, Repository as Git2Repo, Sort};
use std::path::Path;
use tracing::{debug, trace};

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Open the repository whose root is `path`
    ///
    /// Unlike discovery, parent directories are not searched.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let exists = fs::dir_exists(path).map_err(|e| {
            GitverError::repository(format!(
                "failed to open repository at path {:?}: {}",
                path, e
            ))
        })?;
        if !exists {
            return Err(GitverError::repository(format!(
                "failed to open repository at path {:?}: no such directory",
                path
            )));
        }

        let repo = Git2Repo::open(path).map_err(|e| {
            GitverError::repository(format!(
                "failed to open repository at path {:?}: {}",
                path, e
            ))
        })?;
        debug!(path = %path.display(), "opened repository");

        Ok(Git2Repository { repo })
    }
}

fn to_oid(id: ObjectId) -> Result<Oid> {
    Oid::try_from(id)
        .map_err(|e| GitverError::parse(format!("invalid object id {}: {}", id, e)))
}

impl super::Repository for Git2Repository {
    fn current_branch_tip(&self) -> Result<ObjectId> {
        let head = self.repo.head().map_err(|e| {
            GitverError::repository(format!(
                "failed to get the reference where HEAD is pointing to: {}",
                e
            ))
        })?;

        let commit = head.peel_to_commit().map_err(|e| {
            GitverError::repository(format!(
                "failed to find latest commit of the current branch: {}",
                e
            ))
        })?;

        if head.is_branch() {
            debug!(
                branch = head.shorthand().unwrap_or("<non-utf8>"),
                tip = %commit.id(),
                "resolved current branch"
            );
        } else {
            debug!(tip = %commit.id(), "HEAD is detached, using its commit as tip");
        }

        Ok(commit.id().into())
    }

    fn walk_commits(&self, from: ObjectId) -> Result<CommitWalk<'_>> {
        let history_err = |e: git2::Error| {
            GitverError::enumeration(format!(
                "failed to get the commit history from the current branch: {}",
                e
            ))
        };

        let mut revwalk = self.repo.revwalk().map_err(history_err)?;
        revwalk.set_sorting(Sort::TIME).map_err(history_err)?;
        revwalk.push(to_oid(from)?).map_err(history_err)?;

        Ok(Box::new(revwalk.map(|oid| {
            oid.map(ObjectId::from).map_err(|e| {
                GitverError::enumeration(format!("failed to iterate over commits: {}", e))
            })
        })))
    }

    fn tag_references(&self) -> Result<Vec<TagReference>> {
        let references = self.repo.references_glob("refs/tags/*").map_err(|e| {
            GitverError::enumeration(format!("failed to get all tag references: {}", e))
        })?;

        let mut tags = Vec::new();
        for reference in references {
            let reference = reference.map_err(|e| {
                GitverError::enumeration(format!("failed to iterate over tags: {}", e))
            })?;

            let (Some(name), Some(target)) = (reference.name(), reference.target()) else {
                trace!("skipping symbolic or non-utf8 tag reference");
                continue;
            };
            tags.push(TagReference::new(name, target.into()));
        }

        Ok(tags)
    }

    fn annotated_tag_target(&self, tag: &TagReference) -> Result<Option<ObjectId>> {
        let object = self.repo.find_object(to_oid(tag.id)?, None).map_err(|e| {
            GitverError::enumeration(format!("failed to read object of tag {}: {}", tag, e))
        })?;

        if object.kind() != Some(ObjectType::Tag) {
            return Ok(None);
        }

        let commit = object.peel_to_commit().map_err(|e| {
            GitverError::enumeration(format!(
                "failed to resolve annotated tag {} to a commit: {}",
                tag, e
            ))
        })?;

        Ok(Some(commit.id().into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git::Repository;
    use tempfile::TempDir;

    #[test]
    fn test_open_missing_path() {
        let temp_dir = TempDir::new().unwrap();
        let result = Git2Repository::open(temp_dir.path().join("missing"));
        assert!(matches!(result, Err(GitverError::RepositoryAccess(_))));
    }

    #[test]
    fn test_open_non_repository() {
        let temp_dir = TempDir::new().unwrap();
        let result = Git2Repository::open(temp_dir.path());
        assert!(matches!(result, Err(GitverError::RepositoryAccess(_))));
    }

    #[test]
    fn test_empty_repository_has_no_tip() {
        let temp_dir = TempDir::new().unwrap();
        Git2Repo::init(temp_dir.path()).unwrap();

        let repo = Git2Repository::open(temp_dir.path()).unwrap();
        assert!(matches!(
            repo.current_branch_tip(),
            Err(GitverError::RepositoryAccess(_))
        ));
        assert!(repo.tag_references().unwrap().is_empty());
    }
}
