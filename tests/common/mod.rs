#![allow(dead_code)]

use git2::{Oid, Repository, Signature, Time};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// A throwaway repository whose commits get strictly increasing committer times
pub struct TestRepo {
    pub dir: TempDir,
    pub repo: Repository,
    time: i64,
}

impl TestRepo {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Could not create temp dir");
        let repo = Repository::init(dir.path()).expect("Could not init git repo");

        {
            let mut config = repo.config().expect("Could not get config");
            config
                .set_str("user.name", "Test User")
                .expect("Could not set user.name");
            config
                .set_str("user.email", "test@example.com")
                .expect("Could not set user.email");
        }

        TestRepo {
            dir,
            repo,
            time: 1_600_000_000,
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    fn signature(&mut self) -> Signature<'static> {
        self.time += 60;
        Signature::new("Test User", "test@example.com", &Time::new(self.time, 0))
            .expect("Could not create signature")
    }

    /// Commit on top of HEAD and advance the current branch
    pub fn commit(&mut self, message: &str) -> Oid {
        let parents: Vec<Oid> = self
            .repo
            .head()
            .ok()
            .and_then(|head| head.target())
            .into_iter()
            .collect();
        self.commit_with_parents(Some("HEAD"), message, &parents)
    }

    /// Commit with explicit parents, optionally updating a reference
    pub fn commit_with_parents(
        &mut self,
        update_ref: Option<&str>,
        message: &str,
        parents: &[Oid],
    ) -> Oid {
        let sig = self.signature();
        let content_path = self.path().join("README.md");
        fs::write(&content_path, format!("{}\n", message)).expect("Could not write file");

        let mut index = self.repo.index().expect("Could not get index");
        index
            .add_path(Path::new("README.md"))
            .expect("Could not add file to index");
        index.write().expect("Could not write index");

        let tree_id = index.write_tree().expect("Could not write tree");
        let tree = self.repo.find_tree(tree_id).expect("Could not find tree");

        let parent_commits: Vec<_> = parents
            .iter()
            .map(|oid| self.repo.find_commit(*oid).expect("Could not find parent"))
            .collect();
        let parent_refs: Vec<_> = parent_commits.iter().collect();

        self.repo
            .commit(update_ref, &sig, &sig, message, &tree, &parent_refs)
            .expect("Could not create commit")
    }

    /// Create `count` commits on top of HEAD, returning them oldest first
    pub fn commits(&mut self, count: usize) -> Vec<Oid> {
        (0..count)
            .map(|i| self.commit(&format!("commit {}", i)))
            .collect()
    }

    pub fn annotated_tag(&mut self, name: &str, target: Oid) -> Oid {
        let sig = self.signature();
        let object = self
            .repo
            .find_object(target, None)
            .expect("Could not find object");
        self.repo
            .tag(name, &object, &sig, &format!("Release {}", name), false)
            .expect("Could not create annotated tag")
    }

    pub fn lightweight_tag(&self, name: &str, target: Oid) -> Oid {
        let object = self
            .repo
            .find_object(target, None)
            .expect("Could not find object");
        self.repo
            .tag_lightweight(name, &object, false)
            .expect("Could not create lightweight tag")
    }

    pub fn head(&self) -> Oid {
        self.repo
            .head()
            .expect("Could not get HEAD")
            .target()
            .expect("HEAD has no target")
    }
}
