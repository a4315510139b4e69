//! Shared test utilities for integration tests.
//!
//! Not all functions are used by every test file, but they're shared across tests.
#![allow(dead_code)]

use std::path::Path;

use git2::{BranchType, Oid, Repository, Signature};

/// A test git repository builder for integration tests.
pub struct TestRepo {
    pub dir: tempfile::TempDir,
    pub repo: Repository,
}

impl TestRepo {
    /// Create a new empty git repository in a temp directory.
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp directory");
        let repo = Repository::init(dir.path()).expect("Failed to init git repo");
        Self { dir, repo }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Get the test signature for commits.
    fn signature(&self) -> Signature<'_> {
        Signature::now("Test User", "test@example.com").expect("Failed to create signature")
    }

    /// Write files into the working tree, stage them and commit. Returns the commit OID.
    pub fn commit_files(&self, message: &str, files: &[(&str, &str)]) -> Oid {
        let mut index = self.repo.index().expect("Failed to get index");

        for (path, content) in files {
            let full_path = self.dir.path().join(path);
            if let Some(parent) = full_path.parent() {
                std::fs::create_dir_all(parent).expect("Failed to create parent dirs");
            }
            std::fs::write(&full_path, content).expect("Failed to write test file");
            index.add_path(Path::new(path)).expect("Failed to add file");
        }

        index.write().expect("Failed to write index");
        self.commit_index(message, &mut index)
    }

    /// Remove files from the working tree and index, then commit.
    pub fn commit_removals(&self, message: &str, paths: &[&str]) -> Oid {
        let mut index = self.repo.index().expect("Failed to get index");

        for path in paths {
            std::fs::remove_file(self.dir.path().join(path)).expect("Failed to remove file");
            index.remove_path(Path::new(path)).expect("Failed to remove from index");
        }

        index.write().expect("Failed to write index");
        self.commit_index(message, &mut index)
    }

    fn commit_index(&self, message: &str, index: &mut git2::Index) -> Oid {
        let sig = self.signature();
        let tree_id = index.write_tree().expect("Failed to write tree");
        let tree = self.repo.find_tree(tree_id).expect("Failed to find tree");

        // Get parent commit if exists
        let parent = self.repo.head().ok().and_then(|h| h.peel_to_commit().ok());
        let parents: Vec<&git2::Commit> = parent.iter().collect();

        self.repo
            .commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
            .expect("Failed to create commit")
    }

    /// Create a merge commit on HEAD joining `other`, reusing HEAD's tree.
    pub fn commit_merge(&self, message: &str, other: Oid) -> Oid {
        let sig = self.signature();
        let head = self
            .repo
            .head()
            .and_then(|h| h.peel_to_commit())
            .expect("Failed to resolve HEAD");
        let other = self.repo.find_commit(other).expect("Failed to find commit");
        let tree = head.tree().expect("Failed to get tree");

        self.repo
            .commit(Some("HEAD"), &sig, &sig, message, &tree, &[&head, &other])
            .expect("Failed to create merge commit")
    }

    /// Create a branch pointing to the given OID.
    pub fn branch(&self, name: &str, oid: Oid) {
        let commit = self.repo.find_commit(oid).expect("Failed to find commit");
        self.repo.branch(name, &commit, false).expect("Failed to create branch");
    }

    /// Point HEAD at an existing branch and check it out.
    pub fn checkout(&self, name: &str) {
        let branch = self
            .repo
            .find_branch(name, BranchType::Local)
            .expect("Failed to find branch");
        let refname = branch
            .get()
            .name()
            .expect("Branch name is not UTF-8")
            .to_string();
        let object = branch.get().peel(git2::ObjectType::Commit).expect("Failed to peel branch");

        self.repo
            .checkout_tree(&object, Some(git2::build::CheckoutBuilder::new().force()))
            .expect("Failed to checkout tree");
        self.repo.set_head(&refname).expect("Failed to set HEAD");
    }

    /// A repository with `develop` at the base commit and HEAD on `feature`
    /// with one additional commit containing `files`.
    pub fn with_feature_branch(files: &[(&str, &str)]) -> Self {
        let test_repo = Self::new();
        let base = test_repo.commit_files("chore: initial commit", &[("README.md", "# Project\n")]);
        test_repo.branch("develop", base);
        test_repo.branch("feature", base);
        test_repo.checkout("feature");
        test_repo.commit_files("feat: add feature work", files);
        test_repo
    }
}
