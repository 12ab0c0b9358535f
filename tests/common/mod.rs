//! Shared test utilities for integration tests.
//!
//! Not all functions are used by every test file, but they're shared across tests.
#![allow(dead_code)]

use std::path::{Path, PathBuf};

use git2::{Oid, Repository, Signature};

/// Get the path to a config fixture.
pub fn config_fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

/// A test git repository builder for integration tests.
///
/// Commits are written straight into the object database, so any branch can
/// be extended without touching the working tree.
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

    fn signature(&self) -> Signature<'static> {
        Signature::now("Test User", "test@example.com").expect("Failed to create signature")
    }

    /// Commit `files` on top of `parent` and move `update_ref` to the new commit.
    pub fn commit_on(
        &self,
        update_ref: &str,
        parent: Option<Oid>,
        files: &[(&str, &str)],
        message: &str,
    ) -> Oid {
        let parent_commit = parent.map(|oid| self.repo.find_commit(oid).expect("parent"));
        let base_tree = parent_commit.as_ref().map(|c| c.tree().expect("tree"));

        let mut builder = self
            .repo
            .treebuilder(base_tree.as_ref())
            .expect("Failed to create tree builder");
        for &(name, content) in files {
            let blob = self.repo.blob(content.as_bytes()).expect("blob");
            builder
                .insert(name, blob, 0o100644)
                .expect("Failed to insert blob");
        }
        let tree_id = builder.write().expect("Failed to write tree");
        let tree = self.repo.find_tree(tree_id).expect("Failed to find tree");

        let sig = self.signature();
        let parents: Vec<&git2::Commit> = parent_commit.iter().collect();
        self.repo
            .commit(Some(update_ref), &sig, &sig, message, &tree, &parents)
            .expect("Failed to create commit")
    }

    /// Commit on the current HEAD branch.
    pub fn commit(&self, files: &[(&str, &str)], message: &str) -> Oid {
        let parent = self.repo.head().ok().and_then(|h| h.target());
        self.commit_on("HEAD", parent, files, message)
    }

    /// Name of the branch HEAD points at (after the first commit).
    pub fn head_branch(&self) -> String {
        self.repo
            .head()
            .expect("HEAD should exist")
            .shorthand()
            .expect("branch name should be UTF-8")
            .to_string()
    }

    /// Create a lightweight tag.
    pub fn tag(&self, name: &str, oid: Oid) {
        let object = self.repo.find_object(oid, None).expect("object to tag");
        self.repo
            .tag_lightweight(name, &object, false)
            .expect("Failed to create tag");
    }

    /// Create an annotated tag.
    pub fn annotated_tag(&self, name: &str, oid: Oid) {
        let object = self.repo.find_object(oid, None).expect("object to tag");
        self.repo
            .tag(name, &object, &self.signature(), "release", false)
            .expect("Failed to create annotated tag");
    }
}

/// Repository with a released fix cherry-picked onto a maintenance branch.
///
/// ```text
/// HEAD branch:  base (v1.0.0) -- fix: a -- feat: b   (nightly)
///                  \
/// maint:            fix: a, backported (v1.0.1)
/// ```
pub struct ReleaseHistory {
    pub repo: TestRepo,
    pub branch: String,
    pub base: Oid,
    pub fix: Oid,
    pub feat: Oid,
    pub backport: Oid,
}

impl ReleaseHistory {
    pub fn new() -> Self {
        let repo = TestRepo::new();
        let base = repo.commit(&[("README.md", "hello\n")], "chore: initial commit");
        repo.tag("v1.0.0", base);

        let fix = repo.commit(&[("a.txt", "fixed\n")], "fix: correct a");
        let feat = repo.commit(&[("b.txt", "new\n")], "feat: add b\n\nAdds the b file.\n");
        repo.tag("nightly", feat);

        let backport = repo.commit_on(
            "refs/heads/maint",
            Some(base),
            &[("a.txt", "fixed\n")],
            "fix: correct a (backport)",
        );
        repo.annotated_tag("v1.0.1", backport);

        let branch = repo.head_branch();
        ReleaseHistory {
            repo,
            branch,
            base,
            fix,
            feat,
            backport,
        }
    }
}
