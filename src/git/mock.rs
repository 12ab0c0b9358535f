use std::collections::HashMap;

use crate::domain::CommitRef;
use crate::error::{GitError, GitResult};
use crate::git::Repository;

/// Mock repository for testing without actual git operations
///
/// Branches map to the tags merged into them; `(ahead, behind)` pairs map to
/// the new commits between them. Each operation can be made to fail.
#[derive(Debug, Default)]
pub struct MockRepository {
    merged_tags: HashMap<String, Vec<String>>,
    new_commits: HashMap<(String, String), Vec<CommitRef>>,
    messages: HashMap<CommitRef, String>,
    fail_tags: bool,
    fail_commits: bool,
}

impl MockRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a tag merged into a branch
    pub fn add_tag(&mut self, branch: impl Into<String>, tag: impl Into<String>) {
        self.merged_tags
            .entry(branch.into())
            .or_default()
            .push(tag.into());
    }

    /// Add a commit that is new on `ahead` relative to `behind`
    pub fn add_commit(
        &mut self,
        ahead: impl Into<String>,
        behind: impl Into<String>,
        id: impl Into<String>,
        message: impl Into<String>,
    ) {
        let commit = CommitRef::new(id);
        self.new_commits
            .entry((ahead.into(), behind.into()))
            .or_default()
            .push(commit.clone());
        self.messages.insert(commit, message.into());
    }

    /// List a commit as new without a retrievable message
    pub fn add_commit_without_message(
        &mut self,
        ahead: impl Into<String>,
        behind: impl Into<String>,
        id: impl Into<String>,
    ) {
        self.new_commits
            .entry((ahead.into(), behind.into()))
            .or_default()
            .push(CommitRef::new(id));
    }

    /// Make the merged-tags query fail
    pub fn fail_tag_listing(&mut self) {
        self.fail_tags = true;
    }

    /// Make the new-commits query fail
    pub fn fail_commit_listing(&mut self) {
        self.fail_commits = true;
    }
}

impl Repository for MockRepository {
    fn list_merged_tags(&self, branch: &str) -> GitResult<Vec<String>> {
        if self.fail_tags {
            return Err(GitError::CommandFailed {
                command: format!("git tag --merged {}", branch),
                status: 129,
                stderr: format!("error: malformed object name {}", branch),
            });
        }

        self.merged_tags
            .get(branch)
            .cloned()
            .ok_or_else(|| GitError::UnknownRef(branch.to_string()))
    }

    fn list_new_commits(&self, ahead: &str, behind: &str) -> GitResult<Vec<CommitRef>> {
        if self.fail_commits {
            return Err(GitError::CommandFailed {
                command: format!("git cherry {} {}", behind, ahead),
                status: 128,
                stderr: format!("fatal: Unknown commit {}", behind),
            });
        }

        Ok(self
            .new_commits
            .get(&(ahead.to_string(), behind.to_string()))
            .cloned()
            .unwrap_or_default())
    }

    fn fetch_message(&self, commit: &CommitRef) -> GitResult<String> {
        self.messages
            .get(commit)
            .cloned()
            .ok_or_else(|| GitError::UnknownRef(commit.to_string()))
    }
}
