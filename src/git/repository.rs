use std::collections::HashSet;
use std::path::Path;

use git2::{Commit, Oid, Repository as Git2Repo, Sort};
use tracing::debug;

use crate::domain::CommitRef;
use crate::error::{GitError, GitResult};

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Open or discover a git repository
    pub fn open<P: AsRef<Path>>(path: P) -> GitResult<Self> {
        let repo = Git2Repo::discover(path)?;

        Ok(Git2Repository { repo })
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2Repository { repo }
    }

    fn resolve_commit(&self, revision: &str) -> GitResult<Commit<'_>> {
        self.repo
            .revparse_single(revision)
            .and_then(|object| object.peel_to_commit())
            .map_err(|e| {
                if e.code() == git2::ErrorCode::NotFound {
                    GitError::UnknownRef(revision.to_string())
                } else {
                    GitError::Git2(e)
                }
            })
    }

    /// Patch id of a commit's change against its first parent
    fn patch_id(&self, commit: &Commit<'_>) -> GitResult<Oid> {
        let tree = commit.tree()?;
        let parent_tree = match commit.parent_count() {
            0 => None,
            _ => Some(commit.parent(0)?.tree()?),
        };
        let old_tree = parent_tree.as_ref();

        let diff = self.repo.diff_tree_to_tree(old_tree, Some(&tree), None)?;
        Ok(diff.patchid(None)?)
    }

    /// Commits reachable from `from` but not from `hidden`, oldest first
    fn walk(&self, from: Oid, hidden: Oid) -> GitResult<Vec<Oid>> {
        let mut revwalk = self.repo.revwalk()?;
        revwalk.set_sorting(Sort::TOPOLOGICAL | Sort::REVERSE)?;
        revwalk.push(from)?;
        revwalk.hide(hidden)?;

        let mut oids = Vec::new();
        for oid in revwalk {
            oids.push(oid?);
        }
        Ok(oids)
    }
}

impl super::Repository for Git2Repository {
    fn list_merged_tags(&self, branch: &str) -> GitResult<Vec<String>> {
        let branch_oid = self.resolve_commit(branch)?.id();

        let mut merged = Vec::new();
        let tags = self.repo.tag_names(None)?;

        for tag_name in tags.iter().flatten() {
            let tag_oid = match self
                .repo
                .find_reference(&format!("refs/tags/{}", tag_name))
                .and_then(|reference| reference.peel_to_commit())
            {
                Ok(commit) => commit.id(),
                Err(e) => {
                    debug!(tag = %tag_name, error = %e, "Tag does not point at a commit");
                    continue;
                }
            };

            if tag_oid == branch_oid || self.repo.graph_descendant_of(branch_oid, tag_oid)? {
                merged.push(tag_name.to_string());
            }
        }

        merged.sort();
        Ok(merged)
    }

    fn list_new_commits(&self, ahead: &str, behind: &str) -> GitResult<Vec<CommitRef>> {
        let ahead_oid = self.resolve_commit(ahead)?.id();
        let behind_oid = self.resolve_commit(behind)?.id();

        let mut upstream_patches = HashSet::new();
        for oid in self.walk(behind_oid, ahead_oid)? {
            let commit = self.repo.find_commit(oid)?;
            if commit.parent_count() <= 1 {
                upstream_patches.insert(self.patch_id(&commit)?);
            }
        }

        let mut commits = Vec::new();
        for oid in self.walk(ahead_oid, behind_oid)? {
            let commit = self.repo.find_commit(oid)?;

            if commit.parent_count() > 1 {
                continue;
            }

            if upstream_patches.contains(&self.patch_id(&commit)?) {
                debug!(commit = %oid, "Equivalent patch already released");
                continue;
            }

            commits.push(CommitRef::new(oid.to_string()));
        }

        Ok(commits)
    }

    fn fetch_message(&self, commit: &CommitRef) -> GitResult<String> {
        let commit = self.resolve_commit(commit.as_str())?;

        Ok(String::from_utf8_lossy(commit.message_bytes()).into_owned())
    }
}
